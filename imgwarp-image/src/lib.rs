#![doc = include_str!("../README.md")]

// NOTE: prefer to leave as much possible as pub,
// so that users can plug their own image containers into the traits.

mod private {
    /// Sealed trait to prevent external implementations of traits
    pub trait Sealed {}
}
use private::Sealed;
mod error;
pub use crate::error::*;
mod geom;
pub use crate::geom::*;
mod image;
pub use crate::image::*;
mod pixel;
pub use crate::pixel::*;
mod view;
pub use crate::view::*;

/// The maximum size of an image (in bytes) that can be allocated by this library. (4GB)
///
/// Views over caller owned buffers are not limited.
pub const MAX_IMAGE_SIZE: usize = u32::MAX as usize;

/// The type of coefficients (float) used for per-channel arithmetic and pixel assignment
pub type Weight = f64; // | f32;
