#![doc = include_str!("../README.md")]

use ::core::mem;

pub use ::imgwarp_image::*;
use ::tracing::{debug, instrument, trace};

mod error;
pub use crate::error::{Error, Result};
mod interpolation;
pub use crate::interpolation::*;
mod background;
pub use crate::background::*;
mod affine;
pub use crate::affine::*;
mod transform;
pub use crate::transform::*;
pub mod resize;
pub use crate::resize::{resize_image, resize_image_by, resize_image_to, resize_image_with, ScaleMapping};
mod rotate;
pub use crate::rotate::*;
mod pyramid;
pub use crate::pyramid::*;
mod chip;
pub use crate::chip::*;
mod config;
pub use crate::config::*;
mod resampler;
pub use crate::resampler::*;
