use super::*;

/// Contract violations of the resampling operations.
///
/// These are detected before any pixel is written. Samples that land outside the source are never reported
/// here, they are resolved by a [`Background`] policy.
#[derive(Debug, ::thiserror::Error)]
pub enum Error {
    /// A transform region reaches outside the destination image.
    #[error("region {area:?} is not contained in the destination bounds {bounds:?}")]
    RegionOutOfBounds { area: Rect, bounds: Rect },
    /// A scale factor that is not finite and strictly positive.
    #[error("scale factor must be finite and positive, got {scale}")]
    InvalidScale { scale: f64 },
    /// A dataset with a different number of images and object lists.
    #[error("{images} images but {objects} object lists")]
    ObjectCountMismatch { images: usize, objects: usize },
    /// An image or view could not be built over a buffer.
    #[error(transparent)]
    Image(#[from] ::imgwarp_image::Error),
    /// A config file could not be read.
    #[cfg(feature = "config")]
    #[error("could not read config file: {0}")]
    Io(#[from] ::std::io::Error),
    /// A config file could not be parsed.
    #[cfg(feature = "config")]
    #[error("could not parse config: {0}")]
    Config(#[from] ::toml::de::Error),
}

pub type Result<T, E = Error> = ::core::result::Result<T, E>;
