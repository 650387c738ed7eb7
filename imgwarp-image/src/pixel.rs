//! Scalar, pixel representation and pixel types and traits.
//!
//! A pixel is either grayscale (a bare scalar, e.g. `u8`) or RGB (`[T; 3]`).
//! All per-channel arithmetic happens on [`Weight`]s, and [`assign_pixel`] converts between any two
//! representations through them.
//! ```
//! use imgwarp_image::*;
//! let mut gray = 0u8;
//! assign_pixel(&mut gray, &[10u8, 20, 31]);
//! assert_eq!(gray, 20);
//! let mut rgb = [0f32; 3];
//! assign_pixel(&mut rgb, &7u16);
//! assert_eq!(rgb, [7.; 3]);
//! ```

use super::*;

/// The raw scalar data type of an image channel (e.g. `u8`, `u16`, `f32`, etc.)
pub trait Scalar:
    'static
    + Sealed
    + Clone
    + Copy
    + Send
    + Sync
    + Sized
    + Default
    + PartialOrd
    + ::core::fmt::Debug
    + ::bytemuck::Pod
    + ::num_traits::Num
    + ::num_traits::NumCast
    + ::num_traits::ToPrimitive
{
    /// The `0` value of this scalar type
    const ZERO: Self;
    /// The `1` value of this scalar type
    const ONE: Self;
    /// The maximum value of this scalar type
    const MAX: Self;
    /// The minimum value of this scalar type
    const MIN: Self;
    /// The channel value of a white pixel: `MAX` for integers, `255.0` for floats
    const WHITE: Self;
    /// Whether every value of this type is exactly representable in an `f32` lane
    const FITS_LANE: bool;
    /// self as Weight (float)
    fn weight(self) -> Weight;
    /// Weight (float) as self, integers round half away from zero and saturate at the type bounds
    fn from_weight(weight: Weight) -> Self;
}

macro_rules! impl_Scalar_int {
    ($($t:ty => $lane:literal),*) => {
        $(
            impl Sealed for $t {}
            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;
                const MIN: Self = <$t>::MIN;
                const WHITE: Self = <$t>::MAX;
                const FITS_LANE: bool = $lane;
                #[inline(always)]
                fn weight(self) -> Weight { self as Weight }
                // `as` saturates, and maps NaN to 0
                #[inline(always)]
                fn from_weight(weight: Weight) -> Self { weight.round() as Self }
            }
        )*
    }
}
macro_rules! impl_Scalar_float {
    ($($t:ty => $lane:literal),*) => {
        $(
            impl Sealed for $t {}
            impl Scalar for $t {
                const ZERO: Self = 0.;
                const ONE: Self = 1.;
                const MAX: Self = <$t>::MAX;
                const MIN: Self = <$t>::MIN;
                const WHITE: Self = 255.;
                const FITS_LANE: bool = $lane;
                #[inline(always)]
                fn weight(self) -> Weight { self as Weight }
                #[inline(always)]
                fn from_weight(weight: Weight) -> Self { weight as Self }
            }
        )*
    }
}
impl_Scalar_int!(u8 => true, u16 => true, i16 => true, u32 => false, i32 => false);
impl_Scalar_float!(f32 => true, f64 => false);

/// The color model of a pixel representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ColorModel {
    Grayscale,
    Rgb,
}

/// Per-channel weights of a pixel: [`Weight`] for grayscale, `[Weight; 3]` for RGB.
pub trait WeightRepr: 'static + Sealed + Clone + Copy + Send + Sync + ::core::fmt::Debug + PartialEq {
    const CHANNELS: usize;
    /// All channels `0.0`
    const ZERO: Self;
    fn as_slice(&self) -> &[Weight];
    fn as_slice_mut(&mut self) -> &mut [Weight];
    /// Single channel intensity, the channel mean for RGB
    fn luma(&self) -> Weight;
    /// RGB channels, gray is replicated
    fn rgb(&self) -> [Weight; 3];
    fn from_luma(luma: Weight) -> Self;
    fn from_rgb(rgb: [Weight; 3]) -> Self;
    /// Convert into the channel layout of `W`
    #[inline]
    fn cast<W: WeightRepr>(&self) -> W {
        if W::CHANNELS == Self::CHANNELS {
            let mut w = W::ZERO;
            w.as_slice_mut().copy_from_slice(self.as_slice());
            w
        } else if W::CHANNELS == 1 {
            W::from_luma(self.luma())
        } else {
            W::from_rgb(self.rgb())
        }
    }
}
impl WeightRepr for Weight {
    const CHANNELS: usize = 1;
    const ZERO: Self = 0.;
    #[inline(always)]
    fn as_slice(&self) -> &[Weight] { ::core::slice::from_ref(self) }
    #[inline(always)]
    fn as_slice_mut(&mut self) -> &mut [Weight] { ::core::slice::from_mut(self) }
    #[inline(always)]
    fn luma(&self) -> Weight { *self }
    #[inline(always)]
    fn rgb(&self) -> [Weight; 3] { [*self; 3] }
    #[inline(always)]
    fn from_luma(luma: Weight) -> Self { luma }
    #[inline(always)]
    fn from_rgb([r, g, b]: [Weight; 3]) -> Self { (r + g + b) / 3. }
}
impl WeightRepr for [Weight; 3] {
    const CHANNELS: usize = 3;
    const ZERO: Self = [0.; 3];
    #[inline(always)]
    fn as_slice(&self) -> &[Weight] { self }
    #[inline(always)]
    fn as_slice_mut(&mut self) -> &mut [Weight] { self }
    #[inline(always)]
    fn luma(&self) -> Weight { (self[0] + self[1] + self[2]) / 3. }
    #[inline(always)]
    fn rgb(&self) -> [Weight; 3] { *self }
    #[inline(always)]
    fn from_luma(luma: Weight) -> Self { [luma; 3] }
    #[inline(always)]
    fn from_rgb(rgb: [Weight; 3]) -> Self { rgb }
}

/// Representations of a pixel as an array of scalars
pub trait PixelRepr: 'static + Sealed + Clone + Copy + Send + Sync + Sized + PartialEq + ::core::fmt::Debug + ::bytemuck::Pod {
    /// The scalar type of the pixel
    type Scalar: Scalar;
    /// The number of channels in the pixel (3 for RGB or 1 for grayscale)
    const CHANNELS: usize;
    const MODEL: ColorModel;
    /// The repr with each scalar as 0
    const ZERO: Self;
    /// The repr with each scalar as [`Scalar::WHITE`]
    const WHITE: Self;
    /// Appropriately sized weights for the pixel
    type Weights: WeightRepr;
    /// Returns a slice of the pixel's scalars
    #[inline(always)]
    fn as_slice(&self) -> &[Self::Scalar] { ::bytemuck::cast_slice(::core::slice::from_ref(self)) }
    /// Returns a mutable slice of the pixel's scalars
    #[inline(always)]
    fn as_slice_mut(&mut self) -> &mut [Self::Scalar] { ::bytemuck::cast_slice_mut(::core::slice::from_mut(self)) }
    /// The channels of the pixel as weights
    #[inline]
    fn weights(&self) -> Self::Weights {
        let mut w = Self::Weights::ZERO;
        w.as_slice_mut().iter_mut().zip(self.as_slice()).for_each(|(w, s)| *w = s.weight());
        w
    }
    /// Build a pixel from weights, see [`Scalar::from_weight`]
    #[inline]
    fn from_weights(weights: &Self::Weights) -> Self {
        let mut px = Self::ZERO;
        px.as_slice_mut().iter_mut().zip(weights.as_slice()).for_each(|(s, w)| *s = Self::Scalar::from_weight(*w));
        px
    }
}

/// The building block of the crate, a pixel type that has a `Repr` that defines how this crate represents it
///
/// To access the associated types and constants of your `Repr`, you need to use specifiers like this:
/// ```
/// use imgwarp_image::*;
/// let _: <<[u8; 3] as Pixel>::Repr as PixelRepr>::Scalar = 0u8;
/// ```
/// because Rust does not support default associated types yet (in stable).
pub trait Pixel: 'static + Sized {
    /// The representation of a pixel, a scalar (e.g. `u8`, `f32`) or an RGB triple (e.g. `[u16; 3]`)
    type Repr: PixelRepr;
    /// The default repr to use when creating new images, defaults to [`PixelRepr::ZERO`]
    const DEFAULT: Self::Repr = Self::Repr::ZERO;
}

/// Shorthand for the scalar type of a [`Pixel`]
pub type PixelScalar<P> = <<P as Pixel>::Repr as PixelRepr>::Scalar;

macro_rules! impl_PixelRepr {
    ($($t:ty),*) => {
        $(
            impl PixelRepr for $t {
                type Scalar = $t;
                const CHANNELS: usize = 1;
                const MODEL: ColorModel = ColorModel::Grayscale;
                const ZERO: Self = <$t as Scalar>::ZERO;
                const WHITE: Self = <$t as Scalar>::WHITE;
                type Weights = Weight;
            }
            impl Sealed for [$t; 3] {}
            impl PixelRepr for [$t; 3] {
                type Scalar = $t;
                const CHANNELS: usize = 3;
                const MODEL: ColorModel = ColorModel::Rgb;
                const ZERO: Self = [<$t as Scalar>::ZERO; 3];
                const WHITE: Self = [<$t as Scalar>::WHITE; 3];
                type Weights = [Weight; 3];
            }
            impl Pixel for $t {
                type Repr = $t;
            }
            impl Pixel for [$t; 3] {
                type Repr = [$t; 3];
            }
        )*
    };
}
impl_PixelRepr!(u8, u16, i16, u32, i32, f32, f64);

#[cfg(feature = "image")]
mod compat_image {
    use super::*;
    macro_rules! impl_Pixel_image {
        ($($t:ty),*) => {
            $(
                impl Pixel for ::image::Luma<$t> {
                    type Repr = $t;
                }
                impl Pixel for ::image::Rgb<$t> {
                    type Repr = [$t; 3];
                }
            )*
        };
    }
    impl_Pixel_image!(u8, u16, f32);
}

/// Write `src` into `dst`, converting between color models and scalar types.
///
/// - gray to gray and rgb to rgb copy each channel
/// - gray to rgb replicates the value
/// - rgb to gray takes the channel mean
#[inline]
pub fn assign_pixel<D: PixelRepr, S: PixelRepr>(dst: &mut D, src: &S) { *dst = D::from_weights(&src.weights().cast()); }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_weights_round_and_saturate() {
        assert_eq!(u8::from_weight(2.5), 3);
        assert_eq!(u8::from_weight(2.49), 2);
        assert_eq!(u8::from_weight(-4.), 0);
        assert_eq!(u8::from_weight(300.), 255);
        assert_eq!(i16::from_weight(-2.5), -3);
        assert_eq!(u16::from_weight(Weight::NAN), 0);
        assert_eq!(f32::from_weight(0.25), 0.25);
    }

    #[test]
    fn assignment_between_models() {
        let mut g = 0u8;
        assign_pixel(&mut g, &[1u8, 2, 4]);
        assert_eq!(g, 2);
        let mut rgb = [0u16; 3];
        assign_pixel(&mut rgb, &200u8);
        assert_eq!(rgb, [200; 3]);
        let mut rgb8 = [0u8; 3];
        assign_pixel(&mut rgb8, &[-1f32, 127.5, 1e4]);
        assert_eq!(rgb8, [0, 128, 255]);
        let mut f = 0f64;
        assign_pixel(&mut f, &65535u16);
        assert_eq!(f, 65535.);
    }

    #[test]
    fn white_per_scalar() {
        assert_eq!(<u8 as PixelRepr>::WHITE, 255);
        assert_eq!(<[u16; 3] as PixelRepr>::WHITE, [u16::MAX; 3]);
        assert_eq!(<f32 as PixelRepr>::WHITE, 255.);
        assert_eq!(<[i16; 3] as PixelRepr>::MODEL, ColorModel::Rgb);
    }

    #[test]
    fn slices_cover_channels() {
        let mut px = [1u8, 2, 3];
        px.as_slice_mut()[1] = 9;
        assert_eq!(px.as_slice(), &[1, 9, 3]);
        assert_eq!(px.weights(), [1., 9., 3.]);
        assert_eq!(7i32.as_slice(), &[7]);
    }
}
