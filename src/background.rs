//! Policies for destination pixels whose source sample missed.

use super::*;

/// Applied to a destination pixel when its interpolation kernel reports a miss.
pub trait Background {
    fn apply<R: PixelRepr>(&self, px: &mut R);
}

impl<B: Background + ?Sized> Background for &B {
    #[inline(always)]
    fn apply<R: PixelRepr>(&self, px: &mut R) { (**self).apply(px) }
}

/// Every channel set to zero
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlackBackground;
impl Background for BlackBackground {
    #[inline(always)]
    fn apply<R: PixelRepr>(&self, px: &mut R) { *px = R::ZERO; }
}

/// Every channel set to [`Scalar::WHITE`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WhiteBackground;
impl Background for WhiteBackground {
    #[inline(always)]
    fn apply<R: PixelRepr>(&self, px: &mut R) { *px = R::WHITE; }
}

/// Leaves the pixel as it was, for destinations that were filled beforehand
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoBackground;
impl Background for NoBackground {
    #[inline(always)]
    fn apply<R: PixelRepr>(&self, _: &mut R) {}
}

/// Dynamic background policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum BackgroundKind {
    #[default]
    Black,
    White,
    /// See [`NoBackground`]
    Keep,
}
impl Background for BackgroundKind {
    #[inline]
    fn apply<R: PixelRepr>(&self, px: &mut R) {
        match self {
            Self::Black => BlackBackground.apply(px),
            Self::White => WhiteBackground.apply(px),
            Self::Keep => NoBackground.apply(px),
        }
    }
}
