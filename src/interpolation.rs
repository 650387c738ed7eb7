//! Interpolation kernels: sample a source image at a continuous coordinate.
//!
//! A kernel returns the per-channel [`Weights`](PixelRepr::Weights) of the sample, or `None` when the neighborhood it
//! needs is not inside the source. Misses are not errors, callers resolve them with a [`Background`] policy.

use super::*;

/// The weights of a sample taken from an image of type `I`
pub type SampleOf<I> = <<I as GenericImage>::PixelRepr as PixelRepr>::Weights;

/// A sampling kernel
pub trait Interpolation {
    /// Sample `img` at `p`, `None` if the kernel's neighborhood around `p` leaves the image.
    fn interpolate<I: GenericImage>(&self, img: &I, p: DPoint) -> Option<SampleOf<I>>;
    /// The built-in kernel this is, if any. Resize uses it to pick its specialized bilinear path.
    #[inline]
    fn kind(&self) -> Option<InterpolationKind> { None }
}

impl<K: Interpolation + ?Sized> Interpolation for &K {
    #[inline(always)]
    fn interpolate<I: GenericImage>(&self, img: &I, p: DPoint) -> Option<SampleOf<I>> { (**self).interpolate(img, p) }
    #[inline(always)]
    fn kind(&self) -> Option<InterpolationKind> { (**self).kind() }
}

/// Blend `N` taps channel by channel
#[inline(always)]
pub(crate) fn per_channel<W: WeightRepr, const N: usize>(taps: [W; N], f: impl Fn([Weight; N]) -> Weight) -> W {
    let mut out = W::ZERO;
    for (c, o) in out.as_slice_mut().iter_mut().enumerate() {
        *o = f(taps.map(|t| t.as_slice()[c]));
    }
    out
}

/// Takes the pixel at the rounded position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NearestNeighbor;

impl Interpolation for NearestNeighbor {
    #[inline]
    fn interpolate<I: GenericImage>(&self, img: &I, p: DPoint) -> Option<SampleOf<I>> {
        if !p.is_finite() {
            return None;
        }
        let pt = Point::from(p);
        if !img.rect().contains(pt) {
            return None;
        }
        Some(img.row(pt.y as usize)[pt.x as usize].weights())
    }
    #[inline]
    fn kind(&self) -> Option<InterpolationKind> { Some(InterpolationKind::Nearest) }
}

/// Blends the 2x2 neighborhood below and to the right of the floored position.
///
/// Rejects any position whose right or bottom neighbor is outside the image, including positions exactly on the
/// last column or row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bilinear;

impl Interpolation for Bilinear {
    #[inline]
    fn interpolate<I: GenericImage>(&self, img: &I, p: DPoint) -> Option<SampleOf<I>> {
        if !p.is_finite() {
            return None;
        }
        let (left, top) = (p.x.floor(), p.y.floor());
        if left < 0. || top < 0. || left + 1. >= img.width() as f64 || top + 1. >= img.height() as f64 {
            return None;
        }
        let (lr, tb) = (p.x - left, p.y - top);
        let (l, t) = (left as usize, top as usize);
        let (upper, lower) = (img.row(t), img.row(t + 1));
        let taps = [upper[l].weights(), upper[l + 1].weights(), lower[l].weights(), lower[l + 1].weights()];
        Some(per_channel(taps, |[tl, tr, bl, br]| (1. - tb) * ((1. - lr) * tl + lr * tr) + tb * ((1. - lr) * bl + lr * br)))
    }
    #[inline]
    fn kind(&self) -> Option<InterpolationKind> { Some(InterpolationKind::Bilinear) }
}

/// Fits `a*x + b*y + c*x^2 + d*x*y + e*y^2 + f` to the 3x3 neighborhood of the rounded position and evaluates it
/// at the remaining fractional offset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quadratic;

impl Quadratic {
    /// The fitted surface evaluated at `(x, y)`, taps in row-major order
    #[inline]
    fn eval([tl, tm, tr, ml, mm, mr, bl, bm, br]: [Weight; 9], x: Weight, y: Weight) -> Weight {
        let a = (tr + mr + br - tl - ml - bl) / 6.;
        let b = (bl + bm + br - tl - tm - tr) / 6.;
        let c = (tl + tr + ml + mr + bl + br) / 6. - (tm + mm + bm) / 3.;
        let d = (tl - tr - bl + br) / 4.;
        let e = (tl + tm + tr + bl + bm + br) / 6. - (ml + mm + mr) / 3.;
        let f = 2. * (tm + ml + mr + bm) / 9. - (tl + tr + bl + br) / 9. + 5. * mm / 9.;
        a * x + b * y + c * x * x + d * x * y + e * y * y + f
    }
}

impl Interpolation for Quadratic {
    #[inline]
    fn interpolate<I: GenericImage>(&self, img: &I, p: DPoint) -> Option<SampleOf<I>> {
        if !p.is_finite() {
            return None;
        }
        let pt = Point::from(p);
        if !img.rect().contains_rect(Rect::from_point(pt).grow(1)) {
            return None;
        }
        let (x, y) = (pt.x as usize, pt.y as usize);
        let (dx, dy) = (p.x - pt.x as f64, p.y - pt.y as f64);
        let (top, mid, bot) = (img.row(y - 1), img.row(y), img.row(y + 1));
        let taps = [
            top[x - 1].weights(),
            top[x].weights(),
            top[x + 1].weights(),
            mid[x - 1].weights(),
            mid[x].weights(),
            mid[x + 1].weights(),
            bot[x - 1].weights(),
            bot[x].weights(),
            bot[x + 1].weights(),
        ];
        Some(per_channel(taps, |t| Self::eval(t, dx, dy)))
    }
    #[inline]
    fn kind(&self) -> Option<InterpolationKind> { Some(InterpolationKind::Quadratic) }
}

/// Dynamic interpolation kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum InterpolationKind {
    Nearest,
    #[default]
    Bilinear,
    Quadratic,
}
impl InterpolationKind {
    #[inline]
    pub fn cycle(&self) -> InterpolationKind {
        match self {
            Self::Nearest => Self::Bilinear,
            Self::Bilinear => Self::Quadratic,
            Self::Quadratic => Self::Nearest,
        }
    }
}
impl From<u8> for InterpolationKind {
    fn from(i: u8) -> Self {
        match i {
            0 => Self::Nearest,
            1 => Self::Bilinear,
            2 => Self::Quadratic,
            _ => Self::Nearest,
        }
    }
}
impl Interpolation for InterpolationKind {
    #[inline]
    fn interpolate<I: GenericImage>(&self, img: &I, p: DPoint) -> Option<SampleOf<I>> {
        match self {
            Self::Nearest => NearestNeighbor.interpolate(img, p),
            Self::Bilinear => Bilinear.interpolate(img, p),
            Self::Quadratic => Quadratic.interpolate(img, p),
        }
    }
    #[inline(always)]
    fn kind(&self) -> Option<InterpolationKind> { Some(*self) }
}
