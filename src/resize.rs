//! Resizing through a per-axis scale mapping.
//!
//! The scale along each axis is `(src - 1) / max(dst - 1, 1)`, so the corner pixels of both images line up exactly.
//!
//! Bilinear resizing does not go through the generic engine. It clamps the right and bottom neighbors to the last
//! column and row instead of rejecting them, so it never produces background pixels. The [`Bilinear`] kernel used by
//! [`transform_image`] does reject them, which blackens the last column and row whenever they map exactly onto the
//! source edge. Both behaviors are intentional.
//!
//! When source and destination share a pixel type whose scalars fit in an `f32`, rows are resampled four columns
//! at a time (see [`lanes`]); any other combination takes a clamped `f64` path that converts pixels on the way.

use super::*;
use crate::interpolation::per_channel;

pub mod lanes;

/// Scales destination coordinates into source coordinates, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapping {
    x_scale: f64,
    y_scale: f64,
}

impl ScaleMapping {
    #[inline]
    pub const fn new(x_scale: f64, y_scale: f64) -> Self { Self { x_scale, y_scale } }
    /// The mapping that resizes an image of `src` dimensions to `dst` dimensions
    #[inline]
    pub fn for_resize((sw, sh): (usize, usize), (dw, dh): (usize, usize)) -> Self {
        let scale = |s: usize, d: usize| (s as f64 - 1.) / d.saturating_sub(1).max(1) as f64;
        Self::new(scale(sw, dw), scale(sh, dh))
    }
    #[inline(always)]
    pub fn x_scale(&self) -> f64 { self.x_scale }
    #[inline(always)]
    pub fn y_scale(&self) -> f64 { self.y_scale }
}

impl PointMapping for ScaleMapping {
    #[inline(always)]
    fn map_point(&self, p: DPoint) -> DPoint { DPoint::new(p.x * self.x_scale, p.y * self.y_scale) }
}

/// One resampling position along an axis: the two neighbors to blend and the weight of the far one.
///
/// Both neighbors are clamped to the axis, on the last index `far == near`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    pub near: usize,
    pub far: usize,
    pub frac: f64,
}

impl Tap {
    /// The tap for output index `i` along an axis of `len > 0` pixels
    #[inline]
    pub fn new(i: usize, scale: f64, len: usize) -> Self {
        let pos = i as f64 * scale;
        let near = (pos.floor().max(0.) as usize).min(len - 1);
        Self { near, far: (near + 1).min(len - 1), frac: pos - near as f64 }
    }
    /// Taps for every output index of an axis
    #[inline]
    pub fn axis(out_len: usize, scale: f64, len: usize) -> Vec<Tap> { (0..out_len).map(|i| Self::new(i, scale, len)).collect() }
}

/// Fill `dst` with `src` resized to the dimensions of `dst`, using `interp`.
///
/// Built-in bilinear kernels take the clamped bilinear paths, everything else goes through the generic engine with
/// a black background.
#[instrument(skip_all, level = "trace", fields(src = ?src.dimensions(), dst = ?dst.dimensions()))]
pub fn resize_image_with<I, O, K>(src: &I, dst: &mut O, interp: K)
where
    I: GenericImage,
    O: GenericImageMut,
    K: Interpolation,
{
    if interp.kind() == Some(InterpolationKind::Bilinear) {
        return resize_bilinear(src, dst);
    }
    let map = ScaleMapping::for_resize(src.dimensions(), dst.dimensions());
    debug!(?map, "resizing through the transform engine");
    transform_image(src, dst, interp, map);
}

/// Fill `dst` with `src` resized bilinearly to the dimensions of `dst`.
/// ```
/// use imgwarp::*;
/// let src = Image::<u8>::from_fn(3, 1, |x, _| (x * 100) as u8);
/// let mut dst = Image::<u8>::new(5, 1);
/// resize_image(&src, &mut dst);
/// assert_eq!(dst.row(0), &[0, 50, 100, 150, 200]);
/// ```
#[instrument(skip_all, level = "trace", fields(src = ?src.dimensions(), dst = ?dst.dimensions()))]
pub fn resize_image<I: GenericImage, O: GenericImageMut>(src: &I, dst: &mut O) { resize_bilinear(src, dst) }

fn resize_bilinear<I: GenericImage, O: GenericImageMut>(src: &I, dst: &mut O) {
    if src.is_empty() || dst.is_empty() {
        debug!("empty image, nothing to resize");
        return;
    }
    let map = ScaleMapping::for_resize(src.dimensions(), dst.dimensions());
    match src.view_as::<O::Pixel>() {
        Some(view) if <O::Scalar as Scalar>::FITS_LANE => {
            trace!("lane path");
            lanes::resize(&view, dst, map)
        }
        _ => {
            trace!("clamped scalar path");
            resize_clamped(src, dst, map)
        }
    }
}

/// Bilinear resize in `f64` between any two pixel types
fn resize_clamped<I: GenericImage, O: GenericImageMut>(src: &I, dst: &mut O, map: ScaleMapping) {
    let cols = Tap::axis(dst.width(), map.x_scale(), src.width());
    for r in 0..dst.height() {
        let y = Tap::new(r, map.y_scale(), src.height());
        let (upper, lower, tb) = (src.row(y.near), src.row(y.far), y.frac);
        for (px, x) in dst.row_mut(r).iter_mut().zip(&cols) {
            let lr = x.frac;
            let taps = [upper[x.near].weights(), upper[x.far].weights(), lower[x.near].weights(), lower[x.far].weights()];
            let sample = per_channel(taps, |[tl, tr, bl, br]| {
                (1. - tb) * ((1. - lr) * tl + lr * tr) + tb * ((1. - lr) * bl + lr * br)
            });
            *px = O::PixelRepr::from_weights(&sample.cast());
        }
    }
}

/// Resize `img` in place by `scale`, to `round(scale * width)` x `round(scale * height)`.
/// # Errors
/// [`Error::InvalidScale`] unless `scale` is finite and positive, `img` is untouched in that case.
#[instrument(skip(img), level = "trace")]
pub fn resize_image_by<I: ResizableImage + Default>(scale: f64, img: &mut I) -> Result<()> {
    let (w, h) = scaled_size(scale, img.dimensions())?;
    resize_image_to(img, w, h);
    Ok(())
}

/// `(width, height)` scaled by `scale` and rounded
#[inline]
pub(crate) fn scaled_size(scale: f64, (w, h): (usize, usize)) -> Result<(usize, usize)> {
    if !(scale.is_finite() && scale > 0.) {
        return Err(Error::InvalidScale { scale });
    }
    Ok(((scale * w as f64).round() as usize, (scale * h as f64).round() as usize))
}

/// Resize `img` in place to `width` x `height`, bilinearly through a temporary image.
#[instrument(skip(img), level = "trace")]
pub fn resize_image_to<I: ResizableImage + Default>(img: &mut I, width: usize, height: usize) {
    let mut tmp = I::default();
    tmp.set_size(width, height);
    resize_image(&*img, &mut tmp);
    mem::swap(img, &mut tmp);
}
