//! Image pyramid policies and upsampling one pyramid level.

use super::*;

/// Maps rectangles between adjacent levels of an image pyramid.
pub trait PyramidPolicy {
    /// `rect` at the next larger level
    fn rect_up(&self, rect: Rect) -> Rect;
    /// `rect` at the next smaller level
    fn rect_down(&self, rect: Rect) -> Rect;
}

impl<T: PyramidPolicy + ?Sized> PyramidPolicy for &T {
    #[inline(always)]
    fn rect_up(&self, rect: Rect) -> Rect { (**self).rect_up(rect) }
    #[inline(always)]
    fn rect_down(&self, rect: Rect) -> Rect { (**self).rect_down(rect) }
}

#[inline]
fn map_corners(rect: Rect, f: impl Fn(DPoint) -> DPoint) -> Rect {
    if rect.is_empty() {
        return Rect::EMPTY;
    }
    let (tl, br) = (f(rect.tl_corner().into()), f(rect.br_corner().into()));
    Rect::new(Point::from(tl).x, Point::from(tl).y, Point::from(br).x, Point::from(br).y)
}

/// A pyramid whose levels shrink by `(N - 1) / N` per step, `N >= 2`.
///
/// `N = 2` halves each level with the sampling offset of a 5x5 blur-then-decimate downsampler.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PyramidDown<const N: u32>;

impl<const N: u32> PyramidDown<N> {
    const VALID: () = assert!(N >= 2, "a pyramid level must shrink");
    #[inline]
    pub fn point_up(&self, p: DPoint) -> DPoint {
        let () = Self::VALID;
        if N == 2 {
            (p + DPoint::new(1.25, 0.75)) * 2.
        } else {
            p * (N as f64 / (N - 1) as f64)
        }
    }
    #[inline]
    pub fn point_down(&self, p: DPoint) -> DPoint {
        let () = Self::VALID;
        if N == 2 {
            p * 0.5 - DPoint::new(1.25, 0.75)
        } else {
            p * ((N - 1) as f64 / N as f64)
        }
    }
}

impl<const N: u32> PyramidPolicy for PyramidDown<N> {
    #[inline]
    fn rect_up(&self, rect: Rect) -> Rect { map_corners(rect, |p| self.point_up(p)) }
    #[inline]
    fn rect_down(&self, rect: Rect) -> Rect { map_corners(rect, |p| self.point_down(p)) }
}

/// A pyramid with a single level, every rectangle maps to the empty one
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PyramidDisable;

impl PyramidPolicy for PyramidDisable {
    #[inline(always)]
    fn rect_up(&self, _: Rect) -> Rect { Rect::EMPTY }
    #[inline(always)]
    fn rect_down(&self, _: Rect) -> Rect { Rect::EMPTY }
}

/// Upsample `src` by one level of `pyr` into `dst`, using `interp`.
///
/// `dst` is resized to reach the bottom right corner of `pyr.rect_up(src.rect())`, or emptied when `src` is empty
/// or the policy has no level above it.
#[instrument(skip(src, dst, pyr, interp), level = "trace", fields(src = ?src.dimensions()))]
pub fn pyramid_up_with<I, O, Y, K>(src: &I, dst: &mut O, pyr: Y, interp: K)
where
    I: GenericImage,
    O: ResizableImage,
    Y: PyramidPolicy,
    K: Interpolation,
{
    if src.is_empty() {
        debug!("empty source, emptying destination");
        dst.set_size(0, 0);
        return;
    }
    let up = pyr.rect_up(src.rect());
    if up.is_empty() || up.right < 0 || up.bottom < 0 {
        debug!(?up, "no level above, emptying destination");
        dst.set_size(0, 0);
        return;
    }
    dst.set_size(up.right as usize + 1, up.bottom as usize + 1);
    resize_image_with(src, dst, interp);
}

/// [`pyramid_up_with`] using bilinear interpolation
#[inline]
pub fn pyramid_up<I: GenericImage, O: ResizableImage, Y: PyramidPolicy>(src: &I, dst: &mut O, pyr: Y) {
    pyramid_up_with(src, dst, pyr, Bilinear)
}

/// Upsample `img` by one level of `pyr` in place
#[instrument(skip_all, level = "trace")]
pub fn pyramid_up_in_place<I: ResizableImage + Default, Y: PyramidPolicy>(img: &mut I, pyr: Y) {
    let mut tmp = I::default();
    pyramid_up(&*img, &mut tmp, pyr);
    mem::swap(img, &mut tmp);
}
