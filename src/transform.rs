//! The generic transform engine every other operation reduces to.
//!
//! For each destination pixel `(x, y)` the engine maps `(x, y)` into source space, samples the source there and
//! writes the converted sample, or applies the background policy when the kernel misses.

use super::*;

/// Maps continuous destination coordinates to source coordinates.
pub trait PointMapping {
    fn map_point(&self, p: DPoint) -> DPoint;
}
impl<F: Fn(DPoint) -> DPoint> PointMapping for F {
    #[inline(always)]
    fn map_point(&self, p: DPoint) -> DPoint { self(p) }
}
impl PointMapping for AffineTransform {
    #[inline(always)]
    fn map_point(&self, p: DPoint) -> DPoint { self.apply(p) }
}

/// Transform the pixels of `area` in `dst`, leaving the rest untouched.
/// # Errors
/// [`Error::RegionOutOfBounds`] if `area` is not inside `dst`, nothing is written in that case.
#[instrument(skip_all, level = "trace", fields(area = ?area))]
pub fn transform_image_region<I, O, K, M, B>(
    src: &I,
    dst: &mut O,
    interp: K,
    map: M,
    background: B,
    area: Rect,
) -> Result<()>
where
    I: GenericImage,
    O: GenericImageMut,
    K: Interpolation,
    M: PointMapping,
    B: Background,
{
    let bounds = dst.rect();
    if !bounds.contains_rect(area) {
        return Err(Error::RegionOutOfBounds { area, bounds });
    }
    transform_area(src, dst, &interp, &map, &background, area);
    Ok(())
}

/// Transform every pixel of `dst`
#[instrument(skip_all, level = "trace", fields(src = ?src.dimensions(), dst = ?dst.dimensions()))]
pub fn transform_image_with_background<I, O, K, M, B>(src: &I, dst: &mut O, interp: K, map: M, background: B)
where
    I: GenericImage,
    O: GenericImageMut,
    K: Interpolation,
    M: PointMapping,
    B: Background,
{
    let area = dst.rect();
    transform_area(src, dst, &interp, &map, &background, area);
}

/// Transform every pixel of `dst`, misses become black
/// ```
/// use imgwarp::*;
/// let src = Image::<u8>::from_fn(3, 3, |x, y| (x + 3 * y) as u8);
/// let mut dst = Image::<u8>::new(3, 3);
/// // mirror horizontally
/// transform_image(&src, &mut dst, NearestNeighbor, |p: DPoint| DPoint::new(2. - p.x, p.y));
/// assert_eq!(dst.row(1), &[5, 4, 3]);
/// ```
#[inline]
pub fn transform_image<I, O, K, M>(src: &I, dst: &mut O, interp: K, map: M)
where
    I: GenericImage,
    O: GenericImageMut,
    K: Interpolation,
    M: PointMapping,
{
    transform_image_with_background(src, dst, interp, map, BlackBackground)
}

/// `area` must already be inside `dst`
pub(crate) fn transform_area<I, O, K, M, B>(src: &I, dst: &mut O, interp: &K, map: &M, background: &B, area: Rect)
where
    I: GenericImage,
    O: GenericImageMut,
    K: Interpolation,
    M: PointMapping,
    B: Background,
{
    if area.is_empty() {
        return;
    }
    for y in area.top..=area.bottom {
        let row = dst.row_mut(y as usize);
        for x in area.left..=area.right {
            let px = &mut row[x as usize];
            match interp.interpolate(src, map.map_point(DPoint::new(x as f64, y as f64))) {
                Some(sample) => *px = O::PixelRepr::from_weights(&sample.cast()),
                None => background.apply(px),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_outside_destination_is_rejected_untouched() {
        let src = Image::<u8>::from_fn(4, 4, |_, _| 9);
        let mut dst = Image::<u8>::new(4, 4);
        dst.fill(1);
        let err = transform_image_region(&src, &mut dst, NearestNeighbor, |p: DPoint| p, BlackBackground, Rect::new(2, 2, 4, 3));
        assert!(matches!(err, Err(Error::RegionOutOfBounds { bounds, .. }) if bounds == Rect::from_size(4, 4)));
        assert!(dst.pixels().iter().all(|&v| v == 1));
    }

    #[test]
    fn region_only_writes_inside() {
        let src = Image::<u8>::from_fn(4, 4, |x, y| (x + 4 * y) as u8);
        let mut dst = Image::<u8>::new(4, 4);
        dst.fill(100);
        transform_image_region(&src, &mut dst, NearestNeighbor, |p: DPoint| p, BlackBackground, Rect::new(1, 1, 2, 2)).unwrap();
        assert_eq!(dst.row(0), &[100; 4]);
        assert_eq!(dst.row(1), &[100, 5, 6, 100]);
        assert_eq!(dst.row(2), &[100, 9, 10, 100]);
        assert!(transform_image_region(&src, &mut dst, NearestNeighbor, |p: DPoint| p, BlackBackground, Rect::EMPTY).is_ok());
    }

    #[test]
    fn misses_use_background() {
        let src = Image::<[u8; 3]>::from_fn(2, 2, |_, _| [1, 2, 3]);
        let mut dst = Image::<[u8; 3]>::new(3, 1);
        let shift = |p: DPoint| DPoint::new(p.x - 1., p.y);
        transform_image_with_background(&src, &mut dst, NearestNeighbor, shift, WhiteBackground);
        assert_eq!(dst.row(0), &[[255; 3], [1, 2, 3], [1, 2, 3]]);
        dst.fill([7; 3]);
        transform_image_with_background(&src, &mut dst, NearestNeighbor, shift, NoBackground);
        assert_eq!(dst.row(0)[0], [7; 3]);
        transform_image(&src, &mut dst, NearestNeighbor, shift);
        assert_eq!(dst.row(0)[0], [0; 3]);
    }

    #[test]
    fn converts_to_destination_pixel() {
        let src = Image::<[u8; 3]>::from_fn(2, 1, |x, _| [x as u8 * 30, 0, 0]);
        let mut dst = Image::<f32>::new(2, 1);
        transform_image(&src, &mut dst, NearestNeighbor, AffineTransform::identity());
        assert_eq!(dst.row(0), &[0., 10.]);
    }

    #[test]
    fn far_mappings_fill_background() {
        let src = Image::<u8>::from_fn(5, 5, |_, _| 9);
        let mut dst = Image::<u8>::new(4, 2);
        dst.fill(1);
        transform_image(&src, &mut dst, Quadratic, |p: DPoint| DPoint::new(p.x * 1e19, p.y));
        assert_eq!(dst.row(1), &[0, 0, 0, 0]);
        transform_image(&src, &mut dst, Quadratic, |p: DPoint| DPoint::new(p.x - 1e19, p.y + 1.));
        assert!(dst.pixels().iter().all(|&v| v == 0));
    }
}
