//! Rotation about the image center into a destination sized to fit the whole rotated source.

use super::*;

/// The bounding box of `rect` rotated by `-angle` about its center pixel
fn rotated_bounds(rect: Rect, angle: f64) -> Rect {
    let c = DPoint::from(rect.center());
    let r = AffineTransform::rotation(-angle);
    [rect.tl_corner(), rect.tr_corner(), rect.bl_corner(), rect.br_corner()]
        .into_iter()
        .map(|p| Point::from(r.apply(DPoint::from(p) - c) + c))
        .fold(Rect::EMPTY, |acc, p| acc.extend(p))
}

/// Rotate `src` by `angle` radians into `dst`, which is resized to contain the whole rotated image.
///
/// Returns the transform from `src` coordinates to `dst` coordinates. An empty `src` empties `dst` and returns
/// the identity.
#[instrument(skip(src, dst, interp, background), level = "trace", fields(src = ?src.dimensions()))]
pub fn rotate_image_with_background<I, O, K, B>(src: &I, dst: &mut O, angle: f64, interp: K, background: B) -> AffineTransform
where
    I: GenericImage,
    O: ResizableImage,
    K: Interpolation,
    B: Background,
{
    if src.is_empty() {
        debug!("empty source, emptying destination");
        dst.set_size(0, 0);
        return AffineTransform::identity();
    }
    let bounds = rotated_bounds(src.rect(), angle);
    dst.set_size(bounds.width(), bounds.height());
    let (sc, dc) = (src.rect().dcenter(), dst.rect().dcenter());
    trace!(?bounds, "rotated bounds");
    // destination to source: turn about the destination center, land on the source center
    let to_src = AffineTransform::translation(sc) * AffineTransform::rotation(angle) * AffineTransform::translation(-dc);
    transform_image_with_background(src, dst, interp, to_src, background);
    AffineTransform::translation(dc) * AffineTransform::rotation(-angle) * AffineTransform::translation(-sc)
}

/// [`rotate_image_with_background`] with a black background
#[inline]
pub fn rotate_image_with<I, O, K>(src: &I, dst: &mut O, angle: f64, interp: K) -> AffineTransform
where
    I: GenericImage,
    O: ResizableImage,
    K: Interpolation,
{
    rotate_image_with_background(src, dst, angle, interp, BlackBackground)
}

/// Rotate with [`Quadratic`] interpolation and a black background.
/// ```
/// use imgwarp::*;
/// let src = Image::<u8>::new(7, 3);
/// let mut dst = Image::<u8>::default();
/// let to_dst = rotate_image(&src, &mut dst, ::core::f64::consts::FRAC_PI_2);
/// assert_eq!(dst.dimensions(), (3, 7));
/// assert!((to_dst.apply(DPoint::new(3., 1.)) - DPoint::new(1., 3.)).length() < 1e-9);
/// ```
#[inline]
pub fn rotate_image<I: GenericImage, O: ResizableImage>(src: &I, dst: &mut O, angle: f64) -> AffineTransform {
    rotate_image_with(src, dst, angle, Quadratic)
}

/// Replace a dataset with its rotations by every angle in `angles`, moving each object box along with its image.
///
/// The result holds `angles.len() * images.len()` images, all images rotated by the first angle come first. Boxes
/// keep their size and are re-centered on where their center lands in the rotated image. Include `0.` in `angles`
/// to keep the unrotated images.
/// # Errors
/// If `images` and `objects` differ in length, nothing is modified.
#[instrument(skip_all, level = "debug", fields(angles = angles.len(), images = images.len()))]
pub fn add_image_rotations<I>(angles: &[f64], images: &mut Vec<I>, objects: &mut Vec<Vec<Rect>>) -> Result<()>
where
    I: ResizableImage + Default,
{
    if images.len() != objects.len() {
        return Err(Error::ObjectCountMismatch { images: images.len(), objects: objects.len() });
    }
    let mut rotated = Vec::with_capacity(angles.len() * images.len());
    let mut moved = Vec::with_capacity(rotated.capacity());
    for &angle in angles {
        for (img, rects) in images.iter().zip(objects.iter()) {
            let mut dst = I::default();
            let to_dst = rotate_image(img, &mut dst, angle);
            let rects = rects
                .iter()
                .map(|r| Rect::centered(Point::from(to_dst.apply(DPoint::from(r.center()))), r.width(), r.height()))
                .collect();
            rotated.push(dst);
            moved.push(rects);
        }
    }
    *images = rotated;
    *objects = moved;
    Ok(())
}
