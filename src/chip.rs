//! Copying fixed rectangles out of an image.

use super::*;

/// Zero every pixel of `img` outside of `inside`
#[instrument(skip(img), level = "trace")]
pub fn zero_border_pixels<O: GenericImageMut>(img: &mut O, inside: Rect) {
    let inside = inside.intersect(img.rect());
    for y in 0..img.height() {
        let row = img.row_mut(y);
        if inside.is_empty() || (y as i64) < inside.top || (y as i64) > inside.bottom {
            row.fill(O::PixelRepr::ZERO);
            continue;
        }
        let (left, right) = (inside.left as usize, inside.right as usize);
        row[..left].fill(O::PixelRepr::ZERO);
        row[right + 1..].fill(O::PixelRepr::ZERO);
    }
}

/// Copy the pixels of `src` under `location` into `chip`, resized to the dimensions of `location`.
///
/// Parts of `location` outside of `src` come out black. Pixels are converted with [`assign_pixel`], nothing is
/// interpolated.
/// ```
/// use imgwarp::*;
/// let src = Image::<u8>::from_fn(4, 4, |x, y| (1 + x + 4 * y) as u8);
/// let mut chip = Image::<u8>::default();
/// extract_image_chip(&src, Rect::new(2, -1, 4, 0), &mut chip);
/// assert_eq!(chip.pixels(), &[0, 0, 0, 3, 4, 0]);
/// ```
#[instrument(skip(src, chip), level = "trace", fields(src = ?src.dimensions()))]
pub fn extract_image_chip<I: GenericImage, O: ResizableImage>(src: &I, location: Rect, chip: &mut O) {
    chip.set_size(location.width(), location.height());
    let area = location.intersect(src.rect());
    let origin = location.tl_corner();
    let chip_area = area.translate(-origin);
    zero_border_pixels(chip, chip_area);
    if area.is_empty() {
        debug!(?location, "chip does not overlap the source");
        return;
    }
    let (dx, dy) = (chip_area.left as usize, chip_area.top as usize);
    for (i, y) in (area.top..=area.bottom).enumerate() {
        let from = &src.row(y as usize)[area.left as usize..=area.right as usize];
        let to = &mut chip.row_mut(dy + i)[dx..dx + from.len()];
        to.iter_mut().zip(from).for_each(|(d, s)| assign_pixel(d, s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_zeroing() {
        let mut img = Image::<u8>::from_fn(4, 3, |_, _| 9);
        zero_border_pixels(&mut img, Rect::new(1, 1, 2, 5));
        assert_eq!(img.pixels(), &[0, 0, 0, 0, 0, 9, 9, 0, 0, 9, 9, 0]);
        zero_border_pixels(&mut img, Rect::new(7, 7, 9, 9));
        assert!(img.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn chip_inside_copies_exactly() {
        let src = Image::<[u8; 3]>::from_fn(6, 5, |x, y| [x as u8, y as u8, 1]);
        let mut chip = Image::<[u8; 3]>::default();
        extract_image_chip(&src, Rect::new(1, 2, 3, 3), &mut chip);
        assert_eq!(chip.dimensions(), (3, 2));
        assert_eq!(chip.row(1), &[[1, 3, 1], [2, 3, 1], [3, 3, 1]]);
    }

    #[test]
    fn chip_outside_is_black() {
        let src = Image::<u8>::from_fn(4, 4, |_, _| 200);
        let mut chip = Image::<u8>::new(1, 1);
        chip.fill(7);
        extract_image_chip(&src, Rect::new(10, 10, 12, 11), &mut chip);
        assert_eq!(chip.dimensions(), (3, 2));
        assert_eq!(chip.pixels(), &[0; 6]);
    }

    #[test]
    fn chip_converts_pixels() {
        let src = Image::<[u8; 3]>::from_fn(2, 2, |_, _| [30, 60, 90]);
        let mut chip = Image::<f32>::default();
        extract_image_chip(&src, Rect::new(-1, 0, 0, 0), &mut chip);
        assert_eq!(chip.pixels(), &[0., 60.]);
    }
}
