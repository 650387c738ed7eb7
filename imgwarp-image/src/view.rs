//! Borrowed, stride-aware windows into images.
//!
//! A view holds a slice starting at its first pixel together with its owner's stride, so writes through an
//! [`ImageViewMut`] land directly in the owner's storage. Views built from a rectangle are always clipped to the
//! owner's bounds, an out of range rectangle yields a smaller (possibly empty) view instead of an error.

use super::*;

/// Explicitly immutable image view for use with unowned data
pub struct ImageView<'a, P: Pixel> {
    /// The image data, starting at the first pixel of the view
    pub(crate) data: &'a [PixelScalar<P>],
    /// The pixel width of the view
    pub(crate) width: usize,
    /// The pixel height of the view
    pub(crate) height: usize,
    /// Pixels between row starts in the owner
    pub(crate) stride: usize,
}
/// Explicitly mutable image view for use with unowned data
pub struct ImageViewMut<'a, P: Pixel> {
    /// The image data, starting at the first pixel of the view
    pub(crate) data: &'a mut [PixelScalar<P>],
    /// The pixel width of the view
    pub(crate) width: usize,
    /// The pixel height of the view
    pub(crate) height: usize,
    /// Pixels between row starts in the owner
    pub(crate) stride: usize,
}

/// The clipped region and the scalar range of `data` it covers
#[inline]
fn clip(bounds: Rect, rect: Rect, stride: usize, channels: usize) -> (Rect, ::core::ops::Range<usize>) {
    let area = bounds.intersect(rect);
    if area.is_empty() {
        return (Rect::EMPTY, 0..0);
    }
    let start = (area.top as usize * stride + area.left as usize) * channels;
    // intersecting with the owner bounds keeps this in range
    let len = spanned_len(area.width(), area.height(), stride, channels).unwrap_or(0);
    (area, start..start + len)
}

/// A read only view of `rect` within `img`, clipped to the image bounds.
/// ```
/// use imgwarp_image::*;
/// let img = Image::<u8>::from_fn(4, 4, |x, y| (x + 4 * y) as u8);
/// let v = sub_image(&img, Rect::new(2, 1, 5, 2));
/// assert_eq!(v.dimensions(), (2, 2));
/// assert_eq!(v.row(1), &[10, 11]);
/// assert!(sub_image(&img, Rect::new(9, 9, 12, 12)).is_empty());
/// ```
pub fn sub_image<I: GenericImage>(img: &I, rect: Rect) -> ImageView<'_, I::Pixel> {
    let (area, range) = clip(img.rect(), rect, img.stride(), I::PixelRepr::CHANNELS);
    ImageView { data: &img.data()[range], width: area.width(), height: area.height(), stride: img.stride() }
}

/// A mutable view of `rect` within `img`, clipped to the image bounds.
pub fn sub_image_mut<I: GenericImageMut>(img: &mut I, rect: Rect) -> ImageViewMut<'_, I::Pixel> {
    let stride = img.stride();
    let (area, range) = clip(img.rect(), rect, stride, I::PixelRepr::CHANNELS);
    ImageViewMut { data: &mut img.data_mut()[range], width: area.width(), height: area.height(), stride }
}

/// Checks a raw buffer description and returns the number of scalars it spans
#[inline]
/// The buffer length spanned by the rows and the view dimensions, a view without pixels is always `0x0`
fn checked_raw_len<P: Pixel>(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(usize, usize, usize), Error> {
    if stride < width {
        return Err(Error::InvalidStride { width, stride });
    }
    if width == 0 || height == 0 {
        return Ok((0, 0, 0));
    }
    match spanned_len(width, height, stride, P::Repr::CHANNELS) {
        Some(expected) if expected <= len => Ok((expected, width, height)),
        expected => Err(Error::BufferTooSmall { expected: expected.unwrap_or(usize::MAX), actual: len }),
    }
}

/// A read only view over a caller provided buffer of `height` rows spaced `stride` pixels apart.
/// # Errors
/// If `stride < width` or the buffer is too short for the described rows
pub fn sub_image_raw<P: Pixel>(
    data: &[PixelScalar<P>],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<ImageView<'_, P>, Error> {
    let (len, width, height) = checked_raw_len::<P>(data.len(), width, height, stride)?;
    Ok(ImageView { data: &data[..len], width, height, stride })
}

/// A mutable view over a caller provided buffer of `height` rows spaced `stride` pixels apart.
/// # Errors
/// If `stride < width` or the buffer is too short for the described rows
pub fn sub_image_raw_mut<P: Pixel>(
    data: &mut [PixelScalar<P>],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<ImageViewMut<'_, P>, Error> {
    let (len, width, height) = checked_raw_len::<P>(data.len(), width, height, stride)?;
    Ok(ImageViewMut { data: &mut data[..len], width, height, stride })
}

impl<'a, P: Pixel> ImageView<'a, P> {
    /// A view of `rect` within this view, clipped to its bounds
    #[inline]
    pub fn sub_view(&self, rect: Rect) -> ImageView<'a, P> {
        let (area, range) = clip(self.rect(), rect, self.stride, P::Repr::CHANNELS);
        let data: &'a [PixelScalar<P>] = self.data;
        ImageView { data: &data[range], width: area.width(), height: area.height(), stride: self.stride }
    }
}
impl<P: Pixel> Clone for ImageView<'_, P> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}
impl<P: Pixel> Copy for ImageView<'_, P> {}
impl<'a, P: Pixel> ImageViewMut<'a, P> {
    /// Reborrow as a read only view
    #[inline]
    pub fn as_view(&self) -> ImageView<'_, P> {
        ImageView { data: &*self.data, width: self.width, height: self.height, stride: self.stride }
    }
}
impl<'a, P: Pixel> From<ImageViewMut<'a, P>> for ImageView<'a, P> {
    #[inline(always)]
    fn from(v: ImageViewMut<'a, P>) -> Self { ImageView { data: v.data, width: v.width, height: v.height, stride: v.stride } }
}
impl<'a, P: Pixel> From<&'a Image<P>> for ImageView<'a, P> {
    #[inline(always)]
    fn from(value: &'a Image<P>) -> Self { value.view() }
}
impl<'a, P: Pixel> From<&'a mut Image<P>> for ImageViewMut<'a, P> {
    #[inline(always)]
    fn from(value: &'a mut Image<P>) -> Self { value.view_mut() }
}

impl<'a, P: Pixel> GenericImage for ImageView<'a, P> {
    type Scalar = PixelScalar<P>;
    type PixelRepr = P::Repr;
    type Pixel = P;
    #[inline(always)]
    fn width(&self) -> usize { self.width }
    #[inline(always)]
    fn height(&self) -> usize { self.height }
    #[inline(always)]
    fn stride(&self) -> usize { self.stride }
    #[inline(always)]
    fn data(&self) -> &[Self::Scalar] { self.data }
}
impl<'a, P: Pixel> GenericImage for ImageViewMut<'a, P> {
    type Scalar = PixelScalar<P>;
    type PixelRepr = P::Repr;
    type Pixel = P;
    #[inline(always)]
    fn width(&self) -> usize { self.width }
    #[inline(always)]
    fn height(&self) -> usize { self.height }
    #[inline(always)]
    fn stride(&self) -> usize { self.stride }
    #[inline(always)]
    fn data(&self) -> &[Self::Scalar] { &*self.data }
}
impl<'a, P: Pixel> GenericImageMut for ImageViewMut<'a, P> {
    #[inline(always)]
    fn data_mut(&mut self) -> &mut [Self::Scalar] { &mut *self.data }
}

impl<P: Pixel> ::core::fmt::Debug for ImageView<'_, P> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("ImageView")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}
impl<P: Pixel> ::core::fmt::Debug for ImageViewMut<'_, P> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("ImageViewMut")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish_non_exhaustive()
    }
}
