//! Owned images and the capability traits shared with views.
//!
//! Every image is row-major. Row `y` starts `y * stride` pixels into the data, where `stride >= width`;
//! owned images are always packed (`stride == width`).

use super::*;

const OVERFLOW_PANIC_MSG: &str = "imgwarp_image image overflow, imgwarp_image does not directly support images larger than 4GB";
const CAST_PANIC_MSG: &str = "imgwarp_image image byte cast error, please report this to us with your platform information";

/// Panics if the given dimensions would overflow the maximum image size.
#[inline]
fn checked_pixels_len<P: Pixel>(width: usize, height: usize) -> usize {
    let len = width.checked_mul(height).expect(OVERFLOW_PANIC_MSG);
    if len.checked_mul(::core::mem::size_of::<P::Repr>()).expect(OVERFLOW_PANIC_MSG) > MAX_IMAGE_SIZE {
        panic!("{}", OVERFLOW_PANIC_MSG);
    }
    len
}
/// Cast a slice of scalars to a slice of pixel representations
#[inline]
pub(crate) fn pixelate<R: PixelRepr>(data: &[R::Scalar]) -> &[R] {
    ::bytemuck::try_cast_slice::<R::Scalar, R>(data).expect(CAST_PANIC_MSG)
}
/// Cast a slice of scalars to a slice of pixel representations
#[inline]
pub(crate) fn pixelate_mut<R: PixelRepr>(data: &mut [R::Scalar]) -> &mut [R] {
    ::bytemuck::try_cast_slice_mut::<R::Scalar, R>(data).expect(CAST_PANIC_MSG)
}
/// Cast a boxed slice of pixel representations to a boxed slice of scalars
#[inline]
pub(crate) fn unpixelate_box<R: PixelRepr>(pixels: Box<[R]>) -> Box<[R::Scalar]> {
    ::bytemuck::try_cast_slice_box::<R, R::Scalar>(pixels).unwrap_or_else(|(e, _)| panic!("{} : {}", CAST_PANIC_MSG, e))
}

/// Number of scalars spanned by `height` rows of `width` pixels spaced `stride` pixels apart
#[inline]
pub(crate) fn spanned_len(width: usize, height: usize, stride: usize, channels: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }
    (height - 1).checked_mul(stride)?.checked_add(width)?.checked_mul(channels)
}

/// Any type that can be used as container for flat image pixel data within this library.
/// (e.g. Vec, Box, etc.)
pub trait Container<P: Pixel>: Into<Box<[PixelScalar<P>]>> + ::core::ops::Deref<Target = [PixelScalar<P>]> {}
impl<P: Pixel, C: Into<Box<[PixelScalar<P>]>> + ::core::ops::Deref<Target = [PixelScalar<P>]>> Container<P> for C {}

/// Read access to an image with a pixel type, implemented by owned images and views alike.
///
/// Implementors must keep `data()` consistent with the dimensions: when the image is not empty it holds at least
/// `((height - 1) * stride + width) * channels` scalars, starting at the first pixel.
pub trait GenericImage {
    type Scalar: Scalar;
    type PixelRepr: PixelRepr<Scalar = Self::Scalar>;
    type Pixel: Pixel<Repr = Self::PixelRepr>;
    /// Pixel width of the image
    fn width(&self) -> usize;
    /// Pixel height of the image
    fn height(&self) -> usize;
    /// Distance in pixels between the starts of two consecutive rows
    fn stride(&self) -> usize;
    /// Get a reference to the underlying raw data.
    fn data(&self) -> &[Self::Scalar];
    /// Distance in bytes between the starts of two consecutive rows
    #[inline]
    fn byte_stride(&self) -> usize { self.stride() * ::core::mem::size_of::<Self::PixelRepr>() }
    /// Dimensions of the image as `(width, height)`
    #[inline]
    fn dimensions(&self) -> (usize, usize) { (self.width(), self.height()) }
    /// The bounds of the image, anchored at the origin
    #[inline]
    fn rect(&self) -> Rect { Rect::from_size(self.width(), self.height()) }
    #[inline]
    fn is_empty(&self) -> bool { self.width() == 0 || self.height() == 0 }
    /// The pixels of row `y`
    /// # Panics
    /// If `y` is out of bounds
    #[inline]
    fn row(&self, y: usize) -> &[Self::PixelRepr] {
        assert!(y < self.height(), "row {} out of bounds for height {}", y, self.height());
        let start = y * self.stride();
        &pixelate::<Self::PixelRepr>(self.data())[start..start + self.width()]
    }
    /// Get the pixel at (x, y)
    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<&Self::PixelRepr> {
        if x < self.width() && y < self.height() {
            Some(&self.row(y)[x])
        } else {
            None
        }
    }
    /// Borrow the whole image as a view
    #[inline]
    fn view(&self) -> ImageView<'_, Self::Pixel> {
        ImageView { data: self.data(), width: self.width(), height: self.height(), stride: self.stride() }
    }
    /// Clone `self` into a new packed [`Image`]
    fn to_image(&self) -> Image<Self::Pixel> {
        let mut data = Vec::with_capacity(self.width() * self.height() * Self::PixelRepr::CHANNELS);
        for y in 0..self.height() {
            data.extend(self.row(y).iter().flat_map(|px| px.as_slice().iter().copied()));
        }
        Image { data: data.into_boxed_slice(), width: self.width(), height: self.height() }
    }
    /// Borrow the image as a view of pixel type `P`, only if `P` has exactly the same representation.
    ///
    /// Lets generic code pick a specialized path when two images share a pixel type.
    #[inline]
    fn view_as<P: Pixel>(&self) -> Option<ImageView<'_, P>> {
        if ::core::any::TypeId::of::<P::Repr>() != ::core::any::TypeId::of::<Self::PixelRepr>() {
            return None;
        }
        let data = ::bytemuck::try_cast_slice::<Self::Scalar, PixelScalar<P>>(self.data()).ok()?;
        Some(ImageView { data, width: self.width(), height: self.height(), stride: self.stride() })
    }
}

/// Write access to an image, implemented by owned images and mutable views.
pub trait GenericImageMut: GenericImage {
    /// Get a mutable reference to the underlying raw data.
    fn data_mut(&mut self) -> &mut [Self::Scalar];
    /// The mutable pixels of row `y`
    /// # Panics
    /// If `y` is out of bounds
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Self::PixelRepr] {
        assert!(y < self.height(), "row {} out of bounds for height {}", y, self.height());
        let (start, w) = (y * self.stride(), self.width());
        &mut pixelate_mut::<Self::PixelRepr>(self.data_mut())[start..start + w]
    }
    /// Get a mutable reference to the pixel at (x, y)
    #[inline]
    fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Self::PixelRepr> {
        if x < self.width() && y < self.height() {
            Some(&mut self.row_mut(y)[x])
        } else {
            None
        }
    }
    /// Set every pixel of the image to `px`
    fn fill(&mut self, px: Self::PixelRepr) {
        for y in 0..self.height() {
            self.row_mut(y).fill(px);
        }
    }
    /// Borrow the whole image as a mutable view
    #[inline]
    fn view_mut(&mut self) -> ImageViewMut<'_, Self::Pixel> {
        let (width, height, stride) = (self.width(), self.height(), self.stride());
        ImageViewMut { data: self.data_mut(), width, height, stride }
    }
}

/// Images that own their storage and can change size.
///
/// Views never implement this, so an operation that must resize its destination cannot be handed a window
/// into another image.
pub trait ResizableImage: GenericImageMut {
    /// Change the dimensions of the image, pixel contents afterwards are unspecified.
    fn set_size(&mut self, width: usize, height: usize);
}

/// An owned, packed image with a pixel type `P`.
#[derive(Clone, PartialEq)]
pub struct Image<P: Pixel> {
    /// The image data
    pub(crate) data: Box<[PixelScalar<P>]>,
    /// The pixel width of the image
    pub(crate) width: usize,
    /// The pixel height of the image
    pub(crate) height: usize,
}

impl<P: Pixel> Image<P> {
    /// Create a new image filled with the default pixel, dimensions may be zero.
    /// # Panics
    /// If the image would exceed [`MAX_IMAGE_SIZE`]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: unpixelate_box::<P::Repr>(vec![P::DEFAULT; checked_pixels_len::<P>(width, height)].into_boxed_slice()),
            width,
            height,
        }
    }
    /// Create a new image with the given data
    /// # Errors
    /// If the data is not of the correct length (width * height * channels)
    pub fn from_raw<C: Container<P>>(data: C, width: usize, height: usize) -> Result<Self, Error> {
        let expected = width * height * P::Repr::CHANNELS;
        if data.len() == expected {
            Ok(Self { data: data.into(), width, height })
        } else {
            Err(Error::SizeMismatch { expected, actual: data.len() })
        }
    }
    /// Create a new image by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> P::Repr) -> Self {
        let mut img = Self::new(width, height);
        for y in 0..height {
            for (x, px) in img.row_mut(y).iter_mut().enumerate() {
                *px = f(x, y);
            }
        }
        img
    }
    /// Get the raw data of the image
    #[inline(always)]
    pub fn into_raw(self) -> Box<[PixelScalar<P>]> { self.data }
    /// Get a reference to the flattened pixel data.
    #[inline]
    pub fn pixels(&self) -> &[P::Repr] { pixelate::<P::Repr>(&self.data) }
    /// Get a mutable reference to the flattened pixel data.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [P::Repr] { pixelate_mut::<P::Repr>(&mut self.data) }
}
impl<P: Pixel> Default for Image<P> {
    fn default() -> Self { Self::new(0, 0) }
}
impl<P: Pixel> ::core::fmt::Debug for Image<P> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_struct("Image").field("width", &self.width).field("height", &self.height).finish_non_exhaustive()
    }
}

impl<P: Pixel> GenericImage for Image<P> {
    type Scalar = PixelScalar<P>;
    type PixelRepr = P::Repr;
    type Pixel = P;
    #[inline(always)]
    fn width(&self) -> usize { self.width }
    #[inline(always)]
    fn height(&self) -> usize { self.height }
    #[inline(always)]
    fn stride(&self) -> usize { self.width }
    #[inline(always)]
    fn data(&self) -> &[Self::Scalar] { self.data.as_ref() }
}
impl<P: Pixel> GenericImageMut for Image<P> {
    #[inline(always)]
    fn data_mut(&mut self) -> &mut [Self::Scalar] { self.data.as_mut() }
}
impl<P: Pixel> ResizableImage for Image<P> {
    fn set_size(&mut self, width: usize, height: usize) {
        if (width, height) != (self.width, self.height) {
            *self = Self::new(width, height);
        }
    }
}

macro_rules! impl_Index {
    ($([$($g:tt)*] $T:ty),+) => {
        $(
            impl<$($g)*> ::core::ops::Index<(usize, usize)> for $T {
                type Output = P::Repr;
                #[inline(always)]
                fn index(&self, (x, y): (usize, usize)) -> &Self::Output { &self.row(y)[x] }
            }
        )+
    };
}
macro_rules! impl_IndexMut {
    ($([$($g:tt)*] $T:ty),+) => {
        $(
            impl<$($g)*> ::core::ops::IndexMut<(usize, usize)> for $T {
                #[inline(always)]
                fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output { &mut self.row_mut(y)[x] }
            }
        )+
    };
}
impl_Index!([P: Pixel] Image<P>, ['a, P: Pixel] ImageView<'a, P>, ['a, P: Pixel] ImageViewMut<'a, P>);
impl_IndexMut!([P: Pixel] Image<P>, ['a, P: Pixel] ImageViewMut<'a, P>);

#[cfg(feature = "image")]
mod compat_image {
    use super::*;
    impl<P, C> GenericImage for ::image::ImageBuffer<P, C>
    where
        P: ::image::Pixel + Pixel,
        P::Subpixel: Scalar,
        <P as Pixel>::Repr: PixelRepr<Scalar = P::Subpixel>,
        C: ::core::ops::Deref<Target = [P::Subpixel]>,
    {
        type Scalar = P::Subpixel;
        type PixelRepr = <P as Pixel>::Repr;
        type Pixel = P;
        #[inline(always)]
        fn width(&self) -> usize { ::image::ImageBuffer::width(self) as usize }
        #[inline(always)]
        fn height(&self) -> usize { ::image::ImageBuffer::height(self) as usize }
        #[inline(always)]
        fn stride(&self) -> usize { ::image::ImageBuffer::width(self) as usize }
        #[inline(always)]
        fn data(&self) -> &[Self::Scalar] { self }
    }
    impl<P, C> GenericImageMut for ::image::ImageBuffer<P, C>
    where
        P: ::image::Pixel + Pixel,
        P::Subpixel: Scalar,
        <P as Pixel>::Repr: PixelRepr<Scalar = P::Subpixel>,
        C: ::core::ops::Deref<Target = [P::Subpixel]> + ::core::ops::DerefMut,
    {
        #[inline(always)]
        fn data_mut(&mut self) -> &mut [Self::Scalar] { self }
    }
    impl<P> ResizableImage for ::image::ImageBuffer<P, Vec<P::Subpixel>>
    where
        P: ::image::Pixel + Pixel,
        P::Subpixel: Scalar,
        <P as Pixel>::Repr: PixelRepr<Scalar = P::Subpixel>,
    {
        fn set_size(&mut self, width: usize, height: usize) {
            if (width, height) != GenericImage::dimensions(self) {
                *self = ::image::ImageBuffer::new(width as u32, height as u32);
            }
        }
    }
    impl<P> From<Image<P>> for ::image::ImageBuffer<P, Vec<P::Subpixel>>
    where
        P: ::image::Pixel + Pixel,
        P::Subpixel: Scalar,
        <P as Pixel>::Repr: PixelRepr<Scalar = P::Subpixel>,
    {
        #[inline]
        fn from(Image { data, width, height }: Image<P>) -> Self {
            Self::from_raw(width as u32, height as u32, data.into_vec()).expect(CAST_PANIC_MSG)
        }
    }
    impl<P, C> From<::image::ImageBuffer<P, C>> for Image<P>
    where
        P: ::image::Pixel + Pixel,
        P::Subpixel: Scalar,
        <P as Pixel>::Repr: PixelRepr<Scalar = P::Subpixel>,
        C: ::core::ops::Deref<Target = [P::Subpixel]> + Into<Box<[P::Subpixel]>>,
    {
        #[inline]
        fn from(image: ::image::ImageBuffer<P, C>) -> Self {
            let (w, h) = image.dimensions();
            Self { data: image.into_raw().into(), width: w as usize, height: h as usize }
        }
    }
}
