//! A [`Config`] driven front end to the resampling operations.

use super::*;

/// Runs the resampling operations with the kernels and background of its [`Config`].
/// ```
/// use imgwarp::*;
/// let mut resampler = Resampler::default();
/// resampler.set_interpolation(InterpolationKind::Nearest);
/// let src = Image::<u8>::from_fn(4, 4, |x, y| (x + 4 * y) as u8);
/// let mut dst = Image::<u8>::new(2, 2);
/// resampler.resize(&src, &mut dst);
/// assert_eq!(dst.pixels(), &[0, 3, 12, 15]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Resampler {
    config: Config,
}

impl From<Config> for Resampler {
    #[inline]
    fn from(config: Config) -> Self { Self::new(config) }
}

impl Resampler {
    #[inline]
    pub const fn new(config: Config) -> Self { Self { config } }
    #[inline(always)]
    pub fn config(&self) -> &Config { &self.config }
    /// Set the kernel used for resizing
    #[inline(always)]
    pub fn set_interpolation(&mut self, interp: InterpolationKind) { self.config.resize = interp; }
    /// Cycle through the available resize kernels
    #[inline]
    pub fn cycle_resize(&mut self) { self.set_interpolation(self.config.resize.cycle()); }
    /// Set the background of rotated images
    #[inline(always)]
    pub fn set_background(&mut self, background: BackgroundKind) { self.config.background = background; }
    /// See [`resize_image_with`]
    #[inline]
    pub fn resize<I: GenericImage, O: GenericImageMut>(&self, src: &I, dst: &mut O) {
        trace!(interp = ?self.config.resize, "Resampler::resize");
        resize_image_with(src, dst, self.config.resize)
    }
    /// Resize `img` in place by `scale` with the configured kernel.
    /// # Errors
    /// [`Error::InvalidScale`] unless `scale` is finite and positive
    pub fn resize_by<I: ResizableImage + Default>(&self, scale: f64, img: &mut I) -> Result<()> {
        let (w, h) = resize::scaled_size(scale, img.dimensions())?;
        let mut tmp = I::default();
        tmp.set_size(w, h);
        self.resize(&*img, &mut tmp);
        mem::swap(img, &mut tmp);
        Ok(())
    }
    /// See [`rotate_image_with_background`]
    #[inline]
    pub fn rotate<I: GenericImage, O: ResizableImage>(&self, src: &I, dst: &mut O, angle: f64) -> AffineTransform {
        rotate_image_with_background(src, dst, angle, self.config.rotate, self.config.background)
    }
    /// See [`pyramid_up_with`]
    #[inline]
    pub fn pyramid_up<I, O, Y>(&self, src: &I, dst: &mut O, pyr: Y)
    where
        I: GenericImage,
        O: ResizableImage,
        Y: PyramidPolicy,
    {
        pyramid_up_with(src, dst, pyr, self.config.pyramid)
    }
    /// See [`extract_image_chip`]
    #[inline]
    pub fn extract_chip<I: GenericImage, O: ResizableImage>(&self, src: &I, location: Rect, chip: &mut O) {
        extract_image_chip(src, location, chip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_resize_kernel() {
        let mut r = Resampler::default();
        assert_eq!(r.config().resize, InterpolationKind::Bilinear);
        r.cycle_resize();
        assert_eq!(r.config().resize, InterpolationKind::Quadratic);
        r.cycle_resize();
        r.cycle_resize();
        assert_eq!(r.config().resize, InterpolationKind::Bilinear);
    }

    #[test]
    fn resize_by_uses_the_configured_kernel() {
        let mut img = Image::<u8>::from_fn(4, 1, |x, _| (x * 10) as u8);
        let mut r = Resampler::new(Config { resize: InterpolationKind::Nearest, ..Config::default() });
        r.resize_by(1.5, &mut img).unwrap();
        assert_eq!(img.row(0), &[0, 10, 10, 20, 20, 30]);
        assert!(r.resize_by(-2., &mut img).is_err());
        r.set_interpolation(InterpolationKind::Bilinear);
        r.resize_by(0.5, &mut img).unwrap();
        assert_eq!(img.row(0), &[0, 20, 30]);
    }

    #[test]
    fn rotate_uses_the_configured_background() {
        let src = Image::<u8>::from_fn(5, 5, |_, _| 1);
        let mut dst = Image::<u8>::default();
        let mut r = Resampler::from(Config { rotate: InterpolationKind::Nearest, ..Config::default() });
        r.set_background(BackgroundKind::White);
        r.rotate(&src, &mut dst, 0.5);
        assert_eq!(dst[(0, 0)], 255);
    }
}
