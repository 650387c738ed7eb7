//! Bilinear row resampling four output columns at a time.
//!
//! Each output column blends the clamped 2x2 neighborhood given by its [`Tap`]s. Chunks of four columns are
//! gathered into `f32x4` lanes channel by channel, the remaining columns go through [`resize_row_scalar`], which
//! evaluates the same `f32` expression in the same order so both paths agree bit for bit.

use ::wide::f32x4;

use super::*;

/// Resize `src` into `dst`, both with the pixel type of `dst`
#[instrument(skip_all, level = "trace")]
pub fn resize<O: GenericImageMut>(src: &ImageView<'_, O::Pixel>, dst: &mut O, map: ScaleMapping) {
    let cols = Tap::axis(dst.width(), map.x_scale(), src.width());
    for r in 0..dst.height() {
        let y = Tap::new(r, map.y_scale(), src.height());
        resize_row(src.row(y.near), src.row(y.far), y.frac as f32, &cols, dst.row_mut(r));
    }
}

/// Blend one output row from the `upper` and `lower` source rows, `tb` is the weight of `lower`.
#[inline]
pub fn resize_row<R: PixelRepr>(upper: &[R], lower: &[R], tb: f32, cols: &[Tap], out: &mut [R]) {
    let split = cols.len().min(out.len()) / 4 * 4;
    let (lane_cols, rest_cols) = cols.split_at(split);
    let (lane_out, rest_out) = out.split_at_mut(split);
    for (taps, px) in lane_cols.chunks_exact(4).zip(lane_out.chunks_exact_mut(4)) {
        let taps = [taps[0], taps[1], taps[2], taps[3]];
        resize_row_lanes(upper, lower, tb, taps, px);
    }
    resize_row_scalar(upper, lower, tb, rest_cols, rest_out);
}

#[inline]
pub fn resize_row_lanes<R: PixelRepr>(upper: &[R], lower: &[R], tb: f32, taps: [Tap; 4], out: &mut [R]) {
    let lr = f32x4::from(taps.map(|t| t.frac as f32));
    let tb = f32x4::splat(tb);
    let (ilr, itb) = (f32x4::ONE - lr, f32x4::ONE - tb);
    let (wtl, wtr, wbl, wbr) = (itb * ilr, itb * lr, tb * ilr, tb * lr);
    for ch in 0..R::CHANNELS {
        let gather = |row: &[R], far: bool| {
            f32x4::from(taps.map(|t| row[if far { t.far } else { t.near }].as_slice()[ch].weight() as f32))
        };
        let v = wtl * gather(upper, false) + wtr * gather(upper, true) + wbl * gather(lower, false) + wbr * gather(lower, true);
        for (px, v) in out.iter_mut().zip(v.to_array()) {
            px.as_slice_mut()[ch] = R::Scalar::from_weight(v as Weight);
        }
    }
}

/// Same blend as the lane kernel, one column at a time
#[inline]
pub fn resize_row_scalar<R: PixelRepr>(upper: &[R], lower: &[R], tb: f32, cols: &[Tap], out: &mut [R]) {
    let itb = 1. - tb;
    for (t, px) in cols.iter().zip(out) {
        let lr = t.frac as f32;
        let ilr = 1. - lr;
        let (wtl, wtr, wbl, wbr) = (itb * ilr, itb * lr, tb * ilr, tb * lr);
        for ch in 0..R::CHANNELS {
            let at = |row: &[R], i: usize| row[i].as_slice()[ch].weight() as f32;
            let v = wtl * at(upper, t.near) + wtr * at(upper, t.far) + wbl * at(lower, t.near) + wbr * at(lower, t.far);
            px.as_slice_mut()[ch] = R::Scalar::from_weight(v as Weight);
        }
    }
}
