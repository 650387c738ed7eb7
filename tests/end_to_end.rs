use ::imgwarp::*;

fn bilinear(tl: f64, tr: f64, bl: f64, br: f64, lr: f64, tb: f64) -> f64 {
    (1. - tb) * ((1. - lr) * tl + lr * tr) + tb * ((1. - lr) * bl + lr * br)
}

#[test]
fn four_by_four_to_two_by_two() {
    let rows = [[10, 20, 30, 40], [50, 60, 70, 80], [90, 100, 110, 120], [130, 140, 150, 160]];
    let src = Image::<u8>::from_fn(4, 4, |x, y| rows[y][x]);
    let mut dst = Image::<u8>::new(2, 2);
    resize_image(&src, &mut dst);

    // scale is (4 - 1) / (2 - 1) on both axes, so (0, 0) lands on the top left pixel with zero weight elsewhere
    let map = ScaleMapping::for_resize((4, 4), (2, 2));
    assert_eq!((map.x_scale(), map.y_scale()), (3., 3.));
    let p = map.map_point(DPoint::new(0., 0.));
    let (lr, tb) = (p.x - p.x.floor(), p.y - p.y.floor());
    let expected = bilinear(src[(0, 0)] as f64, src[(1, 0)] as f64, src[(0, 1)] as f64, src[(1, 1)] as f64, lr, tb);
    assert_eq!(dst[(0, 0)] as f64, expected.round());
    assert_eq!(dst.pixels(), &[10, 40, 130, 160]);
}

#[test]
fn upsampling_blends_the_top_left_block() {
    let src = Image::<u8>::from_fn(2, 2, |x, y| [[0, 100], [40, 200]][y][x]);
    let mut dst = Image::<u8>::new(5, 5);
    resize_image(&src, &mut dst);
    // (1, 1) maps to (0.25, 0.25)
    assert_eq!(dst[(1, 1)] as f64, bilinear(0., 100., 40., 200., 0.25, 0.25).round());
    assert_eq!(dst[(4, 4)], 200);
}

#[test]
fn lane_path_clamps_where_the_engine_rejects() {
    // 8 / 16 is exact, so the last destination column lands exactly on the last source column
    let src = Image::<[u8; 3]>::from_fn(9, 5, |x, y| [100 + x as u8, 50 + y as u8, 7]);
    let mut fast = Image::<[u8; 3]>::new(17, 9);
    let mut generic = Image::<[u8; 3]>::new(17, 9);
    resize_image(&src, &mut fast);
    transform_image(&src, &mut generic, Bilinear, ScaleMapping::for_resize((9, 5), (17, 9)));

    for y in 0..8 {
        for x in 0..16 {
            assert_eq!(fast[(x, y)], generic[(x, y)], "at ({x}, {y})");
        }
    }
    for y in 0..9 {
        assert_eq!(generic[(16, y)], [0; 3]);
        assert_eq!(fast[(16, y)][0], 108);
    }
    for x in 0..17 {
        assert_eq!(generic[(x, 8)], [0; 3]);
        assert_eq!(fast[(x, 8)][1], 54);
    }
}

#[test]
fn resize_with_dispatches_on_kind() {
    let src = Image::<u16>::from_fn(9, 1, |x, _| x as u16 * 1000);
    let (mut a, mut b) = (Image::<u16>::new(5, 1), Image::<u16>::new(5, 1));
    resize_image_with(&src, &mut a, InterpolationKind::Bilinear);
    resize_image(&src, &mut b);
    assert_eq!(a, b);
    resize_image_with(&src, &mut a, InterpolationKind::Nearest);
    assert_eq!(a.row(0), &[0, 2000, 4000, 6000, 8000]);
}

#[test]
fn rotate_by_zero() {
    let src = Image::<u8>::from_fn(6, 4, |x, y| (x * 40 + y) as u8);
    let mut dst = Image::<u8>::default();
    let t = rotate_image_with(&src, &mut dst, 0., NearestNeighbor);
    assert_eq!(dst, src);
    assert!(t.approx_eq(&AffineTransform::identity(), 1e-12));
    assert!((t.inverse().unwrap() * t).approx_eq(&AffineTransform::identity(), 1e-12));

    // the default quadratic kernel needs a full 3x3 neighborhood, so only the outer ring falls back to black
    rotate_image(&src, &mut dst, 0.);
    assert_eq!(dst.dimensions(), src.dimensions());
    assert_eq!(sub_image(&dst, Rect::new(1, 1, 4, 2)).to_image(), sub_image(&src, Rect::new(1, 1, 4, 2)).to_image());
    assert_eq!(dst.row(0), &[0; 6]);
    assert_eq!(dst.row(3), &[0; 6]);
    assert!((0..4).all(|y| dst[(0, y)] == 0 && dst[(5, y)] == 0));
}

#[test]
fn chips() {
    let src = Image::<u8>::from_fn(5, 5, |x, y| (1 + x + 5 * y) as u8);
    let mut chip = Image::<u8>::default();

    extract_image_chip(&src, Rect::new(-10, -10, -8, -9), &mut chip);
    assert_eq!(chip.dimensions(), (3, 2));
    assert!(chip.pixels().iter().all(|&v| v == 0));

    extract_image_chip(&src, Rect::new(3, 3, 5, 5), &mut chip);
    assert_eq!(chip.dimensions(), (3, 3));
    assert_eq!(chip.row(0), &[19, 20, 0]);
    assert_eq!(chip.row(1), &[24, 25, 0]);
    assert_eq!(chip.row(2), &[0, 0, 0]);
}

#[test]
fn transforms_into_sub_views() {
    let src = Image::<u8>::from_fn(3, 3, |_, _| 9);
    let mut dst = Image::<u8>::new(6, 6);
    {
        let mut view = sub_image_mut(&mut dst, Rect::new(4, 4, 10, 10));
        assert_eq!(view.dimensions(), (2, 2));
        transform_image(&src, &mut view, NearestNeighbor, |p: DPoint| p);
    }
    assert_eq!(dst.row(4), &[0, 0, 0, 0, 9, 9]);
    assert_eq!(dst.row(3), &[0; 6]);
}

#[test]
fn raw_views_validate_their_buffer() {
    let buf = [1u8, 2, 3, 4, 5, 6, 7];
    let view = sub_image_raw::<u8>(&buf, 2, 2, 3).unwrap();
    assert_eq!(view.row(1), &[4, 5]);
    assert!(matches!(sub_image_raw::<u8>(&buf, 4, 2, 3), Err(imgwarp_image::Error::InvalidStride { .. })));
    assert!(matches!(sub_image_raw::<u8>(&buf, 3, 3, 3), Err(imgwarp_image::Error::BufferTooSmall { .. })));
    let err: Error = sub_image_raw::<u8>(&buf, 3, 3, 3).unwrap_err().into();
    assert!(matches!(err, Error::Image(_)));
}

#[test]
fn pyramid_policies() {
    let src = Image::<u8>::from_fn(4, 3, |x, _| x as u8);
    let mut dst = Image::<u8>::new(2, 2);
    pyramid_up(&src, &mut dst, PyramidDisable);
    assert_eq!(dst.dimensions(), (0, 0));
    let up = PyramidDown::<2>.rect_up(src.rect());
    pyramid_up(&src, &mut dst, PyramidDown::<2>);
    assert_eq!(dst.dimensions(), (up.right as usize + 1, up.bottom as usize + 1));
    let mut img = src.clone();
    pyramid_up_in_place(&mut img, PyramidDown::<2>);
    assert_eq!(img, dst);
}

#[cfg(feature = "config")]
#[test]
fn resampler_from_config_file() {
    let path = ::std::env::temp_dir().join(format!("imgwarp-config-{}.toml", ::std::process::id()));
    ::std::fs::write(&path, "resize = \"nearest\"\nbackground = \"white\"\n").unwrap();
    let config = Config::load(&path).unwrap();
    ::std::fs::remove_file(&path).unwrap();
    assert_eq!(config.resize, InterpolationKind::Nearest);
    assert_eq!(config.rotate, InterpolationKind::Quadratic);

    let resampler = Resampler::from(config);
    let src = Image::<u8>::from_fn(4, 4, |x, y| (x + 4 * y) as u8);
    let mut dst = Image::<u8>::new(2, 2);
    resampler.resize(&src, &mut dst);
    assert_eq!(dst.pixels(), &[0, 3, 12, 15]);
}
