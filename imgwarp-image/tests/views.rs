use ::imgwarp_image::*;
use ::proptest::prelude::*;

fn rect() -> impl Strategy<Value = Rect> {
    (-20i64..20, -20i64..20, 0i64..25, 0i64..25).prop_map(|(l, t, w, h)| Rect::new(l, t, l + w - 1, t + h - 1))
}

proptest! {
    #[test]
    fn sub_image_is_the_intersection(w in 0usize..16, h in 0usize..16, r in rect()) {
        let img = Image::<[u16; 3]>::from_fn(w, h, |x, y| [x as u16, y as u16, 0]);
        let view = sub_image(&img, r);
        let clipped = r.intersect(img.rect());
        prop_assert_eq!(view.dimensions(), (clipped.width(), clipped.height()));
        prop_assert!(view.width() <= w.min(r.width()) && view.height() <= h.min(r.height()));
        if !clipped.is_empty() {
            prop_assert_eq!(view[(0, 0)], [clipped.left as u16, clipped.top as u16, 0]);
        }
    }

    #[test]
    fn nested_views_compose(r in rect(), s in rect()) {
        let img = Image::<u8>::from_fn(12, 12, |x, y| (x + 12 * y) as u8);
        let outer = sub_image(&img, r);
        let inner = outer.sub_view(s);
        let origin = r.intersect(img.rect());
        let expected = s.intersect(outer.rect()).translate(origin.tl_corner());
        prop_assert_eq!(inner.dimensions(), (expected.width(), expected.height()));
        for y in 0..inner.height() {
            for x in 0..inner.width() {
                let (ex, ey) = (expected.left as usize + x, expected.top as usize + y);
                prop_assert_eq!(inner[(x, y)], img[(ex, ey)]);
            }
        }
    }

    #[test]
    fn union_covers_and_intersection_is_covered(a in rect(), b in rect()) {
        let (u, i) = (a.union(b), a.intersect(b));
        prop_assert!(u.contains_rect(a) && u.contains_rect(b));
        prop_assert!(a.contains_rect(i) && b.contains_rect(i));
    }
}
