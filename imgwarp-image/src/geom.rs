//! Discrete and continuous points, and inclusive integer rectangles.
//!
//! Coordinates follow image conventions: `x` is the column, `y` is the row and grows downwards.
use ::core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A discrete pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// A continuous coordinate, used for all sampling math
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct DPoint {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline(always)]
    pub const fn new(x: i64, y: i64) -> Self { Self { x, y } }
}
impl DPoint {
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
    /// Euclidean length of the vector from the origin to `self`
    #[inline]
    pub fn length(self) -> f64 { self.x.hypot(self.y) }
    #[inline]
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

/// Rounds half up, matching how continuous sample positions snap to pixels.
impl From<DPoint> for Point {
    #[inline]
    fn from(p: DPoint) -> Self { Self { x: (p.x + 0.5).floor() as i64, y: (p.y + 0.5).floor() as i64 } }
}
impl From<Point> for DPoint {
    #[inline]
    fn from(p: Point) -> Self { Self { x: p.x as f64, y: p.y as f64 } }
}

macro_rules! impl_point_ops {
    ($($P:ty),+) => {
        $(
            impl Add for $P {
                type Output = Self;
                #[inline(always)]
                fn add(self, rhs: Self) -> Self { Self { x: self.x + rhs.x, y: self.y + rhs.y } }
            }
            impl AddAssign for $P {
                #[inline(always)]
                fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
            }
            impl Sub for $P {
                type Output = Self;
                #[inline(always)]
                fn sub(self, rhs: Self) -> Self { Self { x: self.x - rhs.x, y: self.y - rhs.y } }
            }
            impl Neg for $P {
                type Output = Self;
                #[inline(always)]
                fn neg(self) -> Self { Self { x: -self.x, y: -self.y } }
            }
        )+
    };
}
impl_point_ops!(Point, DPoint);

impl Mul<f64> for DPoint {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: f64) -> Self { Self { x: self.x * rhs, y: self.y * rhs } }
}

/// An axis aligned rectangle with inclusive bounds `[left, right] x [top, bottom]`.
///
/// A rectangle is empty when `left > right` or `top > bottom`.
/// ```
/// use imgwarp_image::{Point, Rect};
/// let r = Rect::from_size(4, 3);
/// assert_eq!((r.width(), r.height()), (4, 3));
/// assert!(r.contains(Point::new(3, 2)));
/// assert!(!r.contains(Point::new(4, 2)));
/// assert!(r.intersect(Rect::new(10, 10, 12, 12)).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct Rect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl Default for Rect {
    fn default() -> Self { Self::EMPTY }
}

impl Rect {
    /// The canonical empty rectangle
    pub const EMPTY: Self = Self { left: 0, top: 0, right: -1, bottom: -1 };
    #[inline(always)]
    pub const fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self { Self { left, top, right, bottom } }
    /// The bounds of a `width` x `height` image anchored at the origin
    #[inline]
    pub fn from_size(width: usize, height: usize) -> Self { Self::new(0, 0, width as i64 - 1, height as i64 - 1) }
    /// A 1x1 rectangle covering `p`
    #[inline]
    pub const fn from_point(p: Point) -> Self { Self::new(p.x, p.y, p.x, p.y) }
    /// The rectangle with corners at the rounded positions of `tl` and `br`
    #[inline]
    pub fn from_corners(tl: DPoint, br: DPoint) -> Self {
        let (tl, br) = (Point::from(tl), Point::from(br));
        Self::new(tl.x, tl.y, br.x, br.y)
    }
    #[inline]
    pub const fn is_empty(&self) -> bool { self.left > self.right || self.top > self.bottom }
    #[inline]
    pub const fn width(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.right.abs_diff(self.left) as usize).saturating_add(1)
        }
    }
    #[inline]
    pub const fn height(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.bottom.abs_diff(self.top) as usize).saturating_add(1)
        }
    }
    #[inline]
    pub const fn area(&self) -> usize { self.width().saturating_mul(self.height()) }
    #[inline(always)]
    pub const fn tl_corner(&self) -> Point { Point::new(self.left, self.top) }
    #[inline(always)]
    pub const fn tr_corner(&self) -> Point { Point::new(self.right, self.top) }
    #[inline(always)]
    pub const fn bl_corner(&self) -> Point { Point::new(self.left, self.bottom) }
    #[inline(always)]
    pub const fn br_corner(&self) -> Point { Point::new(self.right, self.bottom) }
    /// The pixel closest to the middle of the rectangle, rounding towards the bottom right.
    #[inline]
    pub fn center(&self) -> Point {
        let mid = |a: i64, b: i64| (a as i128 + b as i128 + 1).div_euclid(2) as i64;
        Point::new(mid(self.left, self.right), mid(self.top, self.bottom))
    }
    /// The exact middle of the rectangle
    #[inline]
    pub fn dcenter(&self) -> DPoint {
        DPoint::new((self.left as f64 + self.right as f64) / 2., (self.top as f64 + self.bottom as f64) / 2.)
    }
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }
    /// Whether every point of `other` is inside `self`, the empty rectangle is inside everything.
    #[inline]
    pub const fn contains_rect(&self, other: Rect) -> bool {
        other.is_empty()
            || (!self.is_empty()
                && self.left <= other.left
                && other.right <= self.right
                && self.top <= other.top
                && other.bottom <= self.bottom)
    }
    /// The overlap of both rectangles, possibly empty
    #[inline]
    pub fn intersect(&self, other: Rect) -> Rect {
        Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }
    /// The smallest rectangle containing both, empty rectangles are ignored
    pub fn union(&self, other: Rect) -> Rect {
        if other.is_empty() {
            *self
        } else if self.is_empty() {
            other
        } else {
            Rect::new(
                self.left.min(other.left),
                self.top.min(other.top),
                self.right.max(other.right),
                self.bottom.max(other.bottom),
            )
        }
    }
    /// A `width` by `height` rectangle whose [`center`](Rect::center) is `p`, empty if either size is zero
    #[inline]
    pub fn centered(p: Point, width: usize, height: usize) -> Rect {
        let (w, h) = (width.min(i64::MAX as usize) as i64, height.min(i64::MAX as usize) as i64);
        let (left, top) = (p.x.saturating_sub(w / 2), p.y.saturating_sub(h / 2));
        Rect::new(left, top, left.saturating_add(w - 1), top.saturating_add(h - 1))
    }
    /// Grow the rectangle (if necessary) to cover `p`
    #[inline]
    pub fn extend(&self, p: Point) -> Rect { self.union(Rect::from_point(p)) }
    /// Grow every side outwards by `margin` pixels, saturating at the `i64` range
    #[inline]
    pub const fn grow(&self, margin: i64) -> Rect {
        Rect::new(
            self.left.saturating_sub(margin),
            self.top.saturating_sub(margin),
            self.right.saturating_add(margin),
            self.bottom.saturating_add(margin),
        )
    }
    /// Shift by `by`, saturating at the `i64` range
    #[inline]
    pub const fn translate(&self, by: Point) -> Rect {
        Rect::new(
            self.left.saturating_add(by.x),
            self.top.saturating_add(by.y),
            self.right.saturating_add(by.x),
            self.bottom.saturating_add(by.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rect_has_no_extent() {
        assert!(Rect::EMPTY.is_empty());
        assert_eq!(Rect::EMPTY.width(), 0);
        assert_eq!(Rect::from_size(0, 5).area(), 0);
        assert!(Rect::new(3, 3, 2, 9).is_empty());
    }

    #[test]
    fn union_ignores_empty_and_extends() {
        let r = Rect::EMPTY.extend(Point::new(2, -1));
        assert_eq!(r, Rect::new(2, -1, 2, -1));
        let r = r.extend(Point::new(-3, 4));
        assert_eq!(r, Rect::new(-3, -1, 2, 4));
        assert_eq!(r.union(Rect::EMPTY), r);
    }

    #[test]
    fn containment_and_intersection() {
        let img = Rect::from_size(10, 8);
        assert!(img.contains_rect(Rect::new(0, 0, 9, 7)));
        assert!(!img.contains_rect(Rect::new(0, 0, 10, 7)));
        assert!(img.contains_rect(Rect::EMPTY));
        assert!(!Rect::EMPTY.contains_rect(img));
        assert_eq!(img.intersect(Rect::new(-5, 6, 3, 20)), Rect::new(0, 6, 3, 7));
        assert!(Rect::from_point(Point::new(5, 5)).grow(1) == Rect::new(4, 4, 6, 6));
    }

    #[test]
    fn centers() {
        let r = Rect::from_size(4, 3);
        assert_eq!(r.center(), Point::new(2, 1));
        assert_eq!(r.dcenter(), DPoint::new(1.5, 1.));
        assert_eq!(Rect::new(-3, -3, -1, -2).center(), Point::new(-2, -2));
    }

    #[test]
    fn rounding_half_up() {
        assert_eq!(Point::from(DPoint::new(0.5, -0.5)), Point::new(1, 0));
        assert_eq!(Point::from(DPoint::new(2.49, -1.51)), Point::new(2, -2));
    }

    #[test]
    fn centered_keeps_size_and_center() {
        for (w, h) in [(1, 1), (4, 3), (5, 6)] {
            let r = Rect::centered(Point::new(7, -2), w, h);
            assert_eq!((r.width(), r.height()), (w, h));
            assert_eq!(r.center(), Point::new(7, -2));
        }
        assert!(Rect::centered(Point::new(0, 0), 0, 3).is_empty());
    }

    #[test]
    fn extreme_rects_saturate() {
        let all = Rect::new(i64::MIN, i64::MIN, i64::MAX, i64::MAX);
        assert_eq!(all.width(), usize::MAX);
        assert_eq!(all.area(), usize::MAX);
        assert_eq!(all.center(), Point::new(0, 0));
        assert_eq!(all.dcenter(), DPoint::new(0., 0.));
        let far = Rect::from_point(Point::new(i64::MAX, i64::MIN)).grow(1);
        assert_eq!(far, Rect::new(i64::MAX - 1, i64::MIN, i64::MAX, i64::MIN + 1));
        assert!(!Rect::from_size(5, 5).contains_rect(far));
        assert_eq!(far.translate(Point::new(5, -5)).tr_corner(), Point::new(i64::MAX, i64::MIN));
    }
}
