//! Floating-point rectangle algebra
//!
//! Point containment is closed on the top/left edges and open on the
//! bottom/right edges, so rectangles that tile the plane never both claim a
//! shared edge. Rectangle containment is closed on all four sides.
//! Intersections may come out with a negative extent; that is how "no
//! overlap" is reported.

use std::fmt;

use crate::errors::{GeomError, Result, check_finite};
use crate::path::{PathIter, RectIterator};
use crate::rect::Rectangle;
use crate::shape::{RectangularShape, Shape};
use crate::transform::AffineTransform;
use crate::types::Point2D;

/// Point lies left of the rectangle.
pub const OUT_LEFT: i32 = 1;
/// Point lies above the rectangle.
pub const OUT_TOP: i32 = 2;
/// Point lies right of the rectangle.
pub const OUT_RIGHT: i32 = 4;
/// Point lies below the rectangle.
pub const OUT_BOTTOM: i32 = 8;

/// An axis-aligned rectangle with `f64` coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rectangle2D {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle2D {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rectangle2D {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle, rejecting NaN and infinite values.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        Ok(Rectangle2D {
            x: check_finite(x)?,
            y: check_finite(y)?,
            width: check_finite(width)?,
            height: check_finite(height)?,
        })
    }

    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        *self = Rectangle2D::new(x, y, width, height);
    }

    pub fn set_rect_from(&mut self, r: &impl RectangularShape) {
        self.set_rect(r.x(), r.y(), r.width(), r.height());
    }

    /// Classify a point against the four edges as a mask of `OUT_*` bits.
    ///
    /// An axis with no interior (extent `<= 0`) always reports both of its
    /// bits.
    pub fn outcode(&self, x: f64, y: f64) -> i32 {
        let mut out = 0;
        if self.width <= 0.0 {
            out |= OUT_LEFT | OUT_RIGHT;
        } else if x < self.x {
            out |= OUT_LEFT;
        } else if x > self.x + self.width {
            out |= OUT_RIGHT;
        }
        if self.height <= 0.0 {
            out |= OUT_TOP | OUT_BOTTOM;
        } else if y < self.y {
            out |= OUT_TOP;
        } else if y > self.y + self.height {
            out |= OUT_BOTTOM;
        }
        out
    }

    pub fn outcode_point(&self, p: &Point2D) -> i32 {
        self.outcode(p.x, p.y)
    }

    /// Whether the segment `(x1, y1)`-`(x2, y2)` touches this rectangle.
    ///
    /// Cohen-Sutherland: the first endpoint is walked onto the edge it
    /// violates until it lands inside, or both ends share an outside half
    /// plane. Each step clears one axis, so the loop runs at most twice.
    pub fn intersects_line(&self, mut x1: f64, mut y1: f64, x2: f64, y2: f64) -> bool {
        let out2 = self.outcode(x2, y2);
        if out2 == 0 {
            return true;
        }
        loop {
            let out1 = self.outcode(x1, y1);
            if out1 == 0 {
                return true;
            }
            if out1 & out2 != 0 {
                return false;
            }
            if out1 & (OUT_LEFT | OUT_RIGHT) != 0 {
                let mut x = self.x;
                if out1 & OUT_RIGHT != 0 {
                    x += self.width;
                }
                y1 += (x - x1) * (y2 - y1) / (x2 - x1);
                x1 = x;
            } else {
                let mut y = self.y;
                if out1 & OUT_BOTTOM != 0 {
                    y += self.height;
                }
                x1 += (y - y1) * (x2 - x1) / (y2 - y1);
                y1 = y;
            }
        }
    }

    pub fn intersects_line_points(&self, p1: &Point2D, p2: &Point2D) -> bool {
        self.intersects_line(p1.x, p1.y, p2.x, p2.y)
    }

    /// Write the overlap of `src1` and `src2` into `dest`.
    ///
    /// Disjoint inputs produce a negative width and/or height.
    pub fn intersect(
        src1: &impl RectangularShape,
        src2: &impl RectangularShape,
        dest: &mut impl RectangularShape,
    ) {
        let x1 = src1.min_x().max(src2.min_x());
        let y1 = src1.min_y().max(src2.min_y());
        let x2 = src1.max_x().min(src2.max_x());
        let y2 = src1.max_y().min(src2.max_y());
        dest.set_frame(x1, y1, x2 - x1, y2 - y1);
    }

    /// Write the bounding box of `src1` and `src2` into `dest`.
    pub fn union(
        src1: &impl RectangularShape,
        src2: &impl RectangularShape,
        dest: &mut impl RectangularShape,
    ) {
        let x1 = src1.min_x().min(src2.min_x());
        let y1 = src1.min_y().min(src2.min_y());
        let x2 = src1.max_x().max(src2.max_x());
        let y2 = src1.max_y().max(src2.max_y());
        dest.set_frame_from_diagonal(x1, y1, x2, y2);
    }

    pub fn create_intersection(&self, r: &impl RectangularShape) -> Rectangle2D {
        let mut dest = Rectangle2D::default();
        Rectangle2D::intersect(self, r, &mut dest);
        dest
    }

    pub fn create_union(&self, r: &impl RectangularShape) -> Rectangle2D {
        let mut dest = Rectangle2D::default();
        Rectangle2D::union(self, r, &mut dest);
        dest
    }

    /// Grow to include the point `(x, y)`.
    pub fn add(&mut self, x: f64, y: f64) {
        let x1 = self.min_x().min(x);
        let x2 = self.max_x().max(x);
        let y1 = self.min_y().min(y);
        let y2 = self.max_y().max(y);
        self.set_rect(x1, y1, x2 - x1, y2 - y1);
    }

    pub fn add_point(&mut self, p: &Point2D) {
        self.add(p.x, p.y);
    }

    /// Grow to include another rectangle.
    pub fn add_rect(&mut self, r: &impl RectangularShape) {
        let x1 = self.min_x().min(r.min_x());
        let x2 = self.max_x().max(r.max_x());
        let y1 = self.min_y().min(r.min_y());
        let y2 = self.max_y().max(r.max_y());
        self.set_rect(x1, y1, x2 - x1, y2 - y1);
    }
}

impl RectangularShape for Rectangle2D {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    fn set_frame(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.set_rect(x, y, w, h);
    }
}

impl Shape for Rectangle2D {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    fn contains_rect(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        if self.is_empty() || w <= 0.0 || h <= 0.0 {
            return false;
        }
        x >= self.x && y >= self.y && x + w <= self.x + self.width && y + h <= self.y + self.height
    }

    fn intersects(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        if self.is_empty() || w <= 0.0 || h <= 0.0 {
            return false;
        }
        x + w > self.x && y + h > self.y && x < self.x + self.width && y < self.y + self.height
    }

    fn bounds(&self) -> Rectangle {
        self.frame_bounds()
    }

    fn bounds_2d(&self) -> Rectangle2D {
        *self
    }

    fn path_iterator(&self, at: Option<&AffineTransform>) -> PathIter {
        RectIterator::new(self, at).into()
    }
}

impl From<Rectangle> for Rectangle2D {
    fn from(r: Rectangle) -> Self {
        Rectangle2D::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.width),
            f64::from(r.height),
        )
    }
}

impl TryFrom<&[f64]> for Rectangle2D {
    type Error = GeomError;

    /// Build from `[x, y, width, height]`.
    fn try_from(v: &[f64]) -> Result<Self> {
        match *v {
            [x, y, w, h] => Ok(Rectangle2D::new(x, y, w, h)),
            _ => Err(GeomError::invalid_argument(format!(
                "a rectangle takes 4 coordinates, got {}",
                v.len()
            ))),
        }
    }
}

impl fmt::Display for Rectangle2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle2D [x={}, y={}, w={}, h={}]",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> Rectangle2D {
        Rectangle2D::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn empty_iff_non_positive_extent() {
        assert!(!ten().is_empty());
        assert!(Rectangle2D::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rectangle2D::new(0.0, 0.0, 5.0, -1.0).is_empty());
    }

    #[test]
    fn containment_asymmetry() {
        let r = ten();
        assert!(r.contains(0.0, 0.0));
        assert!(!r.contains(10.0, 10.0));
        assert!(!r.contains(10.0, 5.0));
        assert!(r.contains_rect(0.0, 0.0, 10.0, 10.0));
        assert!(!r.contains_rect(0.0, 0.0, 10.5, 10.0));
        assert!(!r.contains_rect(1.0, 1.0, 0.0, 1.0));
        assert!(!Rectangle2D::new(0.0, 0.0, 0.0, 0.0).contains_rect(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn intersects_requires_overlap_area() {
        let r = ten();
        assert!(r.intersects(5.0, 5.0, 10.0, 10.0));
        assert!(!r.intersects(10.0, 0.0, 5.0, 5.0));
        assert!(!r.intersects(-5.0, 0.0, 5.0, 5.0));
        assert!(!r.intersects(1.0, 1.0, 0.0, 5.0));
        assert!(!Rectangle2D::new(0.0, 0.0, -1.0, 10.0).intersects(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn outcodes() {
        let r = ten();
        assert_eq!(r.outcode(5.0, 5.0), 0);
        assert_eq!(r.outcode(10.0, 10.0), 0);
        assert_eq!(r.outcode(-1.0, 5.0), OUT_LEFT);
        assert_eq!(r.outcode(11.0, -1.0), OUT_RIGHT | OUT_TOP);
        assert_eq!(r.outcode_point(&Point2D::new(5.0, 11.0)), OUT_BOTTOM);

        let flat = Rectangle2D::new(0.0, 0.0, 0.0, 10.0);
        assert_eq!(flat.outcode(0.0, 5.0), OUT_LEFT | OUT_RIGHT);
    }

    #[test]
    fn line_intersection() {
        let r = ten();
        // endpoint inside
        assert!(r.intersects_line(5.0, 5.0, 20.0, 20.0));
        // crosses through
        assert!(r.intersects_line(-5.0, 5.0, 15.0, 5.0));
        assert!(r.intersects_line(-5.0, -5.0, 15.0, 15.0));
        // entirely on one side
        assert!(!r.intersects_line(-5.0, -5.0, -1.0, 20.0));
        // clips past a corner
        assert!(!r.intersects_line(-5.0, 8.0, 8.0, 21.0));
        assert!(r.intersects_line_points(&Point2D::new(5.0, -5.0), &Point2D::new(5.0, 15.0)));
        // no interior means nothing to hit
        assert!(!Rectangle2D::new(0.0, 0.0, 0.0, 10.0).intersects_line(-1.0, 5.0, 1.0, 5.0));
    }

    #[test]
    fn disjoint_intersection_is_negative() {
        let a = Rectangle2D::new(0.0, 0.0, 2.0, 2.0);
        let b = Rectangle2D::new(5.0, 1.0, 2.0, 2.0);
        let i = a.create_intersection(&b);
        assert_eq!(i, Rectangle2D::new(5.0, 1.0, -3.0, 1.0));
        assert!(i.is_empty());
    }

    #[test]
    fn union_spans_both() {
        let a = Rectangle2D::new(0.0, 0.0, 2.0, 2.0);
        let b = Rectangle2D::new(5.0, -1.0, 2.0, 2.0);
        assert_eq!(a.create_union(&b), Rectangle2D::new(0.0, -1.0, 7.0, 3.0));

        let mut dest = Rectangle2D::default();
        Rectangle2D::union(&b, &a, &mut dest);
        assert_eq!(dest, Rectangle2D::new(0.0, -1.0, 7.0, 3.0));
    }

    #[test]
    fn intersect_into_integer_dest() {
        let mut dest = Rectangle::default();
        Rectangle2D::intersect(&ten(), &Rectangle2D::new(2.5, 2.5, 20.0, 20.0), &mut dest);
        assert_eq!(dest, Rectangle::new(2, 2, 8, 8));
    }

    #[test]
    fn add_extends_frame() {
        let mut r = Rectangle2D::new(1.0, 1.0, 1.0, 1.0);
        r.add(5.0, -1.0);
        assert_eq!(r, Rectangle2D::new(1.0, -1.0, 4.0, 3.0));
        r.add_point(&Point2D::new(0.0, 0.0));
        assert_eq!(r, Rectangle2D::new(0.0, -1.0, 5.0, 3.0));
        r.add_rect(&Rectangle2D::new(4.0, 4.0, 2.0, 2.0));
        assert_eq!(r, Rectangle2D::new(0.0, -1.0, 6.0, 7.0));
    }

    #[test]
    fn slice_conversion() {
        let r = Rectangle2D::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap();
        assert_eq!(r, Rectangle2D::new(1.0, 2.0, 3.0, 4.0));
        assert!(matches!(
            Rectangle2D::try_from(&[1.0, 2.0][..]),
            Err(GeomError::InvalidArgument { .. })
        ));
        assert!(Rectangle2D::try_new(0.0, f64::NAN, 1.0, 1.0).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(
            Rectangle2D::new(1.0, 2.5, 3.0, 4.0).to_string(),
            "Rectangle2D [x=1, y=2.5, w=3, h=4]"
        );
    }

    #[test]
    fn from_integer_rect() {
        let r: Rectangle2D = Rectangle::new(-1, 2, 3, 4).into();
        assert_eq!(r, Rectangle2D::new(-1.0, 2.0, 3.0, 4.0));
    }
}
