//! Shape capabilities
//!
//! `RectangularShape` is the frame contract shared by every shape here: an
//! upper-left corner plus an extent, with derived accessors and the various
//! ways of setting a frame. `Shape` is the hit-testing and outline
//! capability. `AnyShape` closes over the concrete shapes so callers can
//! hold a mix of them without boxing.

use enum_dispatch::enum_dispatch;

use crate::errors::Result;
use crate::path::{FlatteningPathIterator, PathIter};
use crate::rect::Rectangle;
use crate::rect2d::Rectangle2D;
use crate::round_rect::RoundRectangle2D;
use crate::transform::AffineTransform;
use crate::types::{Dimension2D, Point2D};

/// A shape whose geometry is defined by a rectangular frame
pub trait RectangularShape {
    fn x(&self) -> f64;

    fn y(&self) -> f64;

    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// True when the frame encloses no area.
    fn is_empty(&self) -> bool;

    /// Replace the frame. Shapes with extra state (arcs) keep it.
    fn set_frame(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn min_x(&self) -> f64 {
        self.x()
    }

    fn min_y(&self) -> f64 {
        self.y()
    }

    fn max_x(&self) -> f64 {
        self.x() + self.width()
    }

    fn max_y(&self) -> f64 {
        self.y() + self.height()
    }

    fn center_x(&self) -> f64 {
        self.x() + self.width() / 2.0
    }

    fn center_y(&self) -> f64 {
        self.y() + self.height() / 2.0
    }

    /// The frame as a floating rectangle.
    fn frame(&self) -> Rectangle2D {
        Rectangle2D::new(self.x(), self.y(), self.width(), self.height())
    }

    fn set_frame_from_location_size(&mut self, loc: Point2D, size: Dimension2D) {
        self.set_frame(loc.x, loc.y, size.width, size.height);
    }

    fn set_frame_from_rect(&mut self, r: &Rectangle2D) {
        self.set_frame(r.x, r.y, r.width, r.height);
    }

    /// Set the frame from two opposite corners given in any order.
    fn set_frame_from_diagonal(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (x1, x2) = if x2 < x1 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y2 < y1 { (y2, y1) } else { (y1, y2) };
        self.set_frame(x1, y1, x2 - x1, y2 - y1);
    }

    fn set_frame_from_diagonal_points(&mut self, p1: &Point2D, p2: &Point2D) {
        self.set_frame_from_diagonal(p1.x, p1.y, p2.x, p2.y);
    }

    /// Center the frame on `(cx, cy)` with one corner at `(corner_x, corner_y)`.
    fn set_frame_from_center(&mut self, cx: f64, cy: f64, corner_x: f64, corner_y: f64) {
        let hw = (corner_x - cx).abs();
        let hh = (corner_y - cy).abs();
        self.set_frame(cx - hw, cy - hh, hw * 2.0, hh * 2.0);
    }

    fn set_frame_from_center_points(&mut self, center: &Point2D, corner: &Point2D) {
        self.set_frame_from_center(center.x, center.y, corner.x, corner.y);
    }

    /// Smallest integer rectangle enclosing the frame.
    ///
    /// The min corner is floored and the max corner ceiled. A frame with a
    /// negative extent has no enclosing box and yields an empty rectangle at
    /// the origin.
    fn frame_bounds(&self) -> Rectangle {
        let (w, h) = (self.width(), self.height());
        if w < 0.0 || h < 0.0 {
            return Rectangle::default();
        }
        let x1 = self.x().floor();
        let y1 = self.y().floor();
        let x2 = (self.x() + w).ceil();
        let y2 = (self.y() + h).ceil();
        // float-to-int `as` saturates, matching the integer range policy
        Rectangle::new(x1 as i32, y1 as i32, (x2 - x1) as i32, (y2 - y1) as i32)
    }
}

/// Hit-testing and outline access for a closed 2D shape
#[enum_dispatch]
pub trait Shape {
    /// Whether the point lies inside the shape.
    fn contains(&self, x: f64, y: f64) -> bool;

    /// Whether the rectangle lies entirely inside the shape.
    fn contains_rect(&self, x: f64, y: f64, w: f64, h: f64) -> bool;

    /// Whether the interior of the shape overlaps the rectangle.
    fn intersects(&self, x: f64, y: f64, w: f64, h: f64) -> bool;

    /// Integer bounding box.
    fn bounds(&self) -> Rectangle;

    /// Floating bounding box.
    fn bounds_2d(&self) -> Rectangle2D;

    /// Outline of the shape, optionally mapped through `at`.
    fn path_iterator(&self, at: Option<&AffineTransform>) -> PathIter;

    fn contains_point(&self, p: &Point2D) -> bool {
        self.contains(p.x, p.y)
    }

    fn contains_rectangle(&self, r: &Rectangle2D) -> bool {
        self.contains_rect(r.x, r.y, r.width, r.height)
    }

    fn intersects_rectangle(&self, r: &Rectangle2D) -> bool {
        self.intersects(r.x, r.y, r.width, r.height)
    }

    /// Outline with every curve replaced by line segments no further than
    /// `flatness` from the true curve.
    fn flattened_path_iterator(
        &self,
        at: Option<&AffineTransform>,
        flatness: f64,
    ) -> Result<FlatteningPathIterator<PathIter>> {
        FlatteningPathIterator::new(self.path_iterator(at), flatness)
    }
}

/// Any of the built-in shapes
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Rectangle2D,
    Rectangle,
    RoundRectangle2D,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PathIterator, PathIteratorExt, SegmentKind};

    // ==================== RectangularShape tests ====================

    #[test]
    fn derived_accessors() {
        let r = Rectangle2D::new(1.0, 2.0, 4.0, 6.0);
        assert_eq!((r.min_x(), r.min_y()), (1.0, 2.0));
        assert_eq!((r.max_x(), r.max_y()), (5.0, 8.0));
        assert_eq!((r.center_x(), r.center_y()), (3.0, 5.0));
    }

    #[test]
    fn diagonal_sorts_corners() {
        let mut r = Rectangle2D::default();
        r.set_frame_from_diagonal(5.0, 5.0, 1.0, 1.0);
        assert_eq!(r, Rectangle2D::new(1.0, 1.0, 4.0, 4.0));

        r.set_frame_from_diagonal_points(&Point2D::new(0.0, 9.0), &Point2D::new(3.0, 2.0));
        assert_eq!(r, Rectangle2D::new(0.0, 2.0, 3.0, 7.0));
    }

    #[test]
    fn center_uses_absolute_half_extents() {
        let mut r = Rectangle2D::default();
        r.set_frame_from_center(10.0, 10.0, 7.0, 14.0);
        assert_eq!(r, Rectangle2D::new(7.0, 6.0, 6.0, 8.0));
        assert_eq!((r.center_x(), r.center_y()), (10.0, 10.0));
    }

    #[test]
    fn location_size_frame() {
        let mut r = Rectangle2D::default();
        r.set_frame_from_location_size(Point2D::new(1.0, 1.0), Dimension2D::new(2.0, 3.0));
        assert_eq!(r.frame(), Rectangle2D::new(1.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn frame_bounds_floor_and_ceil() {
        let r = Rectangle2D::new(0.5, -0.5, 2.0, 1.25);
        assert_eq!(r.frame_bounds(), Rectangle::new(0, -1, 3, 2));

        let neg = Rectangle2D::new(3.0, 3.0, -1.0, 2.0);
        assert_eq!(neg.frame_bounds(), Rectangle::default());
    }

    #[test]
    fn frame_setter_on_integer_rect_clamps() {
        let mut r = Rectangle::default();
        r.set_frame(1.5, 2.0, 3.2, 4.0);
        assert_eq!(r, Rectangle::new(1, 2, 4, 4));
    }

    // ==================== Shape tests ====================

    #[test]
    fn any_shape_dispatches() {
        let shapes: Vec<AnyShape> = vec![
            Rectangle2D::new(0.0, 0.0, 10.0, 10.0).into(),
            Rectangle::new(0, 0, 10, 10).into(),
            RoundRectangle2D::new(0.0, 0.0, 10.0, 10.0, 4.0, 4.0).into(),
        ];
        for s in &shapes {
            assert!(s.contains(5.0, 5.0));
            assert!(!s.contains(10.0, 10.0));
            assert!(s.intersects(9.0, 5.0, 5.0, 1.0));
            assert_eq!(s.bounds(), Rectangle::new(0, 0, 10, 10));
            assert_eq!(s.bounds_2d(), Rectangle2D::new(0.0, 0.0, 10.0, 10.0));
            assert_eq!(s.path_iterator(None).winding_rule(), crate::path::WindingRule::NonZero);
        }
        // the cut-off corner only matters for the rounded shape
        let hits: Vec<_> = shapes.iter().map(|s| s.contains(0.1, 0.1)).collect();
        assert_eq!(hits, [true, true, false]);
    }

    #[test]
    fn point_and_rect_overloads() {
        let r = Rectangle2D::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(&Point2D::new(0.0, 0.0)));
        assert!(r.contains_rectangle(&Rectangle2D::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!r.intersects_rectangle(&Rectangle2D::new(10.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn flattened_outline_has_no_curves() {
        let rr = AnyShape::from(RoundRectangle2D::new(0.0, 0.0, 30.0, 20.0, 10.0, 10.0));
        let segs: Vec<_> = rr
            .flattened_path_iterator(None, 0.25)
            .unwrap()
            .segments()
            .collect();
        assert!(segs.iter().all(|s| matches!(
            s.kind,
            SegmentKind::MoveTo | SegmentKind::LineTo | SegmentKind::Close
        )));
        assert!(rr.flattened_path_iterator(None, -0.5).is_err());
    }
}
