//! Integer rectangle with overflow-safe algebra
//!
//! Every operation that could leave the `i32` range is computed in `i64` and
//! clamped back. Overflow is never an error; coordinates saturate and
//! extents are adjusted so the far edge lands where it would have, as far
//! as the range allows.
//!
//! A negative width or height marks a "non-existent" rectangle. Union and
//! add treat such a rectangle as having no extent at all.

use std::fmt;

use crate::defaults::{INT_MAX, INT_MIN, saturate};
use crate::path::{PathIter, RectIterator};
use crate::rect2d::Rectangle2D;
use crate::shape::{RectangularShape, Shape};
use crate::transform::AffineTransform;
use crate::types::{Dimension, Point};

/// An axis-aligned rectangle with `i32` coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Clamp a floating coordinate into range, rounding toward the interior.
fn clip(v: f64, ceil: bool) -> i32 {
    if v <= INT_MIN as f64 {
        i32::MIN
    } else if v >= INT_MAX as f64 {
        i32::MAX
    } else if ceil {
        v.ceil() as i32
    } else {
        v.floor() as i32
    }
}

/// One axis of `set_rect`: returns the stored coordinate and extent.
fn clip_axis(v: f64, extent: f64) -> (i32, i32) {
    if v > 2.0 * INT_MAX as f64 {
        crate::log::debug!(v, "coordinate beyond integer range, marking non-existent");
        return (i32::MAX, -1);
    }
    let pos = clip(v, false);
    let mut extent = extent;
    if extent >= 0.0 {
        extent += v - f64::from(pos);
    }
    (pos, clip(extent, extent >= 0.0))
}

/// One axis of `translate`.
fn translate_axis(pos: i32, extent: i32, d: i32) -> (i32, i32) {
    let moved = i64::from(pos) + i64::from(d);
    if moved < INT_MIN {
        crate::log::debug!(pos, d, "translate underflow, pinning to i32::MIN");
        let extent = if extent >= 0 {
            // keep the far edge where it would have landed
            (moved + i64::from(extent) - INT_MIN).max(0) as i32
        } else {
            extent
        };
        (i32::MIN, extent)
    } else if moved > INT_MAX {
        crate::log::debug!(pos, d, "translate overflow, pinning to i32::MAX");
        let extent = if extent >= 0 {
            saturate(i64::from(extent) + moved - INT_MAX)
        } else {
            extent
        };
        (i32::MAX, extent)
    } else {
        (moved as i32, extent)
    }
}

/// One axis of `grow`.
fn grow_axis(pos: i32, extent: i32, d: i32) -> (i32, i32) {
    let mut lo = i64::from(pos);
    let mut hi = lo + i64::from(extent);
    lo -= i64::from(d);
    hi += i64::from(d);
    if !(INT_MIN..=INT_MAX).contains(&lo) || !(INT_MIN..=INT_MAX).contains(&hi) {
        crate::log::debug!(lo, hi, "grow clamped to integer range");
    }
    if hi < lo {
        // Non-existent: the extent must stay negative, so take it before
        // clamping lo can reorder the edges.
        let extent = (hi - lo).max(INT_MIN);
        (saturate(lo), extent as i32)
    } else {
        // Clamp lo first; the extent only goes negative if the whole
        // rectangle fell below the range.
        let lo = lo.clamp(INT_MIN, INT_MAX);
        (lo as i32, saturate(hi - lo))
    }
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin with the given size.
    pub fn from_size(d: Dimension) -> Self {
        Rectangle::new(0, 0, d.width, d.height)
    }

    /// A zero-size rectangle at `p`.
    pub fn from_location(p: Point) -> Self {
        Rectangle::new(p.x, p.y, 0, 0)
    }

    pub fn from_location_size(p: Point, d: Dimension) -> Self {
        Rectangle::new(p.x, p.y, d.width, d.height)
    }

    pub fn from_rect(r: &Rectangle) -> Self {
        *r
    }

    /// Overwrite all four fields without any clamping.
    pub fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) {
        *self = Rectangle::new(x, y, width, height);
    }

    pub fn set_bounds_from(&mut self, r: &Rectangle) {
        *self = *r;
    }

    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_location(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_location_from(&mut self, p: &Point) {
        self.set_location(p.x, p.y);
    }

    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_size_from(&mut self, d: &Dimension) {
        self.set_size(d.width, d.height);
    }

    /// Store a floating frame, clamped into the integer range.
    ///
    /// Coordinates are floored. Non-negative extents first absorb the
    /// fraction lost to flooring, then are ceiled so the stored rectangle
    /// covers the requested one. A coordinate beyond twice `i32::MAX` cannot
    /// be represented at all and yields `i32::MAX` with extent `-1`.
    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (x, width) = clip_axis(x, width);
        let (y, height) = clip_axis(y, height);
        self.set_bounds(x, y, width, height);
    }

    /// Move by `(dx, dy)`, saturating at the integer range.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        let (x, width) = translate_axis(self.x, self.width, dx);
        let (y, height) = translate_axis(self.y, self.height, dy);
        self.set_bounds(x, y, width, height);
    }

    /// Expand by `h` on the left and right and `v` on the top and bottom.
    ///
    /// Negative amounts shrink. A non-existent rectangle stays non-existent.
    pub fn grow(&mut self, h: i32, v: i32) {
        let (x, width) = grow_axis(self.x, self.width, h);
        let (y, height) = grow_axis(self.y, self.height, v);
        self.set_bounds(x, y, width, height);
    }

    /// Bounding box of `self` and `r`.
    ///
    /// A non-existent receiver yields a copy of `r`; a non-existent `r`
    /// yields a copy of `self`.
    pub fn union(&self, r: &Rectangle) -> Rectangle {
        if self.width < 0 || self.height < 0 {
            return *r;
        }
        if r.width < 0 || r.height < 0 {
            return *self;
        }
        let x1 = self.x.min(r.x);
        let y1 = self.y.min(r.y);
        let x2 = (i64::from(self.x) + i64::from(self.width))
            .max(i64::from(r.x) + i64::from(r.width));
        let y2 = (i64::from(self.y) + i64::from(self.height))
            .max(i64::from(r.y) + i64::from(r.height));
        Rectangle::new(
            x1,
            y1,
            saturate(x2 - i64::from(x1)),
            saturate(y2 - i64::from(y1)),
        )
    }

    /// Grow to include the point `(x, y)`.
    ///
    /// A non-existent receiver becomes a zero-size rectangle at the point.
    pub fn add(&mut self, x: i32, y: i32) {
        if self.width < 0 || self.height < 0 {
            self.set_bounds(x, y, 0, 0);
            return;
        }
        let x1 = self.x.min(x);
        let y1 = self.y.min(y);
        let x2 = (i64::from(self.x) + i64::from(self.width)).max(i64::from(x));
        let y2 = (i64::from(self.y) + i64::from(self.height)).max(i64::from(y));
        self.set_bounds(
            x1,
            y1,
            saturate(x2 - i64::from(x1)),
            saturate(y2 - i64::from(y1)),
        );
    }

    pub fn add_point(&mut self, p: &Point) {
        self.add(p.x, p.y);
    }

    /// Grow to include `r`.
    ///
    /// A non-existent receiver becomes a copy of `r`; a non-existent `r` is
    /// ignored.
    pub fn add_rect(&mut self, r: &Rectangle) {
        if self.width < 0 || self.height < 0 {
            *self = *r;
            return;
        }
        if r.width < 0 || r.height < 0 {
            return;
        }
        *self = self.union(r);
    }

    /// Overlap of `self` and `r`.
    ///
    /// Disjoint rectangles give a negative width and/or height, floored at
    /// `i32::MIN`.
    pub fn intersection(&self, r: &Rectangle) -> Rectangle {
        let x1 = self.x.max(r.x);
        let y1 = self.y.max(r.y);
        let x2 = (i64::from(self.x) + i64::from(self.width))
            .min(i64::from(r.x) + i64::from(r.width));
        let y2 = (i64::from(self.y) + i64::from(self.height))
            .min(i64::from(r.y) + i64::from(r.height));
        Rectangle::new(
            x1,
            y1,
            (x2 - i64::from(x1)).max(INT_MIN) as i32,
            (y2 - i64::from(y1)).max(INT_MIN) as i32,
        )
    }

    /// Whether `(px, py)` lies inside, using integer arithmetic.
    ///
    /// Right/bottom edges that wrap past `i32::MAX` still count as being
    /// beyond the point.
    pub fn contains_xy(&self, px: i32, py: i32) -> bool {
        let (x, y) = (self.x, self.y);
        if self.width < 0 || self.height < 0 {
            return false;
        }
        if px < x || py < y {
            return false;
        }
        let w = self.width.wrapping_add(x);
        let h = self.height.wrapping_add(y);
        (w < x || w > px) && (h < y || h > py)
    }

    pub fn contains_point_int(&self, p: &Point) -> bool {
        self.contains_xy(p.x, p.y)
    }

    /// Whether the rectangle `(rx, ry, rw, rh)` lies entirely inside.
    pub fn contains_xywh(&self, rx: i32, ry: i32, rw: i32, rh: i32) -> bool {
        if self.width < 0 || self.height < 0 || rw < 0 || rh < 0 {
            return false;
        }
        if rx < self.x || ry < self.y {
            return false;
        }
        edge_within(self.x, self.width, rx, rw) && edge_within(self.y, self.height, ry, rh)
    }

    pub fn contains_rectangle_int(&self, r: &Rectangle) -> bool {
        self.contains_xywh(r.x, r.y, r.width, r.height)
    }

    /// Whether the two rectangles share any interior.
    pub fn intersects_rectangle_int(&self, r: &Rectangle) -> bool {
        let (tx, ty, rx, ry) = (self.x, self.y, r.x, r.y);
        if r.width <= 0 || r.height <= 0 || self.width <= 0 || self.height <= 0 {
            return false;
        }
        let rw = r.width.wrapping_add(rx);
        let rh = r.height.wrapping_add(ry);
        let tw = self.width.wrapping_add(tx);
        let th = self.height.wrapping_add(ty);
        (rw < rx || rw > tx) && (rh < ry || rh > ty) && (tw < tx || tw > rx) && (th < ty || th > ry)
    }

    /// Overlap with a floating rectangle, computed in floating point.
    pub fn create_intersection_2d(&self, r: &Rectangle2D) -> Rectangle2D {
        self.frame().create_intersection(r)
    }

    /// Bounding box with a floating rectangle, computed in floating point.
    pub fn create_union_2d(&self, r: &Rectangle2D) -> Rectangle2D {
        self.frame().create_union(r)
    }

    /// Classify a point against the edges as a mask of `OUT_*` bits.
    pub fn outcode(&self, x: f64, y: f64) -> i32 {
        self.frame().outcode(x, y)
    }
}

/// One axis of `contains_xywh`: does the inner span end no later than the
/// outer one, with either end allowed to have wrapped.
fn edge_within(x: i32, w: i32, inner_x: i32, inner_w: i32) -> bool {
    let far = w.wrapping_add(x);
    let inner_far = inner_w.wrapping_add(inner_x);
    if inner_far <= inner_x {
        // inner wrapped or is zero width: only fits if the outer wrapped
        // further
        !(far >= x || inner_far > far)
    } else {
        !(far >= x && inner_far > far)
    }
}

impl RectangularShape for Rectangle {
    fn x(&self) -> f64 {
        f64::from(self.x)
    }

    fn y(&self) -> f64 {
        f64::from(self.y)
    }

    fn width(&self) -> f64 {
        f64::from(self.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.height)
    }

    fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    fn set_frame(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.set_rect(x, y, w, h);
    }
}

impl Shape for Rectangle {
    fn contains(&self, x: f64, y: f64) -> bool {
        self.frame().contains(x, y)
    }

    fn contains_rect(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        self.frame().contains_rect(x, y, w, h)
    }

    fn intersects(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        self.frame().intersects(x, y, w, h)
    }

    fn bounds(&self) -> Rectangle {
        *self
    }

    fn bounds_2d(&self) -> Rectangle2D {
        self.frame()
    }

    fn path_iterator(&self, at: Option<&AffineTransform>) -> PathIter {
        RectIterator::new(self, at).into()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle [x={},y={},width={},height={}]",
            self.x, self.y, self.width, self.height
        )
    }
}
