//! Point and dimension value types.
//!
//! `Point2D`/`Dimension2D` hold raw `f64` pairs. `Point`/`Dimension` are the
//! integer variants, and each has its own rounding rule for floating input:
//! points round half up (`floor(v + 0.5)`), dimensions round up (`ceil`).

use std::fmt;
use std::ops::{Add, Sub};

use crate::errors::{GeomError, Result, check_finite};

/// Narrow a rounded `f64` to `i32`, saturating at the range ends (NaN maps to 0).
#[inline]
fn narrow(v: f64) -> i32 {
    if v >= i32::MAX as f64 {
        i32::MAX
    } else if v <= i32::MIN as f64 {
        i32::MIN
    } else {
        v as i32
    }
}

/// A location in continuous 2D space
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    /// Create a point, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        Ok(Point2D {
            x: check_finite(x)?,
            y: check_finite(y)?,
        })
    }

    pub fn set_location(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_location_from(&mut self, p: &Point2D) {
        self.set_location(p.x, p.y);
    }

    /// Square of the distance between two arbitrary points.
    pub fn distance_sq_between(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        let dx = x1 - x2;
        let dy = y1 - y2;
        dx * dx + dy * dy
    }

    /// Distance between two arbitrary points.
    pub fn distance_between(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        Self::distance_sq_between(x1, y1, x2, y2).sqrt()
    }

    pub fn distance_sq_to(&self, px: f64, py: f64) -> f64 {
        Self::distance_sq_between(px, py, self.x, self.y)
    }

    pub fn distance_to(&self, px: f64, py: f64) -> f64 {
        self.distance_sq_to(px, py).sqrt()
    }

    pub fn distance_sq(&self, other: &Point2D) -> f64 {
        self.distance_sq_to(other.x, other.y)
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        self.distance_to(other.x, other.y)
    }

    #[inline]
    pub(crate) fn to_dvec2(self) -> glam::DVec2 {
        glam::dvec2(self.x, self.y)
    }
}

impl From<glam::DVec2> for Point2D {
    fn from(v: glam::DVec2) -> Self {
        Point2D { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(v: (f64, f64)) -> Self {
        Point2D { x: v.0, y: v.1 }
    }
}

impl TryFrom<&[f64]> for Point2D {
    type Error = GeomError;

    fn try_from(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x, y] => Ok(Point2D { x, y }),
            _ => Err(GeomError::invalid_argument(format!(
                "a point takes 2 coordinates, got {}",
                coords.len()
            ))),
        }
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2D[{},{}]", self.x, self.y)
    }
}

/// A location with integer coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// A copy of this point.
    pub fn location(&self) -> Point {
        *self
    }

    /// Move to a floating location, rounding half up on each axis.
    ///
    /// `move_to(2.5, -2.5)` lands on `(3, -2)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = narrow((x + 0.5).floor());
        self.y = narrow((y + 0.5).floor());
    }

    pub fn set_location(&mut self, x: f64, y: f64) {
        self.move_to(x, y);
    }

    pub fn set_location_from(&mut self, p: &Point) {
        self.move_to(f64::from(p.x), f64::from(p.y));
    }

    /// Shift by an offset; the sum is rounded and saturated like `move_to`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.move_to(f64::from(self.x) + dx, f64::from(self.y) + dy);
    }

    pub fn distance_sq(&self, other: &Point) -> f64 {
        Point2D::from(*self).distance_sq(&Point2D::from(*other))
    }

    pub fn distance(&self, other: &Point) -> f64 {
        Point2D::from(*self).distance(&Point2D::from(*other))
    }
}

impl From<Point> for Point2D {
    fn from(p: Point) -> Self {
        Point2D {
            x: f64::from(p.x),
            y: f64::from(p.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from(v: (i32, i32)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point [x={},y={}]", self.x, self.y)
    }
}

/// A floating width and height
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Dimension2D {
    pub width: f64,
    pub height: f64,
}

impl Dimension2D {
    pub const fn new(width: f64, height: f64) -> Self {
        Dimension2D { width, height }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn set_size_from(&mut self, d: &Dimension2D) {
        self.set_size(d.width, d.height);
    }
}

impl From<(f64, f64)> for Dimension2D {
    fn from(v: (f64, f64)) -> Self {
        Dimension2D {
            width: v.0,
            height: v.1,
        }
    }
}

impl fmt::Display for Dimension2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dimension2D [width={}, height={}]", self.width, self.height)
    }
}

/// An integer width and height
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub width: i32,
    pub height: i32,
}

impl Dimension {
    pub const fn new(width: i32, height: i32) -> Self {
        Dimension { width, height }
    }

    /// A copy of this dimension.
    pub fn size(&self) -> Dimension {
        *self
    }

    /// Set from floating extents, rounding each up and clamping to the `i32` range.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = narrow(width.ceil());
        self.height = narrow(height.ceil());
    }

    pub fn set_size_from(&mut self, d: &Dimension) {
        self.width = d.width;
        self.height = d.height;
    }
}

impl From<Dimension> for Dimension2D {
    fn from(d: Dimension) -> Self {
        Dimension2D {
            width: f64::from(d.width),
            height: f64::from(d.height),
        }
    }
}

impl From<(i32, i32)> for Dimension {
    fn from(v: (i32, i32)) -> Self {
        Dimension {
            width: v.0,
            height: v.1,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dimension [width={}, height={}]", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Point2D tests ====================

    #[test]
    fn point2d_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_eq!(a.distance_sq(&b), 25.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance_to(0.0, 0.0), 5.0);
        assert_eq!(Point2D::distance_between(1.0, 1.0, 4.0, 5.0), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn point2d_try_new_rejects_non_finite() {
        assert!(Point2D::try_new(1.0, 2.0).is_ok());
        assert!(matches!(
            Point2D::try_new(f64::NAN, 0.0),
            Err(GeomError::NonFinite { .. })
        ));
        assert!(Point2D::try_new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn point2d_from_slice() {
        let p = Point2D::try_from(&[1.0, 2.0][..]).unwrap();
        assert_eq!(p, Point2D::new(1.0, 2.0));
        assert!(matches!(
            Point2D::try_from(&[1.0, 2.0, 3.0][..]),
            Err(GeomError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn point2d_set_location() {
        let mut p = Point2D::default();
        p.set_location(1.5, -2.5);
        assert_eq!(p, Point2D::new(1.5, -2.5));
        p.set_location_from(&Point2D::ORIGIN);
        assert_eq!(p, Point2D::ORIGIN);
    }

    // ==================== Point tests ====================

    #[test]
    fn point_move_rounds_half_up() {
        let mut p = Point::default();
        p.move_to(2.5, -2.5);
        assert_eq!(p, Point::new(3, -2));
        p.move_to(-0.5, 0.49);
        assert_eq!(p, Point::new(0, 0));
        p.move_to(-1.51, 7.5);
        assert_eq!(p, Point::new(-2, 8));
    }

    #[test]
    fn point_move_saturates() {
        let mut p = Point::default();
        p.move_to(1e12, -1e12);
        assert_eq!(p, Point::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn point_translate() {
        let mut p = Point::new(1, 1);
        p.translate(1.5, -0.5);
        assert_eq!(p, Point::new(3, 1));
    }

    #[test]
    fn point_set_location_from() {
        let mut p = Point::default();
        p.set_location_from(&Point::new(-4, 9));
        assert_eq!(p.location(), Point::new(-4, 9));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(1, -2).to_string(), "Point [x=1,y=-2]");
        assert_eq!(Point2D::new(1.5, 2.0).to_string(), "Point2D[1.5,2]");
    }

    // ==================== Dimension tests ====================

    #[test]
    fn dimension_set_size_ceils() {
        let mut d = Dimension::default();
        d.set_size(2.1, -2.9);
        assert_eq!(d, Dimension::new(3, -2));
    }

    #[test]
    fn dimension_set_size_clamps() {
        let mut d = Dimension::default();
        d.set_size(f64::from(i32::MAX) + 0.5, -1e20);
        assert_eq!(d, Dimension::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn dimension_conversions() {
        let d: Dimension2D = Dimension::new(4, 5).into();
        assert_eq!(d, Dimension2D::new(4.0, 5.0));
        assert_eq!(
            Dimension::new(4, 5).to_string(),
            "Dimension [width=4, height=5]"
        );
    }
}
