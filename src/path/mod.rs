//! Boundary tracing for shapes
//!
//! This module is organized into submodules:
//! - `rect_iter`: the four-corner outline of a rectangle
//! - `round_rect_iter`: straight edges joined by cubic corner arcs
//! - `flatten`: a wrapper that replaces curves with line segments
//!
//! Every iterator snapshots its source shape at construction, so mutating
//! the shape afterwards does not affect an iteration in flight.

pub mod flatten;
pub mod rect_iter;
pub mod round_rect_iter;

pub use flatten::FlatteningPathIterator;
pub use rect_iter::RectIterator;
pub use round_rect_iter::RoundRectIterator;

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::errors::Result;
use crate::transform::AffineTransform;
use crate::types::Point2D;

/// Drawing instruction carried by a path segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SegmentKind {
    MoveTo = 0,
    LineTo = 1,
    QuadTo = 2,
    CubicTo = 3,
    Close = 4,
}

impl SegmentKind {
    /// Number of coordinate pairs the segment carries.
    pub fn point_count(self) -> usize {
        match self {
            SegmentKind::MoveTo | SegmentKind::LineTo => 1,
            SegmentKind::QuadTo => 2,
            SegmentKind::CubicTo => 3,
            SegmentKind::Close => 0,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::MoveTo => "MOVETO",
            SegmentKind::LineTo => "LINETO",
            SegmentKind::QuadTo => "QUADTO",
            SegmentKind::CubicTo => "CUBICTO",
            SegmentKind::Close => "CLOSE",
        };
        f.write_str(name)
    }
}

/// Rule deciding which regions of a path are inside
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WindingRule {
    EvenOdd = 0,
    NonZero = 1,
}

/// One drawing instruction plus up to three (x, y) pairs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment {
    pub kind: SegmentKind,
    coords: [f64; 6],
}

impl PathSegment {
    pub(crate) fn new(kind: SegmentKind, coords: [f64; 6]) -> Self {
        Self { kind, coords }
    }

    pub(crate) fn close() -> Self {
        Self::new(SegmentKind::Close, [0.0; 6])
    }

    pub(crate) fn line_to(p: glam::DVec2) -> Self {
        Self::new(SegmentKind::LineTo, [p.x, p.y, 0.0, 0.0, 0.0, 0.0])
    }

    /// The meaningful coordinates, `2 * kind.point_count()` of them.
    pub fn coords(&self) -> &[f64] {
        &self.coords[..self.kind.point_count() * 2]
    }

    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.coords()
            .chunks_exact(2)
            .map(|c| Point2D::new(c[0], c[1]))
    }

    /// The point the pen rests on after this segment (none for `Close`).
    pub fn end_point(&self) -> Option<Point2D> {
        self.points().last()
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for p in self.points() {
            write!(f, " ({}, {})", p.x, p.y)?;
        }
        Ok(())
    }
}

/// Map the first `n` points of a coordinate buffer through an optional transform.
pub(crate) fn apply_transform(at: Option<&AffineTransform>, coords: &mut [f64; 6], n: usize) {
    if let Some(at) = at {
        for pair in coords.chunks_exact_mut(2).take(n) {
            let p = at.apply(glam::dvec2(pair[0], pair[1]));
            pair[0] = p.x;
            pair[1] = p.y;
        }
    }
}

/// Step-wise access to the segments of a shape outline
#[enum_dispatch]
pub trait PathIterator {
    fn winding_rule(&self) -> WindingRule;

    fn is_done(&self) -> bool;

    /// Move to the next segment.
    fn advance(&mut self);

    /// The segment at the current position.
    ///
    /// Fails with `GeomError::NoSuchElement` once the iterator is done.
    fn current_segment(&self) -> Result<PathSegment>;
}

/// Iterator over any of the built-in shape outlines
#[enum_dispatch(PathIterator)]
#[derive(Debug, Clone)]
pub enum PathIter {
    RectIterator,
    RoundRectIterator,
}

/// Adapts a `PathIterator` into a standard `Iterator`
#[derive(Debug, Clone)]
pub struct Segments<I> {
    inner: I,
}

impl<I: PathIterator> Iterator for Segments<I> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        if self.inner.is_done() {
            return None;
        }
        let segment = self.inner.current_segment().ok()?;
        self.inner.advance();
        Some(segment)
    }
}

/// Convenience methods for every `PathIterator`
pub trait PathIteratorExt: PathIterator + Sized {
    fn segments(self) -> Segments<Self> {
        Segments { inner: self }
    }
}

impl<I: PathIterator> PathIteratorExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_constants() {
        assert_eq!(SegmentKind::MoveTo as u8, 0);
        assert_eq!(SegmentKind::LineTo as u8, 1);
        assert_eq!(SegmentKind::QuadTo as u8, 2);
        assert_eq!(SegmentKind::CubicTo as u8, 3);
        assert_eq!(SegmentKind::Close as u8, 4);
        assert_eq!(WindingRule::EvenOdd as u8, 0);
        assert_eq!(WindingRule::NonZero as u8, 1);
    }

    #[test]
    fn segment_coords_follow_kind() {
        let seg = PathSegment::new(SegmentKind::QuadTo, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(seg.coords(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(seg.end_point(), Some(Point2D::new(3.0, 4.0)));
        assert_eq!(seg.to_string(), "QUADTO (1, 2) (3, 4)");

        let close = PathSegment::close();
        assert!(close.coords().is_empty());
        assert_eq!(close.end_point(), None);
        assert_eq!(close.to_string(), "CLOSE");
    }

    #[test]
    fn apply_transform_respects_count() {
        let at = AffineTransform::translation(1.0, 1.0);
        let mut coords = [0.0; 6];
        apply_transform(Some(&at), &mut coords, 2);
        assert_eq!(coords, [1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);

        apply_transform(None, &mut coords, 3);
        assert_eq!(coords, [1.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
    }
}
