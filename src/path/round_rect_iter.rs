//! Outline of a rounded rectangle
//!
//! Each corner is a quarter ellipse approximated by one cubic Bezier whose
//! control points sit `cv` of the way along the tangents, where
//! `cv = 4/3 * a * b / c` is derived from `tan(pi/4)`.

use std::sync::LazyLock;

use super::{PathIterator, PathSegment, SegmentKind, WindingRule, apply_transform};
use crate::errors::{GeomError, Result};
use crate::round_rect::RoundRectangle2D;
use crate::shape::RectangularShape;
use crate::transform::AffineTransform;

/// One entry of the outline table.
///
/// Each used point is `(v0, v1, v2, v3)`, mapped to
/// `(x + v0*w + v1*aw, y + v2*h + v3*ah)`.
#[derive(Debug, Clone, Copy)]
struct CtrlRow {
    kind: SegmentKind,
    offsets: [[f64; 4]; 3],
}

impl CtrlRow {
    const fn point(kind: SegmentKind, p: [f64; 4]) -> Self {
        Self {
            kind,
            offsets: [p, [0.0; 4], [0.0; 4]],
        }
    }

    const fn cubic(c1: [f64; 4], c2: [f64; 4], end: [f64; 4]) -> Self {
        Self {
            kind: SegmentKind::CubicTo,
            offsets: [c1, c2, end],
        }
    }
}

const ROW_COUNT: usize = 10;

/// Outline table, built on first use and shared read-only afterwards.
static CTRL_PTS: LazyLock<[CtrlRow; ROW_COUNT]> = LazyLock::new(|| {
    let angle = std::f64::consts::PI / 4.0;
    let a = 1.0 - angle.cos();
    let b = angle.tan();
    let c = (1.0 + b * b).sqrt() - 1.0 + a;
    let cv = 4.0 / 3.0 * a * b / c;
    let acv = (1.0 - cv) / 2.0;

    use SegmentKind::{Close, LineTo, MoveTo};
    [
        CtrlRow::point(MoveTo, [0.0, 0.0, 0.0, 0.5]),
        CtrlRow::point(LineTo, [0.0, 0.0, 1.0, -0.5]),
        CtrlRow::cubic(
            [0.0, 0.0, 1.0, -acv],
            [0.0, acv, 1.0, 0.0],
            [0.0, 0.5, 1.0, 0.0],
        ),
        CtrlRow::point(LineTo, [1.0, -0.5, 1.0, 0.0]),
        CtrlRow::cubic(
            [1.0, -acv, 1.0, 0.0],
            [1.0, 0.0, 1.0, -acv],
            [1.0, 0.0, 1.0, -0.5],
        ),
        CtrlRow::point(LineTo, [1.0, 0.0, 0.0, 0.5]),
        CtrlRow::cubic(
            [1.0, 0.0, 0.0, acv],
            [1.0, -acv, 0.0, 0.0],
            [1.0, -0.5, 0.0, 0.0],
        ),
        CtrlRow::point(LineTo, [0.0, 0.5, 0.0, 0.0]),
        CtrlRow::cubic(
            [0.0, acv, 0.0, 0.0],
            [0.0, 0.0, 0.0, acv],
            [0.0, 0.0, 0.0, 0.5],
        ),
        CtrlRow {
            kind: Close,
            offsets: [[0.0; 4]; 3],
        },
    ]
});

/// Walks a rounded rectangle: left edge, then each corner arc and edge
/// counter-clockwise in screen space, then CLOSE. Ten segments in total.
#[derive(Debug, Clone)]
pub struct RoundRectIterator {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    aw: f64,
    ah: f64,
    affine: Option<AffineTransform>,
    index: usize,
}

impl RoundRectIterator {
    /// Snapshot `rr`. Arcs are clamped to the rectangle's own extents; a
    /// negative arc or extent leaves the iterator done from the start.
    pub fn new(rr: &RoundRectangle2D, at: Option<&AffineTransform>) -> Self {
        let (w, h) = (rr.width(), rr.height());
        let aw = w.min(rr.arc_width);
        let ah = h.min(rr.arc_height);
        let index = if aw < 0.0 || ah < 0.0 {
            crate::log::debug!(aw, ah, "roundrect iterator with negative arc");
            ROW_COUNT
        } else {
            0
        };
        Self {
            x: rr.x(),
            y: rr.y(),
            w,
            h,
            aw,
            ah,
            affine: at.copied(),
            index,
        }
    }
}

impl PathIterator for RoundRectIterator {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    fn is_done(&self) -> bool {
        self.index >= ROW_COUNT
    }

    fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    fn current_segment(&self) -> Result<PathSegment> {
        if self.is_done() {
            return Err(GeomError::NoSuchElement {
                iterator: "roundrect",
            });
        }
        let row = &CTRL_PTS[self.index];
        let n = row.kind.point_count();
        let mut coords = [0.0; 6];
        for (i, v) in row.offsets.iter().take(n).enumerate() {
            coords[2 * i] = self.x + v[0] * self.w + v[1] * self.aw;
            coords[2 * i + 1] = self.y + v[2] * self.h + v[3] * self.ah;
        }
        apply_transform(self.affine.as_ref(), &mut coords, n);
        Ok(PathSegment::new(row.kind, coords))
    }
}
