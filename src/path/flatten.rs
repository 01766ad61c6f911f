//! Curve flattening
//!
//! Wraps another `PathIterator` and replaces every QUADTO/CUBICTO with a run
//! of LINETOs. Curves are split at t = 0.5 until every control point lies
//! within `flatness` of the chord, or the subdivision limit is reached.

use std::collections::VecDeque;

use glam::DVec2;

use super::{PathIterator, PathSegment, SegmentKind, WindingRule};
use crate::defaults::FLATTEN_LIMIT;
use crate::errors::{GeomError, Result};

/// A `PathIterator` that only ever yields MOVETO, LINETO and CLOSE.
#[derive(Debug, Clone)]
pub struct FlatteningPathIterator<I> {
    src: I,
    flatness_sq: f64,
    limit: u32,
    /// Flattened segments waiting to be handed out.
    pending: VecDeque<PathSegment>,
    /// Where the pen rests after the last source segment.
    pen: DVec2,
    /// Target of the next CLOSE.
    subpath_start: DVec2,
}

impl<I: PathIterator> FlatteningPathIterator<I> {
    pub fn new(src: I, flatness: f64) -> Result<Self> {
        Self::with_limit(src, flatness, FLATTEN_LIMIT)
    }

    /// Like `new`, with an explicit cap on subdivision depth.
    pub fn with_limit(src: I, flatness: f64, limit: u32) -> Result<Self> {
        if !(flatness >= 0.0) {
            return Err(GeomError::invalid_argument(format!(
                "flatness must be >= 0, got {flatness}"
            )));
        }
        let mut it = Self {
            src,
            flatness_sq: flatness * flatness,
            limit,
            pending: VecDeque::new(),
            pen: DVec2::ZERO,
            subpath_start: DVec2::ZERO,
        };
        it.fill();
        Ok(it)
    }

    pub fn flatness(&self) -> f64 {
        self.flatness_sq.sqrt()
    }

    pub fn recursion_limit(&self) -> u32 {
        self.limit
    }

    /// Pull source segments until something is pending or the source runs dry.
    fn fill(&mut self) {
        while self.pending.is_empty() && !self.src.is_done() {
            let Ok(seg) = self.src.current_segment() else {
                break;
            };
            self.src.advance();

            let c = seg.coords();
            match seg.kind {
                SegmentKind::MoveTo => {
                    self.pen = DVec2::new(c[0], c[1]);
                    self.subpath_start = self.pen;
                    self.pending.push_back(seg);
                }
                SegmentKind::LineTo => {
                    self.pen = DVec2::new(c[0], c[1]);
                    self.pending.push_back(seg);
                }
                SegmentKind::QuadTo => {
                    let ctrl = DVec2::new(c[0], c[1]);
                    let end = DVec2::new(c[2], c[3]);
                    self.flatten_quad(self.pen, ctrl, end, 0);
                    self.pen = end;
                }
                SegmentKind::CubicTo => {
                    let c1 = DVec2::new(c[0], c[1]);
                    let c2 = DVec2::new(c[2], c[3]);
                    let end = DVec2::new(c[4], c[5]);
                    self.flatten_cubic(self.pen, c1, c2, end, 0);
                    self.pen = end;
                }
                SegmentKind::Close => {
                    self.pen = self.subpath_start;
                    self.pending.push_back(seg);
                }
            }
        }
    }

    fn flatten_quad(&mut self, p0: DVec2, c: DVec2, p1: DVec2, level: u32) {
        let flat = seg_dist_sq(p0, p1, c) <= self.flatness_sq;
        if flat || level >= self.limit {
            if !flat {
                crate::log::warn!(level, "quad flattening stopped at subdivision limit");
            }
            self.pending.push_back(PathSegment::line_to(p1));
            return;
        }
        let l = (p0 + c) * 0.5;
        let r = (c + p1) * 0.5;
        let mid = (l + r) * 0.5;
        self.flatten_quad(p0, l, mid, level + 1);
        self.flatten_quad(mid, r, p1, level + 1);
    }

    fn flatten_cubic(&mut self, p0: DVec2, c1: DVec2, c2: DVec2, p1: DVec2, level: u32) {
        let flat = seg_dist_sq(p0, p1, c1).max(seg_dist_sq(p0, p1, c2)) <= self.flatness_sq;
        if flat || level >= self.limit {
            if !flat {
                crate::log::warn!(level, "cubic flattening stopped at subdivision limit");
            }
            self.pending.push_back(PathSegment::line_to(p1));
            return;
        }
        let a = (p0 + c1) * 0.5;
        let b = (c1 + c2) * 0.5;
        let c = (c2 + p1) * 0.5;
        let ab = (a + b) * 0.5;
        let bc = (b + c) * 0.5;
        let mid = (ab + bc) * 0.5;
        self.flatten_cubic(p0, a, ab, mid, level + 1);
        self.flatten_cubic(mid, bc, c, p1, level + 1);
    }
}

/// Squared distance from `p` to the segment `a`-`b`.
fn seg_dist_sq(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
    };
    (a + ab * t).distance_squared(p)
}

impl<I: PathIterator> PathIterator for FlatteningPathIterator<I> {
    fn winding_rule(&self) -> WindingRule {
        self.src.winding_rule()
    }

    fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    fn advance(&mut self) {
        self.pending.pop_front();
        self.fill();
    }

    fn current_segment(&self) -> Result<PathSegment> {
        self.pending
            .front()
            .copied()
            .ok_or(GeomError::NoSuchElement {
                iterator: "flattening",
            })
    }
}
