//! Outline of an axis-aligned rectangle

use super::{PathIterator, PathSegment, SegmentKind, WindingRule, apply_transform};
use crate::errors::{GeomError, Result};
use crate::shape::RectangularShape;
use crate::transform::AffineTransform;

/// Index of the closing segment.
const CLOSE_INDEX: u8 = 5;

/// Walks the four corners clockwise from the upper-left, then closes.
///
/// Indices 0..=4 are corners (MOVETO then LINETOs back to the start),
/// index 5 is CLOSE. A rectangle with a negative extent yields nothing.
#[derive(Debug, Clone)]
pub struct RectIterator {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    affine: Option<AffineTransform>,
    index: u8,
}

impl RectIterator {
    pub fn new(r: &impl RectangularShape, at: Option<&AffineTransform>) -> Self {
        let (w, h) = (r.width(), r.height());
        let index = if w < 0.0 || h < 0.0 {
            crate::log::debug!(w, h, "rect iterator over non-existent rectangle");
            CLOSE_INDEX + 1
        } else {
            0
        };
        Self {
            x: r.x(),
            y: r.y(),
            w,
            h,
            affine: at.copied(),
            index,
        }
    }
}

impl PathIterator for RectIterator {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    fn is_done(&self) -> bool {
        self.index > CLOSE_INDEX
    }

    fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    fn current_segment(&self) -> Result<PathSegment> {
        if self.is_done() {
            return Err(GeomError::NoSuchElement { iterator: "rect" });
        }
        if self.index == CLOSE_INDEX {
            return Ok(PathSegment::close());
        }
        let mut coords = [self.x, self.y, 0.0, 0.0, 0.0, 0.0];
        if self.index == 1 || self.index == 2 {
            coords[0] += self.w;
        }
        if self.index == 2 || self.index == 3 {
            coords[1] += self.h;
        }
        apply_transform(self.affine.as_ref(), &mut coords, 1);
        let kind = if self.index == 0 {
            SegmentKind::MoveTo
        } else {
            SegmentKind::LineTo
        };
        Ok(PathSegment::new(kind, coords))
    }
}
