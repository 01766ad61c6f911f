//! Rectangle with rounded corners
//!
//! Each corner is a quarter ellipse `arc_width` wide and `arc_height` tall.
//! Hit tests treat the shape as a cross-shaped core (full width with the
//! arcs' height trimmed, or full height with the arcs' width trimmed) plus
//! the four corner ellipses.

use crate::path::{PathIter, RoundRectIterator};
use crate::rect::Rectangle;
use crate::rect2d::Rectangle2D;
use crate::shape::{RectangularShape, Shape};
use crate::transform::AffineTransform;

/// A rounded rectangle with `f64` coordinates
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RoundRectangle2D {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub arc_width: f64,
    pub arc_height: f64,
}

/// Which zone of one axis a coordinate falls in: 0 before the shape, 1 in
/// the leading arc, 2 in the straight middle, 3 in the trailing arc, 4 past
/// the shape.
fn classify(coord: f64, left: f64, right: f64, arc: f64) -> u8 {
    if coord < left {
        0
    } else if coord < left + arc {
        1
    } else if coord < right - arc {
        2
    } else if coord < right {
        3
    } else {
        4
    }
}

impl RoundRectangle2D {
    pub const fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        arc_width: f64,
        arc_height: f64,
    ) -> Self {
        RoundRectangle2D {
            x,
            y,
            width,
            height,
            arc_width,
            arc_height,
        }
    }

    pub fn set_round_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        arc_width: f64,
        arc_height: f64,
    ) {
        *self = RoundRectangle2D::new(x, y, width, height, arc_width, arc_height);
    }

    pub fn set_round_rect_from(&mut self, rr: &RoundRectangle2D) {
        *self = *rr;
    }

    /// Half of each arc, limited to the frame and ignoring sign.
    fn half_arcs(&self) -> (f64, f64) {
        (
            self.width.min(self.arc_width.abs()) / 2.0,
            self.height.min(self.arc_height.abs()) / 2.0,
        )
    }
}

impl RectangularShape for RoundRectangle2D {
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
        self.x = x;
        self.y = y;
        self.width = w;
        self.height = h;
    }
}

impl Shape for RoundRectangle2D {
    fn contains(&self, x: f64, y: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (x0 + self.width, y0 + self.height);
        if x < x0 || y < y0 || x >= x1 || y >= y1 {
            return false;
        }
        let (aw, ah) = self.half_arcs();
        if x >= x0 + aw && x < x1 - aw {
            return true;
        }
        if y >= y0 + ah && y < y1 - ah {
            return true;
        }
        // in a corner square: test against that corner's ellipse
        let cx = if x < x0 + aw { x0 + aw } else { x1 - aw };
        let cy = if y < y0 + ah { y0 + ah } else { y1 - ah };
        let dx = (x - cx) / aw;
        let dy = (y - cy) / ah;
        dx * dx + dy * dy <= 1.0
    }

    /// All four corners of the query rectangle must be inside, so a query
    /// sharing the right or bottom edge is rejected.
    fn contains_rect(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        if self.is_empty() || w <= 0.0 || h <= 0.0 {
            return false;
        }
        self.contains(x, y)
            && self.contains(x + w, y)
            && self.contains(x, y + h)
            && self.contains(x + w, y + h)
    }

    fn intersects(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        if self.is_empty() || w <= 0.0 || h <= 0.0 {
            return false;
        }
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (x0 + self.width, y0 + self.height);
        if x + w <= x0 || x >= x1 || y + h <= y0 || y >= y1 {
            return false;
        }
        let (aw, ah) = self.half_arcs();
        let x0c = classify(x, x0, x1, aw);
        let x1c = classify(x + w, x0, x1, aw);
        let y0c = classify(y, y0, y1, ah);
        let y1c = classify(y + h, y0, y1, ah);

        // an edge inside the core
        if x0c == 2 || x1c == 2 || y0c == 2 || y1c == 2 {
            return true;
        }
        // an edge pair straddling the core
        if (x0c < 2 && x1c > 2) || (y0c < 2 && y1c > 2) {
            return true;
        }
        // Only a corner zone remains. Test the query point nearest to that
        // corner's ellipse centre.
        let dx = if x1c == 1 {
            x + w - (x0 + aw)
        } else {
            x - (x1 - aw)
        };
        let dy = if y1c == 1 {
            y + h - (y0 + ah)
        } else {
            y - (y1 - ah)
        };
        let (dx, dy) = (dx / aw, dy / ah);
        dx * dx + dy * dy <= 1.0
    }

    fn bounds(&self) -> Rectangle {
        self.frame_bounds()
    }

    fn bounds_2d(&self) -> Rectangle2D {
        self.frame()
    }

    fn path_iterator(&self, at: Option<&AffineTransform>) -> PathIter {
        RoundRectIterator::new(self, at).into()
    }
}
