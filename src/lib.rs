//! 2D geometry value types.
//!
//! Points and dimensions in floating and integer flavours, a floating
//! rectangle with outcode and line-clipping algebra, an integer rectangle
//! whose arithmetic saturates instead of wrapping, a rounded rectangle, and
//! path iterators that trace any of them (optionally through an affine
//! transform).
//!
//! ```
//! use geom2d::{PathIteratorExt, Rectangle, Rectangle2D, Shape};
//!
//! let r = Rectangle2D::new(0.0, 0.0, 10.0, 10.0);
//! assert!(r.contains(0.0, 0.0));
//! assert!(!r.contains(10.0, 10.0));
//! assert!(r.contains_rect(0.0, 0.0, 10.0, 10.0));
//!
//! let none = Rectangle::new(0, 0, -1, -1);
//! let some = Rectangle::new(1, 1, 2, 2);
//! assert_eq!(none.union(&some), some);
//!
//! assert_eq!(r.path_iterator(None).segments().count(), 6);
//! ```

pub mod defaults;
pub mod errors;
pub mod log;
pub mod path;
pub mod rect;
pub mod rect2d;
pub mod round_rect;
pub mod shape;
pub mod transform;
pub mod types;

pub use errors::{GeomError, Result};
pub use path::{
    FlatteningPathIterator, PathIter, PathIterator, PathIteratorExt, PathSegment, RectIterator,
    RoundRectIterator, SegmentKind, Segments, WindingRule,
};
pub use rect::Rectangle;
pub use rect2d::{OUT_BOTTOM, OUT_LEFT, OUT_RIGHT, OUT_TOP, Rectangle2D};
pub use round_rect::RoundRectangle2D;
pub use shape::{AnyShape, RectangularShape, Shape};
pub use transform::AffineTransform;
pub use types::{Dimension, Dimension2D, Point, Point2D};
