//! Bounding rectangle computation.

mod rect;

pub use rect::Rect2;
