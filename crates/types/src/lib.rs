pub mod geometry;
pub mod ids;

pub use geometry::{Axis, BoxConstraints, Rect, Size};
pub use ids::ChildId;
