//! Constraint-free single-axis layout: proportional split containers and
//! scrolling stacks over opaque, measurable nodes.
//!
//! This crate is the integration surface; the machinery lives in the
//! foundation crates (`strut-types`, `strut-style`, `strut-layout`) and is
//! re-exported here.
//!
//! # Example
//!
//! ```
//! use strut::{Axis, LayoutInstruction, Rect, Spacer, SplitContainer};
//!
//! let mut split = SplitContainer::new(Axis::Vertical);
//! let header = split.push(Box::new(Spacer::default()), LayoutInstruction::fixed(50.0));
//! let body = split.push(Box::new(Spacer::default()), LayoutInstruction::equal());
//!
//! split.layout(Rect::new(0.0, 0.0, 100.0, 300.0));
//!
//! assert_eq!(split.frame_of(header), Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
//! assert_eq!(split.frame_of(body), Some(Rect::new(0.0, 50.0, 100.0, 250.0)));
//! ```

pub use strut_layout::{
    ChildEntry, LayoutNode, ScrollStack, Spacer, SplitContainer,
};
pub use strut_style::{Insets, LayoutInstruction, SizeMode, SizeRule, StyleParseError};
pub use strut_types::geometry::{Axis, BoxConstraints, Rect, Size};
pub use strut_types::ids::ChildId;
