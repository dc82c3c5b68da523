//! Constraint-free single-axis layout containers.
//!
//! Two cooperating container kinds, both implementing the same
//! [`LayoutNode`] contract so either can nest inside the other:
//!
//! - [`SplitContainer`] divides its own bounds along one axis among its
//!   children (fixed / percentage / equal-share / automatic sizing).
//! - [`ScrollStack`] lays children out sequentially along one axis; its
//!   content extent is the running sum, independent of the viewport.
//!
//! All computation is synchronous and single-threaded; a pass either
//! completes in place or is skipped when the bounds are unchanged.

pub mod child;
pub mod interface;
pub mod spacer;
pub mod split;
pub mod stack;

pub use child::ChildEntry;
pub use interface::LayoutNode;
pub use spacer::Spacer;
pub use split::SplitContainer;
pub use stack::ScrollStack;

// Re-export the types appearing in this crate's public API, to prevent
// mismatches for downstream callers.
pub use strut_style::{Insets, LayoutInstruction, SizeMode, SizeRule};
pub use strut_types::geometry::{Axis, BoxConstraints, Rect, Size};
pub use strut_types::ids::ChildId;

#[cfg(test)]
mod test_utils;
