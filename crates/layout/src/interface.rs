//! The measurement and placement contract containers require of children.

use std::fmt::Debug;
use strut_types::geometry::{BoxConstraints, Rect, Size};

/// Anything a container can lay out: an opaque node that can report its
/// natural size under constraints and accept an assigned rectangle.
///
/// Both container types implement this trait themselves, so a proportional
/// row can sit inside a scroll stack (and vice versa) by composition.
pub trait LayoutNode: Debug {
    /// Intrinsic measurement: the size this node would like, given a hard
    /// constraint on one axis and none on the other.
    ///
    /// Must be a pure function of current content and `constraints`; callers
    /// memoize the result keyed by the constraints passed in.
    fn measure(&self, constraints: BoxConstraints) -> Size;

    /// Assigns the node's rectangle. Idempotent; the last call wins.
    fn place(&mut self, frame: Rect);

    /// The most recently assigned rectangle.
    fn frame(&self) -> Rect;
}

impl<T: LayoutNode + ?Sized> LayoutNode for Box<T> {
    fn measure(&self, constraints: BoxConstraints) -> Size {
        (**self).measure(constraints)
    }

    fn place(&mut self, frame: Rect) {
        (**self).place(frame)
    }

    fn frame(&self) -> Rect {
        (**self).frame()
    }
}
