use crate::interface::LayoutNode;
use strut_types::geometry::{BoxConstraints, Rect, Size};

/// A leaf node with a fixed natural size.
///
/// Useful as padding between automatically sized children, and as the
/// simplest possible `LayoutNode` when composing hierarchies.
#[derive(Debug, Default)]
pub struct Spacer {
    size: Size,
    frame: Rect,
}

impl Spacer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            frame: Rect::default(),
        }
    }

    pub fn natural_size(&self) -> Size {
        self.size
    }
}

impl LayoutNode for Spacer {
    fn measure(&self, constraints: BoxConstraints) -> Size {
        constraints.constrain(self.size)
    }

    fn place(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}
