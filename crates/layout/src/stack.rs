//! Scrolling stack container: sequential placement along one axis.

use crate::child::{ChildEntry, Slice};
use crate::interface::LayoutNode;
use strut_style::{LayoutInstruction, SizeMode, SizeRule};
use strut_types::geometry::{Axis, BoxConstraints, Rect, Size};
use strut_types::ids::ChildId;

/// A container that lays children out one after another along one axis with
/// no wraparound. Its scrollable content extent is the running sum of child
/// slices and is independent of the container's own viewport extent.
///
/// Children are either fixed-extent or automatically sized against the
/// container's cross-axis extent; percentage and equal-share rules have no
/// meaning in a stack and resolve to zero-extent slices.
#[derive(Debug)]
pub struct ScrollStack {
    axis: Axis,
    children: Vec<ChildEntry>,
    frame: Rect,
    content_size: Size,
    last_bounds: Option<Rect>,
    dirty: bool,
}

impl ScrollStack {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            children: Vec::new(),
            frame: Rect::default(),
            content_size: Size::zero(),
            last_bounds: None,
            dirty: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The extent of the laid-out content: the final running offset along
    /// the axis, the container's own extent across it. Zero until the first
    /// completed pass.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn push(
        &mut self,
        node: Box<dyn LayoutNode>,
        instruction: LayoutInstruction,
    ) -> ChildId {
        self.push_rule(node, SizeRule::Static(instruction))
    }

    pub fn push_rule(&mut self, node: Box<dyn LayoutNode>, rule: SizeRule) -> ChildId {
        let entry = ChildEntry::new(node, rule);
        let id = entry.id();
        self.children.push(entry);
        self.dirty = true;
        id
    }

    pub fn remove(&mut self, id: ChildId) -> Option<Box<dyn LayoutNode>> {
        let index = self.children.iter().position(|c| c.id() == id)?;
        self.dirty = true;
        Some(self.children.remove(index).into_node())
    }

    pub fn node(&self, id: ChildId) -> Option<&dyn LayoutNode> {
        self.children
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.node())
    }

    pub fn node_mut(&mut self, id: ChildId) -> Option<&mut dyn LayoutNode> {
        self.dirty = true;
        self.children
            .iter_mut()
            .find(|c| c.id() == id)
            .map(|c| c.node_mut())
    }

    pub fn frame_of(&self, id: ChildId) -> Option<Rect> {
        self.node(id).map(|n| n.frame())
    }

    pub fn invalidate_layout(&mut self) {
        self.last_bounds = None;
        self.dirty = true;
        for child in &self.children {
            child.clear_measurement();
        }
    }

    /// Runs a layout pass and updates [`Self::content_size`].
    ///
    /// Unlike the split container, the running offset advances by the full
    /// slice extent including automatic children's inset growth: siblings
    /// in a scroll stack must not overlap even when insets are nonzero.
    /// A zero cross extent yields zero-extent automatic slices for this
    /// pass; they are recomputed once the cross extent becomes nonzero.
    pub fn layout(&mut self, bounds: Rect) {
        let size = bounds.size();
        if self.axis.main_of(size) <= 0.0 && self.axis.cross_of(size) <= 0.0 {
            log::trace!("stack layout skipped: degenerate bounds {bounds:?}");
            return;
        }
        if !self.dirty && self.last_bounds.is_some_and(|b| b.approx_eq(&bounds)) {
            log::trace!("stack layout skipped: bounds unchanged");
            return;
        }
        log::debug!(
            "stack layout: axis={:?} bounds={:?} children={}",
            self.axis,
            bounds,
            self.children.len()
        );

        let slices = self.plan(bounds);
        let axis = self.axis;
        let mut offset = 0.0f32;
        for (entry, slice) in self.children.iter_mut().zip(slices) {
            let rect = axis.slice_rect(bounds, offset, slice.extent);
            entry.place(slice.instruction.insets.apply(rect));
            offset += slice.extent;
        }

        self.content_size = axis.pack(offset, axis.cross_of(size));
        self.last_bounds = Some(bounds);
        self.dirty = false;
    }

    fn plan(&self, bounds: Rect) -> Vec<Slice> {
        let cross = self.axis.cross_of(bounds.size());
        let mut slices = Vec::with_capacity(self.children.len());

        for entry in &self.children {
            let instruction = entry.resolve(bounds.size());
            let extent = match instruction.mode {
                SizeMode::Fixed(v) => v,
                SizeMode::Auto => {
                    if cross <= 0.0 {
                        // Nothing to measure against yet.
                        0.0
                    } else {
                        let inner_cross =
                            (cross - instruction.insets.cross_sum(self.axis)).max(0.0);
                        let measured = entry.measure(self.axis.measure_box(inner_cross));
                        self.axis.main_of(measured) + instruction.insets.main_sum(self.axis)
                    }
                }
                SizeMode::Percent(_) | SizeMode::Equal => {
                    log::warn!(
                        "scroll stack ignores {:?}: children must be fixed or auto sized",
                        instruction.mode
                    );
                    0.0
                }
            };
            slices.push(Slice {
                instruction,
                extent,
            });
        }
        slices
    }
}

impl LayoutNode for ScrollStack {
    /// Reports the summed content extent under the given cross constraint;
    /// the viewport's own main extent is irrelevant to content measurement.
    fn measure(&self, constraints: BoxConstraints) -> Size {
        let cross_limit = match self.axis {
            Axis::Horizontal => constraints.max_height,
            Axis::Vertical => constraints.max_width,
        };
        let probe_cross = if cross_limit.is_finite() { cross_limit } else { 0.0 };
        let slices = self.plan(Rect::from_size(self.axis.pack(0.0, probe_cross)));
        let total: f32 = slices.iter().map(|s| s.extent).sum();
        constraints.constrain(self.axis.pack(total, probe_cross))
    }

    fn place(&mut self, frame: Rect) {
        self.frame = frame;
        self.layout(Rect::from_size(frame.size()));
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}
