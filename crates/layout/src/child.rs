//! Child bookkeeping shared by both container kinds.

use crate::interface::LayoutNode;
use std::cell::Cell;
use strut_style::{LayoutInstruction, SizeRule};
use strut_types::geometry::{BoxConstraints, Rect, Size};
use strut_types::ids::ChildId;

/// A resolved instruction together with the slice extent the measure phase
/// computed for it. Produced by a container's plan step and consumed by its
/// commit step; never outlives a single pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slice {
    pub instruction: LayoutInstruction,
    pub extent: f32,
}

/// One cached intrinsic measurement, keyed by the constraints it was taken
/// under. Constraints compare fuzzily, so an unchanged cross-axis extent
/// hits the cache across passes.
#[derive(Debug, Clone, Copy)]
struct MeasuredSize {
    constraints: BoxConstraints,
    size: Size,
}

/// A node owned by a container, together with its sizing rule and the
/// memoized result of its last automatic measurement.
///
/// The entry owns the node exclusively; removing the child from the
/// container hands the node back and drops everything else.
#[derive(Debug)]
pub struct ChildEntry {
    id: ChildId,
    node: Box<dyn LayoutNode>,
    rule: SizeRule,
    measured: Cell<Option<MeasuredSize>>,
}

impl ChildEntry {
    pub fn new(node: Box<dyn LayoutNode>, rule: SizeRule) -> Self {
        Self {
            id: ChildId::next(),
            node,
            rule,
            measured: Cell::new(None),
        }
    }

    pub fn id(&self) -> ChildId {
        self.id
    }

    pub fn node(&self) -> &dyn LayoutNode {
        self.node.as_ref()
    }

    pub fn node_mut(&mut self) -> &mut dyn LayoutNode {
        // Content may have changed; the old measurement no longer applies.
        self.measured.set(None);
        self.node.as_mut()
    }

    pub fn into_node(self) -> Box<dyn LayoutNode> {
        self.node
    }

    pub fn resolve(&self, bounds: Size) -> LayoutInstruction {
        self.rule.resolve(bounds)
    }

    /// Measures the node, reusing the cached result when the constraints
    /// are unchanged since the previous pass.
    pub fn measure(&self, constraints: BoxConstraints) -> Size {
        if let Some(cached) = self.measured.get()
            && cached.constraints == constraints
        {
            return cached.size;
        }
        let size = self.node.measure(constraints);
        self.measured.set(Some(MeasuredSize { constraints, size }));
        size
    }

    pub fn clear_measurement(&self) {
        self.measured.set(None);
    }

    /// Forwards placement to the node without disturbing the measurement
    /// cache; assigning a frame does not change content.
    pub(crate) fn place(&mut self, frame: Rect) {
        self.node.place(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Probe;
    use strut_types::geometry::Axis;

    #[test]
    fn measurement_is_cached_per_constraints() {
        let probe = Probe::with_area(8000.0);
        let calls = probe.measure_calls();
        let entry = ChildEntry::new(Box::new(probe), SizeRule::Static(LayoutInstruction::auto()));

        let box_200 = Axis::Vertical.measure_box(200.0);
        let first = entry.measure(box_200);
        let second = entry.measure(box_200);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);

        // A different cross-axis constraint forces a remeasure.
        entry.measure(Axis::Vertical.measure_box(100.0));
        assert_eq!(calls.get(), 2);

        // Clearing the cache forces one too, even with the old constraints.
        entry.clear_measurement();
        entry.measure(Axis::Vertical.measure_box(100.0));
        assert_eq!(calls.get(), 3);
    }
}
