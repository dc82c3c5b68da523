//! Proportional split container: divides its bounds along one axis.

use crate::child::{ChildEntry, Slice};
use crate::interface::LayoutNode;
use strut_style::{LayoutInstruction, SizeMode, SizeRule};
use strut_types::geometry::{Axis, BoxConstraints, Rect, Size};
use strut_types::ids::ChildId;

/// A non-scrolling container that divides its own bounds along one axis
/// among its children using fixed, percentage, equal-share, and automatic
/// sizing. Child extents along the axis always sum to the container extent
/// (modulo the deliberate over-allocation cases described on [`Self::layout`]);
/// every child spans the full cross axis before its insets shrink it.
#[derive(Debug)]
pub struct SplitContainer {
    axis: Axis,
    scale: f32,
    subview_padding: f32,
    children: Vec<ChildEntry>,
    frame: Rect,
    last_bounds: Option<Rect>,
    dirty: bool,
}

struct Plan {
    slices: Vec<Slice>,
    /// Sum of fixed and automatic reservations along the axis.
    reserved: f32,
}

impl SplitContainer {
    pub fn new(axis: Axis) -> Self {
        Self::with_scale(axis, 1.0)
    }

    /// `scale` is the display's pixels-per-point factor. Fixed extents
    /// below one device pixel (`1/scale`) are clamped up so hairline
    /// separators survive fractional display scales.
    pub fn with_scale(axis: Axis, scale: f32) -> Self {
        Self {
            axis,
            scale: if scale > 0.0 { scale } else { 1.0 },
            subview_padding: 0.0,
            children: Vec::new(),
            frame: Rect::default(),
            last_bounds: None,
            dirty: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Uniform gap between adjacent children, applied by shrinking each
    /// child's rectangle at its interior edges. The gap never changes the
    /// axis budget or sibling offsets.
    pub fn set_subview_padding(&mut self, padding: f32) {
        self.subview_padding = padding;
        self.dirty = true;
    }

    pub fn subview_padding(&self) -> f32 {
        self.subview_padding
    }

    /// Adds a child with a statically captured instruction. Insertion order
    /// is layout order along the axis.
    pub fn push(
        &mut self,
        node: Box<dyn LayoutNode>,
        instruction: LayoutInstruction,
    ) -> ChildId {
        self.push_rule(node, SizeRule::Static(instruction))
    }

    /// Adds a child whose instruction is re-resolved against the container
    /// bounds on every pass.
    pub fn push_rule(&mut self, node: Box<dyn LayoutNode>, rule: SizeRule) -> ChildId {
        let entry = ChildEntry::new(node, rule);
        let id = entry.id();
        self.children.push(entry);
        self.dirty = true;
        id
    }

    /// Detaches a child, handing its node back. The entry and its cached
    /// measurement are dropped.
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

    /// Mutable access to a child's node. Assumes the content may change, so
    /// the child's cached measurement is dropped and the next layout pass
    /// recomputes.
    pub fn node_mut(&mut self, id: ChildId) -> Option<&mut dyn LayoutNode> {
        self.dirty = true;
        self.children
            .iter_mut()
            .find(|c| c.id() == id)
            .map(|c| c.node_mut())
    }

    /// The rectangle most recently assigned to the given child.
    pub fn frame_of(&self, id: ChildId) -> Option<Rect> {
        self.node(id).map(|n| n.frame())
    }

    /// Drops the bounds cache and all cached measurements; the next
    /// [`Self::layout`] call recomputes unconditionally.
    pub fn invalidate_layout(&mut self) {
        self.last_bounds = None;
        self.dirty = true;
        for child in &self.children {
            child.clear_measurement();
        }
    }

    /// Runs a layout pass, assigning every child's rectangle.
    ///
    /// Skipped entirely when `bounds` matches the previous pass and no
    /// child was added, removed, or invalidated since. Degenerate bounds
    /// short-circuit without placing anything.
    ///
    /// Sizing policy: fixed and automatic children reserve their extent
    /// first; a percentage child takes its share of the *original* axis
    /// extent, never renormalized against those reservations; equal-share
    /// children split the unreserved remainder discounted by the aggregate
    /// percentage claim. Nothing is clamped, so a container committed past
    /// its extent produces negative equal shares or overlapping percentage
    /// slices rather than an error.
    pub fn layout(&mut self, bounds: Rect) {
        if bounds.is_empty() {
            log::trace!("split layout skipped: degenerate bounds {bounds:?}");
            return;
        }
        if !self.dirty && self.last_bounds.is_some_and(|b| b.approx_eq(&bounds)) {
            log::trace!("split layout skipped: bounds unchanged");
            return;
        }
        log::debug!(
            "split layout: axis={:?} bounds={:?} children={}",
            self.axis,
            bounds,
            self.children.len()
        );
        let plan = self.plan(bounds);
        self.commit(bounds, plan);
        self.last_bounds = Some(bounds);
        self.dirty = false;
    }

    /// Measure phase: resolves every instruction and computes every slice
    /// extent without touching placement.
    fn plan(&self, bounds: Rect) -> Plan {
        let main = self.axis.main_of(bounds.size());
        let cross = self.axis.cross_of(bounds.size());
        let step = 1.0 / self.scale;

        let mut slices = Vec::with_capacity(self.children.len());
        let mut reserved = 0.0f32;
        let mut percent_loss = 0.0f32;
        let mut equal_count = 0usize;

        for entry in &self.children {
            let mut instruction = entry.resolve(bounds.size());
            let extent = match instruction.mode {
                SizeMode::Fixed(v) => {
                    let v = clamp_hairline(v, step);
                    instruction.mode = SizeMode::Fixed(v);
                    reserved += v;
                    v
                }
                SizeMode::Percent(p) => {
                    percent_loss += p / 100.0;
                    0.0
                }
                SizeMode::Equal => {
                    equal_count += 1;
                    0.0
                }
                SizeMode::Auto => {
                    let measured = entry.measure(self.axis.measure_box(cross));
                    let extent =
                        self.axis.main_of(measured) + instruction.insets.main_sum(self.axis);
                    reserved += extent;
                    extent
                }
            };
            slices.push(Slice {
                instruction,
                extent,
            });
        }

        let equal_extent = if equal_count > 0 {
            (main - reserved) * (1.0 - percent_loss) / equal_count as f32
        } else {
            0.0
        };

        for slice in &mut slices {
            match slice.instruction.mode {
                SizeMode::Percent(p) => slice.extent = main * p / 100.0,
                SizeMode::Equal => slice.extent = equal_extent,
                _ => {}
            }
        }

        Plan { slices, reserved }
    }

    /// Commit phase: places children at the extents the plan computed.
    /// Offsets advance by the un-inset extent, so siblings stay contiguous
    /// regardless of insets or the subview gap.
    fn commit(&mut self, bounds: Rect, plan: Plan) {
        let count = plan.slices.len();
        let half_gap = self.subview_padding / 2.0;
        let axis = self.axis;
        let mut offset = 0.0f32;

        for (index, (entry, slice)) in self.children.iter_mut().zip(plan.slices).enumerate() {
            let mut rect = axis.slice_rect(bounds, offset, slice.extent);
            rect = slice.instruction.insets.apply(rect);
            if half_gap > 0.0 {
                let lead = if index == 0 { 0.0 } else { half_gap };
                let trail = if index + 1 == count { 0.0 } else { half_gap };
                rect = shrink_along(axis, rect, lead, trail);
            }
            entry.place(rect);
            offset += slice.extent;
        }
    }
}

impl LayoutNode for SplitContainer {
    /// A split has no natural size of its own along its axis: it fills
    /// whatever main extent it is given and reports, as its cross extent,
    /// the deepest measured child within its planned slices. This is what
    /// lets a proportional row report a sensible height to an enclosing
    /// auto-sizing scroll stack. With an unbounded main constraint the
    /// fixed and automatic reservations stand in for the main extent.
    fn measure(&self, constraints: BoxConstraints) -> Size {
        let main_limit = match self.axis {
            Axis::Horizontal => constraints.max_width,
            Axis::Vertical => constraints.max_height,
        };
        let cross_limit = match self.axis {
            Axis::Horizontal => constraints.max_height,
            Axis::Vertical => constraints.max_width,
        };

        if main_limit.is_finite() {
            let bounds = Rect::from_size(self.axis.pack(main_limit, cross_limit));
            let plan = self.plan(bounds);
            let mut deepest = 0.0f32;
            for (entry, slice) in self.children.iter().zip(&plan.slices) {
                let inner = (slice.extent - slice.instruction.insets.main_sum(self.axis)).max(0.0);
                let measured = entry.measure(self.axis.main_box(inner));
                deepest = deepest
                    .max(self.axis.cross_of(measured) + slice.instruction.insets.cross_sum(self.axis));
            }
            constraints.constrain(self.axis.pack(main_limit, deepest))
        } else {
            let probe_cross = if cross_limit.is_finite() { cross_limit } else { 0.0 };
            let plan = self.plan(Rect::from_size(self.axis.pack(0.0, probe_cross)));
            constraints.constrain(self.axis.pack(plan.reserved, probe_cross))
        }
    }

    fn place(&mut self, frame: Rect) {
        self.frame = frame;
        self.layout(Rect::from_size(frame.size()));
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}

fn clamp_hairline(extent: f32, step: f32) -> f32 {
    if extent > 0.0 && extent < step {
        step
    } else {
        extent
    }
}

fn shrink_along(axis: Axis, rect: Rect, lead: f32, trail: f32) -> Rect {
    match axis {
        Axis::Horizontal => Rect::new(
            rect.x + lead,
            rect.y,
            rect.width - lead - trail,
            rect.height,
        ),
        Axis::Vertical => Rect::new(
            rect.x,
            rect.y + lead,
            rect.width,
            rect.height - lead - trail,
        ),
    }
}
