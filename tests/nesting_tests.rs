mod common;

use common::{TestResult, block, init_logging};
use strut::{
    Axis, LayoutInstruction, LayoutNode, Rect, ScrollStack, Size, SplitContainer,
};

#[test]
fn proportional_row_reports_its_depth_to_an_auto_sizing_stack() -> TestResult {
    init_logging();

    // A horizontal row has no natural height of its own; it reports the
    // deepest of its children within their planned slices.
    let mut row = SplitContainer::new(Axis::Horizontal);
    row.push(block(0.0, 60.0), LayoutInstruction::equal());
    row.push(block(0.0, 80.0), LayoutInstruction::equal());

    let mut stack = ScrollStack::new(Axis::Vertical);
    let header = stack.push(block(0.0, 0.0), LayoutInstruction::fixed(40.0));
    let row_id = stack.push(Box::new(row), LayoutInstruction::auto());

    stack.layout(Rect::new(0.0, 0.0, 200.0, 500.0));

    assert_eq!(stack.frame_of(header), Some(Rect::new(0.0, 0.0, 200.0, 40.0)));
    assert_eq!(stack.frame_of(row_id), Some(Rect::new(0.0, 40.0, 200.0, 80.0)));
    assert_eq!(stack.content_size(), Size::new(200.0, 120.0));
    Ok(())
}

#[test]
fn placing_a_row_lays_out_its_own_children() -> TestResult {
    init_logging();

    let mut row = SplitContainer::new(Axis::Horizontal);
    let left = row.push(block(0.0, 0.0), LayoutInstruction::fixed(50.0));
    let right = row.push(block(0.0, 0.0), LayoutInstruction::equal());

    // Placement assigns the row's frame and cascades into a child pass
    // against the row's local bounds.
    row.place(Rect::new(0.0, 40.0, 200.0, 80.0));

    assert_eq!(row.frame(), Rect::new(0.0, 40.0, 200.0, 80.0));
    assert_eq!(row.frame_of(left), Some(Rect::new(0.0, 0.0, 50.0, 80.0)));
    assert_eq!(row.frame_of(right), Some(Rect::new(50.0, 0.0, 150.0, 80.0)));
    Ok(())
}

#[test]
fn stack_nests_as_an_auto_sized_child_of_a_split() -> TestResult {
    init_logging();

    let mut feed = ScrollStack::new(Axis::Vertical);
    feed.push(block(0.0, 30.0), LayoutInstruction::auto());
    feed.push(block(0.0, 50.0), LayoutInstruction::auto());

    let mut split = SplitContainer::new(Axis::Vertical);
    let feed_id = split.push(Box::new(feed), LayoutInstruction::auto());
    let rest = split.push(block(0.0, 0.0), LayoutInstruction::equal());

    split.layout(Rect::new(0.0, 0.0, 200.0, 300.0));

    // The stack reserves its summed content extent (30 + 50).
    assert_eq!(split.frame_of(feed_id), Some(Rect::new(0.0, 0.0, 200.0, 80.0)));
    assert_eq!(split.frame_of(rest), Some(Rect::new(0.0, 80.0, 200.0, 220.0)));
    Ok(())
}

#[test]
fn nested_measurement_terminates_without_replaying_placement() -> TestResult {
    init_logging();

    // Three levels: stack > row > stack. Measurement walks down through
    // measure phases only; nothing here is placed yet.
    let mut inner = ScrollStack::new(Axis::Vertical);
    inner.push(block(0.0, 25.0), LayoutInstruction::auto());
    inner.push(block(0.0, 35.0), LayoutInstruction::auto());

    let mut row = SplitContainer::new(Axis::Horizontal);
    row.push(Box::new(inner), LayoutInstruction::equal());
    row.push(block(0.0, 10.0), LayoutInstruction::equal());

    let measured = row.measure(Axis::Vertical.measure_box(200.0));
    assert_eq!(measured, Size::new(200.0, 60.0));
    // Nothing was placed by measuring.
    assert_eq!(row.frame(), Rect::default());
    Ok(())
}
