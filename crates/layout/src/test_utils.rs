//! Shared fakes and assertions for layout tests.

use crate::interface::LayoutNode;
use std::cell::Cell;
use std::rc::Rc;
use strut_types::geometry::{BoxConstraints, Rect, Size};

/// A fake content node. In area mode it behaves like wrapping text: it
/// occupies a fixed area, so its measured extent on the free axis is
/// `area / constrained extent`. In size mode it reports a fixed natural
/// size clamped to the constraints. Every measurement is counted so tests
/// can observe caching.
#[derive(Debug)]
pub struct Probe {
    area: Option<f32>,
    natural: Size,
    frame: Rect,
    measure_calls: Rc<Cell<u32>>,
}

impl Probe {
    /// Text-like content covering `area` square points.
    pub fn with_area(area: f32) -> Self {
        Self {
            area: Some(area),
            natural: Size::zero(),
            frame: Rect::default(),
            measure_calls: Rc::new(Cell::new(0)),
        }
    }

    /// Content with a fixed natural size.
    pub fn with_size(natural: Size) -> Self {
        Self {
            area: None,
            natural,
            frame: Rect::default(),
            measure_calls: Rc::new(Cell::new(0)),
        }
    }

    /// Handle to the measurement counter; stays live after the probe moves
    /// into a container.
    pub fn measure_calls(&self) -> Rc<Cell<u32>> {
        self.measure_calls.clone()
    }
}

impl LayoutNode for Probe {
    fn measure(&self, constraints: BoxConstraints) -> Size {
        self.measure_calls.set(self.measure_calls.get() + 1);
        let Some(area) = self.area else {
            return constraints.constrain(self.natural);
        };
        if constraints.has_bounded_width() && constraints.max_width > 0.0 {
            Size::new(constraints.max_width, area / constraints.max_width)
        } else if constraints.has_bounded_height() && constraints.max_height > 0.0 {
            Size::new(area / constraints.max_height, constraints.max_height)
        } else {
            let side = area.sqrt();
            Size::new(side, side)
        }
    }

    fn place(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn frame(&self) -> Rect {
        self.frame
    }
}

#[track_caller]
pub fn assert_rect(actual: Rect, expected: Rect) {
    assert!(
        actual.approx_eq(&expected),
        "rect mismatch: got {actual:?}, expected {expected:?}"
    );
}

#[track_caller]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "value mismatch: got {actual}, expected {expected}"
    );
}
