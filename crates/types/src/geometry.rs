use serde::{Deserialize, Serialize};

/// Comparison tolerance for cached geometry. Layout arithmetic accumulates
/// sub-pixel drift, so equality checks on bounds and constraints are fuzzy.
pub const EPSILON: f32 = 0.01;

fn approx(a: f32, b: f32) -> bool {
    a == b || (a - b).abs() < EPSILON
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn approx_eq(&self, other: &Rect) -> bool {
        approx(self.x, other.x)
            && approx(self.y, other.y)
            && approx(self.width, other.width)
            && approx(self.height, other.height)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// The direction along which a container distributes child extents.
/// The perpendicular direction (cross axis) is always filled edge to edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// The extent of `size` along this axis.
    pub fn main_of(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// The extent of `size` perpendicular to this axis.
    pub fn cross_of(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    pub fn pack(self, main: f32, cross: f32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// The full-bleed slice of `bounds` starting at `offset` along this axis
    /// and spanning `extent`.
    pub fn slice_rect(self, bounds: Rect, offset: f32, extent: f32) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(bounds.x + offset, bounds.y, extent, bounds.height),
            Axis::Vertical => Rect::new(bounds.x, bounds.y + offset, bounds.width, extent),
        }
    }

    /// Constraints for intrinsic measurement: the cross axis is pinned to
    /// `cross` (or left unbounded when `cross` is not finite) and the main
    /// axis is unconstrained.
    pub fn measure_box(self, cross: f32) -> BoxConstraints {
        let (min, max) = if cross.is_finite() {
            (cross.max(0.0), cross.max(0.0))
        } else {
            (0.0, f32::INFINITY)
        };
        match self {
            Axis::Horizontal => BoxConstraints::new(0.0, f32::INFINITY, min, max),
            Axis::Vertical => BoxConstraints::new(min, max, 0.0, f32::INFINITY),
        }
    }

    /// Constraints pinning this axis to `main` and leaving the cross axis
    /// unconstrained. Used when probing a child's depth within its slice.
    pub fn main_box(self, main: f32) -> BoxConstraints {
        self.cross().measure_box(main)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl PartialEq for BoxConstraints {
    fn eq(&self, other: &Self) -> bool {
        approx(self.min_width, other.min_width)
            && approx(self.max_width, other.max_width)
            && approx(self.min_height, other.min_height)
            && approx(self.max_height, other.max_height)
    }
}

impl BoxConstraints {
    pub fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    pub fn tight(size: Size) -> Self {
        Self {
            min_width: size.width,
            max_width: size.width,
            min_height: size.height,
            max_height: size.height,
        }
    }

    pub fn loose(size: Size) -> Self {
        Self {
            min_width: 0.0,
            max_width: size.width,
            min_height: 0.0,
            max_height: size.height,
        }
    }

    pub fn has_bounded_width(self) -> bool {
        self.max_width.is_finite()
    }

    pub fn has_bounded_height(self) -> bool {
        self.max_height.is_finite()
    }

    pub fn constrain(self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: f32::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_decomposition_round_trips() {
        let size = Size::new(320.0, 240.0);
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let repacked = axis.pack(axis.main_of(size), axis.cross_of(size));
            assert_eq!(repacked, size);
        }
    }

    #[test]
    fn slice_rect_spans_cross_axis() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 300.0);
        let slice = Axis::Vertical.slice_rect(bounds, 50.0, 125.0);
        assert_eq!(slice, Rect::new(0.0, 50.0, 100.0, 125.0));

        let slice = Axis::Horizontal.slice_rect(bounds, 20.0, 30.0);
        assert_eq!(slice, Rect::new(20.0, 0.0, 30.0, 300.0));
    }

    #[test]
    fn measure_box_pins_cross_axis_only() {
        let constraints = Axis::Vertical.measure_box(200.0);
        assert_eq!(constraints.min_width, 200.0);
        assert_eq!(constraints.max_width, 200.0);
        assert!(!constraints.has_bounded_height());
    }

    #[test]
    fn unbounded_constraints_compare_equal() {
        // Infinity minus infinity is NaN; the fuzzy comparison must not
        // treat two identical unbounded boxes as distinct cache keys.
        let a = Axis::Vertical.measure_box(150.0);
        let b = Axis::Vertical.measure_box(150.0);
        assert_eq!(a, b);
    }
}
