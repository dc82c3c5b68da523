//! Sizing primitives for container children.
use crate::parsers;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use strut_types::geometry::{Axis, Rect};

/// How a child claims extent along its container's axis.
///
/// `Equal` and `Auto` carry no value by construction; the proportional and
/// fixed variants carry theirs inline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeMode {
    /// An absolute extent in points.
    Fixed(f32),
    /// A share of the container's full axis extent, in percent (0–100).
    Percent(f32),
    /// An even split of the extent left over after fixed and automatic
    /// reservations, discounted by the aggregate percentage claim.
    Equal,
    /// Content-driven: the child is measured against the container's
    /// cross-axis extent.
    #[default]
    Auto,
}

impl Hash for SizeMode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            SizeMode::Fixed(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            SizeMode::Percent(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            SizeMode::Equal => 2u8.hash(state),
            SizeMode::Auto => 3u8.hash(state),
        }
    }
}

impl Eq for SizeMode {}

impl FromStr for SizeMode {
    type Err = parsers::StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::size_mode_from_str(s)
    }
}

impl Serialize for SizeMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SizeMode::Fixed(v) => serializer.serialize_f32(*v),
            SizeMode::Percent(v) => serializer.serialize_str(&format!("{v}%")),
            SizeMode::Equal => serializer.serialize_str("equal"),
            SizeMode::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for SizeMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SizeModeVisitor;
        impl de::Visitor<'_> for SizeModeVisitor {
            type Value = SizeMode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number or a string like \"30%\", \"auto\", \"equal\"")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<SizeMode, E> {
                Ok(SizeMode::Fixed(value as f32))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<SizeMode, E> {
                Ok(SizeMode::Fixed(value as f32))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<SizeMode, E> {
                Ok(SizeMode::Fixed(value as f32))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<SizeMode, E> {
                value.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_any(SizeModeVisitor)
    }
}

/// Per-child edge spacing, applied by shrinking the child's assigned
/// rectangle after placement. Insets never change the container's axis
/// budget or sibling offsets.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Hash for Insets {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
        self.left.to_bits().hash(state);
    }
}

impl Eq for Insets {}

impl Insets {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn x(value: f32) -> Self {
        Self {
            top: 0f32,
            right: value,
            bottom: 0f32,
            left: value,
        }
    }

    pub fn y(value: f32) -> Self {
        Self {
            top: value,
            right: 0f32,
            bottom: value,
            left: 0f32,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Sum of the two edges aligned with `axis`.
    pub fn main_sum(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom,
        }
    }

    /// Sum of the two edges perpendicular to `axis`.
    pub fn cross_sum(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.top + self.bottom,
            Axis::Vertical => self.left + self.right,
        }
    }

    /// Shrinks `rect` by these insets. Degenerate insets may produce a
    /// negative-extent rectangle; callers treat that as a value, not a fault.
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect {
            x: rect.x + self.left,
            y: rect.y + self.top,
            width: rect.width - self.left - self.right,
            height: rect.height - self.top - self.bottom,
        }
    }
}

impl<'de> Deserialize<'de> for Insets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InsetsVisitor;
        impl<'de> de::Visitor<'de> for InsetsVisitor {
            type Value = Insets;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a string like \"10\" or \"10 20\", or a map")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Insets, E> {
                Ok(Insets::all(value as f32))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Insets, E> {
                Ok(Insets::all(value as f32))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Insets, E> {
                parsers::parse_shorthand_insets(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Insets, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut insets = Insets::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => insets.top = map.next_value()?,
                        "right" => insets.right = map.next_value()?,
                        "bottom" => insets.bottom = map.next_value()?,
                        "left" => insets.left = map.next_value()?,
                        _ => { /* ignore unknown fields */ }
                    }
                }
                Ok(insets)
            }
        }
        deserializer.deserialize_any(InsetsVisitor)
    }
}
