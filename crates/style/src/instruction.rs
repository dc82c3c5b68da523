//! The per-child layout policy value and its resolution source.

use crate::dimension::{Insets, SizeMode};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::rc::Rc;
use strut_types::geometry::Size;

/// Immutable sizing policy for one child: a mode plus edge insets.
///
/// Insets are applied by shrinking the child's rectangle after placement;
/// they never widen or narrow the container's axis budget.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LayoutInstruction {
    pub mode: SizeMode,
    #[serde(default, skip_serializing_if = "Insets::is_zero")]
    pub insets: Insets,
}

impl LayoutInstruction {
    pub fn fixed(extent: f32) -> Self {
        Self {
            mode: SizeMode::Fixed(extent),
            insets: Insets::default(),
        }
    }

    pub fn percent(share: f32) -> Self {
        Self {
            mode: SizeMode::Percent(share),
            insets: Insets::default(),
        }
    }

    pub fn equal() -> Self {
        Self {
            mode: SizeMode::Equal,
            insets: Insets::default(),
        }
    }

    pub fn auto() -> Self {
        Self {
            mode: SizeMode::Auto,
            insets: Insets::default(),
        }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }
}

impl From<SizeMode> for LayoutInstruction {
    fn from(mode: SizeMode) -> Self {
        Self {
            mode,
            insets: Insets::default(),
        }
    }
}

impl<'de> Deserialize<'de> for LayoutInstruction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InstructionVisitor;
        impl<'de> de::Visitor<'de> for InstructionVisitor {
            type Value = LayoutInstruction;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a sizing shorthand or a map with 'mode' and 'insets'")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<LayoutInstruction, E> {
                Ok(LayoutInstruction::fixed(value as f32))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<LayoutInstruction, E> {
                Ok(LayoutInstruction::fixed(value as f32))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<LayoutInstruction, E> {
                Ok(LayoutInstruction::fixed(value as f32))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<LayoutInstruction, E> {
                let mode: SizeMode = value.parse().map_err(E::custom)?;
                Ok(mode.into())
            }

            fn visit_map<A>(self, mut map: A) -> Result<LayoutInstruction, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut instruction = LayoutInstruction::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "mode" => instruction.mode = map.next_value()?,
                        "insets" => instruction.insets = map.next_value()?,
                        _ => { /* ignore unknown fields */ }
                    }
                }
                Ok(instruction)
            }
        }
        deserializer.deserialize_any(InstructionVisitor)
    }
}

/// Where a child's instruction comes from on each layout pass.
///
/// A static rule is captured at insertion time. A dynamic rule is a pure
/// function of the container's current bounds, re-evaluated every pass.
/// Dynamic rules must be referentially transparent: containers are free to
/// call them zero, one, or two times per pass depending on caching, so a
/// rule must not close over mutable state or produce side effects.
#[derive(Clone)]
pub enum SizeRule {
    Static(LayoutInstruction),
    Dynamic(Rc<dyn Fn(Size) -> LayoutInstruction>),
}

impl SizeRule {
    pub fn dynamic(f: impl Fn(Size) -> LayoutInstruction + 'static) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    /// Resolves the instruction against a snapshot of the container bounds.
    pub fn resolve(&self, bounds: Size) -> LayoutInstruction {
        match self {
            SizeRule::Static(instruction) => *instruction,
            SizeRule::Dynamic(f) => f(bounds),
        }
    }
}

impl From<LayoutInstruction> for SizeRule {
    fn from(instruction: LayoutInstruction) -> Self {
        Self::Static(instruction)
    }
}

impl From<SizeMode> for SizeRule {
    fn from(mode: SizeMode) -> Self {
        Self::Static(mode.into())
    }
}

impl fmt::Debug for SizeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeRule::Static(instruction) => f.debug_tuple("Static").field(instruction).finish(),
            SizeRule::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<closure>").finish(),
        }
    }
}
