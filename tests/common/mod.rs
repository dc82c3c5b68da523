//! Shared helpers for the integration suites.

use strut::{LayoutInstruction, LayoutNode, Size, Spacer};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A leaf with a fixed natural size, boxed for container insertion.
pub fn block(width: f32, height: f32) -> Box<dyn LayoutNode> {
    Box::new(Spacer::new(Size::new(width, height)))
}

/// Parses a JSON array of instruction shorthands, e.g.
/// `["50", "30%", "equal", {"mode": "auto", "insets": "4 8"}]`.
pub fn instructions_from_json(json: &str) -> Result<Vec<LayoutInstruction>, serde_json::Error> {
    serde_json::from_str(json)
}
