pub mod dimension;
pub mod instruction;
pub mod parsers;

pub use dimension::{Insets, SizeMode};
pub use instruction::{LayoutInstruction, SizeRule};
pub use parsers::StyleParseError;
