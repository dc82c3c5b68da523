//! Low-level nom parser functions for sizing shorthand values.
//!
//! Instruction sets are frequently declared in configuration (JSON or
//! string literals), so the compact forms "30%", "auto", "equal", "64px"
//! and the 1/2/4-value inset shorthand all parse through here.

use crate::dimension::{Insets, SizeMode};
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::space1;
use nom::combinator::{all_consuming, map, opt, value};
use nom::multi::separated_list1;
use nom::number::complete::float;
use nom::sequence::terminated;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur while parsing sizing shorthand.
#[derive(Error, Debug, Clone)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

/// Parses a length with an optional unit suffix (e.g. "12", "12px", "12pt").
/// Units are display points; "px" and "pt" are synonyms here.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    terminated(float, opt(alt((tag_no_case("px"), tag_no_case("pt"))))).parse(input)
}

/// Parses a sizing mode: a percentage, the "auto"/"equal" keywords, or a
/// plain length.
pub fn parse_size_mode(input: &str) -> IResult<&str, SizeMode> {
    alt((
        value(SizeMode::Auto, tag_no_case("auto")),
        value(SizeMode::Equal, tag_no_case("equal")),
        map(terminated(float, tag("%")), SizeMode::Percent),
        map(parse_length, SizeMode::Fixed),
    ))
    .parse(input)
}

/// Parses a complete sizing-mode string, rejecting trailing garbage.
pub fn size_mode_from_str(input: &str) -> Result<SizeMode, StyleParseError> {
    match all_consuming(parse_size_mode).parse(input.trim()) {
        Ok((_, mode)) => Ok(mode),
        Err(_) => Err(StyleParseError::InvalidValue {
            property: "size mode".to_string(),
            value: input.to_string(),
        }),
    }
}

/// Parses CSS-style inset shorthand (1, 2, or 4 values).
pub fn parse_shorthand_insets(input: &str) -> Result<Insets, StyleParseError> {
    let parts_res = all_consuming(separated_list1(space1, parse_length)).parse(input.trim());

    match parts_res {
        Ok((_, parts)) => match parts.len() {
            1 => Ok(Insets::all(parts[0])),
            2 => Ok(Insets {
                top: parts[0],
                right: parts[1],
                bottom: parts[0],
                left: parts[1],
            }),
            4 => Ok(Insets {
                top: parts[0],
                right: parts[1],
                bottom: parts[2],
                left: parts[3],
            }),
            n => Err(StyleParseError::Parse(format!(
                "Invalid number of values for inset shorthand: got {n}, expected 1, 2, or 4."
            ))),
        },
        _ => Err(StyleParseError::Parse(format!(
            "Failed to parse insets value: '{input}'"
        ))),
    }
}
