use crate::error::Location;

/// A syntax error. The parser collects these and keeps going.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] Error{location}: {type}")]
pub struct ParseError {
	pub line:     usize,
	pub location: Location,
	pub r#type:   ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, location: Location, r#type: ParseErrorType) -> Self { Self { line, location, r#type } }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorType {
	ExpectedExpression,
	/// `consume` didn't find the token it wanted, the payload says what.
	Expected(&'static str),
	InvalidType(String),
	InvalidAssignmentTarget,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expected expression.")
			}
			Expected(message) => {
				write!(f, "{message}")
			}
			InvalidType(name) => {
				write!(f, "Invalid type '{name}'.")
			}
			InvalidAssignmentTarget => {
				write!(f, "Invalid assignment target.")
			}
		}
	}
}
