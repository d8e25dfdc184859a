/// A scanning error with line number and type. Scanning stops at the first one.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("[line {line}] Error: {type}")]
pub struct ScanError {
	/// The line number where the error occurred.
	pub line:   usize,
	/// The type of scanning error.
	pub r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }
}

/// Types of scanning errors.
#[derive(Debug, PartialEq, Eq)]
pub enum ScanErrorType {
	/// Error for unexpected characters.
	UnexpectedCharacter(char),
	/// A single `|`, only `||` exists.
	BitwiseOr,
	/// A single `&`, only `&&` exists.
	BitwiseAnd,
	/// Error for strings without a closing quote on the same line.
	UnterminatedString,
	/// Integer literal doesn't fit in 64 bits.
	IntegerOutOfRange,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'.")
			}
			BitwiseOr => {
				write!(f, "Bitwise OR not supported.")
			}
			BitwiseAnd => {
				write!(f, "Bitwise AND not supported.")
			}
			UnterminatedString => {
				write!(f, "Unterminated string.")
			}
			IntegerOutOfRange => {
				write!(f, "Integer literal out of range.")
			}
		}
	}
}
