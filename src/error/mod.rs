pub mod analyzer;
pub mod interpreter;
pub mod parser;
pub mod scanner;

use std::fmt::Display;

use crate::{SemanticError, ParseError, RuntimeError, ScanError, scanner::{Token, TokenType}};

/// Exit status for lex, parse and semantic errors.
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for runtime errors.
pub const EXIT_SOFTWARE_ERROR: u8 = 70;
/// Exit status when the source file can't be read.
pub const EXIT_IO_ERROR: u8 = 74;

/// TarnError is the top-level error type of the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum TarnError {
	/// Internal error, e.g. the source file can't be read
	#[error("CompilerInternalError: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// The scanner stops at the first offending character
	#[error(transparent)]
	ScanError(#[from] ScanError),
	/// Parser errors collected over the whole token stream
	#[error("{}", display_parse_errors(.0))]
	ParseErrors(Vec<ParseError>),
	/// The analyzer stops at the first violation
	#[error(transparent)]
	SemanticError(#[from] SemanticError),
	/// Errors raised while executing
	#[error(transparent)]
	RuntimeError(#[from] RuntimeError),
}

impl TarnError {
	/// The process exit status matching this error.
	pub fn exit_code(&self) -> u8 {
		match self {
			TarnError::InternalError(_) => EXIT_IO_ERROR,
			TarnError::ScanError(_) | TarnError::ParseErrors(_) | TarnError::SemanticError(_) => EXIT_DATA_ERROR,
			TarnError::RuntimeError(_) => EXIT_SOFTWARE_ERROR,
		}
	}
}

impl From<Vec<ParseError>> for TarnError {
	fn from(errors: Vec<ParseError>) -> Self { TarnError::ParseErrors(errors) }
}

fn display_parse_errors(errors: &[ParseError]) -> String {
	errors.iter().map(|e| format!("{}", e)).collect::<Vec<String>>().join("\n")
}

/// Where in the source a diagnostic points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
	/// No token to point at
	Nowhere,
	/// The end-of-input token
	End,
	/// A token with the given lexeme
	Lexeme(String),
}

impl Location {
	pub(crate) fn at(token: &Token) -> Self {
		match token.r#type {
			TokenType::Eof => Location::End,
			_ => Location::Lexeme(token.lexeme.to_string()),
		}
	}
}

impl Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Location::Nowhere => Ok(()),
			Location::End => write!(f, " at end"),
			Location::Lexeme(lexeme) => write!(f, " at \"{lexeme}\""),
		}
	}
}
