use crate::error::Location;

/// A static error found before execution. Analysis stops at the first one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] Error{location}: {type}")]
pub struct SemanticError {
	pub line:     usize,
	pub location: Location,
	pub r#type:   SemanticErrorType,
}

impl SemanticError {
	pub fn new(line: usize, location: Location, r#type: SemanticErrorType) -> Self { Self { line, location, r#type } }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticErrorType {
	/// `let x: i32 = "text";`
	TextToInteger,
	/// `let x: string = 1;`
	IntegerToText,
	/// Any other incompatible initializer, e.g. a function value.
	IncompatibleInitializer { found: String, declared: String },
	/// `1 + "text"`
	MixedAddition,
	NegatedText,
	UndefinedVariable,
	UninitializedVariable,
	InvalidAssignment,
	NotCallable,
	ArgumentCount { expected: usize, found: usize },
	InconsistentReturn,
	TopLevelReturn,
}

impl std::fmt::Display for SemanticErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use SemanticErrorType::*;
		match self {
			TextToInteger => write!(f, "Tried to assign a string to an i32."),
			IntegerToText => write!(f, "Tried to assign an i32 to a string."),
			IncompatibleInitializer { found, declared } => {
				write!(f, "Invalid assignment. Tried to assign {found} to {declared}.")
			}
			MixedAddition => write!(f, "Tried to add a string to an i32."),
			NegatedText => write!(f, "Tried to negate a string."),
			UndefinedVariable => write!(f, "Undefined variable."),
			UninitializedVariable => write!(f, "Tried to use an uninitialized variable."),
			InvalidAssignment => write!(f, "Invalid assignment."),
			NotCallable => write!(f, "Can only call functions."),
			ArgumentCount { expected, found } => {
				write!(f, "Expected {expected} arguments but got {found}.")
			}
			InconsistentReturn => write!(f, "Inconsistent return types."),
			TopLevelReturn => write!(f, "Can't return from top-level code."),
		}
	}
}
