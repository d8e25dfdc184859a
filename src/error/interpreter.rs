/// Errors that can occur during interpretation. A program accepted by the
/// analyzer only reaches the name and call variants if the analyzer missed
/// something.
#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
	#[error("[line {line}] Error at \"{name}\": Undefined variable.")]
	UndefinedVariable { line: usize, name: String },
	#[error("[line {line}] Error at \"{name}\": Tried to use an uninitialized variable.")]
	UninitializedVariable { line: usize, name: String },
	#[error("[line {line}] Error: Can only call functions.")]
	NotCallable { line: usize },
	#[error("[line {line}] Error: Expected {expected} arguments but got {found}.")]
	ArgumentCount { line: usize, expected: usize, found: usize },
	/// Error for invalid unary operations
	#[error("[line {line}] Error: Invalid unary operation: {detail}.")]
	UnaryOperation { line: usize, detail: String },
	/// Error for invalid binary operations
	#[error("[line {line}] Error: Invalid binary operation: {detail}.")]
	BinaryOperation { line: usize, detail: String },
	#[error("[line {line}] Error: Integer overflow.")]
	Overflow { line: usize },
	#[error("[line {line}] Error: Division by zero.")]
	DivisionByZero { line: usize },
	#[error("[line {line}] Error at \"return\": Can't return from top-level code.")]
	ReturnOutsideFunction { line: usize },
	/// Writing `print` output failed
	#[error("Failed write output: {0}")]
	Output(#[from] std::io::Error),
}
