//! # How a tarn program runs
//!
//! User's source code: `let average: i32 = (min + max) / 2;`

//! ## Scanning
//!
//! Takes in the characters and converts them into tokens. Punctuation `(`,
//! `:`, integers `123`, string literals `"hi!"`, identifiers `min` and the
//! keywords `let` and `i32` are all tokens.
//!
//! Whitespace and `//` comments are dropped, so the tokens are
//! `["let", "average", ":", "i32", "=", "(", "min", "+", "max", ")", "/", "2",
//! ";"]`. The first character the scanner doesn't understand stops everything.

//! ## Parsing
//!
//! A recursive-descent parser builds the syntax tree:
//!
//! ``` markdown
//! average: i32 (Statement::Let)
//! └── / (Expression::Binary)
//!     ├── + (Expression::Binary)
//!     │   ├── min (Expression::Variable)
//!     │   └── max (Expression::Variable)
//!     └── 2 (Expression::Literal)
//! ```
//!
//! After a syntax error the parser skips ahead to a likely statement boundary
//! and carries on, so one run reports every independent error it can find.

//! ## Static analysis
//!
//! Names are resolved against the same frames the interpreter will build, and
//! declared types are checked against what flows into them. The first
//! violation ends the run, nothing has been printed at this point.

//! ## Interpreting
//!
//! The tree is walked directly. Integers are 64-bit and checked, so overflow
//! and division by zero are errors rather than surprises.

mod analyzer;
pub mod cli;
mod environment;
mod error;
mod interpreter;
mod parser;
mod scanner;
mod statement;
mod tarn;

pub use analyzer::Analyzer;
pub use error::{Location, TarnError, analyzer::{SemanticError, SemanticErrorType}, interpreter::RuntimeError, parser::{ParseError, ParseErrorType}, scanner::{ScanError, ScanErrorType}};
pub use interpreter::Interpreter;
pub use parser::Parser;
pub use scanner::Scanner;
pub use tarn::Tarn;
