//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. The body of a `while` loop is always a statement.

use std::rc::Rc;

use crate::{parser::expression::{Expression, Type}, scanner::Token};

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
	/// An expression used as a statement.
	Expression(Expression<'a>),
	/// A print statement.
	Print(Expression<'a>),
	/// A variable declaration statement.
	Let {
		/// The token of the variable being declared.
		name_token:  Token<'a>,
		/// The `i32` or `string` token.
		type_token:  Token<'a>,
		r#type:      Type,
		/// An optional initializer expression.
		initializer: Option<Expression<'a>>,
	},
	/// A block of statements, with its own scope.
	Block(Vec<Statement<'a>>),
	If {
		condition:   Expression<'a>,
		then_branch: Box<Statement<'a>>,
		else_branch: Option<Box<Statement<'a>>>,
	},
	While {
		condition: Expression<'a>,
		body:      Box<Statement<'a>>,
	},
	/// Shared with the runtime value the declaration creates.
	Function(Rc<Function<'a>>),
	/// A return statement.
	Return {
		keyword: Token<'a>,
		value:   Option<Expression<'a>>,
	},
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Function<'a> {
	pub name_token: Token<'a>,
	pub parameters: Vec<Parameter<'a>>,
	/// Runs as a block, in a scope of its own below the parameters.
	pub body:       Vec<Statement<'a>>,
}

/// A typed function parameter, `name: type`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter<'a> {
	pub name_token: Token<'a>,
	pub r#type:     Type,
}
