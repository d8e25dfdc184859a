//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 * (45 +
//! x)` as nested nodes. Every node owns its children.

use std::fmt::Display;

use Expression::*;

use crate::scanner::Token;

/// The two primitive types, used for literals and declared variables alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
	/// `i32` in source.
	Integer,
	/// `string` in source.
	Text,
}

impl Display for Type {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Integer => write!(f, "i32"),
			Type::Text => write!(f, "string"),
		}
	}
}

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'a> {
	Literal(LiteralValue<'a>),
	Variable(Token<'a>),
	Unary { operator: Token<'a>, right: Box<Expression<'a>> },
	Binary { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	/// `&&` and `||`, the right side is only evaluated when needed.
	Logical { left: Box<Expression<'a>>, operator: Token<'a>, right: Box<Expression<'a>> },
	/// `paren` is the closing parenthesis, kept for its line.
	Call { callee: Box<Expression<'a>>, paren: Token<'a>, arguments: Vec<Expression<'a>> },
	Assign { target: Token<'a>, value: Box<Expression<'a>> },
	Grouping(Box<Expression<'a>>),
}

impl<'a> Expression<'a> {
	pub fn unary(operator: Token<'a>, right: Self) -> Self { Unary { operator, right: Box::new(right) } }

	pub fn binary(left: Self, operator: Token<'a>, right: Self) -> Self {
		Binary { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn logical(left: Self, operator: Token<'a>, right: Self) -> Self {
		Logical { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn grouping(expr: Self) -> Self { Grouping(Box::new(expr)) }

	pub fn assign(target: Token<'a>, value: Self) -> Self { Assign { target, value: Box::new(value) } }

	pub fn call(callee: Self, paren: Token<'a>, arguments: Vec<Self>) -> Self {
		Call { callee: Box::new(callee), paren, arguments }
	}
}

/// Literal values in the AST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue<'a> {
	Integer(i64),
	Text(&'a str),
	/// Never written by hand, `for` without a condition loops on `true`.
	Boolean(bool),
}

impl LiteralValue<'_> {
	/// The type tag of the literal, booleans have none.
	pub fn r#type(&self) -> Option<Type> {
		match self {
			LiteralValue::Integer(_) => Some(Type::Integer),
			LiteralValue::Text(_) => Some(Type::Text),
			LiteralValue::Boolean(_) => None,
		}
	}
}

impl Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(lit) => write!(f, "{lit}"),
			Unary { operator, right } => write!(f, "({} {right})", operator.lexeme),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Grouping(expression) => write!(f, "(group {expression})"),
			Variable(token) => write!(f, "{}", token.lexeme),
			Assign { target, value } => write!(f, "(= {} {value})", target.lexeme),
			Logical { left, operator, right } => write!(f, "({} {left} {right})", operator.lexeme),
			Call { callee, arguments, .. } => write!(
				f,
				"(call {callee}{})",
				arguments.iter().map(|arg| format!(" {arg}")).collect::<Vec<String>>().join("")
			),
		}
	}
}

impl Display for LiteralValue<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Integer(n) => write!(f, "{n}"),
			LiteralValue::Text(s) => write!(f, "\"{s}\""),
			LiteralValue::Boolean(b) => write!(f, "{b}"),
		}
	}
}
