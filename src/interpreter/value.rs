use std::{fmt::Display, rc::Rc};

use Value::*;

use crate::{parser::expression::LiteralValue, scanner::TokenType, statement};

/// Value represents a runtime value.
#[derive(Debug, Clone)]
pub(crate) enum Value<'a> {
	/// Declared with `let` but never assigned, also the result of a call that
	/// didn't `return` a value.
	Uninitialized,
	Integer(i64),
	Text(String),
	Boolean(bool),
	Function(Rc<statement::Function<'a>>),
}

/// Why a binary operation produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OperationFailure {
	/// The operator isn't defined for this pair of operands.
	Operands,
	Overflow,
	DivisionByZero,
}

impl<'a> From<LiteralValue<'a>> for Value<'a> {
	fn from(literal: LiteralValue<'a>) -> Self {
		match literal {
			LiteralValue::Integer(n) => Integer(n),
			LiteralValue::Text(s) => Text(s.to_string()),
			LiteralValue::Boolean(b) => Boolean(b),
		}
	}
}

impl Display for Value<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Uninitialized => write!(f, "uninitialized"),
			Integer(n) => write!(f, "{n}"),
			Text(s) => write!(f, "{s}"),
			Boolean(b) => write!(f, "{b}"),
			Function(function) => write!(f, "<fn {}>", function.name_token.lexeme),
		}
	}
}

impl PartialEq for Value<'_> {
	/// Values of different kinds are never equal. Functions compare by identity.
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Uninitialized, Uninitialized) => true,
			(Integer(l), Integer(r)) => l == r,
			(Text(l), Text(r)) => l == r,
			(Boolean(l), Boolean(r)) => l == r,
			(Function(l), Function(r)) => Rc::ptr_eq(l, r),
			_ => false,
		}
	}
}

impl<'a> Value<'a> {
	/// Performs a binary operation between two values.
	pub fn binary_op(&self, op: TokenType, right: &Self) -> Result<Value<'a>, OperationFailure> {
		use TokenType::*;

		match op {
			Plus => self.plus(right),
			Minus => self.arithmetic(right, i64::checked_sub),
			Star => self.arithmetic(right, i64::checked_mul),
			Slash => self.division(right, i64::checked_div),
			Percent => self.division(right, i64::checked_rem),
			Greater => self.compare(right).map(|ordering| Boolean(ordering.is_gt())),
			GreaterEqual => self.compare(right).map(|ordering| Boolean(ordering.is_ge())),
			Less => self.compare(right).map(|ordering| Boolean(ordering.is_lt())),
			LessEqual => self.compare(right).map(|ordering| Boolean(ordering.is_le())),
			EqualEqual => Ok(Boolean(self == right)),
			_ => Err(OperationFailure::Operands),
		}
	}

	/// Determines if the value is considered "true" in a boolean context.
	pub fn to_bool(&self) -> bool {
		match self {
			Uninitialized => false,
			Integer(n) => *n != 0,
			Text(s) => !s.is_empty(),
			Boolean(b) => *b,
			Function(_) => true,
		}
	}

	pub fn negate(&self) -> Result<Value<'a>, OperationFailure> {
		match self {
			Integer(n) => n.checked_neg().map(Integer).ok_or(OperationFailure::Overflow),
			_ => Err(OperationFailure::Operands),
		}
	}

	fn plus(&self, other: &Self) -> Result<Value<'a>, OperationFailure> {
		match (self, other) {
			(Text(l), Text(r)) => Ok(Text(format!("{l}{r}"))),
			_ => self.arithmetic(other, i64::checked_add),
		}
	}

	fn arithmetic(&self, other: &Self, op: fn(i64, i64) -> Option<i64>) -> Result<Value<'a>, OperationFailure> {
		match (self, other) {
			(Integer(l), Integer(r)) => op(*l, *r).map(Integer).ok_or(OperationFailure::Overflow),
			_ => Err(OperationFailure::Operands),
		}
	}

	fn division(&self, other: &Self, op: fn(i64, i64) -> Option<i64>) -> Result<Value<'a>, OperationFailure> {
		match other {
			Integer(0) if matches!(self, Integer(_)) => Err(OperationFailure::DivisionByZero),
			_ => self.arithmetic(other, op),
		}
	}

	/// Integers numerically, text lexicographically.
	fn compare(&self, other: &Self) -> Result<std::cmp::Ordering, OperationFailure> {
		match (self, other) {
			(Integer(l), Integer(r)) => Ok(l.cmp(r)),
			(Text(l), Text(r)) => Ok(l.cmp(r)),
			_ => Err(OperationFailure::Operands),
		}
	}
}
