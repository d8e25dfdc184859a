//! Tree-walking interpreter.
//!
//! The interpreter walks the statements produced by the parser, evaluating
//! expressions recursively and writing the output of `print` to the writer it
//! was built with.
//!
//! Scoping is dynamic: a call opens a child of whatever frame is current at
//! the call site, not of the frame the function was declared in. A `return`
//! travels back to its call as a [`Flow::Return`] value through every
//! statement executor on the way.

pub(crate) mod value;

use std::{io::Write, rc::Rc};

use Expression::*;
use value::{OperationFailure, Value};

use crate::{RuntimeError, environment::Environment, parser::expression::Expression, scanner::{Token, TokenType}, statement::{Function, Statement}};

/// How a statement finished.
#[derive(Debug)]
enum Flow<'a> {
	Normal,
	Return(Value<'a>),
}

/// Interpreter that executes checked statements.
pub struct Interpreter<'a, W: Write> {
	environment: Environment<'a, Value<'a>>,
	output:      W,
	/// Calls currently executing, a `return` outside of any is an error.
	calls:       usize,
}

impl<'a, W: Write> Interpreter<'a, W> {
	pub fn new(output: W) -> Self { Self { environment: Environment::new(), output, calls: 0 } }

	pub fn interpret(&mut self, statements: &[Statement<'a>]) -> Result<(), RuntimeError> {
		for statement in statements {
			self.execute(statement)?;
		}
		tracing::debug!("Executed {} statements", statements.len());
		Ok(())
	}

	/// Whether `name` is bound in the current frame or any frame around it.
	#[cfg(test)]
	fn is_defined(&self, name: &str) -> bool { self.environment.is_defined(name) }

	/// The writer `print` goes to.
	#[cfg(test)]
	fn output(&self) -> &W { &self.output }

	fn execute(&mut self, statement: &Statement<'a>) -> Result<Flow<'a>, RuntimeError> {
		match statement {
			Statement::Expression(expression) => {
				self.evaluate(expression)?;
			}
			Statement::Print(expression) => {
				let value = self.evaluate(expression)?;
				writeln!(self.output, "{value}")?;
			}
			Statement::Let { name_token, r#type, initializer, .. } => {
				let value = match initializer {
					Some(initializer) => self.evaluate(initializer)?,
					None => Value::Uninitialized,
				};
				self.environment.define(name_token.lexeme, value, Some(*r#type));
			}
			Statement::Block(statements) => return self.execute_block(statements),
			Statement::If { condition, then_branch, else_branch } => {
				if self.evaluate(condition)?.to_bool() {
					return self.execute(then_branch);
				} else if let Some(else_branch) = else_branch {
					return self.execute(else_branch);
				}
			}
			Statement::While { condition, body } => {
				while self.evaluate(condition)?.to_bool() {
					if let Flow::Return(value) = self.execute(body)? {
						return Ok(Flow::Return(value));
					}
				}
			}
			Statement::Function(function) => {
				self.environment.define(function.name_token.lexeme, Value::Function(Rc::clone(function)), None);
			}
			Statement::Return { keyword, value } => {
				if self.calls == 0 {
					return Err(RuntimeError::ReturnOutsideFunction { line: keyword.line });
				}
				let value = match value {
					Some(value) => self.evaluate(value)?,
					None => Value::Uninitialized,
				};
				return Ok(Flow::Return(value));
			}
		}
		Ok(Flow::Normal)
	}

	/// Runs `statements` in a fresh frame, which is dropped however the block
	/// ends.
	fn execute_block(&mut self, statements: &[Statement<'a>]) -> Result<Flow<'a>, RuntimeError> {
		self.environment.push_scope();
		let result = self.execute_statements(statements);
		self.environment.pop_scope();
		result
	}

	fn execute_statements(&mut self, statements: &[Statement<'a>]) -> Result<Flow<'a>, RuntimeError> {
		for statement in statements {
			if let Flow::Return(value) = self.execute(statement)? {
				return Ok(Flow::Return(value));
			}
		}
		Ok(Flow::Normal)
	}

	/// Evaluate the given expression and return its value.
	fn evaluate(&mut self, expr: &Expression<'a>) -> Result<Value<'a>, RuntimeError> {
		Ok(match expr {
			Literal(literal) => Value::from(*literal),
			Grouping(inner) => self.evaluate(inner)?,
			Unary { operator, right } => {
				let right_value = self.evaluate(right)?;
				right_value.negate().map_err(|failure| match failure {
					OperationFailure::Overflow => RuntimeError::Overflow { line: operator.line },
					_ => RuntimeError::UnaryOperation {
						line:   operator.line,
						detail: format!("{}{right_value:?}", operator.lexeme),
					},
				})?
			}
			Binary { left, operator, right } => {
				let left_value = self.evaluate(left)?;
				let right_value = self.evaluate(right)?;
				left_value.binary_op(operator.r#type, &right_value).map_err(|failure| match failure {
					OperationFailure::Overflow => RuntimeError::Overflow { line: operator.line },
					OperationFailure::DivisionByZero => RuntimeError::DivisionByZero { line: operator.line },
					OperationFailure::Operands => RuntimeError::BinaryOperation {
						line:   operator.line,
						detail: format!("{left_value:?} {} {right_value:?}", operator.lexeme),
					},
				})?
			}
			Logical { left, operator, right } => {
				let left_value = self.evaluate(left)?;
				let decided = match operator.r#type {
					TokenType::AndAnd => !left_value.to_bool(),
					_ => left_value.to_bool(),
				};
				if decided { left_value } else { self.evaluate(right)? }
			}
			Variable(token) => self.lookup(token)?,
			Assign { target, value } => {
				let value = self.evaluate(value)?;
				if !self.environment.assign(target.lexeme, value.clone()) {
					return Err(RuntimeError::UndefinedVariable { line: target.line, name: target.lexeme.to_string() });
				}
				value
			}
			Call { callee, paren, arguments } => {
				let callee = self.evaluate(callee)?;
				let arguments = arguments.iter().map(|argument| self.evaluate(argument)).collect::<Result<Vec<_>, _>>()?;
				let Value::Function(function) = callee else {
					return Err(RuntimeError::NotCallable { line: paren.line });
				};
				self.call(&function, arguments, paren)?
			}
		})
	}

	fn lookup(&self, token: &Token<'a>) -> Result<Value<'a>, RuntimeError> {
		let binding = self.environment.get(token.lexeme).ok_or_else(|| RuntimeError::UndefinedVariable {
			line: token.line,
			name: token.lexeme.to_string(),
		})?;
		match binding.value {
			Value::Uninitialized => {
				Err(RuntimeError::UninitializedVariable { line: token.line, name: token.lexeme.to_string() })
			}
			ref value => Ok(value.clone()),
		}
	}

	fn call(&mut self, function: &Function<'a>, arguments: Vec<Value<'a>>, paren: &Token) -> Result<Value<'a>, RuntimeError> {
		if arguments.len() != function.parameters.len() {
			return Err(RuntimeError::ArgumentCount {
				line:     paren.line,
				expected: function.parameters.len(),
				found:    arguments.len(),
			});
		}
		tracing::trace!(function = function.name_token.lexeme, "call");

		self.environment.push_scope();
		for (parameter, argument) in function.parameters.iter().zip(arguments) {
			self.environment.define(parameter.name_token.lexeme, argument, Some(parameter.r#type));
		}
		self.calls += 1;
		let result = self.execute_block(&function.body);
		self.calls -= 1;
		self.environment.pop_scope();

		Ok(match result? {
			Flow::Return(value) => value,
			Flow::Normal => Value::Uninitialized,
		})
	}
}
