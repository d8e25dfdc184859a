//! Static checks, run once over the whole program before anything executes.
//!
//! The analyzer walks the tree with its own `Environment`, opening and closing
//! frames exactly where the interpreter will, and stops at the first problem:
//! incompatible declarations and assignments, adding an `i32` to a `string`,
//! reading a variable that was never given a value, and calling a function
//! with the wrong number of arguments.
//!
//! A function body is checked where it is called, in a child of the caller's
//! frames, because that is where it runs. A body that is never called is never
//! checked, the same way it never runs.
//!
//! Types are only as precise as the language needs: a binary expression has
//! the type of its left operand, and argument types aren't checked against
//! parameters.

use std::{fmt::Display, rc::Rc};

use crate::{SemanticError, environment::Environment, error::{Location, analyzer::SemanticErrorType}, parser::expression::{Expression, Type}, scanner::{Token, TokenType}, statement::{Function, Statement}};

/// What the analyzer knows about a name.
#[derive(Debug, Clone)]
pub(crate) enum Symbol<'a> {
	/// Declared with `let` and no initializer. Assignment doesn't change this,
	/// it may sit in a branch or a body that never runs.
	Uninitialized,
	Initialized,
	Function(Rc<Function<'a>>),
}

/// Static type of an expression.
#[derive(Debug, Clone)]
pub(crate) enum StaticType<'a> {
	Known(Type),
	Function(Rc<Function<'a>>),
	/// Booleans, and calls to functions that haven't returned a known type.
	/// Never reported.
	Unknown,
}

impl From<Option<Type>> for StaticType<'_> {
	fn from(r#type: Option<Type>) -> Self { r#type.map_or(StaticType::Unknown, StaticType::Known) }
}

impl Display for StaticType<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			StaticType::Known(r#type) => write!(f, "{}", r#type),
			StaticType::Function(_) => write!(f, "fn"),
			StaticType::Unknown => write!(f, "unknown"),
		}
	}
}

/// A function whose body is being checked.
#[derive(Debug)]
struct ActiveCall<'a> {
	function: Rc<Function<'a>>,
	/// Type of the first `return` with a known type.
	returns:  Option<Type>,
}

pub struct Analyzer<'a> {
	environment: Environment<'a, Symbol<'a>>,
	/// Innermost last.
	calls:       Vec<ActiveCall<'a>>,
}

impl Default for Analyzer<'_> {
	fn default() -> Self { Self::new() }
}

impl<'a> Analyzer<'a> {
	pub fn new() -> Self { Self { environment: Environment::new(), calls: Vec::new() } }

	/// Check the whole program, failing on the first error.
	pub fn analyze(&mut self, statements: &[Statement<'a>]) -> Result<(), SemanticError> {
		for statement in statements {
			self.statement(statement)?;
		}
		tracing::debug!("Analyzed {} statements", statements.len());
		Ok(())
	}

	fn statement(&mut self, statement: &Statement<'a>) -> Result<(), SemanticError> {
		match statement {
			Statement::Expression(expression) | Statement::Print(expression) => {
				self.expression(expression)?;
			}
			Statement::Let { name_token, type_token, r#type, initializer } => {
				let symbol = match initializer {
					Some(initializer) => {
						let found = self.expression(initializer)?;
						check_initializer(*r#type, found, type_token)?;
						Symbol::Initialized
					}
					None => Symbol::Uninitialized,
				};
				self.environment.define(name_token.lexeme, symbol, Some(*r#type));
			}
			Statement::Block(statements) => self.block(statements)?,
			Statement::If { condition, then_branch, else_branch } => {
				self.expression(condition)?;
				self.statement(then_branch)?;
				if let Some(else_branch) = else_branch {
					self.statement(else_branch)?;
				}
			}
			Statement::While { condition, body } => {
				self.expression(condition)?;
				self.statement(body)?;
			}
			Statement::Function(function) => {
				self.environment.define(function.name_token.lexeme, Symbol::Function(Rc::clone(function)), None);
			}
			Statement::Return { keyword, value } => {
				let found = match value {
					Some(value) => self.expression(value)?,
					None => StaticType::Unknown,
				};
				let Some(call) = self.calls.last_mut() else {
					return Err(error(keyword, SemanticErrorType::TopLevelReturn));
				};
				if let StaticType::Known(found) = found {
					match call.returns {
						Some(expected) if expected != found => {
							return Err(error(keyword, SemanticErrorType::InconsistentReturn));
						}
						Some(_) => {}
						None => call.returns = Some(found),
					}
				}
			}
		}
		Ok(())
	}

	fn block(&mut self, statements: &[Statement<'a>]) -> Result<(), SemanticError> {
		self.environment.push_scope();
		let result = statements.iter().try_for_each(|statement| self.statement(statement));
		self.environment.pop_scope();
		result
	}

	/// Check the body of `function` against the frames open right now, with
	/// the parameters in a frame of their own. A function already being checked
	/// further out isn't entered again, its call has the return type seen so
	/// far.
	fn call(&mut self, function: &Rc<Function<'a>>) -> Result<StaticType<'a>, SemanticError> {
		if let Some(active) = self.calls.iter().find(|active| Rc::ptr_eq(&active.function, function)) {
			return Ok(active.returns.into());
		}
		tracing::trace!(function = function.name_token.lexeme, "check call");

		self.calls.push(ActiveCall { function: Rc::clone(function), returns: None });
		self.environment.push_scope();
		for parameter in &function.parameters {
			self.environment.define(parameter.name_token.lexeme, Symbol::Initialized, Some(parameter.r#type));
		}
		let result = self.block(&function.body);
		self.environment.pop_scope();
		let returns = self.calls.pop().and_then(|active| active.returns);
		result?;

		Ok(returns.into())
	}

	fn expression(&mut self, expression: &Expression<'a>) -> Result<StaticType<'a>, SemanticError> {
		Ok(match expression {
			Expression::Literal(literal) => literal.r#type().into(),
			Expression::Grouping(inner) => self.expression(inner)?,
			Expression::Unary { operator, right } => {
				let right = self.expression(right)?;
				if matches!(right, StaticType::Known(Type::Text)) {
					return Err(error(operator, SemanticErrorType::NegatedText));
				}
				right
			}
			Expression::Binary { left, operator, right } => {
				let left = self.expression(left)?;
				let right = self.expression(right)?;
				if operator.r#type == TokenType::Plus
					&& matches!(
						(&left, &right),
						(StaticType::Known(Type::Integer), StaticType::Known(Type::Text))
							| (StaticType::Known(Type::Text), StaticType::Known(Type::Integer))
					) {
					return Err(error(operator, SemanticErrorType::MixedAddition));
				}
				left
			}
			Expression::Logical { left, right, .. } => {
				let left = self.expression(left)?;
				self.expression(right)?;
				left
			}
			Expression::Variable(name) => {
				let binding =
					self.environment.get(name.lexeme).ok_or_else(|| error(name, SemanticErrorType::UndefinedVariable))?;
				match &binding.value {
					Symbol::Uninitialized => return Err(error(name, SemanticErrorType::UninitializedVariable)),
					Symbol::Initialized => binding.r#type.into(),
					Symbol::Function(function) => StaticType::Function(Rc::clone(function)),
				}
			}
			Expression::Assign { target, value } => {
				let found = self.expression(value)?;
				let declared = self
					.environment
					.get(target.lexeme)
					.ok_or_else(|| error(target, SemanticErrorType::UndefinedVariable))?
					.r#type;
				let compatible = match (declared, found) {
					(_, StaticType::Unknown) => true,
					(Some(declared), StaticType::Known(found)) => declared == found,
					_ => false,
				};
				if !compatible {
					return Err(error(target, SemanticErrorType::InvalidAssignment));
				}
				declared.into()
			}
			Expression::Call { callee, paren, arguments } => {
				let StaticType::Function(function) = self.expression(callee)? else {
					return Err(error(paren, SemanticErrorType::NotCallable));
				};
				let arity = function.parameters.len();
				if arguments.len() != arity {
					return Err(error(paren, SemanticErrorType::ArgumentCount { expected: arity, found: arguments.len() }));
				}
				for argument in arguments {
					self.expression(argument)?;
				}
				self.call(&function)?
			}
		})
	}
}

/// `let name: declared = found;`
fn check_initializer(declared: Type, found: StaticType, type_token: &Token) -> Result<(), SemanticError> {
	let r#type = match (declared, found) {
		(_, StaticType::Unknown) => return Ok(()),
		(declared, StaticType::Known(found)) if declared == found => return Ok(()),
		(Type::Integer, StaticType::Known(Type::Text)) => SemanticErrorType::TextToInteger,
		(Type::Text, StaticType::Known(Type::Integer)) => SemanticErrorType::IntegerToText,
		(declared, found) => {
			SemanticErrorType::IncompatibleInitializer { found: found.to_string(), declared: declared.to_string() }
		}
	};
	Err(SemanticError::new(type_token.line, Location::Nowhere, r#type))
}

fn error(token: &Token, r#type: SemanticErrorType) -> SemanticError {
	SemanticError::new(token.line, Location::at(token), r#type)
}
