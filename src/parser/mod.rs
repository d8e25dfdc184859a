//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexme` or `Token`
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Expression` and `Statement`
//!
//! |Name|Operators|Associates
//! --|--|--
//! Assignment|=|Right
//! Or|\|\||Single
//! And|&&|Single
//! Equality|==|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* / %|Left
//! Unary|-|Right
//! Call|( )|Left
//!
//! `||` and `&&` take exactly one right operand, `a || b || c` leaves the
//! second `||` to whoever called the expression, which is a syntax error.
//!
//! Expression grammar:
//!
//! ``` BNF
//! expression     → assignment ;
//! assignment     → or ( "=" assignment )? ;
//! or             → and ( "||" and )? ;
//! and            → equality ( "&&" equality )? ;
//! equality       → comparison ( "==" comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" | "%" ) unary )* ;
//! unary          → "-" unary | call ;
//! call           → primary ( "(" arguments? ")" )* ;
//! primary        → INTEGER | STRING | IDENTIFIER | "(" expression ")" ;
//! ```
//!
//! Statement grammar:
//!
//! ``` BNF
//! declaration    → letDecl | fnDecl | statement ;
//! letDecl        → "let" IDENTIFIER ":" type ( "=" expression )? ";" ;
//! fnDecl         → "fn" IDENTIFIER "(" parameters? ")" block ;
//! statement      → printStmt | ifStmt | whileStmt | forStmt | block | returnStmt | exprStmt ;
//! ifStmt         → "if" ( "(" expression ")" statement | expression block ) ( "else" statement )? ;
//! whileStmt      → "while" ( "(" expression ")" statement | expression block ) ;
//! forStmt        → "for" "(" ( letDecl | exprStmt | ";" ) expression? ";" expression? ")" statement ;
//! ```
//!
//! When a declaration fails, the error is recorded and the parser skips ahead
//! to something that looks like the start of a statement, so one run reports
//! as many independent errors as it can.

pub mod expression;

use std::rc::Rc;

use TokenType::*;

use crate::{ParseError, error::{Location, parser::ParseErrorType}, parser::expression::{Expression, LiteralValue, Type}, scanner::{Literal, Token, TokenType}, statement::{Function, Parameter, Statement}};

/// Recursive descent parser over a scanned token list.
pub struct Parser<'a> {
	/// The tokens to parse, the last one is always `Eof`.
	tokens:  Vec<Token<'a>>,
	current: usize,
	errors:  Vec<ParseError>,
}

impl<'a> Parser<'a> {
	pub fn new(mut tokens: Vec<Token<'a>>) -> Self {
		if tokens.last().is_none_or(|token| token.r#type != Eof) {
			let line = tokens.last().map_or(1, |token| token.line);
			tokens.push(Token::new(Eof, "", line));
		}
		Self { tokens, current: 0, errors: Vec::new() }
	}

	/// Parse the whole token list, returning every syntax error if there was
	/// any.
	pub fn parse(mut self) -> Result<Vec<Statement<'a>>, Vec<ParseError>> {
		let mut statements = Vec::new();
		while !self.is_at_end() {
			match self.declaration() {
				Ok(statement) => statements.push(statement),
				Err(error) => {
					self.report(error);
					self.synchronize();
				}
			}
		}
		tracing::debug!("Parsed {} statements, {} errors", statements.len(), self.errors.len());
		if self.errors.is_empty() { Ok(statements) } else { Err(self.errors) }
	}

	fn declaration(&mut self) -> Result<Statement<'a>, ParseError> {
		match self.peek().r#type {
			Let => {
				self.advance();
				self.let_declaration()
			}
			TokenType::Function => {
				self.advance();
				self.function_declaration()
			}
			_ => self.statement(),
		}
	}

	fn let_declaration(&mut self) -> Result<Statement<'a>, ParseError> {
		let (name_token, type_token, r#type) = self.typed_name("Expected variable name.")?;
		let initializer = if self.match_next(Equal) { Some(self.expression()?) } else { None };
		self.consume(Semicolon, "Expected ';' after variable declaration.")?;
		Ok(Statement::Let { name_token, type_token, r#type, initializer })
	}

	/// `name: type`, shared by `let` and function parameters.
	fn typed_name(&mut self, message: &'static str) -> Result<(Token<'a>, Token<'a>, Type), ParseError> {
		let name_token = self.consume(Identifier, message)?;
		self.consume(Colon, "Expected ':' after name.")?;
		let type_token = *self.peek();
		let r#type = match type_token.r#type {
			TypeI32 => Type::Integer,
			TypeString => Type::Text,
			Identifier => {
				return Err(self.error_at(self.previous(), ParseErrorType::InvalidType(type_token.lexeme.to_string())));
			}
			_ => return Err(self.error_at(self.previous(), ParseErrorType::Expected("Expected type."))),
		};
		self.advance();
		Ok((name_token, type_token, r#type))
	}

	fn function_declaration(&mut self) -> Result<Statement<'a>, ParseError> {
		let name_token = self.consume(Identifier, "Expected function name.")?;
		self.consume(LeftParen, "Expected '(' after function name.")?;
		let mut parameters = Vec::new();
		if !self.check(RightParen) {
			loop {
				let (name_token, _, r#type) = self.typed_name("Expected parameter name.")?;
				parameters.push(Parameter { name_token, r#type });
				if !self.match_next(Comma) {
					break;
				}
			}
		}
		self.consume(RightParen, "Expected ')' after parameters.")?;
		self.consume(LeftBrace, "Expected '{' before function body.")?;
		let body = self.block()?;
		Ok(Statement::Function(Rc::new(Function { name_token, parameters, body })))
	}

	fn statement(&mut self) -> Result<Statement<'a>, ParseError> {
		match self.peek().r#type {
			Print => {
				self.advance();
				self.print_statement()
			}
			If => {
				self.advance();
				self.if_statement()
			}
			While => {
				self.advance();
				self.while_statement()
			}
			For => {
				self.advance();
				self.for_statement()
			}
			LeftBrace => {
				self.advance();
				Ok(Statement::Block(self.block()?))
			}
			Return => {
				let keyword = self.advance();
				self.return_statement(keyword)
			}
			_ => self.expression_statement(),
		}
	}

	/// `print;` prints an empty line.
	fn print_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		if self.match_next(Semicolon) {
			return Ok(Statement::Print(Expression::Literal(LiteralValue::Text(""))));
		}
		let value = self.expression()?;
		self.consume(Semicolon, "Expected ';' after value.")?;
		Ok(Statement::Print(value))
	}

	/// Either `(condition) statement` or `condition { ... }`.
	fn condition_and_body(&mut self) -> Result<(Expression<'a>, Statement<'a>), ParseError> {
		if self.match_next(LeftParen) {
			let condition = self.expression()?;
			self.consume(RightParen, "Expected ')' after condition.")?;
			let body = self.statement()?;
			Ok((condition, body))
		} else {
			let condition = self.expression()?;
			self.consume(LeftBrace, "Expected block after unparenthesized condition.")?;
			let body = Statement::Block(self.block()?);
			Ok((condition, body))
		}
	}

	fn if_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let (condition, then_branch) = self.condition_and_body()?;
		let else_branch = if self.match_next(Else) { Some(Box::new(self.statement()?)) } else { None };
		Ok(Statement::If { condition, then_branch: Box::new(then_branch), else_branch })
	}

	fn while_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let (condition, body) = self.condition_and_body()?;
		Ok(Statement::While { condition, body: Box::new(body) })
	}

	/// There is no `for` node, the loop becomes a `while` inside a block that
	/// scopes the loop variable.
	fn for_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.consume(LeftParen, "Expected '(' after 'for'.")?;
		let initializer = if self.match_next(Semicolon) {
			None
		} else if self.match_next(Let) {
			Some(self.let_declaration()?)
		} else {
			Some(self.expression_statement()?)
		};

		let condition = if self.check(Semicolon) { None } else { Some(self.expression()?) };
		self.consume(Semicolon, "Expected ';' after loop condition.")?;

		let increment = if self.check(RightParen) { None } else { Some(self.expression()?) };
		self.consume(RightParen, "Expected ')' after for clauses.")?;

		let mut body = self.statement()?;
		if let Some(increment) = increment {
			body = Statement::Block(vec![body, Statement::Expression(increment)]);
		}
		let condition = condition.unwrap_or(Expression::Literal(LiteralValue::Boolean(true)));
		body = Statement::While { condition, body: Box::new(body) };
		if let Some(initializer) = initializer {
			body = Statement::Block(vec![initializer, body]);
		}
		Ok(body)
	}

	fn return_statement(&mut self, keyword: Token<'a>) -> Result<Statement<'a>, ParseError> {
		let value = if self.check(Semicolon) { None } else { Some(self.expression()?) };
		self.consume(Semicolon, "Expected ';' after return value.")?;
		Ok(Statement::Return { keyword, value })
	}

	/// The statements of a block whose `{` was already consumed.
	fn block(&mut self) -> Result<Vec<Statement<'a>>, ParseError> {
		let mut statements = Vec::new();
		while !self.check(RightBrace) && !self.is_at_end() {
			statements.push(self.declaration()?);
		}
		self.consume(RightBrace, "Expected '}' after block.")?;
		Ok(statements)
	}

	fn expression_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let expression = self.expression()?;
		self.consume(Semicolon, "Expected ';' after expression.")?;
		Ok(Statement::Expression(expression))
	}

	fn expression(&mut self) -> Result<Expression<'a>, ParseError> { self.assignment() }

	/// The target is parsed as an ordinary expression first, and only a bare
	/// variable is accepted once we see the `=`.
	fn assignment(&mut self) -> Result<Expression<'a>, ParseError> {
		let expression = self.or()?;
		if self.check(Equal) {
			let before_equal = self.previous();
			self.advance();
			let value = self.assignment()?;
			return match expression {
				Expression::Variable(target) => Ok(Expression::assign(target, value)),
				_ => Err(self.error_at(before_equal, ParseErrorType::InvalidAssignmentTarget)),
			};
		}
		Ok(expression)
	}

	fn or(&mut self) -> Result<Expression<'a>, ParseError> {
		let left = self.and()?;
		if self.check(OrOr) {
			let operator = self.advance();
			let right = self.and()?;
			return Ok(Expression::logical(left, operator, right));
		}
		Ok(left)
	}

	fn and(&mut self) -> Result<Expression<'a>, ParseError> {
		let left = self.equality()?;
		if self.check(AndAnd) {
			let operator = self.advance();
			let right = self.equality()?;
			return Ok(Expression::logical(left, operator, right));
		}
		Ok(left)
	}

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expression = self.comparison()?;
		while matches!(self.peek().r#type, EqualEqual) {
			let operator = self.advance();
			expression = Expression::binary(expression, operator, self.comparison()?)
		}
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expression = self.term()?;
		while matches!(self.peek().r#type, Greater | GreaterEqual | Less | LessEqual) {
			let operator = self.advance();
			expression = Expression::binary(expression, operator, self.term()?)
		}
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expression = self.factor()?;
		while matches!(self.peek().r#type, Minus | Plus) {
			let operator = self.advance();
			expression = Expression::binary(expression, operator, self.factor()?)
		}
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expression = self.unary()?;
		while matches!(self.peek().r#type, Slash | Star | Percent) {
			let operator = self.advance();
			expression = Expression::binary(expression, operator, self.unary()?)
		}
		Ok(expression)
	}

	/// Parse unary expressions.
	fn unary(&mut self) -> Result<Expression<'a>, ParseError> {
		if matches!(self.peek().r#type, Minus) {
			let operator = self.advance();
			return Ok(Expression::unary(operator, self.unary()?));
		}
		self.call()
	}

	fn call(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expression = self.primary()?;
		while self.match_next(LeftParen) {
			let mut arguments = Vec::new();
			if !self.check(RightParen) {
				loop {
					arguments.push(self.expression()?);
					if !self.match_next(Comma) {
						break;
					}
				}
			}
			let paren = self.consume(RightParen, "Expected ')' after arguments.")?;
			expression = Expression::call(expression, paren, arguments);
		}
		Ok(expression)
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Expression<'a>, ParseError> {
		let token = *self.peek();
		match (token.r#type, token.literal) {
			(IntegerLiteral, Some(Literal::Integer(n))) => {
				self.advance();
				Ok(Expression::Literal(LiteralValue::Integer(n)))
			}
			(StringLiteral, Some(Literal::Text(s))) => {
				self.advance();
				Ok(Expression::Literal(LiteralValue::Text(s)))
			}
			(Identifier, _) => {
				self.advance();
				Ok(Expression::Variable(token))
			}
			(LeftParen, _) => {
				self.advance(); // consume '('
				let expression = self.expression()?;
				self.consume(RightParen, "Expected ')' after expression.")?;
				Ok(Expression::grouping(expression))
			}
			_ => Err(self.error_at(token, ParseErrorType::ExpectedExpression)),
		}
	}

	/// Consume the expected token, or fail pointing at the token before it.
	fn consume(&mut self, r#type: TokenType, message: &'static str) -> Result<Token<'a>, ParseError> {
		if self.check(r#type) {
			return Ok(self.advance());
		}
		Err(self.error_at(self.previous(), ParseErrorType::Expected(message)))
	}

	fn match_next(&mut self, r#type: TokenType) -> bool {
		let matched = self.check(r#type);
		if matched {
			self.advance();
		}
		matched
	}

	fn check(&self, r#type: TokenType) -> bool { !self.is_at_end() && self.peek().r#type == r#type }

	/// Advance to the next token, never past `Eof`, and return the consumed one.
	fn advance(&mut self) -> Token<'a> {
		if !self.is_at_end() {
			self.current += 1;
		}
		self.previous()
	}

	/// Peek at the current token.
	fn peek(&self) -> &Token<'a> { &self.tokens[self.current] }

	fn previous(&self) -> Token<'a> { self.tokens[self.current.saturating_sub(1)] }

	fn is_at_end(&self) -> bool { self.peek().r#type == Eof }

	fn error_at(&self, token: Token<'a>, r#type: ParseErrorType) -> ParseError {
		ParseError::new(token.line, Location::at(&token), r#type)
	}

	fn report(&mut self, error: ParseError) {
		tracing::debug!("{error}");
		self.errors.push(error);
	}

	/// Skip tokens until a statement boundary. A `{` right behind us is
	/// skipped up to the next `}`, without counting nested braces.
	fn synchronize(&mut self) {
		self.advance();
		while !self.is_at_end() {
			if self.previous().r#type == LeftBrace {
				while self.previous().r#type != RightBrace && !self.is_at_end() {
					self.advance();
				}
			}
			if self.previous().r#type == Semicolon {
				return;
			}
			if matches!(self.peek().r#type, Let | Print | If) {
				return;
			}
			self.advance();
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::scanner::Scanner;

	fn statements(input: &str) -> Vec<Statement<'_>> {
		let tokens = Scanner::new(input).scan_tokens().unwrap();
		Parser::new(tokens).parse().unwrap()
	}

	fn parse_errors(input: &str) -> Vec<ParseError> {
		let tokens = Scanner::new(input).scan_tokens().unwrap();
		Parser::new(tokens).parse().unwrap_err()
	}

	/// Parse `input;` as an expression statement and print its tree.
	fn parse(input: &str, equals: &str) {
		let source = format!("{input};");
		let statements = statements(&source);
		match &statements[..] {
			[Statement::Expression(expression)] => assert_eq!(expression.to_string(), equals),
			other => panic!("expected one expression statement, got {other:?}"),
		}
	}

	#[test]
	fn parse_arithmetic() {
		parse("3 + 4 * (-2 - 1)", "(+ 3 (* 4 (group (- (- 2) 1))))");
		parse("1 + 2 * 3 / 4 - 5", "(- (+ 1 (/ (* 2 3) 4)) 5)");
		parse("1 - 2 - 3", "(- (- 1 2) 3)");
		parse("7 % 3 * 2", "(* (% 7 3) 2)");
		parse("\"a\" + \"b\"", "(+ \"a\" \"b\")");
	}

	#[test]
	fn parse_comparison_and_equality() {
		parse("1 < 2", "(< 1 2)");
		parse("1 <= 2", "(<= 1 2)");
		parse("1 > 2", "(> 1 2)");
		parse("1 >= 2", "(>= 1 2)");
		parse("1 < 2 < 3", "(< (< 1 2) 3)");
		parse("1 == 2 == 3", "(== (== 1 2) 3)");
		parse("1 + 2 == 3", "(== (+ 1 2) 3)");
		parse("1 < 2 == 3 < 4", "(== (< 1 2) (< 3 4))");
	}

	#[test]
	fn parse_unary() {
		parse("-123", "(- 123)");
		parse("-(-123)", "(- (group (- 123)))");
		parse("--1", "(- (- 1))");
		parse("-1 * -2", "(* (- 1) (- 2))");
	}

	#[test]
	fn parse_logical() {
		parse("a || b", "(|| a b)");
		parse("a && b", "(&& a b)");
		parse("a || b && c", "(|| a (&& b c))");
		parse("a == 1 && b < 2", "(&& (== a 1) (< b 2))");
	}

	#[test]
	fn logical_operators_take_a_single_right_operand() {
		let errors = parse_errors("print a || b || c;");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].r#type, ParseErrorType::Expected("Expected ';' after value."));
		assert_eq!(errors[0].location, Location::Lexeme("b".to_string()));
	}

	#[test]
	fn parse_call() {
		parse("f()", "(call f)");
		parse("add(1, 2 + 3)", "(call add 1 (+ 2 3))");
		parse("f(1)(2)", "(call (call f 1) 2)");
		parse("-f(x) * 2", "(* (- (call f x)) 2)");
	}

	#[test]
	fn parse_assignment() {
		parse("a = 1", "(= a 1)");
		parse("a = b = 1", "(= a (= b 1))");
		parse("a = b || c", "(= a (|| b c))");
	}

	#[test]
	fn invalid_assignment_target() {
		let errors = parse_errors("1 + a = 2;");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].r#type, ParseErrorType::InvalidAssignmentTarget);
		assert_eq!(errors[0].location, Location::Lexeme("a".to_string()));
		assert_eq!(errors[0].to_string(), "[line 1] Error at \"a\": Invalid assignment target.");

		let errors = parse_errors("(a) = 2;");
		assert_eq!(errors[0].location, Location::Lexeme(")".to_string()));
	}

	#[test]
	fn let_with_binary_initializer() {
		let statements = statements("let x: i32 = 1 + 2;");
		let [Statement::Let { name_token, r#type, initializer: Some(initializer), .. }] = &statements[..] else {
			panic!("expected a let statement, got {statements:?}");
		};
		assert_eq!(name_token.lexeme, "x");
		assert_eq!(*r#type, Type::Integer);
		let Expression::Binary { left, operator, right } = initializer else {
			panic!("expected a binary initializer, got {initializer:?}");
		};
		assert_eq!(**left, Expression::Literal(LiteralValue::Integer(1)));
		assert_eq!(operator.r#type, Plus);
		assert_eq!(**right, Expression::Literal(LiteralValue::Integer(2)));
	}

	#[test]
	fn let_without_initializer() {
		let statements = statements("let name: string;");
		assert!(matches!(
			&statements[..],
			[Statement::Let { r#type: Type::Text, initializer: None, .. }]
		));
	}

	#[test]
	fn let_with_invalid_type() {
		let errors = parse_errors("let x: int = 1;");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].r#type, ParseErrorType::InvalidType("int".to_string()));
		assert_eq!(errors[0].to_string(), "[line 1] Error at \":\": Invalid type 'int'.");
	}

	#[test]
	fn empty_print_prints_empty_text() {
		let statements = statements("print;");
		assert_eq!(statements, vec![Statement::Print(Expression::Literal(LiteralValue::Text("")))]);
	}

	#[test]
	fn both_if_forms_build_the_same_tree() {
		let parenthesized = statements("if (x) { print 1; } else print 2;");
		let braced = statements("if x { print 1; } else print 2;");
		assert_eq!(parenthesized, braced);

		let parenthesized = statements("while (x) { x = x - 1; }");
		let braced = statements("while x { x = x - 1; }");
		assert_eq!(parenthesized, braced);
	}

	#[test]
	fn unparenthesized_condition_requires_block() {
		let errors = parse_errors("if x print 1;");
		assert_eq!(errors[0].r#type, ParseErrorType::Expected("Expected block after unparenthesized condition."));
	}

	#[test]
	fn for_desugars_to_while_in_block() {
		let statements = statements("for (let i: i32 = 0; i < 3; i = i + 1) print i;");
		let [Statement::Block(outer)] = &statements[..] else {
			panic!("expected an outer block, got {statements:?}");
		};
		let [Statement::Let { name_token, .. }, Statement::While { condition, body }] = &outer[..] else {
			panic!("expected let then while, got {outer:?}");
		};
		assert_eq!(name_token.lexeme, "i");
		assert_eq!(condition.to_string(), "(< i 3)");
		let Statement::Block(inner) = &**body else {
			panic!("expected the body block, got {body:?}");
		};
		assert!(matches!(inner[0], Statement::Print(_)));
		assert!(matches!(&inner[1], Statement::Expression(increment) if increment.to_string() == "(= i (+ i 1))"));
	}

	#[test]
	fn for_without_clauses_loops_on_true() {
		let statements = statements("for (;;) print 1;");
		let [Statement::While { condition, body }] = &statements[..] else {
			panic!("expected a bare while, got {statements:?}");
		};
		assert_eq!(*condition, Expression::Literal(LiteralValue::Boolean(true)));
		assert!(matches!(**body, Statement::Print(_)));
	}

	#[test]
	fn function_declaration() {
		let statements = statements("fn add(a: i32, b: string) { return a; }");
		let [Statement::Function(function)] = &statements[..] else {
			panic!("expected a function, got {statements:?}");
		};
		assert_eq!(function.name_token.lexeme, "add");
		let parameters: Vec<_> = function.parameters.iter().map(|p| (p.name_token.lexeme, p.r#type)).collect();
		assert_eq!(parameters, vec![("a", Type::Integer), ("b", Type::Text)]);
		assert!(matches!(&function.body[..], [Statement::Return { value: Some(_), .. }]));
	}

	#[test]
	fn return_without_value() {
		let statements = statements("fn f() { return; }");
		let [Statement::Function(function)] = &statements[..] else {
			panic!("expected a function, got {statements:?}");
		};
		assert!(matches!(&function.body[..], [Statement::Return { value: None, .. }]));
	}

	#[test]
	fn collects_two_independent_errors() {
		let errors = parse_errors("let a: i32 = 1\nlet b: i32 = 2;\nlet c: i32 = 3\nprint c;");
		assert_eq!(errors.len(), 2);
		assert_eq!(errors[0].to_string(), "[line 1] Error at \"1\": Expected ';' after variable declaration.");
		assert_eq!(errors[1].to_string(), "[line 3] Error at \"3\": Expected ';' after variable declaration.");

		let errors = parse_errors("print 1\nprint 2;\nprint 3\nprint 4;");
		assert_eq!(errors.len(), 2);
	}

	#[test]
	fn error_at_end() {
		let errors = parse_errors("print 1 +");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].location, Location::End);
		assert_eq!(errors[0].to_string(), "[line 1] Error at end: Expected expression.");
	}

	#[test]
	fn synchronize_skips_a_block() {
		let errors = parse_errors("fn (x: i32) { print x; }\nprint 2;");
		assert_eq!(errors.len(), 1);
		assert_eq!(errors[0].r#type, ParseErrorType::Expected("Expected function name."));
	}

	#[test]
	fn synchronize_stops_at_first_inner_brace() {
		let errors = parse_errors("fn (x: i32) { if x { print x; } print x; }\nprint 2;");
		assert_eq!(errors.len(), 2);
		assert_eq!(errors[1].r#type, ParseErrorType::ExpectedExpression);
		assert_eq!(errors[1].location, Location::Lexeme("}".to_string()));
	}
}
