//! Turns source text into tokens.
//!
//! The parser wants to know not just that it has a lexeme for some
//! identifier, but that it has a reserved word, and which keyword it is. So at
//! the point that we recognize a lexeme, we also remember which kind of lexeme
//! it represents, and for literals, the value it stands for.
//!
//! We can't detect a reserved word until we've reached the end of what might
//! instead be an identifier, this is `maximal munch`. Apart from that the
//! scanner never looks more than one character ahead.
//!
//! Scanning is fail fast: the first bad character ends it.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;

use crate::{ScanError, ScanErrorType};

/// A scanner for tarn source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points past the character currently being considered
	cursor:      usize,
	/// Tracks what source line `cursor` is on so we can produce tokens that know
	/// their location.
	line:        usize,
	tokens:      Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, tokens: Vec::new() }
	}

	/// Scan all tokens from the source code
	pub fn scan_tokens(mut self) -> Result<Vec<Token<'a>>, ScanError> {
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			self.scan_token()?;
		}
		self.tokens.push(Token::new(Eof, "", self.line));
		tracing::debug!("Scanned {} tokens", self.tokens.len());
		Ok(self.tokens)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self) -> Result<(), ScanError> {
		let Some(next_char) = self.advance() else {
			return Ok(());
		};
		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			':' => Colon,
			';' => Semicolon,
			'-' => Minus,
			'+' => Plus,
			'*' => Star,
			'%' => Percent,
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'|' => if self.match_next('|') { OrOr } else { return Err(self.error(ScanErrorType::BitwiseOr)) },
			'&' => if self.match_next('&') { AndAnd } else { return Err(self.error(ScanErrorType::BitwiseAnd)) },
			'/' => if self.match_next('/') {
				while self.peek().is_some_and(|c| c != '\n') { self.advance(); }
				Comment
			} else { Slash },
			' ' | '\r' | '\t' => EmptyChar,
			'\n' => { self.line += 1; NewLine }
			'"' => return self.string(),
			c if c.is_ascii_digit() => return self.number(),
			c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
			_ => return Err(self.error(ScanErrorType::UnexpectedCharacter(next_char))),
		};

		if !r#type.is_ignored() {
			self.add_token(r#type);
		}

		Ok(())
	}

	fn add_token(&mut self, r#type: TokenType) {
		let lexeme = &self.source[self.start..self.cursor];
		self.tokens.push(Token::new(r#type, lexeme, self.line));
	}

	fn add_literal(&mut self, r#type: TokenType, literal: Literal<'a>) {
		let lexeme = &self.source[self.start..self.cursor];
		self.tokens.push(Token::with_literal(r#type, lexeme, literal, self.line));
	}

	fn error(&self, r#type: ScanErrorType) -> ScanError { ScanError::new(self.line, r#type) }

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan a string literal. Strings end on the line they start.
	fn string(&mut self) -> Result<(), ScanError> {
		while self.peek().is_some_and(|c| c != '"' && c != '\n') {
			self.advance();
		}

		if !self.match_next('"') {
			return Err(self.error(ScanErrorType::UnterminatedString));
		}
		let source = self.source;
		let value = &source[self.start + 1..self.cursor - 1];
		self.add_literal(StringLiteral, Literal::Text(value));
		Ok(())
	}

	/// Scan an integer literal
	fn number(&mut self) -> Result<(), ScanError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		let value = self.source[self.start..self.cursor]
			.parse()
			.map_err(|_| self.error(ScanErrorType::IntegerOutOfRange))?;
		self.add_literal(IntegerLiteral, Literal::Integer(value));
		Ok(())
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}
