/// A token produced by the scanner. The lexeme borrows from the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
	pub r#type:  TokenType,
	pub lexeme:  &'a str,
	/// Parsed value of integer and string literals.
	pub literal: Option<Literal<'a>>,
	pub line:    usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType, lexeme: &'a str, line: usize) -> Self {
		Self { r#type, lexeme, literal: None, line }
	}

	pub fn with_literal(r#type: TokenType, lexeme: &'a str, literal: Literal<'a>, line: usize) -> Self {
		Self { r#type, lexeme, literal: Some(literal), line }
	}
}

/// The value a literal token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'a> {
	Integer(i64),
	/// Text between the quotes, verbatim.
	Text(&'a str),
}

/// The different types of tokens, the copying is lightweight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
	/// New Line Character `\n`.
	NewLine,
	/// Empty Character: ` `, `\r`, `\t`.
	EmptyChar,
	/// Comment `//` to end of line.
	Comment,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Comma `,`.
	Comma,
	/// Colon `:`, separates a name from its type.
	Colon,
	/// Semicolon `;`.
	Semicolon,
	/// Minus `-`.
	Minus,
	/// Plus `+`.
	Plus,
	/// Slash `/`.
	Slash,
	/// Asterisk `*`.
	Star,
	/// Percent `%`.
	Percent,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Logical and `&&`.
	AndAnd,
	/// Logical or `||`.
	OrOr,
	/// Identifier, e.g. variable or function name.
	Identifier,
	/// String literal, e.g. `"hello"`.
	StringLiteral,
	/// Integer literal, e.g. `123`.
	IntegerLiteral,
	Let,
	Function,
	Return,
	Print,
	If,
	Else,
	While,
	For,
	/// Type name `i32`.
	TypeI32,
	/// Type name `string`.
	TypeString,
	/// End of file/input.
	Eof,
}

impl TokenType {
	pub fn is_ignored(&self) -> bool {
		matches!(self, TokenType::EmptyChar | TokenType::NewLine | TokenType::Comment)
	}

	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"let" => TokenType::Let,
			"fn" => TokenType::Function,
			"return" => TokenType::Return,
			"print" => TokenType::Print,
			"if" => TokenType::If,
			"else" => TokenType::Else,
			"while" => TokenType::While,
			"for" => TokenType::For,
			"i32" => TokenType::TypeI32,
			"string" => TokenType::TypeString,
			_ => TokenType::Identifier,
		}
	}
}
