use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{TarnError, analyzer::Analyzer, interpreter::Interpreter, parser::Parser, scanner::Scanner};

/// Tarn runs source text through every stage, stopping at the first stage
/// that fails.
pub struct Tarn;

impl Tarn {
	/// Read the file at `path` and run it, `print` output goes to `output`.
	pub fn run_file<P: AsRef<Path>, W: Write>(&self, path: P, output: W) -> Result<(), TarnError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		self.run(&source, output)
	}

	/// Scan, parse, analyze and interpret `source`. Nothing is executed unless
	/// the first three stages succeed.
	pub fn run<W: Write>(&self, source: &str, output: W) -> Result<(), TarnError> {
		let tokens = Scanner::new(source).scan_tokens()?;
		let statements = Parser::new(tokens).parse()?;
		Analyzer::new().analyze(&statements)?;
		Interpreter::new(output).interpret(&statements)?;

		Ok(())
	}
}
