use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tarn", version, about = "Run a tarn program.", after_long_help = "Diagnostics go to stderr, set RUST_LOG to see the stages at work.")]
pub struct Cli {
	/// Source file
	pub path: PathBuf,
}
