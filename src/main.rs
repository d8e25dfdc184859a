use std::process::ExitCode;

use clap::Parser;
use tarn::cli::Cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
	tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(EnvFilter::from_default_env()).init();

	let cli = Cli::parse();
	match tarn::Tarn.run_file(&cli.path, std::io::stdout().lock()) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e}");
			ExitCode::from(e.exit_code())
		}
	}
}
