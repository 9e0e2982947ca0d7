// ══════════════════════════════════════════════════════════════════════════════
// DAYLOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Command-line front-end for the logger. Messages come from the arguments, or
// from stdin one line at a time when no arguments are given:
//
//   daylog --level success "Database backup completed"
//   some-job | daylog --indent 1 --log-path logs/job.log

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use daylog::diagnostics::{report, Severity};
use daylog::io::LossyLines;
use daylog::{LogLevel, LogOptions, Logger};

/// Leveled, color-coded logging to the console and a daily log file
#[derive(Parser)]
#[command(name = "daylog")]
#[command(version)]
#[command(about = "Append timestamped, leveled messages to a log file and the console", long_about = None)]
struct Cli {
	/// Messages to log (read from stdin, one per line, when omitted)
	messages: Vec<String>,

	/// Severity: info, success, warning, error or debug
	#[arg(short, long, default_value = "info")]
	level: LogLevel,

	/// Log file path (defaults to ./PowerShell-<today>.log)
	#[arg(short = 'p', long)]
	log_path: Option<PathBuf>,

	/// Indent level, two spaces each (0-10)
	#[arg(short, long, default_value_t = 0)]
	indent: u8,

	/// Write to the log file only
	#[arg(short = 'q', long)]
	no_console: bool,
}

impl Cli {
	fn options(&self) -> LogOptions {
		LogOptions {
			level: self.level,
			log_path: self.log_path.clone(),
			indent: self.indent,
			suppress_console: self.no_console,
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	let options = cli.options();
	let mut logger = Logger::stdio();

	let mut read_failed = false;
	let result = if cli.messages.is_empty() {
		let mut lines = LossyLines::new(io::stdin().lock());
		let result = logger.log_all(&mut lines, &options);
		if let Some(e) = lines.error {
			report(&mut io::stderr(), Severity::Error, &format!("Failed to read stdin: {}", e));
			read_failed = true;
		}
		result
	} else {
		logger.log_all(&cli.messages, &options)
	};

	match result {
		Ok(batch) if batch.rejected == 0 && !read_failed => ExitCode::SUCCESS,
		Ok(_) => ExitCode::FAILURE,
		Err(e) => {
			report(&mut io::stderr(), Severity::Error, &e.to_string());
			ExitCode::from(2)
		}
	}
}
