// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Writes timestamped, leveled entries to an append-only file and, unless
// suppressed, to the console in the level's color.
//
// Per entry:
//   1. Make sure the log directory exists (failure: warn, skip this entry)
//   2. Append the line to the file (failure: warn, keep going)
//   3. Print the colored line to the console
//
// Only validation problems are returned to the caller. Everything that goes
// wrong during I/O is reported on the diagnostics channel instead.

use std::io::{self, Stderr, Stdout, Write};
use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDateTime};
use colored::*;
use crate::diagnostics::{report, Severity};
use crate::entry::LogEntry;
use crate::error::{IoFailure, LogError};
use crate::io::{append_line, ensure_directory, fallback_log_path};
use crate::level::LogLevel;
use crate::options::LogOptions;

/// What a single call actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogReport {
	pub directory_created: bool,
	pub file_written: bool,
	pub console_written: bool,
}

/// Outcome of logging a sequence of messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
	/// One report per accepted message, in arrival order.
	pub entries: Vec<LogReport>,
	pub rejected: usize,
}

impl BatchReport {
	pub fn files_written(&self) -> usize {
		self.entries.iter().filter(|r| r.file_written).count()
	}
}

pub struct Logger<C = Stdout, D = Stderr> {
	console: C,
	diagnostics: D,
}

impl Logger {
	pub fn stdio() -> Self {
		Logger::new(io::stdout(), io::stderr())
	}
}

impl Default for Logger {
	fn default() -> Self {
		Logger::stdio()
	}
}

impl<C: Write, D: Write> Logger<C, D> {
	pub fn new(console: C, diagnostics: D) -> Self {
		Self { console, diagnostics }
	}

	pub fn into_parts(self) -> (C, D) {
		(self.console, self.diagnostics)
	}

	/// Logs one message stamped with the current local time.
	pub fn log(&mut self, message: &str, options: &LogOptions) -> Result<LogReport, LogError> {
		self.log_at(message, options, Local::now().naive_local())
	}

	pub fn log_at(
		&mut self,
		message: &str,
		options: &LogOptions,
		timestamp: NaiveDateTime,
	) -> Result<LogReport, LogError> {
		options.validate()?;
		validate_message(message)?;

		let path = self.resolve_path(options);
		Ok(self.emit(&path, message, options, timestamp))
	}

	/// Logs every message in order. The options are checked and the log path
	/// resolved once for the whole sequence; an empty message is reported and
	/// skipped without stopping the rest.
	pub fn log_all<I, S>(&mut self, messages: I, options: &LogOptions) -> Result<BatchReport, LogError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		options.validate()?;

		let path = self.resolve_path(options);
		let mut batch = BatchReport::default();

		for message in messages {
			let message = message.as_ref();
			if let Err(e) = validate_message(message) {
				report(&mut self.diagnostics, Severity::Error, &e.to_string());
				batch.rejected += 1;
				continue;
			}

			let timestamp = Local::now().naive_local();
			batch.entries.push(self.emit(&path, message, options, timestamp));
		}

		Ok(batch)
	}

	fn resolve_path(&mut self, options: &LogOptions) -> PathBuf {
		self.path_or_fallback(options.resolve_path())
	}

	fn path_or_fallback(&mut self, resolved: Result<PathBuf, IoFailure>) -> PathBuf {
		resolved.unwrap_or_else(|e| {
			report(&mut self.diagnostics, Severity::Warning, &e.to_string());
			fallback_log_path()
		})
	}

	fn emit(&mut self, path: &Path, message: &str, options: &LogOptions, timestamp: NaiveDateTime) -> LogReport {
		let mut outcome = LogReport::default();

		match ensure_directory(path) {
			Ok(created) => outcome.directory_created = created,
			Err(e) => {
				report(&mut self.diagnostics, Severity::Warning, &e.to_string());
				return outcome;
			}
		}

		let line = LogEntry::new(timestamp, options.level, options.indent, message).to_string();

		match append_line(path, &line) {
			Ok(()) => outcome.file_written = true,
			Err(e) => report(&mut self.diagnostics, Severity::Warning, &e.to_string()),
		}

		if !options.suppress_console {
			match self.print(&line, options.level) {
				Ok(()) => outcome.console_written = true,
				Err(e) => report(&mut self.diagnostics, Severity::Error, &format!("Console write failed: {}", e)),
			}
		}

		outcome
	}

	fn print(&mut self, line: &str, level: LogLevel) -> io::Result<()> {
		writeln!(self.console, "{}", line.color(level.color()))?;
		self.console.flush()
	}
}

fn validate_message(message: &str) -> Result<(), LogError> {
	if message.is_empty() {
		return Err(LogError::EmptyMessage);
	}
	Ok(())
}
