// ══════════════════════════════════════════════════════════════════════════════
// OPTIONS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Per-call configuration of the logger. Every field has a default, so the
// common case is `LogOptions::default()` plus one or two setters.

use std::path::PathBuf;
use crate::constants::MAX_INDENT;
use crate::error::{IoFailure, LogError};
use crate::io::default_log_path;
use crate::level::LogLevel;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
	pub level: LogLevel,
	/// Falls back to the per-day file in the working directory when unset.
	pub log_path: Option<PathBuf>,
	pub indent: u8,
	pub suppress_console: bool,
}

impl LogOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn level(mut self, level: LogLevel) -> Self {
		self.level = level;
		self
	}

	pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.log_path = Some(path.into());
		self
	}

	pub fn indent(mut self, indent: u8) -> Self {
		self.indent = indent;
		self
	}

	pub fn suppress_console(mut self, suppress: bool) -> Self {
		self.suppress_console = suppress;
		self
	}

	pub fn validate(&self) -> Result<(), LogError> {
		if self.indent > MAX_INDENT {
			return Err(LogError::IndentOutOfRange(self.indent));
		}
		Ok(())
	}

	/// The explicit path, or today's file in the working directory.
	pub fn resolve_path(&self) -> Result<PathBuf, IoFailure> {
		match &self.log_path {
			Some(path) => Ok(path.clone()),
			None => default_log_path(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let options = LogOptions::default();
		assert_eq!(options.level, LogLevel::Info);
		assert_eq!(options.log_path, None);
		assert_eq!(options.indent, 0);
		assert!(!options.suppress_console);
	}

	#[test]
	fn indent_range_is_inclusive() {
		for indent in 0..=MAX_INDENT {
			assert!(LogOptions::new().indent(indent).validate().is_ok());
		}
		for indent in [MAX_INDENT + 1, 42, u8::MAX] {
			let err = LogOptions::new().indent(indent).validate().unwrap_err();
			assert!(matches!(err, LogError::IndentOutOfRange(v) if v == indent));
		}
	}

	#[test]
	fn explicit_path_wins() {
		let options = LogOptions::new().log_path("logs/custom.log");
		assert_eq!(options.resolve_path().unwrap(), PathBuf::from("logs/custom.log"));
	}

	#[test]
	fn missing_path_falls_back_to_the_daily_file() {
		let path = LogOptions::new().resolve_path().unwrap();
		let name = path.file_name().unwrap().to_str().unwrap();
		assert!(name.starts_with("PowerShell-") && name.ends_with(".log"), "{name}");
	}
}
