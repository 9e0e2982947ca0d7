// ══════════════════════════════════════════════════════════════════════════════
// ENTRY MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// A single formatted log line. Entries live only for the duration of one call:
// they are built, rendered once, written, and dropped.
//
//   [2025-01-20 14:30:16] [SUCCESS] Database backup completed
//   [2025-01-20 14:30:17] [WARNING]   Config missing

use std::fmt;
use chrono::NaiveDateTime;
use crate::constants::{INDENT_UNIT, TIMESTAMP_FORMAT};
use crate::level::LogLevel;

pub struct LogEntry<'a> {
	pub timestamp: NaiveDateTime,
	pub level: LogLevel,
	pub indent: u8,
	pub message: &'a str,
}

impl<'a> LogEntry<'a> {
	pub fn new(timestamp: NaiveDateTime, level: LogLevel, indent: u8, message: &'a str) -> Self {
		Self { timestamp, level, indent, message }
	}

	/// Leading whitespace for the message, two spaces per indent level.
	pub fn indentation(&self) -> String {
		INDENT_UNIT.repeat(self.indent as usize)
	}
}

impl fmt::Display for LogEntry<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"[{}] [{}] {}{}",
			self.timestamp.format(TIMESTAMP_FORMAT),
			self.level.label(),
			self.indentation(),
			self.message
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2025, 1, 20).unwrap().and_hms_opt(h, m, s).unwrap()
	}

	#[test]
	fn renders_success_without_indent() {
		let entry = LogEntry::new(at(14, 30, 16), LogLevel::Success, 0, "Database backup completed");
		assert_eq!(entry.to_string(), "[2025-01-20 14:30:16] [SUCCESS] Database backup completed");
	}

	#[test]
	fn renders_warning_with_one_indent() {
		let entry = LogEntry::new(at(9, 5, 3), LogLevel::Warning, 1, "Config missing");
		assert_eq!(entry.to_string(), "[2025-01-20 09:05:03] [WARNING]   Config missing");
	}

	#[test]
	fn indent_is_two_spaces_per_level() {
		for indent in 0..=10u8 {
			let entry = LogEntry::new(at(0, 0, 0), LogLevel::Info, indent, "x");
			assert_eq!(entry.indentation().len(), 2 * indent as usize);

			let line = entry.to_string();
			let body = line.strip_prefix("[2025-01-20 00:00:00] [INFO   ] ").unwrap();
			assert_eq!(body.len() - body.trim_start().len(), 2 * indent as usize);
		}
	}

	#[test]
	fn drops_sub_second_precision() {
		let stamp = at(14, 30, 16) + chrono::Duration::milliseconds(999);
		let entry = LogEntry::new(stamp, LogLevel::Debug, 0, "tick");
		assert_eq!(entry.to_string(), "[2025-01-20 14:30:16] [DEBUG  ] tick");
	}

	#[test]
	fn message_is_written_verbatim() {
		let entry = LogEntry::new(at(1, 2, 3), LogLevel::Error, 0, "100% {done} \"quoted\" ✔");
		assert!(entry.to_string().ends_with("] 100% {done} \"quoted\" ✔"));
	}
}
