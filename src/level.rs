// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Severity levels of a log entry. Each level carries the fixed-width label that
// goes into the bracketed column and the foreground color used on the console.

use std::fmt;
use std::str::FromStr;
use colored::Color;
use crate::error::LogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
	#[default]
	Info,
	Success,
	Warning,
	Error,
	Debug,
}

impl LogLevel {
	pub const ALL: [LogLevel; 5] = [
		LogLevel::Info,
		LogLevel::Success,
		LogLevel::Warning,
		LogLevel::Error,
		LogLevel::Debug,
	];

	/// Label padded to the width of the longest one, so the column lines up.
	pub fn label(self) -> &'static str {
		match self {
			LogLevel::Info => "INFO   ",
			LogLevel::Success => "SUCCESS",
			LogLevel::Warning => "WARNING",
			LogLevel::Error => "ERROR  ",
			LogLevel::Debug => "DEBUG  ",
		}
	}

	pub fn color(self) -> Color {
		match self {
			LogLevel::Info => Color::Cyan,
			LogLevel::Success => Color::Green,
			LogLevel::Warning => Color::Yellow,
			LogLevel::Error => Color::Red,
			LogLevel::Debug => Color::Magenta,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			LogLevel::Info => "Info",
			LogLevel::Success => "Success",
			LogLevel::Warning => "Warning",
			LogLevel::Error => "Error",
			LogLevel::Debug => "Debug",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for LogLevel {
	type Err = LogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		LogLevel::ALL
			.into_iter()
			.find(|level| level.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| LogError::UnknownLevel(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_share_one_width() {
		let width = LogLevel::Info.label().chars().count();
		for level in LogLevel::ALL {
			assert_eq!(level.label().chars().count(), width, "{level}");
			assert_eq!(format!("[{}]", level.label()).chars().count(), 9);
		}
	}

	#[test]
	fn each_level_has_its_own_color() {
		assert_eq!(LogLevel::Info.color(), Color::Cyan);
		assert_eq!(LogLevel::Success.color(), Color::Green);
		assert_eq!(LogLevel::Warning.color(), Color::Yellow);
		assert_eq!(LogLevel::Error.color(), Color::Red);
		assert_eq!(LogLevel::Debug.color(), Color::Magenta);
	}

	#[test]
	fn parses_names_case_insensitively() {
		assert_eq!("success".parse::<LogLevel>().unwrap(), LogLevel::Success);
		assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
		assert_eq!(" Debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
	}

	#[test]
	fn rejects_unknown_names() {
		let err = "verbose".parse::<LogLevel>().unwrap_err();
		assert!(matches!(err, LogError::UnknownLevel(ref name) if name == "verbose"));
	}

	#[test]
	fn defaults_to_info() {
		assert_eq!(LogLevel::default(), LogLevel::Info);
	}
}
