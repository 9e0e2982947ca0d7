// ══════════════════════════════════════════════════════════════════════════════
// DIAGNOSTICS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The logger's own warnings and errors. Kept apart from the log file and the
// console stream so a failing write never ends up inside the log it concerns.

use std::io::Write;
use chrono::Local;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Warning,
	Error,
}

pub fn report<W: Write>(out: &mut W, severity: Severity, message: &str) {
	let timestamp = Local::now().format("%H:%M:%S").to_string();
	let prefix = match severity {
		Severity::Warning => "⚠ ".yellow().bold(),
		Severity::Error => "✘ ".red().bold(),
	};

	// Nowhere left to report to if this fails.
	let _ = writeln!(out, "[{}] {} {}", timestamp.dimmed(), prefix, message);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn one_line_per_report() {
		let mut out = Vec::new();
		report(&mut out, Severity::Warning, "disk full");
		report(&mut out, Severity::Error, "console gone");

		let text = String::from_utf8(out).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 2);
		assert!(lines[0].contains('⚠') && lines[0].ends_with("disk full"));
		assert!(lines[1].contains('✘') && lines[1].ends_with("console gone"));
	}
}
