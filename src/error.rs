// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Two tiers of failure. `LogError` covers validation and is raised before any
// I/O happens. `IoFailure` covers the directory and file stages; the logger
// turns those into warnings on the diagnostics channel instead of returning them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use crate::constants::MAX_INDENT;

#[derive(Debug, Error)]
pub enum LogError {
	#[error("Indent level {0} is out of range (0..={max}).", max = MAX_INDENT)]
	IndentOutOfRange(u8),

	#[error("Unknown log level '{0}'. Expected one of: Info, Success, Warning, Error, Debug.")]
	UnknownLevel(String),

	#[error("Refusing to log an empty message.")]
	EmptyMessage,
}

#[derive(Debug, Error)]
pub enum IoFailure {
	#[error("Cannot create log directory '{}': {source}", .path.display())]
	CreateDirectory { path: PathBuf, source: io::Error },

	#[error("Cannot append to log file '{}': {source}", .path.display())]
	Append { path: PathBuf, source: io::Error },

	#[error("Cannot determine the working directory, logging next to the process instead: {source}")]
	WorkingDirectory { source: io::Error },
}
