// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Filesystem side of the logger: resolving the default per-day log path,
// making sure the target directory exists, and appending a line in one write.
// Each stage returns its own Result so the caller decides how to degrade.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDate};
use crate::constants::{DATE_FORMAT, DEFAULT_LOG_PREFIX, LOG_EXTENSION};
use crate::error::IoFailure;

/// Default log file for today, in the current working directory.
pub fn default_log_path() -> Result<PathBuf, IoFailure> {
	let dir = std::env::current_dir().map_err(|source| IoFailure::WorkingDirectory { source })?;
	Ok(default_log_path_in(&dir, Local::now().date_naive()))
}

/// Today's file name alone, relative to wherever the process runs.
pub fn fallback_log_path() -> PathBuf {
	default_log_path_in(Path::new(""), Local::now().date_naive())
}

/// `<dir>/PowerShell-<YYYY-MM-DD>.log`
pub fn default_log_path_in(dir: &Path, date: NaiveDate) -> PathBuf {
	dir.join(format!(
		"{}-{}.{}",
		DEFAULT_LOG_PREFIX,
		date.format(DATE_FORMAT),
		LOG_EXTENSION
	))
}

/// Creates the parent directory of `path` (and any missing ancestors).
/// Returns whether anything had to be created.
pub fn ensure_directory(path: &Path) -> Result<bool, IoFailure> {
	let dir = match path.parent() {
		Some(dir) if !dir.as_os_str().is_empty() => dir,
		_ => return Ok(false),
	};

	if dir.is_dir() {
		return Ok(false);
	}

	fs::create_dir_all(dir).map_err(|source| IoFailure::CreateDirectory {
		path: dir.to_path_buf(),
		source,
	})?;
	Ok(true)
}

/// Appends `line` plus a newline to the file, creating it if needed.
pub fn append_line(path: &Path, line: &str) -> Result<(), IoFailure> {
	let failure = |source| IoFailure::Append { path: path.to_path_buf(), source };

	let mut file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(failure)?;

	// Single write so an entry is never split across two appends.
	let mut buffer = String::with_capacity(line.len() + 1);
	buffer.push_str(line);
	buffer.push('\n');
	file.write_all(buffer.as_bytes()).map_err(failure)
}

/// Line reader for piped input. Bytes that are not valid UTF-8 are replaced
/// rather than ending the stream. A read error stops iteration and is kept in
/// `error` for the caller to report.
pub struct LossyLines<R> {
	reader: R,
	buffer: Vec<u8>,
	pub error: Option<io::Error>,
}

impl<R: BufRead> LossyLines<R> {
	pub fn new(reader: R) -> Self {
		Self { reader, buffer: Vec::new(), error: None }
	}
}

impl<R: BufRead> Iterator for LossyLines<R> {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		if self.error.is_some() {
			return None;
		}

		self.buffer.clear();
		match self.reader.read_until(b'\n', &mut self.buffer) {
			Ok(0) => None,
			Ok(_) => {
				if self.buffer.last() == Some(&b'\n') {
					self.buffer.pop();
					if self.buffer.last() == Some(&b'\r') {
						self.buffer.pop();
					}
				}
				Some(String::from_utf8_lossy(&self.buffer).into_owned())
			}
			Err(e) => {
				self.error = Some(e);
				None
			}
		}
	}
}
