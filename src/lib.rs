// ══════════════════════════════════════════════════════════════════════════════
//                                   DAYLOG
//                    Leveled console + append-only file logger
// ══════════════════════════════════════════════════════════════════════════════
//
// Every message becomes one line, written to a log file and echoed to the
// console in a color that matches its level:
//
//   [2025-01-20 14:30:16] [SUCCESS] Database backup completed
//   [2025-01-20 14:30:17] [WARNING]   Config missing
//
// Without an explicit path, entries go to `PowerShell-<YYYY-MM-DD>.log` in the
// working directory, so each calendar day gets its own file.
//
// Failures while writing never reach the caller. A missing directory is
// created on demand; if that fails, or the file can't be appended to, a
// warning goes to stderr and the logger carries on.

pub mod constants;
pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod io;
pub mod level;
pub mod logger;
pub mod options;

pub use entry::LogEntry;
pub use error::{IoFailure, LogError};
pub use level::LogLevel;
pub use logger::{BatchReport, LogReport, Logger};
pub use options::LogOptions;
