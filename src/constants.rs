// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines application-wide constants used throughout the codebase.
// - INDENT_UNIT: Whitespace emitted per indent level
// - MAX_INDENT: Highest accepted indent level
// - TIMESTAMP_FORMAT: Entry timestamp, second resolution
// - DEFAULT_LOG_PREFIX: File name stem of the per-day default log file

pub const INDENT_UNIT: &str = "  ";

pub const MAX_INDENT: u8 = 10;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_LOG_PREFIX: &str = "PowerShell";

pub const LOG_EXTENSION: &str = "log";
