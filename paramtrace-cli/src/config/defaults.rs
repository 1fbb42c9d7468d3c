//! Default configuration values - single source of truth

use paramtrace::LineEnding;

/// Rows per `INSERT ... VALUES` batch
pub const BATCH_SIZE: usize = 1000;

/// Line terminator
pub const LINE_ENDING: LineEnding = LineEnding::Lf;

/// Whether to wrap the script in `--SQL` / `--END SQL` marker lines
pub const MARKERS: bool = false;

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "paramtrace";

/// Prefix of environment variable overrides (`PARAMTRACE_*`)
pub const ENV_PREFIX: &str = "PARAMTRACE";
