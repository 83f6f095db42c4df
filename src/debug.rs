//! Debug logging bridge for text-converter.
//!
//! Routes every `log::info!()` / `log::debug!()` etc. from all workspace
//! crates to a log file, so diagnostics never mix with converted text on
//! stdout:
//!
//! - Unix/macOS: `$TMPDIR/text_converter_debug.log` (usually `/tmp`)
//! - Windows: `%TEMP%\text_converter_debug.log`
//!
//! The file is truncated at the start of every run. When `RUST_LOG` is set,
//! records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG` (a bare level such
//! as `debug`), then the config file's `log_level`.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};
use text_converter_config::LogLevel;

/// Path of the debug log file.
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("text_converter_debug.log")
}

/// Pick the effective level and whether to mirror records to stderr.
///
/// `rust_log` is the raw value of the `RUST_LOG` environment variable. Only
/// bare level names are understood; anything else falls through to the
/// config level.
pub fn resolve_log_level(
    cli_level: Option<LevelFilter>,
    rust_log: Option<&str>,
    config_level: LogLevel,
) -> (LevelFilter, bool) {
    let mirror_stderr = rust_log.is_some();
    let level = cli_level
        .or_else(|| {
            rust_log
                .and_then(|value| value.parse::<LogLevel>().ok())
                .map(LogLevel::to_level_filter)
        })
        .unwrap_or_else(|| config_level.to_level_filter());
    (level, mirror_stderr)
}

/// `log::Log` implementation writing to the debug file.
struct DebugLogger {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl DebugLogger {
    fn new(level: LevelFilter, mirror_stderr: bool) -> Self {
        let file = match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_file_path())
        {
            Ok(mut f) => {
                let _ = writeln!(
                    f,
                    "{}\ntext-converter debug session started at {} (level={})\n{}",
                    "=".repeat(80),
                    get_timestamp(),
                    level,
                    "=".repeat(80)
                );
                Some(f)
            }
            // Without a log file only the stderr mirror (if any) remains.
            Err(_) => None,
        };

        DebugLogger {
            level,
            file: Mutex::new(file),
            mirror_stderr,
        }
    }
}

impl Log for DebugLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<DebugLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Install the log bridge.
///
/// Returns `false` when logging stays off, either because `level` is
/// [`LevelFilter::Off`] or because a logger was already installed.
pub fn init_log_bridge(level: LevelFilter, mirror_stderr: bool) -> bool {
    if level == LevelFilter::Off {
        log::set_max_level(LevelFilter::Off);
        return false;
    }

    let logger = LOGGER.get_or_init(|| DebugLogger::new(level, mirror_stderr));
    if log::set_logger(logger).is_err() {
        return false;
    }
    log::set_max_level(level);
    true
}
