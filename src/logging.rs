use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for the line-oriented CLI.
    Stderr,
    /// A timestamped file in the per-user data directory. The TUI owns the
    /// terminal, so anything written to stderr would corrupt the screen.
    File,
}

/// Maps the number of `-v` flags to a level filter.
#[must_use]
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Directory that holds log files, e.g. `~/.local/share/word-scramble/logs`.
#[must_use]
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("word-scramble").join("logs"))
}

/// Initialize the global logger.
///
/// `RUST_LOG` takes precedence over `verbosity`. Returns the path of the log
/// file when logging to a file. Calling this twice is harmless; the second
/// logger is discarded.
pub fn init_logging(verbosity: u8, target: LogTarget) -> io::Result<Option<PathBuf>> {
    let default_filter = level_for_verbosity(verbosity).to_string().to_lowercase();
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let log_path = match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
            None
        }
        LogTarget::File => {
            let Some(dir) = log_dir() else {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no data directory available for log files",
                ));
            };
            fs::create_dir_all(&dir)?;
            let path = dir.join(format!(
                "word-scramble-{}.log",
                Local::now().format("%Y%m%d-%H%M%S")
            ));
            let file = File::create(&path)?;
            builder.target(Target::Pipe(Box::new(file)));
            Some(path)
        }
    };

    if builder.try_init().is_err() {
        log::debug!("logger already initialized, keeping the existing one");
    }
    Ok(log_path)
}
