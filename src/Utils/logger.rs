use chrono::Local;
use simplelog::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Maps a loglevel name from a task file to a `LevelFilter`.
///
/// `off` and `none` disable logging entirely.
pub fn parse_loglevel(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_lowercase().as_str() {
        "off" | "none" => Ok(LevelFilter::Off),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        other => Err(format!(
            "loglevel must be off, none, debug, info, warn or error, got '{}'",
            other
        )),
    }
}

/// Timestamped log file name like `log_2024-05-01_12-30-00.txt` inside `dir`.
pub fn log_file_name(dir: &Path) -> PathBuf {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    dir.join(format!("log_{}.txt", date_and_time))
}

/// Initializes the global logger: a terminal logger and, if `log_file` is given,
/// a file logger with the same level.
///
/// Returns `Ok(false)` when logging is off or a global logger is already set, in which
/// case the existing logger keeps working.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<bool, String> {
    if level == LevelFilter::Off {
        return Ok(false);
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        let file = File::create(path)
            .map_err(|e| format!("cannot create log file {}: {}", path.display(), e))?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    Ok(CombinedLogger::init(loggers).is_ok())
}

/// Deletes `log_*.txt` files left in `dir` by earlier runs. Returns how many were removed.
pub fn delete_old_logs(dir: &str) -> std::io::Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_log = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with("log_") && name.ends_with(".txt"))
            .unwrap_or(false);
        if is_log && path.is_file() {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}
