use std::{
    io::Write as _,
    sync::{OnceLock, PoisonError, RwLock},
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub fn get_logger() -> &'static StderrLogger {
    LOGGER.get_or_init(|| StderrLogger::new(LevelFilter::Warn))
}

/// Installs the logger, further records below `level` are dropped.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Writes log records to stderr, so they don't mix with the maze on stdout.
pub struct StderrLogger {
    min_level: RwLock<LevelFilter>,
}

impl StderrLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "[{} {}] {}",
        record.level(),
        record.module_path().unwrap_or("unknown"),
        record.args()
    )
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere to report a failed write to stderr
            let _ = writeln!(std::io::stderr().lock(), "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
