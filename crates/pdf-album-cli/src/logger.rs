use chrono::Local;
use log::{Level, Metadata, Record};

/// Logger that writes timestamped records to stderr
pub struct CliLogger {
    max_level: Level,
}

impl CliLogger {
    pub fn new(verbose: bool) -> Self {
        Self {
            max_level: if verbose { Level::Debug } else { Level::Info },
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let filter = self.max_level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{} {:5} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
