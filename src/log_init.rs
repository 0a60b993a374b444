use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

struct HarvestLogger {
    level: LevelFilter,
    file_path: Option<PathBuf>,
}

impl log::Log for HarvestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match &self.file_path {
            Some(path) => {
                if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                    let _ = writeln!(file, "[{}] {}", record.level(), record.args());
                }
            }
            None => {
                let _ = writeln!(
                    std::io::stderr().lock(),
                    "[{}] {}",
                    record.level(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the process logger: stderr by default, appending to `file_path`
/// when one is given.
pub fn init_logger(
    level: LevelFilter,
    file_path: Option<&Path>,
) -> Result<(), log::SetLoggerError> {
    let logger = HarvestLogger {
        level,
        file_path: file_path.map(Path::to_path_buf),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
