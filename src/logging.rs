use log::LevelFilter::*;

#[cfg(test)]
static LOGGING_INITIALIZED: std::sync::Mutex<bool> = std::sync::Mutex::new(false);

/// Sends log records to stderr. Messages at `Info` are printed as they are, the rest get
/// a level prefix and their target.
pub fn init_logging(verbosity: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    #[cfg(test)]
    {
        let mut lock = match LOGGING_INITIALIZED.lock() {
            Ok(lock) => lock,
            Err(poisoned) => poisoned.into_inner(),
        };

        if *lock {
            return Ok(());
        }

        *lock = true;
    }

    fern::Dispatch::new()
        .level(verbosity)
        .format(|out, message, record| {
            if record.level() >= Trace {
                out.finish(format_args!("[TRACE] {}: {}", record.target(), message))
            } else if record.level() >= Debug {
                out.finish(format_args!("[DEBUG] {}: {}", record.target(), message))
            } else if record.level() <= Warn {
                out.finish(format_args!("[{}] {}: {}", record.level(), record.target(), message))
            } else {
                out.finish(format_args!("{}", message))
            }
        })
        .chain(std::io::stderr())
        .apply()
}
