use flexi_logger::{opt_format, FlexiLoggerError, Logger, LoggerHandle};

/// Start stderr logging. `RUST_LOG` wins over the verbosity count.
/// Keep the returned handle alive for as long as logs should flow.
pub fn init(verbosity: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(opt_format)
        .start()
}
