use pumpkin_config::logging::{LevelFilter as ConfigLevelFilter, LoggingConfig};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

pub mod entity;
pub mod error;
pub mod server;

pub use error::ServerError;
pub use server::Server;

/// Installs the terminal logger described by `config`. Does nothing when logging is disabled.
pub fn init_log(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    if !config.enabled {
        return Ok(());
    }

    let mut builder = ConfigBuilder::new();
    if !config.timestamp {
        builder.set_time_level(LevelFilter::Off);
    }
    if config.threads {
        builder.set_thread_level(LevelFilter::Error);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }

    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    TermLogger::init(
        convert_logger_filter(config.level),
        builder.build(),
        TerminalMode::Mixed,
        color,
    )
}

const fn convert_logger_filter(level: ConfigLevelFilter) -> LevelFilter {
    match level {
        ConfigLevelFilter::Off => LevelFilter::Off,
        ConfigLevelFilter::Error => LevelFilter::Error,
        ConfigLevelFilter::Warn => LevelFilter::Warn,
        ConfigLevelFilter::Info => LevelFilter::Info,
        ConfigLevelFilter::Debug => LevelFilter::Debug,
        ConfigLevelFilter::Trace => LevelFilter::Trace,
    }
}
