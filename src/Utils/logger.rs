use log::info;
use simplelog::*;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Log levels accepted by [`init_logger`], parsed from lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    #[strum(to_string = "off", serialize = "none")]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoggerError {
    UnknownLevel(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggerError::UnknownLevel(level) => write!(
                f,
                "loglevel must be off, none, error, warn, info, debug or trace, got {}",
                level
            ),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Parses an optional level string, `None` means `info`.
pub fn parse_loglevel(loglevel: Option<&str>) -> Result<LevelFilter, LoggerError> {
    match loglevel {
        None => Ok(LevelFilter::Info),
        Some(level) => LogLevel::from_str(&level.trim().to_lowercase())
            .map(LogLevel::to_filter)
            .map_err(|_| LoggerError::UnknownLevel(level.to_string())),
    }
}

/// Sets up terminal logging. `"off"` and `"none"` leave logging disabled.
/// A logger that is already installed stays in place; the parsed level is returned either way.
pub fn init_logger(loglevel: Option<&str>) -> Result<LevelFilter, LoggerError> {
    let log_option = parse_loglevel(loglevel)?;
    if log_option == LevelFilter::Off {
        return Ok(log_option);
    }
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => {
            info!("logging started with loglevel: {}", log_option);
            Ok(log_option)
        }
        Err(_) => Ok(log_option),
    }
}
