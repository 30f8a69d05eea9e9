// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

use crate::GlobalOption;

/// How the `pad` binary logs. Logs always go to stderr so they never mix with the padded
/// output on stdout.
///
/// Like the other configuration types, anything that converts [`Into<LoggingConfig>`]
/// can be handed to [`try_initialize_logging`]:
///
/// ```
/// use padcmd::LoggingConfig;
/// use tracing_core::LevelFilter;
///
/// let config_1: LoggingConfig = LevelFilter::TRACE.into();
/// assert!(config_1.enabled);
///
/// let config_2 = LoggingConfig::default();
/// assert!(!config_2.enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level_filter: LevelFilter,
    pub enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            enabled: false,
        }
    }
}

pub mod logging_config_options {
    use super::*;

    impl From<LevelFilter> for LoggingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                enabled: true,
            }
        }
    }

    impl From<&GlobalOption> for LoggingConfig {
        fn from(global_option: &GlobalOption) -> Self {
            Self {
                level_filter: global_option.log_level.into(),
                enabled: global_option.enable_logging,
            }
        }
    }
}

pub mod logging_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum LoggingErrorCouldNot {
        #[error("📜 Could not install the global tracing subscriber: {reason}")]
        #[diagnostic(
            code(padcmd::logging),
            help("A global subscriber can only be installed once per process")
        )]
        InstallSubscriber { reason: String },
    }
}
use logging_error::LoggingErrorCouldNot;

/// Installs a global `fmt` subscriber writing to stderr, if logging is enabled. Does
/// nothing otherwise.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_initialize_logging(arg_config: impl Into<LoggingConfig>) -> miette::Result<()> {
    let config: LoggingConfig = arg_config.into();
    if !config.enabled {
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.level_filter)
        .with_target(false)
        .try_init()
        .map_err(|error| LoggingErrorCouldNot::InstallSubscriber {
            reason: error.to_string(),
        })?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📜 Logging initialized",
        level_filter = %config.level_filter
    );

    Ok(())
}
