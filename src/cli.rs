use clap::{
    Parser,
    ValueEnum,
};

/// Builds a sample tree of files and directories, displays it and reports its
/// total size.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Level of diagnostics written to stderr
    #[arg(long, value_enum, default_value_t)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub const fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            Self::Debug => Some(tracing::Level::DEBUG),
            Self::Info => Some(tracing::Level::INFO),
            Self::Warn => Some(tracing::Level::WARN),
            Self::Error => Some(tracing::Level::ERROR),
            Self::Silent => None,
        }
    }
}
