use thiserror::Error;

use crate::time_value::ParseTimeError;

/// Library error type for config parsing and persistence.
///
/// The first failure encountered during a parse aborts it; errors are never
/// accumulated. Variants carry the offending line or value so callers can
/// render a message without re-reading the input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be opened, read, or written.
    #[error("failed to access config file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A `time` directive line carried no argument.
    #[error("no argument was found to time in line {line:?}")]
    MissingTimeArgument { line: String },

    /// A `time` argument did not match the duration grammar.
    #[error(transparent)]
    InvalidTimeFormat(#[from] ParseTimeError),

    /// A `time` argument parsed but resolved to zero seconds.
    #[error("time must be greater than 0")]
    NonPositiveTime,

    /// The input never contained a `files` line.
    #[error("no files section found")]
    NoFilesSection,

    /// A `files` section was present but every following line was empty.
    #[error("no files listed")]
    NoFilesListed,
}
