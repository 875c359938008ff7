use std::path::PathBuf;

use thiserror::Error;

/// A day-month string that can not be turned into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum DateFormatError {
    #[error("{0} does not match the day-month pattern")]
    Pattern(String),
    #[error("{0} is not a valid calendar day")]
    Calendar(String),
}

/// The first problem found in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum Violation {
    #[error("config.yml is not a valid yaml document: {0}")]
    Syntax(String),
    #[error("config.yml must be a mapping from theme names to their settings")]
    NotATable,
    #[error("config.yml must have a \"default\" section")]
    MissingDefault,
    #[error("the \"default\" section must contain only the \"dir\" key")]
    MalformedDefault,
    #[error("{0} is not a valid theme name")]
    InvalidName(String),
    #[error("theme '{season}' must be a mapping with the keys from, to and dir")]
    NotAnEntry { season: String },
    #[error("theme '{season}' must contain exactly the keys from, to and dir")]
    WrongKeys { season: String },
    #[error("theme '{season}': {key} is an unknown keyword")]
    UnknownKey { season: String, key: String },
    #[error("theme '{season}': {message}")]
    InvalidValue { season: String, message: String },
    #[error("theme '{season}': {} is not a directory", .path.display())]
    NotADirectory { season: String, path: PathBuf },
    #[error("theme '{season}': {source}")]
    InvalidDate {
        season: String,
        #[source]
        source: DateFormatError,
    },
}

/// The configuration directory or file is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum MissingEnvironment {
    #[error("unable to locate the home directory")]
    Home,
    #[error("missing configuration directory [{}]", .0.display())]
    Directory(PathBuf),
    #[error("missing configuration file [{}]", .0.display())]
    File(PathBuf),
}
