//! Error types for sqlbind

use thiserror::Error;

/// Errors raised while parsing a command template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The template contains no placeholder recognisable with the active delimiters.
    #[error(
        "no bind variable found with the current delimiters; check that the delimiters are \
         escaped correctly and that the template uses at least one placeholder: {template}"
    )]
    NoPlaceholdersFound { template: String },

    /// The delimiters do not form a valid regular expression.
    #[error("invalid delimiter pattern `{pattern}`: {reason}")]
    InvalidDelimiterPattern { pattern: String, reason: String },
}

/// Errors raised when assigning a value to a placeholder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("bind variable [{name}] not found; most likely a typo or incorrect delimiters")]
    UnknownPlaceholder { name: String },
}

/// Errors raised when assembling the ordered bind sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// Every listed placeholder is still waiting for a value.
    #[error("no value assigned for bind variables [{}]", .names.join(", "))]
    MissingAssignments { names: Vec<String> },
}

/// Errors raised while loading a [`crate::BindConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised by [`crate::NamedStatement::execute`].
///
/// Failures of the underlying statement are carried unchanged in `Statement`.
#[derive(Debug, Error)]
pub enum ExecuteError<E> {
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    #[error("statement execution failed: {0}")]
    Statement(#[source] E),
}

/// Umbrella error for callers that want to `?` across every stage.
#[derive(Debug, Error)]
pub enum BindError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Assign(#[from] AssignError),

    #[error(transparent)]
    Assemble(#[from] AssembleError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for sqlbind operations
pub type Result<T> = std::result::Result<T, BindError>;
