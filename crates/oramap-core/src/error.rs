//! Error types for oramap operations.

use std::fmt;

/// The primary error type for all oramap operations.
#[derive(Debug)]
pub enum Error {
    /// Schema metadata errors (missing table name)
    Schema(SchemaError),
    /// Key-field set and field-list validation errors
    Validation(ValidationError),
    /// Free-text WHERE clause rejected by the denylist guard
    Filter(FilterError),
    /// Backend failure during execute/fetch
    Execution(ExecutionError),
    /// Operation attempted after explicit teardown
    NotConnected,
}

/// A model's schema metadata is unusable for query generation.
#[derive(Debug)]
pub struct SchemaError {
    /// The model the schema describes
    pub model: &'static str,
    pub message: String,
}

impl SchemaError {
    /// The schema declares no table name.
    pub fn missing_table(model: &'static str) -> Self {
        Self {
            model,
            message: format!("model {model} does not declare a table name"),
        }
    }
}

/// A caller-supplied field set failed validation.
///
/// Validation errors are raised before any backend round-trip.
#[derive(Debug)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The key-field set ("using") is empty
    EmptyUsing,
    /// A key field is not declared by the schema
    UnknownField,
    /// Excluding the key fields leaves nothing to update
    NothingToUpdate,
}

impl ValidationError {
    pub fn empty_using() -> Self {
        Self {
            kind: ValidationErrorKind::EmptyUsing,
            message: "no fields specified in 'using'".to_string(),
        }
    }

    pub fn unknown_field(field: &str, model: &'static str) -> Self {
        Self {
            kind: ValidationErrorKind::UnknownField,
            message: format!("the field '{field}' does not exist in the model {model}"),
        }
    }

    pub fn nothing_to_update() -> Self {
        Self {
            kind: ValidationErrorKind::NothingToUpdate,
            message: "no fields to update after excluding 'using' fields".to_string(),
        }
    }
}

/// A free-text WHERE clause matched a denylisted substring.
#[derive(Debug)]
pub struct FilterError {
    /// The denylist entry that matched
    pub token: &'static str,
    /// The rejected clause, verbatim
    pub clause: String,
}

/// The backend raised during execute or fetch.
///
/// The active scope has already been rolled back by the execution
/// collaborator when this error surfaces; it is propagated unchanged.
#[derive(Debug)]
pub struct ExecutionError {
    /// The SQL that was being executed, if known
    pub sql: Option<String>,
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            sql: None,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the SQL text that triggered the failure.
    #[must_use]
    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }
}

impl Error {
    /// Get the SQL that caused this error, if available.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Error::Execution(e) => e.sql.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Schema(e) => write!(f, "Schema error: {}", e.message),
            Error::Validation(e) => write!(f, "Validation error: {}", e.message),
            Error::Filter(e) => write!(f, "Invalid WHERE clause: {}", e),
            Error::Execution(e) => write!(f, "Execution error: {}", e.message),
            Error::NotConnected => write!(f, "connection has been cleaned up"),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clause contains denylisted '{}': {}", self.token, self.clause)
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sql) = &self.sql {
            write!(f, "{} (while executing: {})", self.message, sql)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Execution(e) => e
                .source
                .as_deref()
                .map(|err| err as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

impl From<SchemaError> for Error {
    fn from(err: SchemaError) -> Self {
        Error::Schema(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<FilterError> for Error {
    fn from(err: FilterError) -> Self {
        Error::Filter(err)
    }
}

impl From<ExecutionError> for Error {
    fn from(err: ExecutionError) -> Self {
        Error::Execution(err)
    }
}

/// Result type alias for oramap operations.
pub type Result<T> = std::result::Result<T, Error>;
