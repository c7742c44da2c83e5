use std::any::Any;
use std::sync::Arc;

use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Matchers never fail for data-shaped reasons: a value that does not match is
/// reported through the mismatch description, not through this type. These
/// kinds classify the remaining failures (bad construction, failed assertions,
/// unusable input) with stable codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Construction
    InvalidInput,
    DuplicateMember,

    // Assertion entry points
    AssertionFailed,

    // Integration
    InvalidJson,
    Serialization,
    Interrupted,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::DuplicateMember => "ERR_DUPLICATE_MEMBER",
            ExErrorKind::AssertionFailed => "ERR_ASSERTION_FAILED",
            ExErrorKind::InvalidJson => "ERR_INVALID_JSON",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Interrupted => "ERR_INTERRUPTED",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus free-form
/// context (operation, member name, message) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    member: Option<String>,
    message: String,
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            member: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add member name context
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the library error this one was raised from
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the member name context, if any
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(member) = &self.member {
            write!(f, " (member: {})", member)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for matcher construction and input handling
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    /// A composite matcher already declares a member with this name
    #[error("Multiple entries with same key: {name}")]
    DuplicateMember { name: String },

    /// A literal used to build a matcher has the wrong shape
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Text that was expected to be JSON could not be parsed
    #[error("Invalid JSON: {reason}")]
    InvalidJson { reason: String },

    /// A value could not be converted into a JSON tree
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl From<MatchError> for ExError {
    fn from(err: MatchError) -> Self {
        let message = err.to_string();
        match err {
            MatchError::DuplicateMember { name } => ExError::new(ExErrorKind::DuplicateMember)
                .with_op("add_member")
                .with_member(name)
                .with_message(message),

            MatchError::InvalidInput { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            MatchError::InvalidJson { .. } => ExError::new(ExErrorKind::InvalidJson)
                .with_op("parse_json")
                .with_message(message),

            MatchError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Text of a caught panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}
