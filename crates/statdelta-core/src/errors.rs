use thiserror::Error;

/// Result type alias using SnapshotError
pub type Result<T> = std::result::Result<T, SnapshotError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of every error
/// the engine can surface. Each kind maps to a stable error code that can be
/// used for programmatic error handling, testing, and collaborator responses.
///
/// Estimators never fail, so every kind here originates at a decode boundary
/// or in the collaborator-facing CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Wire decoding
    /// Snapshot bytes are not valid UTF-8 JSON, or the root is not an object
    InvalidSnapshot,
    /// The JSON object carries none of the marker keys of a known shape
    UnrecognizedShape,
    /// The upstream stats API answered with an error body instead of a snapshot
    UpstreamError,
    /// A job-points block could not be flattened into a job list
    InvalidJobPoints,

    // Input
    /// A CLI input is well-formed JSON but not the document a command expects
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::UnrecognizedShape => "ERR_UNRECOGNIZED_SHAPE",
            ExErrorKind::UpstreamError => "ERR_UPSTREAM_ERROR",
            ExErrorKind::InvalidJobPoints => "ERR_INVALID_JOB_POINTS",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    user_id: Option<u64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            user_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add user identity context
    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    /// Get the user identity context, if any
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.code(), self.kind)?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(user_id) = self.user_id {
            write!(f, " (user_id: {})", user_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised while turning wire bytes into a [`crate::model::Snapshot`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// Bytes are not valid JSON
    #[error("Snapshot is not valid JSON: {message}")]
    InvalidJson { message: String },

    /// JSON root is an array, string or scalar
    #[error("Snapshot JSON root must be an object")]
    NotAnObject,

    /// None of the marker keys (`strength`, `bars`, `error`) were present
    #[error("Unrecognized snapshot shape; top-level keys: {keys:?}")]
    UnrecognizedShape { keys: Vec<String> },

    /// The stats API returned an error object
    #[error("Unable to convert upstream error into a snapshot: {body}")]
    UpstreamError { body: String },

    /// A `jobpoints` entry had a non-integer balance
    #[error("Invalid job points for {job}: {message}")]
    InvalidJobPoints { job: String, message: String },

    /// Typed deserialization of a recognized shape failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from SnapshotError to ExError
impl From<SnapshotError> for ExError {
    fn from(err: SnapshotError) -> Self {
        match err {
            SnapshotError::InvalidJson { message } => ExError::new(ExErrorKind::InvalidSnapshot)
                .with_op("decode_snapshot")
                .with_message(format!("snapshot is not valid JSON: {}", message)),

            SnapshotError::NotAnObject => ExError::new(ExErrorKind::InvalidSnapshot)
                .with_op("decode_snapshot")
                .with_message("snapshot JSON root must be an object"),

            SnapshotError::UnrecognizedShape { keys } => {
                ExError::new(ExErrorKind::UnrecognizedShape)
                    .with_op("sniff_shape")
                    .with_message(format!("no marker key among {:?}", keys))
            }

            SnapshotError::UpstreamError { body } => ExError::new(ExErrorKind::UpstreamError)
                .with_op("decode_snapshot")
                .with_message(body),

            SnapshotError::InvalidJobPoints { job, message } => {
                ExError::new(ExErrorKind::InvalidJobPoints)
                    .with_op("flatten_job_points")
                    .with_message(format!("{}: {}", job, message))
            }

            SnapshotError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Serialization {
            message: err.to_string(),
        }
    }
}
