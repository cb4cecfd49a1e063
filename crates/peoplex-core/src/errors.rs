use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExError>;

/// Error classification shared by every layer
///
/// The code of each kind is stable; the CLI prints it and tests match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    InvalidInput,
    NotFound,
    ConstraintViolation,
    Io,
    Persistence,
}

impl ExErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Structured error: a kind plus optional operation, entity id and message
///
/// Built with `ExError::new(kind)` and the `with_*` setters.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    pub fn with_op(self, op: impl Into<String>) -> Self {
        Self {
            op: Some(op.into()),
            ..self
        }
    }

    pub fn with_entity_id(self, id: impl Into<String>) -> Self {
        Self {
            entity_id: Some(id.into()),
            ..self
        }
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// `[CODE] in operation 'op': message (entity_id: id)`, omitting absent parts
impl fmt::Display for ExError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        match &self.entity_id {
            Some(id) => write!(f, " (entity_id: {})", id),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ExError {}

/// Domain failures raised by the store and the strategy layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PeopleXError {
    #[error("Observatory not found: {observatory_id}")]
    ObservatoryNotFound { observatory_id: i64 },

    #[error("Site not found: {site_id}")]
    SiteNotFound { site_id: i64 },

    #[error("Person not found: {person_id}")]
    PersonNotFound { person_id: i64 },

    #[error("Unknown fetch strategy: {name}")]
    UnknownStrategy { name: String },

    /// Batches must hold at least one row
    #[error("Invalid batch size: {batch_size}")]
    InvalidBatchSize { batch_size: usize },
}

impl PeopleXError {
    fn kind(&self) -> ExErrorKind {
        match self {
            PeopleXError::ObservatoryNotFound { .. }
            | PeopleXError::SiteNotFound { .. }
            | PeopleXError::PersonNotFound { .. } => ExErrorKind::NotFound,
            PeopleXError::UnknownStrategy { .. } | PeopleXError::InvalidBatchSize { .. } => {
                ExErrorKind::InvalidInput
            }
        }
    }

    fn op(&self) -> &'static str {
        match self {
            PeopleXError::ObservatoryNotFound { .. } => "fetch_observatory",
            PeopleXError::SiteNotFound { .. } => "fetch_site",
            PeopleXError::PersonNotFound { .. } => "fetch_person",
            PeopleXError::UnknownStrategy { .. } => "parse_strategy",
            PeopleXError::InvalidBatchSize { .. } => "insert_people_batched",
        }
    }

    fn entity_id(&self) -> Option<i64> {
        match self {
            PeopleXError::ObservatoryNotFound { observatory_id } => Some(*observatory_id),
            PeopleXError::SiteNotFound { site_id } => Some(*site_id),
            PeopleXError::PersonNotFound { person_id } => Some(*person_id),
            _ => None,
        }
    }
}

impl From<PeopleXError> for ExError {
    fn from(err: PeopleXError) -> Self {
        let ex = ExError::new(err.kind())
            .with_op(err.op())
            .with_message(err.to_string());
        match err.entity_id() {
            Some(id) => ex.with_entity_id(id.to_string()),
            None => ex,
        }
    }
}
