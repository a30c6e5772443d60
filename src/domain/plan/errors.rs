//! Plan-specific error types.
//!
//! An empty plan list is not an error: it yields zeroed statistics with
//! no most popular plan.
//!
//! | Error | Code |
//! |-------|------|
//! | InvalidRecord | INVALID_RECORD |
//! | Infrastructure | SOURCE_UNAVAILABLE |

use crate::domain::foundation::{DomainError, ErrorCode};

/// Plan-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A plan record is missing or mistyping a field.
    ///
    /// `index` is the position of the record in its input list, when known.
    InvalidRecord {
        index: Option<usize>,
        field: String,
        reason: String,
    },

    /// The plan source could not be read.
    Infrastructure(String),
}

impl PlanError {
    pub fn invalid_record(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PlanError::InvalidRecord {
            index: None,
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_record_at(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PlanError::InvalidRecord {
            index: Some(index),
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanError::Infrastructure(message.into())
    }

    /// Attaches a record position to an `InvalidRecord` that has none.
    pub fn at_index(self, position: usize) -> Self {
        match self {
            PlanError::InvalidRecord {
                index: None,
                field,
                reason,
            } => PlanError::InvalidRecord {
                index: Some(position),
                field,
                reason,
            },
            other => other,
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::InvalidRecord { .. } => ErrorCode::InvalidRecord,
            PlanError::Infrastructure(_) => ErrorCode::SourceUnavailable,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            PlanError::InvalidRecord {
                index: Some(index),
                field,
                reason,
            } => format!("Invalid plan record at index {}: '{}' {}", index, field, reason),
            PlanError::InvalidRecord {
                index: None,
                field,
                reason,
            } => format!("Invalid plan record: '{}' {}", field, reason),
            PlanError::Infrastructure(msg) => format!("Plan source error: {}", msg),
        }
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PlanError {}

impl From<DomainError> for PlanError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidRecord | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                PlanError::InvalidRecord {
                    index: err.details.get("index").and_then(|i| i.parse().ok()),
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    reason: err.message,
                }
            }
            ErrorCode::SourceUnavailable => PlanError::Infrastructure(err.to_string()),
        }
    }
}

impl From<PlanError> for DomainError {
    fn from(err: PlanError) -> Self {
        let domain = DomainError::new(err.code(), err.message());
        match err {
            PlanError::InvalidRecord { index, field, .. } => {
                let domain = domain.with_detail("field", field);
                match index {
                    Some(index) => domain.with_detail("index", index.to_string()),
                    None => domain,
                }
            }
            PlanError::Infrastructure(_) => domain,
        }
    }
}
