// ==========================================
// Boiler Combustion-Efficiency Tracker - API-layer error type
// ==========================================
// Responsibility: translate repository and engine failures into the
// categories an operator-facing shell can present. Every error carries an
// explicit reason.
// ==========================================

use crate::engine::CombustionError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API-layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Input errors =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("validation failed: {reason}")]
    ValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    // ===== Lookup errors =====
    #[error("not found: {0}")]
    NotFound(String),

    // ===== Data access errors =====
    #[error("database error: {0}")]
    DatabaseError(String),

    // ===== Import errors =====
    #[error("import failed: {0}")]
    ImportError(String),

    // ===== General errors =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Conversion from RepositoryError
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, key } => {
                ApiError::NotFound(format!("{entity} ({key})"))
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseError(format!("lock acquisition failed: {msg}"))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::DatabaseError(format!("unique constraint violated: {msg}"))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::DatabaseError(format!("foreign key constraint violated: {msg}"))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// Conversion from CombustionError
// ==========================================
// Both engine failure classes are invalid-input conditions from the
// operator's point of view: a named reading made the formulas undefined.
impl From<CombustionError> for ApiError {
    fn from(err: CombustionError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// Validation violation detail
// ==========================================

/// One field-level validation failure.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ValidationViolation {
    /// Field that failed
    pub field: String,
    /// Reason the value was rejected
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let repo_err = RepositoryError::NotFound {
            entity: "coal_quality",
            key: "2024-03-01".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("coal_quality"));
                assert!(msg.contains("2024-03-01"));
            }
            _ => panic!("Expected NotFound"),
        }

        let repo_err = RepositoryError::ForeignKeyViolation("coal_date".to_string());
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::DatabaseError(msg) => assert!(msg.contains("coal_date")),
            _ => panic!("Expected DatabaseError"),
        }
    }

    #[test]
    fn test_combustion_error_conversion() {
        let engine_err = CombustionError::InvalidInput {
            field: "o2_pct",
            message: "residual oxygen 21 % must stay below the atmospheric 21 %".to_string(),
        };
        let api_err: ApiError = engine_err.into();
        match api_err {
            ApiError::InvalidInput(msg) => assert!(msg.contains("o2_pct")),
            _ => panic!("Expected InvalidInput"),
        }
    }
}
