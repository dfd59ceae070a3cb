use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use thiserror::Error;

use crate::validation::ValidationFailure;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadArgument(String),
    #[error("{0}")]
    InvalidOperation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotImplemented(String),
    #[error("{0}")]
    Timeout(String),
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{} with ID {} not found.", entity, id))
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return Self::InvalidOperation(format!("The operation violates a reference between records: {}", msg));
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return Self::InvalidOperation(format!("The operation would duplicate a unique value: {}", msg));
            }
            _ => {}
        }
        match err {
            DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
                Self::Timeout("Timed out waiting for a database connection.".into())
            }
            other => Self::Db(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_type_and_id() {
        let err = ServiceError::not_found("ServiceLocation", 42);
        assert_eq!(err.to_string(), "ServiceLocation with ID 42 not found.");
    }

    #[test]
    fn acquire_timeout_maps_to_timeout() {
        let err: ServiceError = DbErr::ConnectionAcquire(ConnAcquireErr::Timeout).into();
        assert!(matches!(err, ServiceError::Timeout(_)));
    }

    #[test]
    fn other_db_errors_stay_opaque() {
        let err: ServiceError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, ServiceError::Db(ref m) if m.contains("boom")));
    }
}
