use models::errors::FieldErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("not found: {0}")]
    NotFound(String),
    /// Optimistic-concurrency failure on a record that still exists.
    #[error("concurrency conflict: {0}")]
    Conflict(String),
    /// The backing table is not there; carries the user-facing message.
    #[error("{0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn conflict(entity: &str, key: impl std::fmt::Display) -> Self {
        Self::Conflict(format!("{} '{}' was modified or removed since it was read", entity, key))
    }

    pub fn entity_set_missing(set_name: &str) -> Self {
        Self::Unavailable(format!("Entity set 'PatientsContext.{}' is null.", set_name))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
