use sqlx::migrate::MigrateError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("constraint violated: {0}")]
    Constraint(String),

    /// The detail is logged when the error is classified, not shown to clients.
    #[error("internal database error")]
    Database(#[source] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] MigrateError),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation()
                || db_err.is_foreign_key_violation()
                || db_err.is_check_violation()
            {
                return StoreError::Constraint(db_err.message().to_string());
            }
        }
        tracing::error!("Database error: {e}");
        StoreError::Database(e)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
