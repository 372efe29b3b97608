use sigrh_database::DatabaseError;

/// Organization slice error type.
#[derive(Debug, thiserror::Error)]
pub enum OrganizationError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
