use sigrh_database::DatabaseError;

/// Corps slice error type.
#[derive(Debug, thiserror::Error)]
pub enum CorpsError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
