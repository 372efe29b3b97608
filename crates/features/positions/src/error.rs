use sigrh_database::DatabaseError;

/// Position slice error type.
#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
