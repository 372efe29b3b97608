use sigrh_database::DatabaseError;

/// Geography slice error type.
#[derive(Debug, thiserror::Error)]
pub enum GeographyError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("No ministry root structure found; the organization tree must be seeded first")]
    MissingMinistryRoot,
}
