use sigrh_database::DatabaseError;

/// Template slice error type.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
