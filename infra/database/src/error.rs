/// A specialized [`DatabaseError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Code-uniqueness violation on insertion.
    #[error("duplicate {table} record: {code}")]
    Duplicate { table: &'static str, code: String },

    /// Lookup of a record that does not exist.
    #[error("{table} record not found: {code}")]
    NotFound { table: &'static str, code: String },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("internal database error: {message}")]
    Internal { message: String },
}
