use crate::error::DatabaseError;
use fxhash::FxHashMap;
use parking_lot::RwLock;

/// A record addressable by its natural-key code.
pub trait Record: Clone {
    /// Repository name, used in error messages and reports.
    const TABLE: &'static str;

    /// The natural key of the record.
    fn code(&self) -> &str;
}

/// Internal table contents. Insertion order is tracked separately so that
/// listings replay records in creation order.
#[derive(Debug, Clone)]
pub(crate) struct TableState<T> {
    rows: FxHashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self { rows: FxHashMap::default(), order: Vec::new() }
    }
}

/// An in-memory repository of records keyed by code.
///
/// Uniqueness of codes is enforced at insertion; lookups hand out clones so
/// callers never hold the table lock across their own logic.
#[derive(Debug)]
pub struct Table<T: Record> {
    state: RwLock<TableState<T>>,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self { state: RwLock::new(TableState::default()) }
    }
}

impl<T: Record> Table<T> {
    /// Inserts a record, rejecting duplicate codes.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Duplicate`] if a record with the same code
    /// already exists.
    pub fn insert(&self, record: T) -> Result<(), DatabaseError> {
        let mut state = self.state.write();
        let code = record.code().to_owned();
        if state.rows.contains_key(&code) {
            return Err(DatabaseError::Duplicate { table: T::TABLE, code });
        }
        state.order.push(code.clone());
        state.rows.insert(code, record);
        Ok(())
    }

    /// Applies `apply` to the stored record with the given code.
    ///
    /// # Errors
    /// Returns [`DatabaseError::NotFound`] if no record carries the code.
    pub fn update(&self, code: &str, apply: impl FnOnce(&mut T)) -> Result<(), DatabaseError> {
        let mut state = self.state.write();
        match state.rows.get_mut(code) {
            Some(record) => {
                apply(record);
                Ok(())
            }
            None => Err(DatabaseError::NotFound { table: T::TABLE, code: code.to_owned() }),
        }
    }

    /// Returns a clone of the record with the given code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<T> {
        self.state.read().rows.get(code).cloned()
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.state.read().rows.contains_key(code)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.state.read().order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// All records in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<T> {
        let state = self.state.read();
        state.order.iter().filter_map(|code| state.rows.get(code).cloned()).collect()
    }

    /// The first record (in insertion order) matching the predicate.
    #[must_use]
    pub fn first(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        let state = self.state.read();
        state
            .order
            .iter()
            .filter_map(|code| state.rows.get(code))
            .find(|record| predicate(record))
            .cloned()
    }

    pub(crate) fn snapshot(&self) -> TableState<T> {
        self.state.read().clone()
    }

    pub(crate) fn restore(&self, snapshot: TableState<T>) {
        *self.state.write() = snapshot;
    }
}
