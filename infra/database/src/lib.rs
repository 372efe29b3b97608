//! # Database Infrastructure
//!
//! This crate provides the in-memory repository layer backing the seeding
//! pipeline. Every entity lives in a typed [`Table`] keyed by its natural
//! code, and the whole store can be rolled back to a snapshot when an
//! initializer fails mid-way.
//!
//! ## Key Features
//! - **Typed repositories**: One [`Table`] per entity, addressed by code.
//! - **Insertion order**: Listings replay records in creation order.
//! - **Scoped rollback**: [`Database::scope`] snapshots all tables and
//!   restores them if the wrapped operation errors.
//!
//! ## Example
//!
//! ```rust
//! use sigrh_database::{Database, DatabaseError};
//! use sigrh_domain::structure::{Structure, StructureKind};
//!
//! fn main() -> Result<(), DatabaseError> {
//!     let db = Database::new();
//!     db.structures()
//!         .insert(Structure::new("MINAT", "Ministère", StructureKind::Ministere))?;
//!
//!     assert_eq!(db.counts().structures, 1);
//!     Ok(())
//! }
//! ```

mod error;
mod records;
mod table;

pub use error::DatabaseError;
pub use table::{Record, Table};

use crate::table::TableState;
use sigrh_domain::corps::{CorpsMetier, Grade};
use sigrh_domain::geography::{Arrondissement, Department, Region};
use sigrh_domain::position::Position;
use sigrh_domain::structure::Structure;
use sigrh_domain::template::{
    OrganizationalPositionTemplate, OrganizationalTemplate, PositionTemplate,
};
use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;

/// Inner state of the [`Database`] wrapper.
#[derive(Debug, Default)]
pub struct DatabaseInner {
    structures: Table<Structure>,
    templates: Table<OrganizationalTemplate>,
    template_slots: Table<OrganizationalPositionTemplate>,
    archetypes: Table<PositionTemplate>,
    positions: Table<Position>,
    regions: Table<Region>,
    departments: Table<Department>,
    arrondissements: Table<Arrondissement>,
    corps: Table<CorpsMetier>,
    grades: Table<Grade>,
}

/// Shared handle over the typed repositories.
#[derive(Debug, Clone, Default)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

/// Row counts of every repository, used for idempotence checks and the
/// seeding report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub structures: usize,
    pub templates: usize,
    pub template_slots: usize,
    pub archetypes: usize,
    pub positions: usize,
    pub regions: usize,
    pub departments: usize,
    pub arrondissements: usize,
    pub corps: usize,
    pub grades: usize,
}

impl TableCounts {
    /// Total rows across all repositories.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.structures
            + self.templates
            + self.template_slots
            + self.archetypes
            + self.positions
            + self.regions
            + self.departments
            + self.arrondissements
            + self.corps
            + self.grades
    }
}

/// Snapshot of every table, taken before a scoped operation.
struct DatabaseSnapshot {
    structures: TableState<Structure>,
    templates: TableState<OrganizationalTemplate>,
    template_slots: TableState<OrganizationalPositionTemplate>,
    archetypes: TableState<PositionTemplate>,
    positions: TableState<Position>,
    regions: TableState<Region>,
    departments: TableState<Department>,
    arrondissements: TableState<Arrondissement>,
    corps: TableState<CorpsMetier>,
    grades: TableState<Grade>,
}

impl Database {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The administrative structure tree.
    #[must_use]
    pub fn structures(&self) -> &Table<Structure> {
        &self.inner.structures
    }

    /// Reusable organizational templates.
    #[must_use]
    pub fn templates(&self) -> &Table<OrganizationalTemplate> {
        &self.inner.templates
    }

    /// Flattened position slots of the organizational templates.
    #[must_use]
    pub fn template_slots(&self) -> &Table<OrganizationalPositionTemplate> {
        &self.inner.template_slots
    }

    /// Standalone position archetypes.
    #[must_use]
    pub fn archetypes(&self) -> &Table<PositionTemplate> {
        &self.inner.archetypes
    }

    /// Concrete position seats.
    #[must_use]
    pub fn positions(&self) -> &Table<Position> {
        &self.inner.positions
    }

    #[must_use]
    pub fn regions(&self) -> &Table<Region> {
        &self.inner.regions
    }

    #[must_use]
    pub fn departments(&self) -> &Table<Department> {
        &self.inner.departments
    }

    #[must_use]
    pub fn arrondissements(&self) -> &Table<Arrondissement> {
        &self.inner.arrondissements
    }

    #[must_use]
    pub fn corps(&self) -> &Table<CorpsMetier> {
        &self.inner.corps
    }

    #[must_use]
    pub fn grades(&self) -> &Table<Grade> {
        &self.inner.grades
    }

    /// Current row counts of every repository.
    #[must_use]
    pub fn counts(&self) -> TableCounts {
        TableCounts {
            structures: self.inner.structures.count(),
            templates: self.inner.templates.count(),
            template_slots: self.inner.template_slots.count(),
            archetypes: self.inner.archetypes.count(),
            positions: self.inner.positions.count(),
            regions: self.inner.regions.count(),
            departments: self.inner.departments.count(),
            arrondissements: self.inner.arrondissements.count(),
            corps: self.inner.corps.count(),
            grades: self.inner.grades.count(),
        }
    }

    /// Runs `operation` inside an all-or-nothing scope.
    ///
    /// A snapshot of every table is taken first; if the operation returns an
    /// error, the whole store is restored to the snapshot so a failed
    /// initializer leaves no partial rows behind.
    ///
    /// # Errors
    /// Propagates the error returned by `operation` after rolling back.
    pub fn scope<R, E>(
        &self,
        label: &str,
        operation: impl FnOnce(&Self) -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: Display,
    {
        let snapshot = self.snapshot();
        match operation(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(scope = label, error = %err, "Scoped operation failed, rolling back");
                self.restore(snapshot);
                Err(err)
            }
        }
    }

    fn snapshot(&self) -> DatabaseSnapshot {
        DatabaseSnapshot {
            structures: self.inner.structures.snapshot(),
            templates: self.inner.templates.snapshot(),
            template_slots: self.inner.template_slots.snapshot(),
            archetypes: self.inner.archetypes.snapshot(),
            positions: self.inner.positions.snapshot(),
            regions: self.inner.regions.snapshot(),
            departments: self.inner.departments.snapshot(),
            arrondissements: self.inner.arrondissements.snapshot(),
            corps: self.inner.corps.snapshot(),
            grades: self.inner.grades.snapshot(),
        }
    }

    fn restore(&self, snapshot: DatabaseSnapshot) {
        self.inner.structures.restore(snapshot.structures);
        self.inner.templates.restore(snapshot.templates);
        self.inner.template_slots.restore(snapshot.template_slots);
        self.inner.archetypes.restore(snapshot.archetypes);
        self.inner.positions.restore(snapshot.positions);
        self.inner.regions.restore(snapshot.regions);
        self.inner.departments.restore(snapshot.departments);
        self.inner.arrondissements.restore(snapshot.arrondissements);
        self.inner.corps.restore(snapshot.corps);
        self.inner.grades.restore(snapshot.grades);
    }
}
