//! Organization tree feature slice.
//!
//! Walks the parsed organization document depth-first and persists one
//! structure per node, parent links included. Creation order is the
//! pre-order traversal of the source tree, so listings replay the document
//! as authored.

mod error;

pub use crate::error::OrganizationError;

use sigrh_database::Database;
use sigrh_domain::structure::Structure;
use sigrh_kernel::bootstrap::{BootstrapError, Initializer};
use sigrh_seed::SeedCatalog;
use sigrh_seed::document::StructureDef;
use std::sync::Arc;
use tracing::{info, warn};

/// Persists `def` and its whole sub-tree under `parent_code`.
///
/// Every created node receives a best-effort template replay; a replay
/// failure is logged with the node code and never interrupts the walk.
/// During the first bootstrap pass the template table is still empty and
/// every replay is a debug-logged no-op.
///
/// Returns the number of rows created, replayed sub-structures and seats
/// included.
///
/// # Errors
/// Returns [`OrganizationError::Database`] when a node cannot be persisted,
/// a duplicate code in the source document being the usual cause.
pub fn build_tree(
    db: &Database,
    def: &StructureDef,
    parent_code: Option<&str>,
) -> Result<u64, OrganizationError> {
    let mut structure =
        Structure::new(&def.code, &def.name, def.kind).with_description(def.description.clone());
    if let Some(parent) = parent_code {
        structure = structure.with_parent(parent);
    }

    db.structures().insert(structure.clone())?;
    let mut created = 1u64;

    match sigrh_templates::instantiate(db, &structure) {
        Ok(Some(stats)) => created += stats.total(),
        Ok(None) => {}
        Err(err) => {
            warn!(structure = %structure.code, error = %err, "Template replay failed, continuing");
        }
    }

    for child in &def.structures {
        created += build_tree(db, child, Some(&def.code))?;
    }

    Ok(created)
}

/// Seeds the central administration tree from the organization document.
#[derive(Debug)]
pub struct StructureInitializer {
    db: Database,
    catalog: Arc<SeedCatalog>,
}

impl StructureInitializer {
    #[must_use]
    pub fn new(db: Database, catalog: Arc<SeedCatalog>) -> Self {
        Self { db, catalog }
    }
}

impl Initializer for StructureInitializer {
    fn name(&self) -> &'static str {
        "structures"
    }

    fn priority(&self) -> u8 {
        10
    }

    fn is_seeded(&self) -> bool {
        !self.db.structures().is_empty()
    }

    fn run(&self) -> Result<u64, BootstrapError> {
        let root = &self.catalog.organization.organization;
        info!(root = %root.code, nodes = root.node_count(), "Seeding organization tree");

        self.db
            .scope("structures", |db| build_tree(db, root, None))
            .map_err(|err| BootstrapError::initializer("structures", err))
    }
}
