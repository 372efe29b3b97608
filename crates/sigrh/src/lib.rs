//! Facade crate for SIGRH features and shared modules.
//! Re-exports domain/kernel primitives and aggregates the seeding pipeline.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`bootstrap`] with a database and a seed catalogue to run the
//!   whole pipeline.
//! - Or assemble a custom pipeline from [`initializers`] and the kernel's
//!   `BootstrapRunner`.

pub use sigrh_database as database;
pub use sigrh_domain as domain;
pub use sigrh_kernel as kernel;
pub use sigrh_seed as seed;

use sigrh_database::Database;
use sigrh_kernel::bootstrap::{BootstrapError, BootstrapReport, BootstrapRunner, Initializer};
use sigrh_seed::SeedCatalog;
use std::sync::Arc;

/// Feature slices of the seeding pipeline.
pub mod features {
    pub use sigrh_corps as corps;
    pub use sigrh_geography as geography;
    pub use sigrh_organization as organization;
    pub use sigrh_positions as positions;
    pub use sigrh_templates as templates;
}

/// All feature initializers over one database and seed catalogue.
///
/// Declaration order does not matter; the runner re-orders by priority.
#[must_use]
pub fn initializers(db: &Database, catalog: &Arc<SeedCatalog>) -> Vec<Box<dyn Initializer>> {
    vec![
        Box::new(features::organization::StructureInitializer::new(
            db.clone(),
            Arc::clone(catalog),
        )),
        Box::new(features::templates::TemplateInitializer::new(db.clone(), Arc::clone(catalog))),
        Box::new(features::geography::GeographyInitializer::new(db.clone(), Arc::clone(catalog))),
        Box::new(features::positions::PositionInitializer::new(db.clone())),
        Box::new(features::corps::CorpsInitializer::new(db.clone(), Arc::clone(catalog))),
    ]
}

/// Runs the whole seeding pipeline over the database.
///
/// Already-seeded slices are skipped, so calling this against a populated
/// database is a no-op.
///
/// # Errors
/// Propagates the first initializer failure; the failing initializer's rows
/// are rolled back before the error surfaces.
pub fn bootstrap(
    db: &Database,
    catalog: &Arc<SeedCatalog>,
) -> Result<BootstrapReport, BootstrapError> {
    BootstrapRunner::new(initializers(db, catalog)).run()
}
