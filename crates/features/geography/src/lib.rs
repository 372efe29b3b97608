//! Geographic referential feature slice.
//!
//! Seeds regions, departments and arrondissements from the geography
//! document, together with their territorial command structures
//! (gouvernorats, préfectures, sous-préfectures) attached under the
//! ministry root.

mod builder;
mod error;

pub use crate::builder::{build_geography, classify};
pub use crate::error::GeographyError;

use sigrh_database::Database;
use sigrh_kernel::bootstrap::{BootstrapError, Initializer};
use sigrh_seed::SeedCatalog;
use std::sync::Arc;
use tracing::info;

/// Seeds the geographic referential and its administrative twins.
#[derive(Debug)]
pub struct GeographyInitializer {
    db: Database,
    catalog: Arc<SeedCatalog>,
}

impl GeographyInitializer {
    #[must_use]
    pub fn new(db: Database, catalog: Arc<SeedCatalog>) -> Self {
        Self { db, catalog }
    }
}

impl Initializer for GeographyInitializer {
    fn name(&self) -> &'static str {
        "geography"
    }

    fn priority(&self) -> u8 {
        30
    }

    fn is_seeded(&self) -> bool {
        !self.db.regions().is_empty()
    }

    fn run(&self) -> Result<u64, BootstrapError> {
        info!(regions = self.catalog.geography.regions.len(), "Seeding geographic referential");

        self.db
            .scope("geography", |db| build_geography(db, &self.catalog))
            .map_err(|err| BootstrapError::initializer("geography", err))
    }
}
