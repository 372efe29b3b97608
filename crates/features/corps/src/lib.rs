//! Corps and grade referential feature slice.
//!
//! Persists the corps catalogue of the seed data: one row per corps de
//! métier and one row per grade of its ladder, back-referencing the corps.
//! The catalogue is optional; seeding without one is a logged no-op.

mod error;

pub use crate::error::CorpsError;

use sigrh_database::Database;
use sigrh_domain::corps::{CorpsMetier, Grade};
use sigrh_kernel::bootstrap::{BootstrapError, Initializer};
use sigrh_seed::SeedCatalog;
use sigrh_seed::document::CorpsDocument;
use std::sync::Arc;
use tracing::{info, warn};

/// Seeds the corps catalogue.
#[derive(Debug)]
pub struct CorpsInitializer {
    db: Database,
    catalog: Arc<SeedCatalog>,
}

impl CorpsInitializer {
    #[must_use]
    pub fn new(db: Database, catalog: Arc<SeedCatalog>) -> Self {
        Self { db, catalog }
    }
}

impl Initializer for CorpsInitializer {
    fn name(&self) -> &'static str {
        "corps"
    }

    fn priority(&self) -> u8 {
        50
    }

    fn is_seeded(&self) -> bool {
        !self.db.corps().is_empty()
    }

    fn run(&self) -> Result<u64, BootstrapError> {
        let Some(document) = &self.catalog.corps else {
            warn!("No corps catalogue in the seed data, skipping");
            return Ok(0);
        };

        self.db
            .scope("corps", |db| seed_corps(db, document))
            .map_err(|err| BootstrapError::initializer("corps", err))
    }
}

fn seed_corps(db: &Database, document: &CorpsDocument) -> Result<u64, CorpsError> {
    let mut created = 0u64;

    for def in &document.corps_metiers {
        info!(corps = %def.code, grades = def.grades.len(), "Seeding corps");

        db.corps().insert(CorpsMetier {
            code: def.code.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            category: def.category.clone(),
            ministere: def.ministere.clone(),
        })?;
        created += 1;

        for grade in &def.grades {
            db.grades().insert(Grade {
                code: grade.code.clone(),
                name: grade.name.clone(),
                level: grade.level,
                category: grade.category.clone(),
                description: grade.description.clone(),
                corps_code: def.code.clone(),
            })?;
            created += 1;
        }
    }

    Ok(created)
}
