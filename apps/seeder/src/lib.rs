//! # SIGRH Seeder
//!
//! The organizational bootstrap application: loads the seed catalogue,
//! opens the store and runs the seeding pipeline over it.
//!
//! ## Example
//! ```no_run
//! use sigrh_seeder::Seeder;
//!
//! fn main() -> anyhow::Result<()> {
//!     Seeder::builder().build()?.run()
//! }
//! ```

use anyhow::{Context, Result};
use sigrh::database::Database;
use sigrh::domain::config::AppConfig;
use sigrh::seed::SeedCatalog;
use std::sync::Arc;
use tracing::info;

/// A fluent builder for configuring and initializing the [`Seeder`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct SeederBuilder {
    cfg: AppConfig,
}

impl SeederBuilder {
    /// Set up the seeder's configuration.
    pub fn config(mut self, cfg: AppConfig) -> Self {
        self.cfg = cfg;
        self
    }

    fn load_catalog(&self) -> Result<SeedCatalog> {
        match &self.cfg.seed.dir {
            Some(dir) => SeedCatalog::load(dir)
                .with_context(|| format!("Failed to load seed catalogue from {}", dir.display())),
            None => SeedCatalog::builtin().context("Embedded seed catalogue is out of sync"),
        }
    }

    /// Consumes the builder and initializes the seeder.
    ///
    /// # Process
    /// 1. Loads the seed catalogue (configured directory or embedded copy)
    /// 2. Opens the store the pipeline seeds into
    ///
    /// # Errors
    /// Returns an error when the seed catalogue cannot be loaded or parsed.
    pub fn build(self) -> Result<Seeder> {
        let catalog = Arc::new(self.load_catalog()?);

        info!(
            root = %catalog.organization.organization.code,
            regions = catalog.geography.regions.len(),
            templates = catalog.templates.len(),
            "Initializing seeder"
        );

        Ok(Seeder { db: Database::new(), catalog })
    }
}

/// A fully initialized seeder ready to run.
#[must_use = "call .run() to execute the pipeline"]
#[derive(Debug)]
pub struct Seeder {
    db: Database,
    catalog: Arc<SeedCatalog>,
}

impl Seeder {
    /// Returns a new [`SeederBuilder`] to configure the seeder.
    ///
    /// This is the recommended way to initialize the seeder.
    pub fn builder() -> SeederBuilder {
        SeederBuilder::default()
    }

    /// Runs the seeding pipeline and logs the resulting report.
    ///
    /// # Errors
    /// Returns an error when an initializer fails; the failing slice's rows
    /// are rolled back before the error surfaces.
    pub fn run(self) -> Result<()> {
        let report =
            sigrh::bootstrap(&self.db, &self.catalog).context("Seeding pipeline failed")?;

        for run in &report.seeded {
            info!(initializer = run.name, created = run.created, "Slice seeded");
        }
        if report.is_noop() {
            info!("Store already seeded, nothing to do");
        }

        let counts = self.db.counts();
        info!(
            structures = counts.structures,
            positions = counts.positions,
            rows = counts.total(),
            created = report.total_created(),
            "Seeding complete"
        );
        Ok(())
    }

    /// Returns a handle to the store the pipeline seeds into.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.db
    }
}
