use std::fmt::Debug;
use tracing::{debug, error, info};

/// One step of the seeding pipeline.
///
/// Implementations own everything they need to seed their slice (database
/// handle, seed documents) and expose a cheap [`Initializer::is_seeded`]
/// probe so reruns become no-ops.
pub trait Initializer: Debug + Send + Sync {
    /// Short machine name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Pipeline rank; lower runs earlier.
    fn priority(&self) -> u8;

    /// Whether this initializer's rows already exist.
    fn is_seeded(&self) -> bool;

    /// Seeds the rows, returning how many were created.
    ///
    /// # Errors
    /// Returns [`BootstrapError::Initializer`] when the slice cannot be seeded.
    fn run(&self) -> Result<u64, BootstrapError>;
}

/// Custom error type for the seeding pipeline.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Initializer '{name}' failed: {source}")]
    Initializer {
        name: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BootstrapError {
    /// Wraps a slice-level error with the failing initializer's name.
    pub fn initializer(
        name: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Initializer { name, source: Box::new(source) }
    }
}

/// Outcome of one executed initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializerRun {
    pub name: &'static str,
    pub created: u64,
}

/// Outcome of a whole bootstrap pass.
#[derive(Debug, Default)]
pub struct BootstrapReport {
    pub seeded: Vec<InitializerRun>,
    pub skipped: Vec<&'static str>,
}

impl BootstrapReport {
    /// Total rows created across all initializers.
    #[must_use]
    pub fn total_created(&self) -> u64 {
        self.seeded.iter().map(|run| run.created).sum()
    }

    /// `true` when every initializer was skipped (a rerun against seeded data).
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.seeded.is_empty()
    }
}

/// Runs initializers in priority order with per-initializer skip guards.
#[derive(Debug)]
pub struct BootstrapRunner {
    initializers: Vec<Box<dyn Initializer>>,
}

impl BootstrapRunner {
    /// Creates a runner; initializers are sorted by ascending priority
    /// (insertion order breaks ties).
    #[must_use]
    pub fn new(mut initializers: Vec<Box<dyn Initializer>>) -> Self {
        initializers.sort_by_key(|initializer| initializer.priority());
        Self { initializers }
    }

    /// Executes the pipeline, skipping already-seeded slices and aborting on
    /// the first failure.
    ///
    /// # Errors
    /// Propagates the first [`BootstrapError`] raised by an initializer;
    /// later initializers are not attempted.
    pub fn run(&self) -> Result<BootstrapReport, BootstrapError> {
        let mut report = BootstrapReport::default();

        for initializer in &self.initializers {
            let name = initializer.name();

            if initializer.is_seeded() {
                debug!(initializer = name, "Rows already present, skipping");
                report.skipped.push(name);
                continue;
            }

            info!(initializer = name, "Seeding");
            match initializer.run() {
                Ok(created) => {
                    info!(initializer = name, created, "Seeded");
                    report.seeded.push(InitializerRun { name, created });
                }
                Err(err) => {
                    error!(initializer = name, error = %err, "Bootstrap aborted");
                    return Err(err);
                }
            }
        }

        Ok(report)
    }
}
