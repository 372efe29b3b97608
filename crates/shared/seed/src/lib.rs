//! # Seed Catalogue
//!
//! This crate owns the input side of the seeding pipeline: the serde schemas
//! of the seed documents and the [`SeedCatalog`] that loads them, either from
//! a directory or from the copies baked into the binary.
//!
//! ## Loading rules
//! - `organization.json` and `geography.json` are **mandatory**; a missing or
//!   malformed file is a fatal [`SeedError`].
//! - `templates/*.json`, `corps.json` and `arrondissements/<REGION>.json`
//!   overrides are **optional**; absence yields empty collections and a log
//!   line, never an error.
//!
//! The catalogue is immutable once loaded. Initializers read from it and
//! never touch the filesystem themselves.
//!
//! ## Example
//!
//! ```rust
//! use sigrh_seed::SeedCatalog;
//!
//! let catalog = SeedCatalog::builtin().expect("embedded catalogue parses");
//! assert!(!catalog.geography.regions.is_empty());
//! ```

mod catalog;
pub mod document;
mod error;

pub use crate::catalog::SeedCatalog;
pub use crate::error::SeedError;
