//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it owns the layered configuration loader and
//! the contract of the seeding pipeline. Feature slices implement
//! [`bootstrap::Initializer`] and the application assembles them into a
//! [`bootstrap::BootstrapRunner`].
//!
//! ## Config loading
//! ```rust,ignore
//! use sigrh_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("seeder")).unwrap();
//! ```

pub mod bootstrap;
pub mod config;
