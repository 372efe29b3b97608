use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to build config: {0}")]
    Build(#[source] config::ConfigError),
    #[error("Failed to deserialize config: {0}")]
    Deserialize(#[source] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `seeder.toml`). If no path is provided, it defaults to `"seeder"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `SIGRH__`.
///    Nested structures are accessed using double underscores (e.g., `SIGRH__SEED__DIR` maps to `seed.dir`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source. Defaults to the `seeder` file in the current working directory.
///
/// # Returns
/// * `Ok(T)`: The successfully populated configuration object.
/// * `Err(ConfigError)`: If the file is missing, the environment variables are malformed, or deserialization fails.
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use sigrh_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     verbose: bool,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("seeder"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("SIGRH")
                .separator("__")
                .convert_case(config::Case::Snake), // Env var overrides (e.g., SIGRH__LOG__LEVEL)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .map_err(ConfigError::Build)?
        .try_deserialize::<T>()
        .map_err(ConfigError::Deserialize)?;

    Ok(config)
}
