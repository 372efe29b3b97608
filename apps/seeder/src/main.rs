use anyhow::{Context, Result};
use sigrh::domain::config::AppConfig;
use sigrh::kernel::config::load_config;
use sigrh_logger::{LevelFilter, Logger};
use sigrh_seeder::Seeder;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

fn main() -> Result<()> {
    // The configuration file is optional; the embedded catalogue and the
    // default log settings cover the bare `sigrh-seeder` invocation.
    let (cfg, cfg_error) = match load_config::<AppConfig>(None::<&Path>) {
        Ok(cfg) => (cfg, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let _log = init_logger(&cfg).context("Critical: Logging configuration is malformed")?;
    if let Some(err) = cfg_error {
        warn!(error = %err, "Configuration not loaded, using defaults");
    }

    Seeder::builder().config(cfg).build()?.run()
}

/// Builds the global logger from the `log` section of the configuration.
fn init_logger(cfg: &AppConfig) -> Result<Logger> {
    let level = LevelFilter::from_str(&cfg.log.level)
        .with_context(|| format!("Invalid log level '{}'", cfg.log.level))?;

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    if let Some(dir) = &cfg.log.dir {
        builder = builder.path(dir);
    }
    if cfg.log.json {
        builder = builder.json();
    }
    Ok(builder.init()?)
}
