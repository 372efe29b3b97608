use serde::Deserialize;
use sigrh_kernel::config::{ConfigError, load_config};
use std::fs;

#[derive(Debug, Deserialize)]
struct SeederConfig {
    seed: SeedSection,
    log: LogSection,
}

#[derive(Debug, Deserialize)]
struct SeedSection {
    dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LogSection {
    level: String,
}

#[test]
fn loads_nested_sections_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("seeder.toml"),
        "[seed]\ndir = \"data/seeds\"\n\n[log]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let cfg: SeederConfig = load_config(Some(dir.path().join("seeder"))).unwrap();

    assert_eq!(cfg.seed.dir.as_deref(), Some("data/seeds"));
    assert_eq!(cfg.log.level, "debug");
}

#[test]
fn missing_file_is_a_build_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = load_config::<SeederConfig>(Some(dir.path().join("absent")));

    assert!(matches!(result, Err(ConfigError::Build(_))));
}

#[test]
fn missing_section_is_a_deserialize_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("seeder.toml"), "[seed]\ndir = \"data/seeds\"\n").unwrap();

    let result = load_config::<SeederConfig>(Some(dir.path().join("seeder")));

    assert!(matches!(result, Err(ConfigError::Deserialize(_))));
}
