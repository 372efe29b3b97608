use sigrh::domain::config::AppConfig;
use sigrh_seeder::Seeder;
use std::fs;

#[test]
fn runs_the_pipeline_with_the_embedded_catalogue() {
    let seeder = Seeder::builder().build().unwrap();
    let db = seeder.database().clone();

    seeder.run().unwrap();

    assert_eq!(db.counts().structures, 147);
    assert_eq!(db.counts().positions, 184);
    assert!(db.structures().contains("MINAT"));
}

#[test]
fn loads_a_catalogue_from_a_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("organization.json"),
        r#"{"organization":{"code":"MINAT","name":"Ministère","type":"MINISTERE"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("geography.json"),
        r#"{"regions":[{"code":"XX","name":"Test","chefLieu":"Ville"}]}"#,
    )
    .unwrap();

    let mut cfg = AppConfig::default();
    cfg.seed.dir = Some(dir.path().to_path_buf());

    let seeder = Seeder::builder().config(cfg).build().unwrap();
    let db = seeder.database().clone();
    seeder.run().unwrap();

    assert_eq!(db.counts().regions, 1);
    assert!(db.structures().contains("GOUV-XX"));
    assert!(db.positions().contains("MINAT-MINISTRE"));
}

#[test]
fn rejects_an_unreadable_seed_directory() {
    let dir = tempfile::tempdir().unwrap();

    let mut cfg = AppConfig::default();
    cfg.seed.dir = Some(dir.path().to_path_buf());

    // An empty directory is missing the mandatory documents.
    let err = Seeder::builder().config(cfg).build().unwrap_err();
    assert!(err.to_string().contains("Failed to load seed catalogue"));
}
