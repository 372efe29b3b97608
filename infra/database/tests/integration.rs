use sigrh_database::{Database, DatabaseError};
use sigrh_domain::geography::Region;
use sigrh_domain::structure::{Structure, StructureKind};

#[test]
fn tables_start_empty() {
    let db = Database::new();
    assert_eq!(db.counts().total(), 0);
    assert!(db.structures().is_empty());
}

#[test]
fn clones_share_the_same_store() {
    let db = Database::new();
    let other = db.clone();

    other
        .structures()
        .insert(Structure::new("MINAT", "Ministère", StructureKind::Ministere))
        .expect("insert root");

    assert!(db.structures().contains("MINAT"));
    assert_eq!(db.counts().structures, 1);
}

#[test]
fn scope_rolls_back_every_table_on_error() {
    let db = Database::new();
    db.regions().insert(Region::new("CE", "Centre", "Yaoundé")).expect("insert region");

    let result: Result<(), DatabaseError> = db.scope("geography", |db| {
        db.regions().insert(Region::new("SU", "Sud", "Ebolowa"))?;
        db.structures().insert(Structure::new("GOUV-SU", "Gouvernorat", StructureKind::Gouvernorat))?;
        Err(DatabaseError::Internal { message: "boom".to_owned() })
    });

    assert!(result.is_err());
    // Rows created inside the failed scope are gone, earlier rows survive.
    assert_eq!(db.counts().regions, 1);
    assert!(db.regions().contains("CE"));
    assert!(!db.regions().contains("SU"));
    assert_eq!(db.counts().structures, 0);
}

#[test]
fn scope_commits_on_success() {
    let db = Database::new();

    let created: Result<usize, DatabaseError> = db.scope("geography", |db| {
        db.regions().insert(Region::new("CE", "Centre", "Yaoundé"))?;
        db.regions().insert(Region::new("SU", "Sud", "Ebolowa"))?;
        Ok(2)
    });

    assert_eq!(created.expect("scope succeeds"), 2);
    assert_eq!(db.counts().regions, 2);
}

#[test]
fn first_respects_insertion_order() {
    let db = Database::new();
    db.structures()
        .insert(Structure::new("MINAT", "Ministère", StructureKind::Ministere))
        .expect("insert root");
    db.structures()
        .insert(
            Structure::new("MINAT-SG", "Secrétariat Général", StructureKind::SecretariatGeneral)
                .with_parent("MINAT"),
        )
        .expect("insert child");

    let root = db.structures().first(Structure::is_root).expect("root exists");
    assert_eq!(root.code, "MINAT");
}
