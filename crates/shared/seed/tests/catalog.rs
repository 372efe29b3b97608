use sigrh_seed::{SeedCatalog, SeedError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const ORGANIZATION: &str = r#"{
  "organization": {
    "code": "MINAT",
    "name": "Ministère de l'Administration Territoriale",
    "type": "MINISTERE",
    "structures": [
      { "code": "MINAT-SG", "name": "Secrétariat Général", "type": "SECRETARIAT_GENERAL" }
    ]
  }
}"#;

const GEOGRAPHY: &str = r#"{
  "regions": [
    {
      "code": "CE",
      "name": "Centre",
      "chefLieu": "Yaoundé",
      "departments": [
        {
          "name": "Mfoundi",
          "chefLieu": "Yaoundé",
          "arrondissements": [ { "name": "Yaoundé 1er", "chefLieu": "Yaoundé" } ]
        }
      ]
    }
  ]
}"#;

fn write(dir: &Path, file: &str, content: &str) {
    let path = dir.join(file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create seed subdirectory");
    }
    fs::write(path, content).expect("write seed document");
}

fn mandatory_documents(dir: &Path) {
    write(dir, "organization.json", ORGANIZATION);
    write(dir, "geography.json", GEOGRAPHY);
}

#[test]
fn loads_mandatory_documents_only() {
    let tmp = tempdir().expect("temp dir");
    mandatory_documents(tmp.path());

    let catalog = SeedCatalog::load(tmp.path()).expect("catalogue loads");
    assert_eq!(catalog.organization.organization.code, "MINAT");
    assert_eq!(catalog.geography.regions.len(), 1);
    // Optional documents are tolerated when absent.
    assert!(catalog.templates.is_empty());
    assert!(catalog.corps.is_none());
    assert!(catalog.arrondissement_overrides("CE", "Mfoundi").is_none());
}

#[test]
fn missing_organization_is_fatal() {
    let tmp = tempdir().expect("temp dir");
    write(tmp.path(), "geography.json", GEOGRAPHY);

    let err = SeedCatalog::load(tmp.path()).expect_err("load must fail");
    assert!(matches!(err, SeedError::DataNotFound { name: "organization", .. }));
}

#[test]
fn missing_geography_is_fatal() {
    let tmp = tempdir().expect("temp dir");
    write(tmp.path(), "organization.json", ORGANIZATION);

    let err = SeedCatalog::load(tmp.path()).expect_err("load must fail");
    assert!(matches!(err, SeedError::DataNotFound { name: "geography", .. }));
}

#[test]
fn malformed_document_is_fatal() {
    let tmp = tempdir().expect("temp dir");
    mandatory_documents(tmp.path());
    write(tmp.path(), "organization.json", "{ not json");

    let err = SeedCatalog::load(tmp.path()).expect_err("load must fail");
    assert!(matches!(err, SeedError::Malformed { .. }));
}

#[test]
fn blank_root_is_rejected() {
    let tmp = tempdir().expect("temp dir");
    mandatory_documents(tmp.path());
    write(
        tmp.path(),
        "organization.json",
        r#"{ "organization": { "code": "  ", "name": "x", "type": "MINISTERE" } }"#,
    );

    let err = SeedCatalog::load(tmp.path()).expect_err("load must fail");
    assert!(matches!(err, SeedError::MissingRoot));
}

#[test]
fn template_documents_load_in_file_name_order() {
    let tmp = tempdir().expect("temp dir");
    mandatory_documents(tmp.path());
    write(
        tmp.path(),
        "templates/prefecture.json",
        r#"{ "code": "TPL-PREF", "name": "Préfecture", "appliesTo": "PREFECTURE", "version": "1.0.0" }"#,
    );
    write(
        tmp.path(),
        "templates/gouvernorat.json",
        r#"{ "code": "TPL-GOUV", "name": "Gouvernorat", "appliesTo": "GOUVERNORAT", "version": "1.0.0" }"#,
    );
    // Non-JSON files in the directory are ignored.
    write(tmp.path(), "templates/notes.txt", "scratch");

    let catalog = SeedCatalog::load(tmp.path()).expect("catalogue loads");
    let codes: Vec<_> = catalog.templates.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(codes, ["TPL-GOUV", "TPL-PREF"]);
}

#[test]
fn overrides_are_resolved_per_region_and_department() {
    let tmp = tempdir().expect("temp dir");
    mandatory_documents(tmp.path());
    write(
        tmp.path(),
        "arrondissements/CE.json",
        r#"{ "departments": { "Mfoundi": [
            { "name": "Yaoundé 1er", "chefLieu": "Yaoundé" },
            { "name": "Yaoundé 2ème", "chefLieu": "Yaoundé" }
        ] } }"#,
    );

    let catalog = SeedCatalog::load(tmp.path()).expect("catalogue loads");
    let overrides = catalog.arrondissement_overrides("CE", "Mfoundi").expect("override present");
    assert_eq!(overrides.len(), 2);
    assert_eq!(overrides[1].name, "Yaoundé 2ème");
    assert!(catalog.arrondissement_overrides("CE", "Haute-Sanaga").is_none());
    assert!(catalog.arrondissement_overrides("SU", "Mvila").is_none());
}

#[test]
fn builtin_catalogue_parses_and_validates() {
    let catalog = SeedCatalog::builtin().expect("embedded catalogue parses");

    assert_eq!(catalog.organization.organization.code, "MINAT");
    assert_eq!(catalog.geography.regions.len(), 10);
    assert_eq!(catalog.templates.len(), 3);
    assert!(catalog.corps.is_some());
    // The Far North override replaces Diamaré's single inline arrondissement.
    let diamare = catalog.arrondissement_overrides("EN", "Diamaré").expect("override present");
    assert_eq!(diamare.len(), 3);
}
