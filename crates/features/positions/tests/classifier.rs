use sigrh_database::Database;
use sigrh_domain::position::{Position, PositionStatus};
use sigrh_domain::structure::{Structure, StructureKind};
use sigrh_domain::template::PositionTemplate;
use sigrh_kernel::bootstrap::Initializer;
use sigrh_positions::{ClassifierRules, PositionInitializer, classify_all};

fn seed_root(db: &Database) {
    db.structures()
        .insert(Structure::new(
            "MINAT",
            "Ministère de l'Administration Territoriale",
            StructureKind::Ministere,
        ))
        .unwrap();
}

fn child(db: &Database, code: &str, name: &str, kind: StructureKind, parent: &str) {
    db.structures().insert(Structure::new(code, name, kind).with_parent(parent)).unwrap();
}

#[test]
fn divisions_get_a_single_chef_de_division() {
    let db = Database::new();
    seed_root(&db);
    child(&db, "MINAT-SG", "Secrétariat Général", StructureKind::SecretariatGeneral, "MINAT");
    child(
        &db,
        "MINAT-SG-DAJ",
        "Division des Affaires Juridiques",
        StructureKind::Division,
        "MINAT-SG",
    );

    let created = classify_all(&db, &ClassifierRules::standard()).unwrap();

    // Three archetypes plus three seats, minister included.
    assert_eq!(created, 6);

    let seats: Vec<_> = db
        .positions()
        .all()
        .into_iter()
        .filter(|seat| seat.structure_code == "MINAT-SG-DAJ")
        .collect();
    assert_eq!(seats.len(), 1);
    assert_eq!(seats[0].code, "MINAT-SG-DAJ-CHEFDEDIVISION");
    assert_eq!(seats[0].title, "Chef de Division");
    assert_eq!(seats[0].template_code, "CHEFDEDIVISION");
    assert!(seats[0].managerial);
    assert_eq!(seats[0].status, PositionStatus::Vacant);
}

#[test]
fn counted_roles_expand_into_numbered_seats() {
    let db = Database::new();
    seed_root(&db);
    child(&db, "MINAT-IG", "Inspection Générale", StructureKind::InspectionGenerale, "MINAT");
    db.structures()
        .insert(
            Structure::new(
                "MINAT-IG-IGAT",
                "Inspection Générale de l'Administration Territoriale",
                StructureKind::Inspection,
            )
            .with_description(Some("Elle comprend 3 Inspecteurs."))
            .with_parent("MINAT-IG"),
        )
        .unwrap();

    classify_all(&db, &ClassifierRules::standard()).unwrap();

    assert!(db.positions().contains("MINAT-IG-IGAT-INSPECTEURGENERAL"));
    for seq in 1..=3u32 {
        let seat = db.positions().get(&format!("MINAT-IG-IGAT-INSPECTEUR-{seq}")).unwrap();
        assert_eq!(seat.title, format!("Inspecteur N°{seq}"));
        assert_eq!(seat.template_code, "INSPECTEUR");
        assert!(!seat.managerial);
    }
    // Leadership and staff archetypes are distinct rows.
    assert!(db.archetypes().contains("INSPECTEURGENERAL"));
    assert!(db.archetypes().contains("INSPECTEUR"));
}

#[test]
fn minister_seat_is_duplicated_onto_the_cabinet() {
    let db = Database::new();
    seed_root(&db);
    child(&db, "MINAT-CABINET", "Cabinet du Ministre", StructureKind::Cabinet, "MINAT");

    classify_all(&db, &ClassifierRules::standard()).unwrap();

    let on_root = db.positions().get("MINAT-MINISTRE").unwrap();
    let on_cabinet = db.positions().get("MINAT-CABINET-MINISTRE").unwrap();
    assert_eq!(on_root.title, "Ministre");
    assert_eq!(on_root.template_code, "MINISTRE");
    assert_eq!(on_cabinet.template_code, "MINISTRE");

    // One archetype backs both seats, next to the cabinet's own chief.
    assert_eq!(db.archetypes().count(), 2);
    assert!(db.archetypes().get("MINISTRE").unwrap().singleton);
    assert!(db.positions().contains("MINAT-CABINET-CHEFDECABINET"));
}

#[test]
fn genitive_count_phrases_singularize_per_word() {
    let db = Database::new();
    db.structures()
        .insert(
            Structure::new(
                "MINAT-SG-DAJ-CEJ",
                "Cellule des Études Juridiques",
                StructureKind::Service,
            )
            .with_description(Some("La cellule dispose de 2 Chargés d'Études Assistants."))
            .with_parent("MINAT-SG-DAJ"),
        )
        .unwrap();

    classify_all(&db, &ClassifierRules::standard()).unwrap();

    assert!(db.positions().contains("MINAT-SG-DAJ-CEJ-CHEFDECELLULE"));
    let first = db.positions().get("MINAT-SG-DAJ-CEJ-CHARGEDETUDESASSISTANT-1").unwrap();
    assert_eq!(first.title, "Chargé d'Études Assistant N°1");
    assert!(db.positions().contains("MINAT-SG-DAJ-CEJ-CHARGEDETUDESASSISTANT-2"));
}

#[test]
fn structures_with_template_seats_are_left_alone() {
    let db = Database::new();
    // A gouvernorat secretariat already seated by template replay.
    db.structures()
        .insert(
            Structure::new("GOUV-CE-SG", "Secrétariat Général", StructureKind::Service)
                .with_description(Some("Il comprend 2 Conseillers Techniques."))
                .with_parent("GOUV-CE"),
        )
        .unwrap();
    let archetype = PositionTemplate::staff("SGG", "Secrétaire Général du Gouvernorat");
    db.positions().insert(Position::from_archetype(&archetype, "GOUV-CE-SG", None)).unwrap();

    let created = classify_all(&db, &ClassifierRules::standard()).unwrap();

    // Neither the service rule nor the count phrase adds a second seat.
    assert_eq!(created, 0);
    assert_eq!(db.positions().count(), 1);
    assert!(db.archetypes().is_empty());
}

#[test]
fn unknown_count_keywords_create_nothing() {
    let db = Database::new();
    db.structures()
        .insert(
            Structure::new("MINAT-SP-BUR", "Bureau du Courrier", StructureKind::Service)
                .with_description(Some("Le bureau compte 2 Secrétaires Particuliers."))
                .with_parent("MINAT-SP"),
        )
        .unwrap();

    let created = classify_all(&db, &ClassifierRules::standard()).unwrap();

    assert_eq!(created, 0);
    assert!(db.positions().is_empty());
    assert!(db.archetypes().is_empty());
}

#[test]
fn reclassification_is_a_noop() {
    let db = Database::new();
    seed_root(&db);
    child(&db, "MINAT-SG", "Secrétariat Général", StructureKind::SecretariatGeneral, "MINAT");
    let rules = ClassifierRules::standard();

    let first = classify_all(&db, &rules).unwrap();
    assert!(first > 0);
    let counts = db.counts();

    assert_eq!(classify_all(&db, &rules).unwrap(), 0);
    assert_eq!(db.counts(), counts);
}

#[test]
fn initializer_guards_on_the_archetype_table() {
    let db = Database::new();
    seed_root(&db);
    let initializer = PositionInitializer::new(db.clone());

    assert!(!initializer.is_seeded());
    // The bare root yields the minister archetype and seat.
    assert_eq!(initializer.run().unwrap(), 2);
    assert!(initializer.is_seeded());
    assert!(db.positions().contains("MINAT-MINISTRE"));
}
