use crate::error::GeographyError;
use regex::Regex;
use sigrh_database::Database;
use sigrh_domain::code;
use sigrh_domain::geography::{Arrondissement, ArrondissementCategory, Department, Region};
use sigrh_domain::structure::{GeoLink, Structure, StructureKind};
use sigrh_seed::SeedCatalog;
use sigrh_seed::document::{ArrondissementDef, DepartmentDef, RegionDef};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Ordinal tokens of urban arrondissement names: `1er`, then `2ème`..`7ème`
/// in the `ème`/`eme`/`e` spellings.
static ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:1er|[2-7](?:ème|eme|e))\b").expect("ordinal pattern compiles")
});

/// Classifies an arrondissement by its name: an ordinal token marks the
/// numbered subdivisions of a city as [`ArrondissementCategory::Urbain`].
#[must_use]
pub fn classify(name: &str) -> ArrondissementCategory {
    if ORDINAL.is_match(name) {
        ArrondissementCategory::Urbain
    } else {
        ArrondissementCategory::Normal
    }
}

/// Seeds the three-level geographic referential with its administrative
/// twins.
///
/// Each geographic row is paired with a territorial command structure
/// (`GOUV-<regionCode>` under the ministry root, `PREF-<deptCode>` under the
/// gouvernorat, `SP-<arrCode>` under the préfecture) linked to its
/// counterpart through [`GeoLink`]. Every twin receives a best-effort
/// template replay.
///
/// Returns the number of rows created, replayed sub-structures and seats
/// included.
///
/// # Errors
/// Returns [`GeographyError::MissingMinistryRoot`] when no root structure
/// exists to attach the gouvernorats to, and [`GeographyError::Database`]
/// when a row cannot be persisted.
pub fn build_geography(db: &Database, catalog: &SeedCatalog) -> Result<u64, GeographyError> {
    let root =
        db.structures().first(Structure::is_root).ok_or(GeographyError::MissingMinistryRoot)?;

    let mut created = 0u64;
    for region in &catalog.geography.regions {
        created += build_region(db, catalog, region, &root.code)?;
    }
    Ok(created)
}

fn build_region(
    db: &Database,
    catalog: &SeedCatalog,
    def: &RegionDef,
    root_code: &str,
) -> Result<u64, GeographyError> {
    let region =
        Region::new(&def.code, &def.name, &def.chef_lieu).with_alt_name(def.region.clone());
    db.regions().insert(region)?;
    let mut created = 1u64;

    let twin_code = format!("GOUV-{}", def.code);
    let twin =
        Structure::new(&twin_code, format!("Gouvernorat {}", def.name), StructureKind::Gouvernorat)
            .with_parent(root_code)
            .with_geo(GeoLink::Region { code: def.code.clone() });
    db.structures().insert(twin.clone())?;
    created += 1 + replay(db, &twin);

    debug!(region = %def.code, departments = def.departments.len(), "Region seeded");

    for department in &def.departments {
        created += build_department(db, catalog, department, def, &twin_code)?;
    }
    Ok(created)
}

fn build_department(
    db: &Database,
    catalog: &SeedCatalog,
    def: &DepartmentDef,
    region: &RegionDef,
    gouvernorat_code: &str,
) -> Result<u64, GeographyError> {
    let department_code = code::child_code(
        &region.code,
        &code::letters_abbrev(&def.name, code::DEPARTMENT_ABBREV_LEN),
    );
    db.departments().insert(Department::new(
        &department_code,
        &def.name,
        &def.chef_lieu,
        &region.code,
    ))?;
    let mut created = 1u64;

    let twin_code = format!("PREF-{department_code}");
    let twin =
        Structure::new(&twin_code, format!("Préfecture {}", def.name), StructureKind::Prefecture)
            .with_parent(gouvernorat_code)
            .with_geo(GeoLink::Department { code: department_code.clone() });
    db.structures().insert(twin.clone())?;
    created += 1 + replay(db, &twin);

    let mut definitions = match catalog.arrondissement_overrides(&region.code, &def.name) {
        Some(overrides) => {
            debug!(department = %department_code, "Using arrondissement overrides");
            overrides.to_vec()
        }
        None => def.arrondissements.clone(),
    };

    let synthesized = definitions.is_empty();
    if synthesized {
        warn!(department = %department_code, "No arrondissement definitions, synthesizing default");
        definitions.push(ArrondissementDef {
            name: format!("{} 1er", def.chef_lieu),
            chef_lieu: def.chef_lieu.clone(),
        });
    }

    for arrondissement in &definitions {
        created +=
            build_arrondissement(db, arrondissement, &department_code, &twin_code, synthesized)?;
    }
    Ok(created)
}

fn build_arrondissement(
    db: &Database,
    def: &ArrondissementDef,
    department_code: &str,
    prefecture_code: &str,
    synthesized: bool,
) -> Result<u64, GeographyError> {
    let arrondissement_code = code::child_code(
        department_code,
        &code::alnum_abbrev(&def.name, code::ARRONDISSEMENT_ABBREV_LEN),
    );
    // The synthesized default carries an ordinal in its name but is not an
    // urban subdivision.
    let category = if synthesized { ArrondissementCategory::Normal } else { classify(&def.name) };
    db.arrondissements().insert(Arrondissement::new(
        &arrondissement_code,
        &def.name,
        &def.chef_lieu,
        department_code,
        category,
    ))?;
    let mut created = 1u64;

    let twin_code = format!("SP-{arrondissement_code}");
    let twin = Structure::new(
        &twin_code,
        format!("Sous-Préfecture {}", def.name),
        StructureKind::SousPrefecture,
    )
    .with_parent(prefecture_code)
    .with_geo(GeoLink::Arrondissement { code: arrondissement_code.clone() });
    db.structures().insert(twin.clone())?;
    created += 1 + replay(db, &twin);

    Ok(created)
}

/// Best-effort template replay; failures are logged here and never abort
/// the geographic walk.
fn replay(db: &Database, twin: &Structure) -> u64 {
    match sigrh_templates::instantiate(db, twin) {
        Ok(Some(stats)) => stats.total(),
        Ok(None) => 0,
        Err(err) => {
            warn!(structure = %twin.code, error = %err, "Template replay failed, continuing");
            0
        }
    }
}
