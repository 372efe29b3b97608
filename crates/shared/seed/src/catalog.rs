use crate::document::{
    ArrondissementDef, ArrondissementOverrides, CorpsDocument, GeographyDocument,
    OrganizationDocument, TemplateDocument,
};
use crate::error::SeedError;
use fxhash::FxHashMap;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const ORGANIZATION_FILE: &str = "organization.json";
const GEOGRAPHY_FILE: &str = "geography.json";
const CORPS_FILE: &str = "corps.json";
const TEMPLATES_DIR: &str = "templates";
const OVERRIDES_DIR: &str = "arrondissements";

/// Built-in documents baked into the binary, used when no seed directory is
/// configured.
mod builtin {
    pub(super) const ORGANIZATION: &str = include_str!("../data/organization.json");
    pub(super) const GEOGRAPHY: &str = include_str!("../data/geography.json");
    pub(super) const CORPS: &str = include_str!("../data/corps.json");
    pub(super) const TEMPLATES: &[(&str, &str)] = &[
        ("gouvernorat", include_str!("../data/templates/gouvernorat.json")),
        ("prefecture", include_str!("../data/templates/prefecture.json")),
        ("sous_prefecture", include_str!("../data/templates/sous_prefecture.json")),
    ];
    pub(super) const OVERRIDES: &[(&str, &str)] =
        &[("EN", include_str!("../data/arrondissements/EN.json"))];
}

/// The full set of parsed seed documents.
///
/// The catalogue is loaded once at startup and read-only afterwards; the
/// initializers never touch the filesystem themselves.
#[derive(Debug)]
pub struct SeedCatalog {
    pub organization: OrganizationDocument,
    pub geography: GeographyDocument,
    /// Template documents in deterministic (file name) order.
    pub templates: Vec<TemplateDocument>,
    /// Corps catalogue; seeding tolerates its absence.
    pub corps: Option<CorpsDocument>,
    overrides: FxHashMap<String, ArrondissementOverrides>,
}

impl SeedCatalog {
    /// Loads the catalogue from a seed directory.
    ///
    /// `organization.json` and `geography.json` are mandatory; template
    /// documents, the corps catalogue and per-region arrondissement
    /// overrides are optional.
    ///
    /// # Errors
    /// Returns [`SeedError::DataNotFound`] when a mandatory document is
    /// absent, [`SeedError::Malformed`] when a document does not match its
    /// schema and [`SeedError::MissingRoot`] when the organization tree has
    /// no usable root.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, SeedError> {
        let dir = dir.as_ref();

        let organization: OrganizationDocument =
            parse_required(&dir.join(ORGANIZATION_FILE), "organization")?;
        let geography: GeographyDocument = parse_required(&dir.join(GEOGRAPHY_FILE), "geography")?;
        let templates = load_templates(&dir.join(TEMPLATES_DIR))?;
        let corps = parse_optional(&dir.join(CORPS_FILE), "corps")?;
        let overrides = load_overrides(&dir.join(OVERRIDES_DIR), &geography)?;

        let catalog = Self { organization, geography, templates, corps, overrides };
        catalog.validate()?;

        info!(
            dir = %dir.display(),
            templates = catalog.templates.len(),
            regions = catalog.geography.regions.len(),
            corps = catalog.corps.is_some(),
            "Seed catalogue loaded"
        );
        Ok(catalog)
    }

    /// Parses the catalogue baked into the binary.
    ///
    /// # Errors
    /// Returns [`SeedError::Malformed`] only if the embedded documents are
    /// out of sync with their schemas.
    pub fn builtin() -> Result<Self, SeedError> {
        let organization = parse_str(builtin::ORGANIZATION, "organization")?;
        let geography = parse_str(builtin::GEOGRAPHY, "geography")?;
        let templates = builtin::TEMPLATES
            .iter()
            .map(|(name, raw)| parse_str(raw, name))
            .collect::<Result<Vec<_>, _>>()?;
        let corps = Some(parse_str(builtin::CORPS, "corps")?);
        let overrides = builtin::OVERRIDES
            .iter()
            .map(|(region, raw)| Ok(((*region).to_owned(), parse_str(raw, region)?)))
            .collect::<Result<FxHashMap<_, _>, SeedError>>()?;

        let catalog = Self { organization, geography, templates, corps, overrides };
        catalog.validate()?;

        debug!(
            templates = catalog.templates.len(),
            regions = catalog.geography.regions.len(),
            "Built-in seed catalogue parsed"
        );
        Ok(catalog)
    }

    /// The arrondissement override list for a department, if one exists.
    #[must_use]
    pub fn arrondissement_overrides(
        &self,
        region_code: &str,
        department_name: &str,
    ) -> Option<&[ArrondissementDef]> {
        self.overrides
            .get(region_code)
            .and_then(|doc| doc.departments.get(department_name))
            .map(Vec::as_slice)
    }

    fn validate(&self) -> Result<(), SeedError> {
        let root = &self.organization.organization;
        if root.code.trim().is_empty() || root.name.trim().is_empty() {
            return Err(SeedError::MissingRoot);
        }
        Ok(())
    }
}

fn parse_str<T: DeserializeOwned>(raw: &str, name: &str) -> Result<T, SeedError> {
    serde_json::from_str(raw)
        .map_err(|source| SeedError::Malformed { name: name.to_owned(), source })
}

fn read_file(path: &Path) -> Result<String, SeedError> {
    fs::read_to_string(path).map_err(|source| SeedError::Io { path: path.to_path_buf(), source })
}

fn parse_required<T: DeserializeOwned>(path: &Path, name: &'static str) -> Result<T, SeedError> {
    if !path.is_file() {
        return Err(SeedError::DataNotFound { name, path: path.to_path_buf() });
    }
    parse_str(&read_file(path)?, name)
}

fn parse_optional<T: DeserializeOwned>(path: &Path, name: &str) -> Result<Option<T>, SeedError> {
    if !path.is_file() {
        debug!(path = %path.display(), "Optional seed document absent");
        return Ok(None);
    }
    parse_str(&read_file(path)?, name).map(Some)
}

/// Reads every `*.json` under the templates directory, sorted by file name
/// so the seeding order never depends on directory iteration order.
fn load_templates(dir: &Path) -> Result<Vec<TemplateDocument>, SeedError> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "No templates directory, skipping template documents");
        return Ok(Vec::new());
    }

    let entries =
        fs::read_dir(dir).map_err(|source| SeedError::Io { path: dir.to_path_buf(), source })?;

    let mut paths: Vec<_> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| {
            let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("template").to_owned();
            parse_str(&read_file(path)?, &name)
        })
        .collect()
}

/// Loads `arrondissements/<REGION-CODE>.json` for every region declared in
/// the geography document. Absent files simply mean no override.
fn load_overrides(
    dir: &Path,
    geography: &GeographyDocument,
) -> Result<FxHashMap<String, ArrondissementOverrides>, SeedError> {
    let mut overrides = FxHashMap::default();
    if !dir.is_dir() {
        return Ok(overrides);
    }

    for region in &geography.regions {
        let path = dir.join(format!("{}.json", region.code));
        if let Some(doc) = parse_optional(&path, &region.code)? {
            debug!(region = %region.code, "Arrondissement overrides loaded");
            overrides.insert(region.code.clone(), doc);
        }
    }
    Ok(overrides)
}
