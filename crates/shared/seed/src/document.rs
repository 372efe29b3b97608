//! Serde schemas of the seed documents.
//!
//! All documents are camelCase JSON. Template documents reuse the domain's
//! [`TemplatePosition`]/[`TemplateNode`] types directly, so a parsed document
//! converts into its [`OrganizationalTemplate`] record without re-mapping.

use serde::Deserialize;
use sigrh_domain::structure::StructureKind;
use sigrh_domain::template::{OrganizationalTemplate, TemplateNode, TemplatePosition};

/// Root document of the organizational tree (`organization.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDocument {
    pub organization: StructureDef,
}

/// A node definition of the raw organizational tree.
///
/// Codes are explicit full codes (`MINAT-SG-DAJ`), not parent-relative
/// suffixes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureDef {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StructureKind,
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered children, preserved as authored.
    #[serde(default)]
    pub structures: Vec<StructureDef>,
}

impl StructureDef {
    /// Number of nodes in this definition sub-tree, itself included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.structures.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Geographic referential document (`geography.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographyDocument {
    pub regions: Vec<RegionDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDef {
    pub code: String,
    pub name: String,
    /// Alternate (English) name, absent when identical to `name`.
    #[serde(default)]
    pub region: Option<String>,
    pub chef_lieu: String,
    #[serde(default)]
    pub departments: Vec<DepartmentDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDef {
    pub name: String,
    pub chef_lieu: String,
    #[serde(default)]
    pub arrondissements: Vec<ArrondissementDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrondissementDef {
    pub name: String,
    pub chef_lieu: String,
}

/// Per-region arrondissement override document
/// (`arrondissements/<REGION-CODE>.json`), keyed by department name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrondissementOverrides {
    pub departments: fxhash::FxHashMap<String, Vec<ArrondissementDef>>,
}

/// A reusable organizational template document (`templates/*.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    pub code: String,
    pub name: String,
    pub applies_to: StructureKind,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    #[serde(default)]
    pub top_level_positions: Vec<TemplatePosition>,
    #[serde(default)]
    pub sub_structures: Vec<TemplateNode>,
    /// Free-form annotations (source decree, family), not persisted.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl From<TemplateDocument> for OrganizationalTemplate {
    fn from(doc: TemplateDocument) -> Self {
        Self {
            code: doc.code,
            name: doc.name,
            applies_to: doc.applies_to,
            description: doc.description,
            version: doc.version,
            top_level_positions: doc.top_level_positions,
            sub_structures: doc.sub_structures,
        }
    }
}

/// Corps catalogue document (`corps.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpsDocument {
    pub corps_metiers: Vec<CorpsDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpsDef {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub ministere: Option<String>,
    #[serde(default)]
    pub grades: Vec<GradeDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDef {
    pub code: String,
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structure_def_counts_nodes() {
        let raw = json!({
            "code": "MINAT",
            "name": "Ministère de l'Administration Territoriale",
            "type": "MINISTERE",
            "structures": [
                { "code": "MINAT-SG", "name": "Secrétariat Général", "type": "SECRETARIAT_GENERAL",
                  "structures": [
                      { "code": "MINAT-SG-DAJ", "name": "Division des Affaires Juridiques", "type": "DIVISION" }
                  ] },
                { "code": "MINAT-CABINET", "name": "Cabinet du Ministre", "type": "CABINET" }
            ]
        });

        let def: StructureDef = serde_json::from_value(raw).unwrap();
        assert_eq!(def.node_count(), 4);
        assert_eq!(def.structures[0].structures[0].kind, StructureKind::Division);
    }

    #[test]
    fn template_document_converts_to_record() {
        let raw = json!({
            "code": "TPL-SP",
            "name": "Organisation type d'une Sous-Préfecture",
            "appliesTo": "SOUS_PREFECTURE",
            "version": "1.0.0",
            "topLevelPositions": [
                { "code": "SPREF", "title": "Sous-Préfet", "nominative": true, "managerial": true }
            ],
            "metadata": { "source": "décret" }
        });

        let doc: TemplateDocument = serde_json::from_value(raw).unwrap();
        assert!(doc.metadata.is_some());

        let record = OrganizationalTemplate::from(doc);
        assert_eq!(record.code, "TPL-SP");
        assert_eq!(record.applies_to, StructureKind::SousPrefecture);
        assert_eq!(record.top_level_positions.len(), 1);
    }

    #[test]
    fn overrides_are_keyed_by_department_name() {
        let raw = json!({
            "departments": {
                "Diamaré": [
                    { "name": "Maroua 1er", "chefLieu": "Maroua" },
                    { "name": "Maroua 2ème", "chefLieu": "Maroua" }
                ]
            }
        });

        let overrides: ArrondissementOverrides = serde_json::from_value(raw).unwrap();
        assert_eq!(overrides.departments["Diamaré"].len(), 2);
    }
}
