use crate::structure::StructureKind;
use serde::{Deserialize, Serialize};

const fn default_count() -> u32 {
    1
}

/// A position slot inside an organizational template.
///
/// `count` above one expands into numbered seats at instantiation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatePosition {
    pub code: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default)]
    pub nominative: bool,
    #[serde(default)]
    pub managerial: bool,
    #[serde(default = "default_count")]
    pub count: u32,
}

/// A sub-structure inside an organizational template, recursively nested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateNode {
    /// Suffix appended to the instantiation target's code (`CAB`, `SAG`).
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: StructureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<TemplatePosition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_services: Vec<TemplateNode>,
}

/// A reusable organizational blueprint for one structure kind.
///
/// Replaying the template onto a target structure creates the whole
/// sub-tree of `sub_structures` plus all declared position seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationalTemplate {
    pub code: String,
    pub name: String,
    pub applies_to: StructureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_level_positions: Vec<TemplatePosition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_structures: Vec<TemplateNode>,
}

impl OrganizationalTemplate {
    /// Total number of position slots declared by the template,
    /// multi-headcount slots counted once.
    #[must_use]
    pub fn declared_slots(&self) -> usize {
        fn nested(node: &TemplateNode) -> usize {
            node.positions.len() + node.sub_services.iter().map(nested).sum::<usize>()
        }
        self.top_level_positions.len() + self.sub_structures.iter().map(nested).sum::<usize>()
    }
}

/// A flattened position slot of an organizational template, one row per
/// declared slot, addressable by its own code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationalPositionTemplate {
    /// Template-scoped slot code (`TPL-GOUV-CAB-CC`), the natural key.
    pub code: String,
    /// Code of the owning organizational template.
    pub template_code: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub nominative: bool,
    pub managerial: bool,
    pub count: u32,
}

/// A standalone position archetype, independent of any organizational
/// template.
///
/// The position classifier materializes these on the fly for rule-derived
/// positions (`Directeur`, `Chef de Service`) and reuses them across
/// structures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionTemplate {
    pub code: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub nominative: bool,
    pub managerial: bool,
    /// At most one seat of this archetype per structure.
    pub singleton: bool,
    /// Structure kinds this archetype may be attached to; empty means any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applies_to: Vec<StructureKind>,
}

impl PositionTemplate {
    /// Creates a managerial singleton archetype, the common case for
    /// rule-derived leadership positions.
    #[must_use]
    pub fn leadership(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            rank: None,
            category: None,
            corps: None,
            grade: None,
            nominative: true,
            managerial: true,
            singleton: true,
            applies_to: Vec::new(),
        }
    }

    /// Creates a non-singleton staff archetype with a plain seat.
    #[must_use]
    pub fn staff(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            rank: None,
            category: None,
            corps: None,
            grade: None,
            nominative: false,
            managerial: false,
            singleton: false,
            applies_to: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn applies_to(mut self, kinds: impl IntoIterator<Item = StructureKind>) -> Self {
        self.applies_to = kinds.into_iter().collect();
        self
    }
}
