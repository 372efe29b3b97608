use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Administrative nature of a structure node.
///
/// Covers both central services (ministry, directions, services) and
/// deconcentrated territorial commands (gouvernorat, préfecture,
/// sous-préfecture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum_macros::Display, strum_macros::EnumString, strum_macros::AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StructureKind {
    Ministere,
    Cabinet,
    SecretariatGeneral,
    InspectionGenerale,
    Inspection,
    Direction,
    Division,
    SousDirection,
    Service,
    Cellule,
    Gouvernorat,
    Prefecture,
    SousPrefecture,
}

impl StructureKind {
    /// Returns `true` for the three deconcentrated command echelons.
    #[must_use]
    pub const fn is_territorial(self) -> bool {
        matches!(self, Self::Gouvernorat | Self::Prefecture | Self::SousPrefecture)
    }
}

/// Link from a structure node to the geographic unit it administers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeoLink {
    Region { code: String },
    Department { code: String },
    Arrondissement { code: String },
}

impl GeoLink {
    /// The code of the linked geographic unit, regardless of level.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Region { code } | Self::Department { code } | Self::Arrondissement { code } => {
                code
            }
        }
    }
}

/// A node of the administrative organization tree.
///
/// Structures form a single tree rooted at the ministry. The `code` is the
/// natural key; children reference their parent through `parent_code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    pub code: String,
    pub name: String,
    pub kind: StructureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLink>,
    pub active: bool,
    /// Aggregate cache of occupied position seats under this node.
    pub occupied_positions: u32,
    /// Aggregate cache of vacant position seats under this node.
    pub vacant_positions: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Structure {
    /// Creates an active structure with empty position counters.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: StructureKind) -> Self {
        let now = Utc::now();
        Self {
            code: code.into(),
            name: name.into(),
            kind,
            description: None,
            parent_code: None,
            geo: None,
            active: true,
            occupied_positions: 0,
            vacant_positions: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = description.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent_code: impl Into<String>) -> Self {
        self.parent_code = Some(parent_code.into());
        self
    }

    #[must_use]
    pub fn with_geo(mut self, geo: GeoLink) -> Self {
        self.geo = Some(geo);
        self
    }

    /// Returns `true` for the tree root (the ministry itself).
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_code.is_none()
    }

    /// The last dash-separated segment of the structure code.
    ///
    /// For `MINAT-SG-DAJ` this is `DAJ`. Used by code-based classification.
    #[must_use]
    pub fn code_suffix(&self) -> &str {
        self.code.rsplit('-').next().unwrap_or(&self.code)
    }
}
