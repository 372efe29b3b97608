use crate::code;
use crate::template::{PositionTemplate, TemplatePosition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Occupancy state of a position seat. All seeded seats start vacant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum_macros::Display, strum_macros::EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    #[default]
    Vacant,
    Occupe,
}

/// A concrete position seat attached to a structure.
///
/// The code embeds the owning structure and the originating slot
/// (`<structureCode>-<slotCode>[-<seq>]`), which makes re-seeding
/// deterministic and duplicate-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub code: String,
    pub title: String,
    pub structure_code: String,
    /// Code of the template slot or archetype this seat derives from.
    pub template_code: String,
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
    pub status: PositionStatus,
    pub created_at: DateTime<Utc>,
}

impl Position {
    /// Creates a vacant seat from a template position slot.
    ///
    /// `seq` is `Some` for multi-headcount slots, numbering both the code
    /// and the title (`... N°2`). `template_code` is the flattened slot code
    /// (`TPL-GOUV-CAB-CC`), not the bare slot suffix.
    #[must_use]
    pub fn from_slot(
        slot: &TemplatePosition,
        template_code: impl Into<String>,
        structure_code: impl Into<String>,
        seq: Option<u32>,
    ) -> Self {
        let structure_code = structure_code.into();
        let (position_code, title) = match seq {
            Some(seq) => (
                code::numbered_position_code(&structure_code, &slot.code, seq),
                code::numbered_title(&slot.title, seq),
            ),
            None => (code::position_code(&structure_code, &slot.code), slot.title.clone()),
        };

        Self {
            code: position_code,
            title,
            structure_code,
            template_code: template_code.into(),
            rank: slot.rank.clone(),
            category: slot.category.clone(),
            corps: slot.corps.clone(),
            grade: slot.grade.clone(),
            nominative: slot.nominative,
            managerial: slot.managerial,
            status: PositionStatus::Vacant,
            created_at: Utc::now(),
        }
    }

    /// Creates a vacant seat from a standalone position archetype.
    #[must_use]
    pub fn from_archetype(
        archetype: &PositionTemplate,
        structure_code: impl Into<String>,
        seq: Option<u32>,
    ) -> Self {
        let structure_code = structure_code.into();
        let (position_code, title) = match seq {
            Some(seq) => (
                code::numbered_position_code(&structure_code, &archetype.code, seq),
                code::numbered_title(&archetype.title, seq),
            ),
            None => (code::position_code(&structure_code, &archetype.code), archetype.title.clone()),
        };

        Self {
            code: position_code,
            title,
            structure_code,
            template_code: archetype.code.clone(),
            rank: archetype.rank.clone(),
            category: archetype.category.clone(),
            corps: archetype.corps.clone(),
            grade: archetype.grade.clone(),
            nominative: archetype.nominative,
            managerial: archetype.managerial,
            status: PositionStatus::Vacant,
            created_at: Utc::now(),
        }
    }
}
