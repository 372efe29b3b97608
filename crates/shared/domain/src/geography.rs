use serde::{Deserialize, Serialize};

/// Classification of an arrondissement.
///
/// Urban arrondissements are the numbered subdivisions of large cities
/// (`Yaoundé 1er`, `Douala 5ème`); everything else is `Normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum_macros::Display, strum_macros::EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrondissementCategory {
    Urbain,
    #[default]
    Normal,
}

/// One of the ten administrative regions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Two-letter region code (`CE`, `EN`, ...), the natural key.
    pub code: String,
    pub name: String,
    /// Alternate (English) name of the region, when it differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_name: Option<String>,
    pub chef_lieu: String,
}

impl Region {
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, chef_lieu: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into(), alt_name: None, chef_lieu: chef_lieu.into() }
    }

    #[must_use]
    pub fn with_alt_name(mut self, alt_name: Option<impl Into<String>>) -> Self {
        self.alt_name = alt_name.map(Into::into);
        self
    }
}

/// A department inside a region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Derived code `<regionCode>-<abbrev>` (`CE-MFOU`), the natural key.
    pub code: String,
    pub name: String,
    pub chef_lieu: String,
    pub region_code: String,
}

impl Department {
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        chef_lieu: impl Into<String>,
        region_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            chef_lieu: chef_lieu.into(),
            region_code: region_code.into(),
        }
    }
}

/// An arrondissement inside a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrondissement {
    /// Derived code `<departmentCode>-<abbrev>` (`CE-MFOU-YAOUN1`), the natural key.
    pub code: String,
    pub name: String,
    pub chef_lieu: String,
    pub department_code: String,
    pub category: ArrondissementCategory,
}

impl Arrondissement {
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        chef_lieu: impl Into<String>,
        department_code: impl Into<String>,
        category: ArrondissementCategory,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            chef_lieu: chef_lieu.into(),
            department_code: department_code.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_defaults_to_normal() {
        assert_eq!(ArrondissementCategory::default(), ArrondissementCategory::Normal);
    }

    #[test]
    fn category_serializes_screaming_snake() {
        let json = serde_json::to_string(&ArrondissementCategory::Urbain).unwrap();
        assert_eq!(json, "\"URBAIN\"");
    }

    #[test]
    fn region_builder_keeps_alt_name() {
        let region = Region::new("EN", "Extrême-Nord", "Maroua")
            .with_alt_name(Some("Far North"));
        assert_eq!(region.alt_name.as_deref(), Some("Far North"));
    }
}
