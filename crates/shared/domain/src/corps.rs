use serde::{Deserialize, Serialize};

/// A professional corps of the civil service (corps de métier).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpsMetier {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Acronym of the ministry managing this corps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ministere: Option<String>,
}

/// A grade ladder step inside a corps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub code: String,
    pub name: String,
    /// Rank of the grade inside its corps ladder, 1 being the entry step.
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Code of the corps this grade belongs to.
    pub corps_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grade_deserializes_camel_case() {
        let raw = json!({
            "code": "AC-ACP",
            "name": "Administrateur Civil Principal",
            "level": 2,
            "category": "A2",
            "corpsCode": "AC"
        });

        let grade: Grade = serde_json::from_value(raw).unwrap();
        assert_eq!(grade.corps_code, "AC");
        assert_eq!(grade.level, 2);
        assert!(grade.description.is_none());
    }
}
