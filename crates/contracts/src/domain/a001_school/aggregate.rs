use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::system::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    #[default]
    Pending,
    NonCompliant,
}

impl ComplianceStatus {
    pub const ALL: [ComplianceStatus; 3] = [
        ComplianceStatus::Compliant,
        ComplianceStatus::Pending,
        ComplianceStatus::NonCompliant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Pending => "pending",
            ComplianceStatus::NonCompliant => "non_compliant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliance.compliant",
            ComplianceStatus::Pending => "compliance.pending",
            ComplianceStatus::NonCompliant => "compliance.non_compliant",
        }
    }
}

/// A tenant of the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
    pub name_te: String,
    /// Opaque image data URL; never decoded here
    pub logo: Option<String>,
    pub principal_name: String,
    pub principal_phone: String,
    pub principal_email: String,
    pub address: String,
    /// CSS colour, e.g. `"#1e6fd9"`
    pub brand_color: String,
    pub active_users: u32,
    pub compliance_status: ComplianceStatus,
}

impl School {
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Te if !self.name_te.is_empty() => &self.name_te,
            _ => &self.name,
        }
    }

    /// Case-insensitive match on either name or the address.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.name_te.contains(&query)
            || self.address.to_lowercase().contains(&query)
    }
}

impl Entity for School {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update: `Some` fields overwrite, `None` fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolPatch {
    pub name: Option<String>,
    pub name_te: Option<String>,
    /// `Some(None)` removes the logo
    pub logo: Option<Option<String>>,
    pub principal_name: Option<String>,
    pub principal_phone: Option<String>,
    pub principal_email: Option<String>,
    pub address: Option<String>,
    pub brand_color: Option<String>,
    pub active_users: Option<u32>,
    pub compliance_status: Option<ComplianceStatus>,
}

impl SchoolPatch {
    pub fn apply(self, school: &mut School) {
        if let Some(v) = self.name {
            school.name = v;
        }
        if let Some(v) = self.name_te {
            school.name_te = v;
        }
        if let Some(v) = self.logo {
            school.logo = v;
        }
        if let Some(v) = self.principal_name {
            school.principal_name = v;
        }
        if let Some(v) = self.principal_phone {
            school.principal_phone = v;
        }
        if let Some(v) = self.principal_email {
            school.principal_email = v;
        }
        if let Some(v) = self.address {
            school.address = v;
        }
        if let Some(v) = self.brand_color {
            school.brand_color = v;
        }
        if let Some(v) = self.active_users {
            school.active_users = v;
        }
        if let Some(v) = self.compliance_status {
            school.compliance_status = v;
        }
    }
}

/// Timestamp-based id for a school added from the UI. Two calls within the
/// same millisecond collide; acceptable for a single-user mock.
pub fn generate_school_id() -> String {
    format!("sch-{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school() -> School {
        School {
            id: "sch-100".to_string(),
            name: "Green Valley High".to_string(),
            name_te: "గ్రీన్ వ్యాలీ హై".to_string(),
            logo: None,
            principal_name: "K. Rao".to_string(),
            principal_phone: "+919800000000".to_string(),
            principal_email: "rao@gv.example".to_string(),
            address: "Road No. 12, Banjara Hills, Hyderabad".to_string(),
            brand_color: "#1e6fd9".to_string(),
            active_users: 10,
            compliance_status: ComplianceStatus::Compliant,
        }
    }

    #[test]
    fn test_matches_names_and_address() {
        let s = school();
        assert!(s.matches("valley"));
        assert!(s.matches("వ్యాలీ"));
        assert!(s.matches("BANJARA"));
        assert!(s.matches("  "));
        assert!(!s.matches("warangal"));
    }
}
