use super::aggregate::{School, SchoolPatch};

/// In-memory list of schools. Sole owner of `School` records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolDirectory {
    schools: Vec<School>,
}

impl SchoolDirectory {
    pub fn new(schools: Vec<School>) -> Self {
        Self { schools }
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    /// Appends `school`. Id uniqueness is the caller's responsibility.
    pub fn add_school(&mut self, school: School) {
        if self.get_school_by_id(&school.id).is_some() {
            log::warn!("school id {} added twice; lookups return the first", school.id);
        }
        log::info!("school added: {}", school.id);
        self.schools.push(school);
    }

    /// Shallow merge onto the matching school; unknown ids are ignored.
    pub fn update_school(&mut self, id: &str, patch: SchoolPatch) {
        match self.schools.iter_mut().find(|s| s.id == id) {
            Some(school) => {
                patch.apply(school);
                log::info!("school updated: {}", id);
            }
            None => log::debug!("update of unknown school {} ignored", id),
        }
    }

    /// Removes the school; unknown ids are ignored.
    pub fn delete_school(&mut self, id: &str) {
        let before = self.schools.len();
        self.schools.retain(|s| s.id != id);
        if self.schools.len() < before {
            log::info!("school deleted: {}", id);
        }
    }

    pub fn get_school_by_id(&self, id: &str) -> Option<&School> {
        self.schools.iter().find(|s| s.id == id)
    }

    pub fn search(&self, query: &str) -> Vec<&School> {
        self.schools.iter().filter(|s| s.matches(query)).collect()
    }

    pub fn total_active_users(&self) -> u64 {
        self.schools.iter().map(|s| u64::from(s.active_users)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_school::{generate_school_id, ComplianceStatus};
    use crate::fixtures;

    fn sample(id: &str) -> School {
        School {
            id: id.to_string(),
            name: "Green Valley High School".to_string(),
            name_te: "గ్రీన్ వ్యాలీ హైస్కూల్".to_string(),
            logo: None,
            principal_name: "K. Sarada".to_string(),
            principal_phone: "+919800000001".to_string(),
            principal_email: "principal@greenvalley.edu".to_string(),
            address: "Guntur, Andhra Pradesh".to_string(),
            brand_color: "#2e7d32".to_string(),
            active_users: 0,
            compliance_status: ComplianceStatus::Pending,
        }
    }

    #[test]
    fn test_add_then_get_returns_equal_school() {
        let mut dir = SchoolDirectory::new(fixtures::schools());
        let school = sample(&generate_school_id());
        dir.add_school(school.clone());
        assert_eq!(dir.get_school_by_id(&school.id), Some(&school));
    }

    #[test]
    fn test_delete_then_get_returns_none() {
        let mut dir = SchoolDirectory::default();
        dir.add_school(sample("sch-900"));
        dir.delete_school("sch-900");
        assert_eq!(dir.get_school_by_id("sch-900"), None);
        assert!(dir.is_empty());
    }

    #[test]
    fn test_update_merges_only_given_fields() {
        let mut dir = SchoolDirectory::default();
        dir.add_school(sample("sch-900"));
        dir.update_school(
            "sch-900",
            SchoolPatch {
                active_users: Some(42),
                compliance_status: Some(ComplianceStatus::Compliant),
                ..Default::default()
            },
        );
        let school = dir.get_school_by_id("sch-900").unwrap();
        assert_eq!(school.active_users, 42);
        assert_eq!(school.compliance_status, ComplianceStatus::Compliant);
        assert_eq!(school.name, "Green Valley High School");
    }

    #[test]
    fn test_patch_can_remove_logo() {
        let mut school = sample("sch-900");
        school.logo = Some("data:image/png;base64,AAAA".to_string());
        SchoolPatch {
            logo: Some(None),
            ..Default::default()
        }
        .apply(&mut school);
        assert_eq!(school.logo, None);
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let mut dir = SchoolDirectory::new(fixtures::schools());
        let before = dir.clone();
        dir.update_school(
            "missing",
            SchoolPatch {
                name: Some("x".to_string()),
                ..Default::default()
            },
        );
        dir.delete_school("missing");
        assert_eq!(dir, before);
    }

    #[test]
    fn test_search_and_totals() {
        let dir = SchoolDirectory::new(fixtures::schools());
        assert_eq!(dir.search("").len(), dir.len());
        assert!(dir.search("no such school anywhere").is_empty());
        let expected: u64 = fixtures::schools().iter().map(|s| s.active_users as u64).sum();
        assert_eq!(dir.total_active_users(), expected);
    }
}
