use contracts::domain::common::SchoolScoped;

/// Records the signed-in user may see: their own school's, or everything for
/// platform staff without a school.
pub fn visible_to<T: SchoolScoped + Clone>(school_id: Option<&str>, items: &[T]) -> Vec<T> {
    match school_id {
        Some(id) => items.iter().filter(|i| i.school_id() == id).cloned().collect(),
        None => items.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures;

    #[test]
    fn test_school_users_see_own_records() {
        let data = fixtures::sample_data();
        let own = visible_to(Some("sch-002"), &data.students);
        assert!(!own.is_empty());
        assert!(own.iter().all(|s| s.school_id == "sch-002"));
    }

    #[test]
    fn test_platform_staff_see_everything() {
        let data = fixtures::sample_data();
        assert_eq!(visible_to(None, &data.students).len(), data.students.len());
    }
}
