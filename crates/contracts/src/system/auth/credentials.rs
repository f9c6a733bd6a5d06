use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::system::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub name_te: String,
    pub role: Role,
    pub phone: String,
    /// None only for the platform super admin
    pub school_id: Option<String>,
    pub staff_id: Option<String>,
    pub class_id: Option<String>,
    pub subject: Option<String>,
}

impl User {
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.name,
            Locale::Te if !self.name_te.is_empty() => &self.name_te,
            Locale::Te => &self.name,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    name_te: &str,
    role: Role,
    phone: &str,
    school_id: Option<&str>,
    staff_id: Option<&str>,
    class_id: Option<&str>,
    subject: Option<&str>,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        name_te: name_te.to_string(),
        role,
        phone: phone.to_string(),
        school_id: school_id.map(str::to_string),
        staff_id: staff_id.map(str::to_string),
        class_id: class_id.map(str::to_string),
        subject: subject.map(str::to_string),
    }
}

/// Fixed test credentials, documented on the login page.
static TEST_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user(
            "usr-001",
            "Anil Kumar",
            "అనిల్ కుమార్",
            Role::SuperAdmin,
            "+919999999999",
            None,
            None,
            None,
            None,
        ),
        user(
            "usr-002",
            "Lakshmi Devi",
            "లక్ష్మీ దేవి",
            Role::Principal,
            "+919876543210",
            Some("sch-001"),
            Some("EMP-1001"),
            None,
            None,
        ),
        user(
            "usr-003",
            "Ravi Shankar",
            "రవి శంకర్",
            Role::VicePrincipal,
            "+919876543211",
            Some("sch-001"),
            Some("EMP-1002"),
            None,
            None,
        ),
        user(
            "usr-004",
            "Padma Rao",
            "పద్మ రావు",
            Role::ClassTeacher,
            "+919876543212",
            Some("sch-001"),
            Some("EMP-1010"),
            Some("cls-008-a"),
            Some("Mathematics"),
        ),
        user(
            "usr-005",
            "Suresh Babu",
            "సురేష్ బాబు",
            Role::SubjectTeacher,
            "+919876543213",
            Some("sch-001"),
            Some("EMP-1011"),
            None,
            Some("Science"),
        ),
        user(
            "usr-006",
            "Venkat Reddy",
            "వెంకట్ రెడ్డి",
            Role::FleetManager,
            "+919876543214",
            Some("sch-001"),
            Some("EMP-1050"),
            None,
            None,
        ),
        user(
            "usr-007",
            "Srinivas Varma",
            "శ్రీనివాస్ వర్మ",
            Role::Parent,
            "+919876543215",
            Some("sch-001"),
            None,
            Some("cls-008-a"),
            None,
        ),
        user(
            "usr-008",
            "Ramesh Naidu",
            "రమేష్ నాయుడు",
            Role::Driver,
            "+919876543216",
            Some("sch-001"),
            Some("DRV-2001"),
            None,
            None,
        ),
    ]
});

pub fn test_users() -> &'static [User] {
    &TEST_USERS
}

pub fn find_by_phone(phone: &str) -> Option<&'static User> {
    TEST_USERS.iter().find(|u| u.phone == phone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_role_has_a_test_user() {
        let roles: HashSet<Role> = test_users().iter().map(|u| u.role).collect();
        assert_eq!(roles.len(), Role::ALL.len());
    }

    #[test]
    fn test_phones_are_unique() {
        let phones: HashSet<&str> = test_users().iter().map(|u| u.phone.as_str()).collect();
        assert_eq!(phones.len(), test_users().len());
    }

    #[test]
    fn test_only_super_admin_is_unscoped() {
        for u in test_users() {
            assert_eq!(u.school_id.is_some(), u.role.is_school_scoped(), "{}", u.id);
        }
    }

    #[test]
    fn test_display_name_per_locale() {
        let admin = find_by_phone("+919999999999").unwrap();
        assert_eq!(admin.display_name(Locale::En), "Anil Kumar");
        assert_eq!(admin.display_name(Locale::Te), "అనిల్ కుమార్");
    }
}
