use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Principal,
    VicePrincipal,
    ClassTeacher,
    SubjectTeacher,
    FleetManager,
    Parent,
    Driver,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::SuperAdmin,
        Role::Principal,
        Role::VicePrincipal,
        Role::ClassTeacher,
        Role::SubjectTeacher,
        Role::FleetManager,
        Role::Parent,
        Role::Driver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Principal => "principal",
            Role::VicePrincipal => "vice_principal",
            Role::ClassTeacher => "class_teacher",
            Role::SubjectTeacher => "subject_teacher",
            Role::FleetManager => "fleet_manager",
            Role::Parent => "parent",
            Role::Driver => "driver",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Translation key for the role's display name.
    pub fn label_key(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "role.super_admin",
            Role::Principal => "role.principal",
            Role::VicePrincipal => "role.vice_principal",
            Role::ClassTeacher => "role.class_teacher",
            Role::SubjectTeacher => "role.subject_teacher",
            Role::FleetManager => "role.fleet_manager",
            Role::Parent => "role.parent",
            Role::Driver => "role.driver",
        }
    }

    /// Every role except the platform super admin belongs to one school.
    pub fn is_school_scoped(&self) -> bool {
        !matches!(self, Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_as_str() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("janitor"), None);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::VicePrincipal).unwrap();
        assert_eq!(json, "\"vice_principal\"");
    }
}
