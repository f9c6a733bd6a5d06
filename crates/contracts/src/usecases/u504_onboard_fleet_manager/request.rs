use serde::{Deserialize, Serialize};

use crate::domain::common::new_local_id;
use crate::shared::error::ValidationError;
use crate::system::auth::{Role, User};
use crate::usecases::common::{require, require_phone};

/// Raw input of the fleet manager onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetManagerOnboardingForm {
    pub name: String,
    pub name_te: String,
    pub phone: String,
    pub staff_id: String,
}

impl FleetManagerOnboardingForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_phone("phone", &self.phone)?;
        require("staff_id", &self.staff_id)?;
        Ok(())
    }

    /// Login account for the new fleet manager.
    pub fn into_user(self, school_id: &str) -> Result<User, ValidationError> {
        self.validate()?;
        Ok(User {
            id: new_local_id("usr"),
            name: self.name.trim().to_string(),
            name_te: self.name_te.trim().to_string(),
            role: Role::FleetManager,
            phone: self.phone.trim().to_string(),
            school_id: Some(school_id.to_string()),
            staff_id: Some(self.staff_id.trim().to_string()),
            class_id: None,
            subject: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_user_is_fleet_manager() {
        let form = FleetManagerOnboardingForm {
            name: "Kiran".into(),
            name_te: String::new(),
            phone: "+919000022222".into(),
            staff_id: "FM-02".into(),
        };
        let user = form.into_user("sch-003").unwrap();
        assert_eq!(user.role, Role::FleetManager);
        assert_eq!(user.school_id.as_deref(), Some("sch-003"));
    }

    #[test]
    fn test_staff_id_required() {
        let form = FleetManagerOnboardingForm {
            name: "Kiran".into(),
            phone: "+919000022222".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::Required("staff_id")));
    }
}
