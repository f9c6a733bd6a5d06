use serde::{Deserialize, Serialize};

use crate::domain::a008_fleet::Driver;
use crate::domain::common::new_local_id;
use crate::shared::error::ValidationError;
use crate::usecases::common::{optional, require, require_phone};

/// Raw input of the driver onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverOnboardingForm {
    pub name: String,
    pub phone: String,
    pub license_number: String,
    /// Bus to assign, may be blank
    pub bus_id: String,
}

impl DriverOnboardingForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_phone("phone", &self.phone)?;
        require("license_number", &self.license_number)?;
        Ok(())
    }

    pub fn into_driver(self, school_id: &str) -> Result<Driver, ValidationError> {
        self.validate()?;
        Ok(Driver {
            id: new_local_id("drv"),
            school_id: school_id.to_string(),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            license_number: self.license_number.trim().to_uppercase(),
            bus_id: optional(&self.bus_id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_required() {
        let form = DriverOnboardingForm {
            name: "Ramesh".into(),
            phone: "9000033333".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Required("license_number"))
        );
    }

    #[test]
    fn test_into_driver() {
        let form = DriverOnboardingForm {
            name: "Ramesh".into(),
            phone: "9000033333".into(),
            license_number: "ap09 2020 0001".into(),
            bus_id: "bus-001".into(),
        };
        let driver = form.into_driver("sch-001").unwrap();
        assert_eq!(driver.license_number, "AP09 2020 0001");
        assert_eq!(driver.bus_id.as_deref(), Some("bus-001"));
    }
}
