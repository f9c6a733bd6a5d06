use crate::shared::error::ValidationError;

/// Trimmed value of a required field.
pub fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(value.to_string())
}

/// Required phone number with at least 10 digits; `+`, spaces and dashes
/// are allowed. Returns the trimmed input.
pub fn require_phone(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = require(field, value)?;
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-'));
    if digits < 10 || !allowed {
        return Err(ValidationError::InvalidPhone(field));
    }
    Ok(value)
}

/// `None` for blank input.
pub fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trims() {
        assert_eq!(require("name", "  Ravi "), Ok("Ravi".to_string()));
        assert_eq!(require("name", "   "), Err(ValidationError::Required("name")));
    }

    #[test]
    fn test_phone_rules() {
        assert!(require_phone("phone", "+91 98765-43210").is_ok());
        assert!(require_phone("phone", "9876543210").is_ok());
        assert_eq!(
            require_phone("phone", "12345"),
            Err(ValidationError::InvalidPhone("phone"))
        );
        assert_eq!(
            require_phone("phone", "98765x43210"),
            Err(ValidationError::InvalidPhone("phone"))
        );
        assert_eq!(require_phone("phone", ""), Err(ValidationError::Required("phone")));
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(" "), None);
        assert_eq!(optional(" x "), Some("x".to_string()));
    }
}
