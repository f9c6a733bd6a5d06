use serde::Deserialize;

use crate::domain::a007_timetable::Weekday;
use crate::system::i18n::Locale;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub ui: UiConfig,
    pub timetable: TimetableConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    /// Number of digits the (unverified) one-time code must have
    pub otp_length: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub default_locale: Locale,
    pub app_title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimetableConfig {
    pub periods_per_day: u8,
    pub school_days: Vec<Weekday>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[auth]
otp_length = 6

[ui]
default_locale = "en"
app_title = "SchoolHub"

[timetable]
periods_per_day = 8
school_days = ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday"]
"#;

/// Load the embedded configuration.
pub fn load_config() -> anyhow::Result<AppConfig> {
    parse_config(DEFAULT_CONFIG)
}

/// Parse and validate a TOML configuration document.
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

impl AppConfig {
    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.auth.otp_length > 0, "auth.otp_length must be positive");
        anyhow::ensure!(
            (1..=12).contains(&self.timetable.periods_per_day),
            "timetable.periods_per_day must be within 1..=12, got {}",
            self.timetable.periods_per_day
        );
        anyhow::ensure!(
            !self.timetable.school_days.is_empty(),
            "timetable.school_days must not be empty"
        );
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            ui: UiConfig {
                default_locale: Locale::En,
                app_title: "SchoolHub".to_string(),
            },
            timetable: TimetableConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { otp_length: 6 }
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            periods_per_day: 8,
            school_days: Weekday::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.auth.otp_length, 6);
        assert_eq!(config.ui.default_locale, Locale::En);
        assert_eq!(config.timetable.periods_per_day, 8);
        assert_eq!(config.timetable.school_days.len(), 6);
    }

    #[test]
    fn test_embedded_config_matches_default() {
        assert_eq!(load_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_rejects_zero_periods() {
        let text = DEFAULT_CONFIG.replace("periods_per_day = 8", "periods_per_day = 0");
        assert!(parse_config(&text).is_err());
    }

    #[test]
    fn test_telugu_default_locale() {
        let text = DEFAULT_CONFIG.replace("default_locale = \"en\"", "default_locale = \"te\"");
        let config = parse_config(&text).unwrap();
        assert_eq!(config.ui.default_locale, Locale::Te);
    }
}
