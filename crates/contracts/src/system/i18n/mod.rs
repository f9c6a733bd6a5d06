//! Two-locale string table. Lookups never fail: a missing key is returned
//! as-is so the UI always has something to show.

mod dictionary;

use serde::{Deserialize, Serialize};

pub use dictionary::keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Te,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Te => "te",
        }
    }

    /// The other supported locale.
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::En => Locale::Te,
            Locale::Te => Locale::En,
        }
    }

    /// Name of the locale written in itself, for the language switch.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Te => "తెలుగు",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_language(&mut self) {
        self.locale = self.locale.toggled();
        log::debug!("locale switched to {}", self.locale.as_str());
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match dictionary::lookup(key) {
            Some(entry) => match self.locale {
                Locale::En => entry.en,
                Locale::Te => entry.te,
            },
            None => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_in_both_locales() {
        let mut tr = Translator::new(Locale::En);
        assert_eq!(tr.t("nav.dashboard"), "Dashboard");
        tr.toggle_language();
        assert_eq!(tr.locale(), Locale::Te);
        assert_eq!(tr.t("nav.dashboard"), "డ్యాష్‌బోర్డ్");
    }

    #[test]
    fn test_missing_key_returned_verbatim() {
        for locale in [Locale::En, Locale::Te] {
            assert_eq!(Translator::new(locale).t("nonexistent.key"), "nonexistent.key");
        }
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut tr = Translator::default();
        tr.toggle_language();
        tr.toggle_language();
        assert_eq!(tr.locale(), Locale::En);
    }

    #[test]
    fn test_every_key_translated() {
        let en = Translator::new(Locale::En);
        let te = Translator::new(Locale::Te);
        for key in keys() {
            assert!(!en.t(key).is_empty(), "{key}");
            assert!(!te.t(key).is_empty(), "{key}");
            assert_ne!(en.t(key), key, "{key} falls through in en");
        }
    }
}
