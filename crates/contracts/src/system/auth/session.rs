use super::credentials::{find_by_phone, User};
use super::role::Role;
use crate::domain::a001_school::School;
use crate::shared::config::AuthConfig;
use crate::shared::error::AuthError;

/// Current session. `None` user means only the login page is reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    user: Option<User>,
    otp_length: usize,
}

impl SessionStore {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            user: None,
            otp_length: config.otp_length,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Looks the phone up in the test-credential table. The one-time code is
    /// only checked for shape, never verified.
    ///
    /// `schools` is consulted for a tenant diagnostic only: a scoped user
    /// whose school is missing from the directory is still admitted.
    pub fn try_login(
        &mut self,
        phone: &str,
        otp: &str,
        schools: &[School],
    ) -> Result<&User, AuthError> {
        let phone = phone.trim();
        if !is_well_formed_otp(otp, self.otp_length) {
            return Err(AuthError::InvalidOtp {
                expected: self.otp_length,
            });
        }

        let user = find_by_phone(phone)
            .cloned()
            .ok_or_else(|| AuthError::UnknownPhone(phone.to_string()))?;

        if let Some(school_id) = user.school_id.as_deref() {
            if !schools.iter().any(|s| s.id == school_id) {
                log::warn!(
                    "user {} is scoped to school {} which is not in the directory",
                    user.id,
                    school_id
                );
            }
        }

        log::info!("session started for {} ({})", user.id, user.role);
        Ok(self.user.insert(user))
    }

    /// Boolean form of [`SessionStore::try_login`]; on failure the session is
    /// left as it was.
    pub fn login(&mut self, phone: &str, otp: &str, schools: &[School]) -> bool {
        match self.try_login(phone, otp, schools) {
            Ok(_) => true,
            Err(e) => {
                log::info!("login rejected: {}", e);
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("session ended for {}", user.id);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

fn is_well_formed_otp(otp: &str, length: usize) -> bool {
    let otp = otp.trim();
    otp.len() == length && otp.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_super_admin_login() {
        let schools = fixtures::schools();
        let mut session = SessionStore::default();
        assert!(session.login("+919999999999", "123456", &schools));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::SuperAdmin));
    }

    #[test]
    fn test_unknown_phone_is_rejected() {
        let schools = fixtures::schools();
        let mut session = SessionStore::default();
        assert!(!session.login("+910000000000", "123456", &schools));
        assert!(!session.is_authenticated());
        assert_eq!(
            session.try_login("+910000000000", "123456", &schools),
            Err(AuthError::UnknownPhone("+910000000000".to_string()))
        );
    }

    #[test]
    fn test_any_six_digits_accepted() {
        let schools = fixtures::schools();
        for otp in ["000000", "987654", " 111111 "] {
            let mut session = SessionStore::default();
            assert!(session.login("+919876543210", otp, &schools), "otp {otp:?}");
            assert_eq!(session.role(), Some(Role::Principal));
        }
    }

    #[test]
    fn test_malformed_otp_rejected() {
        let schools = fixtures::schools();
        let mut session = SessionStore::default();
        for otp in ["", "12345", "1234567", "12a456"] {
            assert_eq!(
                session.try_login("+919999999999", otp, &schools),
                Err(AuthError::InvalidOtp { expected: 6 })
            );
        }
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_phone_is_trimmed() {
        let mut session = SessionStore::default();
        assert!(session.login("  +919876543212 ", "123456", &fixtures::schools()));
        assert_eq!(session.role(), Some(Role::ClassTeacher));
    }

    #[test]
    fn test_unknown_school_still_admitted() {
        let mut session = SessionStore::default();
        assert!(session.login("+919876543210", "123456", &[]));
        assert_eq!(session.user().and_then(|u| u.school_id.as_deref()), Some("sch-001"));
    }

    #[test]
    fn test_logout_clears_user() {
        let mut session = SessionStore::default();
        assert!(session.login("+919876543214", "123456", &fixtures::schools()));
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_custom_otp_length() {
        let mut session = SessionStore::new(&AuthConfig { otp_length: 4 });
        assert!(!session.login("+919999999999", "123456", &[]));
        assert!(session.login("+919999999999", "1234", &[]));
    }
}
