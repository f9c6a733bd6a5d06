use contracts::domain::a001_school::School;
use contracts::shared::config::AuthConfig;
use contracts::shared::error::AuthError;
use contracts::system::auth::{Role, SessionStore, User};
use leptos::prelude::*;

/// Session provider. The session lives only in memory, so a reload logs out.
#[component]
pub fn AuthProvider(auth: AuthConfig, children: Children) -> impl IntoView {
    let session = RwSignal::new(SessionStore::new(&auth));
    provide_context(session);

    children()
}

/// Hook to access the session store
pub fn use_auth() -> RwSignal<SessionStore> {
    use_context::<RwSignal<SessionStore>>().expect("AuthProvider not found in component tree")
}

/// Tracked read of the logged-in user.
pub fn current_user() -> Option<User> {
    use_auth().with(|s| s.user().cloned())
}

pub fn current_role() -> Option<Role> {
    use_auth().with(|s| s.role())
}

/// School of the logged-in user; `None` for the super admin.
pub fn current_school_id() -> Option<String> {
    use_auth().with(|s| s.user().and_then(|u| u.school_id.clone()))
}

/// Helper: Perform login
pub fn do_login(
    session: RwSignal<SessionStore>,
    phone: &str,
    otp: &str,
    schools: &[School],
) -> Result<(), AuthError> {
    let mut result = Ok(());
    session.update(|s| {
        result = s.try_login(phone, otp, schools).map(|_| ());
    });
    result
}

/// Helper: Perform logout
pub fn do_logout(session: RwSignal<SessionStore>) {
    session.update(|s| s.logout());
}
