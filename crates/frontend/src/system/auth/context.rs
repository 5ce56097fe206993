use contracts::auth::{self, UserInfo};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Auth context provider component.
///
/// Restores the session from the localStorage flag on mount; the flag is
/// the whole session, so restoring means assuming the admin identity.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let initial = if storage::is_authenticated() {
        AuthState {
            user: Some(UserInfo::admin()),
        }
    } else {
        AuthState::default()
    };

    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state.
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Validate credentials and persist the session flag.
pub fn do_login(
    set_auth: WriteSignal<AuthState>,
    username: &str,
    password: &str,
) -> Result<(), String> {
    match auth::authenticate(username, password) {
        Ok(user) => {
            storage::save_authenticated();
            log::info!("{} logged in", user.username);
            set_auth.set(AuthState { user: Some(user) });
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Clear the session flag and reset the auth state.
pub fn do_logout(set_auth: WriteSignal<AuthState>) {
    storage::clear_authenticated();
    set_auth.set(AuthState::default());
    log::info!("logged out");
}
