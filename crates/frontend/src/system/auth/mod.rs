mod context;
pub mod storage;

pub use context::{do_login, do_logout, use_auth, AuthProvider, AuthState};
