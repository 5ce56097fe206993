//! Login gate for the admin dashboard.
//!
//! There is no auth backend: the check is a hardcoded string comparison,
//! exactly as the dashboard has always worked. The frontend only stores
//! an "is authenticated" flag.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub is_admin: bool,
}

impl UserInfo {
    pub fn admin() -> Self {
        Self {
            username: ADMIN_USERNAME.to_string(),
            display_name: "John".to_string(),
            is_admin: true,
        }
    }
}

/// Validate credentials against the hardcoded admin account.
pub fn authenticate(username: &str, password: &str) -> Result<UserInfo> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Ok(UserInfo::admin())
    } else {
        bail!("Invalid username or password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_credentials_are_accepted() {
        let user = authenticate("admin", "admin").unwrap();
        assert!(user.is_admin);
        assert_eq!(user.username, "admin");
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(authenticate("admin", "wrong").is_err());
        assert!(authenticate("root", "admin").is_err());
        assert!(authenticate("", "").is_err());
    }
}
