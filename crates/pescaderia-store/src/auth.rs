//! # Demo Auth Service
//!
//! Login against a fixed in-code user table, with the active session
//! persisted to `session.json` next to the collection files so it survives
//! restarts. This is demo-grade gatekeeping for a single-terminal shop
//! counter, not real authentication; passwords live in the binary and never
//! in the store.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use pescaderia_core::{Role, User};

use crate::error::{StoreError, StoreResult};
use crate::store::Store;

const SESSION_FILE: &str = "session.json";

struct DemoAccount {
    username: &'static str,
    password: &'static str,
    user_id: &'static str,
    name: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        username: "admin",
        password: "admin123",
        user_id: "1",
        name: "Administrador",
        role: Role::Admin,
    },
    DemoAccount {
        username: "empleado",
        password: "emp123",
        user_id: "2",
        name: "Empleado",
        role: Role::Employee,
    },
];

/// Login state for the POS terminal.
#[derive(Debug, Clone)]
pub struct AuthService {
    session_path: PathBuf,
}

impl AuthService {
    /// Stores the session file alongside the store's collection files.
    pub fn new(store: &Store) -> Self {
        AuthService {
            session_path: store.data_dir().join(SESSION_FILE),
        }
    }

    /// Checks the credentials against the demo user table and persists the
    /// session. The error never reveals whether the username exists.
    pub fn login(&self, username: &str, password: &str) -> StoreResult<User> {
        let account = DEMO_ACCOUNTS
            .iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or(StoreError::InvalidCredentials)?;

        let user = User {
            id: account.user_id.to_string(),
            username: account.username.to_string(),
            name: account.name.to_string(),
            role: account.role,
        };

        let json = serde_json::to_string_pretty(&user)
            .map_err(|e| StoreError::malformed(SESSION_FILE, e))?;
        fs::write(&self.session_path, json)?;

        info!(username = %user.username, role = ?user.role, "user logged in");
        Ok(user)
    }

    /// Ends the session. Logging out with no session is a no-op.
    pub fn logout(&self) -> StoreResult<()> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => {
                info!("user logged out");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The persisted session, if someone is logged in.
    pub fn current_user(&self) -> StoreResult<Option<User>> {
        if !self.session_path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.session_path)?;
        let user =
            serde_json::from_str(&data).map_err(|e| StoreError::malformed(SESSION_FILE, e))?;
        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use tempfile::TempDir;

    fn auth() -> (TempDir, AuthService) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path()).seed_demo_data(false)).unwrap();
        let auth = AuthService::new(&store);
        (dir, auth)
    }

    #[test]
    fn test_login_persists_session() {
        let (_dir, auth) = auth();

        let user = auth.login("admin", "admin123").unwrap();
        assert_eq!(user.name, "Administrador");
        assert_eq!(user.role, Role::Admin);

        let current = auth.current_user().unwrap().unwrap();
        assert_eq!(current.username, "admin");
    }

    #[test]
    fn test_wrong_password_rejected() {
        let (_dir, auth) = auth();
        let err = auth.login("admin", "wrong").unwrap_err();
        assert!(matches!(err, StoreError::InvalidCredentials));
        assert!(auth.current_user().unwrap().is_none());
    }

    #[test]
    fn test_logout_clears_session_and_is_idempotent() {
        let (_dir, auth) = auth();
        auth.login("empleado", "emp123").unwrap();

        auth.logout().unwrap();
        assert!(auth.current_user().unwrap().is_none());

        // Second logout with no session is a no-op.
        auth.logout().unwrap();
    }
}
