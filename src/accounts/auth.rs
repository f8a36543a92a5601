//! Registration, login and administrator bootstrap.

use chrono::NaiveDate;
use thiserror::Error;

use super::password::{hash_password, verify_password};
use super::types::{Account, NewAccount, Registration};
use crate::storage::config::AdminSettings;
use crate::storage::database::{Database, DatabaseError};

/// Errors from account operations.
///
/// The `Display` text of `UsernameTaken` and `InvalidCredentials` is shown to
/// users verbatim.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already exists!")]
    UsernameTaken,

    /// Unknown username and wrong password are deliberately indistinguishable.
    #[error("Invalid credentials!")]
    InvalidCredentials,

    #[error("{0}")]
    InvalidRegistration(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Create a regular account from a registration form.
pub fn register(
    db: &Database,
    form: &Registration,
    today: NaiveDate,
) -> Result<Account, AuthError> {
    form.validate(today).map_err(AuthError::InvalidRegistration)?;

    let new_account = NewAccount {
        username: form.username.trim().to_string(),
        password_hash: hash_password(&form.password)?,
        dob: form.dob,
        height_cm: form.height_cm,
        weight_kg: form.weight_kg,
        is_admin: false,
    };

    match db.insert_account(&new_account) {
        Ok(account) => {
            tracing::info!("Registered account '{}' (id {})", account.username, account.id);
            Ok(account)
        }
        Err(DatabaseError::DuplicateUsername(username)) => {
            tracing::info!("Registration rejected, username '{}' is taken", username);
            Err(AuthError::UsernameTaken)
        }
        Err(e) => Err(e.into()),
    }
}

/// Check credentials and return the matching account.
pub fn authenticate(db: &Database, username: &str, password: &str) -> Result<Account, AuthError> {
    let account = db.get_account_by_username(username.trim())?;

    match account {
        Some(account) if verify_password(password, &account.password_hash) => {
            tracing::info!("User '{}' logged in", account.username);
            Ok(account)
        }
        _ => {
            tracing::warn!("Failed login attempt");
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Create the administrator account if it does not exist yet.
///
/// Returns `true` when the account was created by this call.
pub fn bootstrap_admin(db: &Database, settings: &AdminSettings) -> Result<bool, AuthError> {
    if db.get_account_by_username(&settings.username)?.is_some() {
        return Ok(false);
    }

    let admin = NewAccount {
        username: settings.username.clone(),
        password_hash: hash_password(&settings.password)?,
        dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
        height_cm: 170.0,
        weight_kg: 70.0,
        is_admin: true,
    };

    let created = db.insert_account_if_absent(&admin)?;
    if created {
        tracing::warn!("Bootstrapped administrator account '{}'", settings.username);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn alice() -> Registration {
        Registration {
            username: "alice".to_string(),
            password: "wonderland".to_string(),
            dob: NaiveDate::from_ymd_opt(1995, 5, 1).unwrap(),
            height_cm: 165.0,
            weight_kg: 60.0,
        }
    }

    #[test]
    fn test_register_then_authenticate() {
        let db = Database::open_in_memory().unwrap();
        let created = register(&db, &alice(), today()).unwrap();

        let account = authenticate(&db, "alice", "wonderland").unwrap();
        assert_eq!(account.id, created.id);
        assert!(!account.is_admin);
        assert_ne!(account.password_hash, "wonderland");
    }

    #[test]
    fn test_register_duplicate() {
        let db = Database::open_in_memory().unwrap();
        register(&db, &alice(), today()).unwrap();

        let result = register(&db, &alice(), today());
        assert!(matches!(result, Err(AuthError::UsernameTaken)));
        assert_eq!(db.count_regular_accounts().unwrap(), 1);
    }

    #[test]
    fn test_register_invalid_form() {
        let db = Database::open_in_memory().unwrap();
        let mut form = alice();
        form.password.clear();

        let result = register(&db, &form, today());
        assert!(matches!(result, Err(AuthError::InvalidRegistration(_))));
        assert_eq!(db.count_regular_accounts().unwrap(), 0);
    }

    #[test]
    fn test_login_failures_are_indistinguishable() {
        let db = Database::open_in_memory().unwrap();
        register(&db, &alice(), today()).unwrap();

        let wrong_password = authenticate(&db, "alice", "looking-glass").unwrap_err();
        let unknown_user = authenticate(&db, "mallory", "wonderland").unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[test]
    fn test_bootstrap_admin_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        let settings = AdminSettings::default();

        assert!(bootstrap_admin(&db, &settings).unwrap());
        assert!(!bootstrap_admin(&db, &settings).unwrap());

        let admin = authenticate(&db, "admin", "admin").unwrap();
        assert!(admin.is_admin);
        assert_eq!(db.count_regular_accounts().unwrap(), 0);
    }
}
