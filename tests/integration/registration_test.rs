//! Integration tests for registration, login and the admin bootstrap.

use fittrack::accounts::AuthError;
use fittrack::storage::AdminSettings;
use fittrack::{Session, TrackerError};

use super::fixtures::{registration, today, tracker, PASSWORD};

#[test]
fn test_duplicate_username_creates_no_second_row() {
    let tracker = tracker();
    tracker.register(&registration("alice"), today()).unwrap();

    let mut again = registration("alice");
    again.password = "different".to_string();
    let result = tracker.register(&again, today());

    match result {
        Err(e @ TrackerError::Auth(AuthError::UsernameTaken)) => {
            assert_eq!(e.to_string(), "Username already exists!");
        }
        other => panic!("expected UsernameTaken, got {:?}", other),
    }
    assert_eq!(tracker.database().count_regular_accounts().unwrap(), 1);

    // The original password still works
    let mut session = Session::new();
    tracker.login(&mut session, "alice", PASSWORD).unwrap();
}

#[test]
fn test_login_exposes_stored_profile() {
    let tracker = tracker();
    let form = registration("bob");
    tracker.register(&form, today()).unwrap();

    let mut session = Session::new();
    tracker.login(&mut session, "bob", PASSWORD).unwrap();

    let user = session.user().unwrap();
    assert_eq!(user.username, "bob");
    assert_eq!(user.dob, form.dob);
    assert_eq!(user.height_cm, form.height_cm);
    assert_eq!(user.weight_kg, form.weight_kg);
    assert!(!user.is_admin);
}

#[test]
fn test_wrong_password_and_unknown_user_look_the_same() {
    let tracker = tracker();
    tracker.register(&registration("carol"), today()).unwrap();

    let mut session = Session::new();
    let wrong_password = tracker
        .login(&mut session, "carol", "not it")
        .unwrap_err()
        .to_string();
    let unknown_user = tracker
        .login(&mut session, "nobody", PASSWORD)
        .unwrap_err()
        .to_string();

    assert_eq!(wrong_password, "Invalid credentials!");
    assert_eq!(wrong_password, unknown_user);
    assert!(!session.is_authenticated());
}

#[test]
fn test_password_is_not_stored_in_plaintext() {
    let tracker = tracker();
    tracker.register(&registration("dave"), today()).unwrap();

    let account = tracker
        .database()
        .get_account_by_username("dave")
        .unwrap()
        .unwrap();
    assert_ne!(account.password_hash, PASSWORD);
    assert!(account.password_hash.starts_with("$argon2"));
}

#[test]
fn test_admin_bootstrap_is_idempotent() {
    let tracker = tracker();
    let settings = AdminSettings {
        username: "admin".to_string(),
        password: "s3cret".to_string(),
    };

    assert!(tracker.bootstrap_admin(&settings).unwrap());
    assert!(!tracker.bootstrap_admin(&settings).unwrap());

    let mut session = Session::new();
    tracker.login(&mut session, "admin", "s3cret").unwrap();
    assert!(session.user().unwrap().is_admin);

    // Admins are not counted as users
    assert_eq!(tracker.database().count_regular_accounts().unwrap(), 0);
}

#[test]
fn test_username_of_admin_cannot_be_registered() {
    let tracker = tracker();
    tracker.bootstrap_admin(&AdminSettings::default()).unwrap();

    let result = tracker.register(&registration("admin"), today());
    assert!(matches!(
        result,
        Err(TrackerError::Auth(AuthError::UsernameTaken))
    ));
}
