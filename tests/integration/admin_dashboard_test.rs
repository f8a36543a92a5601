//! Integration tests for the administrator overview.

use fittrack::storage::AdminSettings;
use fittrack::workouts::WorkoutEntry;
use fittrack::{Session, Tracker, TrackerError};

use super::fixtures::{at, login_new_user, tracker};

fn admin_session(tracker: &Tracker) -> Session {
    let settings = AdminSettings {
        username: "admin".to_string(),
        password: "admin-pass".to_string(),
    };
    tracker.bootstrap_admin(&settings).unwrap();

    let mut session = Session::new();
    tracker.login(&mut session, "admin", "admin-pass").unwrap();
    session
}

#[test]
fn test_empty_overview() {
    let tracker = tracker();
    let admin = admin_session(&tracker);

    let overview = tracker.admin_overview(&admin).unwrap();
    assert_eq!(overview.total_users, 0);
    assert_eq!(overview.total_workouts, 0);
    assert_eq!(overview.average_calories, None);
    assert_eq!(overview.average_calories_label(), "0");
    assert!(overview.accounts.is_empty());
}

#[test]
fn test_aggregates_match_direct_queries() {
    let tracker = tracker();
    let admin = admin_session(&tracker);

    let mut alice = login_new_user(&tracker, "alice");
    let mut bob = login_new_user(&tracker, "bob");
    let _carol = login_new_user(&tracker, "carol");

    let mut entry = WorkoutEntry::for_profile(165.0, 60.0);
    let mut saved = Vec::new();
    saved.push(tracker.log_workout(&mut alice, &entry, at(7)).unwrap());
    entry.duration_minutes = 60;
    saved.push(tracker.log_workout(&mut alice, &entry, at(12)).unwrap());
    entry.heart_rate_bpm = 170;
    saved.push(tracker.log_workout(&mut bob, &entry, at(19)).unwrap());

    let overview = tracker.admin_overview(&admin).unwrap();

    let db = tracker.database();
    assert_eq!(overview.total_users, db.list_regular_accounts().unwrap().len());
    assert_eq!(overview.total_users, 3);
    assert_eq!(overview.total_workouts, saved.len());

    let expected_avg = saved.iter().map(|r| r.calories).sum::<f64>() / saved.len() as f64;
    assert!((overview.average_calories.unwrap() - expected_avg).abs() < 1e-9);
    assert_eq!(
        overview.average_calories_label(),
        format!("{:.2}", expected_avg)
    );

    let usernames: Vec<_> = overview.accounts.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(usernames, vec!["alice", "bob", "carol"]);
}

#[test]
fn test_drill_down_into_one_user() {
    let tracker = tracker();
    let admin = admin_session(&tracker);

    let mut alice = login_new_user(&tracker, "alice");
    let bob = login_new_user(&tracker, "bob");
    let record = tracker
        .log_workout(&mut alice, &WorkoutEntry::for_profile(165.0, 60.0), at(8))
        .unwrap();

    let alice_id = alice.user().unwrap().id;
    let bob_id = bob.user().unwrap().id;

    assert_eq!(tracker.user_history(&admin, alice_id).unwrap(), vec![record]);
    assert!(tracker.user_history(&admin, bob_id).unwrap().is_empty());
}

#[test]
fn test_regular_users_cannot_read_the_overview() {
    let tracker = tracker();
    let alice = login_new_user(&tracker, "alice");

    assert!(matches!(
        tracker.admin_overview(&alice),
        Err(TrackerError::Forbidden)
    ));
    assert!(matches!(
        tracker.admin_overview(&Session::new()),
        Err(TrackerError::NotAuthenticated)
    ));
}
