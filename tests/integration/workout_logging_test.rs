//! Integration tests for saving workouts and daily goal progress.

use fittrack::workouts::WorkoutEntry;
use fittrack::{Session, TrackerError};

use super::fixtures::{at, login_new_user, today, tracker};

#[test]
fn test_alice_logs_a_workout() {
    let tracker = tracker();
    let mut session = login_new_user(&tracker, "alice");

    let user = session.user().unwrap();
    assert_eq!(user.age_on(today()), 29);
    assert!((user.bmi() - 22.04).abs() < 0.01);

    let entry = WorkoutEntry::for_profile(165.0, 60.0);
    assert_eq!(entry.duration_minutes, 30);
    assert_eq!(entry.heart_rate_bpm, 120);
    assert_eq!(entry.body_temp_c, 37.0);

    let record = tracker.log_workout(&mut session, &entry, at(10)).unwrap();

    let history = tracker.history(&session).unwrap();
    assert_eq!(history, vec![record.clone()]);
    assert_eq!(record.user_id, session.user().unwrap().id);
    assert!(record.calories >= 0.0);

    let progress = tracker.daily_progress(&session, today()).unwrap();
    assert!((progress.burned_today - record.calories).abs() < 1e-9);
}

#[test]
fn test_saving_appends_and_keeps_prior_records() {
    let tracker = tracker();
    let mut session = login_new_user(&tracker, "bob");

    let mut entry = WorkoutEntry::for_profile(165.0, 60.0);
    let first = tracker.log_workout(&mut session, &entry, at(8)).unwrap();

    entry.duration_minutes = 75;
    entry.heart_rate_bpm = 165;
    let second = tracker.log_workout(&mut session, &entry, at(18)).unwrap();

    let history = tracker.history(&session).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0], first);
    assert_eq!(history[1], second);
    assert!(second.calories > first.calories);
}

#[test]
fn test_changed_body_metrics_patch_account_and_sidebar() {
    let tracker = tracker();
    let mut session = login_new_user(&tracker, "carol");
    let before = session.user().unwrap().bmi();

    let mut entry = WorkoutEntry::for_profile(165.0, 60.0);
    entry.height_cm = 170.0;
    entry.weight_kg = 72.5;
    tracker.log_workout(&mut session, &entry, at(9)).unwrap();

    let user = session.user().unwrap();
    assert_eq!(user.height_cm, 170.0);
    assert_eq!(user.weight_kg, 72.5);
    assert!((user.bmi() - 72.5 / (1.7 * 1.7)).abs() < 1e-9);
    assert!(user.bmi() > before);

    let stored = tracker.database().get_account(user.id).unwrap().unwrap();
    assert_eq!(stored.height_cm, 170.0);
    assert_eq!(stored.weight_kg, 72.5);
}

#[test]
fn test_users_only_see_their_own_history() {
    let tracker = tracker();
    let mut alice = login_new_user(&tracker, "alice");
    let bob = login_new_user(&tracker, "bob");

    tracker
        .log_workout(&mut alice, &WorkoutEntry::for_profile(165.0, 60.0), at(7))
        .unwrap();

    assert_eq!(tracker.history(&alice).unwrap().len(), 1);
    assert!(tracker.history(&bob).unwrap().is_empty());
    assert_eq!(
        tracker.daily_progress(&bob, today()).unwrap().burned_today,
        0.0
    );
}

#[test]
fn test_daily_goal_badge() {
    let tracker = tracker();
    let mut session = login_new_user(&tracker, "dana");

    let progress = tracker.daily_progress(&session, today()).unwrap();
    assert_eq!(progress.goal, None);
    assert!(!progress.goal_met());

    tracker.set_daily_goal(&mut session, 5000).unwrap();
    tracker
        .log_workout(&mut session, &WorkoutEntry::for_profile(165.0, 60.0), at(12))
        .unwrap();

    let progress = tracker.daily_progress(&session, today()).unwrap();
    assert!(!progress.goal_met());
    assert!(progress.calories_left().unwrap() > 0.0);

    tracker.set_daily_goal(&mut session, 100).unwrap();
    let progress = tracker.daily_progress(&session, today()).unwrap();
    assert!(progress.goal_met());
}

#[test]
fn test_logged_out_session_cannot_save() {
    let tracker = tracker();
    let mut session = login_new_user(&tracker, "erin");
    tracker.logout(&mut session);

    let result = tracker.log_workout(&mut session, &WorkoutEntry::for_profile(165.0, 60.0), at(6));
    assert!(matches!(result, Err(TrackerError::NotAuthenticated)));

    let fresh = Session::new();
    assert!(matches!(
        tracker.history(&fresh),
        Err(TrackerError::NotAuthenticated)
    ));
}
