//! Shared fixtures: an in-memory tracker with a small, fast model.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use fittrack::accounts::Registration;
use fittrack::ml::{CaloriePredictor, ForestParams, TrainingSet, TreeParams};
use fittrack::storage::Database;
use fittrack::{Session, Tracker};

pub const PASSWORD: &str = "correct horse";

/// Calories grow with duration and heart rate.
pub fn training_set() -> TrainingSet {
    let mut set = TrainingSet::default();
    for duration in (5..=90).step_by(5) {
        for heart_rate in (80..=180).step_by(20) {
            let calories = duration as f64 * (heart_rate as f64 - 60.0) / 10.0;
            set.features
                .push([35.0, 23.0, duration as f64, heart_rate as f64, 38.0, 1.0]);
            set.targets.push(calories);
        }
    }
    set
}

pub fn tracker() -> Tracker {
    let params = ForestParams {
        n_estimators: 5,
        seed: 42,
        tree: TreeParams::default(),
    };
    let predictor = CaloriePredictor::from_training_set(training_set(), params);
    Tracker::new(Database::open_in_memory().unwrap(), Arc::new(predictor))
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn at(hour: u32) -> NaiveDateTime {
    today().and_hms_opt(hour, 0, 0).unwrap()
}

pub fn registration(username: &str) -> Registration {
    Registration {
        username: username.to_string(),
        password: PASSWORD.to_string(),
        dob: NaiveDate::from_ymd_opt(1995, 5, 1).unwrap(),
        height_cm: 165.0,
        weight_kg: 60.0,
    }
}

/// Register `username` and return a logged-in session.
pub fn login_new_user(tracker: &Tracker, username: &str) -> Session {
    tracker.register(&registration(username), today()).unwrap();
    let mut session = Session::new();
    tracker.login(&mut session, username, PASSWORD).unwrap();
    session
}
