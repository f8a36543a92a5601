//! Account types and registration form validation.

use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::metrics::body;

/// Accepted height range for registration and profile updates (cm).
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 100.0..=250.0;

/// Accepted weight range for registration and profile updates (kg).
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=200.0;

/// Users must be at least this many days old (8 years of 365 days).
const MIN_AGE_DAYS: i64 = 365 * 8;

/// A stored account row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Auto-assigned identifier
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// PHC-encoded password hash
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Administrator role flag
    pub is_admin: bool,
    /// When the account was created
    pub created_at: NaiveDateTime,
}

impl Account {
    /// Body-mass index from the stored height and weight.
    pub fn bmi(&self) -> f64 {
        body::bmi(self.weight_kg, self.height_cm)
    }
}

/// An account about to be inserted.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub dob: NaiveDate,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub is_admin: bool,
}

/// Registration form input, before hashing.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub dob: NaiveDate,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Registration {
    /// Check the form against the ranges the registration widgets allow.
    pub fn validate(&self, today: NaiveDate) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username must not be empty".to_string());
        }
        if self.password.is_empty() {
            return Err("Password must not be empty".to_string());
        }
        if self.dob < earliest_dob() || self.dob > latest_dob(today) {
            return Err(format!(
                "Date of birth must be between {} and {}",
                earliest_dob(),
                latest_dob(today)
            ));
        }
        if !HEIGHT_RANGE_CM.contains(&self.height_cm) {
            return Err("Height must be between 100 and 250 cm".to_string());
        }
        if !WEIGHT_RANGE_KG.contains(&self.weight_kg) {
            return Err("Weight must be between 30 and 200 kg".to_string());
        }
        Ok(())
    }
}

/// Earliest selectable date of birth.
pub fn earliest_dob() -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Latest selectable date of birth for the given day.
pub fn latest_dob(today: NaiveDate) -> NaiveDate {
    today - Duration::days(MIN_AGE_DAYS)
}
