//! Workout record types and the workout form input.

use std::ops::RangeInclusive;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::accounts::types::{HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

/// Allowed workout duration (minutes).
pub const DURATION_RANGE_MIN: RangeInclusive<u32> = 1..=180;

/// Allowed average heart rate (bpm).
pub const HEART_RATE_RANGE_BPM: RangeInclusive<u32> = 60..=200;

/// Allowed body temperature (°C).
pub const BODY_TEMP_RANGE_C: RangeInclusive<f64> = 36.0..=40.0;

/// A stored workout. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Auto-assigned identifier
    pub id: i64,
    /// Owning account
    pub user_id: i64,
    /// When the workout was saved (local time)
    pub recorded_at: NaiveDateTime,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Average heart rate in bpm
    pub heart_rate_bpm: u32,
    /// Body temperature in °C
    pub body_temp_c: f64,
    /// Predicted calories burned
    pub calories: f64,
}

/// A workout about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub user_id: i64,
    pub recorded_at: NaiveDateTime,
    pub duration_minutes: u32,
    pub heart_rate_bpm: u32,
    pub body_temp_c: f64,
    pub calories: f64,
}

/// Values submitted from the workout form.
///
/// Height and weight are pre-filled from the profile; changing them patches
/// the account when the workout is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub duration_minutes: u32,
    pub heart_rate_bpm: u32,
    pub body_temp_c: f64,
}

impl WorkoutEntry {
    /// Form defaults for a user with the given body metrics.
    pub fn for_profile(height_cm: f64, weight_kg: f64) -> Self {
        Self {
            height_cm,
            weight_kg,
            duration_minutes: 30,
            heart_rate_bpm: 120,
            body_temp_c: 37.0,
        }
    }

    /// Check the entry against the ranges the form widgets allow.
    pub fn validate(&self) -> Result<(), String> {
        if !HEIGHT_RANGE_CM.contains(&self.height_cm) {
            return Err("Height must be between 100 and 250 cm".to_string());
        }
        if !WEIGHT_RANGE_KG.contains(&self.weight_kg) {
            return Err("Weight must be between 30 and 200 kg".to_string());
        }
        if !DURATION_RANGE_MIN.contains(&self.duration_minutes) {
            return Err("Duration must be between 1 and 180 minutes".to_string());
        }
        if !HEART_RATE_RANGE_BPM.contains(&self.heart_rate_bpm) {
            return Err("Heart rate must be between 60 and 200 bpm".to_string());
        }
        if !BODY_TEMP_RANGE_C.contains(&self.body_temp_c) {
            return Err("Body temperature must be between 36.0 and 40.0 °C".to_string());
        }
        Ok(())
    }
}
