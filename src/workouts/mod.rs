//! Workout module for logged sessions and daily goal progress.

pub mod progress;
pub mod types;

pub use progress::{DailyProgress, DEFAULT_DAILY_GOAL, GOAL_RANGE_KCAL};
pub use types::{
    NewWorkout, WorkoutEntry, WorkoutRecord, BODY_TEMP_RANGE_C, DURATION_RANGE_MIN,
    HEART_RATE_RANGE_BPM,
};
