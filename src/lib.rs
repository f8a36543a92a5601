//! FitTrack - Fitness Tracking Application
//!
//! A desktop fitness tracker: account registration and login, workout
//! logging with calorie estimates from a random forest trained on a public
//! exercise dataset, daily calorie goals, and an administrator overview.

pub mod accounts;
pub mod metrics;
pub mod ml;
pub mod session;
pub mod storage;
pub mod tracker;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use ml::CaloriePredictor;
pub use session::Session;
pub use storage::Database;
pub use tracker::{Tracker, TrackerError};
