//! Integration test modules.

mod admin_dashboard_test;
mod fixtures;
mod model_training_test;
mod registration_test;
mod workout_logging_test;
