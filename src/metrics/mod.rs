//! Metrics module for body measurements.

pub mod body;

pub use body::{age_on, bmi, bmi_category};
