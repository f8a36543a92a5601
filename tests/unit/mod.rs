//! Unit test modules.

mod body_metrics_test;
mod config_test;
mod progress_test;
