//! Calorie prediction model.
//!
//! A random forest regressor trained once per process from the exercise and
//! calories datasets:
//! - `dataset`: CSV loading, join and feature engineering
//! - `tree` / `forest`: the estimator
//! - `predictor`: lazy training and the prediction entry point

pub mod dataset;
pub mod forest;
pub mod predictor;
pub mod tree;
pub mod types;

pub use dataset::TrainingSet;
pub use forest::{ForestParams, RandomForest};
pub use predictor::{spawn_warm_up, CaloriePredictor, ModelSource, ModelState};
pub use tree::{RegressionTree, TreeParams};
pub use types::{FeatureRow, MlError, PredictionInput, FEATURE_COUNT, FEATURE_NAMES};
