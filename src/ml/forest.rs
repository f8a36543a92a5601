//! Random forest regressor.
//!
//! Each tree is fit on a bootstrap sample drawn from a seeded RNG, so the
//! same data and seed always produce the same forest.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::dataset::TrainingSet;
use super::tree::{RegressionTree, TreeParams};
use super::types::{FeatureRow, MlError};
use crate::storage::config::ModelSettings;

/// Forest hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestParams {
    /// Number of trees
    pub n_estimators: usize,
    /// Bootstrap RNG seed
    pub seed: u64,
    /// Per-tree growth limits
    pub tree: TreeParams,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            seed: 42,
            tree: TreeParams::default(),
        }
    }
}

impl From<&ModelSettings> for ForestParams {
    fn from(settings: &ModelSettings) -> Self {
        Self {
            n_estimators: settings.n_estimators,
            seed: settings.random_seed,
            tree: TreeParams {
                max_depth: settings.max_depth,
                min_samples_split: settings.min_samples_split,
            },
        }
    }
}

/// A fitted ensemble of regression trees.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    /// Fit the forest on a training set.
    pub fn fit(set: &TrainingSet, params: &ForestParams) -> Result<Self, MlError> {
        if set.is_empty() {
            return Err(MlError::EmptyDataset(
                "no exercise rows matched a calories row".to_string(),
            ));
        }

        let n = set.len();
        let mut rng = StdRng::seed_from_u64(params.seed);
        let n_trees = params.n_estimators.max(1);

        let trees = (0..n_trees)
            .map(|_| {
                let sample: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
                RegressionTree::fit(&set.features, &set.targets, &sample, &params.tree)
            })
            .collect();

        Ok(Self { trees })
    }

    /// Mean of the trees' predictions.
    pub fn predict(&self, row: &FeatureRow) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.predict(row)).sum();
        total / self.trees.len() as f64
    }

    /// Number of trees in the forest.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
