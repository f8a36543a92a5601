//! CART regression tree.
//!
//! Splits minimize the summed squared error of the two children. Every
//! feature is considered at every node.

use super::types::{FeatureRow, FEATURE_COUNT};

/// Growth limits for a single tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Maximum depth (root is depth 0); unlimited when `None`
    pub max_depth: Option<usize>,
    /// Nodes with fewer samples become leaves
    pub min_samples_split: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A fitted regression tree stored as a flat node arena.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    sse: f64,
}

impl RegressionTree {
    /// Fit a tree on the rows selected by `sample` (indices may repeat).
    pub fn fit(
        features: &[FeatureRow],
        targets: &[f64],
        sample: &[usize],
        params: &TreeParams,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        let mut indices = sample.to_vec();

        if indices.is_empty() {
            tree.nodes.push(Node::Leaf { value: 0.0 });
        } else {
            tree.grow(features, targets, &mut indices, 0, params);
        }

        tree
    }

    /// Predict the target for one feature vector.
    pub fn predict(&self, row: &FeatureRow) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Number of nodes (splits and leaves).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest leaf.
    pub fn depth(&self) -> usize {
        self.depth_from(0)
    }

    fn depth_from(&self, index: usize) -> usize {
        match &self.nodes[index] {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => {
                1 + self.depth_from(*left).max(self.depth_from(*right))
            }
        }
    }

    fn grow(
        &mut self,
        features: &[FeatureRow],
        targets: &[f64],
        indices: &mut [usize],
        depth: usize,
        params: &TreeParams,
    ) -> usize {
        let n = indices.len() as f64;
        let sum: f64 = indices.iter().map(|&i| targets[i]).sum();
        let sum_sq: f64 = indices.iter().map(|&i| targets[i] * targets[i]).sum();
        let mean = sum / n;
        let node_sse = sum_sq - sum * sum / n;

        let depth_exhausted = params.max_depth.is_some_and(|max| depth >= max);
        if indices.len() < params.min_samples_split.max(2) || depth_exhausted || node_sse <= 1e-9 {
            return self.push(Node::Leaf { value: mean });
        }

        let candidate = match best_split(features, targets, indices, sum, sum_sq) {
            Some(c) if c.sse < node_sse => c,
            _ => return self.push(Node::Leaf { value: mean }),
        };

        let mid = partition(indices, |i| features[i][candidate.feature] <= candidate.threshold);
        if mid == 0 || mid == indices.len() {
            return self.push(Node::Leaf { value: mean });
        }

        // Reserve the slot so children land after their parent
        let id = self.push(Node::Leaf { value: mean });
        let (left_indices, right_indices) = indices.split_at_mut(mid);
        let left = self.grow(features, targets, left_indices, depth + 1, params);
        let right = self.grow(features, targets, right_indices, depth + 1, params);

        self.nodes[id] = Node::Split {
            feature: candidate.feature,
            threshold: candidate.threshold,
            left,
            right,
        };
        id
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// Scan every feature for the split with the lowest child SSE.
fn best_split(
    features: &[FeatureRow],
    targets: &[f64],
    indices: &mut [usize],
    total_sum: f64,
    total_sq: f64,
) -> Option<SplitCandidate> {
    let n = indices.len();
    let mut best: Option<SplitCandidate> = None;

    for feature in 0..FEATURE_COUNT {
        indices.sort_unstable_by(|&a, &b| features[a][feature].total_cmp(&features[b][feature]));

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;

        for i in 0..n - 1 {
            let y = targets[indices[i]];
            left_sum += y;
            left_sq += y * y;

            let here = features[indices[i]][feature];
            let next = features[indices[i + 1]][feature];
            if here == next {
                continue;
            }

            let left_n = (i + 1) as f64;
            let right_n = (n - i - 1) as f64;
            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let sse = (left_sq - left_sum * left_sum / left_n)
                + (right_sq - right_sum * right_sum / right_n);

            if best.as_ref().map_or(true, |b| sse < b.sse) {
                let midpoint = here + (next - here) / 2.0;
                let threshold = if midpoint < next { midpoint } else { here };
                best = Some(SplitCandidate {
                    feature,
                    threshold,
                    sse,
                });
            }
        }
    }

    best
}

/// Move every index satisfying `goes_left` to the front; returns the boundary.
fn partition(indices: &mut [usize], goes_left: impl Fn(usize) -> bool) -> usize {
    let mut boundary = 0;
    for i in 0..indices.len() {
        if goes_left(indices[i]) {
            indices.swap(boundary, i);
            boundary += 1;
        }
    }
    boundary
}
