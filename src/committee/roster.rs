use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    DecisionTreeBuilder,
    KNearestNeighbors,
    RandomForest,
    RbfSvm,
};
use crate::constants::{
    DEFAULT_MAX_DEPTH,
    DEFAULT_N_TREES,
    DEFAULT_SVM_C,
    DEFAULT_SVM_GAMMA,
};
use super::voter::{FallbackPolicy, Voter};


/// A seat of the committee, described by its classifier
/// and hyperparameters.
///
/// In JSON, a roster entry reads as
/// ```text
/// { "kind": "svm", "c": 10.0, "gamma": 10.0 }
/// { "kind": "nearest_neighbors", "k": 7 }
/// { "kind": "decision_tree", "max_depth": 1000 }
/// { "kind": "random_forest", "n_trees": 10, "max_depth": 1000 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VoterSpec {
    /// [`RbfSvm`]. Falls back to 1-NN while the sample has a single label.
    Svm {
        /// Regularization parameter.
        c: f64,
        /// Kernel width.
        gamma: f64,
    },
    /// [`KNearestNeighbors`].
    /// For `k > 1`, falls back to 1-NN while the sample has
    /// at most `k` points.
    NearestNeighbors {
        /// Number of neighbors.
        k: usize,
    },
    /// A single [`DecisionTree`](crate::DecisionTree).
    DecisionTree {
        /// Maximal depth.
        max_depth: usize,
    },
    /// [`RandomForest`].
    RandomForest {
        /// Number of trees.
        n_trees: usize,
        /// Maximal depth of each tree.
        max_depth: usize,
    },
}


impl VoterSpec {
    /// The margin-based voter with the default hyperparameters.
    pub fn svm() -> Self {
        Self::Svm { c: DEFAULT_SVM_C, gamma: DEFAULT_SVM_GAMMA }
    }


    /// The `k`-nearest neighbors voter.
    pub fn nearest_neighbors(k: usize) -> Self {
        Self::NearestNeighbors { k }
    }


    /// The decision tree voter with the default depth.
    pub fn decision_tree() -> Self {
        Self::DecisionTree { max_depth: DEFAULT_MAX_DEPTH }
    }


    /// The random forest voter with the default size.
    pub fn random_forest() -> Self {
        Self::RandomForest {
            n_trees: DEFAULT_N_TREES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }


    /// Returns the default roster,
    /// a margin-based voter and a 1-nearest-neighbor voter.
    pub fn default_roster() -> Vec<Self> {
        vec![Self::svm(), Self::nearest_neighbors(1)]
    }


    /// Returns the fallback policy of the voter.
    pub fn policy(&self) -> FallbackPolicy {
        match self {
            Self::Svm { .. } => FallbackPolicy::SingleClass,
            Self::NearestNeighbors { k } if *k > 1 => {
                FallbackPolicy::MinSamples(*k)
            },
            _ => FallbackPolicy::Never,
        }
    }


    /// Builds the voter.
    /// Randomized classifiers are seeded by `seed`.
    pub fn build(&self, seed: u64) -> Voter {
        let voter = match *self {
            Self::Svm { c, gamma } => {
                Voter::new(RbfSvm::new().c(c).gamma(gamma))
            },
            Self::NearestNeighbors { k } => {
                Voter::new(KNearestNeighbors::new(k))
            },
            Self::DecisionTree { max_depth } => {
                let tree = DecisionTreeBuilder::new()
                    .max_depth(max_depth)
                    .seed(seed)
                    .build();
                Voter::new(tree)
            },
            Self::RandomForest { n_trees, max_depth } => {
                let forest = RandomForest::new()
                    .n_trees(n_trees)
                    .max_depth(max_depth)
                    .seed(seed);
                Voter::new(forest)
            },
        };
        voter.fallback(self.policy())
    }
}


impl fmt::Display for VoterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svm { c, gamma } => {
                write!(f, "SVM (C = {c}, gamma = {gamma})")
            },
            Self::NearestNeighbors { k } => write!(f, "{k}-NN"),
            Self::DecisionTree { max_depth } => {
                write!(f, "Decision Tree (max depth = {max_depth})")
            },
            Self::RandomForest { n_trees, max_depth } => {
                write!(
                    f,
                    "Random Forest ({n_trees} trees, max depth = {max_depth})"
                )
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies() {
        assert_eq!(VoterSpec::svm().policy(), FallbackPolicy::SingleClass);
        assert_eq!(
            VoterSpec::nearest_neighbors(1).policy(),
            FallbackPolicy::Never
        );
        assert_eq!(
            VoterSpec::nearest_neighbors(7).policy(),
            FallbackPolicy::MinSamples(7)
        );
        assert_eq!(VoterSpec::random_forest().policy(), FallbackPolicy::Never);
    }

    #[test]
    fn build_keeps_policy() {
        let voter = VoterSpec::nearest_neighbors(7).build(0);
        assert_eq!(voter.policy(), FallbackPolicy::MinSamples(7));
        assert_eq!(voter.name(), "k-Nearest Neighbors");
    }

    #[test]
    fn parse_tagged_entry() {
        let text = r#"[
            { "kind": "svm", "c": 1.0, "gamma": 2.0 },
            { "kind": "nearest_neighbors", "k": 7 },
            { "kind": "random_forest", "n_trees": 5, "max_depth": 3 }
        ]"#;
        let roster: Vec<VoterSpec> = serde_json::from_str(text).unwrap();
        assert_eq!(
            roster,
            vec![
                VoterSpec::Svm { c: 1.0, gamma: 2.0 },
                VoterSpec::NearestNeighbors { k: 7 },
                VoterSpec::RandomForest { n_trees: 5, max_depth: 3 },
            ]
        );
    }
}
