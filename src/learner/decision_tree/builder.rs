use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::{DEFAULT_MAX_DEPTH, DIMENSION};
use super::dtree::DecisionTree;
use super::split_by::SplitBy;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use parliament::prelude::*;
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .split_by(SplitBy::Entropy)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder {
    max_depth: usize,
    split_by: SplitBy,
    max_features: usize,
    seed: u64,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 1000,
    /// split_by: SplitBy::Gini,
    /// max_features: 2 (all features),
    /// seed: 0,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            split_by: SplitBy::Gini,
            max_features: DIMENSION,
            seed: 0,
        }
    }


    /// Specify the maximal depth of the tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Tree must have positive depth");
        self.max_depth = depth;

        self
    }


    /// Set the node splitting rule.
    /// Default value is `SplitBy::Gini`.
    /// See [`SplitBy`] for other rules.
    #[inline]
    pub fn split_by(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }


    /// Set the number of features examined at each split.
    /// If it is smaller than the dimension,
    /// the features are drawn at random for each split.
    pub fn max_features(mut self, max_features: usize) -> Self {
        assert!(
            (1..=DIMENSION).contains(&max_features),
            "max_features must be in [1, {DIMENSION}]"
        );
        self.max_features = max_features;
        self
    }


    /// Set the seed of the feature sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(
            self.split_by,
            self.max_depth,
            self.max_features,
            StdRng::seed_from_u64(self.seed),
        )
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
