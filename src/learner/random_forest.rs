use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::{
    checkers,
    Classifier,
    ClassifierError,
    DecisionTreeBuilder,
    DecisionTree,
    Label,
    LabeledSample,
    Point,
    SplitBy,
};
use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_N_TREES};
use super::majority_vote;


/// Random Forest.
/// Each tree is grown on a bootstrap sample and
/// examines a single random feature per split.
/// The forest predicts the majority vote of its trees
/// (ties are broken by the smallest label).
///
/// Trees are grown in parallel.
/// The seeds of the trees are drawn from the forest's generator
/// before growing, so a seeded forest is reproducible.
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let forest = RandomForest::new()
///     .n_trees(10)
///     .max_depth(8)
///     .seed(1234);
/// ```
pub struct RandomForest {
    n_trees: usize,
    max_depth: usize,
    split_by: SplitBy,
    rng: StdRng,
    trees: Vec<DecisionTree>,
}


impl RandomForest {
    /// Construct a new instance of [`RandomForest`].
    /// By default, [`RandomForest`] sets the parameters as follows;
    /// ```text
    /// n_trees: DEFAULT_N_TREES == 10,
    /// max_depth: DEFAULT_MAX_DEPTH == 1000,
    /// split_by: SplitBy::Gini,
    /// ```
    /// and seeds itself from the entropy of the system.
    pub fn new() -> Self {
        Self {
            n_trees: DEFAULT_N_TREES,
            max_depth: DEFAULT_MAX_DEPTH,
            split_by: SplitBy::Gini,
            rng: StdRng::from_entropy(),
            trees: Vec::new(),
        }
    }


    /// Set the number of trees.
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        assert!(n_trees > 0, "The forest must have at least one tree");
        self.n_trees = n_trees;
        self
    }


    /// Set the maximal depth of each tree.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Tree must have positive depth");
        self.max_depth = depth;
        self
    }


    /// Set the node splitting rule of each tree.
    pub fn split_by(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }


    /// Set the seed of the bootstrap and the feature sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}


impl Default for RandomForest {
    fn default() -> Self {
        Self::new()
    }
}


impl Classifier for RandomForest {
    fn name(&self) -> &str {
        "Random Forest"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of trees", format!("{}", self.n_trees)),
            ("Max depth", format!("{}", self.max_depth)),
            ("Split by", format!("{}", self.split_by)),
        ]);
        Some(info)
    }


    fn fit(&mut self, sample: &LabeledSample) -> Result<(), ClassifierError> {
        checkers::sample(sample)?;
        let n_sample = sample.len();

        let seeds = (0..self.n_trees)
            .map(|_| self.rng.gen::<u64>())
            .collect::<Vec<_>>();

        let max_depth = self.max_depth;
        let split_by = self.split_by;
        let trees = seeds.into_par_iter()
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let bootstrap = (0..n_sample)
                    .map(|_| rng.gen_range(0..n_sample))
                    .collect::<Vec<_>>();

                let mut tree = DecisionTreeBuilder::new()
                    .max_depth(max_depth)
                    .split_by(split_by)
                    .max_features(1)
                    .seed(rng.gen())
                    .build();
                tree.fit_on(sample, bootstrap).map(|_| tree)
            })
            .collect::<Result<Vec<_>, ClassifierError>>()?;

        self.trees = trees;
        Ok(())
    }


    fn predict(&self, point: &Point) -> Result<Label, ClassifierError> {
        let votes = self.trees.iter()
            .map(|tree| tree.predict(point))
            .collect::<Result<Vec<_>, _>>()?;
        majority_vote(votes).ok_or(ClassifierError::NotFitted)
    }
}
