use rand::rngs::StdRng;
use rand::seq::index;

use crate::{
    checkers,
    Classifier,
    ClassifierError,
    Label,
    LabeledSample,
    Point,
};
use crate::constants::DIMENSION;
use crate::learner::majority_vote;
use super::node::{LeftRight, Node};
use super::split_by::SplitBy;


/// The Decision Tree algorithm.
/// Given a set of labeled points,
/// [`DecisionTree`] grows a multi-class classification tree
/// under the specified parameters.
///
/// The code is based on the book:
/// [Classification and Regression Trees](https://www.amazon.com/Classification-Regression-Wadsworth-Statistics-Probability/dp/0412048418)
/// by Leo Breiman, Jerome H. Friedman, Richard A. Olshen, and Charles J. Stone.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let mut sample = LabeledSample::new();
/// sample.push(Point::new(-0.5, 0.1), 0);
/// sample.push(Point::new( 0.5, 0.1), 1);
///
/// let mut tree = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .split_by(SplitBy::Entropy)
///     .build();
/// tree.fit(&sample).unwrap();
///
/// let predictions = tree.predict_all(sample.features()).unwrap();
/// assert_eq!(predictions, vec![0, 1]);
/// ```
pub struct DecisionTree {
    split_by:     SplitBy,
    max_depth:    usize,
    max_features: usize,
    rng:          StdRng,
    root:         Option<Box<Node>>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        split_by:     SplitBy,
        max_depth:    usize,
        max_features: usize,
        rng:          StdRng,
    ) -> Self
    {
        Self { split_by, max_depth, max_features, rng, root: None, }
    }


    /// Trains `self` on the examples of `sample` at `indices`.
    /// An index may appear more than once (bootstrap samples).
    pub(crate) fn fit_on(&mut self, sample: &LabeledSample, indices: Vec<usize>)
        -> Result<(), ClassifierError>
    {
        if indices.is_empty() {
            return Err(ClassifierError::EmptySample);
        }
        let root = self.grow(
            sample.features(), sample.labels(), indices, self.max_depth
        );
        self.root = Some(root);
        Ok(())
    }


    /// Returns the depth of the fitted tree.
    pub fn depth(&self) -> Option<usize> {
        self.root.as_ref().map(|root| root.depth())
    }


    /// Returns the number of leaves of the fitted tree.
    pub fn n_leaves(&self) -> Option<usize> {
        self.root.as_ref().map(|root| root.n_leaves())
    }


    /// Returns the features examined at the next split.
    fn candidate_features(&mut self) -> Vec<usize> {
        if self.max_features >= DIMENSION {
            return (0..DIMENSION).collect();
        }
        let mut features = index::sample(
            &mut self.rng, DIMENSION, self.max_features
        ).into_vec();
        features.sort_unstable();
        features
    }


    /// Grows a tree of depth at most `depth`.
    fn grow(
        &mut self,
        points:  &[Point],
        labels:  &[Label],
        indices: Vec<usize>,
        depth:   usize,
    ) -> Box<Node>
    {
        // `indices` is never empty, so is the vote.
        let label = majority_vote(indices.iter().map(|&i| labels[i]))
            .unwrap_or_default();

        let pure = indices.iter().all(|&i| labels[i] == label);
        if pure || depth < 1 || indices.len() < 2 {
            return Box::new(Node::leaf(label));
        }

        let features = self.candidate_features();
        let splitter = self.split_by.best_split(
            points, labels, &indices[..], &features[..]
        );
        let Some(splitter) = splitter else {
            return Box::new(Node::leaf(label));
        };

        // Split the train data for left/right childrens
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices {
            match splitter.split(&points[i]) {
                LeftRight::Left  => { lindices.push(i); },
                LeftRight::Right => { rindices.push(i); },
            }
        }

        // If the split has no meaning, construct a leaf node.
        if lindices.is_empty() || rindices.is_empty() {
            return Box::new(Node::leaf(label));
        }

        let depth = depth - 1;
        let left  = self.grow(points, labels, lindices, depth);
        let right = self.grow(points, labels, rindices, depth);

        Box::new(Node::branch(splitter, left, right, label))
    }
}


impl Classifier for DecisionTree {
    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Split by", format!("{}", self.split_by)),
            ("Max features", format!("{}", self.max_features)),
        ]);
        Some(info)
    }


    fn fit(&mut self, sample: &LabeledSample) -> Result<(), ClassifierError> {
        checkers::sample(sample)?;
        let indices = (0..sample.len()).collect::<Vec<_>>();
        self.fit_on(sample, indices)
    }


    fn predict(&self, point: &Point) -> Result<Label, ClassifierError> {
        self.root.as_ref()
            .map(|root| root.predict(point))
            .ok_or(ClassifierError::NotFitted)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecisionTreeBuilder;

    // Toy example (digits are the labels)
    //
    //  1 |  2        |  1
    //    |           |
    //    |  2        |       1
    //  0 |-----------+----------
    //    |      0    |
    //    |  0        |  0
    // -1 |___________|__________
    //   -1           0          1
    fn toy_sample() -> LabeledSample {
        let features = vec![
            Point::new(-0.8,  0.9),
            Point::new(-0.8,  0.3),
            Point::new( 0.2,  0.9),
            Point::new( 0.6,  0.4),
            Point::new(-0.4, -0.2),
            Point::new(-0.8, -0.6),
            Point::new( 0.2, -0.6),
        ];
        let labels = vec![2, 2, 1, 1, 0, 0, 0];
        LabeledSample::from_parts(features, labels).unwrap()
    }

    #[test]
    fn full_tree_fits_training_sample() {
        let sample = toy_sample();
        let mut tree = DecisionTreeBuilder::new().build();
        tree.fit(&sample).unwrap();

        let predictions = tree.predict_all(sample.features()).unwrap();
        assert_eq!(predictions, sample.labels());
        assert_eq!(tree.n_leaves(), Some(3));
    }

    #[test]
    fn depth_is_bounded() {
        let sample = toy_sample();
        let mut tree = DecisionTreeBuilder::new()
            .max_depth(1)
            .split_by(SplitBy::Entropy)
            .build();
        tree.fit(&sample).unwrap();

        assert_eq!(tree.depth(), Some(1));
    }

    #[test]
    fn single_class_grows_a_leaf() {
        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.3, 0.3), 6);
        sample.push(Point::new(-0.3, 0.1), 6);

        let mut tree = DecisionTreeBuilder::new().build();
        tree.fit(&sample).unwrap();

        assert_eq!(tree.depth(), Some(0));
        assert_eq!(tree.predict(&Point::new(1.0, -1.0)).unwrap(), 6);
    }
}
