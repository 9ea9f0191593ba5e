use serde::{Serialize, Deserialize};

use std::cmp::Ordering;

use crate::{
    checkers,
    Classifier,
    ClassifierError,
    Label,
    LabeledSample,
    Point,
};
use crate::constants::DEFAULT_NEIGHBORS;
use super::majority_vote;


/// The k-nearest neighbors classifier.
/// Predicts the majority label among the `k` training points
/// closest to the query point (euclidean distance).
///
/// Ties on the vote are broken by the smallest label,
/// ties on the distance by the training order.
///
/// With `k == 1`, [`KNearestNeighbors`] tolerates a training sample
/// of a single class, so that the committee uses it as the fallback
/// of the classifiers that do not.
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let mut sample = LabeledSample::new();
/// sample.push(Point::new(-0.5, 0.0), 0);
/// sample.push(Point::new( 0.5, 0.0), 1);
///
/// let mut knn = KNearestNeighbors::new(1);
/// knn.fit(&sample).unwrap();
/// assert_eq!(knn.predict(&Point::new(0.4, 0.2)).unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KNearestNeighbors {
    k: usize,
    train: Option<LabeledSample>,
}


impl KNearestNeighbors {
    /// Construct a new instance of [`KNearestNeighbors`]
    /// that looks `k` neighbors.
    pub fn new(k: usize) -> Self {
        assert!(k > 0, "The number of neighbors must be positive");
        Self { k, train: None }
    }


    /// Returns the number of neighbors.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }
}


impl Default for KNearestNeighbors {
    fn default() -> Self {
        Self::new(DEFAULT_NEIGHBORS)
    }
}


impl Classifier for KNearestNeighbors {
    fn name(&self) -> &str {
        "k-Nearest Neighbors"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of neighbors", format!("{}", self.k)),
        ]);
        Some(info)
    }


    fn fit(&mut self, sample: &LabeledSample) -> Result<(), ClassifierError> {
        checkers::sample(sample)?;
        let n_sample = sample.len();
        if n_sample < self.k {
            return Err(ClassifierError::TooFewSamples {
                required: self.k,
                found: n_sample,
            });
        }
        self.train = Some(sample.clone());
        Ok(())
    }


    fn predict(&self, point: &Point) -> Result<Label, ClassifierError> {
        let train = self.train.as_ref()
            .ok_or(ClassifierError::NotFitted)?;

        // `(distance, training index)` is a total order,
        // so the k smallest keys are the ones a stable sort would pick.
        let mut keys = train.features()
            .iter()
            .enumerate()
            .map(|(i, x)| (x.squared_distance(point), i))
            .collect::<Vec<_>>();
        let by_key = |a: &(f64, usize), b: &(f64, usize)| -> Ordering {
            a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
        };
        keys.select_nth_unstable_by(self.k - 1, by_key);

        let labels = train.labels();
        majority_vote(keys[..self.k].iter().map(|&(_, i)| labels[i]))
            .ok_or(ClassifierError::NotFitted)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy_sample() -> LabeledSample {
        let features = vec![
            Point::new(-0.9, -0.9),
            Point::new(-0.8, -0.7),
            Point::new(-0.7, -0.9),
            Point::new( 0.8,  0.8),
            Point::new( 0.9,  0.7),
        ];
        let labels = vec![0, 0, 0, 1, 1];
        LabeledSample::from_parts(features, labels).unwrap()
    }

    #[test]
    fn one_nearest_neighbor() {
        let mut knn = KNearestNeighbors::new(1);
        knn.fit(&toy_sample()).unwrap();

        assert_eq!(knn.predict(&Point::new(-0.5, -0.5)).unwrap(), 0);
        assert_eq!(knn.predict(&Point::new( 0.5,  0.6)).unwrap(), 1);
    }

    #[test]
    fn three_nearest_neighbors_vote() {
        let mut knn = KNearestNeighbors::new(3);
        knn.fit(&toy_sample()).unwrap();

        // The two closest points are `1`s, the third one is a `0`.
        assert_eq!(knn.predict(&Point::new(0.7, 0.7)).unwrap(), 1);
        // All five points vote: three `0`s.
        let mut knn = KNearestNeighbors::new(5);
        knn.fit(&toy_sample()).unwrap();
        assert_eq!(knn.predict(&Point::new(0.7, 0.7)).unwrap(), 0);
    }

    #[test]
    fn single_class_is_fine() {
        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.1, 0.2), 4);

        let mut knn = KNearestNeighbors::new(1);
        knn.fit(&sample).unwrap();
        assert_eq!(knn.predict(&Point::new(-1.0, 1.0)).unwrap(), 4);
    }

    #[test]
    fn too_few_samples() {
        let mut knn = KNearestNeighbors::new(7);
        let err = knn.fit(&toy_sample()).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::TooFewSamples { required: 7, found: 5 }
        );
    }

    #[test]
    fn not_fitted() {
        let knn = KNearestNeighbors::new(1);
        assert_eq!(
            knn.predict(&Point::new(0.0, 0.0)),
            Err(ClassifierError::NotFitted)
        );
    }
}
