use serde::{Serialize, Deserialize};

use std::collections::BTreeSet;

use crate::{ClassifierError, Label, Point};
use crate::constants::DIMENSION;


/// Struct `LabeledSample` holds the queried points and their labels
/// in the query order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    features: Vec<Point>,
    labels: Vec<Label>,
}


impl LabeledSample {
    /// Construct an empty sample.
    pub fn new() -> Self {
        Self::default()
    }


    /// Construct a sample from the pair `features` and `labels`.
    /// This method returns `Err` if the lengths differ.
    pub fn from_parts(features: Vec<Point>, labels: Vec<Label>)
        -> Result<Self, ClassifierError>
    {
        if features.len() != labels.len() {
            return Err(ClassifierError::LengthMismatch {
                features: features.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }


    /// Append a labeled point at the end.
    pub fn push(&mut self, point: Point, label: Label) {
        self.features.push(point);
        self.labels.push(label);
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.features.len(), DIMENSION)
    }


    /// Returns the number of examples.
    pub fn len(&self) -> usize {
        self.features.len()
    }


    /// Returns `true` if `self` has no example.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }


    /// Returns the slice of points.
    pub fn features(&self) -> &[Point] {
        &self.features[..]
    }


    /// Returns the slice of labels.
    pub fn labels(&self) -> &[Label] {
        &self.labels[..]
    }


    /// Returns the `idx`-th example `(x, y)`.
    pub fn at(&self, idx: usize) -> (Point, Label) {
        (self.features[idx], self.labels[idx])
    }


    /// Returns the distinct labels in ascending order.
    pub fn unique_labels(&self) -> Vec<Label> {
        self.labels.iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }


    /// Returns the number of distinct labels.
    pub fn n_distinct_labels(&self) -> usize {
        self.unique_labels().len()
    }


    /// Decompose `self` into points and labels.
    pub fn into_parts(self) -> (Vec<Point>, Vec<Label>) {
        (self.features, self.labels)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_rejects_length_mismatch() {
        let features = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let err = LabeledSample::from_parts(features, vec![0]).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::LengthMismatch { features: 2, labels: 1 }
        );
    }

    #[test]
    fn keeps_insertion_order() {
        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.5, 0.5), 3);
        sample.push(Point::new(-0.5, 0.5), 1);
        sample.push(Point::new(0.0, -0.5), 3);

        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.at(1), (Point::new(-0.5, 0.5), 1));
        assert_eq!(sample.unique_labels(), vec![1, 3]);
        assert_eq!(sample.n_distinct_labels(), 2);
    }
}
