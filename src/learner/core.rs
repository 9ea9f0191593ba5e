//! Provides `Classifier` trait.

use std::collections::BTreeMap;

use crate::{
    ClassifierError,
    Label,
    LabeledSample,
    Point,
};


/// A trait that defines the behavor of a classifier
/// that can take a seat in the committee.
///
/// A classifier is re-fitted from scratch every round,
/// so [`Classifier::fit`] must forget the previous training sample.
///
/// # Required Methods
/// - [`Classifier::name`]
/// - [`Classifier::fit`]
/// - [`Classifier::predict`]
/// - [`Classifier::info`] ... optional.
///
/// # Provided Methods
/// - [`Classifier::predict_all`]
pub trait Classifier: Send {
    /// Returns the name of the classifier.
    fn name(&self) -> &str;


    /// Returns the hyperparameters of the classifier as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Trains `self` on the whole `sample`.
    fn fit(&mut self, sample: &LabeledSample) -> Result<(), ClassifierError>;


    /// Predicts the label of the given point.
    fn predict(&self, point: &Point) -> Result<Label, ClassifierError>;


    /// Predicts the labels of the given points.
    fn predict_all(&self, points: &[Point])
        -> Result<Vec<Label>, ClassifierError>
    {
        points.iter()
            .map(|point| self.predict(point))
            .collect()
    }
}


impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn info(&self) -> Option<Vec<(&str, String)>> {
        (**self).info()
    }

    fn fit(&mut self, sample: &LabeledSample) -> Result<(), ClassifierError> {
        (**self).fit(sample)
    }

    fn predict(&self, point: &Point) -> Result<Label, ClassifierError> {
        (**self).predict(point)
    }

    fn predict_all(&self, points: &[Point])
        -> Result<Vec<Label>, ClassifierError>
    {
        (**self).predict_all(points)
    }
}


/// Returns the most frequent label.
/// Ties are broken by the smallest label.
/// Returns `None` for an empty input.
pub(crate) fn majority_vote<I>(labels: I) -> Option<Label>
    where I: IntoIterator<Item = Label>
{
    let mut counter: BTreeMap<Label, usize> = BTreeMap::new();
    for y in labels {
        *counter.entry(y).or_insert(0) += 1;
    }

    counter.into_iter()
        .fold(None, |best, (y, cnt)| match best {
            Some((_, best_cnt)) if best_cnt >= cnt => best,
            _ => Some((y, cnt)),
        })
        .map(|(y, _)| y)
}
