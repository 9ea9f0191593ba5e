//! Provides `Oracle` trait.

use crate::{
    Classifier,
    ClassifierError,
    Label,
    LabeledSample,
    Point,
};


/// The target being cloned.
/// An oracle answers the label queries of a [`Sampler`](crate::Sampler).
///
/// Any function `Fn(&Point) -> Label` is an oracle.
/// A fitted [`Classifier`] becomes an oracle
/// through [`ClassifierOracle`].
pub trait Oracle {
    /// Returns the name of the oracle.
    fn name(&self) -> &str {
        "Oracle"
    }


    /// Labels the given points, one label per point.
    fn predict(&self, points: &[Point]) -> Result<Vec<Label>, ClassifierError>;
}


impl<F> Oracle for F
    where F: Fn(&Point) -> Label
{
    fn predict(&self, points: &[Point]) -> Result<Vec<Label>, ClassifierError> {
        Ok(points.iter().map(self).collect())
    }
}


/// A fitted classifier used as the target.
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let mut sample = LabeledSample::new();
/// sample.push(Point::new(-0.5, 0.0), 0);
/// sample.push(Point::new( 0.5, 0.0), 1);
///
/// let target = ClassifierOracle::fit(KNearestNeighbors::new(1), &sample)
///     .unwrap();
/// let labels = target.predict(&[Point::new(0.9, 0.9)]).unwrap();
/// assert_eq!(labels, vec![1]);
/// ```
pub struct ClassifierOracle<C> {
    classifier: C,
}


impl<C: Classifier> ClassifierOracle<C> {
    /// Wraps a fitted classifier.
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }


    /// Fits `classifier` on `sample` and wraps it.
    pub fn fit(mut classifier: C, sample: &LabeledSample)
        -> Result<Self, ClassifierError>
    {
        classifier.fit(sample)?;
        Ok(Self::new(classifier))
    }


    /// Returns the wrapped classifier.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}


impl<C: Classifier> Oracle for ClassifierOracle<C> {
    fn name(&self) -> &str {
        self.classifier.name()
    }


    fn predict(&self, points: &[Point]) -> Result<Vec<Label>, ClassifierError> {
        self.classifier.predict_all(points)
    }
}
