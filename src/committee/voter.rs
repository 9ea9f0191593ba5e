use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    Classifier,
    ClassifierError,
    KNearestNeighbors,
    Label,
    LabeledSample,
    Point,
};
use super::tally::OneHotMatrix;


/// When a voter replaces its primary classifier
/// by the 1-nearest-neighbor fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallbackPolicy {
    /// Always train the primary classifier.
    Never,
    /// Fall back while the labeled points carry fewer than 2 labels.
    SingleClass,
    /// Fall back while there are at most `k` labeled points.
    MinSamples(usize),
}


/// The classifier a voter trains in the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterSelector {
    /// The primary classifier of the voter.
    Primary,
    /// The 1-nearest-neighbor fallback.
    Fallback,
}


/// Chooses the classifier to train on `labels` under `policy`.
pub fn choose_adapter(policy: FallbackPolicy, labels: &[Label])
    -> AdapterSelector
{
    let fallback = match policy {
        FallbackPolicy::Never => false,
        FallbackPolicy::SingleClass => {
            labels.iter().all(|&y| Some(y) == labels.first().copied())
        },
        FallbackPolicy::MinSamples(k) => labels.len() <= k,
    };

    if fallback {
        AdapterSelector::Fallback
    } else {
        AdapterSelector::Primary
    }
}


/// A member of the committee.
/// A voter owns its classifier exclusively.
/// Every round, it is retrained from scratch on the labeled points
/// and votes on every candidate of the pool.
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// // An RBF machine that needs two classes.
/// let voter = Voter::new(RbfSvm::new())
///     .fallback(FallbackPolicy::SingleClass);
/// ```
pub struct Voter {
    primary: Box<dyn Classifier>,
    fallback: KNearestNeighbors,
    policy: FallbackPolicy,
    active: AdapterSelector,
    snapshot: OneHotMatrix,
}


impl Voter {
    /// Construct a voter that always trains `classifier`.
    pub fn new<C>(classifier: C) -> Self
        where C: Classifier + 'static
    {
        Self {
            primary: Box::new(classifier),
            fallback: KNearestNeighbors::new(1),
            policy: FallbackPolicy::Never,
            active: AdapterSelector::Primary,
            snapshot: OneHotMatrix::default(),
        }
    }


    /// Set the fallback policy.
    pub fn fallback(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }


    /// Returns the fallback policy.
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }


    /// Returns the classifier trained in the last round.
    pub fn active_adapter(&self) -> AdapterSelector {
        self.active
    }


    /// Returns the primary classifier.
    pub fn classifier(&self) -> &dyn Classifier {
        self.primary.as_ref()
    }


    /// Returns the name of the primary classifier.
    pub fn name(&self) -> &str {
        self.primary.name()
    }


    /// Returns the one-hot predictions of the last round.
    pub fn snapshot(&self) -> &OneHotMatrix {
        &self.snapshot
    }


    fn adapter(&self) -> &dyn Classifier {
        match self.active {
            AdapterSelector::Primary => self.primary.as_ref(),
            AdapterSelector::Fallback => &self.fallback,
        }
    }


    /// Retrains the voter from scratch on the whole `sample`.
    pub fn train(&mut self, sample: &LabeledSample)
        -> Result<(), ClassifierError>
    {
        self.active = choose_adapter(self.policy, sample.labels());
        match self.active {
            AdapterSelector::Primary => self.primary.fit(sample),
            AdapterSelector::Fallback => self.fallback.fit(sample),
        }
    }


    /// Predicts every point of `pool`, one-hot encodes the labels
    /// to width `n_labels` and stores the result as the snapshot.
    pub fn score_pool(&mut self, pool: &[Point], n_labels: usize)
        -> Result<&OneHotMatrix, ClassifierError>
    {
        let labels = self.adapter().predict_all(pool)?;
        if labels.len() != pool.len() {
            return Err(ClassifierError::LengthMismatch {
                features: pool.len(),
                labels: labels.len(),
            });
        }
        self.snapshot = OneHotMatrix::encode(&labels, n_labels)?;
        Ok(&self.snapshot)
    }
}


impl fmt::Display for Voter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = match self.policy {
            FallbackPolicy::Never => String::from(""),
            FallbackPolicy::SingleClass => {
                String::from(" (1-NN until 2 labels)")
            },
            FallbackPolicy::MinSamples(k) => {
                format!(" (1-NN until {} points)", k + 1)
            },
        };
        write!(f, "{}{policy}", self.primary.name())
    }
}
