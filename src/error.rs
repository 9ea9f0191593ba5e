//! Error types of this crate.
//!
//! [`ClassifierError`] is returned by a single classifier,
//! [`SamplingError`] by the committee and the sampler.

use crate::Label;


/// Errors raised while training or evaluating a classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    /// The training sample has no example.
    #[error("the training sample is empty")]
    EmptySample,

    /// The classifier needs at least two classes.
    #[error("expected at least 2 classes, got only label {label}")]
    SingleClass {
        /// The only label in the training sample.
        label: Label,
    },

    /// The classifier needs more examples than given.
    #[error("expected at least {required} examples, got {found}")]
    TooFewSamples {
        /// The number of examples required.
        required: usize,
        /// The number of examples given.
        found: usize,
    },

    /// `predict` is called before `fit`.
    #[error("the classifier is not fitted yet")]
    NotFitted,

    /// Features and labels have different lengths.
    #[error("{features} features but {labels} labels")]
    LengthMismatch {
        /// The number of features.
        features: usize,
        /// The number of labels.
        labels: usize,
    },

    /// A label does not fit in the label space.
    #[error("label {label} is out of the label space 0..{n_labels}")]
    LabelOutOfRange {
        /// The offending label.
        label: Label,
        /// The size of the label space.
        n_labels: usize,
    },
}


/// Errors raised by the committee and the sampler.
#[derive(Debug, thiserror::Error)]
pub enum SamplingError {
    /// The query budget is negative.
    #[error("invalid query budget: {0} (must be >= 0)")]
    InvalidBudget(i64),

    /// The label space is empty.
    #[error("the label space must have at least one label")]
    InvalidLabelSpace,

    /// The committee has no voter.
    #[error("the committee has no voter")]
    EmptyRoster,

    /// A roster entry has an invalid hyperparameter.
    #[error("invalid roster entry #{index}: {reason}")]
    InvalidRoster {
        /// Position of the entry in the roster.
        index: usize,
        /// The offending hyperparameter.
        reason: String,
    },

    /// The candidate grid of this resolution does not fit in memory.
    #[error("invalid pool resolution: {0} (the grid size overflows)")]
    InvalidPoolResolution(usize),

    /// Every candidate has already been queried.
    #[error(
        "the candidate pool is exhausted \
        ({remaining_queries} queries remain)"
    )]
    PoolExhausted {
        /// The number of queries that could not be served.
        remaining_queries: usize,
    },

    /// A voter failed to train or to vote.
    #[error("voter #{index} ({name}) failed: {source}")]
    Voter {
        /// Position of the voter in the committee.
        index: usize,
        /// Name of the voter's classifier.
        name: String,
        /// The underlying failure.
        #[source]
        source: ClassifierError,
    },

    /// The oracle answered with a wrong number of labels.
    #[error("the oracle returned {found} labels for {expected} points")]
    OracleMismatch {
        /// The number of points sent.
        expected: usize,
        /// The number of labels received.
        found: usize,
    },

    /// The oracle failed to label the points.
    #[error("the oracle failed: {0}")]
    Oracle(#[source] ClassifierError),

    /// The labeled sample is malformed.
    #[error(transparent)]
    Sample(#[from] ClassifierError),

    /// Reading a configuration or writing a log failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A configuration file is malformed.
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),
}
