#![warn(missing_docs)]

//!
//! A crate that provides query-by-committee sampling
//! for cloning an opaque 2D classifier.
//!
//! Given a target classifier (the **oracle**) that answers label queries
//! and a budget of queries,
//! the sampler chooses, one point at a time,
//! which feature vector to query next.
//! The next point is the one on which a committee of
//! heterogeneous classifiers disagrees.
//!
//! - [`Committee`] owns a fixed list of [`Voter`]s and
//!   a shrinking [`CandidatePool`].
//!   Each round, every voter is retrained on the labeled points so far
//!   and votes on every candidate.
//!   A candidate on which two or more labels are proposed
//!   beats any unanimous candidate.
//! - [`CommitteeSampler`] drives the rounds.
//!   It asks the oracle for the labels of the acquired points
//!   and the committee for the next point
//!   until the budget is exhausted.
//!
//! # Example
//! ```no_run
//! use parliament::prelude::*;
//!
//! // The target to be cloned.
//! let oracle = |p: &Point| -> Label { if p.x() > 0.0 { 1 } else { 0 } };
//!
//! let config = SessionConfig::new(100)
//!     .label_space_size(2)
//!     .seed(1234);
//! let mut sampler = CommitteeSampler::init(config).unwrap();
//! let points = sampler.run(&oracle).unwrap();
//! assert_eq!(points.len(), 100);
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod learner;
pub mod committee;
pub mod sampler;
pub mod config;
pub mod logging;
pub mod prelude;

pub(crate) mod checkers;


pub use error::{
    ClassifierError,
    SamplingError,
};

pub use sample::{
    Label,
    LabeledSample,
    Point,
};

pub use learner::{
    Classifier,
    KNearestNeighbors,
    RbfSvm,
    DecisionTree,
    DecisionTreeBuilder,
    SplitBy,
    RandomForest,
};

pub use committee::{
    AdapterSelector,
    CandidatePool,
    Committee,
    FallbackPolicy,
    OneHotMatrix,
    RoundSummary,
    Tally,
    Voter,
    VoterSpec,
    choose_adapter,
};

pub use sampler::{
    ClassifierOracle,
    CommitteeSampler,
    CurrentRound,
    Oracle,
    Sampler,
};

pub use config::{
    RelabelPolicy,
    SessionConfig,
};

pub use logging::Logger;
