//! Exports the committee, the sampler, the classifiers and the traits.
//!
pub use crate::sample::{
    Label,
    LabeledSample,
    Point,
};


pub use crate::learner::{
    // Classifier trait
    Classifier,


    // Reference classifiers ---------------------
    KNearestNeighbors,
    RbfSvm,
    DecisionTree,
    DecisionTreeBuilder,
    SplitBy,
    RandomForest,
};


pub use crate::committee::{
    Committee,
    Voter,
    VoterSpec,
    CandidatePool,
    FallbackPolicy,
    AdapterSelector,
    RoundSummary,
};


pub use crate::sampler::{
    Sampler,
    CurrentRound,
    CommitteeSampler,
    Oracle,
    ClassifierOracle,
};


pub use crate::config::{
    SessionConfig,
    RelabelPolicy,
};


pub use crate::error::{
    ClassifierError,
    SamplingError,
};


pub use crate::logging::Logger;
