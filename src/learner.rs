//! The files in `learner/` directory defines
//! `Classifier` trait and the reference classifiers
//! that make up the default committee.

/// Provides Classifier trait.
pub mod core;

/// Defines k-nearest neighbors.
pub mod nearest_neighbors;

/// Defines the RBF kernel machine.
pub mod svm;

/// Defines Decision Tree.
pub mod decision_tree;

/// Defines Random Forest.
pub mod random_forest;


pub use self::core::Classifier;
pub(crate) use self::core::majority_vote;

pub use self::nearest_neighbors::KNearestNeighbors;

pub use self::svm::RbfSvm;

pub use self::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    SplitBy,
};

pub use self::random_forest::RandomForest;
