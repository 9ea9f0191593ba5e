//! A simple decision tree algorithm for multi-class labels.

pub(crate) mod builder;
pub(crate) mod dtree;
pub(crate) mod node;
pub(crate) mod split_by;

pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use split_by::SplitBy;
