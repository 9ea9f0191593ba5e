//! Constants shared by the committee, the sampler and the classifiers.

/// Dimension of the feature space.
pub const DIMENSION: usize = 2;

/// The size of the label space set as default.
pub const DEFAULT_LABEL_SPACE: usize = 10;

/// Grid cells added to `ceil(sqrt(total_queries))`
/// when the candidate pool resolution is derived from the budget.
pub const POOL_PADDING: usize = 2;

/// Disagreement scores above this value are clamped to it.
/// Only "unanimous" versus "disagreeing" matters.
pub const DISAGREEMENT_CAP: usize = 2;

/// Regularization parameter of the reference margin-based voter.
pub const DEFAULT_SVM_C: f64 = 10.0;
/// Kernel width of the reference margin-based voter.
pub const DEFAULT_SVM_GAMMA: f64 = 10.0;
/// Stopping tolerance on the projected gradient of the dual problem.
pub const SVM_TOLERANCE: f64 = 1e-3;
/// Maximal number of passes over the training sample.
pub const SVM_MAX_PASSES: usize = 1_000;

/// The number of neighbors of the reference nearest-neighbor voter.
pub const DEFAULT_NEIGHBORS: usize = 1;

/// The maximal depth of a decision tree set as default.
pub const DEFAULT_MAX_DEPTH: usize = 1_000;
/// The number of trees of a random forest set as default.
pub const DEFAULT_N_TREES: usize = 10;
