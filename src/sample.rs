//! Struct `Point` represents a feature vector and
//! struct `LabeledSample` the points labeled so far.

// Provides point struct.
pub(crate) mod point;
// Provides labeled sample struct.
pub(crate) mod labeled_sample;


pub use point::Point;
pub use labeled_sample::LabeledSample;


/// A class label. Labels take values in `0..L`,
/// where `L` is the size of the label space.
pub type Label = usize;
