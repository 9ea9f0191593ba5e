//! The sampling loop and the oracle that it queries.

pub(crate) mod core;
pub(crate) mod oracle;
pub(crate) mod committee_sampler;


pub use self::core::{Sampler, CurrentRound};
pub use oracle::{Oracle, ClassifierOracle};
pub use committee_sampler::CommitteeSampler;
