//! The committee (a.k.a. parliament) of voters
//! and the query-by-committee selection rule.

pub(crate) mod pool;
pub(crate) mod tally;
pub(crate) mod voter;
pub(crate) mod roster;
pub(crate) mod parliament;


pub use pool::CandidatePool;
pub use tally::{OneHotMatrix, Tally};
pub use voter::{
    AdapterSelector,
    FallbackPolicy,
    Voter,
    choose_adapter,
};
pub use roster::VoterSpec;
pub use parliament::{Committee, RoundSummary};
