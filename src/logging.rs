//! Logs the rounds of a sampling session.

pub(crate) mod logger;

pub use logger::Logger;
