//! Provides `Sampler` trait.

use std::ops::ControlFlow;

use crate::{Point, SamplingError};
use crate::committee::RoundSummary;
use super::oracle::Oracle;


/// The trait [`Sampler`] defines the standard framework of
/// an active sampling session.
/// Here, the **standard framework** is defined as
/// a repeated game between **Sampler** and **Oracle**
/// of the following form:
///
/// In each round `t = 1, 2, ...`,
/// 1. Oracle labels the points acquired so far.
/// 2. Sampler chooses the `t`-th point to query.
///
/// The session ends when the query budget is exhausted.
///
/// # Required Methods
/// - [`Sampler::name`]
/// - [`Sampler::preprocess`]
/// - [`Sampler::sample`]
/// - [`Sampler::postprocess`]
/// - [`Sampler::info`] ... optional.
///
/// # Provided Methods
/// - [`Sampler::run`]
pub trait Sampler {
    /// The output of a sampling session.
    type Output;


    /// Returns the name of the sampling strategy.
    fn name(&self) -> &str;


    /// Returns the information of the sampling strategy as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs the sampling session.
    fn run<O>(&mut self, oracle: &O) -> Result<Self::Output, SamplingError>
        where O: Oracle
    {
        self.preprocess()?;

        for iteration in 1.. {
            if self.sample(oracle, iteration)?.is_break() {
                break;
            }
        }

        self.postprocess()
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Sampler::run`],
    /// this method is called before the sampling rounds.
    fn preprocess(&mut self) -> Result<(), SamplingError>;


    /// Sampling step per iteration.
    /// Acquires at most one point and returns
    /// `ControlFlow::Break(n)` once `n` points, the whole budget,
    /// have been acquired.
    fn sample<O>(&mut self, oracle: &O, iteration: usize)
        -> Result<ControlFlow<usize>, SamplingError>
        where O: Oracle;


    /// Post-processing.
    fn postprocess(&mut self) -> Result<Self::Output, SamplingError>;
}


/// The state of a running session, read by the [`Logger`](crate::Logger).
pub trait CurrentRound {
    /// Returns the points acquired so far in acquisition order.
    fn acquired(&self) -> &[Point];


    /// Returns the summary of the committee round that
    /// acquired the last point.
    /// Returns `None` if the last point is not chosen by a committee.
    fn current_round(&self) -> Option<RoundSummary>;
}
