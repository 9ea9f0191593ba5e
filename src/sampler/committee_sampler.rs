//! The query-by-committee sampler.

use rand::prelude::*;
use rand::rngs::StdRng;

use std::ops::ControlFlow;

use crate::{
    checkers,
    CandidatePool,
    Committee,
    Label,
    LabeledSample,
    Point,
    RelabelPolicy,
    SamplingError,
    SessionConfig,
};
use crate::committee::RoundSummary;
use super::core::{CurrentRound, Sampler};
use super::oracle::Oracle;


/// The query-by-committee sampler.
///
/// The first point is drawn uniformly at random from `[-1, 1)^2`.
/// If the budget allows a second query,
/// [`CommitteeSampler`] then seats a [`Committee`]
/// over a grid of `(ceil(sqrt(total_queries)) + 2)^2` candidates.
/// Every later point is the committee's choice
/// given the oracle's labels of the points acquired so far.
/// The committee lives until the budget is exhausted.
///
/// A seeded session is reproducible:
/// the first point, the committee's tie-breaks and
/// the randomized voters draw from generators derived from the seed.
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let oracle = |p: &Point| -> Label { if p.x() > 0.0 { 1 } else { 0 } };
///
/// let config = SessionConfig::new(5)
///     .label_space_size(2)
///     .seed(1234);
/// let mut sampler = CommitteeSampler::init(config).unwrap();
/// let points = sampler.run(&oracle).unwrap();
///
/// assert_eq!(points.len(), 5);
/// assert!(points.iter().all(|p| p.in_unit_square()));
/// ```
pub struct CommitteeSampler {
    config: SessionConfig,
    total_queries: usize,

    rng: StdRng,
    acquired: Vec<Point>,
    labels: Vec<Label>,
    committee: Option<Committee>,
    current_round: Option<RoundSummary>,
}


impl CommitteeSampler {
    /// Initialize the sampler.
    /// Returns `Err` if the budget is negative,
    /// the label space is empty,
    /// a roster entry is invalid (or the roster has no seat),
    /// or the candidate grid overflows.
    pub fn init(config: SessionConfig) -> Result<Self, SamplingError> {
        let total_queries = checkers::budget(config.total_queries)?;
        checkers::label_space(config.label_space_size)?;
        checkers::roster(&config.roster)?;
        if let Some(resolution) = config.pool_resolution {
            checkers::pool_resolution(resolution)?;
        }

        let rng = session_rng(config.seed);
        Ok(Self {
            config,
            total_queries,

            rng,
            acquired: Vec::new(),
            labels: Vec::new(),
            committee: None,
            current_round: None,
        })
    }


    /// Returns the configuration of the session.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }


    /// Returns the committee, if seated.
    pub fn committee(&self) -> Option<&Committee> {
        self.committee.as_ref()
    }


    /// Returns the resolution of the candidate grid.
    pub fn pool_resolution(&self) -> usize {
        self.config.pool_resolution
            .unwrap_or_else(|| CandidatePool::resolution_for(self.total_queries))
    }


    fn seat_committee(&mut self) -> Result<Committee, SamplingError> {
        let voters = self.config.roster.iter()
            .map(|spec| spec.build(self.rng.gen()))
            .collect::<Vec<_>>();
        let pool = CandidatePool::grid(self.pool_resolution());
        let committee = Committee::new(
                voters, pool, self.config.label_space_size
            )?
            .seed(self.rng.gen());
        Ok(committee)
    }


    /// Returns the oracle's labels of the acquired points.
    fn relabel<O>(&mut self, oracle: &O) -> Result<Vec<Label>, SamplingError>
        where O: Oracle
    {
        let start = match self.config.relabel {
            RelabelPolicy::Full => 0,
            RelabelPolicy::Cached => self.labels.len(),
        };
        let points = &self.acquired[start..];

        let labels = oracle.predict(points)
            .map_err(SamplingError::Oracle)?;
        if labels.len() != points.len() {
            return Err(SamplingError::OracleMismatch {
                expected: points.len(),
                found: labels.len(),
            });
        }
        for &y in labels.iter() {
            checkers::label(y, self.config.label_space_size)
                .map_err(SamplingError::Oracle)?;
        }

        match self.config.relabel {
            RelabelPolicy::Full => { self.labels = labels; },
            RelabelPolicy::Cached => { self.labels.extend(labels); },
        }
        Ok(self.labels.clone())
    }
}


fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}


impl Sampler for CommitteeSampler {
    type Output = Vec<Point>;


    fn name(&self) -> &str {
        "Query-by-Committee"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let seed = self.config.seed
            .map(|seed| seed.to_string())
            .unwrap_or_else(|| "Entropy".into());
        let mut info = Vec::from([
            ("# of queries", format!("{}", self.total_queries)),
            ("Label space", format!("{}", self.config.label_space_size)),
            ("Pool resolution", format!("{}", self.pool_resolution())),
            ("Relabel", format!("{}", self.config.relabel)),
            ("Seed", seed),
        ]);
        info.extend(
            self.config.roster.iter()
                .map(|spec| ("Voter", format!("{spec}")))
        );
        Some(info)
    }


    fn preprocess(&mut self) -> Result<(), SamplingError> {
        self.rng = session_rng(self.config.seed);
        self.acquired.clear();
        self.labels.clear();
        self.committee = None;
        self.current_round = None;
        Ok(())
    }


    fn sample<O>(&mut self, oracle: &O, _iteration: usize)
        -> Result<ControlFlow<usize>, SamplingError>
        where O: Oracle
    {
        if self.acquired.len() >= self.total_queries {
            return Ok(ControlFlow::Break(self.acquired.len()));
        }

        if self.acquired.is_empty() {
            let x = self.rng.gen_range(-1.0..1.0);
            let y = self.rng.gen_range(-1.0..1.0);
            self.acquired.push(Point::new(x, y));
            self.current_round = None;

            if self.total_queries > 1 {
                self.committee = Some(self.seat_committee()?);
            }
        } else {
            let labels = self.relabel(oracle)?;
            let sample = LabeledSample::from_parts(
                self.acquired.clone(), labels
            )?;

            let committee = match self.committee.take() {
                Some(committee) => committee,
                None => self.seat_committee()?,
            };
            let committee = self.committee.insert(committee);

            let remaining_queries = self.total_queries - self.acquired.len();
            let point = committee.select_next_query(&sample)
                .map_err(|e| match e {
                    SamplingError::PoolExhausted { .. } => {
                        SamplingError::PoolExhausted { remaining_queries }
                    },
                    e => e,
                })?;
            self.current_round = committee.last_round().copied();
            self.acquired.push(point);
        }

        if self.acquired.len() >= self.total_queries {
            Ok(ControlFlow::Break(self.acquired.len()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    }


    fn postprocess(&mut self) -> Result<Self::Output, SamplingError> {
        self.committee = None;
        Ok(self.acquired.clone())
    }
}


impl CurrentRound for CommitteeSampler {
    fn acquired(&self) -> &[Point] {
        &self.acquired[..]
    }


    fn current_round(&self) -> Option<RoundSummary> {
        self.current_round
    }
}
