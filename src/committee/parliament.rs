use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::{
    checkers,
    LabeledSample,
    Point,
    SamplingError,
};
use super::pool::CandidatePool;
use super::tally::Tally;
use super::voter::Voter;


/// What happened in a single round of the committee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummary {
    /// The pool size before the selection.
    pub pool_size: usize,
    /// The largest disagreement score over the pool.
    pub max_score: usize,
    /// The number of candidates achieving `max_score`.
    pub n_tied: usize,
    /// The selected point.
    pub chosen: Point,
}


/// The committee of voters (a.k.a. the parliament).
///
/// In each round,
/// 1. every voter is retrained from scratch on the labeled points,
/// 2. every voter predicts the labels of the whole candidate pool,
/// 3. the predictions are tallied per candidate and label,
/// 4. each candidate is scored by the number of distinct labels
///    proposed for it, clamped to `2`,
/// 5. the next query is drawn uniformly at random
///    among the candidates with the largest score,
///    and removed from the pool.
///
/// Voters are retrained in parallel;
/// their ballots are tallied in the order of the roster.
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let voters = vec![
///     Voter::new(RbfSvm::new()).fallback(FallbackPolicy::SingleClass),
///     Voter::new(KNearestNeighbors::new(1)),
/// ];
/// let pool = CandidatePool::for_budget(100);
/// let mut committee = Committee::new(voters, pool, 2)
///     .unwrap()
///     .seed(1234);
///
/// let mut sample = LabeledSample::new();
/// sample.push(Point::new(0.1, -0.3), 1);
/// let next = committee.select_next_query(&sample).unwrap();
/// assert!(next.in_unit_square());
/// ```
pub struct Committee {
    voters: Vec<Voter>,
    pool: CandidatePool,
    n_labels: usize,
    rng: StdRng,
    last_round: Option<RoundSummary>,
}


impl Committee {
    /// Construct a new committee.
    /// Returns `Err` if `voters` is empty or `n_labels == 0`.
    /// The tie-break generator is seeded from the entropy of the system;
    /// use [`Committee::seed`] for a reproducible committee.
    pub fn new(voters: Vec<Voter>, pool: CandidatePool, n_labels: usize)
        -> Result<Self, SamplingError>
    {
        if voters.is_empty() {
            return Err(SamplingError::EmptyRoster);
        }
        checkers::label_space(n_labels)?;

        Ok(Self {
            voters,
            pool,
            n_labels,
            rng: StdRng::from_entropy(),
            last_round: None,
        })
    }


    /// Set the seed of the tie-break generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }


    /// Returns the voters.
    pub fn voters(&self) -> &[Voter] {
        &self.voters[..]
    }


    /// Returns the remaining candidates.
    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }


    /// Returns the size of the label space.
    pub fn n_labels(&self) -> usize {
        self.n_labels
    }


    /// Returns the summary of the last round, if any.
    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }


    /// Retrains the voters on `sample` and tallies their ballots
    /// over the current pool.
    fn vote(&mut self, sample: &LabeledSample) -> Result<Tally, SamplingError> {
        let n_labels = self.n_labels;
        let candidates = self.pool.points();

        // Every voter runs to completion,
        // so the reported failure is the first one in roster order.
        self.voters.par_iter_mut()
            .enumerate()
            .map(|(index, voter)| {
                let result = voter.train(sample)
                    .and_then(|_| {
                        voter.score_pool(candidates, n_labels)?;
                        Ok(())
                    });
                result.map_err(|source| SamplingError::Voter {
                        index,
                        name: voter.name().to_string(),
                        source,
                    })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<(), _>>()?;

        let ballots = self.voters.iter().map(|voter| voter.snapshot());
        Ok(Tally::from_ballots(candidates.len(), n_labels, ballots))
    }


    /// Chooses the next point to query given the labeled points so far.
    /// The chosen point is removed from the pool.
    ///
    /// Returns `Err` if the pool is empty or some voter fails.
    pub fn select_next_query(&mut self, sample: &LabeledSample)
        -> Result<Point, SamplingError>
    {
        if self.pool.is_empty() {
            return Err(SamplingError::PoolExhausted { remaining_queries: 1 });
        }

        let scores = self.vote(sample)?.disagreement_scores();

        let max_score = scores.iter()
            .copied()
            .max()
            .unwrap_or_default();
        let mut tied = scores.into_iter()
            .enumerate()
            .filter_map(|(i, s)| if s == max_score { Some(i) } else { None })
            .collect::<Vec<_>>();
        let n_tied = tied.len();

        tied.shuffle(&mut self.rng);
        let pool_size = self.pool.len();
        let chosen = self.pool.remove(tied[0])?;

        self.last_round = Some(RoundSummary {
            pool_size, max_score, n_tied, chosen,
        });
        Ok(chosen)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FallbackPolicy, KNearestNeighbors, RbfSvm};

    fn default_voters() -> Vec<Voter> {
        vec![
            Voter::new(RbfSvm::new()).fallback(FallbackPolicy::SingleClass),
            Voter::new(KNearestNeighbors::new(1)),
        ]
    }

    #[test]
    fn rejects_empty_roster() {
        let pool = CandidatePool::grid(3);
        assert!(matches!(
            Committee::new(Vec::new(), pool, 2),
            Err(SamplingError::EmptyRoster)
        ));
    }

    #[test]
    fn rejects_empty_label_space() {
        let pool = CandidatePool::grid(3);
        assert!(matches!(
            Committee::new(default_voters(), pool, 0),
            Err(SamplingError::InvalidLabelSpace)
        ));
    }

    #[test]
    fn exhausted_pool() {
        let pool = CandidatePool::from_points(vec![Point::new(0.0, 0.0)]);
        let mut committee = Committee::new(default_voters(), pool, 2)
            .unwrap()
            .seed(0);

        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.5, 0.5), 1);

        let first = committee.select_next_query(&sample).unwrap();
        assert_eq!(first, Point::new(0.0, 0.0));
        assert!(committee.pool().is_empty());

        assert!(matches!(
            committee.select_next_query(&sample),
            Err(SamplingError::PoolExhausted { .. })
        ));
    }

    #[test]
    fn summary_of_unanimous_round() {
        let pool = CandidatePool::grid(4);
        let mut committee = Committee::new(default_voters(), pool, 2)
            .unwrap()
            .seed(3);

        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.2, 0.2), 0);
        let chosen = committee.select_next_query(&sample).unwrap();

        let summary = committee.last_round().unwrap();
        assert_eq!(summary.pool_size, 16);
        assert_eq!(summary.max_score, 1);
        assert_eq!(summary.n_tied, 16);
        assert_eq!(summary.chosen, chosen);
    }

    #[test]
    fn voter_failure_names_the_voter() {
        // The label 5 does not fit in the label space.
        let pool = CandidatePool::grid(3);
        let mut committee = Committee::new(default_voters(), pool, 2)
            .unwrap();

        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.2, 0.2), 5);

        let err = committee.select_next_query(&sample).unwrap_err();
        assert!(matches!(err, SamplingError::Voter { .. }));
        assert_eq!(committee.pool().len(), 9);
    }

    #[test]
    fn first_failing_voter_is_reported() {
        // Every voter rejects the label 5.
        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.2, 0.2), 5);
        sample.push(Point::new(-0.2, 0.4), 1);

        for _ in 0..20 {
            let voters = (0..8)
                .map(|_| Voter::new(KNearestNeighbors::new(1)))
                .collect::<Vec<_>>();
            let pool = CandidatePool::grid(3);
            let mut committee = Committee::new(voters, pool, 2).unwrap();

            let err = committee.select_next_query(&sample).unwrap_err();
            assert!(
                matches!(err, SamplingError::Voter { index: 0, .. }),
                "{err}"
            );
        }
    }
}
