use parliament::prelude::*;


/// Predicts the same label everywhere.
struct Constant(Label);

impl Classifier for Constant {
    fn name(&self) -> &str { "Constant" }

    fn fit(&mut self, _: &LabeledSample) -> Result<(), ClassifierError> {
        Ok(())
    }

    fn predict(&self, _: &Point) -> Result<Label, ClassifierError> {
        Ok(self.0)
    }
}


/// Predicts `1` at a single point and `0` elsewhere.
struct Spot(Point);

impl Classifier for Spot {
    fn name(&self) -> &str { "Spot" }

    fn fit(&mut self, _: &LabeledSample) -> Result<(), ClassifierError> {
        Ok(())
    }

    fn predict(&self, point: &Point) -> Result<Label, ClassifierError> {
        Ok(if *point == self.0 { 1 } else { 0 })
    }
}


/// Answers a single label however many points it is asked about.
struct Truncated;

impl Classifier for Truncated {
    fn name(&self) -> &str { "Truncated" }

    fn fit(&mut self, _: &LabeledSample) -> Result<(), ClassifierError> {
        Ok(())
    }

    fn predict(&self, _: &Point) -> Result<Label, ClassifierError> {
        Ok(0)
    }

    fn predict_all(&self, _: &[Point]) -> Result<Vec<Label>, ClassifierError> {
        Ok(vec![0])
    }
}


fn default_voters() -> Vec<Voter> {
    vec![
        Voter::new(RbfSvm::new()).fallback(FallbackPolicy::SingleClass),
        Voter::new(KNearestNeighbors::new(1)),
    ]
}


fn two_label_sample() -> LabeledSample {
    let mut sample = LabeledSample::new();
    sample.push(Point::new(-0.6, 0.2), 0);
    sample.push(Point::new( 0.6, -0.2), 1);
    sample
}


/// Tests for `Committee`.
#[cfg(test)]
pub mod committee_tests {
    use super::*;

    #[test]
    fn pool_shrinks_by_one_per_query() {
        let pool = CandidatePool::grid(5);
        let mut committee = Committee::new(default_voters(), pool, 2)
            .unwrap()
            .seed(17);
        let sample = two_label_sample();

        let mut chosen = Vec::new();
        for _ in 0..6 {
            let before = committee.pool().len();
            let point = committee.select_next_query(&sample).unwrap();
            assert_eq!(committee.pool().len(), before - 1);
            assert!(!committee.pool().points().contains(&point));
            assert!(!chosen.contains(&point));
            chosen.push(point);
        }
    }


    #[test]
    fn unanimous_committee_still_answers() {
        let pool = CandidatePool::grid(4);
        let grid = pool.points().to_vec();
        let voters = vec![
            Voter::new(KNearestNeighbors::new(1)),
            Voter::new(Constant(0)),
        ];
        let mut committee = Committee::new(voters, pool, 2)
            .unwrap()
            .seed(5);

        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.1, 0.1), 0);

        let point = committee.select_next_query(&sample).unwrap();
        assert!(grid.contains(&point));

        let summary = committee.last_round().unwrap();
        assert_eq!(summary.max_score, 1);
        assert_eq!(summary.n_tied, grid.len());
    }


    #[test]
    fn the_only_disagreement_wins() {
        let grid = CandidatePool::grid(5);
        let target = grid.points()[7];

        for seed in 0..50 {
            let voters = vec![
                Voter::new(Constant(0)),
                Voter::new(Spot(target)),
            ];
            let mut committee = Committee::new(voters, grid.clone(), 2)
                .unwrap()
                .seed(seed);

            let point = committee.select_next_query(&two_label_sample())
                .unwrap();
            assert_eq!(point, target);

            let summary = committee.last_round().unwrap();
            assert_eq!(summary.max_score, 2);
            assert_eq!(summary.n_tied, 1);
        }
    }


    #[test]
    fn ties_are_broken_at_random() {
        let a = Point::new(-0.5, 0.5);
        let b = Point::new( 0.5, 0.5);

        let mut hits = [0usize; 2];
        for seed in 0..200 {
            let pool = CandidatePool::from_points(vec![a, b]);
            let voters = vec![Voter::new(Constant(1))];
            let mut committee = Committee::new(voters, pool, 2)
                .unwrap()
                .seed(seed);

            let point = committee.select_next_query(&two_label_sample())
                .unwrap();
            if point == a { hits[0] += 1; } else { hits[1] += 1; }
        }

        assert!(hits[0] > 0 && hits[1] > 0, "hits: {hits:?}");
        assert_eq!(hits[0] + hits[1], 200);
    }


    #[test]
    fn short_ballot_fails_the_round() {
        let voters = vec![
            Voter::new(KNearestNeighbors::new(1)),
            Voter::new(Truncated),
        ];
        let pool = CandidatePool::grid(3);
        let mut committee = Committee::new(voters, pool, 2)
            .unwrap()
            .seed(0);

        let err = committee.select_next_query(&two_label_sample())
            .unwrap_err();
        assert!(matches!(
            err,
            SamplingError::Voter {
                index: 1,
                source: ClassifierError::LengthMismatch {
                    features: 9,
                    labels: 1,
                },
                ..
            }
        ));
        assert_eq!(committee.pool().len(), 9);
        assert!(committee.last_round().is_none());
    }


    #[test]
    fn single_label_uses_fallback() {
        let pool = CandidatePool::grid(4);
        let mut committee = Committee::new(default_voters(), pool, 10)
            .unwrap()
            .seed(1);

        let mut sample = LabeledSample::new();
        sample.push(Point::new(0.3, -0.4), 6);
        let point = committee.select_next_query(&sample).unwrap();
        assert!(point.in_unit_square());

        let svm = &committee.voters()[0];
        assert_eq!(svm.active_adapter(), AdapterSelector::Fallback);
        // Every candidate is labeled `6` by the fallback.
        let snapshot = svm.snapshot();
        assert_eq!(snapshot.shape(), (16, 10));
        assert!((0..16).all(|i| snapshot.label(i) == Some(6)));

        sample.push(Point::new(-0.3, 0.4), 2);
        committee.select_next_query(&sample).unwrap();
        let svm = &committee.voters()[0];
        assert_eq!(svm.active_adapter(), AdapterSelector::Primary);
        assert_eq!(svm.snapshot().shape(), (15, 10));
    }
}
