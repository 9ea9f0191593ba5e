use parliament::prelude::*;


/// A blob of `n` points around `(cx, cy)` labeled `label`.
fn blob(sample: &mut LabeledSample, cx: f64, cy: f64, n: usize, label: Label) {
    for i in 0..n {
        let t = i as f64 / n as f64 - 0.5;
        sample.push(Point::new(cx + 0.1 * t, cy - 0.1 * t), label);
    }
}


// Each coordinate alone separates the blobs.
fn three_blobs() -> LabeledSample {
    let mut sample = LabeledSample::new();
    blob(&mut sample, -0.6, -0.5, 6, 0);
    blob(&mut sample,  0.6, -0.7, 6, 1);
    blob(&mut sample,  0.0,  0.6, 6, 2);
    sample
}


fn classifiers() -> Vec<Box<dyn Classifier>> {
    vec![
        Box::new(KNearestNeighbors::new(1)),
        Box::new(KNearestNeighbors::new(5)),
        Box::new(RbfSvm::new()),
        Box::new(DecisionTreeBuilder::new().build()),
        Box::new(RandomForest::new().seed(0)),
    ]
}


/// Tests for the reference classifiers.
#[cfg(test)]
pub mod classifier_tests {
    use super::*;

    #[test]
    fn every_classifier_separates_blobs() {
        let sample = three_blobs();
        let queries = [
            (Point::new(-0.6, -0.5), 0),
            (Point::new( 0.6, -0.7), 1),
            (Point::new( 0.0,  0.6), 2),
        ];

        for mut clf in classifiers() {
            clf.fit(&sample).unwrap();
            for (point, label) in queries {
                assert_eq!(
                    clf.predict(&point).unwrap(), label,
                    "{} at {point}", clf.name()
                );
            }
        }
    }


    #[test]
    fn every_classifier_refits_from_scratch() {
        let sample = three_blobs();
        let mut flipped = LabeledSample::new();
        for (point, label) in sample.features().iter().zip(sample.labels()) {
            flipped.push(*point, 2 - label);
        }

        for mut clf in classifiers() {
            clf.fit(&sample).unwrap();
            clf.fit(&flipped).unwrap();
            let point = Point::new(-0.6, -0.5);
            assert_eq!(clf.predict(&point).unwrap(), 2, "{}", clf.name());
        }
    }


    #[test]
    fn every_classifier_rejects_empty_sample() {
        let sample = LabeledSample::new();
        for mut clf in classifiers() {
            assert_eq!(
                clf.fit(&sample),
                Err(ClassifierError::EmptySample),
                "{}", clf.name()
            );
        }
    }


    #[test]
    fn fallback_voter_tolerates_single_class() {
        let mut sample = LabeledSample::new();
        blob(&mut sample, 0.2, 0.2, 4, 3);

        let mut svm = RbfSvm::new();
        assert!(svm.fit(&sample).is_err());

        let mut voter = VoterSpec::svm().build(0);
        voter.train(&sample).unwrap();
        assert_eq!(voter.active_adapter(), AdapterSelector::Fallback);

        let pool = CandidatePool::grid(3);
        let ballot = voter.score_pool(pool.points(), 4).unwrap();
        assert_eq!(ballot.shape(), (9, 4));
    }


    #[test]
    fn seven_neighbors_wait_for_eight_points() {
        let mut sample = LabeledSample::new();
        blob(&mut sample, -0.5, 0.0, 4, 0);
        blob(&mut sample,  0.5, 0.0, 3, 1);

        let mut voter = VoterSpec::nearest_neighbors(7).build(0);
        voter.train(&sample).unwrap();
        assert_eq!(voter.active_adapter(), AdapterSelector::Fallback);

        sample.push(Point::new(0.5, 0.5), 1);
        voter.train(&sample).unwrap();
        assert_eq!(voter.active_adapter(), AdapterSelector::Primary);
    }
}
