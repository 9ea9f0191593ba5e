//! This file defines some functions that checks some pre-conditions
//! E.g., the query budget, the label space, the roster.

use crate::{
    ClassifierError,
    Label,
    LabeledSample,
    SamplingError,
    VoterSpec,
};


/// Check whether the query budget is valid or not.
/// Returns the budget as `usize`.
#[inline(always)]
pub(crate) fn budget(total_queries: i64) -> Result<usize, SamplingError> {
    usize::try_from(total_queries)
        .map_err(|_| SamplingError::InvalidBudget(total_queries))
}


/// Check whether the label space has at least one label.
#[inline(always)]
pub(crate) fn label_space(n_labels: usize) -> Result<(), SamplingError> {
    if n_labels == 0 {
        return Err(SamplingError::InvalidLabelSpace);
    }
    Ok(())
}


/// Check whether every roster entry can be built.
/// The classifier builders panic on these hyperparameters,
/// so they are rejected here.
pub(crate) fn roster(roster: &[VoterSpec]) -> Result<(), SamplingError> {
    if roster.is_empty() {
        return Err(SamplingError::EmptyRoster);
    }

    for (index, spec) in roster.iter().enumerate() {
        let reason = match *spec {
            VoterSpec::Svm { c, .. } if !(c.is_finite() && c > 0.0) => {
                Some(format!("C = {c} (must be positive)"))
            },
            VoterSpec::Svm { gamma, .. }
                if !(gamma.is_finite() && gamma > 0.0) =>
            {
                Some(format!("gamma = {gamma} (must be positive)"))
            },
            VoterSpec::NearestNeighbors { k: 0 } => {
                Some(String::from("k = 0 (must be positive)"))
            },
            VoterSpec::DecisionTree { max_depth: 0 }
            | VoterSpec::RandomForest { max_depth: 0, .. } => {
                Some(String::from("max depth = 0 (must be positive)"))
            },
            VoterSpec::RandomForest { n_trees: 0, .. } => {
                Some(String::from("# of trees = 0 (must be positive)"))
            },
            _ => None,
        };

        if let Some(reason) = reason {
            return Err(SamplingError::InvalidRoster { index, reason });
        }
    }
    Ok(())
}


/// Check whether the grid of `resolution^2` candidates can be built.
#[inline(always)]
pub(crate) fn pool_resolution(resolution: usize)
    -> Result<usize, SamplingError>
{
    resolution.checked_mul(resolution)
        .ok_or(SamplingError::InvalidPoolResolution(resolution))
}


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn sample(sample: &LabeledSample) -> Result<(), ClassifierError> {
    if sample.is_empty() {
        return Err(ClassifierError::EmptySample);
    }
    Ok(())
}


/// Check whether `label` fits in the label space `0..n_labels`.
#[inline(always)]
pub(crate) fn label(label: Label, n_labels: usize)
    -> Result<(), ClassifierError>
{
    if label >= n_labels {
        return Err(ClassifierError::LabelOutOfRange { label, n_labels });
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn test_budget_success_01() {
        assert_eq!(budget(0).unwrap(), 0);
    }

    #[test]
    fn test_budget_success_02() {
        assert_eq!(budget(1_000).unwrap(), 1_000);
    }

    #[test]
    fn test_budget_failure_01() {
        let err = budget(-1).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidBudget(-1)));
    }

    #[test]
    fn test_label_space_failure_01() {
        assert!(label_space(0).is_err());
        assert!(label_space(1).is_ok());
    }

    #[test]
    fn test_roster_success_01() {
        assert!(roster(&VoterSpec::default_roster()).is_ok());
        let all = vec![
            VoterSpec::svm(),
            VoterSpec::nearest_neighbors(7),
            VoterSpec::decision_tree(),
            VoterSpec::random_forest(),
        ];
        assert!(roster(&all).is_ok());
    }

    #[test]
    fn test_roster_failure_01() {
        let err = roster(&[]).unwrap_err();
        assert!(matches!(err, SamplingError::EmptyRoster));
    }

    #[test]
    fn test_roster_failure_02() {
        let entries = [
            VoterSpec::Svm { c: 0.0, gamma: 1.0 },
            VoterSpec::Svm { c: -1.0, gamma: 1.0 },
            VoterSpec::Svm { c: f64::NAN, gamma: 1.0 },
            VoterSpec::Svm { c: 1.0, gamma: 0.0 },
            VoterSpec::Svm { c: 1.0, gamma: -2.0 },
            VoterSpec::Svm { c: 1.0, gamma: f64::INFINITY },
        ];
        for spec in entries {
            let err = roster(&[VoterSpec::svm(), spec.clone()]).unwrap_err();
            assert!(
                matches!(err, SamplingError::InvalidRoster { index: 1, .. }),
                "{spec:?} is accepted"
            );
        }
    }

    #[test]
    fn test_roster_failure_03() {
        let err = roster(&[VoterSpec::nearest_neighbors(0)]).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidRoster { index: 0, .. }));
    }

    #[test]
    fn test_roster_failure_04() {
        let spec = VoterSpec::DecisionTree { max_depth: 0 };
        let err = roster(&[spec]).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidRoster { index: 0, .. }));
    }

    #[test]
    fn test_roster_failure_05() {
        let entries = [
            VoterSpec::RandomForest { n_trees: 0, max_depth: 3 },
            VoterSpec::RandomForest { n_trees: 3, max_depth: 0 },
        ];
        for spec in entries {
            let err = roster(&[spec.clone()]).unwrap_err();
            assert!(
                matches!(err, SamplingError::InvalidRoster { index: 0, .. }),
                "{spec:?} is accepted"
            );
        }
    }

    #[test]
    fn test_pool_resolution_01() {
        assert_eq!(pool_resolution(6).unwrap(), 36);
        let err = pool_resolution(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            SamplingError::InvalidPoolResolution(usize::MAX)
        ));
    }

    #[test]
    fn test_sample_failure_01() {
        let empty = LabeledSample::new();
        assert_eq!(sample(&empty), Err(ClassifierError::EmptySample));

        let mut one = LabeledSample::new();
        one.push(Point::new(0.0, 0.0), 0);
        assert!(sample(&one).is_ok());
    }

    #[test]
    fn test_label_01() {
        assert!(label(9, 10).is_ok());
        assert_eq!(
            label(10, 10),
            Err(ClassifierError::LabelOutOfRange { label: 10, n_labels: 10 })
        );
    }
}
