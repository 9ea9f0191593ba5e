use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::HashMap;

use crate::{Label, Point};
use super::node::Splitter;


/// Splitting criteria for growing decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitBy {
    /// Entropy of the label distribution.
    Entropy,
    /// Gini index.
    Gini,
}


impl fmt::Display for SplitBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Entropy => "Entropy",
            Self::Gini => "Gini index",
        };

        write!(f, "{name}")
    }
}


impl SplitBy {
    /// Returns the impurity of the given label counts.
    #[inline(always)]
    fn impurity(&self, counts: &HashMap<Label, usize>) -> f64 {
        match self {
            SplitBy::Entropy => entropic_impurity(counts),
            SplitBy::Gini => gini_impurity(counts),
        }
    }


    /// Returns the splitting rule over `features`
    /// that minimizes the weighted impurity of the two children.
    /// Returns `None` if no feature separates the examples in `indices`.
    pub(super) fn best_split(
        &self,
        points:   &[Point],
        labels:   &[Label],
        indices:  &[usize],
        features: &[usize],
    ) -> Option<Splitter>
    {
        features.iter()
            .filter_map(|&feature| {
                self.best_split_for(points, labels, indices, feature)
                    .map(|(threshold, score)| (score, feature, threshold))
            })
            .min_by(|x, y| x.0.total_cmp(&y.0))
            .map(|(_, feature, threshold)| Splitter::new(feature, threshold))
    }


    /// Sweeps the sorted values of `feature`
    /// and returns the pair `(threshold, score)` of the best cut.
    fn best_split_for(
        &self,
        points:  &[Point],
        labels:  &[Label],
        indices: &[usize],
        feature: usize,
    ) -> Option<(f64, f64)>
    {
        let mut sorted = indices.to_vec();
        sorted.sort_by(|&i, &j| points[i][feature].total_cmp(&points[j][feature]));

        let total = sorted.len() as f64;
        let mut left: HashMap<Label, usize> = HashMap::new();
        let mut right: HashMap<Label, usize> = HashMap::new();
        for &i in &sorted {
            *right.entry(labels[i]).or_insert(0) += 1;
        }

        let mut best: Option<(f64, f64)> = None;
        for (pos, pair) in sorted.windows(2).enumerate() {
            let (i, j) = (pair[0], pair[1]);
            *left.entry(labels[i]).or_insert(0) += 1;
            if let Some(cnt) = right.get_mut(&labels[i]) {
                *cnt -= 1;
                if *cnt == 0 { right.remove(&labels[i]); }
            }

            let (lo, hi) = (points[i][feature], points[j][feature]);
            if lo == hi { continue; }

            let n_left = (pos + 1) as f64;
            let n_right = total - n_left;
            let score = (n_left * self.impurity(&left)
                + n_right * self.impurity(&right)) / total;

            let threshold = lo + (hi - lo) / 2f64;
            match best {
                Some((_, best_score)) if best_score <= score => {},
                _ => { best = Some((threshold, score)); },
            }
        }
        best
    }
}


/// Returns the entropic-impurity of the given map.
#[inline(always)]
fn entropic_impurity(map: &HashMap<Label, usize>) -> f64 {
    let total = map.values().sum::<usize>() as f64;
    if total <= 0f64 || map.is_empty() { return 0f64; }

    map.values()
        .map(|&cnt| {
            let r = cnt as f64 / total;
            if r <= 0f64 { 0f64 } else { -r * r.ln() }
        })
        .sum::<f64>()
}


/// Returns the gini-impurity of the given map.
#[inline(always)]
fn gini_impurity(map: &HashMap<Label, usize>) -> f64 {
    let total = map.values().sum::<usize>() as f64;
    if total <= 0f64 || map.is_empty() { return 0f64; }

    let correct = map.values()
        .map(|&cnt| (cnt as f64 / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}
