use fixedbitset::FixedBitSet;

use crate::{checkers, ClassifierError, Label};
use crate::constants::DISAGREEMENT_CAP;


/// A `(n_rows, n_labels)` matrix whose `i`-th row is
/// the one-hot encoding of the `i`-th predicted label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneHotMatrix {
    n_labels: usize,
    data: Vec<u8>,
}


impl OneHotMatrix {
    /// Encodes `labels` with width `n_labels`.
    /// Returns `Err` if a label does not fit in `0..n_labels`.
    pub fn encode(labels: &[Label], n_labels: usize)
        -> Result<Self, ClassifierError>
    {
        let mut data = vec![0u8; labels.len() * n_labels];
        for (row, &label) in data.chunks_exact_mut(n_labels.max(1))
            .zip(labels)
        {
            checkers::label(label, n_labels)?;
            row[label] = 1;
        }
        Ok(Self { n_labels, data })
    }


    /// Returns the pair `(n_rows, n_labels)`.
    pub fn shape(&self) -> (usize, usize) {
        let n_rows = if self.n_labels == 0 {
            0
        } else {
            self.data.len() / self.n_labels
        };
        (n_rows, self.n_labels)
    }


    /// Returns the `i`-th row.
    pub fn row(&self, i: usize) -> &[u8] {
        let start = i * self.n_labels;
        &self.data[start..start + self.n_labels]
    }


    /// Returns the label encoded in the `i`-th row.
    pub fn label(&self, i: usize) -> Option<Label> {
        self.row(i).iter().position(|&v| v == 1)
    }
}


/// The agreement tally of a committee over the candidate pool.
/// The entry `(i, y)` counts the voters that predicted label `y`
/// for the `i`-th candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    n_labels: usize,
    counts: Vec<usize>,
}


impl Tally {
    /// Construct a zero tally of shape `(n_rows, n_labels)`.
    pub fn new(n_rows: usize, n_labels: usize) -> Self {
        Self { n_labels, counts: vec![0; n_rows * n_labels] }
    }


    /// Sums the given ballots element-wise.
    /// Every ballot must have the same shape.
    pub fn from_ballots<'a, I>(n_rows: usize, n_labels: usize, ballots: I)
        -> Self
        where I: IntoIterator<Item = &'a OneHotMatrix>
    {
        let mut tally = Self::new(n_rows, n_labels);
        ballots.into_iter()
            .for_each(|ballot| tally.add(ballot));
        tally
    }


    /// Adds a ballot to the tally.
    pub fn add(&mut self, ballot: &OneHotMatrix) {
        assert_eq!(
            ballot.data.len(), self.counts.len(),
            "ballot shape does not match the tally"
        );
        self.counts.iter_mut()
            .zip(&ballot.data)
            .for_each(|(c, &v)| { *c += v as usize; });
    }


    /// Returns the number of rows.
    pub fn n_rows(&self) -> usize {
        if self.n_labels == 0 { 0 } else { self.counts.len() / self.n_labels }
    }


    /// Returns the votes of the `i`-th candidate per label.
    pub fn row(&self, i: usize) -> &[usize] {
        let start = i * self.n_labels;
        &self.counts[start..start + self.n_labels]
    }


    /// Returns, for each candidate, the set of labels
    /// proposed by at least one voter.
    pub fn label_diversity(&self) -> Vec<FixedBitSet> {
        (0..self.n_rows())
            .map(|i| {
                let mut bits = FixedBitSet::with_capacity(self.n_labels);
                self.row(i).iter()
                    .enumerate()
                    .filter(|(_, cnt)| **cnt > 0)
                    .for_each(|(y, _)| bits.insert(y));
                bits
            })
            .collect()
    }


    /// Returns the disagreement score of each candidate:
    /// the number of distinct labels proposed,
    /// clamped to `DISAGREEMENT_CAP == 2`.
    /// - `0` ... no voter proposed a label,
    /// - `1` ... the committee is unanimous,
    /// - `2` ... the committee disagrees.
    pub fn disagreement_scores(&self) -> Vec<usize> {
        self.label_diversity()
            .into_iter()
            .map(|bits| bits.count_ones(..).min(DISAGREEMENT_CAP))
            .collect()
    }
}
