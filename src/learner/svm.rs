use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{
    checkers,
    Classifier,
    ClassifierError,
    Label,
    LabeledSample,
    Point,
};
use crate::constants::{
    DEFAULT_SVM_C,
    DEFAULT_SVM_GAMMA,
    SVM_MAX_PASSES,
    SVM_TOLERANCE,
};


/// A one-versus-rest machine for a single class.
/// Each pair in `coefficients` is `(i, alpha[i] * y[i])`
/// for the support vectors `alpha[i] > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Machine {
    label: Label,
    coefficients: Vec<(usize, f64)>,
}


/// The soft-margin kernel machine with the RBF kernel.
///
/// For each class `c`, [`RbfSvm`] solves the dual problem
/// ```text
/// min  (1/2) a^T Q a - 1^T a    s.t. 0 <= a[i] <= C,
/// ```
/// where `Q[i][j] = y[i] y[j] K(x[i], x[j])` and `y[i] = +1` iff
/// `x[i]` has label `c`.
/// The kernel is
/// ```text
/// K(x, z) = exp( -gamma * |x - z|^2 ) + 1,
/// ```
/// the constant term plays the role of the bias.
/// The problem is solved by the dual coordinate descent
/// until the projected gradient falls below the tolerance.
///
/// [`RbfSvm`] predicts the class with the largest decision value.
/// It requires at least two classes.
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let mut svm = RbfSvm::new()
///     .c(10.0)
///     .gamma(10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbfSvm {
    c: f64,
    gamma: f64,
    tolerance: f64,
    max_passes: usize,

    support: Vec<Point>,
    machines: Vec<Machine>,
}


impl RbfSvm {
    /// Construct a new instance of [`RbfSvm`].
    /// By default, [`RbfSvm`] sets the parameters as follows;
    /// ```text
    /// c: DEFAULT_SVM_C == 10.0,
    /// gamma: DEFAULT_SVM_GAMMA == 10.0,
    /// tolerance: SVM_TOLERANCE == 1e-3,
    /// max_passes: SVM_MAX_PASSES == 1000,
    /// ```
    pub fn new() -> Self {
        Self {
            c: DEFAULT_SVM_C,
            gamma: DEFAULT_SVM_GAMMA,
            tolerance: SVM_TOLERANCE,
            max_passes: SVM_MAX_PASSES,

            support: Vec::new(),
            machines: Vec::new(),
        }
    }


    /// Set the regularization parameter `C`.
    pub fn c(mut self, c: f64) -> Self {
        assert!(c > 0f64, "The regularization parameter must be positive");
        self.c = c;
        self
    }


    /// Set the kernel width `gamma`.
    pub fn gamma(mut self, gamma: f64) -> Self {
        assert!(gamma > 0f64, "The kernel width must be positive");
        self.gamma = gamma;
        self
    }


    /// Set the stopping tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        assert!(tolerance > 0f64, "The tolerance must be positive");
        self.tolerance = tolerance;
        self
    }


    /// Set the maximal number of passes over the training sample.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }


    /// Returns the number of support vectors over all classes.
    pub fn n_support(&self) -> usize {
        self.machines.iter()
            .map(|m| m.coefficients.len())
            .sum()
    }


    #[inline(always)]
    fn kernel(&self, a: &Point, b: &Point) -> f64 {
        (-self.gamma * a.squared_distance(b)).exp() + 1f64
    }


    /// Returns the coefficients `alpha[i] * y[i]` of the support vectors
    /// for the signs `y`.
    fn solve(&self, points: &[Point], y: &[f64]) -> Vec<(usize, f64)> {
        let n_sample = points.len();
        let mut alpha = vec![0f64; n_sample];
        // `grad[i] = (Q alpha)[i] - 1`.
        let mut grad = vec![-1f64; n_sample];

        for _ in 0..self.max_passes {
            let mut max_violation = 0f64;
            for i in 0..n_sample {
                let g = grad[i];
                let pg = if alpha[i] <= 0f64 {
                    g.min(0f64)
                } else if alpha[i] >= self.c {
                    g.max(0f64)
                } else {
                    g
                };
                max_violation = max_violation.max(pg.abs());
                if pg == 0f64 { continue; }

                let q_ii = self.kernel(&points[i], &points[i]);
                let next = (alpha[i] - g / q_ii).clamp(0f64, self.c);
                let delta = next - alpha[i];
                if delta == 0f64 { continue; }
                alpha[i] = next;

                let xi = &points[i];
                grad.iter_mut()
                    .zip(points)
                    .zip(y)
                    .for_each(|((gj, xj), yj)| {
                        *gj += delta * y[i] * yj * self.kernel(xi, xj);
                    });
            }

            if max_violation < self.tolerance { break; }
        }

        alpha.into_iter()
            .zip(y)
            .enumerate()
            .filter_map(|(i, (a, yi))| {
                if a > 0f64 { Some((i, a * yi)) } else { None }
            })
            .collect()
    }


    fn decision(&self, machine: &Machine, point: &Point) -> f64 {
        machine.coefficients.iter()
            .map(|&(i, coef)| coef * self.kernel(&self.support[i], point))
            .sum::<f64>()
    }
}


impl Default for RbfSvm {
    fn default() -> Self {
        Self::new()
    }
}


impl Classifier for RbfSvm {
    fn name(&self) -> &str {
        "RBF Kernel Machine"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Regularization (C)", format!("{}", self.c)),
            ("Kernel width (gamma)", format!("{}", self.gamma)),
            ("Tolerance", format!("{}", self.tolerance)),
        ]);
        Some(info)
    }


    fn fit(&mut self, sample: &LabeledSample) -> Result<(), ClassifierError> {
        checkers::sample(sample)?;

        let classes = sample.unique_labels();
        if classes.len() < 2 {
            return Err(ClassifierError::SingleClass { label: classes[0] });
        }

        let points = sample.features();
        let labels = sample.labels();
        let machines = classes.par_iter()
            .map(|&label| {
                let y = labels.iter()
                    .map(|&yi| if yi == label { 1f64 } else { -1f64 })
                    .collect::<Vec<_>>();
                let coefficients = self.solve(points, &y);
                Machine { label, coefficients }
            })
            .collect::<Vec<_>>();

        self.support = points.to_vec();
        self.machines = machines;
        Ok(())
    }


    fn predict(&self, point: &Point) -> Result<Label, ClassifierError> {
        self.machines.iter()
            .map(|machine| (machine.label, self.decision(machine, point)))
            .fold(None, |best: Option<(Label, f64)>, (label, value)| {
                match best {
                    Some((_, best_value)) if best_value >= value => best,
                    _ => Some((label, value)),
                }
            })
            .map(|(label, _)| label)
            .ok_or(ClassifierError::NotFitted)
    }
}
