use crate::{Point, SamplingError};
use crate::constants::POOL_PADDING;


/// The points that may still be queried.
///
/// The pool is built once as a dense grid over `[-1, 1]^2` and
/// only shrinks: a selected point is removed for good.
/// Removal keeps the order of the remaining points.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePool {
    points: Vec<Point>,
}


impl CandidatePool {
    /// Returns the grid resolution for a session of `total_queries` queries,
    /// i.e., `ceil(sqrt(total_queries)) + 2`.
    pub fn resolution_for(total_queries: usize) -> usize {
        (total_queries as f64).sqrt().ceil() as usize + POOL_PADDING
    }


    /// Construct the pool of `resolution^2` grid points.
    /// The `i`-th point is the cell `(x, y) = (i % resolution, i / resolution)`
    /// mapped to `((x - h) / h, -(y - h) / h)` with `h = resolution / 2`,
    /// so that the row `y = 0` is the top of the square.
    ///
    /// Panics if `resolution^2` overflows `usize`.
    pub fn grid(resolution: usize) -> Self {
        let n_points = resolution.checked_mul(resolution)
            .unwrap_or_else(|| {
                panic!("The grid of resolution {resolution} overflows")
            });
        let h = (resolution / 2).max(1) as f64;
        let points = (0..n_points)
            .map(|i| {
                let x = (i % resolution) as f64;
                let y = (i / resolution) as f64;
                Point::new((x - h) / h, -(y - h) / h)
            })
            .collect();
        Self { points }
    }


    /// Construct the pool for a session of `total_queries` queries.
    pub fn for_budget(total_queries: usize) -> Self {
        Self::grid(Self::resolution_for(total_queries))
    }


    /// Construct a pool from arbitrary points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }


    /// Returns the remaining points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points[..]
    }


    /// Returns the number of remaining points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }


    /// Returns `true` if no point remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }


    /// Removes the `idx`-th point and returns it.
    pub(crate) fn remove(&mut self, idx: usize) -> Result<Point, SamplingError> {
        if idx >= self.points.len() {
            return Err(SamplingError::PoolExhausted { remaining_queries: 1 });
        }
        Ok(self.points.remove(idx))
    }
}
