use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops::Index;

use crate::constants::DIMENSION;


/// A point of the feature space `R^2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point([f64; DIMENSION]);


impl Point {
    /// Construct a new point `(x, y)`.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }


    /// Returns the horizontal coordinate.
    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.0[0]
    }


    /// Returns the vertical coordinate.
    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.0[1]
    }


    /// Returns the coordinates as an array.
    #[inline(always)]
    pub fn coords(&self) -> [f64; DIMENSION] {
        self.0
    }


    /// Squared euclidean distance between `self` and `other`.
    #[inline(always)]
    pub fn squared_distance(&self, other: &Self) -> f64 {
        self.0.iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
    }


    /// Returns `true` if both coordinates lie in `[-1, 1]`.
    #[inline(always)]
    pub fn in_unit_square(&self) -> bool {
        self.0.iter().all(|v| (-1f64..=1f64).contains(v))
    }
}


impl From<[f64; DIMENSION]> for Point {
    #[inline(always)]
    fn from(coords: [f64; DIMENSION]) -> Self {
        Self(coords)
    }
}


impl From<(f64, f64)> for Point {
    #[inline(always)]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}


impl Index<usize> for Point {
    type Output = f64;
    #[inline(always)]
    fn index(&self, feature: usize) -> &Self::Output {
        &self.0[feature]
    }
}


impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x(), self.y())
    }
}
