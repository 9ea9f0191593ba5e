//! Parameters of a sampling session.

use serde::{Serialize, Deserialize};

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{SamplingError, VoterSpec};
use crate::constants::DEFAULT_LABEL_SPACE;


/// How the oracle labels the acquired points every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelabelPolicy {
    /// The whole acquired set is sent to the oracle every round.
    #[default]
    Full,
    /// Only the points acquired since the last round are sent.
    /// The labels of the older points are reused.
    Cached,
}


impl fmt::Display for RelabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "Full"),
            Self::Cached => write!(f, "Cached"),
        }
    }
}


/// The parameters of a sampling session.
///
/// Only `total_queries` is required, the others have defaults:
/// ```text
/// label_space_size: DEFAULT_LABEL_SPACE == 10,
/// roster: [Svm { c: 10, gamma: 10 }, NearestNeighbors { k: 1 }],
/// seed: None (seeded from the entropy of the system),
/// relabel: RelabelPolicy::Full,
/// pool_resolution: None (ceil(sqrt(total_queries)) + 2),
/// ```
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let config = SessionConfig::from_json_str(r#"{
///     "total_queries": 100,
///     "label_space_size": 2,
///     "roster": [
///         { "kind": "svm", "c": 10.0, "gamma": 10.0 },
///         { "kind": "nearest_neighbors", "k": 7 }
///     ],
///     "seed": 1234
/// }"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The number of points to acquire.
    pub total_queries: i64,

    /// The size `L` of the label space `0..L`.
    #[serde(default = "default_label_space")]
    pub label_space_size: usize,

    /// The seats of the committee.
    #[serde(default = "VoterSpec::default_roster")]
    pub roster: Vec<VoterSpec>,

    /// The seed of the session.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How the oracle labels the acquired points.
    #[serde(default)]
    pub relabel: RelabelPolicy,

    /// Overrides the resolution of the candidate grid.
    #[serde(default)]
    pub pool_resolution: Option<usize>,
}


fn default_label_space() -> usize {
    DEFAULT_LABEL_SPACE
}


impl SessionConfig {
    /// Construct a configuration that acquires `total_queries` points
    /// with the default parameters.
    pub fn new(total_queries: i64) -> Self {
        Self {
            total_queries,
            label_space_size: DEFAULT_LABEL_SPACE,
            roster: VoterSpec::default_roster(),
            seed: None,
            relabel: RelabelPolicy::Full,
            pool_resolution: None,
        }
    }


    /// Set the size of the label space.
    pub fn label_space_size(mut self, size: usize) -> Self {
        self.label_space_size = size;
        self
    }


    /// Set the seats of the committee.
    pub fn roster(mut self, roster: Vec<VoterSpec>) -> Self {
        self.roster = roster;
        self
    }


    /// Set the seed of the session.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }


    /// Set the relabeling policy.
    pub fn relabel(mut self, relabel: RelabelPolicy) -> Self {
        self.relabel = relabel;
        self
    }


    /// Set the resolution of the candidate grid.
    pub fn pool_resolution(mut self, resolution: usize) -> Self {
        self.pool_resolution = Some(resolution);
        self
    }


    /// Parses a configuration from a JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SamplingError> {
        let config = serde_json::from_str(text)?;
        Ok(config)
    }


    /// Parses a configuration from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SamplingError> {
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }


    /// Reads a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SamplingError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
