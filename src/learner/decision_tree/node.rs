//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Label, Point};


/// The output of [`Splitter::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LeftRight {
    Left,
    Right,
}


/// A splitting rule `point[feature] < threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct Splitter {
    pub(crate) feature: usize,
    pub(crate) threshold: f64,
}


impl Splitter {
    #[inline(always)]
    pub(crate) fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold }
    }


    #[inline(always)]
    pub(crate) fn split(&self, point: &Point) -> LeftRight {
        if point[self.feature] < self.threshold {
            LeftRight::Left
        } else {
            LeftRight::Right
        }
    }
}


/// Enumeration of branch nodes and leaf nodes.
/// Every node keeps the majority label of the examples that reached it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum Node {
    Branch {
        splitter: Splitter,
        left:     Box<Node>,
        right:    Box<Node>,
        label:    Label,
    },
    Leaf {
        label: Label,
    },
}


impl Node {
    pub(crate) fn branch(
        splitter: Splitter,
        left:     Box<Node>,
        right:    Box<Node>,
        label:    Label,
    ) -> Self
    {
        Self::Branch { splitter, left, right, label, }
    }


    pub(crate) fn leaf(label: Label) -> Self {
        Self::Leaf { label, }
    }


    pub(crate) fn predict(&self, point: &Point) -> Label {
        match self {
            Node::Branch { splitter, left, right, .. } => {
                match splitter.split(point) {
                    LeftRight::Left  => left.predict(point),
                    LeftRight::Right => right.predict(point),
                }
            },
            Node::Leaf { label } => *label,
        }
    }


    /// Returns the depth of the subtree rooted at `self`.
    pub(crate) fn depth(&self) -> usize {
        match self {
            Node::Branch { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
            Node::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves of the subtree rooted at `self`.
    pub(crate) fn n_leaves(&self) -> usize {
        match self {
            Node::Branch { left, right, .. } => {
                left.n_leaves() + right.n_leaves()
            },
            Node::Leaf { .. } => 1,
        }
    }
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Branch { splitter, left, right, .. } => {
                write!(
                    f,
                    "(x[{feat}] < {thr:.3} ? {left} : {right})",
                    feat = splitter.feature,
                    thr  = splitter.threshold,
                )
            },
            Node::Leaf { label } => write!(f, "{label}"),
        }
    }
}
