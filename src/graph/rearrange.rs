//! Neighbor-order policies.
//!
//! A policy permutes one node's neighbor list at a time. Ids sort the same
//! way as the names they stand for, so name orderings are plain id sorts.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::types::{GraphResult, NodeId};

use super::Graph;

/// Reorders a single node's neighbor list in place.
///
/// The result must hold the same neighbors it was given; [`Graph::rearrange`]
/// rejects anything else.
pub trait Rearrange {
    fn rearrange(&mut self, neighbors: &mut [NodeId]);
}

impl<F: FnMut(&mut [NodeId])> Rearrange for F {
    fn rearrange(&mut self, neighbors: &mut [NodeId]) {
        self(neighbors)
    }
}

/// Keep the order the edges were ingested in.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileOrder;

impl Rearrange for FileOrder {
    fn rearrange(&mut self, _neighbors: &mut [NodeId]) {}
}

/// Ascending order by neighbor name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ascending;

impl Rearrange for Ascending {
    fn rearrange(&mut self, neighbors: &mut [NodeId]) {
        neighbors.sort_unstable();
    }
}

/// Descending order by neighbor name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Descending;

impl Rearrange for Descending {
    fn rearrange(&mut self, neighbors: &mut [NodeId]) {
        neighbors.sort_unstable_by(|a, b| b.cmp(a));
    }
}

/// Uniformly random order drawn from a caller-supplied RNG.
pub struct Shuffle<R> {
    rng: R,
}

impl<R: Rng> Shuffle<R> {
    /// Shuffle using `rng`. Pass `&mut rng` to keep ownership of the RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give the RNG back.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Rearrange for Shuffle<R> {
    fn rearrange(&mut self, neighbors: &mut [NodeId]) {
        neighbors.shuffle(&mut self.rng);
    }
}

/// Named neighbor orderings, for configuration surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Leave adjacency lists as ingested.
    File,
    /// Ascending (alphabetical) order.
    Ascending,
    /// Descending (alphabetical) order.
    Descending,
    /// Random order.
    Random,
}

impl SortOrder {
    /// Return the configuration name of this ordering.
    pub fn name(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Random => "random",
        }
    }

    /// Parse an ordering from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "file" | "none" => Some(Self::File),
            "ascending" | "asc" => Some(Self::Ascending),
            "descending" | "desc" => Some(Self::Descending),
            "random" | "shuffle" => Some(Self::Random),
            _ => None,
        }
    }

    /// Rearrange every node of `graph` with this ordering.
    ///
    /// `rng` is only drawn from for [`SortOrder::Random`].
    pub fn apply<R: Rng + ?Sized>(&self, graph: &mut Graph, rng: &mut R) -> GraphResult<()> {
        match self {
            Self::File => Ok(()),
            Self::Ascending => graph.rearrange(&mut Ascending),
            Self::Descending => graph.rearrange(&mut Descending),
            Self::Random => graph.rearrange(&mut Shuffle::new(rng)),
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Random
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
