pub mod dijkstra;
pub mod path_reconstruction;
mod distance;

pub use distance::Distance;

use crate::collections::{FxHashMap, FxHashSet, FxIndexMap};

/// Best known distance from the source for every node in the universe
/// Insertion ordered, so a node keeps its index for the whole solve
pub type DistanceTable<N, C> = FxIndexMap<N, Distance<C>>;

/// Nodes not yet finalized, handed to the neighbour callback
pub type Unvisited<N> = FxHashSet<N>;

/// Every immediate predecessor achieving a node's optimal distance
/// A set rather than a single parent, since several predecessors can tie
pub type Predecessors<N> = FxHashMap<N, FxHashSet<N>>;
