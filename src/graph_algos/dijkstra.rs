use crate::errors::GraphError;
use crate::collections::FxHashSet;
use super::{Distance, DistanceTable, Predecessors, Unvisited};
use super::path_reconstruction;

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};



/// Build the initial distance table for a solve
/// Source at zero, every other node of the universe at infinity
pub fn initial_distances<N, C, U>(universe: U, source: N) -> Result<DistanceTable<N, C>, GraphError>
where
    N: Eq + Hash + Debug,
    C: Zero + Copy,
    U: IntoIterator<Item = N>,
    {

    let mut distances: DistanceTable<N, C> = universe
        .into_iter()
        .map(|node| (node, Distance::Infinite))
        .collect();

    match distances.get_mut(&source) {
        Some(distance) => *distance = Distance::Finite(Zero::zero()),
        None => return Err(GraphError::SourceNotInUniverse(format!("{source:?}"))),
    }

    Ok(distances)
}


/// Resolve shortest distances over a fixed node universe using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// `distances` holds the full universe: the source at zero, everything else at
/// infinity (see [`initial_distances`]). `neighbours` receives the finalized
/// distance of the current node, the node, and the unvisited set, and returns
/// each reachable neighbour with its tentative total distance through the node.
///
/// Preconditions, unchecked in release builds:
/// - the source is in the table at zero
/// - edge weights are non-negative (tentative >= current distance)
/// - returned neighbours are part of the universe; others are skipped
pub fn dijkstra<N, C, IT, NN>(distances: DistanceTable<N, C>, neighbours: NN) -> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: FnMut(C, &N, &Unvisited<N>) -> IT, // returns neighbours + tentative distances
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {

    resolve(distances, neighbours, Universe::Fixed)
}


/// Resolve shortest distances while discovering the universe from the source
/// Nodes enter the table the first time the callback returns them, so the
/// callback must not filter on the unvisited set for nodes it has never seen
pub fn dijkstra_from<N, C, IT, NN>(source: N, neighbours: NN) -> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: FnMut(C, &N, &Unvisited<N>) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {

    let mut distances = DistanceTable::default();
    distances.insert(source, Distance::Finite(Zero::zero()));

    resolve(distances, neighbours, Universe::Discovered)
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Universe {
    Fixed, // every node is in the initial table
    Discovered, // unknown neighbours are added as they are found
}


/// Traverses the graph, finalizing one node per live pop
/// Stale heap entries stand in for decrease-key: a node may be queued several
/// times, only its first pop while still unvisited finalizes it
fn resolve<N, C, IT, NN>(mut distances: DistanceTable<N, C>, mut neighbours: NN, universe: Universe) -> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: FnMut(C, &N, &Unvisited<N>) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {

    let mut unvisited: Unvisited<N> = distances.keys().cloned().collect();

    // Infinite entries can never relax anything, they stay unvisited until the end
    let mut queue: BinaryHeap<QueueEntry<C>> = distances
        .values()
        .enumerate()
        .filter_map(|(index, distance)| distance.finite().map(|cost| QueueEntry { index, cost }))
        .collect();

    let mut predecessors: Predecessors<N> = Predecessors::default();
    let mut source: Option<N> = None;
    let mut finalized = 0usize;
    let mut stale = 0usize;

    while let Some(QueueEntry { index, cost }) = queue.pop() {

        let Some((node, &distance)) = distances.get_index(index) else {
            continue;
        };

        // Already finalized through a better (or equal, earlier) entry
        if !unvisited.remove(node) {
            log::trace!("discarding stale entry {node:?} at {cost:?}");
            stale += 1;
            continue;
        }
        let node = node.clone();

        let Distance::Finite(current) = distance else {
            continue;
        };
        finalized += 1;

        // The smallest live entry is the source at zero
        if source.is_none() {
            source = Some(node.clone());
        }

        for (neighbour, tentative) in neighbours(current, &node, &unvisited) {

            debug_assert!(
                tentative >= current,
                "negative edge weight from {node:?} ({current:?}) to {neighbour:?} ({tentative:?})"
            );
            let tentative_distance = Distance::Finite(tentative);

            let neighbour_index = match distances.entry(neighbour) {
                Occupied(mut e) => {
                    if !unvisited.contains(e.key()) {
                        log::trace!("ignoring finalized neighbour {:?} of {node:?}", e.key());
                        continue;
                    }

                    let previous = *e.get();
                    match tentative_distance.cmp(&previous) {
                        Ordering::Greater => continue,
                        Ordering::Equal => {
                            // Tied optimal route, the neighbour is already queued at this cost
                            predecessors
                                .entry(e.key().clone())
                                .or_default()
                                .insert(node.clone());
                            continue;
                        }
                        Ordering::Less => {
                            predecessors.insert(e.key().clone(), single(&node));
                            e.insert(tentative_distance);
                            e.index()
                        }
                    }
                }
                Vacant(e) => {
                    if universe == Universe::Fixed {
                        log::debug!("neighbour {:?} of {node:?} is outside the universe, skipping", e.key());
                        continue;
                    }
                    let key = e.key().clone();
                    let neighbour_index = e.index();
                    e.insert(tentative_distance);
                    unvisited.insert(key.clone());
                    predecessors.insert(key, single(&node));
                    neighbour_index
                }
            };

            queue.push(QueueEntry {
                index: neighbour_index,
                cost: tentative,
            });
        }
    }

    // Whatever the queue never reached is unreachable, finalize it as is
    let unreachable = unvisited.len();
    unvisited.clear();

    log::debug!(
        "dijkstra resolved {} nodes: {finalized} finalized, {unreachable} unreachable, {stale} stale entries",
        distances.len()
    );

    ShortestPaths { source, distances, predecessors }
}


fn single<N: Eq + Hash + Clone>(node: &N) -> FxHashSet<N> {
    let mut set = FxHashSet::default();
    set.insert(node.clone());
    set
}


/// Resolved distances and the tie-preserving predecessor relation of a solve
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, C> {
    source: Option<N>,
    pub distances: DistanceTable<N, C>,
    pub predecessors: Predecessors<N>,
}

impl<N, C> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone,
    C: Ord + Copy,
{

    /// The node the solve started from, the first one finalized
    /// None only when the table held no finite distance
    pub fn source(&self) -> Option<&N> {
        self.source.as_ref()
    }

    /// Distance of `node`, infinite if unreachable or not in the universe
    pub fn distance(&self, node: &N) -> Distance<C> {
        self.distances.get(node).copied().unwrap_or(Distance::Infinite)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_finite()
    }

    /// Immediate predecessors of `node` on its optimal paths
    pub fn predecessors_of(&self, node: &N) -> Option<&FxHashSet<N>> {
        self.predecessors.get(node)
    }

    /// Reachable nodes with their distances, in table order
    pub fn reachable(&self) -> impl Iterator<Item = (&N, C)> {
        self.distances
            .iter()
            .filter_map(|(node, distance)| distance.finite().map(|cost| (node, cost)))
    }

    /// Every node lying on some shortest path from the source to `target`
    pub fn optimal_nodes(&self, target: &N) -> Result<FxHashSet<N>, GraphError> {
        match &self.source {
            Some(source) if self.is_reachable(target) => {
                path_reconstruction::optimal_nodes(target, &self.predecessors, source)
            }
            _ => Err(GraphError::NoPathFound),
        }
    }

    /// One shortest path, ordered from the source to `target`
    pub fn shortest_path(&self, target: &N) -> Result<Vec<N>, GraphError> {
        match &self.source {
            Some(source) if self.is_reachable(target) => {
                path_reconstruction::shortest_path(target, &self.predecessors, source)
            }
            _ => Err(GraphError::NoPathFound),
        }
    }

    /// Reorder the distance table from farthest to nearest, unreachable nodes first
    pub fn sort_farthest_first(&mut self) {
        self.distances.sort_by(|_, a, _, b| b.cmp(a));
    }

    pub fn into_parts(self) -> (DistanceTable<N, C>, Predecessors<N>) {
        (self.distances, self.predecessors)
    }
}


/// Heap entry
/// - ordered by cost only (reversed for a min-heap), ties are arbitrary
/// - the node itself is identified by its index in the distance table
#[derive(Debug)]
struct QueueEntry<T> {
    index: usize,
    cost: T,
}

impl<T: Ord> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for QueueEntry<T> {}
