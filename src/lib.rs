//! Shortest paths over implicit graphs.
//!
//! [`dijkstra`] resolves every node reachable from a single source and keeps a
//! *set* of predecessors per node, so every optimal path can be recovered with
//! [`optimal_nodes`], not just one of them. Graphs are never materialized: the
//! caller supplies a neighbour callback, and [`grid`] ships the callbacks used
//! for plain and oriented grid mazes.

pub mod collections;
pub mod errors;
pub mod graph_algos;
pub mod grid;

pub use errors::GraphError;
pub use graph_algos::{
    Distance, DistanceTable, Predecessors, Unvisited,
    dijkstra::{ShortestPaths, dijkstra, dijkstra_from, initial_distances},
    path_reconstruction::{optimal_nodes, shortest_path},
};
