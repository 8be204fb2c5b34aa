use thiserror::Error;

use crate::grid::Coord;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Target has no recorded predecessors and is not the source
    #[error("no path found to the target node")]
    NoPathFound,

    #[error("source node {0} is not part of the node universe")]
    SourceNotInUniverse(String),

    /// Source cell is out of bounds or an obstacle
    #[error("source cell {0:?} is blocked or outside the grid")]
    SourceBlocked(Coord),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}
