mod parse;

pub use parse::ParsedGrid;

use num_traits::{Num, Signed};
use crate::collections::FxHashSet;
use crate::errors::GraphError;
use crate::graph_algos::{DistanceTable, Unvisited, dijkstra::initial_distances};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Grid cell, row-major: row grows downwards, col grows to the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent cell in `heading`
    pub fn step(self, heading: Heading) -> Self {
        let (dr, dc) = heading.offset();
        Self::new(self.row + dr, self.col + dc)
    }

    pub fn manhattan(self, other: Coord) -> i32 {
        manhattan_distance(self.row, self.col, other.row, other.col)
    }
}


/// Facing direction for oriented movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {

    /// Clockwise from North
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// (row, col) delta of one step
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }
}


/// A cell plus the direction it is being faced in
pub type Pose = (Coord, Heading);


/// Bounded rectangular grid with blocked cells
/// Supplies the node universe and neighbour callbacks for grid searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    obstacles: FxHashSet<Coord>,
}

impl Grid {

    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            obstacles: FxHashSet::default(),
        }
    }

    pub fn with_obstacles<I: IntoIterator<Item = Coord>>(mut self, obstacles: I) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    pub fn add_obstacle(&mut self, cell: Coord) {
        self.obstacles.insert(cell);
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn in_bounds(&self, cell: Coord) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    /// In bounds and not an obstacle
    pub fn is_open(&self, cell: Coord) -> bool {
        self.in_bounds(cell) && !self.obstacles.contains(&cell)
    }

    /// Every open cell, row by row
    pub fn open_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
            .filter(move |&cell| self.is_open(cell))
    }

    /// Distance table over all open cells, `source` at zero
    pub fn initial_distances(&self, source: Coord) -> Result<DistanceTable<Coord, u64>, GraphError> {
        if !self.is_open(source) {
            return Err(GraphError::SourceBlocked(source));
        }
        initial_distances(self.open_cells(), source)
    }

    /// Unit-cost 4-directional moves onto open, unvisited cells
    pub fn cardinal_neighbours(&self) -> impl Fn(u64, &Coord, &Unvisited<Coord>) -> Vec<(Coord, u64)> + '_ {
        move |distance: u64, cell: &Coord, unvisited: &Unvisited<Coord>| {
            Heading::ALL
                .iter()
                .map(|&heading| cell.step(heading))
                .filter(|next| self.is_open(*next) && unvisited.contains(next))
                .map(|next| (next, distance + 1))
                .collect::<Vec<_>>()
        }
    }

    /// Distance table over every (open cell, heading) pose
    pub fn oriented_initial_distances(&self, source: Coord, heading: Heading) -> Result<DistanceTable<Pose, u64>, GraphError> {
        if !self.is_open(source) {
            return Err(GraphError::SourceBlocked(source));
        }
        let poses = self
            .open_cells()
            .flat_map(|cell| Heading::ALL.into_iter().map(move |heading| (cell, heading)));
        initial_distances(poses, (source, heading))
    }

    /// Oriented moves: one step forward for `step_cost`, or a quarter turn in
    /// place for `turn_cost`
    pub fn oriented_neighbours(&self, step_cost: u64, turn_cost: u64) -> impl Fn(u64, &Pose, &Unvisited<Pose>) -> Vec<(Pose, u64)> + '_ {
        move |distance: u64, &(cell, heading): &Pose, unvisited: &Unvisited<Pose>| {
            let ahead = cell.step(heading);
            let forward = self
                .is_open(ahead)
                .then_some(((ahead, heading), distance + step_cost));
            let turns = [heading.turn_left(), heading.turn_right()]
                .into_iter()
                .map(|turned| ((cell, turned), distance + turn_cost));

            forward
                .into_iter()
                .chain(turns)
                .filter(|(pose, _)| unvisited.contains(pose))
                .collect::<Vec<_>>()
        }
    }
}
