use crate::errors::GraphError;
use super::{Coord, Grid};


/// A grid read from an ASCII map, with its optional start and end markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGrid {
    pub grid: Grid,
    pub start: Option<Coord>,
    pub end: Option<Coord>,
}

impl Grid {

    /// Parse an ASCII map
    /// `#` is an obstacle; `.`, `S` (start) and `E` (end) are open.
    /// Surrounding whitespace on each line and blank lines are ignored.
    pub fn parse(text: &str) -> Result<ParsedGrid, GraphError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = lines.first() else {
            return Err(GraphError::InvalidGrid("no rows".to_string()));
        };
        let cols = first.chars().count();

        let mut grid = Grid::new(to_dimension(lines.len())?, to_dimension(cols)?);
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(GraphError::InvalidGrid(format!(
                    "row {row} has {width} cells, expected {cols}"
                )));
            }

            for (col, symbol) in line.chars().enumerate() {
                let cell = Coord::new(to_dimension(row)?, to_dimension(col)?);
                match symbol {
                    '#' => grid.add_obstacle(cell),
                    '.' => {}
                    'S' => set_marker(&mut start, cell, 'S')?,
                    'E' => set_marker(&mut end, cell, 'E')?,
                    other => {
                        return Err(GraphError::InvalidGrid(format!(
                            "unexpected '{other}' at row {row}, col {col}"
                        )));
                    }
                }
            }
        }

        Ok(ParsedGrid { grid, start, end })
    }
}


fn set_marker(marker: &mut Option<Coord>, cell: Coord, symbol: char) -> Result<(), GraphError> {
    if let Some(existing) = marker.replace(cell) {
        return Err(GraphError::InvalidGrid(format!(
            "duplicate '{symbol}' at {existing:?} and {cell:?}"
        )));
    }
    Ok(())
}

fn to_dimension(value: usize) -> Result<i32, GraphError> {
    i32::try_from(value).map_err(|_| GraphError::InvalidGrid(format!("dimension {value} is too large")))
}
