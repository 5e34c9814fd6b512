use std::collections::HashSet;

use thiserror::Error;

use crate::Coord;
use crate::cell::Cell;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Cell {cell} is outside the {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: Coord },
}

/// One generation's population: a fixed-size square grid storing only its
/// live cells.
///
/// The live set is the single source of truth for liveness. Every cell in it
/// satisfies `0 <= x < size` and `0 <= y < size`; [`Board::seed`] rejects
/// anything else rather than letting an out-of-range coordinate corrupt
/// later neighbour counts.
#[derive(Debug, Clone)]
pub struct Board {
    size: Coord,
    live: HashSet<Cell>,
}

impl Board {
    pub fn new(size: Coord) -> Self {
        Self {
            size,
            live: HashSet::new(),
        }
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    /// Read-only view of the live set, for rendering and stepping.
    pub fn live_cells(&self) -> &HashSet<Cell> {
        &self.live
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    /// Add cells to the live set. Duplicates collapse under set semantics;
    /// any out-of-bounds coordinate fails the whole call.
    pub fn seed(&mut self, cells: impl IntoIterator<Item = Cell>) -> Result<(), BoardError> {
        for cell in cells {
            if !self.in_bounds(cell) {
                return Err(BoardError::OutOfBounds {
                    cell,
                    size: self.size,
                });
            }

            self.live.insert(cell);
        }

        Ok(())
    }

    /// How many of `cell`'s in-bounds neighbours are alive on this board.
    ///
    /// Bound to a [`Cell`] rather than a caller-supplied neighbour set so
    /// the neighbourhood is always derived from this board's own size; up
    /// to 8 direct membership probes, no temporary set.
    pub fn neighbour_count(&self, cell: Cell) -> usize {
        cell.neighbours(self.size)
            .filter(|c| self.live.contains(c))
            .count()
    }

    /// Unchecked insert for cells the step loop already knows are in
    /// bounds.
    pub(crate) fn insert(&mut self, cell: Cell) {
        self.live.insert(cell);
    }
}
