use std::fmt;

use crate::Coord;

/// A single grid coordinate.
///
/// Cells are plain values: two cells with the same coordinates are
/// interchangeable anywhere, and deduplicate in any set or map. The derive
/// order of the fields gives lexicographic ordering by `(x, y)`, which the
/// engine never relies on but tests use for deterministic iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
}

impl Cell {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The Moore neighbourhood of this cell, clipped to `[0, grid_size)` on
    /// both axes. A corner cell yields 3 neighbours, an edge cell 5, an
    /// interior cell 8. The grid has hard boundaries, no wraparound.
    ///
    /// Recomputed on every call; a cell does not know which grid it belongs
    /// to.
    pub fn neighbours(self, grid_size: Coord) -> impl Iterator<Item = Cell> {
        let Cell { x, y } = self;

        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| (dx, dy) != (0, 0))
            .map(move |(dx, dy)| Cell::new(x + dx, y + dy))
            .filter(move |c| (0..grid_size).contains(&c.x) && (0..grid_size).contains(&c.y))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}
