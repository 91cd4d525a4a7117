use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Origin cell plus its in-bounds neighbors.
pub type SafeZone = SmallVec<[CellIndex; 9]>;

/// Rectangular board of cells for a single game.
///
/// Cells are addressed either by `(row, col)` or by the row-major index
/// `row * cols + col`. Indexing outside the board panics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    requested_mines: CellCount,
    generated: bool,
}

impl Grid {
    /// An empty board, mines are placed by the first reveal.
    pub fn new(config: GameConfig) -> Self {
        let size = (config.size.0.max(1), config.size.1.max(1));
        Self {
            cells: Array2::default(size.to_nd_index()),
            requested_mines: config.mines,
            generated: false,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Mine count asked for when the board was created, before any clamping.
    pub fn requested_mines(&self) -> CellCount {
        self.requested_mines
    }

    /// Whether mines have been placed for this game.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub(crate) fn mark_generated(&mut self) {
        self.generated = true;
    }

    pub fn contains_index(&self, index: CellIndex) -> bool {
        index < self.cells.len()
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if self.contains_index(index) {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex {
                index,
                cells: self.cells.len(),
            })
        }
    }

    pub fn coords(&self, index: CellIndex) -> Coord2 {
        assert!(
            self.contains_index(index),
            "cell index {index} out of bounds for {} cells",
            self.cells.len()
        );
        to_coords(index, self.cols())
    }

    pub fn index_of(&self, coords: Coord2) -> CellIndex {
        to_index(coords, self.cols())
    }

    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self[index]
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Cells with their row-major index.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Cell)> {
        self.cells.iter().enumerate()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn neighbor_indices(&self, index: CellIndex) -> impl Iterator<Item = CellIndex> + use<> {
        let cols = self.cols();
        self.iter_neighbors(self.coords(index))
            .map(move |coords| to_index(coords, cols))
    }

    /// The cells that must stay mine-free when the game opens at `origin`.
    pub fn safe_zone(&self, origin: CellIndex) -> SafeZone {
        let mut zone = SafeZone::new();
        zone.push(origin);
        zone.extend(self.neighbor_indices(origin));
        zone
    }

    /// Turns a cell into a mine, returns `false` if it already was one.
    pub fn place_mine(&mut self, index: CellIndex) -> bool {
        let cell = &mut self[index];
        if cell.is_mine() {
            false
        } else {
            cell.content = CellContent::Mine;
            true
        }
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(Cell::is_mine)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.revealed)
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|&cell| pred(cell)).count() as CellCount
    }

    /// Flips the flag on an unrevealed cell.
    pub fn toggle_flag(&mut self, index: CellIndex) -> FlagOutcome {
        let cell = &mut self[index];
        if cell.revealed {
            return FlagOutcome::NoChange;
        }
        cell.flagged = !cell.flagged;
        FlagOutcome::Changed
    }
}

impl Index<CellIndex> for Grid {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        let coords = self.coords(index);
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<CellIndex> for Grid {
    fn index_mut(&mut self, index: CellIndex) -> &mut Self::Output {
        let coords = self.coords(index);
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
