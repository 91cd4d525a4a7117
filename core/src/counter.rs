use crate::*;

/// Number of mines among the 8 neighbors of `coords`.
pub fn count_adjacent_mines(grid: &Grid, coords: Coord2) -> u8 {
    grid.iter_neighbors(coords)
        .filter(|&pos| grid[pos].is_mine())
        .count() as u8
}

/// Fixes the content of every non-mine cell from the placed mines.
pub fn classify_cells(grid: &mut Grid) {
    let (rows, cols) = grid.size();
    for row in 0..rows {
        for col in 0..cols {
            let coords = (row, col);
            if grid[coords].is_mine() {
                continue;
            }
            let count = count_adjacent_mines(grid, coords);
            grid[coords].content = CellContent::from_count(count);
        }
    }
}
