use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// A line of cells that wins when every one of them is checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WinLine {
    Row(Coord),
    Column(Coord),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinLine {
    pub fn all() -> impl Iterator<Item = WinLine> {
        (0..SIDE)
            .map(WinLine::Row)
            .chain((0..SIDE).map(WinLine::Column))
            .chain([WinLine::Diagonal, WinLine::AntiDiagonal])
    }

    pub fn cells(self) -> impl Iterator<Item = Coord2> {
        use WinLine::*;
        (0..SIDE).map(move |i| match self {
            Row(row) => (row, i),
            Column(col) => (i, col),
            Diagonal => (i, i),
            AntiDiagonal => (i, SIDE - 1 - i),
        })
    }

    /// Cells outside `grid` count as unchecked, so a short board can never complete a line through them.
    pub fn is_complete(self, grid: &Array2<bool>) -> bool {
        self.cells()
            .all(|coords| grid.get(coords.to_nd_index()).copied().unwrap_or(false))
    }
}

/// Set of cells that belong to at least one complete line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WinningCells(BTreeSet<Coord2>);

impl WinningCells {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.0.contains(&coords)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < CELL_COUNT && self.contains(index_to_coords(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.0.iter().copied()
    }

    /// Row-major indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(coords_to_index)
    }
}

impl FromIterator<Coord2> for WinningCells {
    fn from_iter<I: IntoIterator<Item = Coord2>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

pub fn winning_lines(grid: &Array2<bool>) -> Vec<WinLine> {
    WinLine::all().filter(|line| line.is_complete(grid)).collect()
}

/// Union of the cells of every complete row, column and diagonal of `grid`.
pub fn evaluate(grid: &Array2<bool>) -> WinningCells {
    let cells: WinningCells = WinLine::all()
        .filter(|line| line.is_complete(grid))
        .flat_map(WinLine::cells)
        .collect();
    log::trace!("winning cells: {:?}", cells);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn grid_from_bits(bits: u16) -> Array2<bool> {
        let mut grid = Array2::default((SIDE as usize, SIDE as usize));
        for index in 0..CELL_COUNT {
            grid[index_to_coords(index).to_nd_index()] = bits & (1 << index) != 0;
        }
        grid
    }

    fn grid_from_indices(indices: &[usize]) -> Array2<bool> {
        grid_from_bits(indices.iter().fold(0, |bits, &i| bits | (1 << i)))
    }

    const LINES: [[usize; 4]; 10] = [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [8, 9, 10, 11],
        [12, 13, 14, 15],
        [0, 4, 8, 12],
        [1, 5, 9, 13],
        [2, 6, 10, 14],
        [3, 7, 11, 15],
        [0, 5, 10, 15],
        [3, 6, 9, 12],
    ];

    fn reference(bits: u16) -> BTreeSet<usize> {
        LINES
            .iter()
            .filter(|line| line.iter().all(|&i| bits & (1 << i) != 0))
            .flat_map(|line| line.iter().copied())
            .collect()
    }

    #[test]
    fn matches_reference_on_every_grid() {
        for bits in 0..=u16::MAX {
            let actual: BTreeSet<usize> = evaluate(&grid_from_bits(bits)).indices().collect();
            assert_eq!(actual, reference(bits), "grid bits {bits:#018b}");
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let grid = grid_from_indices(&[0, 5, 10, 15, 1, 2, 3]);
        assert_eq!(evaluate(&grid), evaluate(&grid));
    }

    #[test]
    fn empty_grid_has_no_winners() {
        assert!(evaluate(&grid_from_bits(0)).is_empty());
        assert!(winning_lines(&grid_from_bits(0)).is_empty());
    }

    #[test]
    fn first_row_wins() {
        let cells = evaluate(&grid_from_indices(&[0, 1, 2, 3]));
        assert_eq!(cells.indices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert!(cells.contains((0, 2)));
        assert!(!cells.contains_index(4));
    }

    #[test]
    fn anti_diagonal_wins() {
        let grid = grid_from_indices(&[3, 6, 9, 12]);
        assert_eq!(winning_lines(&grid), vec![WinLine::AntiDiagonal]);
        assert_eq!(
            evaluate(&grid).iter().collect::<Vec<_>>(),
            vec![(0, 3), (1, 2), (2, 1), (3, 0)]
        );
    }

    #[test]
    fn overlapping_lines_are_deduplicated() {
        // row 0 and column 0 share (0, 0)
        let grid = grid_from_indices(&[0, 1, 2, 3, 4, 8, 12]);
        let cells = evaluate(&grid);
        assert_eq!(cells.len(), 7);
        assert_eq!(
            winning_lines(&grid),
            vec![WinLine::Row(0), WinLine::Column(0)]
        );
    }

    #[test]
    fn full_board_reports_all_ten_lines() {
        let grid = grid_from_bits(u16::MAX);
        assert_eq!(winning_lines(&grid).len(), 10);
        assert_eq!(evaluate(&grid).len(), CELL_COUNT);
    }

    #[test]
    fn cells_missing_from_a_short_grid_count_as_unchecked() {
        let grid = Array2::from_elem((2, 4), true);
        assert_eq!(
            winning_lines(&grid),
            vec![WinLine::Row(0), WinLine::Row(1)]
        );
    }
}
