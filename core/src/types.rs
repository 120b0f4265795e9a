/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Side length of the square board.
pub const SIDE: Coord = 4;

/// Number of cells on a fully dealt board.
pub const CELL_COUNT: usize = (SIDE as usize) * (SIDE as usize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Row-major index to `(row, column)`. The caller is responsible for `index < CELL_COUNT`.
pub const fn index_to_coords(index: usize) -> Coord2 {
    let side = SIDE as usize;
    ((index / side) as Coord, (index % side) as Coord)
}

pub const fn coords_to_index((row, col): Coord2) -> usize {
    (row as usize) * (SIDE as usize) + (col as usize)
}
