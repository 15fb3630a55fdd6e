//! Board module - manages the game grid
//!
//! The board is a square grid of cells, each empty or holding one tile kind.
//! It starts at 4x4 and can grow one row/column at a time up to 9x9. Storage
//! is a flat row-major vector for cache locality; growth copies the existing
//! tiles into the unchanged top-left submatrix of the new allocation.
//! Coordinates: (row, col), both ranging 0..size, top-left origin.

use crate::types::{Cell, GridError, Position, TileKind, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// The game board - growable square grid using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat vector of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
    /// Current edge length
    size: u8,
}

impl Board {
    /// Create a new empty board at the minimum size
    pub fn new() -> Self {
        Self::with_size(MIN_GRID_SIZE)
    }

    /// Create a new empty board of the given size, clamped to [4, 9]
    pub fn with_size(size: u8) -> Self {
        let size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        Self {
            cells: vec![None; (size as usize) * (size as usize)],
            size,
        }
    }

    /// Calculate flat index from a position
    /// Returns None if the position is out of bounds
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some((pos.row as usize) * (self.size as usize) + (pos.col as usize))
    }

    #[inline]
    fn out_of_bounds(&self, pos: Position) -> GridError {
        GridError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            size: self.size,
        }
    }

    /// Current edge length of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Check if a position lies within the current bounds
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.size as i8 && pos.col >= 0 && pos.col < self.size as i8
    }

    /// Check whether the cell at `pos` is empty
    pub fn is_empty(&self, pos: Position) -> Result<bool, GridError> {
        self.get(pos).map(|cell| cell.is_none())
    }

    /// Get the cell at `pos`
    pub fn get(&self, pos: Position) -> Result<Cell, GridError> {
        self.index(pos)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Place a tile at `pos`, overwriting any existing tile
    pub fn place(&mut self, kind: TileKind, pos: Position) -> Result<(), GridError> {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = Some(kind);
                Ok(())
            }
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// Remove the tile at `pos`, if any
    pub fn remove(&mut self, pos: Position) -> Result<(), GridError> {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = None;
                Ok(())
            }
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// Set a cell directly. Used by the movement engine, which works in
    /// already-validated coordinates.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = cell;
        }
    }

    /// Read a cell without the error channel: out of bounds reads as empty.
    /// Used by the movement engine, which stays within the board by
    /// construction.
    pub(crate) fn at(&self, pos: Position) -> Cell {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Grow the board by one row and one column.
    ///
    /// Existing tiles keep their coordinates (the old grid becomes the
    /// top-left submatrix). Returns false without touching the board when
    /// already at the maximum size.
    pub fn expand(&mut self) -> bool {
        if self.size >= MAX_GRID_SIZE {
            return false;
        }

        let old_size = self.size as usize;
        let new_size = old_size + 1;
        let mut new_cells = vec![None; new_size * new_size];

        for row in 0..old_size {
            let src = row * old_size;
            let dst = row * new_size;
            new_cells[dst..dst + old_size].copy_from_slice(&self.cells[src..src + old_size]);
        }

        self.cells = new_cells;
        self.size = new_size as u8;
        true
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// All occupied positions in row-major order, recomputed per call
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| cell.is_some())
    }

    /// All empty positions in row-major order, recomputed per call
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| cell.is_none())
    }

    fn positions_where(&self, keep: impl Fn(&Cell) -> bool) -> Vec<Position> {
        let size = self.size as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, cell)| keep(cell))
            .map(|(idx, _)| Position::new((idx / size) as i8, (idx % size) as i8))
            .collect()
    }

    /// Get a reference to the internal cells vector
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new_is_empty_min_size() {
        let board = Board::new();
        assert_eq!(board.size(), MIN_GRID_SIZE);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.cells().len(), 16);
    }

    #[test]
    fn test_board_index_bounds() {
        let board = Board::new();
        assert!(board.is_valid_position(Position::new(0, 0)));
        assert!(board.is_valid_position(Position::new(3, 3)));
        assert!(!board.is_valid_position(Position::new(-1, 0)));
        assert!(!board.is_valid_position(Position::new(0, 4)));
        assert!(!board.is_valid_position(Position::new(4, 0)));
    }

    #[test]
    fn test_board_place_and_get() {
        let mut board = Board::new();
        let pos = Position::new(1, 2);

        board.place(TileKind::Pawn, pos).unwrap();
        assert_eq!(board.get(pos), Ok(Some(TileKind::Pawn)));
        assert_eq!(board.is_empty(pos), Ok(false));

        // Overwrite is allowed
        board.place(TileKind::Queen, pos).unwrap();
        assert_eq!(board.get(pos), Ok(Some(TileKind::Queen)));
    }

    #[test]
    fn test_board_remove() {
        let mut board = Board::new();
        let pos = Position::new(2, 2);

        board.place(TileKind::Rook, pos).unwrap();
        board.remove(pos).unwrap();
        assert_eq!(board.get(pos), Ok(None));

        // Removing an empty cell is fine
        board.remove(pos).unwrap();
        assert_eq!(board.get(pos), Ok(None));
    }

    #[test]
    fn test_board_out_of_bounds_errors() {
        let mut board = Board::new();
        let bad = Position::new(4, 0);
        let err = GridError::OutOfBounds {
            row: 4,
            col: 0,
            size: 4,
        };

        assert_eq!(board.get(bad), Err(err));
        assert_eq!(board.is_empty(bad), Err(err));
        assert_eq!(board.place(TileKind::Pawn, bad), Err(err));
        assert_eq!(board.remove(bad), Err(err));

        assert_eq!(
            board.get(Position::new(0, -1)),
            Err(GridError::OutOfBounds {
                row: 0,
                col: -1,
                size: 4
            })
        );
    }

    #[test]
    fn test_board_expand_preserves_tiles() {
        let mut board = Board::new();
        board.place(TileKind::Pawn, Position::new(0, 0)).unwrap();
        board.place(TileKind::Queen, Position::new(3, 3)).unwrap();

        assert!(board.expand());
        assert_eq!(board.size(), 5);
        assert_eq!(board.get(Position::new(0, 0)), Ok(Some(TileKind::Pawn)));
        assert_eq!(board.get(Position::new(3, 3)), Ok(Some(TileKind::Queen)));

        // The appended row and column start empty
        for i in 0..5 {
            assert_eq!(board.get(Position::new(4, i)), Ok(None));
            assert_eq!(board.get(Position::new(i, 4)), Ok(None));
        }
    }

    #[test]
    fn test_board_expand_stops_at_max() {
        let mut board = Board::new();
        for expected in 5..=MAX_GRID_SIZE {
            assert!(board.expand());
            assert_eq!(board.size(), expected);
        }
        let before = board.clone();
        assert!(!board.expand());
        assert_eq!(board, before);
    }

    #[test]
    fn test_board_with_size_clamps() {
        assert_eq!(Board::with_size(2).size(), MIN_GRID_SIZE);
        assert_eq!(Board::with_size(7).size(), 7);
        assert_eq!(Board::with_size(20).size(), MAX_GRID_SIZE);
    }

    #[test]
    fn test_board_position_queries() {
        let mut board = Board::new();
        board.place(TileKind::Pawn, Position::new(0, 1)).unwrap();
        board.place(TileKind::Pawn, Position::new(2, 3)).unwrap();

        let occupied = board.occupied_positions();
        assert_eq!(occupied, vec![Position::new(0, 1), Position::new(2, 3)]);
        assert_eq!(board.empty_positions().len(), 14);
        assert_eq!(board.occupied_count(), 2);
        assert!(!board.is_full());
    }

    #[test]
    fn test_board_is_full() {
        let mut board = Board::new();
        for row in 0..4 {
            for col in 0..4 {
                board.place(TileKind::Pawn, Position::new(row, col)).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }
}
