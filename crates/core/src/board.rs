//! Board module - manages the game grid
//!
//! The board is a width x height grid where each cell is empty or holds a locked tile.
//! Uses a flat array for better cache locality.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom)
//! Only locked pieces are ever written here; the falling piece lives in `GameState`.

use arrayvec::ArrayVec;

use crate::config::EngineConfig;
use crate::types::{Block, Cell, Tile, MAX_BOARD_SIDE};

/// Row indices removed by one clear pass (at most every row of the largest board)
pub type ClearedRows = ArrayVec<usize, { MAX_BOARD_SIDE as usize }>;

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the configured dimensions
    pub fn new(config: &EngineConfig) -> Self {
        let (width, height) = (config.width(), config.height());
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Whether a falling block may sit at (x, y).
    ///
    /// The column must be on the board and the row above the floor. Rows above
    /// the top edge are open (pieces enter from there); rows on the board must
    /// be empty.
    pub fn admits(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return false;
        }
        y < 0 || self.is_valid(x, y)
    }

    /// Get one row as a slice
    /// Returns None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Number of completely filled rows
    pub fn full_row_count(&self) -> usize {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .count()
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Two-pointer compaction: rows are read bottom-up and every kept row is
    /// written to the next free slot from the bottom, so adjacent full rows are
    /// all removed in one pass and kept rows keep their relative order. The
    /// freed rows at the top are emptied.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = self.width as usize;
        let mut write_y = self.height as usize;

        // Scan from bottom to top
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Write blocks onto the board as locked tiles, keeping their colors
    ///
    /// Blocks outside the board (e.g. still above the top edge) are dropped.
    /// Returns how many blocks were written.
    pub fn lock_blocks(&mut self, blocks: &[Block]) -> usize {
        blocks
            .iter()
            .filter(|b| self.set(b.x, b.y, Some(Tile::from(**b))))
            .count()
    }

    /// Whether any of the blocks sits on a locked tile
    pub fn overlaps(&self, blocks: &[Block]) -> bool {
        blocks.iter().any(|b| self.is_occupied(b.x, b.y))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of locked tiles on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
