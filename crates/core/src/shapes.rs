//! Shapes module - the catalog of the seven tetromino layouts
//!
//! Offsets are relative to the piece anchor, `y` grows downward. Every call to
//! [`create_shape`] hands out an independent copy, so pieces can be moved and
//! rotated freely without touching the catalog.

use crate::types::{Block, PieceKind, PIECE_BLOCKS};

/// Offset of a single block relative to the piece anchor
pub type BlockOffset = (i8, i8);

/// Catalog layout for one kind
pub type ShapeLayout = [BlockOffset; PIECE_BLOCKS];

/// An un-positioned shape instance: 4 colored offsets of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: PieceKind,
    pub blocks: [Block; PIECE_BLOCKS],
}

impl Shape {
    pub fn min_x(&self) -> i8 {
        self.blocks.iter().map(|b| b.x).min().unwrap_or(0)
    }

    pub fn max_x(&self) -> i8 {
        self.blocks.iter().map(|b| b.x).max().unwrap_or(0)
    }

    pub fn min_y(&self) -> i8 {
        self.blocks.iter().map(|b| b.y).min().unwrap_or(0)
    }

    pub fn max_y(&self) -> i8 {
        self.blocks.iter().map(|b| b.y).max().unwrap_or(0)
    }

    /// Bounding-box width in cells
    pub fn width(&self) -> i8 {
        self.max_x() - self.min_x() + 1
    }

    /// Bounding-box height in cells
    pub fn height(&self) -> i8 {
        self.max_y() - self.min_y() + 1
    }
}

/// Get the catalog layout for a piece kind
pub fn layout(kind: PieceKind) -> ShapeLayout {
    match kind {
        PieceKind::I => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        PieceKind::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (1, -1)],
        PieceKind::O => [(0, 0), (1, 0), (0, -1), (1, -1)],
        PieceKind::S => [(-1, 0), (0, 0), (0, -1), (1, -1)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, -1)],
        PieceKind::Z => [(-1, -1), (0, -1), (0, 0), (1, 0)],
    }
}

/// Create a fresh shape instance for a kind, colored with the kind's color
pub fn create_shape(kind: PieceKind) -> Shape {
    let color = Some(kind.color());
    let offsets = layout(kind);
    Shape {
        kind,
        blocks: offsets.map(|(x, y)| Block::new(x, y, color)),
    }
}
