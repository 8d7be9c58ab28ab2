//! Piece module - a shape bound to an absolute board position
//!
//! The anchor `position` and the four absolute `blocks` always move together:
//! a translation shifts both by the same delta, a rotation recomputes the
//! blocks around the anchor. Fields are private so nothing can desync them.

use crate::shapes::Shape;
use crate::types::{Block, Coord, PieceKind, PIECE_BLOCKS};

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    position: Coord,
    blocks: [Block; PIECE_BLOCKS],
}

impl Piece {
    /// Place a shape instance with its anchor at `position`
    pub fn new(shape: &Shape, position: Coord) -> Self {
        Self {
            kind: shape.kind,
            position,
            blocks: shape.blocks.map(|b| b.offset(position.x, position.y)),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// Absolute block coordinates
    pub fn blocks(&self) -> &[Block; PIECE_BLOCKS] {
        &self.blocks
    }

    /// Block offsets relative to the anchor
    pub fn relative_blocks(&self) -> [Block; PIECE_BLOCKS] {
        let Coord { x: px, y: py } = self.position;
        self.blocks
            .map(|b| Block::new(b.x.saturating_sub(px), b.y.saturating_sub(py), b.color))
    }

    /// Same piece shifted by (dx, dy), or `None` if any coordinate would
    /// leave the `i8` range.
    pub fn try_translated(&self, dx: i8, dy: i8) -> Option<Self> {
        let position = self.position.checked_offset(dx, dy)?;
        let mut blocks = self.blocks;
        for block in &mut blocks {
            *block = block.checked_offset(dx, dy)?;
        }
        Some(Self {
            kind: self.kind,
            position,
            blocks,
        })
    }

    /// Same piece rotated 90° around its anchor: `(x, y) -> (-y, x)`.
    ///
    /// `None` if a rotated block would leave the `i8` range. No wall kick is
    /// applied; callers decide whether the result fits.
    pub fn try_rotated(&self) -> Option<Self> {
        let (px, py) = (self.position.x as i16, self.position.y as i16);
        let mut blocks = self.blocks;
        for block in &mut blocks {
            let (rx, ry) = (block.x as i16 - px, block.y as i16 - py);
            let x = i8::try_from(px - ry).ok()?;
            let y = i8::try_from(py + rx).ok()?;
            *block = Block::new(x, y, block.color);
        }
        Some(Self {
            kind: self.kind,
            position: self.position,
            blocks,
        })
    }
}
