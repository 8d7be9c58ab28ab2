//! Snapshot module - serializable read-only view for presentation layers
//!
//! Renderers (VR scene, terminal, remote observers) consume this instead of
//! reaching into engine types. Colors and kinds use lowercase names.

use serde::{Deserialize, Serialize};

use crate::game_state::GameState;
use crate::types::{Block, Color, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKindLower {
    #[serde(rename = "i")]
    I,
    #[serde(rename = "j")]
    J,
    #[serde(rename = "l")]
    L,
    #[serde(rename = "o")]
    O,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "t")]
    T,
    #[serde(rename = "z")]
    Z,
}

impl From<PieceKind> for PieceKindLower {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => Self::I,
            PieceKind::J => Self::J,
            PieceKind::L => Self::L,
            PieceKind::O => Self::O,
            PieceKind::S => Self::S,
            PieceKind::T => Self::T,
            PieceKind::Z => Self::Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLower {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl From<Color> for ColorLower {
    fn from(value: Color) -> Self {
        match value {
            Color::Cyan => Self::Cyan,
            Color::Blue => Self::Blue,
            Color::Orange => Self::Orange,
            Color::Yellow => Self::Yellow,
            Color::Green => Self::Green,
            Color::Purple => Self::Purple,
            Color::Red => Self::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub x: i8,
    pub y: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub color: Option<ColorLower>,
}

impl From<&Block> for BlockSnapshot {
    fn from(value: &Block) -> Self {
        Self {
            x: value.x,
            y: value.y,
            color: value.color.map(ColorLower::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKindLower,
    pub x: i8,
    pub y: i8,
    pub blocks: Vec<BlockSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub color: Option<ColorLower>,
}

/// One board row; `None` is an empty cell.
pub type RowSnapshot = Vec<Option<TileSnapshot>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub board: Vec<RowSnapshot>,
    pub active: ActiveSnapshot,
    pub lines_cleared: u32,
    pub topped_out: bool,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        let board = self.board();
        let active = self.active();
        GameSnapshot {
            width: board.width(),
            height: board.height(),
            board: board
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| {
                            cell.map(|tile| TileSnapshot {
                                color: tile.color.map(ColorLower::from),
                            })
                        })
                        .collect()
                })
                .collect(),
            active: ActiveSnapshot {
                kind: active.kind().into(),
                x: active.position().x,
                y: active.position().y,
                blocks: active.blocks().iter().map(BlockSnapshot::from).collect(),
            },
            lines_cleared: self.lines_cleared(),
            topped_out: self.is_topped_out(),
        }
    }
}
