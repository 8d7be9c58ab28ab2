//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine rules, input drivers, presentation layers).
//!
//! # Board Dimensions
//!
//! Standard Tetris playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! Other dimensions can be configured per engine instance; these are only the
//! defaults.
//!
//! # Timing
//!
//! The engine itself has no timer. Drivers call the gravity tick on a fixed
//! cadence, `DEFAULT_TICK_MS` (one row per second) unless configured otherwise.
//!
//! # Examples
//!
//! ```
//! use vr_tetris_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Commands accept the VR controller aliases too
//! assert_eq!(Command::from_str("up"), Some(Command::Rotate));
//! assert_eq!(Command::from_str("down"), Some(Command::Drop));
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest board side accepted by engine configuration.
pub const MIN_BOARD_SIDE: u8 = 4;

/// Largest board side accepted by engine configuration.
pub const MAX_BOARD_SIDE: u8 = 64;

/// Number of blocks in every piece.
pub const PIECE_BLOCKS: usize = 4;

/// Default gravity cadence (1000ms = 1 row per second)
pub const DEFAULT_TICK_MS: u32 = 1000;

/// Default minimum interval between repeated thumbstick commands.
pub const DEFAULT_STICK_REPEAT_MS: u32 = 500;

/// Thumbstick deflection needed before an axis produces a command.
pub const STICK_DEADZONE: f32 = 0.5;


/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order. Spawning indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use vr_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Display color used for every block of this kind.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Color attribute carried by blocks and locked tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    /// Parse color from its lowercase name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(Color::Cyan),
            "blue" => Some(Color::Blue),
            "orange" => Some(Color::Orange),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "purple" => Some(Color::Purple),
            "red" => Some(Color::Red),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }

    /// 24-bit RGB value, for presentation layers that want one.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Cyan => (0, 240, 240),
            Color::Blue => (0, 0, 240),
            Color::Orange => (240, 160, 0),
            Color::Yellow => (240, 240, 0),
            Color::Green => (0, 240, 0),
            Color::Purple => (160, 0, 240),
            Color::Red => (240, 0, 0),
        }
    }
}

/// A board coordinate: column `x`, row `y` (row 0 at the top).
///
/// Rows may be negative while a piece is still entering from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Shift by a delta, saturating at the `i8` range.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Shift by a delta, or `None` if either axis leaves the `i8` range.
    pub const fn checked_offset(self, dx: i8, dy: i8) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

/// A single occupied unit: coordinate plus optional color.
///
/// Used both for piece-relative offsets (catalog shapes) and for absolute
/// positions of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: i8,
    pub y: i8,
    pub color: Option<Color>,
}

impl Block {
    pub const fn new(x: i8, y: i8, color: Option<Color>) -> Self {
        Self { x, y, color }
    }

    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Same block shifted by a delta (color kept), saturating at the `i8` range.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            color: self.color,
        }
    }

    /// Same block shifted by a delta, or `None` on `i8` overflow.
    pub const fn checked_offset(self, dx: i8, dy: i8) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self {
                x,
                y,
                color: self.color,
            }),
            _ => None,
        }
    }
}

/// A locked tile on the board. Keeps the color of the block that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub color: Option<Color>,
}

impl From<Block> for Tile {
    fn from(block: Block) -> Self {
        Self { color: block.color }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Cell filled by a previously locked piece
pub type Cell = Option<Tile>;

/// Discrete commands accepted from input drivers
///
/// Keyboard and VR controllers both reduce to these four commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Rotate piece 90°
    Rotate,
    /// One gravity tick (descend, or lock + spawn + clear)
    Drop,
}

impl Command {
    /// Parse a command name (case-insensitive)
    ///
    /// `up` and `down` are the names VR controllers emit for rotate and drop.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "rotate" | "up" => Some(Command::Rotate),
            "drop" | "down" => Some(Command::Drop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Rotate => "rotate",
            Command::Drop => "drop",
        }
    }
}
