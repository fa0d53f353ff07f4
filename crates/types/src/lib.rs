//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9)
//! - **Rows**: 20 (indexed 0-19, row 0 at the top)
//! - **Spawn position**: column 4, row 0
//! - **Preview position**: column 12, row 1 (outside the board, right of it)
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 10 | Points per cleared line, multiplied by the level |
//! | `LEVEL_THRESHOLD` | 500 | Level `n` ends once the score reaches `n * 500` |
//!
//! # Tick Timing
//!
//! The engine never keeps time. The host calls the fall command on a timer whose
//! length shrinks as the level grows:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 600ms |
//! | 2 | 500ms |
//! | 6 | 100ms |
//! | 7 | 50ms |
//! | 8+ | 50ms (floor) |
//!
//! # Examples
//!
//! ```
//! use tektris_types::{GameAction, Orientation, ShapeKind, NUM_COLUMNS, NUM_ROWS};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! assert_eq!(Orientation::Zero.rotate_cw(), Orientation::Ninety);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(NUM_COLUMNS, 10);
//! assert_eq!(NUM_ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const NUM_COLUMNS: i32 = 10;

/// Board height in cells (20 rows)
pub const NUM_ROWS: i32 = 20;

/// Column where a newly promoted falling shape is placed
pub const STARTING_COLUMN: i32 = 4;

/// Row where a newly promoted falling shape is placed
pub const STARTING_ROW: i32 = 0;

/// Column of the next-shape preview (off-board)
pub const PREVIEW_COLUMN: i32 = 12;

/// Row of the next-shape preview
pub const PREVIEW_ROW: i32 = 1;

/// Points for each cleared line at level 1
pub const POINTS_PER_LINE: u32 = 10;

/// Score needed per level before leveling up (`level * LEVEL_THRESHOLD`)
pub const LEVEL_THRESHOLD: u32 = 500;

/// Tick interval at level 1 in milliseconds
pub const TICK_LENGTH_LEVEL_ONE_MS: u32 = 600;

/// Tick shortening per level while the interval is still longer than this
pub const TICK_LEVEL_STEP_MS: u32 = 100;

/// Smaller tick shortening once the interval has dropped below `TICK_LEVEL_STEP_MS`
pub const TICK_LEVEL_FINE_STEP_MS: u32 = 50;

/// Shortest tick interval the level curve reaches
pub const TICK_LENGTH_FLOOR_MS: u32 = 50;

/// Number of blocks in every shape
pub const BLOCKS_PER_SHAPE: usize = 4;

/// Compute the tick interval for a level.
///
/// Starts at [`TICK_LENGTH_LEVEL_ONE_MS`] and, for every level past the first,
/// subtracts 100ms while the interval is above 100ms, then 50ms while it is
/// above 50ms.
///
/// ```
/// use tektris_types::tick_interval_ms;
///
/// assert_eq!(tick_interval_ms(1), 600);
/// assert_eq!(tick_interval_ms(2), 500);
/// assert_eq!(tick_interval_ms(7), 50);
/// assert_eq!(tick_interval_ms(30), 50);
/// ```
pub fn tick_interval_ms(level: u32) -> u32 {
    let mut interval = TICK_LENGTH_LEVEL_ONE_MS;
    for _ in 1..level.max(1) {
        if interval > TICK_LEVEL_STEP_MS {
            interval -= TICK_LEVEL_STEP_MS;
        } else if interval > TICK_LENGTH_FLOOR_MS {
            interval -= TICK_LEVEL_FINE_STEP_MS;
        } else {
            break;
        }
    }
    interval.max(TICK_LENGTH_FLOOR_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_board_defaults() {
        assert_eq!(NUM_COLUMNS, 10);
        assert_eq!(NUM_ROWS, 20);
        assert_eq!((STARTING_COLUMN, STARTING_ROW), (4, 0));
        assert_eq!((PREVIEW_COLUMN, PREVIEW_ROW), (12, 1));
        assert_eq!(POINTS_PER_LINE, 10);
        assert_eq!(LEVEL_THRESHOLD, 500);
    }

    #[test]
    fn tick_interval_curve() {
        let curve: Vec<u32> = (1..=9).map(tick_interval_ms).collect();
        assert_eq!(curve, vec![600, 500, 400, 300, 200, 100, 50, 50, 50]);
        assert_eq!(tick_interval_ms(0), 600);
    }

    #[test]
    fn orientation_round_trip() {
        for o in Orientation::ALL {
            assert_eq!(o.rotate_cw().rotate_ccw(), o);
            assert_eq!(o.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), o);
        }
    }

    #[test]
    fn event_names() {
        assert_eq!(GameEvent::DidBegin.as_str(), "gameDidBegin");
        assert_eq!(GameEvent::ShapeDidLand.as_str(), "gameShapeDidLand");
    }
}

/// Cosmetic color tag carried by every block.
///
/// A shape picks one color when it is created and all four of its blocks share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    /// Every color, in palette order
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];

    /// Name of the sprite a renderer would use for this color
    pub fn sprite_name(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }
}

/// The seven shape kinds
///
/// - **Square**: 2x2, identical in every orientation
/// - **T**: T-shaped
/// - **Line**: four in a row
/// - **L** / **J**: mirrored L shapes
/// - **S** / **Z**: mirrored skew shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    T,
    Line,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// Every shape kind; the random factory picks uniformly from this list
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::T,
        ShapeKind::Line,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// ```
    /// use tektris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("line"), Some(ShapeKind::Line));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" | "o" => Some(ShapeKind::Square),
            "t" => Some(ShapeKind::T),
            "line" | "i" => Some(ShapeKind::Line),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::T => "t",
            ShapeKind::Line => "line",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Orientation of a shape, in clockwise quarter turns from spawn
///
/// The rotation cycle goes: Zero → Ninety → OneEighty → TwoSeventy → Zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tektris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_cw(), Orientation::Ninety);
    /// assert_eq!(Orientation::TwoSeventy.rotate_cw(), Orientation::Zero);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use tektris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_ccw(), Orientation::TwoSeventy);
    /// assert_eq!(Orientation::Ninety.rotate_ccw(), Orientation::Zero);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::Ninety => Orientation::Zero,
        }
    }

    /// Index into per-orientation tables (0..4)
    pub fn index(&self) -> usize {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 1,
            Orientation::OneEighty => 2,
            Orientation::TwoSeventy => 3,
        }
    }
}

/// Commands the host can send to the engine
///
/// Each action maps to one engine command; `Fall` is what a periodic tick sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the falling shape one column left
    MoveLeft,
    /// Shift the falling shape one column right
    MoveRight,
    /// Rotate the falling shape clockwise
    Rotate,
    /// Lower the falling shape one row (tick / soft drop)
    Fall,
    /// Move the falling shape to its lowest legal row
    Drop,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// ```
    /// use tektris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("drop"), Some(GameAction::Drop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "fall" => Some(GameAction::Fall),
            "drop" => Some(GameAction::Drop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Fall => "fall",
            GameAction::Drop => "drop",
        }
    }
}

/// Notifications emitted by the engine, in the order the triggering command produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game has begun; the host should spawn the first shape
    DidBegin,
    /// The current round ended; score and level were reset
    DidEnd,
    /// The level went up after a line clear
    DidLevelUp,
    /// The falling shape changed location (move, rotate, or fall)
    ShapeDidMove,
    /// The falling shape was hard dropped
    ShapeDidDrop,
    /// The falling shape became part of the board
    ShapeDidLand,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::DidBegin => "gameDidBegin",
            GameEvent::DidEnd => "gameDidEnd",
            GameEvent::DidLevelUp => "gameDidLevelUp",
            GameEvent::ShapeDidMove => "gameShapeDidMove",
            GameEvent::ShapeDidDrop => "gameShapeDidDrop",
            GameEvent::ShapeDidLand => "gameShapeDidLand",
        }
    }
}
