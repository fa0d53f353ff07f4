//! Block module - a single occupied cell
//!
//! Blocks are owned values. A block lives inside exactly one container at a time
//! (the falling shape, the preview shape, or the grid) and moves between them by
//! value. `Block` is deliberately not `Copy`; copies handed to the host for
//! animation are explicit clones.

use crate::types::BlockColor;

/// Stable identity of a block, unique within one engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

/// A single block on (or off) the board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    pub id: BlockId,
    pub column: i32,
    pub row: i32,
    pub color: BlockColor,
}

impl Block {
    pub fn new(id: BlockId, column: i32, row: i32, color: BlockColor) -> Self {
        Self {
            id,
            column,
            row,
            color,
        }
    }

    /// Sprite name for rendering
    pub fn sprite_name(&self) -> &'static str {
        self.color.sprite_name()
    }

    /// Position as (column, row)
    pub fn position(&self) -> (i32, i32) {
        (self.column, self.row)
    }
}
