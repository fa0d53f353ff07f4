//! Shape module - tetromino layouts, translation and rotation
//!
//! A shape is four blocks positioned relative to an origin. Each kind has a
//! fixed layout per orientation; rotating swaps the layout and re-derives every
//! block position from the origin, so rotations never drift and clockwise /
//! counter-clockwise are exact inverses. There are no wall kicks: the engine
//! rejects a rotation that does not fit.

use arrayvec::ArrayVec;

use crate::block::{Block, BlockId};
use crate::rng::SimpleRng;
use crate::types::{BlockColor, Orientation, ShapeKind, BLOCKS_PER_SHAPE};

/// Offset of a single block relative to the shape origin, as (column, row)
pub type BlockOffset = (i32, i32);

/// Layout of a shape in one orientation
pub type ShapeLayout = [BlockOffset; BLOCKS_PER_SHAPE];

/// Get the block offsets for a shape kind and orientation
pub fn get_layout(kind: ShapeKind, orientation: Orientation) -> ShapeLayout {
    let table = match kind {
        ShapeKind::Square => &SQUARE_LAYOUTS,
        ShapeKind::T => &T_LAYOUTS,
        ShapeKind::Line => &LINE_LAYOUTS,
        ShapeKind::L => &L_LAYOUTS,
        ShapeKind::J => &J_LAYOUTS,
        ShapeKind::S => &S_LAYOUTS,
        ShapeKind::Z => &Z_LAYOUTS,
    };
    table[orientation.index()]
}

type LayoutTable = [ShapeLayout; 4];

/// Square: same in every orientation
const SQUARE_LAYOUTS: LayoutTable = [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4];

const T_LAYOUTS: LayoutTable = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(2, 1), (1, 0), (1, 1), (1, 2)],
    [(1, 2), (0, 1), (1, 1), (2, 1)],
    [(0, 1), (1, 0), (1, 1), (1, 2)],
];

/// Line: vertical at 0°/180°, horizontal at 90°/270°
const LINE_LAYOUTS: LayoutTable = [
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
];

const L_LAYOUTS: LayoutTable = [
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(1, 1), (0, 1), (-1, 1), (-1, 2)],
    [(0, 2), (0, 1), (0, 0), (-1, 0)],
    [(-1, 1), (0, 1), (1, 1), (1, 0)],
];

const J_LAYOUTS: LayoutTable = [
    [(1, 0), (1, 1), (1, 2), (0, 2)],
    [(2, 1), (1, 1), (0, 1), (0, 0)],
    [(0, 2), (0, 1), (0, 0), (1, 0)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
];

const S_LAYOUTS: LayoutTable = [
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(2, 0), (1, 0), (1, 1), (0, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(2, 0), (1, 0), (1, 1), (0, 1)],
];

const Z_LAYOUTS: LayoutTable = [
    [(1, 0), (1, 1), (0, 1), (0, 2)],
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (0, 1), (0, 2)],
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
];

/// A piece made of four blocks that move and rotate as one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    orientation: Orientation,
    column: i32,
    row: i32,
    color: BlockColor,
    blocks: [Block; BLOCKS_PER_SHAPE],
}

impl Shape {
    /// Create a shape with its origin at (column, row)
    pub fn new(
        kind: ShapeKind,
        orientation: Orientation,
        column: i32,
        row: i32,
        color: BlockColor,
        ids: [BlockId; BLOCKS_PER_SHAPE],
    ) -> Self {
        let layout = get_layout(kind, orientation);
        let blocks = std::array::from_fn(|i| {
            let (dc, dr) = layout[i];
            Block::new(ids[i], column + dc, row + dr, color)
        });
        Self {
            kind,
            orientation,
            column,
            row,
            color,
            blocks,
        }
    }

    /// Create a shape of a uniformly random kind and color at its spawn orientation
    pub fn random(
        starting_column: i32,
        starting_row: i32,
        rng: &mut SimpleRng,
        ids: [BlockId; BLOCKS_PER_SHAPE],
    ) -> Self {
        let kind = rng.shape_kind();
        let color = rng.color();
        Self::new(
            kind,
            Orientation::Zero,
            starting_column,
            starting_row,
            color,
            ids,
        )
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    /// Origin as (column, row)
    pub fn origin(&self) -> (i32, i32) {
        (self.column, self.row)
    }

    pub fn blocks(&self) -> &[Block; BLOCKS_PER_SHAPE] {
        &self.blocks
    }

    /// Give up the blocks (the shape ceases to exist)
    pub fn into_blocks(self) -> [Block; BLOCKS_PER_SHAPE] {
        self.blocks
    }

    /// Absolute (column, row) of every block
    pub fn cells(&self) -> [(i32, i32); BLOCKS_PER_SHAPE] {
        std::array::from_fn(|i| self.blocks[i].position())
    }

    /// Per occupied column, the block with the greatest row, ordered by column
    pub fn bottom_blocks(&self) -> ArrayVec<&Block, BLOCKS_PER_SHAPE> {
        let mut bottoms: ArrayVec<&Block, BLOCKS_PER_SHAPE> = ArrayVec::new();
        for block in &self.blocks {
            match bottoms.iter_mut().find(|b| b.column == block.column) {
                Some(existing) => {
                    if block.row > existing.row {
                        *existing = block;
                    }
                }
                None => bottoms.push(block),
            }
        }
        bottoms.sort_by_key(|b| b.column);
        bottoms
    }

    /// Reposition the whole shape with its origin at (column, row)
    pub fn move_to(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
        self.reposition_blocks();
    }

    /// Translate by (columns, rows)
    pub fn shift_by(&mut self, columns: i32, rows: i32) {
        self.column += columns;
        self.row += rows;
        for block in &mut self.blocks {
            block.column += columns;
            block.row += rows;
        }
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }

    pub fn lower_shape_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_shape_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    pub fn rotate_clockwise(&mut self) {
        self.orientation = self.orientation.rotate_cw();
        self.reposition_blocks();
    }

    pub fn rotate_counter_clockwise(&mut self) {
        self.orientation = self.orientation.rotate_ccw();
        self.reposition_blocks();
    }

    fn reposition_blocks(&mut self) {
        let layout = get_layout(self.kind, self.orientation);
        for (block, &(dc, dr)) in self.blocks.iter_mut().zip(layout.iter()) {
            block.column = self.column + dc;
            block.row = self.row + dr;
        }
    }
}
