//! Game engine - board, falling shape, preview shape, scoring and rules
//!
//! The engine is a synchronous state machine driven entirely by the host:
//!
//! ```text
//! NoGame -> Spawning -> Falling -> Landing -> LineClearing (0..n) -> Spawning | GameOver
//! ```
//!
//! - [`Tektris::begin_game`] prepares the preview shape and emits `DidBegin`.
//! - [`Tektris::new_shape`] promotes the preview to the falling shape.
//! - A periodic host tick calls [`Tektris::let_shape_fall`].
//! - When `ShapeDidLand` is emitted the host calls [`Tektris::remove_completed_lines`]
//!   until nothing more clears, then spawns the next shape.
//! - When `DidEnd` is emitted the host tears the board down with
//!   [`Tektris::remove_all_blocks`] and later calls `begin_game` again.
//!
//! Rule violations are never errors: an illegal move is rolled back and simply
//! produces no `ShapeDidMove` event. Events queue up in emission order and are
//! taken with [`Tektris::drain_events`].

use crate::block::{Block, BlockId};
use crate::config::EngineConfig;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::{GameAction, GameEvent, BLOCKS_PER_SHAPE};

/// Result of one line-clearing pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    /// Every cleared row, bottom-most first; each row ordered by column
    pub lines_removed: Vec<Vec<Block>>,
    /// Blocks that fell, grouped per column (columns with no movement omitted),
    /// each group in bottom-up order, positions after the fall
    pub fallen_blocks: Vec<Vec<Block>>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.lines_removed.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines_removed.len()
    }
}

/// The falling-block engine
#[derive(Debug, Clone)]
pub struct Tektris {
    config: EngineConfig,
    grid: Grid<Block>,
    falling_shape: Option<Shape>,
    next_shape: Option<Shape>,
    score: u32,
    level: u32,
    rng: SimpleRng,
    next_block_id: u32,
    events: Vec<GameEvent>,
    game_over: bool,
}

impl Tektris {
    /// Create an engine with the given configuration and RNG seed
    pub fn new(config: EngineConfig, seed: u32) -> Self {
        Self {
            config,
            grid: Grid::new(config.columns, config.rows),
            falling_shape: None,
            next_shape: None,
            score: 0,
            level: 1,
            rng: SimpleRng::new(seed),
            next_block_id: 0,
            events: Vec::new(),
            game_over: false,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn falling_shape(&self) -> Option<&Shape> {
        self.falling_shape.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next_shape.as_ref()
    }

    /// Settled block at (column, row), if any
    pub fn block_at(&self, column: i32, row: i32) -> Option<&Block> {
        self.grid.get(column, row)
    }

    pub fn grid(&self) -> &Grid<Block> {
        &self.grid
    }

    /// True from `DidEnd` until the next `begin_game`
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Events emitted since the last drain, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn allocate_ids(&mut self) -> [BlockId; BLOCKS_PER_SHAPE] {
        std::array::from_fn(|_| {
            let id = BlockId(self.next_block_id);
            self.next_block_id = self.next_block_id.wrapping_add(1);
            id
        })
    }

    fn random_preview_shape(&mut self) -> Shape {
        let ids = self.allocate_ids();
        Shape::random(
            self.config.preview_column,
            self.config.preview_row,
            &mut self.rng,
            ids,
        )
    }

    /// Prepare the preview shape (if missing) and emit `DidBegin`.
    ///
    /// Does not spawn a falling shape; the host calls [`Tektris::new_shape`].
    pub fn begin_game(&mut self) {
        if self.next_shape.is_none() {
            self.next_shape = Some(self.random_preview_shape());
        }
        self.game_over = false;
        self.emit(GameEvent::DidBegin);
    }

    /// Promote the preview shape to the falling shape and generate a new preview.
    ///
    /// If the promoted shape cannot be legally placed at the starting position it
    /// goes back to the preview slot, the game ends and `(None, None)` is returned.
    pub fn new_shape(&mut self) -> (Option<&Shape>, Option<&Shape>) {
        self.falling_shape = self.next_shape.take();
        self.next_shape = Some(self.random_preview_shape());

        let (column, row) = (self.config.starting_column, self.config.starting_row);
        if let Some(shape) = self.falling_shape.as_mut() {
            shape.move_to(column, row);
        }

        if self.detect_illegal_placement() {
            if let Some(mut shape) = self.falling_shape.take() {
                shape.move_to(self.config.preview_column, self.config.preview_row);
                self.next_shape = Some(shape);
            }
            self.end_game();
            return (None, None);
        }

        (self.falling_shape.as_ref(), self.next_shape.as_ref())
    }

    /// True if any falling block is out of bounds or on a settled block
    pub fn detect_illegal_placement(&self) -> bool {
        let Some(shape) = self.falling_shape.as_ref() else {
            return false;
        };

        shape.blocks().iter().any(|block| {
            !self.grid.contains(block.column, block.row)
                || self.grid.is_occupied(block.column, block.row)
        })
    }

    /// Lower the falling shape one row, settling or ending the game as needed
    pub fn let_shape_fall(&mut self) {
        let Some(shape) = self.falling_shape.as_mut() else {
            return;
        };

        shape.lower_shape_by_one_row();
        if self.detect_illegal_placement() {
            if let Some(shape) = self.falling_shape.as_mut() {
                shape.raise_shape_by_one_row();
            }
            if self.detect_illegal_placement() {
                // The shape could not even hold its previous position.
                self.falling_shape = None;
                self.end_game();
            } else {
                self.settle_shape();
            }
        } else {
            self.emit(GameEvent::ShapeDidMove);
            if self.detect_touch() {
                self.settle_shape();
            }
        }
    }

    /// Move the falling shape to its lowest legal row. Settling happens on the next fall.
    pub fn drop_shape(&mut self) {
        if self.falling_shape.is_none() {
            return;
        }

        while !self.detect_illegal_placement() {
            if let Some(shape) = self.falling_shape.as_mut() {
                shape.lower_shape_by_one_row();
            }
        }
        if let Some(shape) = self.falling_shape.as_mut() {
            shape.raise_shape_by_one_row();
        }

        self.emit(GameEvent::ShapeDidDrop);
    }

    /// Rotate clockwise; an illegal result is undone without an event
    pub fn rotate_shape(&mut self) {
        self.try_transform(Shape::rotate_clockwise, Shape::rotate_counter_clockwise);
    }

    pub fn move_shape_left(&mut self) {
        self.try_transform(
            Shape::shift_left_by_one_column,
            Shape::shift_right_by_one_column,
        );
    }

    pub fn move_shape_right(&mut self) {
        self.try_transform(
            Shape::shift_right_by_one_column,
            Shape::shift_left_by_one_column,
        );
    }

    /// Apply `apply` to the falling shape, undoing it with `undo` if the result is illegal
    fn try_transform(&mut self, apply: fn(&mut Shape), undo: fn(&mut Shape)) -> bool {
        let Some(shape) = self.falling_shape.as_mut() else {
            return false;
        };

        apply(shape);
        if self.detect_illegal_placement() {
            if let Some(shape) = self.falling_shape.as_mut() {
                undo(shape);
            }
            return false;
        }

        self.emit(GameEvent::ShapeDidMove);
        true
    }

    /// Move the falling shape's blocks into the grid and emit `ShapeDidLand`
    pub fn settle_shape(&mut self) {
        let Some(shape) = self.falling_shape.take() else {
            return;
        };

        for block in shape.into_blocks() {
            let (column, row) = block.position();
            self.grid.set(column, row, Some(block));
        }

        self.emit(GameEvent::ShapeDidLand);
    }

    /// True if any bottom block sits on the last row or on a settled block
    pub fn detect_touch(&self) -> bool {
        let Some(shape) = self.falling_shape.as_ref() else {
            return false;
        };

        shape.bottom_blocks().iter().any(|block| {
            block.row == self.config.rows - 1 || self.grid.is_occupied(block.column, block.row + 1)
        })
    }

    /// Reset score and level and emit `DidEnd`. The grid is left for the host to clear.
    pub fn end_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.game_over = true;
        self.emit(GameEvent::DidEnd);
    }

    /// Clear every full row (row 0 excluded), score them, and let the blocks above fall.
    ///
    /// A block above the bottom-most cleared row falls by the number of cleared
    /// rows strictly below it, so disjoint clears compact correctly in one pass.
    /// Blocks below the bottom-most cleared row do not move.
    pub fn remove_completed_lines(&mut self) -> LineClear {
        let columns = self.config.columns;
        let rows = self.config.rows;

        // Bottom-most first.
        let mut cleared_rows: Vec<i32> = Vec::new();
        let mut lines_removed: Vec<Vec<Block>> = Vec::new();
        for row in (1..rows).rev() {
            if !self.grid.is_row_full(row) {
                continue;
            }
            let line: Vec<Block> = (0..columns)
                .filter_map(|column| self.grid.take(column, row))
                .collect();
            cleared_rows.push(row);
            lines_removed.push(line);
        }

        let Some(&bottom_cleared) = cleared_rows.first() else {
            return LineClear::default();
        };

        let points = lines_removed.len() as u32 * self.config.points_per_line * self.level;
        self.score += points;

        if self.score >= self.level * self.config.level_threshold {
            self.level += 1;
            self.emit(GameEvent::DidLevelUp);
        }

        let mut fallen_blocks: Vec<Vec<Block>> = Vec::new();
        for column in 0..columns {
            let mut fallen_in_column = Vec::new();

            for row in (0..bottom_cleared).rev() {
                let Some(mut block) = self.grid.take(column, row) else {
                    continue;
                };

                let distance = cleared_rows.iter().filter(|&&r| r > row).count() as i32;
                block.row = row + distance;
                fallen_in_column.push(block.clone());
                self.grid.set(column, block.row, Some(block));
            }

            if !fallen_in_column.is_empty() {
                fallen_blocks.push(fallen_in_column);
            }
        }

        LineClear {
            lines_removed,
            fallen_blocks,
        }
    }

    /// Empty the grid, returning the blocks row by row from top to bottom
    pub fn remove_all_blocks(&mut self) -> Vec<Vec<Block>> {
        let columns = self.config.columns;
        (0..self.config.rows)
            .map(|row| {
                (0..columns)
                    .filter_map(|column| self.grid.take(column, row))
                    .collect::<Vec<Block>>()
            })
            .collect()
    }

    /// Apply a host command
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_shape_left(),
            GameAction::MoveRight => self.move_shape_right(),
            GameAction::Rotate => self.rotate_shape(),
            GameAction::Fall => self.let_shape_fall(),
            GameAction::Drop => self.drop_shape(),
        }
    }
}

impl Default for Tektris {
    fn default() -> Self {
        Self::new(EngineConfig::default(), 1)
    }
}
