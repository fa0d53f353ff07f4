//! GameView: maps engine state into a character frame.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (each board cell is two characters wide):
//!
//! ```text
//! | . . . . . . . . . .|  Next:
//! | . . . .[][][] . . .|  [][][]
//! | . . . . .[] . . . .|    []
//! ...
//! +--------------------+
//! ```

use crate::core::{Block, Tektris};
use crate::frame::{Frame, FrameCell};

/// Width of the preview box in cells
const PREVIEW_CELLS: i32 = 4;

/// Side panel column offset from the right border
const PANEL_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render the board, falling shape, preview and status into a new frame.
    pub fn render(&self, game: &Tektris) -> Frame {
        let columns = game.config().columns.max(0) as u16;
        let rows = game.config().rows.max(0) as u16;
        let board_w = columns * self.cell_w;
        let panel_x = board_w + 2 + PANEL_GAP;
        let panel_w = 24;
        let mut frame = Frame::new(panel_x + panel_w, rows + 1);

        for y in 0..rows {
            frame.put_str(0, y, "|");
            frame.put_str(board_w + 1, y, "|");
            for x in 0..columns {
                frame.put_str(1 + x * self.cell_w, y, " .");
            }
        }
        let bottom = format!("+{}+", "-".repeat(board_w as usize));
        frame.put_str(0, rows, &bottom);

        for (_, _, block) in game.grid().iter() {
            self.draw_block(&mut frame, 1, 0, block);
        }
        if let Some(shape) = game.falling_shape() {
            for block in shape.blocks() {
                if game.grid().contains(block.column, block.row) {
                    self.draw_block(&mut frame, 1, 0, block);
                }
            }
        }

        frame.put_str(panel_x, 0, "Next:");
        if let Some(shape) = game.next_shape() {
            let (origin_column, origin_row) = shape.origin();
            for block in shape.blocks() {
                let dc = block.column - origin_column + 1;
                let dr = block.row - origin_row;
                if (0..PREVIEW_CELLS).contains(&dc) && (0..PREVIEW_CELLS).contains(&dr) {
                    let x = panel_x + dc as u16 * self.cell_w;
                    let y = 1 + dr as u16;
                    self.put_block(&mut frame, x, y, block);
                }
            }
        }

        frame.put_str(panel_x, 6, &format!("Score: {}", game.score()));
        frame.put_str(panel_x, 7, &format!("Level: {}", game.level()));
        if game.is_game_over() {
            frame.put_str(panel_x, 9, "GAME OVER");
            frame.put_str(panel_x, 10, "r: restart  q: quit");
        }

        frame
    }

    fn draw_block(&self, frame: &mut Frame, offset_x: u16, offset_y: u16, block: &Block) {
        if block.column < 0 || block.row < 0 {
            return;
        }
        let x = offset_x + block.column as u16 * self.cell_w;
        let y = offset_y + block.row as u16;
        self.put_block(frame, x, y, block);
    }

    fn put_block(&self, frame: &mut Frame, x: u16, y: u16, block: &Block) {
        let color = Some(block.color);
        frame.set(x, y, FrameCell { ch: '[', color });
        frame.set(x + 1, y, FrameCell { ch: ']', color });
    }
}

/// Render with the default view and return the frame as text lines.
pub fn render_lines(game: &Tektris) -> Vec<String> {
    GameView::default().render(game).to_lines()
}
