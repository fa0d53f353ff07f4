//! Character frame with optional block colors.

use crate::types::BlockColor;

/// A single terminal cell. `color` is set for cells that draw a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub ch: char,
    pub color: Option<BlockColor>,
}

impl Default for FrameCell {
    fn default() -> Self {
        Self { ch: ' ', color: None }
    }
}

/// 2D grid of character cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<FrameCell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![FrameCell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<FrameCell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: FrameCell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        for (dx, ch) in s.chars().enumerate() {
            let Ok(dx) = u16::try_from(dx) else {
                break;
            };
            self.set(x.saturating_add(dx), y, FrameCell { ch, color: None });
        }
    }

    /// Row of cells, if `y` is inside the frame
    pub fn row(&self, y: u16) -> Option<&[FrameCell]> {
        let start = self.idx(0, y)?;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Plain text of every row, trailing spaces trimmed
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .filter_map(|y| self.row(y))
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.ch).collect();
                line.trim_end().to_string()
            })
            .collect()
    }
}
