//! TerminalRenderer: flushes a [`Frame`] to a real terminal.
//!
//! Rows that did not change since the previous frame are skipped.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::frame::{Frame, FrameCell};
use crate::types::BlockColor;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, frame: Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), &frame, &mut self.buf)?;
        self.flush_buf()?;
        self.last = Some(frame);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the rows of `next` that differ from `prev` into `out`.
///
/// With no previous frame, or one of a different size, the screen is cleared
/// and every row is written.
pub fn encode_frame_into(prev: Option<&Frame>, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    for y in 0..next.height() {
        let Some(row) = next.row(y) else {
            continue;
        };
        if prev.and_then(|p| p.row(y)) == Some(row) {
            continue;
        }

        out.queue(cursor::MoveTo(0, y))?;
        let mut current: Option<Option<BlockColor>> = None;
        for cell in row {
            if current != Some(cell.color) {
                apply_color_into(out, cell)?;
                current = Some(cell.color);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

fn apply_color_into(out: &mut Vec<u8>, cell: &FrameCell) -> Result<()> {
    match cell.color {
        Some(color) => {
            out.queue(SetForegroundColor(block_color(color)))?;
        }
        None => {
            out.queue(ResetColor)?;
        }
    }
    Ok(())
}

/// Terminal color used for a block color
pub fn block_color(color: BlockColor) -> Color {
    match color {
        BlockColor::Blue => Color::Blue,
        BlockColor::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        BlockColor::Purple => Color::Magenta,
        BlockColor::Red => Color::Red,
        BlockColor::Teal => Color::Cyan,
        BlockColor::Yellow => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_frame_writes_no_rows() {
        let mut frame = Frame::new(4, 3);
        frame.put_str(0, 1, "abcd");

        let mut full = Vec::new();
        encode_frame_into(None, &frame, &mut full).unwrap();
        let mut same = Vec::new();
        encode_frame_into(Some(&frame), &frame, &mut same).unwrap();

        assert!(String::from_utf8_lossy(&full).contains("abcd"));
        assert!(!String::from_utf8_lossy(&same).contains("abcd"));
        assert!(same.len() < full.len());
    }

    #[test]
    fn test_only_changed_row_is_written() {
        let mut prev = Frame::new(4, 2);
        prev.put_str(0, 0, "keep");
        let mut next = prev.clone();
        next.put_str(0, 1, "new!");

        let mut out = Vec::new();
        encode_frame_into(Some(&prev), &next, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("new!"));
        assert!(!text.contains("keep"));
    }

    #[test]
    fn test_block_colors_are_distinct() {
        let colors: Vec<Color> = BlockColor::ALL.iter().map(|&c| block_color(c)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
