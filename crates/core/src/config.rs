//! Engine configuration
//!
//! Board size, spawn/preview positions and scoring constants, fixed for the
//! lifetime of an engine. `Default` gives the standard 10x20 game.

use crate::types::{
    LEVEL_THRESHOLD, NUM_COLUMNS, NUM_ROWS, POINTS_PER_LINE, PREVIEW_COLUMN, PREVIEW_ROW,
    STARTING_COLUMN, STARTING_ROW,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub columns: i32,
    pub rows: i32,
    pub starting_column: i32,
    pub starting_row: i32,
    pub preview_column: i32,
    pub preview_row: i32,
    pub points_per_line: u32,
    pub level_threshold: u32,
}

impl EngineConfig {
    /// Same rules on a board of a different size.
    ///
    /// The spawn column is recentred (`columns / 2 - 1`, which is 4 on the
    /// standard board) and the preview sits two columns past the right edge.
    pub fn with_board(mut self, columns: i32, rows: i32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self.starting_column = (columns / 2 - 1).max(0);
        self.preview_column = columns + 2;
        self
    }

    pub fn with_scoring(mut self, points_per_line: u32, level_threshold: u32) -> Self {
        self.points_per_line = points_per_line;
        self.level_threshold = level_threshold;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            columns: NUM_COLUMNS,
            rows: NUM_ROWS,
            starting_column: STARTING_COLUMN,
            starting_row: STARTING_ROW,
            preview_column: PREVIEW_COLUMN,
            preview_row: PREVIEW_ROW,
            points_per_line: POINTS_PER_LINE,
            level_threshold: LEVEL_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = EngineConfig::default();
        assert_eq!((config.columns, config.rows), (10, 20));
        assert_eq!((config.starting_column, config.starting_row), (4, 0));
        assert_eq!((config.preview_column, config.preview_row), (12, 1));
        assert_eq!(config.points_per_line, 10);
        assert_eq!(config.level_threshold, 500);
    }

    #[test]
    fn test_with_board() {
        let config = EngineConfig::default().with_board(6, 8);
        assert_eq!((config.columns, config.rows), (6, 8));
        assert_eq!(config.starting_column, 2);
        assert_eq!(config.preview_column, 8);

        let standard = EngineConfig::default().with_board(10, 20);
        assert_eq!(standard, EngineConfig::default());
    }

    #[test]
    fn test_with_scoring_keeps_board() {
        let config = EngineConfig::default().with_scoring(25, 40);
        assert_eq!((config.points_per_line, config.level_threshold), (25, 40));
        assert_eq!((config.columns, config.rows), (10, 20));
        assert_eq!(config.starting_column, 4);
    }
}
