//! Grid module - fixed-size 2D container
//!
//! A grid maps (column, row) to an optional value. Storage is a flat vector in
//! row-major order (`row * columns + column`) for cache locality.
//! Coordinates: column ranges `0..columns` (left to right), row ranges `0..rows`
//! (top to bottom).
//!
//! Out-of-range coordinates are never addressable: `get` returns `None` and
//! `set` refuses the write.

/// Fixed-size grid of optional cells
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    columns: i32,
    rows: i32,
    /// Flat array of cells, row-major order
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// Create a new empty grid. Negative dimensions are treated as zero.
    pub fn new(columns: i32, rows: i32) -> Self {
        let columns = columns.max(0);
        let rows = rows.max(0);
        let mut cells = Vec::with_capacity((columns * rows) as usize);
        cells.resize_with((columns * rows) as usize, || None);
        Self {
            columns,
            rows,
            cells,
        }
    }

    /// Calculate flat index from (column, row) coordinates
    #[inline(always)]
    fn index(&self, column: i32, row: i32) -> Option<usize> {
        if !self.contains(column, row) {
            return None;
        }
        Some((row as usize) * (self.columns as usize) + (column as usize))
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Check if a coordinate lies inside the grid
    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= 0 && column < self.columns && row >= 0 && row < self.rows
    }

    /// Get the value at (column, row).
    /// Returns None if the cell is empty or out of bounds.
    pub fn get(&self, column: i32, row: i32) -> Option<&T> {
        self.index(column, row).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Check if a cell is inside the grid and filled
    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        self.get(column, row).is_some()
    }

    /// Set the cell at (column, row), dropping any previous value.
    /// Returns false if out of bounds.
    pub fn set(&mut self, column: i32, row: i32, value: Option<T>) -> bool {
        match self.index(column, row) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Move the value out of (column, row), leaving the cell empty
    pub fn take(&mut self, column: i32, row: i32) -> Option<T> {
        let idx = self.index(column, row)?;
        self.cells[idx].take()
    }

    /// Check if every cell of a row is filled
    pub fn is_row_full(&self, row: i32) -> bool {
        if row < 0 || row >= self.rows {
            return false;
        }
        let width = self.columns as usize;
        let start = row as usize * width;
        self.cells[start..start + width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Number of filled cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Iterate over filled cells as `(column, row, value)`, row by row
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> + '_ {
        let columns = self.columns as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.as_ref()
                .map(|value| ((idx % columns) as i32, (idx / columns) as i32, value))
        })
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
