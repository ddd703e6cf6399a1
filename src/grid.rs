use thiserror::Error;

use crate::{
    codec::MAX_LEVEL,
    constants::GRID,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cell ({column}, {row}) is outside the {w}x{h} chart", w = GRID.width, h = GRID.height)]
pub struct OutOfRange {
    pub column: usize,
    pub row: usize,
}

/// The single in-memory chart: a fixed 7x52 matrix of activity levels in
/// 0..=4. Writes addressed outside the chart are ignored; reads outside the
/// chart are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGrid {
    cells: Vec<Vec<u8>>,
}

impl LevelGrid {
    pub fn new() -> Self {
        Self {
            cells: vec![vec![0; GRID.width]; GRID.height],
        }
    }

    pub fn width(&self) -> usize {
        GRID.width
    }

    pub fn height(&self) -> usize {
        GRID.height
    }

    fn in_bounds(column: usize, row: usize) -> bool {
        column < GRID.width && row < GRID.height
    }

    pub fn set_level(&mut self, column: usize, row: usize, level: u8) {
        if !Self::in_bounds(column, row) {
            return;
        }
        self.cells[row][column] = level.min(MAX_LEVEL);
    }

    /// The one mutation primitive painting goes through. Saturates at the
    /// level bounds for any delta magnitude.
    pub fn adjust_level(&mut self, column: usize, row: usize, delta: i16) {
        if !Self::in_bounds(column, row) {
            return;
        }
        let current = self.cells[row][column] as i16;
        self.cells[row][column] = current.saturating_add(delta).clamp(0, MAX_LEVEL as i16) as u8;
    }

    pub fn get_level(&self, column: usize, row: usize) -> Result<u8, OutOfRange> {
        if !Self::in_bounds(column, row) {
            return Err(OutOfRange { column, row });
        }
        Ok(self.cells[row][column])
    }

    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(0);
        }
    }

    /// Rows top to bottom, for row-major rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Cells in persistence order: columns outer, rows inner, which walks
    /// day numbers 1..=364 ascending.
    pub fn cells_by_day(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        (0..GRID.width).flat_map(move |column| {
            (0..GRID.height).map(move |row| (column, row, self.cells[row][column]))
        })
    }
}

impl Default for LevelGrid {
    fn default() -> Self {
        Self::new()
    }
}
