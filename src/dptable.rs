//! Banded score matrix.
//!
//! Only the cells `(i, j)` with `|i - j| <= band_width / 2` are stored. Each column `j`
//! owns `band_width` consecutive slots, the slot of row `i` being `i + radius - j`.
//! A reverse matrix is filled over the reversed strings, so its own storage coordinate
//! `(i, j)` corresponds to `(rows - 1 - i, cols - 1 - j)` of the original strings.
//! Lookups by the original coordinate always go through [`DPTable::try_get`].

/// The direction a [`DPTable`] was filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Forward,
    Reverse,
}

#[derive(Debug, Clone)]
pub struct DPTable {
    // Total memory, `cols * band_width` cells.
    mem: Vec<i32>,
    // Length of the row (truth) string.
    rows: usize,
    // Length of the column (predicted) string.
    cols: usize,
    radius: usize,
    orientation: Orientation,
}

impl DPTable {
    pub fn new(rows: usize, cols: usize, band_width: usize, orientation: Orientation) -> Self {
        Self {
            mem: vec![0; cols * band_width],
            rows,
            cols,
            radius: band_width / 2,
            orientation,
        }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn radius(&self) -> usize {
        self.radius
    }
    pub fn band_width(&self) -> usize {
        2 * self.radius + 1
    }
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Return true if the storage cell `(i, j)` is inside the matrix and inside the band.
    pub fn in_band(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols && j <= i + self.radius && i <= j + self.radius
    }
    fn location(&self, i: usize, j: usize) -> usize {
        j * self.band_width() + i + self.radius - j
    }
    // Storage coordinate. Used while filling the table.
    pub(crate) fn get_raw(&self, i: usize, j: usize) -> Option<i32> {
        if self.in_band(i, j) {
            self.mem.get(self.location(i, j)).copied()
        } else {
            None
        }
    }
    pub(crate) fn set_raw(&mut self, i: usize, j: usize, score: i32) {
        if self.in_band(i, j) {
            let loc = self.location(i, j);
            self.mem[loc] = score;
        }
    }
    // Convert the original coordinate into the storage coordinate.
    fn to_storage(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        match self.orientation {
            Orientation::Forward => Some((i, j)),
            Orientation::Reverse => {
                let i = self.rows.checked_sub(i + 1)?;
                let j = self.cols.checked_sub(j + 1)?;
                Some((i, j))
            }
        }
    }
    /// The score at `(i, j)` of the original coordinate, or `None` if the cell is out of the band.
    /// For a forward matrix it is the best score of aligning `xs[..=i]` and `ys[..=j]`,
    /// for a reverse matrix it is the best score of aligning `xs[i..]` and `ys[j..]`.
    pub fn try_get(&self, i: usize, j: usize) -> Option<i32> {
        let (i, j) = self.to_storage(i, j)?;
        self.get_raw(i, j)
    }
    /// The score of the whole alignment, regardless of the orientation.
    /// Both orientations keep it at the last storage cell.
    pub fn full_score(&self) -> Option<i32> {
        let (i, j) = (self.rows.checked_sub(1)?, self.cols.checked_sub(1)?);
        self.get_raw(i, j)
    }
}
