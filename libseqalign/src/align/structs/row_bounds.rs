use std::fmt::{Debug, Formatter};
use std::ops::RangeInclusive;

/// The columns that are computed in each row of a cost matrix.
///
/// Row `r` covers the columns `left_row_bounds[r]..=right_row_bounds[r]`.
/// A row with `left > right` is empty.
#[derive(Clone, PartialEq, Eq)]
pub struct RowBounds {
    pub seq_1_length: usize,
    pub seq_2_length: usize,
    pub left_row_bounds: Vec<usize>,
    pub right_row_bounds: Vec<usize>,
    pub num_cells: usize,
}

impl RowBounds {
    /// Bounds covering the entire `(seq_1_length + 1) x (seq_2_length + 1)` matrix.
    pub fn full(seq_1_length: usize, seq_2_length: usize) -> Self {
        let num_rows = seq_1_length + 1;
        Self {
            seq_1_length,
            seq_2_length,
            left_row_bounds: vec![0; num_rows],
            right_row_bounds: vec![seq_2_length; num_rows],
            num_cells: num_rows * (seq_2_length + 1),
        }
    }

    /// Bounds covering the diagonal strip of cells whose row
    /// and column differ by no more than `radius`.
    pub fn band(seq_1_length: usize, seq_2_length: usize, radius: usize) -> Self {
        let num_rows = seq_1_length + 1;
        let mut left_row_bounds = vec![0; num_rows];
        let mut right_row_bounds = vec![0; num_rows];
        let mut num_cells = 0;

        for row_idx in 0..num_rows {
            let left = row_idx.saturating_sub(radius);
            let right = (row_idx + radius).min(seq_2_length);

            left_row_bounds[row_idx] = left;
            right_row_bounds[row_idx] = right;

            if left <= right {
                // +1 for subtraction across the interval
                num_cells += right - left + 1;
            }
        }

        Self {
            seq_1_length,
            seq_2_length,
            left_row_bounds,
            right_row_bounds,
            num_cells,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.left_row_bounds.len()
    }

    pub fn row_length(&self, row_idx: usize) -> usize {
        let (left, right) = (self.left_row_bounds[row_idx], self.right_row_bounds[row_idx]);
        if left > right {
            0
        } else {
            right - left + 1
        }
    }

    /// The columns of a row, or `None` if the row is empty.
    pub fn row_range(&self, row_idx: usize) -> Option<RangeInclusive<usize>> {
        match self.row_length(row_idx) {
            0 => None,
            _ => Some(self.left_row_bounds[row_idx]..=self.right_row_bounds[row_idx]),
        }
    }

    #[inline]
    pub fn contains(&self, row_idx: usize, col_idx: usize) -> bool {
        row_idx < self.num_rows()
            && self.left_row_bounds[row_idx] <= col_idx
            && col_idx <= self.right_row_bounds[row_idx]
    }

    /// Whether the cell that ends the alignment is inside the bounds.
    pub fn reaches_terminal(&self) -> bool {
        self.contains(self.seq_1_length, self.seq_2_length)
    }
}

impl Debug for RowBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "rows: 0-{}", self.seq_1_length)?;
        for row_idx in 0..self.num_rows() {
            writeln!(
                f,
                "{}: {}-{}",
                row_idx, self.left_row_bounds[row_idx], self.right_row_bounds[row_idx]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;

    #[test]
    fn test_full() {
        let bounds = RowBounds::full(4, 6);
        assert!(bounds.num_rows() == 5);
        assert!(bounds.num_cells == 35);
        assert!(bounds.row_range(0) == Some(0..=6));
        assert!(bounds.reaches_terminal());
    }

    #[test]
    fn test_band() {
        let bounds = RowBounds::band(6, 6, 3);
        assert!(bounds.left_row_bounds == vec![0, 0, 0, 0, 1, 2, 3]);
        assert!(bounds.right_row_bounds == vec![3, 4, 5, 6, 6, 6, 6]);
        assert!(bounds.num_cells == 4 + 5 + 6 + 7 + 6 + 5 + 4);
        assert!(bounds.contains(3, 0));
        assert!(!bounds.contains(4, 0));
        assert!(!bounds.contains(0, 4));
        assert!(bounds.reaches_terminal());
    }

    #[test]
    fn test_band_never_wider_than_seven() {
        let bounds = RowBounds::band(100, 100, 3);
        (0..bounds.num_rows()).for_each(|row_idx| assert!(bounds.row_length(row_idx) <= 7));
    }

    #[test]
    fn test_band_misses_terminal() {
        // seq_1 is 4 residues longer than seq_2
        let bounds = RowBounds::band(5, 1, 3);
        assert!(bounds.row_range(4) == Some(1..=1));
        assert!(bounds.row_range(5).is_none());
        assert!(bounds.row_length(5) == 0);
        assert!(!bounds.reaches_terminal());

        // seq_2 is 4 residues longer than seq_1
        let bounds = RowBounds::band(1, 5, 3);
        assert!(bounds.row_range(1) == Some(0..=4));
        assert!(!bounds.reaches_terminal());
    }
}
