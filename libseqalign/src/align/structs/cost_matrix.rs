use std::io::Write;

use anyhow::Result;

use super::{Cost, TraceStep};

/// A cost table paired with a back-pointer table.
///
/// Row `r` corresponds to the first `r` residues of the first sequence and
/// column `c` to the first `c` residues of the second sequence, so the origin
/// cell `(0, 0)` is the empty alignment.
pub trait CostMatrix {
    fn seq_1_length(&self) -> usize;
    fn seq_2_length(&self) -> usize;
    fn get_cost(&self, row_idx: usize, col_idx: usize) -> Cost;
    fn set_cost(&mut self, row_idx: usize, col_idx: usize, value: Cost);
    fn get_step(&self, row_idx: usize, col_idx: usize) -> Option<TraceStep>;
    fn set_step(&mut self, row_idx: usize, col_idx: usize, step: TraceStep);
    fn dump(&self, out: &mut impl Write) -> Result<()> {
        let row_idx_width = self.seq_1_length().to_string().len();
        let column_width = 6;

        // write the column indices
        write!(out, "{}", " ".repeat(row_idx_width + 1))?;
        for col_idx in 0..=self.seq_2_length() {
            write!(out, "{:>w$} ", col_idx, w = column_width)?;
        }
        writeln!(out)?;

        for row_idx in 0..=self.seq_1_length() {
            write!(out, "{:w$} ", row_idx, w = row_idx_width)?;
            for col_idx in 0..=self.seq_2_length() {
                let step = match self.get_step(row_idx, col_idx) {
                    Some(step) => step.symbol(),
                    None => ' ',
                };
                let cost = self.get_cost(row_idx, col_idx).to_string();
                write!(out, "{:>w$}{} ", cost, step, w = column_width - 1)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::structs::{CostMatrixBanded, CostMatrixFlat, RowBounds};
    use assert2::assert;

    #[test]
    fn test_cost_matrix_flat() {
        let mut costs = [[Cost::INFINITY; 6]; 6];

        let mut matrix = CostMatrixFlat::new(5, 5);

        (0..=5).for_each(|row| {
            (0..=5).for_each(|col| {
                costs[row][col] = Cost::new((row * 10 + col) as i64);
                matrix.set_cost(row, col, costs[row][col]);
                matrix.set_step(row, col, TraceStep::Top);
            });
        });

        (0..=5).for_each(|row| {
            (0..=5).for_each(|col| {
                assert!(matrix.get_cost(row, col) == costs[row][col]);
                assert!(matrix.get_step(row, col) == Some(TraceStep::Top));
            });
        });
    }

    #[test]
    fn test_cost_matrix_banded() {
        let mut costs = [[Cost::INFINITY; 6]; 6];

        let bounds = RowBounds::band(5, 5, 2);
        let mut matrix = CostMatrixBanded::new(&bounds);

        (0..=5).for_each(|row| {
            if let Some(range) = bounds.row_range(row) {
                range.for_each(|col| {
                    costs[row][col] = Cost::new((row * 10 + col) as i64);
                    matrix.set_cost(row, col, costs[row][col]);
                    matrix.set_step(row, col, TraceStep::Diagonal);
                });
            }
        });

        (0..=5).for_each(|row| {
            (0..=5).for_each(|col| {
                assert!(matrix.get_cost(row, col) == costs[row][col]);
                let expected_step = bounds.contains(row, col).then_some(TraceStep::Diagonal);
                assert!(matrix.get_step(row, col) == expected_step);
            });
        });
    }

    #[test]
    fn test_dump() -> anyhow::Result<()> {
        let mut matrix = CostMatrixFlat::new(1, 1);
        matrix.set_cost(0, 0, Cost::ZERO);
        matrix.set_cost(0, 1, Cost::new(5));
        matrix.set_step(0, 1, TraceStep::Left);

        let mut out: Vec<u8> = vec![];
        matrix.dump(&mut out)?;
        let dump = String::from_utf8(out)?;
        let lines: Vec<&str> = dump.lines().collect();

        assert!(lines.len() == 3);
        assert!(lines[1] == "0     0      5L ");
        assert!(lines[2] == "1   inf    inf  ");
        Ok(())
    }
}
