use crate::align::fill::fill_cell;
use crate::align::structs::{Cost, CostMatrix, CostModel, RowBounds};
use crate::structs::Sequence;

/// Fill the cells of the cost matrix that lie within the row bounds, returning the cost of the
/// terminal cell. If the terminal cell is outside of the bounds, the cost is infinite.
pub fn banded(
    seq_1: &Sequence,
    seq_2: &Sequence,
    cost_model: &CostModel,
    row_bounds: &RowBounds,
    matrix: &mut impl CostMatrix,
) -> Cost {
    let seq_1_length = matrix.seq_1_length();
    let seq_2_length = matrix.seq_2_length();

    debug_assert!(seq_1_length <= seq_1.length);
    debug_assert!(seq_2_length <= seq_2.length);
    debug_assert!(row_bounds.seq_1_length == seq_1_length);
    debug_assert!(row_bounds.seq_2_length == seq_2_length);

    for row_idx in 0..=seq_1_length {
        let Some(col_range) = row_bounds.row_range(row_idx) else {
            // every row below an empty row is empty as well
            break;
        };

        for col_idx in col_range {
            fill_cell(seq_1, seq_2, cost_model, matrix, row_idx, col_idx);
        }
    }

    matrix.get_cost(seq_1_length, seq_2_length)
}
