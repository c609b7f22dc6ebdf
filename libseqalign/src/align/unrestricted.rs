use crate::align::fill::fill_cell;
use crate::align::structs::{Cost, CostMatrix, CostModel};
use crate::structs::Sequence;

/// Fill every cell of the cost matrix, returning the cost of the terminal cell.
///
/// The matrix dimensions determine how many residues of each sequence are aligned.
pub fn unrestricted(
    seq_1: &Sequence,
    seq_2: &Sequence,
    cost_model: &CostModel,
    matrix: &mut impl CostMatrix,
) -> Cost {
    let seq_1_length = matrix.seq_1_length();
    let seq_2_length = matrix.seq_2_length();

    debug_assert!(seq_1_length <= seq_1.length);
    debug_assert!(seq_2_length <= seq_2.length);

    for row_idx in 0..=seq_1_length {
        for col_idx in 0..=seq_2_length {
            fill_cell(seq_1, seq_2, cost_model, matrix, row_idx, col_idx);
        }
    }

    matrix.get_cost(seq_1_length, seq_2_length)
}
