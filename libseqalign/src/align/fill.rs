use crate::align::structs::{Cost, CostMatrix, CostModel, TraceStep};
use crate::structs::Sequence;

/// Pick the cheapest of the three moves into a cell.
///
/// Ties go to `Left`, then `Top`, then `Diagonal`.
#[inline]
pub fn select_step(left: Cost, top: Cost, diagonal: Cost) -> (Cost, TraceStep) {
    let mut best = (left, TraceStep::Left);

    if top < best.0 {
        best = (top, TraceStep::Top);
    }

    if diagonal < best.0 {
        best = (diagonal, TraceStep::Diagonal);
    }

    best
}

/// Compute the cost and back-pointer of a single cell from its (already computed) neighbors.
///
/// Neighbors that were never computed read as infinite.
#[inline]
pub fn fill_cell(
    seq_1: &Sequence,
    seq_2: &Sequence,
    cost_model: &CostModel,
    matrix: &mut impl CostMatrix,
    row_idx: usize,
    col_idx: usize,
) {
    let (cost, step) = match (row_idx, col_idx) {
        (0, 0) => {
            matrix.set_cost(0, 0, Cost::ZERO);
            return;
        }
        // the empty prefix of seq_1 is only reachable by consuming seq_2
        (0, _) => (
            matrix.get_cost(0, col_idx - 1) + cost_model.indel_cost,
            TraceStep::Left,
        ),
        // the empty prefix of seq_2 is only reachable by consuming seq_1
        (_, 0) => (
            matrix.get_cost(row_idx - 1, 0) + cost_model.indel_cost,
            TraceStep::Top,
        ),
        _ => {
            let substitution = cost_model.substitution(
                seq_1.utf8_bytes[row_idx],
                seq_2.utf8_bytes[col_idx],
            );

            select_step(
                matrix.get_cost(row_idx, col_idx - 1) + cost_model.indel_cost,
                matrix.get_cost(row_idx - 1, col_idx) + cost_model.indel_cost,
                matrix.get_cost(row_idx - 1, col_idx - 1) + substitution,
            )
        }
    };

    matrix.set_cost(row_idx, col_idx, cost);
    if cost.is_finite() {
        matrix.set_step(row_idx, col_idx, step);
    }
}
