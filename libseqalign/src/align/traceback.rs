use crate::align::structs::{CostMatrix, Trace};

use anyhow::Result;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("no back-pointer at cell ({row_idx}, {col_idx}) during traceback")]
pub struct MissingBackPointerError {
    pub row_idx: usize,
    pub col_idx: usize,
}

/// Follow the back-pointers from the terminal cell to the origin, appending each step to `trace`.
///
/// The resulting trace is in origin to terminal order. This must only be called after the
/// terminal cell has been found to have a finite cost.
pub fn traceback(matrix: &impl CostMatrix, trace: &mut Trace) -> Result<()> {
    let mut row_idx = matrix.seq_1_length();
    let mut col_idx = matrix.seq_2_length();

    while (row_idx, col_idx) != (0, 0) {
        let step = matrix
            .get_step(row_idx, col_idx)
            .ok_or(MissingBackPointerError { row_idx, col_idx })?;

        trace.push(step);
        (row_idx, col_idx) = step.predecessor(row_idx, col_idx);
    }

    trace.reverse();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::structs::{Cost, CostMatrixFlat, TraceStep};
    use assert2::{assert, let_assert};

    #[test]
    fn test_traceback_reaches_origin() -> anyhow::Result<()> {
        // a 1 x 2 matrix: diagonal into (1, 1), then left into (1, 2)
        let mut matrix = CostMatrixFlat::new(1, 2);
        matrix.set_step(1, 2, TraceStep::Left);
        matrix.set_step(1, 1, TraceStep::Diagonal);

        let mut trace = Trace::new();
        traceback(&matrix, &mut trace)?;
        assert!(trace.steps == vec![TraceStep::Diagonal, TraceStep::Left]);
        Ok(())
    }

    #[test]
    fn test_traceback_final_step_on_boundary() -> anyhow::Result<()> {
        // the last step into the origin is a Top move along column 0
        let mut matrix = CostMatrixFlat::new(2, 1);
        matrix.set_step(2, 1, TraceStep::Diagonal);
        matrix.set_step(1, 0, TraceStep::Top);

        let mut trace = Trace::new();
        traceback(&matrix, &mut trace)?;
        assert!(trace.steps == vec![TraceStep::Top, TraceStep::Diagonal]);
        Ok(())
    }

    #[test]
    fn test_traceback_empty_matrix() -> anyhow::Result<()> {
        let mut matrix = CostMatrixFlat::new(0, 0);
        matrix.set_cost(0, 0, Cost::ZERO);

        let mut trace = Trace::new();
        traceback(&matrix, &mut trace)?;
        assert!(trace.is_empty());
        Ok(())
    }

    #[test]
    fn test_traceback_missing_back_pointer() {
        let matrix = CostMatrixFlat::new(2, 2);
        let mut trace = Trace::new();

        let_assert!(Err(err) = traceback(&matrix, &mut trace));
        let_assert!(Some(missing) = err.downcast_ref::<MissingBackPointerError>());
        assert!((missing.row_idx, missing.col_idx) == (2, 2));
    }
}
