use super::{Cost, CostMatrix, RowBounds, TraceStep};

/// A cost matrix that only stores the cells inside a set of row bounds.
///
/// Reading a cell outside of the bounds yields `Cost::INFINITY` and no back-pointer.
#[derive(Clone)]
pub struct CostMatrixBanded {
    pub seq_1_length: usize,
    pub seq_2_length: usize,
    /// These point to the start of each "row block" in the data vectors. They are
    /// absolute in the sense that they are not relative to the logical matrix space.
    pub block_offsets: Vec<usize>,
    /// These indicate where a row "starts" in the logical matrix coordinate space.
    pub row_start_offsets: Vec<usize>,
    /// These indicate where a row "ends" in the logical matrix coordinate space.
    pub row_end_offsets: Vec<usize>,
    pub cost_data: Vec<Cost>,
    pub step_data: Vec<Option<TraceStep>>,
}

impl CostMatrixBanded {
    pub fn new(row_bounds: &RowBounds) -> Self {
        let num_rows = row_bounds.num_rows();

        // +1 so that block_offsets[row + 1] is always the end of a row block
        let mut block_offsets = vec![0; num_rows + 1];

        for row_idx in 0..num_rows {
            block_offsets[row_idx + 1] = block_offsets[row_idx] + row_bounds.row_length(row_idx);
        }

        let length = block_offsets[num_rows];

        CostMatrixBanded {
            seq_1_length: row_bounds.seq_1_length,
            seq_2_length: row_bounds.seq_2_length,
            block_offsets,
            row_start_offsets: row_bounds.left_row_bounds.clone(),
            row_end_offsets: row_bounds.right_row_bounds.clone(),
            cost_data: vec![Cost::INFINITY; length],
            step_data: vec![None; length],
        }
    }

    #[inline]
    fn idx(&self, row_idx: usize, col_idx: usize) -> Option<usize> {
        debug_assert!(row_idx <= self.seq_1_length);
        debug_assert!(col_idx <= self.seq_2_length);

        let row_start = self.row_start_offsets[row_idx];
        let row_end = self.row_end_offsets[row_idx];

        if col_idx < row_start || col_idx > row_end {
            None
        } else {
            Some(self.block_offsets[row_idx] + (col_idx - row_start))
        }
    }
}

impl CostMatrix for CostMatrixBanded {
    fn seq_1_length(&self) -> usize {
        self.seq_1_length
    }

    fn seq_2_length(&self) -> usize {
        self.seq_2_length
    }

    #[inline]
    fn get_cost(&self, row_idx: usize, col_idx: usize) -> Cost {
        match self.idx(row_idx, col_idx) {
            Some(idx) => self.cost_data[idx],
            None => Cost::INFINITY,
        }
    }

    #[inline]
    fn set_cost(&mut self, row_idx: usize, col_idx: usize, value: Cost) {
        match self.idx(row_idx, col_idx) {
            Some(idx) => self.cost_data[idx] = value,
            None => debug_assert!(false, "set_cost outside of band: ({row_idx}, {col_idx})"),
        }
    }

    #[inline]
    fn get_step(&self, row_idx: usize, col_idx: usize) -> Option<TraceStep> {
        self.idx(row_idx, col_idx)
            .and_then(|idx| self.step_data[idx])
    }

    #[inline]
    fn set_step(&mut self, row_idx: usize, col_idx: usize, step: TraceStep) {
        match self.idx(row_idx, col_idx) {
            Some(idx) => self.step_data[idx] = Some(step),
            None => debug_assert!(false, "set_step outside of band: ({row_idx}, {col_idx})"),
        }
    }
}
