use super::{Cost, CostMatrix, TraceStep};

#[derive(Default, Clone)]
pub struct CostMatrixFlat {
    pub seq_1_length: usize,
    pub seq_2_length: usize,
    /// The cost cells as a flat vector.
    ///
    /// It's stored in the following pattern:
    /// ```text
    ///     [
    ///
    ///         c_(0, 0), c_(0, 1), ... c_(0, N),
    ///         c_(1, 0), c_(1, 1), ... c_(1, N),
    ///         ...
    ///         c_(M, 0), c_(M, 1), ... c_(M, N),
    ///
    ///     ]
    /// ```
    ///
    /// where:
    ///
    /// ```text
    ///     M:        <seq_1_length>
    ///     N:        <seq_2_length>
    ///     c_(i, j): the cost of aligning the first i residues
    ///               of seq_1 with the first j residues of seq_2
    /// ```
    ///
    pub cost_data: Vec<Cost>,
    /// The back-pointers, laid out the same way as the cost cells.
    pub step_data: Vec<Option<TraceStep>>,
}

impl CostMatrixFlat {
    pub fn new(seq_1_length: usize, seq_2_length: usize) -> Self {
        let length = (seq_1_length + 1) * (seq_2_length + 1);
        CostMatrixFlat {
            seq_1_length,
            seq_2_length,
            cost_data: vec![Cost::INFINITY; length],
            step_data: vec![None; length],
        }
    }

    #[inline]
    fn idx(&self, row_idx: usize, col_idx: usize) -> usize {
        debug_assert!(row_idx <= self.seq_1_length);
        debug_assert!(col_idx <= self.seq_2_length);
        row_idx * (self.seq_2_length + 1) + col_idx
    }
}

impl CostMatrix for CostMatrixFlat {
    fn seq_1_length(&self) -> usize {
        self.seq_1_length
    }

    fn seq_2_length(&self) -> usize {
        self.seq_2_length
    }

    #[inline]
    fn get_cost(&self, row_idx: usize, col_idx: usize) -> Cost {
        self.cost_data[self.idx(row_idx, col_idx)]
    }

    #[inline]
    fn set_cost(&mut self, row_idx: usize, col_idx: usize, value: Cost) {
        let idx = self.idx(row_idx, col_idx);
        self.cost_data[idx] = value;
    }

    #[inline]
    fn get_step(&self, row_idx: usize, col_idx: usize) -> Option<TraceStep> {
        self.step_data[self.idx(row_idx, col_idx)]
    }

    #[inline]
    fn set_step(&mut self, row_idx: usize, col_idx: usize, step: TraceStep) {
        let idx = self.idx(row_idx, col_idx);
        self.step_data[idx] = Some(step);
    }
}
