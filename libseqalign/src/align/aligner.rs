use anyhow::Result;
use log::{debug, log_enabled, trace, Level};

use crate::align::structs::{
    AlignMode, Alignment, AlignmentBuilder, Cost, CostMatrix, CostMatrixBanded, CostMatrixFlat,
    CostModel, RowBounds, Trace,
};
use crate::align::{banded, traceback, unrestricted};
use crate::structs::Sequence;

/// Align the first `max_characters_to_align` residues of two sequences.
///
/// In banded mode, if the sequences differ in length by more than the band
/// radius, the returned alignment has an infinite cost.
pub fn align(
    seq_1: &Sequence,
    seq_2: &Sequence,
    mode: AlignMode,
    max_characters_to_align: usize,
) -> Result<Alignment> {
    align_with_cost_model(
        &CostModel::default(),
        seq_1,
        seq_2,
        mode,
        max_characters_to_align,
    )
}

fn align_with_cost_model(
    cost_model: &CostModel,
    seq_1: &Sequence,
    seq_2: &Sequence,
    mode: AlignMode,
    max_characters_to_align: usize,
) -> Result<Alignment> {
    let seq_1_length = seq_1.length.min(max_characters_to_align);
    let seq_2_length = seq_2.length.min(max_characters_to_align);

    let mut trace = Trace::new();

    let (cost, cells) = match mode {
        AlignMode::Unrestricted => {
            let mut matrix = CostMatrixFlat::new(seq_1_length, seq_2_length);
            let cost = unrestricted(seq_1, seq_2, cost_model, &mut matrix);
            trace_if_reachable(&matrix, cost, mode, &mut trace)?;
            (cost, RowBounds::full(seq_1_length, seq_2_length).num_cells)
        }
        AlignMode::Banded => {
            let bounds = RowBounds::band(seq_1_length, seq_2_length, cost_model.band_radius);
            if !bounds.reaches_terminal() {
                debug!(
                    "lengths {seq_1_length} and {seq_2_length} differ by more than the band radius"
                );
            }
            let mut matrix = CostMatrixBanded::new(&bounds);
            let cost = banded(seq_1, seq_2, cost_model, &bounds, &mut matrix);
            trace_if_reachable(&matrix, cost, mode, &mut trace)?;
            (cost, bounds.num_cells)
        }
    };

    AlignmentBuilder::new(mode)
        .with_cost(cost)
        .with_trace(&trace)
        .with_sequences(seq_1, seq_2)
        .with_cells(cells)
        .build()
}

fn trace_if_reachable(
    matrix: &impl CostMatrix,
    cost: Cost,
    mode: AlignMode,
    trace: &mut Trace,
) -> Result<()> {
    if log_enabled!(Level::Trace) {
        let mut out: Vec<u8> = vec![];
        matrix.dump(&mut out)?;
        trace!("{mode} cost matrix:\n{}", String::from_utf8_lossy(&out));
    }

    if cost.is_finite() {
        traceback(matrix, trace)?;
    }
    Ok(())
}

/// Runs alignments and keeps a count of how many it has run.
///
/// The count is only used to label diagnostic output.
#[derive(Clone, Debug, Default)]
pub struct Aligner {
    cost_model: CostModel,
    invocation_count: usize,
}

impl Aligner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invocation_count(&self) -> usize {
        self.invocation_count
    }

    pub fn reset(&mut self) {
        self.invocation_count = 0;
    }

    pub fn align(
        &mut self,
        seq_1: &Sequence,
        seq_2: &Sequence,
        mode: AlignMode,
        max_characters_to_align: usize,
    ) -> Result<Alignment> {
        self.invocation_count += 1;

        let alignment = align_with_cost_model(
            &self.cost_model,
            seq_1,
            seq_2,
            mode,
            max_characters_to_align,
        )?;

        debug!("{}: {}", self.invocation_count, alignment.aligned_1);
        debug!("{}: {}", self.invocation_count, alignment.aligned_2);

        Ok(alignment)
    }
}
