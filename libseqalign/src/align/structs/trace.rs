use crate::structs::Sequence;

pub const GAP: u8 = b'-';

/// A single move through the cost matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceStep {
    /// Consume one residue of the second sequence only (gap in the first).
    Left,
    /// Consume one residue of the first sequence only (gap in the second).
    Top,
    /// Consume one residue of each sequence.
    Diagonal,
}

impl TraceStep {
    /// The cell this step was taken from, given the cell it arrives at.
    #[inline]
    pub fn predecessor(&self, row: usize, col: usize) -> (usize, usize) {
        match self {
            TraceStep::Left => (row, col - 1),
            TraceStep::Top => (row - 1, col),
            TraceStep::Diagonal => (row - 1, col - 1),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            TraceStep::Left => 'L',
            TraceStep::Top => 'T',
            TraceStep::Diagonal => 'D',
        }
    }
}

/// The sequence of steps that leads from the origin cell to the terminal cell.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn reverse(&mut self) {
        self.steps.reverse();
    }

    /// Render the trace as a pair of gapped strings, one for each sequence.
    pub fn aligned_strings(&self, seq_1: &Sequence, seq_2: &Sequence) -> (String, String) {
        let mut aligned_1: Vec<u8> = Vec::with_capacity(self.len());
        let mut aligned_2: Vec<u8> = Vec::with_capacity(self.len());

        // the sequence bytes are padded at index 0, so
        // incrementing before reading lands on the residue
        let mut seq_1_idx = 0;
        let mut seq_2_idx = 0;

        for step in &self.steps {
            match step {
                TraceStep::Diagonal => {
                    seq_1_idx += 1;
                    seq_2_idx += 1;
                    aligned_1.push(seq_1.utf8_bytes[seq_1_idx]);
                    aligned_2.push(seq_2.utf8_bytes[seq_2_idx]);
                }
                TraceStep::Top => {
                    seq_1_idx += 1;
                    aligned_1.push(seq_1.utf8_bytes[seq_1_idx]);
                    aligned_2.push(GAP);
                }
                TraceStep::Left => {
                    seq_2_idx += 1;
                    aligned_1.push(GAP);
                    aligned_2.push(seq_2.utf8_bytes[seq_2_idx]);
                }
            }
        }

        // residues are validated as ASCII when a Sequence is built
        (
            String::from_utf8_lossy(&aligned_1).into_owned(),
            String::from_utf8_lossy(&aligned_2).into_owned(),
        )
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            write!(f, "{}", step.symbol())?;
        }
        Ok(())
    }
}
