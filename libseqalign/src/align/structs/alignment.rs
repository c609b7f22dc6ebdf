use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::cmp::min;

use crate::output::output_tabular::Field;
use crate::structs::Sequence;

use super::{AlignMode, Cost, Trace, GAP};

/// The number of leading alignment columns that are reported.
pub const DISPLAY_LENGTH: usize = 100;

/// The string reported in place of both aligned sequences when no alignment was found.
pub const NO_ALIGNMENT: &str = "No Alignment Possible";

const UTF8_PIPE: u8 = b'|';
const UTF8_SPACE: u8 = b' ';

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Alignment {
    /// The name of the first sequence
    pub seq_1_name: String,
    /// The name of the second sequence
    pub seq_2_name: String,
    /// The search mode that produced the alignment
    pub mode: AlignMode,
    /// The total cost of the alignment, infinite if none was found
    pub cost: Cost,
    /// The first sequence with gaps inserted, truncated to the display length
    pub aligned_1: String,
    /// The second sequence with gaps inserted, truncated to the display length
    pub aligned_2: String,
    /// The number of columns in the full alignment (before truncation)
    pub length: usize,
    /// The number of dynamic programming cells that were computed
    pub cells: usize,
}

#[derive(Default)]
pub struct AlignmentBuilder<'a> {
    mode: AlignMode,
    cost: Option<Cost>,
    trace: Option<&'a Trace>,
    seq_1: Option<&'a Sequence>,
    seq_2: Option<&'a Sequence>,
    cells: usize,
}

impl<'a> AlignmentBuilder<'a> {
    pub fn new(mode: AlignMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_trace(mut self, trace: &'a Trace) -> Self {
        self.trace = Some(trace);
        self
    }

    pub fn with_sequences(mut self, seq_1: &'a Sequence, seq_2: &'a Sequence) -> Self {
        self.seq_1 = Some(seq_1);
        self.seq_2 = Some(seq_2);
        self
    }

    pub fn with_cells(mut self, cells: usize) -> Self {
        self.cells = cells;
        self
    }

    pub fn build(self) -> anyhow::Result<Alignment> {
        let cost = self.cost.context("no cost supplied to AlignmentBuilder")?;
        let seq_1 = self.seq_1.context("no sequences supplied to AlignmentBuilder")?;
        let seq_2 = self.seq_2.context("no sequences supplied to AlignmentBuilder")?;

        if cost.is_infinite() {
            return Ok(Alignment {
                seq_1_name: seq_1.name.clone(),
                seq_2_name: seq_2.name.clone(),
                mode: self.mode,
                cost,
                aligned_1: NO_ALIGNMENT.to_string(),
                aligned_2: NO_ALIGNMENT.to_string(),
                length: 0,
                cells: self.cells,
            });
        }

        let trace = self.trace.context("no trace supplied to AlignmentBuilder")?;
        let (mut aligned_1, mut aligned_2) = trace.aligned_strings(seq_1, seq_2);

        // the aligned strings are pure ASCII, so byte truncation is safe
        aligned_1.truncate(DISPLAY_LENGTH);
        aligned_2.truncate(DISPLAY_LENGTH);

        Ok(Alignment {
            seq_1_name: seq_1.name.clone(),
            seq_2_name: seq_2.name.clone(),
            mode: self.mode,
            cost,
            aligned_1,
            aligned_2,
            length: trace.len(),
            cells: self.cells,
        })
    }
}

impl Alignment {
    /// Whether an alignment was found.
    pub fn is_aligned(&self) -> bool {
        self.cost.is_finite()
    }

    /// The line placed between the two aligned sequences: a pipe where they agree.
    pub fn middle_string(&self) -> String {
        self.aligned_1
            .bytes()
            .zip(self.aligned_2.bytes())
            .map(|(a, b)| {
                if a == b && a != GAP {
                    UTF8_PIPE as char
                } else {
                    UTF8_SPACE as char
                }
            })
            .collect()
    }

    pub fn ali_string(&self) -> String {
        let mut ali_string = String::new();

        let seq_1_name = Field::Query.extract_from(self);
        let seq_2_name = Field::Target.extract_from(self);
        let name_width = seq_1_name.len().max(seq_2_name.len());

        // cost line
        ali_string.push_str(&format!(
            "==  cost: {};  mode: {};  length: {}\n",
            self.cost, self.mode, self.length
        ));

        if !self.is_aligned() {
            ali_string.push_str(&format!("{NO_ALIGNMENT}\n"));
            return ali_string;
        }

        let middle_string = self.middle_string();
        let displayed_length = self.aligned_1.len();

        let aligned_1 = self.aligned_1.as_bytes();
        let aligned_2 = self.aligned_2.as_bytes();

        // the number of residues consumed before the current block
        let mut seq_1_offset: usize = 0;
        let mut seq_2_offset: usize = 0;

        let mut start_offset: usize = 0;
        while start_offset < displayed_length {
            let end_offset = min(start_offset + 80, displayed_length);

            let seq_1_residues = aligned_1[start_offset..end_offset]
                .iter()
                .filter(|&&b| b != GAP)
                .count();
            let seq_2_residues = aligned_2[start_offset..end_offset]
                .iter()
                .filter(|&&b| b != GAP)
                .count();

            // first sequence
            ali_string.push_str(&format!(
                "{:>W$} {:5} {} {:<5}\n",
                seq_1_name,
                seq_1_offset + 1,
                &self.aligned_1[start_offset..end_offset],
                seq_1_offset + seq_1_residues,
                W = name_width
            ));

            // middle line
            ali_string.push_str(&format!(
                "{:W$} {:5} {}\n",
                "",
                "",
                &middle_string[start_offset..end_offset],
                W = name_width
            ));

            // second sequence
            ali_string.push_str(&format!(
                "{:>W$} {:5} {} {:<5}\n\n",
                seq_2_name,
                seq_2_offset + 1,
                &self.aligned_2[start_offset..end_offset],
                seq_2_offset + seq_2_residues,
                W = name_width
            ));

            seq_1_offset += seq_1_residues;
            seq_2_offset += seq_2_residues;
            start_offset = end_offset;
        }

        ali_string
    }
}
