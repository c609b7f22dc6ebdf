use std::io::{stdout, Write};

use colored::Colorize;
use libseqalign::align::structs::Alignment;
use libseqalign::align::Aligner;
use libseqalign::output::output_standard::write_json_output;

use crate::args::AlignArgs;
use crate::io::sequence_from_argument;

pub fn align(args: &AlignArgs) -> anyhow::Result<()> {
    let seq_1 = sequence_from_argument("seq_1", &args.seq_1)?;
    let seq_2 = sequence_from_argument("seq_2", &args.seq_2)?;

    let mut aligner = Aligner::new();
    let alignment = aligner.align(
        &seq_1,
        &seq_2,
        args.engine_args.mode(),
        args.engine_args.align_length,
    )?;

    let mut out = stdout().lock();
    match args.json {
        true => write_json_output(std::slice::from_ref(&alignment), &mut out)?,
        false => write!(out, "{}", summary_string(&alignment))?,
    }
    out.flush()?;
    Ok(())
}

/// The cost followed by the two aligned sequences, with a match line between them.
fn summary_string(alignment: &Alignment) -> String {
    if !alignment.is_aligned() {
        return format!(
            "cost: {}\n{}\n{}\n",
            alignment.cost.to_string().bold(),
            alignment.aligned_1.red(),
            alignment.aligned_2.red()
        );
    }

    format!(
        "cost: {}\n{}\n{}\n{}\n",
        alignment.cost.to_string().bold(),
        alignment.aligned_1,
        alignment.middle_string().green(),
        alignment.aligned_2
    )
}
