use std::cell::RefCell;
use std::io::{stdout, Write};

use anyhow::Context;
use derive_builder::Builder;
use indexmap::IndexMap;
use log::{debug, info};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use thread_local::ThreadLocal;

use libseqalign::align::structs::{AlignMode, Alignment};
use libseqalign::align::Aligner;
use libseqalign::output::output_standard::{write_json_output, write_standard_output};
use libseqalign::output::output_tabular::write_tabular_output;
use libseqalign::structs::Sequence;

use crate::args::SearchArgs;
use crate::io::read_sequences;
use crate::util::PathBufExt;

#[derive(Builder, Clone, Debug)]
pub struct SearchConfig {
    pub mode: AlignMode,
    pub max_characters_to_align: usize,
}

/// Align every query against every target.
///
/// The alignments are returned in query-major order, matching the order of the input files.
pub fn align_all_pairs(
    queries: &IndexMap<String, Sequence>,
    targets: &IndexMap<String, Sequence>,
    config: &SearchConfig,
) -> anyhow::Result<Vec<Alignment>> {
    let pairs: Vec<(&Sequence, &Sequence)> = queries
        .values()
        .flat_map(|query| targets.values().map(move |target| (query, target)))
        .collect();

    let thread_local_aligner: ThreadLocal<RefCell<Aligner>> = ThreadLocal::new();

    let alignments = pairs
        .par_iter()
        .panic_fuse()
        .map(|(query, target)| {
            let mut aligner = thread_local_aligner
                .get_or(|| RefCell::new(Aligner::new()))
                .borrow_mut();

            aligner
                .align(query, target, config.mode, config.max_characters_to_align)
                .with_context(|| format!("failed to align {} to {}", query.name, target.name))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let per_thread_counts: Vec<usize> = thread_local_aligner
        .into_iter()
        .map(|aligner| aligner.into_inner().invocation_count())
        .collect();

    debug!(
        "{} alignments across {} threads: {:?}",
        alignments.len(),
        per_thread_counts.len(),
        per_thread_counts
    );

    Ok(alignments)
}

pub fn search(args: &SearchArgs) -> anyhow::Result<()> {
    let allow_overwrite = args.common_args.allow_overwrite;

    // open the outputs first so that we fail before doing any work
    let mut table_writer = args.output_args.tbl_results_path.open(allow_overwrite)?;
    let mut alignment_writer: Box<dyn Write> = match &args.output_args.ali_results_path {
        Some(path) => Box::new(path.open(allow_overwrite)?),
        None => Box::new(stdout().lock()),
    };

    let queries = read_sequences(&args.query_path)?;
    let targets = read_sequences(&args.target_path)?;

    let config = SearchConfigBuilder::default()
        .mode(args.engine_args.mode())
        .max_characters_to_align(args.engine_args.align_length)
        .build()?;

    info!(
        "aligning {} queries to {} targets ({} mode)",
        queries.len(),
        targets.len(),
        config.mode
    );

    let alignments = align_all_pairs(&queries, &targets, &config)?;

    let num_aligned = alignments.iter().filter(|a| a.is_aligned()).count();
    info!(
        "{num_aligned} of {} pairs produced an alignment",
        alignments.len()
    );

    write_tabular_output(&alignments, &mut table_writer)
        .context("failed to write to table writer")?;

    let write_result = match args.output_args.json {
        true => write_json_output(&alignments, &mut alignment_writer),
        false => write_standard_output(&alignments, &mut alignment_writer),
    };
    write_result.context("failed to write to alignment writer")?;

    table_writer.flush()?;
    alignment_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{CommonArgs, EngineArgs, OutputArgs};
    use crate::io::sequence_from_argument;
    use assert2::assert;
    use libseqalign::align::align;
    use libseqalign::align::structs::Cost;
    use std::path::PathBuf;

    fn sequence_map(entries: &[(&str, &str)]) -> anyhow::Result<IndexMap<String, Sequence>> {
        entries
            .iter()
            .map(|(name, residues)| -> anyhow::Result<(String, Sequence)> {
                Ok((name.to_string(), sequence_from_argument(name, residues)?))
            })
            .collect()
    }

    #[test]
    fn test_align_all_pairs_in_order() -> anyhow::Result<()> {
        let queries = sequence_map(&[("q1", "AATG"), ("q2", "AAAAA")])?;
        let targets = sequence_map(&[("t1", "AAGT"), ("t2", "A"), ("t3", "AATG")])?;

        let config = SearchConfigBuilder::default()
            .mode(AlignMode::Banded)
            .max_characters_to_align(1000)
            .build()?;

        let alignments = align_all_pairs(&queries, &targets, &config)?;
        assert!(alignments.len() == 6);

        let names: Vec<(&str, &str)> = alignments
            .iter()
            .map(|a| (a.seq_1_name.as_str(), a.seq_2_name.as_str()))
            .collect();
        assert!(
            names
                == vec![
                    ("q1", "t1"),
                    ("q1", "t2"),
                    ("q1", "t3"),
                    ("q2", "t1"),
                    ("q2", "t2"),
                    ("q2", "t3"),
                ]
        );

        // each result matches a standalone alignment of the same pair
        for (alignment, (query, target)) in alignments.iter().zip(
            queries
                .values()
                .flat_map(|q| targets.values().map(move |t| (q, t))),
        ) {
            assert!(*alignment == align(query, target, AlignMode::Banded, 1000)?);
        }

        assert!(alignments[0].cost == Cost::new(-4));
        assert!(alignments[4].cost.is_infinite());
        Ok(())
    }

    #[test]
    fn test_search_writes_outputs() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let query_path = dir.path().join("query.fa");
        let target_path = dir.path().join("target.fa");
        std::fs::write(&query_path, ">q1\nAATG\n")?;
        std::fs::write(&target_path, ">t1\nAAGT\n>t2\nAAAAAAAA\n")?;

        let tbl_results_path = dir.path().join("results.tbl");
        let ali_results_path = dir.path().join("results.json");

        let args = SearchArgs {
            query_path,
            target_path,
            output_args: OutputArgs {
                tbl_results_path: tbl_results_path.clone(),
                ali_results_path: Some(ali_results_path.clone()),
                json: true,
            },
            engine_args: EngineArgs {
                banded: true,
                align_length: 1000,
            },
            common_args: CommonArgs {
                num_threads: 1,
                allow_overwrite: false,
            },
        };

        search(&args)?;

        let table = std::fs::read_to_string(&tbl_results_path)?;
        let rows: Vec<Vec<&str>> = table
            .lines()
            .filter(|line| !line.starts_with('#'))
            .map(|line| line.split_whitespace().collect())
            .collect();
        assert!(rows.len() == 2);
        assert!(rows[0][..4].to_vec() == vec!["q1", "t1", "banded", "-4"]);
        assert!(rows[1][..4].to_vec() == vec!["q1", "t2", "banded", "inf"]);

        let json = std::fs::read_to_string(&ali_results_path)?;
        let alignments: Vec<Alignment> = json
            .lines()
            .map(serde_json::from_str::<Alignment>)
            .collect::<Result<_, _>>()?;
        assert!(alignments.len() == 2);
        assert!(alignments[0].aligned_1 == "AATG");
        assert!(alignments[1].aligned_1 == "No Alignment Possible");

        // the outputs exist now, so a second run without overwriting must fail
        assert!(search(&args).is_err());
        Ok(())
    }

    #[test]
    fn test_search_rejects_missing_input() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let args = SearchArgs {
            query_path: PathBuf::from("/nonexistent/query.fa"),
            target_path: PathBuf::from("/nonexistent/target.fa"),
            output_args: OutputArgs {
                tbl_results_path: dir.path().join("results.tbl"),
                ali_results_path: Some(dir.path().join("results.ali")),
                json: false,
            },
            engine_args: EngineArgs {
                banded: false,
                align_length: 1000,
            },
            common_args: CommonArgs {
                num_threads: 1,
                allow_overwrite: true,
            },
        };

        assert!(search(&args).is_err());
        Ok(())
    }
}
