use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use libseqalign::align::structs::AlignMode;

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[command(about = "Align two sequences supplied on the command line")]
    Align(AlignArgs),
    #[command(about = "Align every query sequence against every target sequence")]
    Search(SearchArgs),
}

#[derive(Parser)]
#[command(name = "seqalign")]
#[command(
    about = "Compute minimum-cost pairwise sequence alignments, optionally within a diagonal band"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// The number of threads that seqalign will use
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,

    /// Allow seqalign to overwrite files
    #[arg(short = 'q', long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Restrict the search to a diagonal band around the main diagonal
    #[arg(short = 'b', long = "banded", action)]
    pub banded: bool,

    /// Align at most this many leading residues of each sequence
    #[arg(
        short = 'n',
        long = "align-length",
        default_value_t = 1000usize,
        value_name = "N"
    )]
    pub align_length: usize,
}

impl EngineArgs {
    pub fn mode(&self) -> AlignMode {
        AlignMode::from_banded_flag(self.banded)
    }
}

#[derive(Debug, Args)]
pub struct AlignArgs {
    /// The first sequence
    #[arg(value_name = "SEQ_1")]
    pub seq_1: String,

    /// The second sequence
    #[arg(value_name = "SEQ_2")]
    pub seq_2: String,

    /// Write the alignment as a JSON object
    #[arg(long = "json", action)]
    pub json: bool,

    /// Arguments that are passed to libseqalign functions
    #[command(flatten)]
    pub engine_args: EngineArgs,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Query file
    #[arg(value_name = "QUERY.fasta")]
    pub query_path: PathBuf,

    /// Target file
    #[arg(value_name = "TARGET.fasta")]
    pub target_path: PathBuf,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,

    /// Arguments that are passed to libseqalign functions
    #[command(flatten)]
    pub engine_args: EngineArgs,

    /// Arguments that are common across all seqalign subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Where to place tabular output
    #[arg(
        short = 'T',
        long = "tbl",
        default_value = "results.tbl",
        value_name = "path"
    )]
    pub tbl_results_path: PathBuf,

    /// Where to place alignment output (defaults to stdout)
    #[arg(short = 'O', long = "ali", value_name = "path")]
    pub ali_results_path: Option<PathBuf>,

    /// Write alignments as JSON lines instead of alignment blocks
    #[arg(long = "json", action)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{assert, let_assert};

    #[test]
    fn test_parse_align() {
        let cli = Cli::parse_from(["seqalign", "align", "AATG", "AAGT", "--banded", "-vv"]);
        assert!(cli.verbose == 2);

        let_assert!(SubCommands::Align(args) = cli.command);
        assert!(args.seq_1 == "AATG");
        assert!(args.seq_2 == "AAGT");
        assert!(args.engine_args.mode() == AlignMode::Banded);
        assert!(args.engine_args.align_length == 1000);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::parse_from([
            "seqalign",
            "search",
            "q.fa",
            "t.fa",
            "-n",
            "50",
            "-t",
            "2",
            "--ali",
            "out.ali",
            "--allow-overwrite",
        ]);
        assert!(cli.verbose == 0);

        let_assert!(SubCommands::Search(args) = cli.command);
        assert!(args.query_path == PathBuf::from("q.fa"));
        assert!(args.target_path == PathBuf::from("t.fa"));
        assert!(args.engine_args.mode() == AlignMode::Unrestricted);
        assert!(args.engine_args.align_length == 50);
        assert!(args.common_args.num_threads == 2);
        assert!(args.common_args.allow_overwrite);
        assert!(args.output_args.tbl_results_path == PathBuf::from("results.tbl"));
        assert!(args.output_args.ali_results_path == Some(PathBuf::from("out.ali")));
    }

    #[test]
    fn test_negative_length_is_rejected() {
        let result = Cli::try_parse_from(["seqalign", "align", "A", "A", "-n", "-1"]);
        assert!(result.is_err());
    }
}
