mod align;
mod args;
mod io;
mod search;
mod util;

use align::align;
use args::{Cli, SubCommands};
use search::search;
use util::{set_threads, setup_logging};

use clap::Parser;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();

    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        SubCommands::Align(args) => {
            align(&args)?;
        }
        SubCommands::Search(args) => {
            set_threads(args.common_args.num_threads)?;
            search(&args)?;
        }
    }
    Ok(())
}
