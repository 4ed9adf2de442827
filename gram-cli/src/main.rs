mod kmers;

use anyhow::Result;
use clap::{Command, arg};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "gram";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("gram developers")
        .about("Variant-aware k-mer generation for population reference graphs.")
        .subcommand_required(true)
        .arg(arg!(-v --verbose ... "Increase logging verbosity (-v info, -vv debug, -vvv trace)").global(true))
        .subcommand(kmers::cli::create_kmers_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // K-MER GENERATION
        //
        Some((kmers::cli::KMERS_CMD, matches)) => {
            kmers::handlers::run_kmers(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
