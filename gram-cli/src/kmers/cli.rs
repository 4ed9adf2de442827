use clap::{Command, arg, value_parser};

pub use gram_kmers::consts::*;

pub fn create_kmers_cli() -> Command {
    Command::new(KMERS_CMD)
        .author("gram developers")
        .about("Generate the k-mers found around each variant site of a population reference graph.")
        .arg_required_else_help(true)
        .arg(arg!(--prg <prg> "Path to the encoded PRG (plain or .gz), or - for stdin").required(true))
        .arg(arg!(-c --config <config> "TOML file with kmer_size, max_base_distance and include_invariant_anchors"))
        .arg(
            arg!(-k --"kmer-size" <kmer_size> "Length of each k-mer in bases")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(-d --"max-base-distance" <max_base_distance> "Bases to search on either side of an anchor (default: 150)")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(--"all-kmers" "Anchor a window on every region, not only variant sites"))
        .arg(arg!(--unique "Drop k-mers already written for an earlier anchor"))
        .arg(arg!(-o --output <output> "Where to write k-mers, one per line (.gz compresses; default: stdout)"))
        .arg(
            arg!(-t --threads <threads> "Number of threads to compute anchor windows with")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(-q --quiet "Hide the progress spinner"))
}
