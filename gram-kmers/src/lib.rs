//! # gram-kmers
//!
//! Variant-aware k-mer generation over a population reference graph.
//!
//! For every variant site (the *anchor*), the regions within a base budget on
//! either side form a window. Every combination of alleles through the window
//! is spelled out as a genome path, and each distinct k-mer of those paths is
//! emitted once per window. The result seeds a k-mer index that lets reads be
//! resolved against variant sites without enumerating whole haplotypes.
//!
//! The pipeline, one stage per module:
//!
//! - [`neighborhood`]: bounded search outward from an anchor
//! - [`paths`]: Cartesian enumeration of genome paths through a window
//! - [`extract`]: first-occurrence-deduplicated k-mers of those paths
//! - [`generate`](mod@generate): the per-anchor driver over a whole PRG
//!
//! ## Example
//!
//! ```rust
//! use gram_core::Prg;
//! use gram_kmers::generate;
//!
//! let prg: Prg = "AC5T6G5C7A8T7".parse().unwrap();
//! let kmers: Vec<String> = generate(3, 4, prg.regions(), false)
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(&kmers[..4], &["ACTC", "CTCA", "CTCT", "ACGC"]);
//! ```
//!
//! Each anchor's window is independent of the others, so [`par_generate`]
//! computes them on a rayon thread pool and returns the same k-mers grouped
//! by anchor.
pub mod config;
pub mod consts;
pub mod error;
pub mod extract;
pub mod generate;
pub mod neighborhood;
pub mod paths;

// re-export things
pub use config::*;
pub use error::*;
pub use extract::{KmersFromPaths, kmers_from_genome_paths};
pub use generate::{Kmers, anchor_kmers, anchors, generate, par_generate, unique_kmers};
pub use neighborhood::{Direction, directional_region_range, regions_within_distance};
pub use paths::{GenomePaths, genome_paths, path_count};
