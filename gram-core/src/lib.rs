//! # gram-core
//!
//! The population reference graph (PRG) as an in-memory model: an ordered,
//! gap-free sequence of [`Region`]s, each either invariant (one fixed
//! sequence) or a variant site (two or more alleles).
//!
//! It also reads and writes the integer-marker text encoding of a PRG, and
//! provides the plain/gzip file helpers the rest of the workspace shares.
//!
//! ```rust
//! use gram_core::models::Prg;
//!
//! let prg: Prg = "AC5T6G5C7A8T7".parse().unwrap();
//! assert_eq!(prg.len(), 4);
//! assert_eq!(prg.variant_site_count(), 2);
//! assert_eq!(prg.regions()[1].alleles(), &["T", "G"]);
//! ```
pub mod errors;
pub mod models;
pub mod parse;
pub mod utils;

pub use errors::PrgError;
pub use models::{Prg, Region};
pub use parse::parse_prg;
