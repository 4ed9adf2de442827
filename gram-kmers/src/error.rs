use thiserror::Error;

use gram_core::PrgError;

use crate::config::KmerConfigError;

/// Error type for k-mer generation.
#[derive(Error, Debug)]
pub enum KmerError {
    /// The requested k-mer size was zero.
    #[error("k-mer size must be a positive number of bases, got {0}")]
    InvalidKmerSize(usize),

    /// No regions were given where an anchor is required.
    #[error("PRG contains no regions")]
    EmptyPrg,

    /// The anchor index does not point into the region sequence.
    #[error("Anchor region {index} is out of range for a PRG of {len} regions")]
    AnchorOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Prg(#[from] PrgError),

    #[error(transparent)]
    Config(#[from] KmerConfigError),
}

/// Result type alias for k-mer generation.
pub type Result<T> = std::result::Result<T, KmerError>;
