use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gram_core::Region;

use crate::consts::DEFAULT_MAX_BASE_DISTANCE;
use crate::generate::{Kmers, generate};

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct KmerConfig {
    pub kmer_size: usize,
    pub max_base_distance: Option<usize>,
    pub include_invariant_anchors: Option<bool>,
}

#[derive(Error, Debug)]
pub enum KmerConfigError {
    #[error("Missing or invalid file extension in k-mer config file. It must be `toml`")]
    InvalidFileType,
    #[error("Invalid k-mer config parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type KmerConfigResult<T> = std::result::Result<T, KmerConfigError>;

impl KmerConfig {
    pub fn new(kmer_size: usize) -> Self {
        KmerConfig {
            kmer_size,
            max_base_distance: None,
            include_invariant_anchors: None,
        }
    }

    pub fn max_base_distance(&self) -> usize {
        self.max_base_distance.unwrap_or(DEFAULT_MAX_BASE_DISTANCE)
    }

    pub fn include_invariant_anchors(&self) -> bool {
        self.include_invariant_anchors.unwrap_or(false)
    }

    ///
    /// Check the parameters before any generation starts.
    ///
    pub fn validate(&self) -> KmerConfigResult<()> {
        if self.kmer_size == 0 {
            return Err(KmerConfigError::InvalidParameter(
                "kmer_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    ///
    /// Run [`generate`] over `regions` with these parameters.
    ///
    pub fn generate<'a>(&self, regions: &'a [Region]) -> crate::Result<Kmers<'a>> {
        self.validate()?;
        generate(
            self.max_base_distance(),
            self.kmer_size,
            regions,
            self.include_invariant_anchors(),
        )
    }
}

impl TryFrom<&Path> for KmerConfig {
    type Error = KmerConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        if path.extension().and_then(OsStr::to_str) != Some("toml") {
            return Err(KmerConfigError::InvalidFileType);
        }

        let toml_str = read_to_string(path)?;
        let config: KmerConfig = toml::from_str(&toml_str)?;
        config.validate()?;

        Ok(config)
    }
}
