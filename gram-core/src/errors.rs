use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrgError {
    #[error("Region has no alleles")]
    EmptyRegion,

    #[error("Region allele {0} is an empty sequence")]
    EmptyAllele(usize),

    #[error("PRG contains no regions")]
    EmptyPrg,

    #[error("Error parsing PRG at byte {position}: {message}")]
    Parse { position: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PrgError {
    pub(crate) fn parse<S: Into<String>>(position: usize, message: S) -> Self {
        PrgError::Parse {
            position,
            message: message.into(),
        }
    }
}
