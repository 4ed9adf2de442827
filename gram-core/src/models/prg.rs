use std::fmt::{self, Display};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::errors::PrgError;
use crate::models::Region;
use crate::parse::{FIRST_SITE_MARKER, parse_prg};
use crate::utils::get_dynamic_reader;

///
/// Prg struct, the ordered and gap-free sequence of regions making up one
/// linear decomposition of a reference. A region's position is its index.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prg {
    regions: Vec<Region>,
}

impl TryFrom<Vec<Region>> for Prg {
    type Error = PrgError;

    fn try_from(regions: Vec<Region>) -> Result<Self, Self::Error> {
        if regions.is_empty() {
            return Err(PrgError::EmptyPrg);
        }
        Ok(Prg { regions })
    }
}

impl FromStr for Prg {
    type Err = PrgError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        parse_prg(encoded)
    }
}

impl From<Prg> for Vec<Region> {
    fn from(prg: Prg) -> Self {
        prg.regions
    }
}

impl<'a> IntoIterator for &'a Prg {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

impl Prg {
    ///
    /// Read and parse an encoded PRG from disk. Files ending in `.gz` are
    /// decompressed on the fly.
    ///
    /// # Arguments
    /// - path: path to the encoded PRG
    ///
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PrgError> {
        let prg = Prg::from_reader(get_dynamic_reader(path.as_ref())?)?;
        log::info!(
            "Loaded PRG from {}: {} regions, {} variant sites",
            path.as_ref().display(),
            prg.len(),
            prg.variant_site_count()
        );

        Ok(prg)
    }

    ///
    /// Read and parse an encoded PRG from any reader, e.g. stdin.
    ///
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, PrgError> {
        let mut encoded = String::new();
        reader.read_to_string(&mut encoded)?;
        parse_prg(&encoded)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, idx: usize) -> Option<&Region> {
        self.regions.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn variant_site_count(&self) -> usize {
        self.regions.iter().filter(|r| r.is_variant()).count()
    }

    ///
    /// Render the PRG in the marker encoding, numbering sites 5, 7, 9, ...
    /// in order of appearance.
    ///
    pub fn to_encoded(&self) -> String {
        let mut marker = FIRST_SITE_MARKER;
        let mut encoded = String::new();

        for region in &self.regions {
            encoded.push_str(&region.to_encoded(marker));
            if region.is_variant() {
                marker += 2;
            }
        }

        encoded
    }
}

impl Display for Prg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_encoded())
    }
}
