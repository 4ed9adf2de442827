//! Parser for the integer-marker PRG encoding.
//!
//! Bases outside a variant site are read as invariant sequence. A site opens
//! with an odd marker (5 or greater), its alleles are separated by the even
//! marker one above it, and it closes by repeating the odd marker:
//!
//! ```text
//! AC5T6G5C7A8T7  =>  [AC] [T,G] [C] [A,T]
//! ```
use crate::errors::PrgError;
use crate::models::{Prg, Region};

/// The smallest marker a variant site may use.
pub const FIRST_SITE_MARKER: u64 = 5;

struct OpenSite {
    marker: u64,
    alleles: Vec<String>,
    current: String,
}

impl OpenSite {
    fn finish_allele(&mut self) {
        self.alleles.push(std::mem::take(&mut self.current));
    }
}

///
/// Split a run of digits into markers. Alleles are never empty, so a run that
/// starts with the open site's closing marker and carries more digits is that
/// close followed directly by the next site's opening marker (`57` in
/// `5A6T57C8G7`). Offsets are relative to the start of the run.
///
fn split_markers(digits: &str, open_marker: Option<u64>) -> Vec<(usize, &str)> {
    if let Some(marker) = open_marker {
        let close = marker.to_string();
        if let Some(rest) = digits.strip_prefix(close.as_str()) {
            if !rest.is_empty() && !rest.starts_with('0') {
                return vec![(0, &digits[..close.len()]), (close.len(), rest)];
            }
        }
    }
    vec![(0, digits)]
}

///
/// Parse an encoded PRG into its region sequence.
///
/// Leading and trailing whitespace is ignored. Consecutive bases outside a
/// site form a single invariant region.
///
/// # Arguments
/// - encoded: the PRG in marker encoding
///
pub fn parse_prg(encoded: &str) -> Result<Prg, PrgError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(PrgError::EmptyPrg);
    }

    let bytes = encoded.as_bytes();
    let mut regions: Vec<Region> = Vec::new();
    let mut invariant = String::new();
    let mut site: Option<OpenSite> = None;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos].is_ascii_digit() {
            let run_start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            let open_marker = site.as_ref().map(|open| open.marker);

            for (offset, digits) in split_markers(&encoded[run_start..pos], open_marker) {
                let start = run_start + offset;
                let marker: u64 = digits
                    .parse()
                    .map_err(|_| PrgError::parse(start, "marker does not fit in 64 bits"))?;

                if marker < FIRST_SITE_MARKER {
                    return Err(PrgError::parse(
                        start,
                        format!("marker {} is below {}", marker, FIRST_SITE_MARKER),
                    ));
                }

                match site.as_mut() {
                    None if marker % 2 == 1 => {
                        if !invariant.is_empty() {
                            regions.push(Region::invariant(std::mem::take(&mut invariant))?);
                        }
                        site = Some(OpenSite {
                            marker,
                            alleles: Vec::new(),
                            current: String::new(),
                        });
                    }
                    None => {
                        return Err(PrgError::parse(
                            start,
                            format!("allele marker {} outside of a site", marker),
                        ));
                    }
                    Some(open) if marker == open.marker => {
                        open.finish_allele();
                        regions.push(Region::new(std::mem::take(&mut open.alleles))?);
                        site = None;
                    }
                    Some(open) if marker == open.marker + 1 => open.finish_allele(),
                    Some(open) => {
                        return Err(PrgError::parse(
                            start,
                            format!("marker {} inside site {}", marker, open.marker),
                        ));
                    }
                }
            }
        } else {
            let base = encoded[pos..]
                .chars()
                .next()
                .ok_or_else(|| PrgError::parse(pos, "truncated character"))?;

            if base.is_whitespace() {
                return Err(PrgError::parse(pos, "whitespace inside PRG"));
            }

            match site.as_mut() {
                Some(open) => open.current.push(base),
                None => invariant.push(base),
            }
            pos += base.len_utf8();
        }
    }

    if let Some(open) = site {
        return Err(PrgError::parse(
            bytes.len(),
            format!("site {} is never closed", open.marker),
        ));
    }
    if !invariant.is_empty() {
        regions.push(Region::invariant(invariant)?);
    }

    Prg::try_from(regions)
}
