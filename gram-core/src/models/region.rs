use std::fmt::{self, Display};

use crate::errors::PrgError;

///
/// Region struct, one segment of a population reference graph. A region with
/// a single allele is invariant; two or more alleles make it a variant site.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    alleles: Vec<String>,
}

impl Region {
    ///
    /// Create a region from its ordered alleles.
    ///
    /// # Arguments
    /// - alleles: the allele sequences, in the order they appear in the PRG
    ///
    /// # Returns
    /// The region, or an error when there are no alleles or one of them is empty.
    ///
    pub fn new<I, S>(alleles: I) -> Result<Self, PrgError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let alleles: Vec<String> = alleles.into_iter().map(Into::into).collect();

        if alleles.is_empty() {
            return Err(PrgError::EmptyRegion);
        }
        if let Some(idx) = alleles.iter().position(|allele| allele.is_empty()) {
            return Err(PrgError::EmptyAllele(idx));
        }

        Ok(Region { alleles })
    }

    ///
    /// Create an invariant region holding one fixed sequence.
    ///
    pub fn invariant<S: Into<String>>(sequence: S) -> Result<Self, PrgError> {
        Region::new([sequence])
    }

    pub fn alleles(&self) -> &[String] {
        &self.alleles
    }

    pub fn allele_count(&self) -> usize {
        self.alleles.len()
    }

    pub fn is_variant(&self) -> bool {
        self.alleles.len() > 1
    }

    pub fn is_invariant(&self) -> bool {
        self.alleles.len() == 1
    }

    ///
    /// Number of bases the region spans, taken as its longest allele. This
    /// is what a neighborhood search charges against its distance budget.
    ///
    pub fn extent(&self) -> usize {
        self.alleles
            .iter()
            .map(|allele| allele.chars().count())
            .max()
            .unwrap_or(0)
    }

    ///
    /// Render the region in the marker encoding. Invariant regions are their
    /// sequence; variant regions open and close with `site_marker` and
    /// separate alleles with `site_marker + 1`.
    ///
    pub fn to_encoded(&self, site_marker: u64) -> String {
        if self.is_invariant() {
            return self.alleles[0].clone();
        }

        let separator = (site_marker + 1).to_string();
        format!(
            "{marker}{body}{marker}",
            marker = site_marker,
            body = self.alleles.join(&separator)
        )
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.alleles.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(vec!["AC"], 2)]
    #[case(vec!["T", "G"], 1)]
    #[case(vec!["GGGGGGGG", "T"], 8)]
    #[case(vec!["T", "G", "C", "AAA"], 3)]
    fn test_extent_is_longest_allele(#[case] alleles: Vec<&str>, #[case] expected: usize) {
        let region = Region::new(alleles).unwrap();
        assert_eq!(region.extent(), expected);
    }

    #[rstest]
    fn test_allele_count_decides_variant() {
        let invariant = Region::invariant("ACGT").unwrap();
        let variant = Region::new(["A", "T"]).unwrap();

        assert!(invariant.is_invariant());
        assert!(!invariant.is_variant());
        assert!(variant.is_variant());
        assert_eq!(variant.allele_count(), 2);
    }

    #[rstest]
    fn test_no_alleles_rejected() {
        let result = Region::new(Vec::<String>::new());
        assert!(matches!(result, Err(PrgError::EmptyRegion)));
    }

    #[rstest]
    fn test_empty_allele_rejected() {
        let result = Region::new(["A", "", "T"]);
        assert!(matches!(result, Err(PrgError::EmptyAllele(1))));
    }

    #[rstest]
    fn test_allele_order_preserved() {
        let region = Region::new(["TC", "A", "G"]).unwrap();
        assert_eq!(region.alleles(), &["TC", "A", "G"]);
    }

    #[rstest]
    #[case(vec!["ACGT"], 5, "ACGT")]
    #[case(vec!["T", "G"], 5, "5T6G5")]
    #[case(vec!["A", "C", "GG"], 11, "11A12C12GG11")]
    fn test_to_encoded(#[case] alleles: Vec<&str>, #[case] marker: u64, #[case] expected: &str) {
        let region = Region::new(alleles).unwrap();
        assert_eq!(region.to_encoded(marker), expected);
    }

    #[rstest]
    fn test_display() {
        let region = Region::new(["T", "G"]).unwrap();
        assert_eq!(region.to_string(), "[T,G]");
    }
}
