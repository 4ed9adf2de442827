use gram_core::Region;

///
/// Number of genome paths through a run of regions: the product of the allele
/// counts of its variant regions, or `None` if that overflows.
///
pub fn path_count(region_range: &[Region]) -> Option<u128> {
    region_range
        .iter()
        .filter(|region| region.is_variant())
        .try_fold(1u128, |count, region| {
            count.checked_mul(region.allele_count() as u128)
        })
}

///
/// Every concrete sequence through a run of regions, one allele picked per
/// variant region, in Cartesian product order: the leftmost variant region
/// varies slowest and the rightmost fastest. Identical strings produced by
/// different allele choices are all emitted.
///
/// # Examples
///
/// ```
/// use gram_core::Region;
/// use gram_kmers::genome_paths;
///
/// let regions = vec![
///     Region::invariant("AC").unwrap(),
///     Region::new(["T", "G"]).unwrap(),
///     Region::invariant("C").unwrap(),
///     Region::new(["A", "T"]).unwrap(),
/// ];
/// let paths: Vec<String> = genome_paths(&regions).collect();
/// assert_eq!(paths, vec!["ACTCA", "ACTCT", "ACGCA", "ACGCT"]);
/// ```
pub fn genome_paths(region_range: &[Region]) -> GenomePaths<'_> {
    GenomePaths::new(region_range)
}

/// Lazy iterator returned by [`genome_paths`]. A clone continues from the
/// same combination; call [`genome_paths`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct GenomePaths<'a> {
    regions: &'a [Region],
    /// index into `regions` of each variant region
    variants: Vec<usize>,
    /// allele currently chosen for each entry of `variants`
    choices: Vec<usize>,
    path_len_hint: usize,
    remaining: Option<u128>,
    exhausted: bool,
}

impl<'a> GenomePaths<'a> {
    fn new(regions: &'a [Region]) -> Self {
        let variants: Vec<usize> = regions
            .iter()
            .enumerate()
            .filter(|(_, region)| region.is_variant())
            .map(|(idx, _)| idx)
            .collect();

        GenomePaths {
            regions,
            choices: vec![0; variants.len()],
            variants,
            path_len_hint: regions.iter().map(Region::extent).sum(),
            remaining: path_count(regions),
            exhausted: false,
        }
    }

    fn current_path(&self) -> String {
        let mut path = String::with_capacity(self.path_len_hint);
        let mut choices = self.choices.iter();

        for region in self.regions {
            let allele = if region.is_variant() {
                choices.next().map_or(0, |&choice| choice)
            } else {
                0
            };
            path.push_str(&region.alleles()[allele]);
        }

        path
    }

    /// Step the rightmost choice, carrying leftwards; false once every
    /// combination has been visited.
    fn advance(&mut self) -> bool {
        for slot in (0..self.choices.len()).rev() {
            let allele_count = self.regions[self.variants[slot]].allele_count();
            self.choices[slot] += 1;
            if self.choices[slot] < allele_count {
                return true;
            }
            self.choices[slot] = 0;
        }
        false
    }
}

impl Iterator for GenomePaths<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let path = self.current_path();
        self.exhausted = !self.advance();
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));

        Some(path)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.remaining.and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}
