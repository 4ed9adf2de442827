use fxhash::FxHashSet as HashSet;

use crate::error::{KmerError, Result};

pub(crate) fn check_kmer_size(kmer_size: usize) -> Result<()> {
    if kmer_size == 0 {
        return Err(KmerError::InvalidKmerSize(kmer_size));
    }
    Ok(())
}

/// Sliding windows over one path, counted in characters.
#[derive(Debug, Clone)]
struct PathWindows {
    path: String,
    /// byte offset of every char plus the end; `None` when the path is ASCII
    boundaries: Option<Vec<usize>>,
    offset: usize,
}

impl PathWindows {
    fn new(path: String) -> Self {
        let boundaries = (!path.is_ascii()).then(|| {
            path.char_indices()
                .map(|(idx, _)| idx)
                .chain(std::iter::once(path.len()))
                .collect()
        });

        PathWindows {
            path,
            boundaries,
            offset: 0,
        }
    }

    fn next_window(&mut self, kmer_size: usize) -> Option<&str> {
        let start = self.offset;
        let end = start + kmer_size;

        let window = match &self.boundaries {
            None if end <= self.path.len() => &self.path[start..end],
            Some(bounds) if end < bounds.len() => &self.path[bounds[start]..bounds[end]],
            _ => return None,
        };
        self.offset += 1;

        Some(window)
    }
}

///
/// Every distinct k-mer of a sequence of genome paths, each yielded once at
/// its first occurrence. Paths are scanned in order, each left to right; paths
/// shorter than `kmer_size` contribute nothing.
///
/// # Arguments
/// - genome_paths: the paths to scan, consumed in a single pass
/// - kmer_size: window width in bases; must be positive
///
/// # Examples
///
/// ```
/// use gram_kmers::kmers_from_genome_paths;
///
/// let kmers: Vec<String> = kmers_from_genome_paths(["ACTGT", "TATC"], 3)
///     .unwrap()
///     .collect();
/// assert_eq!(kmers, vec!["ACT", "CTG", "TGT", "TAT", "ATC"]);
/// ```
pub fn kmers_from_genome_paths<I>(
    genome_paths: I,
    kmer_size: usize,
) -> Result<KmersFromPaths<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    check_kmer_size(kmer_size)?;
    Ok(KmersFromPaths::new(genome_paths.into_iter(), kmer_size))
}

/// Lazy iterator returned by [`kmers_from_genome_paths`].
#[derive(Debug, Clone)]
pub struct KmersFromPaths<I> {
    paths: I,
    kmer_size: usize,
    seen: HashSet<String>,
    current: Option<PathWindows>,
}

impl<I> KmersFromPaths<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    /// `kmer_size` must already be checked.
    pub(crate) fn new(paths: I, kmer_size: usize) -> Self {
        KmersFromPaths {
            paths,
            kmer_size,
            seen: HashSet::default(),
            current: None,
        }
    }

    /// Number of distinct k-mers yielded so far.
    pub fn distinct_count(&self) -> usize {
        self.seen.len()
    }
}

impl<I> Iterator for KmersFromPaths<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(windows) = self.current.as_mut() {
                while let Some(kmer) = windows.next_window(self.kmer_size) {
                    if !self.seen.contains(kmer) {
                        let kmer = kmer.to_string();
                        self.seen.insert(kmer.clone());
                        return Some(kmer);
                    }
                }
            }
            self.current = Some(PathWindows::new(self.paths.next()?.into()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn extract(paths: &[&str], kmer_size: usize) -> Vec<String> {
        kmers_from_genome_paths(paths.iter().copied(), kmer_size)
            .unwrap()
            .collect()
    }

    #[rstest]
    #[case::single_path(&["ACTGT"], 3, &["ACT", "CTG", "TGT"])]
    #[case::multiple_paths(&["ACTGT", "TATC"], 3, &["ACT", "CTG", "TGT", "TAT", "ATC"])]
    #[case::repeated_bases(&["TTTTTTTTTTT"], 3, &["TTT"])]
    #[case::repeat_across_paths(&["ACGT", "CGTA"], 3, &["ACG", "CGT", "GTA"])]
    #[case::short_path_skipped(&["AC", "ACGT"], 3, &["ACG", "CGT"])]
    #[case::path_equal_to_kmer_size(&["ACG"], 3, &["ACG"])]
    #[case::kmer_size_one(&["ACCA"], 1, &["A", "C"])]
    fn test_kmers_from_genome_paths(
        #[case] paths: &[&str],
        #[case] kmer_size: usize,
        #[case] expected: &[&str],
    ) {
        assert_eq!(extract(paths, kmer_size), expected);
    }

    #[rstest]
    fn test_no_paths_no_kmers() {
        assert!(extract(&[], 3).is_empty());
    }

    #[rstest]
    fn test_zero_kmer_size_rejected() {
        let result = kmers_from_genome_paths(["ACGT"], 0);
        assert!(matches!(result, Err(KmerError::InvalidKmerSize(0))));
    }

    #[rstest]
    fn test_windows_follow_char_boundaries() {
        assert_eq!(extract(&["AéGT"], 2), vec!["Aé", "éG", "GT"]);
    }

    #[rstest]
    fn test_no_kmer_yielded_twice() {
        let paths = ["ACGTACGTAC", "GTACGTTTAC", "ACGTACGTAC"];
        let kmers = extract(&paths, 4);
        let unique: HashSet<&String> = kmers.iter().collect();
        assert_eq!(unique.len(), kmers.len());
    }

    #[rstest]
    fn test_distinct_count_tracks_yielded() {
        let mut kmers = kmers_from_genome_paths(["TTTTT", "TTAT"], 2).unwrap();
        kmers.by_ref().for_each(drop);
        assert_eq!(kmers.distinct_count(), 3);
    }
}
