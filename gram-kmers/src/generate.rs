use fxhash::FxHashSet as HashSet;
use rayon::prelude::*;

use gram_core::Region;

use crate::consts::LARGE_PATH_COUNT;
use crate::error::{KmerError, Result};
use crate::extract::{KmersFromPaths, check_kmer_size};
use crate::neighborhood::{check_anchor, neighborhood};
use crate::paths::{GenomePaths, genome_paths, path_count};

///
/// Indices of the regions that anchor a window: every variant region, or
/// every region when `include_invariant_anchors` is set.
///
pub fn anchors(
    regions: &[Region],
    include_invariant_anchors: bool,
) -> impl Iterator<Item = usize> + Clone + '_ {
    regions
        .iter()
        .enumerate()
        .filter(move |(_, region)| include_invariant_anchors || region.is_variant())
        .map(|(idx, _)| idx)
}

fn log_window(anchor: usize, window: &[Region]) {
    match path_count(window) {
        Some(count) if count > LARGE_PATH_COUNT => log::warn!(
            "Anchor {} spans {} regions with {} genome paths",
            anchor,
            window.len(),
            count
        ),
        Some(count) => log::debug!(
            "Anchor {} spans {} regions with {} genome paths",
            anchor,
            window.len(),
            count
        ),
        None => log::warn!(
            "Anchor {} spans {} regions; genome path count overflows",
            anchor,
            window.len()
        ),
    }
}

fn window_kmers(
    max_base_distance: usize,
    kmer_size: usize,
    regions: &[Region],
    anchor: usize,
) -> KmersFromPaths<GenomePaths<'_>> {
    let window = neighborhood(max_base_distance, anchor, regions);
    log_window(anchor, window);
    KmersFromPaths::new(genome_paths(window), kmer_size)
}

fn check_generate_args(kmer_size: usize, regions: &[Region]) -> Result<()> {
    check_kmer_size(kmer_size)?;
    if regions.is_empty() {
        return Err(KmerError::EmptyPrg);
    }
    Ok(())
}

///
/// Generate the k-mers of every anchor's window over a PRG.
///
/// For each anchor in ascending order, the window is the anchor and its
/// neighbors within `max_base_distance` bases on either side. The window's
/// genome paths are scanned for k-mers, deduplicated within that window only,
/// and appended to the output. The same k-mer can therefore appear again
/// under a later anchor.
///
/// Arguments are checked before anything is produced; the returned iterator
/// is lazy and can be cloned to replay the remaining output.
///
/// # Arguments
/// - max_base_distance: neighborhood budget in bases, per direction
/// - kmer_size: k-mer width in bases; must be positive
/// - regions: the PRG's region sequence
/// - include_invariant_anchors: anchor a window on every region, not only variant sites
///
/// # Examples
///
/// ```
/// use gram_core::Prg;
/// use gram_kmers::generate;
///
/// let prg: Prg = "AC5T6G5".parse().unwrap();
/// let kmers: Vec<String> = generate(1, 2, prg.regions(), false).unwrap().collect();
/// assert_eq!(kmers, vec!["AC", "CT", "CG"]);
/// ```
pub fn generate(
    max_base_distance: usize,
    kmer_size: usize,
    regions: &[Region],
    include_invariant_anchors: bool,
) -> Result<Kmers<'_>> {
    check_generate_args(kmer_size, regions)?;

    Ok(Kmers {
        regions,
        max_base_distance,
        kmer_size,
        include_invariant_anchors,
        next_region: 0,
        window: None,
    })
}

///
/// The deduplicated k-mers of the window around one anchor, the unit of work
/// [`generate`] repeats per anchor.
///
pub fn anchor_kmers(
    max_base_distance: usize,
    kmer_size: usize,
    regions: &[Region],
    anchor: usize,
) -> Result<Vec<String>> {
    check_kmer_size(kmer_size)?;
    check_anchor(anchor, regions)?;

    Ok(window_kmers(max_base_distance, kmer_size, regions, anchor).collect())
}

///
/// Same output as [`generate`], computed with anchors spread over the current
/// rayon thread pool. One entry per anchor, in anchor order.
///
pub fn par_generate(
    max_base_distance: usize,
    kmer_size: usize,
    regions: &[Region],
    include_invariant_anchors: bool,
) -> Result<Vec<Vec<String>>> {
    check_generate_args(kmer_size, regions)?;

    let anchors: Vec<usize> = anchors(regions, include_invariant_anchors).collect();
    let windows = anchors
        .par_iter()
        .map(|&anchor| {
            window_kmers(max_base_distance, kmer_size, regions, anchor).collect::<Vec<String>>()
        })
        .collect();

    Ok(windows)
}

///
/// Drop repeats from a k-mer stream, keeping first occurrences in order.
/// Turns the per-window output of [`generate`] into a globally distinct set.
///
pub fn unique_kmers<I>(kmers: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::default();
    kmers
        .into_iter()
        .filter(move |kmer| seen.insert(kmer.clone()))
}

/// Lazy iterator returned by [`generate`].
#[derive(Debug, Clone)]
pub struct Kmers<'a> {
    regions: &'a [Region],
    max_base_distance: usize,
    kmer_size: usize,
    include_invariant_anchors: bool,
    next_region: usize,
    window: Option<KmersFromPaths<GenomePaths<'a>>>,
}

impl Kmers<'_> {
    fn next_anchor(&mut self) -> Option<usize> {
        while self.next_region < self.regions.len() {
            let idx = self.next_region;
            self.next_region += 1;
            if self.include_invariant_anchors || self.regions[idx].is_variant() {
                return Some(idx);
            }
        }
        None
    }
}

impl Iterator for Kmers<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(kmer) = self.window.as_mut().and_then(Iterator::next) {
                return Some(kmer);
            }
            let anchor = self.next_anchor()?;
            self.window = Some(window_kmers(
                self.max_base_distance,
                self.kmer_size,
                self.regions,
                anchor,
            ));
        }
    }
}
