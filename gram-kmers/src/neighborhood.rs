use gram_core::Region;

use crate::error::{KmerError, Result};

/// Which way a neighborhood search walks from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards increasing region index.
    Forward,
    /// Towards decreasing region index.
    Backward,
}

impl Direction {
    #[inline]
    fn step(self, idx: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Forward => idx.checked_add(1).filter(|&next| next < len),
            Direction::Backward => idx.checked_sub(1),
        }
    }
}

pub(crate) fn check_anchor(start: usize, regions: &[Region]) -> Result<()> {
    if regions.is_empty() {
        return Err(KmerError::EmptyPrg);
    }
    if start >= regions.len() {
        return Err(KmerError::AnchorOutOfRange {
            index: start,
            len: regions.len(),
        });
    }
    Ok(())
}

///
/// Count how many regions past `start` are admitted in one direction.
///
/// A region is admitted while the extent accumulated by the regions before it
/// is still under `max_base_distance`; its own extent never gates it. The walk
/// stops at the first region that fails, so the admitted regions always form
/// a contiguous run next to the anchor.
///
fn admitted_count(
    max_base_distance: usize,
    start: usize,
    regions: &[Region],
    direction: Direction,
) -> usize {
    let mut offset = 0usize;
    let mut count = 0;
    let mut cursor = start;

    while let Some(next) = direction.step(cursor, regions.len()) {
        if offset >= max_base_distance {
            break;
        }
        offset = offset.saturating_add(regions[next].extent());
        count += 1;
        cursor = next;
    }

    count
}

/// Anchor plus both directional ranges; `start` must already be checked.
pub(crate) fn neighborhood(max_base_distance: usize, start: usize, regions: &[Region]) -> &[Region] {
    let before = admitted_count(max_base_distance, start, regions, Direction::Backward);
    let after = admitted_count(max_base_distance, start, regions, Direction::Forward);

    &regions[start - before..=start + after]
}

///
/// Regions within `max_base_distance` bases of the anchor at index `start`,
/// walking in one direction only.
///
/// The anchor itself is excluded. The result is in ascending PRG order for
/// both directions and is empty when the anchor has no neighbor on that side.
///
/// # Arguments
/// - max_base_distance: the base budget for the walk
/// - start: index of the anchor region
/// - regions: the PRG's region sequence
/// - direction: which way to walk
///
pub fn directional_region_range(
    max_base_distance: usize,
    start: usize,
    regions: &[Region],
    direction: Direction,
) -> Result<&[Region]> {
    check_anchor(start, regions)?;
    let count = admitted_count(max_base_distance, start, regions, direction);

    let range = match direction {
        Direction::Forward => &regions[start + 1..start + 1 + count],
        Direction::Backward => &regions[start - count..start],
    };
    Ok(range)
}

///
/// The backward range, the anchor, and the forward range as one ascending run
/// of regions. Each direction gets the full `max_base_distance` budget.
///
pub fn regions_within_distance(
    max_base_distance: usize,
    start: usize,
    regions: &[Region],
) -> Result<&[Region]> {
    check_anchor(start, regions)?;
    Ok(neighborhood(max_base_distance, start, regions))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn compose(structure: &[&[&str]]) -> Vec<Region> {
        structure
            .iter()
            .map(|alleles| Region::new(alleles.iter().copied()).unwrap())
            .collect()
    }

    fn alleles(range: &[Region]) -> Vec<Vec<String>> {
        range.iter().map(|r| r.alleles().to_vec()).collect()
    }

    fn expected(structure: &[&[&str]]) -> Vec<Vec<String>> {
        structure
            .iter()
            .map(|alleles| alleles.iter().map(|a| a.to_string()).collect())
            .collect()
    }

    #[rstest]
    fn test_right_edge_anchor_has_no_forward_regions() {
        let regions = compose(&[&["C"], &["G", "T"], &["A"], &["TC", "A"]]);
        let range = directional_region_range(100, 3, &regions, Direction::Forward).unwrap();
        assert!(range.is_empty());
    }

    #[rstest]
    fn test_left_edge_anchor_has_no_backward_regions() {
        let regions = compose(&[&["G", "T"], &["A"], &["TC", "A"], &["C"]]);
        let range = directional_region_range(100, 0, &regions, Direction::Backward).unwrap();
        assert!(range.is_empty());
    }

    #[rstest]
    fn test_backward_range_is_ascending() {
        let regions = compose(&[&["C", "G"], &["G"], &["A", "T"], &["CCCCCCCC"], &["GC", "TC"]]);
        let range = directional_region_range(2, 2, &regions, Direction::Backward).unwrap();
        assert_eq!(alleles(range), expected(&[&["C", "G"], &["G"]]));
    }

    #[rstest]
    fn test_forward_range_is_ascending() {
        let regions = compose(&[
            &["G"],
            &["GC", "TC"],
            &["C"],
            &["A", "T"],
            &["G"],
            &["C", "G"],
        ]);
        let range = directional_region_range(2, 3, &regions, Direction::Forward).unwrap();
        assert_eq!(alleles(range), expected(&[&["G"], &["C", "G"]]));
    }

    #[rstest]
    fn test_zero_budget_admits_nothing() {
        let regions = compose(&[&["A"], &["C", "G"], &["T"]]);
        for direction in [Direction::Forward, Direction::Backward] {
            let range = directional_region_range(0, 1, &regions, direction).unwrap();
            assert!(range.is_empty());
        }
    }

    #[rstest]
    fn test_walk_stops_at_first_excluded_region() {
        // the third neighbor is tiny but comes after the budget is spent
        let regions = compose(&[&["A", "C"], &["GGGG"], &["T"], &["A"]]);
        let range = directional_region_range(3, 0, &regions, Direction::Forward).unwrap();
        assert_eq!(alleles(range), expected(&[&["GGGG"]]));
    }

    #[rstest]
    #[case::distance_excludes_last_region(
        vec![vec!["A", "C"], vec!["CC"], vec!["G", "T"]], 0, 1,
        vec![vec!["A", "C"], vec!["CC"]],
    )]
    #[case::anchor_extent_ignored(
        vec![vec!["AAAAAAA", "CCCCC"], vec!["CC"], vec!["G", "T"]], 0, 2,
        vec![vec!["AAAAAAA", "CCCCC"], vec!["CC"]],
    )]
    #[case::large_edge_region_in_range(
        vec![vec!["G"], vec!["A", "T"], vec!["CC"], vec!["GGGGGGGG", "T"]], 1, 3,
        vec![vec!["G"], vec!["A", "T"], vec!["CC"], vec!["GGGGGGGG", "T"]],
    )]
    #[case::short_distance_excludes_both_sides(
        vec![vec!["C", "G"], vec!["G"], vec!["A", "T"], vec!["CC"], vec!["GC", "TC"]], 2, 1,
        vec![vec!["G"], vec!["A", "T"], vec!["CC"]],
    )]
    #[case::large_forward_region_ends_walk(
        vec![vec!["C", "G"], vec!["G"], vec!["A", "T"], vec!["CCCCCCCC"], vec!["GC", "TC"]], 2, 2,
        vec![vec!["C", "G"], vec!["G"], vec!["A", "T"], vec!["CCCCCCCC"]],
    )]
    #[case::large_backward_region_ends_walk(
        vec![
            vec!["T", "A"],
            vec!["CCCCCCCC"],
            vec!["C", "G"],
            vec!["G"],
            vec!["A", "T"],
            vec!["GGGGGGG"],
        ],
        4, 2,
        vec![vec!["C", "G"], vec!["G"], vec!["A", "T"], vec!["GGGGGGG"]],
    )]
    fn test_regions_within_distance(
        #[case] structure: Vec<Vec<&str>>,
        #[case] start: usize,
        #[case] max_base_distance: usize,
        #[case] want: Vec<Vec<&str>>,
    ) {
        let structure: Vec<&[&str]> = structure.iter().map(Vec::as_slice).collect();
        let want: Vec<&[&str]> = want.iter().map(Vec::as_slice).collect();

        let regions = compose(&structure);
        let range = regions_within_distance(max_base_distance, start, &regions).unwrap();
        assert_eq!(alleles(range), expected(&want));
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(4)]
    fn test_combined_range_is_backward_anchor_forward(#[case] start: usize) {
        let regions = compose(&[&["C", "G"], &["G"], &["A", "T"], &["CC"], &["GC", "TC"]]);

        let backward = directional_region_range(2, start, &regions, Direction::Backward).unwrap();
        let forward = directional_region_range(2, start, &regions, Direction::Forward).unwrap();
        let combined = regions_within_distance(2, start, &regions).unwrap();

        let mut concatenated: Vec<Region> = backward.to_vec();
        concatenated.push(regions[start].clone());
        concatenated.extend_from_slice(forward);

        assert_eq!(combined.to_vec(), concatenated);
    }

    #[rstest]
    fn test_anchor_out_of_range() {
        let regions = compose(&[&["A"], &["C", "G"]]);
        let result = regions_within_distance(5, 2, &regions);
        assert!(matches!(
            result,
            Err(KmerError::AnchorOutOfRange { index: 2, len: 2 })
        ));
    }

    #[rstest]
    fn test_empty_regions_rejected() {
        let result = directional_region_range(5, 0, &[], Direction::Forward);
        assert!(matches!(result, Err(KmerError::EmptyPrg)));
    }
}
