/// The command name for k-mer generation.
pub const KMERS_CMD: &str = "kmers";

/// Neighborhood budget used when none is configured; a typical short-read length.
pub const DEFAULT_MAX_BASE_DISTANCE: usize = 150;

/// Number of genome paths in one anchor's window above which a warning is logged.
pub const LARGE_PATH_COUNT: u128 = 1 << 16;
