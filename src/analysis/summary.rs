//! Scalar summary derivation
//!
//! Pure reduction of aggregated corpus statistics into the summary record
//! reported to the user. No I/O, no side effects.

use crate::types::{CorpusStats, Summary};
use crate::utils::math::{safe_mean, safe_ratio};

/// Derive the scalar summary from one analysis pass
///
/// Callers guarantee a non-empty token-count sequence (the command errors
/// with `NoSamplesFound` before reaching this point); if handed an empty
/// sequence anyway, the mean is 0.0 and min/max are 0 rather than
/// panicking, consistent with the zero-division guards in
/// [`crate::utils::math`].
pub fn summarise(stats: &CorpusStats) -> Summary {
    let total_tokens: u64 = stats.token_counts.iter().sum();
    let min_tokens = stats.token_counts.iter().min().copied().unwrap_or(0);
    let max_tokens = stats.token_counts.iter().max().copied().unwrap_or(0);

    Summary {
        sample_count: stats.sample_count,
        total_tokens,
        mean_tokens: safe_mean(total_tokens, stats.token_counts.len()),
        min_tokens,
        max_tokens,
        non_ascii_ratio: safe_ratio(stats.non_ascii_chars(), stats.total_chars),
    }
}
