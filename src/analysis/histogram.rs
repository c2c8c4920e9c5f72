//! Equal-width histogram bucketing
//!
//! Buckets a finite sequence of values into a fixed number of contiguous,
//! equal-width ranges spanning `[min, max]` in a single pass. The value
//! range is not known ahead of time, so bucket boundaries are derived
//! from the observed extrema.

use serde::Serialize;

/// One histogram bucket: half-open `[low, high)`, except the last bucket
/// which is closed on both ends so that `max` itself is counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBucket {
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

/// A fixed-bucket-count histogram over a value sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub buckets: Vec<HistogramBucket>,
}

impl Histogram {
    /// Bucket `values` into `bucket_count` equal-width ranges
    ///
    /// Returns `None` for an empty sequence, a zero bucket count, or a
    /// zero-variance sequence (`min == max`). The degenerate constant
    /// case is deliberately not collapsed into a single bucket: doing so
    /// silently would change reported counts, so callers must handle the
    /// absence instead.
    ///
    /// Bucket width is `(max - min) / bucket_count` in IEEE f64
    /// arithmetic. A value equal to `max` can compute index
    /// `bucket_count` through rounding; the index is clamped to the last
    /// bucket, which is the only place floating-point division can leak.
    pub fn from_values(values: &[u64], bucket_count: usize) -> Option<Histogram> {
        if values.is_empty() || bucket_count == 0 {
            return None;
        }
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        if min == max {
            return None;
        }

        let width = (max - min) as f64 / bucket_count as f64;
        let mut counts = vec![0usize; bucket_count];
        for &v in values {
            let mut idx = ((v - min) as f64 / width) as usize;
            if idx >= bucket_count {
                idx = bucket_count - 1;
            }
            counts[idx] += 1;
        }

        let buckets = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBucket {
                low: min as f64 + i as f64 * width,
                high: min as f64 + (i + 1) as f64 * width,
                count,
            })
            .collect();

        Some(Histogram { buckets })
    }

    /// Largest per-bucket count, used to scale rendered bars
    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Total of all bucket counts; equals the input length by construction
    pub fn total_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}
