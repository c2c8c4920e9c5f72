//! Sample delimiter and aggregator
//!
//! Streams the corpus line by line, accumulating a running token count per
//! sample and a character-frequency table over every non-sentinel line.
//! Memory is bounded by the number of samples (one `u64` each) plus the
//! number of distinct characters; the raw file is never held in memory.

use crate::errors::{AppError, AppResult};
use crate::types::{AnalyseConfig, CorpusStats, DecodePolicy, SAMPLE_SENTINEL};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use tracing::info;

/// Streaming processor for sentinel-delimited corpora
pub struct CorpusProcessor {
    config: AnalyseConfig,
}

impl CorpusProcessor {
    /// Create a new corpus processor
    pub fn new(config: AnalyseConfig) -> Self {
        info!("Corpus processor initialised");
        info!("Source corpus: {}", config.corpus_path.display());
        info!("Decode policy: {:?}", config.decode_policy);

        Self { config }
    }

    /// Run a single pass over the corpus and aggregate statistics
    ///
    /// A line whose whitespace-trimmed content equals the sentinel closes
    /// the current sample: a positive running token count is recorded and
    /// the counter resets. Sentinel lines contribute nothing to the
    /// character table. Every other line adds its whitespace-separated
    /// field count to the running sample and every character of the
    /// untrimmed line (terminator included) to the character table.
    ///
    /// A trailing sample that never reaches a sentinel is dropped unless
    /// `eof_closes_sample` is set. This mirrors the upstream pipeline's
    /// behaviour and is a documented limitation, not an oversight.
    pub fn process(&self) -> AppResult<CorpusStats> {
        let file = File::open(&self.config.corpus_path).map_err(|source| {
            AppError::FileUnavailable {
                path: self.config.corpus_path.clone(),
                source,
            }
        })?;
        let mut reader = BufReader::with_capacity(8 * 1024 * 1024, file); // 8MB buffer

        let mut stats = CorpusStats::default();
        let mut current_tokens = 0u64;
        let mut line_number = 0u64;
        let mut raw_line = Vec::new();

        loop {
            raw_line.clear();
            let bytes_read = reader.read_until(b'\n', &mut raw_line)?;
            if bytes_read == 0 {
                break;
            }
            line_number += 1;

            let line = decode_line(&raw_line, self.config.decode_policy, line_number)?;
            let trimmed = line.trim();

            if trimmed == SAMPLE_SENTINEL {
                if current_tokens > 0 {
                    stats.token_counts.push(current_tokens);
                    stats.sample_count += 1;
                }
                current_tokens = 0;
                continue;
            }

            current_tokens += trimmed.split_whitespace().count() as u64;
            for ch in line.chars() {
                *stats.char_frequencies.entry(ch).or_insert(0) += 1;
            }
            stats.total_chars += line.chars().count() as u64;
        }

        if self.config.eof_closes_sample && current_tokens > 0 {
            stats.token_counts.push(current_tokens);
            stats.sample_count += 1;
        }

        info!(
            "Processed {} lines: {} samples, {} chars",
            line_number, stats.sample_count, stats.total_chars
        );

        Ok(stats)
    }
}

/// Decode one raw line according to the configured policy
fn decode_line(raw: &[u8], policy: DecodePolicy, line_number: u64) -> AppResult<Cow<'_, str>> {
    match policy {
        DecodePolicy::Replace => Ok(String::from_utf8_lossy(raw)),
        DecodePolicy::Strict => match std::str::from_utf8(raw) {
            Ok(s) => Ok(Cow::Borrowed(s)),
            Err(e) => Err(AppError::InvalidEncoding {
                line: line_number,
                reason: e.to_string(),
            }),
        },
    }
}
