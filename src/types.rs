//! Core data model for the corpus analysis pipeline
//!
//! A corpus is a text file of whitespace-tokenised lines in which samples
//! are delimited by sentinel lines. The processor reduces the file to a
//! [`CorpusStats`] value; everything downstream (summary, histogram,
//! report, plot) is a pure function of it.

use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Marker line delimiting samples in the corpus
pub const SAMPLE_SENTINEL: &str = "<eos>";

/// How invalid UTF-8 byte sequences are handled while reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DecodePolicy {
    /// Substitute invalid sequences with U+FFFD and keep going
    #[default]
    Replace,
    /// Abort the analysis on the first invalid sequence
    Strict,
}

/// Configuration for a single analysis pass
#[derive(Debug, Clone)]
pub struct AnalyseConfig {
    pub corpus_path: PathBuf,
    pub decode_policy: DecodePolicy,
    /// Treat end-of-file as an implicit sentinel, closing the final sample.
    /// Off by default: an unterminated trailing sample is dropped.
    pub eof_closes_sample: bool,
}

impl AnalyseConfig {
    pub fn new<P: Into<PathBuf>>(corpus_path: P) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            decode_policy: DecodePolicy::default(),
            eof_closes_sample: false,
        }
    }

    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    pub fn eof_closes_sample(mut self, enabled: bool) -> Self {
        self.eof_closes_sample = enabled;
        self
    }
}

/// Aggregated output of one streaming pass over a corpus
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    /// Per-sample token counts, in order of appearance. Every element is
    /// positive: samples that close with zero accumulated tokens are
    /// discarded at the boundary.
    pub token_counts: Vec<u64>,
    /// Occurrences of every character read from non-sentinel lines,
    /// terminators included.
    pub char_frequencies: HashMap<char, u64>,
    /// Running total of characters read; always equals the sum of
    /// `char_frequencies` counts.
    pub total_chars: u64,
    /// Number of sentinels that closed a non-empty sample
    pub sample_count: usize,
}

impl CorpusStats {
    /// Total characters with a code point above 127
    pub fn non_ascii_chars(&self) -> u64 {
        self.char_frequencies
            .iter()
            .filter(|(c, _)| **c as u32 > 127)
            .map(|(_, count)| *count)
            .sum()
    }
}

/// Derived scalar summary of an analysis pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub sample_count: usize,
    pub total_tokens: u64,
    pub mean_tokens: f64,
    pub min_tokens: u64,
    pub max_tokens: u64,
    /// Fraction (0.0 to 1.0) of characters read whose code point exceeds
    /// 127; a coarse data-quality signal.
    pub non_ascii_ratio: f64,
}

/// Complete analysis result handed to the report formatters
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    /// Absent for empty or constant token-count sequences
    pub histogram: Option<crate::analysis::histogram::Histogram>,
}
