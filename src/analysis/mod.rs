//! Statistical analysis over aggregated corpus data
//!
//! Everything in this module is a pure function of [`CorpusStats`](crate::types::CorpusStats):
//! histogram bucketing, scalar summaries, and report formatting.

pub mod histogram;
pub mod reports;
pub mod summary;

pub use histogram::Histogram;
pub use reports::OutputFormat;
pub use summary::summarise;
