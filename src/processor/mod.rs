//! Streaming corpus processing
//!
//! One sequential pass over the input file: sample delimiting, token
//! counting, and character accounting with bounded memory.

pub mod corpus_processor;

pub use corpus_processor::CorpusProcessor;
