//! Streaming Token Statistics Analyser
//!

pub mod analysis;
pub mod cli;
pub mod errors;
pub mod plot;
pub mod processor;
pub mod types;
pub mod utils;
