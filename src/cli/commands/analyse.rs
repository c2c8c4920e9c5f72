use crate::analysis::reports::{format_report, parse_format, OutputFormat};
use crate::analysis::{summarise, Histogram};
use crate::errors::{AppError, AppResult};
use crate::plot::{save_distribution_plot, PlotCapability};
use crate::processor::CorpusProcessor;
use crate::types::{AnalyseConfig, AnalysisReport, DecodePolicy};
use clap::Args;
use std::path::PathBuf;

/// Default bucket count for the console histogram
const CONSOLE_BUCKET_COUNT: usize = 10;

/// Analyse a sentinel-delimited corpus file
#[derive(Args)]
pub struct AnalyseCommand {
    /// Path to the corpus file to analyse
    pub file: PathBuf,

    /// Number of buckets in the console histogram
    #[arg(long, default_value_t = CONSOLE_BUCKET_COUNT)]
    pub buckets: usize,

    /// Output format: console or json
    #[arg(long, default_value = "console")]
    pub format: String,

    /// How to handle invalid UTF-8 in the input
    #[arg(long, value_enum, default_value = "replace")]
    pub decode_policy: DecodePolicy,

    /// Treat end-of-file as an implicit sample boundary instead of
    /// dropping an unterminated trailing sample
    #[arg(long)]
    pub eof_closes_sample: bool,

    /// Skip the PNG distribution plot
    #[arg(long)]
    pub no_plot: bool,
}

impl AnalyseCommand {
    pub fn run(&self) -> AppResult<()> {
        let format = parse_format(&self.format);
        let console = matches!(format, OutputFormat::Console);

        // Capability is resolved once here and handed to the renderer;
        // `--no-plot` demotes an available backend to a skipped step.
        let detected = PlotCapability::detect();
        if console && !detected.is_available() {
            println!("⚠️  Plotting support unavailable. Visual plots will be skipped.");
        }
        let capability = if self.no_plot {
            PlotCapability::Unavailable
        } else {
            detected
        };

        if console {
            println!("--- 📊 Analysing {} ---", self.file.display());
        }

        let config = AnalyseConfig::new(&self.file)
            .decode_policy(self.decode_policy)
            .eof_closes_sample(self.eof_closes_sample);
        let stats = CorpusProcessor::new(config).process()?;

        if stats.token_counts.is_empty() {
            return Err(AppError::NoSamplesFound {
                path: self.file.clone(),
            });
        }

        let report = AnalysisReport {
            summary: summarise(&stats),
            histogram: Histogram::from_values(&stats.token_counts, self.buckets),
        };
        print!("{}", format_report(&report, &format)?);

        if console && capability.is_available() {
            println!("\n🎨 Generating plot: {}_dist.png...", self.file.display());
        }
        if save_distribution_plot(&stats.token_counts, &self.file, &capability)?.is_some()
            && console
        {
            println!("✅ Plot saved successfully.");
        }

        if console {
            println!("--- Analysis Complete ---");
        }
        Ok(())
    }
}
