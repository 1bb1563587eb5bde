//! Command-line interface wiring for the `cardstats` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cardstats::{AnalysisConfig, Report, Variant, analyze};
use clap::Parser;
use log::info;

pub mod common;
pub mod utils;

use common::{OutputFormat, VariantArg};
use utils::{read_input, sample_rng};

const DEFAULT_DECKLIST: &str = "standard_ru_copy_spell.mtg";

/// Parsed CLI entrypoint for the `cardstats` binary.
#[derive(Parser, Debug)]
#[command(
    name = "cardstats",
    version,
    about = "Section totals, mana curve and a sample hand for a decklist"
)]
pub struct Cli {
    /// Decklist file (`-` reads stdin).
    #[arg(default_value = DEFAULT_DECKLIST)]
    pub file: PathBuf,

    /// Report preset.
    #[arg(long, default_value_t = VariantArg::Full, value_enum)]
    pub variant: VariantArg,

    /// JSON file with analysis settings; replaces the preset.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not compute or draw the mana curve.
    #[arg(long)]
    pub no_curve: bool,

    /// Do not draw a sample hand.
    #[arg(long)]
    pub no_hand: bool,

    /// Treat `Sorceries:` as an ordinary line.
    #[arg(long)]
    pub no_sorceries: bool,

    /// Also treat lines starting with `/` as comments.
    #[arg(long)]
    pub legacy_comments: bool,

    /// Seed for the sample hand shuffle.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, default_value_t = OutputFormat::Text, value_enum)]
    pub format: OutputFormat,
}

impl Cli {
    /// Preset or config file, then individual flag overrides.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::load(path)?,
            None => Variant::from(self.variant).config(),
        };
        if self.no_curve {
            config.render_mana_curve = false;
        }
        if self.no_hand {
            config.render_sample_hand = false;
        }
        if self.no_sorceries {
            config.include_sorceries = false;
        }
        if self.legacy_comments {
            config.legacy_comment_syntax = true;
        }
        Ok(config)
    }
}

/// Execute the analysis and print the report to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.analysis_config()?;
    info!("reading {} with {:?}", cli.file.display(), config);
    let text = read_input(&cli.file)?;

    let analysis = analyze(&text, config);
    let mut rng = sample_rng(cli.seed);
    let report = Report::new(&analysis, &mut rng);

    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.summary())
                .context("failed to serialize summary")?;
            println!("{json}");
        }
    }
    Ok(())
}
