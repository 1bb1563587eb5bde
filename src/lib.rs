//! Decklist statistics: section totals, mana curve and sample hands.

mod config;
mod decklist;
mod entry;
mod mana;
mod normalize;
mod report;
mod sample;
mod section;
mod tally;

pub use config::{AnalysisConfig, ConfigError, Variant};
pub use decklist::{DeckLine, Decklist, DecklistError, read_decklist};
pub use entry::CardEntry;
pub use mana::{ManaCost, converted_mana_cost, mana_cost_token};
pub use normalize::{CommentSyntax, normalize_lines};
pub use report::{
    CurvePoint, DrawRecord, Report, SectionShare, Summary, TARGET_DECK_SIZE, format_percent,
    render_mana_curve, totals_line,
};
pub use sample::{Draw, DrawLabel, HAND_SIZE, SAMPLE_DEPTH, sample_hand};
pub use section::{Classification, Section, SectionClassifier};
pub use tally::{CardPool, CmcCounter, DeckTally, SectionCounter};

use log::info;

/// Parsed and aggregated decklist, ready to render.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub config: AnalysisConfig,
    pub decklist: Decklist,
    pub tally: DeckTally,
}

/// Run the parse and aggregation pass over the whole input text.
pub fn analyze(text: &str, config: AnalysisConfig) -> Analysis {
    let decklist = Decklist::parse(text, &config);
    let tally = DeckTally::from_decklist(&decklist, config.render_mana_curve);
    info!(
        "parsed {} entries, {} cards",
        decklist.entries().count(),
        tally.total()
    );
    Analysis {
        config,
        decklist,
        tally,
    }
}
