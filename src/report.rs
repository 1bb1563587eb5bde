use rand::Rng;
use serde::Serialize;
use std::fmt::Write;

use crate::Analysis;
use crate::decklist::DeckLine;
use crate::sample::{Draw, sample_hand};
use crate::section::Section;
use crate::tally::CmcCounter;

/// Deck size the totals line counts towards.
pub const TARGET_DECK_SIZE: u64 = 60;

const SEPARATOR: &str = "---";
const CURVE_MARK: char = '#';
/// Blank space left of each CMC label.
const CURVE_COL_GAP: usize = 2;
const CURVE_MIN_ROW_LABEL: usize = 3;

/// Report for one analysis, with the sample hand already drawn.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    analysis: &'a Analysis,
    sample: Vec<Draw>,
}

impl<'a> Report<'a> {
    /// Build the report. `rng` is only consulted when sample hands are enabled.
    pub fn new<R: Rng + ?Sized>(analysis: &'a Analysis, rng: &mut R) -> Self {
        let sample = if analysis.config.render_sample_hand {
            sample_hand(&analysis.tally.pool, rng)
        } else {
            Vec::new()
        };
        Self { analysis, sample }
    }

    pub fn sample(&self) -> &[Draw] {
        &self.sample
    }

    /// Plain-text report: echo, mana curve, totals, percentages, sample hand.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        render_echo(&mut out, &self.analysis.decklist.lines);
        writeln!(&mut out, "{SEPARATOR}").ok();

        let cmc = &self.analysis.tally.cmc;
        if self.analysis.config.render_mana_curve && !cmc.is_empty() {
            out.push_str(&render_mana_curve(cmc));
            writeln!(&mut out, "{SEPARATOR}").ok();
        }

        let total = self.analysis.tally.total();
        writeln!(&mut out, "{}", totals_line(total)).ok();
        if total > 0 {
            for (section, count) in self.analysis.tally.sections.iter() {
                writeln!(
                    &mut out,
                    "\t{count} {section} ({})",
                    format_percent(percent(count, total))
                )
                .ok();
            }
        }

        if !self.sample.is_empty() {
            writeln!(&mut out, "{SEPARATOR}").ok();
            for draw in &self.sample {
                writeln!(&mut out, "{draw}").ok();
            }
        }
        out
    }

    /// Machine-readable view of the same numbers.
    pub fn summary(&self) -> Summary {
        let tally = &self.analysis.tally;
        let total = tally.total();
        let sections = tally
            .sections
            .iter()
            .map(|(section, count)| SectionShare {
                section,
                count,
                percent: if total == 0 { 0.0 } else { percent(count, total) },
            })
            .collect();
        let mana_curve = match (self.analysis.config.render_mana_curve, tally.cmc.max_cmc()) {
            (true, Some(max)) => (0..=max)
                .map(|cmc| CurvePoint {
                    cmc,
                    entries: tally.cmc.get(cmc),
                })
                .collect(),
            _ => Vec::new(),
        };
        let sample_hand = self
            .sample
            .iter()
            .map(|draw| DrawRecord {
                label: draw.label.to_string(),
                card: draw.card.clone(),
            })
            .collect();

        Summary {
            total,
            cards_needed: TARGET_DECK_SIZE.saturating_sub(total),
            sections,
            mana_curve,
            sample_hand,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub total: u64,
    pub cards_needed: u64,
    pub sections: Vec<SectionShare>,
    pub mana_curve: Vec<CurvePoint>,
    pub sample_hand: Vec<DrawRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectionShare {
    pub section: Section,
    pub count: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurvePoint {
    pub cmc: u32,
    pub entries: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DrawRecord {
    pub label: String,
    pub card: String,
}

fn render_echo(out: &mut String, lines: &[DeckLine]) {
    for line in lines {
        match line {
            DeckLine::Section(section) => writeln!(out, "{section}").ok(),
            DeckLine::Card { entry, .. } => writeln!(out, "\t{entry}").ok(),
        };
    }
}

/// Vertical bar chart of entries per CMC.
///
/// Columns run from CMC 0 to the highest CMC seen, including empty ones; rows
/// run from the tallest bar down to 1. Column `c` has a mark on row `r` iff
/// `cmc[c] >= r`. Returns an empty string when nothing was counted.
///
/// Columns are as wide as the largest CMC label plus a gap, and row labels as
/// wide as the tallest count, so marks stay under their labels.
pub fn render_mana_curve(cmc: &CmcCounter) -> String {
    let Some(max_cmc) = cmc.max_cmc() else {
        return String::new();
    };
    let max_count = cmc.max_count();
    let col_width = digits(max_cmc) + CURVE_COL_GAP;
    let row_width = digits(max_count).max(CURVE_MIN_ROW_LABEL);

    let mut out = String::new();
    for row in (1..=max_count).rev() {
        let mut line = format!("{row:>row_width$} |");
        for col in 0..=max_cmc {
            let mark = if cmc.get(col) >= row { CURVE_MARK } else { ' ' };
            write!(&mut line, "{mark:>col_width$}").ok();
        }
        writeln!(&mut out, "{}", line.trim_end()).ok();
    }

    let width = col_width * (max_cmc as usize + 1);
    writeln!(&mut out, "{:row_width$} +{}", "", "-".repeat(width)).ok();
    let mut labels = " ".repeat(row_width + 2);
    for col in 0..=max_cmc {
        write!(&mut labels, "{col:>col_width$}").ok();
    }
    writeln!(&mut out, "{labels}").ok();
    out
}

fn digits(n: u32) -> usize {
    n.to_string().len()
}

/// `"<total> cards"`, plus how many are missing when short of 60.
pub fn totals_line(total: u64) -> String {
    if total < TARGET_DECK_SIZE {
        format!(
            "{total} cards ({} more cards to get to {TARGET_DECK_SIZE})",
            TARGET_DECK_SIZE - total
        )
    } else {
        format!("{total} cards")
    }
}

fn percent(count: u64, total: u64) -> f64 {
    100.0 * count as f64 / total as f64
}

/// Whole-number percentage; ties round to even.
pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}
