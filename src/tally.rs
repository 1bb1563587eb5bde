use std::collections::BTreeMap;

use crate::decklist::Decklist;
use crate::mana::converted_mana_cost;
use crate::section::Section;

/// Copies per section, in the order sections first received a card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCounter {
    counts: Vec<(Section, u64)>,
}

impl SectionCounter {
    /// Saturates at `u64::MAX`.
    pub fn add(&mut self, section: Section, count: u64) {
        match self.counts.iter_mut().find(|(s, _)| *s == section) {
            Some((_, total)) => *total = total.saturating_add(count),
            None => self.counts.push((section, count)),
        }
    }

    pub fn get(&self, section: Section) -> u64 {
        self.counts
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, u64)> + '_ {
        self.counts.iter().copied()
    }

    pub fn total(&self) -> u64 {
        self.counts
            .iter()
            .fold(0u64, |sum, (_, count)| sum.saturating_add(*count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Distinct entries per converted mana cost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmcCounter {
    counts: BTreeMap<u32, u32>,
}

impl CmcCounter {
    pub fn increment(&mut self, cmc: u32) {
        let entries = self.counts.entry(cmc).or_insert(0);
        *entries = entries.saturating_add(1);
    }

    pub fn get(&self, cmc: u32) -> u32 {
        self.counts.get(&cmc).copied().unwrap_or(0)
    }

    pub fn max_cmc(&self) -> Option<u32> {
        self.counts.keys().next_back().copied()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Every physical copy in the deck, stored as `(name, copies)` runs in
/// parse order. A `4x` entry is one run of four.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPool {
    runs: Vec<(String, u64)>,
}

impl CardPool {
    pub fn push(&mut self, name: &str, copies: u64) {
        if copies > 0 {
            self.runs.push((name.to_string(), copies));
        }
    }

    pub fn runs(&self) -> &[(String, u64)] {
        &self.runs
    }

    /// Number of physical copies, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        self.runs
            .iter()
            .fold(0u64, |sum, (_, copies)| sum.saturating_add(*copies))
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// Aggregated totals of one decklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckTally {
    pub sections: SectionCounter,
    pub cmc: CmcCounter,
    pub pool: CardPool,
}

impl DeckTally {
    /// Aggregate every entry of `deck`. CMC buckets are only filled when
    /// `count_cmc` is set.
    pub fn from_decklist(deck: &Decklist, count_cmc: bool) -> Self {
        let mut tally = Self::default();
        for (section, entry) in deck.entries() {
            tally.sections.add(section, entry.count);
            if count_cmc {
                tally.cmc.increment(converted_mana_cost(&entry.name));
            }
            tally.pool.push(&entry.name, entry.count);
        }
        tally
    }

    pub fn total(&self) -> u64 {
        self.sections.total()
    }
}
