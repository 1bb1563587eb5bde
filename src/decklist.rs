use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::AnalysisConfig;
use crate::entry::CardEntry;
use crate::normalize::{CommentSyntax, normalize_lines};
use crate::section::{Classification, Section, SectionClassifier};

#[derive(Debug, Error)]
pub enum DecklistError {
    #[error("failed to read decklist {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a decklist file into memory.
pub fn read_decklist(path: &Path) -> Result<String, DecklistError> {
    fs::read_to_string(path).map_err(|source| DecklistError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// A meaningful line of a decklist, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckLine {
    /// A header moved parsing into a new section.
    Section(Section),
    /// A card entry counted under `section`.
    Card { section: Section, entry: CardEntry },
}

/// Parsed decklist: the ordered section transitions and card entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decklist {
    pub lines: Vec<DeckLine>,
}

impl Decklist {
    pub fn parse(text: &str, config: &AnalysisConfig) -> Self {
        let syntax = CommentSyntax::from_legacy(config.legacy_comment_syntax);
        let mut classifier = SectionClassifier::new(config.include_sorceries);
        let mut lines = Vec::new();

        for line in normalize_lines(text, syntax) {
            match classifier.classify(line) {
                Classification::Entered(section) => {
                    debug!("entering section {section}");
                    lines.push(DeckLine::Section(section));
                }
                Classification::Repeated(section) => {
                    debug!("repeated header for {section}");
                }
                Classification::Data => match CardEntry::parse(line) {
                    Some(entry) => lines.push(DeckLine::Card {
                        section: classifier.current(),
                        entry,
                    }),
                    None => debug!("skipping line: {line}"),
                },
            }
        }

        Self { lines }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Section, &CardEntry)> {
        self.lines.iter().filter_map(|line| match line {
            DeckLine::Card { section, entry } => Some((*section, entry)),
            DeckLine::Section(_) => None,
        })
    }
}
