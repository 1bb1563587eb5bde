use serde::Serialize;
use std::fmt;

/// Deck section a card entry is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Entries seen before the first recognized header.
    Other,
    Creatures,
    Planeswalkers,
    Instants,
    Sorceries,
    Enchantments,
    Artifacts,
    Equipment,
    Lands,
}

/// Header lookup in match order. Headers are compared case-insensitively
/// against the whole trimmed line.
const SECTION_TABLE: [(Section, &str); 8] = [
    (Section::Creatures, "creatures:"),
    (Section::Planeswalkers, "planeswalkers:"),
    (Section::Instants, "instants:"),
    (Section::Sorceries, "sorceries:"),
    (Section::Enchantments, "enchantments:"),
    (Section::Artifacts, "artifacts:"),
    (Section::Equipment, "equipment:"),
    (Section::Lands, "lands:"),
];

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Other => "other",
            Section::Creatures => "Creatures",
            Section::Planeswalkers => "Planeswalkers",
            Section::Instants => "Instants",
            Section::Sorceries => "Sorceries",
            Section::Enchantments => "Enchantments",
            Section::Artifacts => "Artifacts",
            Section::Equipment => "Equipment",
            Section::Lands => "Lands",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of feeding one normalized line to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Header for a different section; the current section changed.
    Entered(Section),
    /// Header for the section that was already current.
    Repeated(Section),
    /// Not a recognized header. Candidate card entry.
    Data,
}

/// Tracks the current section across lines.
#[derive(Debug, Clone)]
pub struct SectionClassifier {
    current: Section,
    include_sorceries: bool,
}

impl SectionClassifier {
    pub fn new(include_sorceries: bool) -> Self {
        Self {
            current: Section::Other,
            include_sorceries,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn classify(&mut self, line: &str) -> Classification {
        let Some(section) = self.lookup(line) else {
            return Classification::Data;
        };
        if section == self.current {
            return Classification::Repeated(section);
        }
        self.current = section;
        Classification::Entered(section)
    }

    fn lookup(&self, line: &str) -> Option<Section> {
        SECTION_TABLE
            .iter()
            .filter(|(section, _)| self.include_sorceries || *section != Section::Sorceries)
            .find(|(_, header)| line.eq_ignore_ascii_case(header))
            .map(|(section, _)| *section)
    }
}
