use log::warn;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)x(.+)").expect("static regex must compile"));

/// One `<count>x <name>` line of a decklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub count: u64,
    pub name: String,
}

impl CardEntry {
    /// Parse a normalized line. Returns `None` for rules text, flavor text
    /// and anything else that is not a card count line.
    ///
    /// The count and the `x` must be adjacent (`4x Shock`, `4xShock`); a zero
    /// count or a name that is empty after trimming is not an entry. Counts
    /// beyond `u64::MAX` are clamped to it.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = ENTRY_RE.captures(line)?;
        // The capture is ASCII digits only, so overflow is the sole failure.
        let count: u64 = caps[1].parse().unwrap_or_else(|_| {
            warn!("count in {line:?} exceeds {}, clamping", u64::MAX);
            u64::MAX
        });
        let name = caps[2].trim();
        if count == 0 || name.is_empty() {
            return None;
        }
        Some(Self {
            count,
            name: name.to_string(),
        })
    }
}

impl fmt::Display for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {}", self.count, self.name)
    }
}
