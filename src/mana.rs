//! Converted mana cost from the cost token at the end of a card name.
//!
//! Decklists write the cost as the last word of the name: an optional generic
//! digit followed by one letter per coloured symbol (`3UR`, `RU`, `R`). Names
//! that happen to end in a cost-looking word are indistinguishable from real
//! costs.

/// Generic and coloured parts of a cost token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManaCost {
    pub generic: u32,
    pub colored: u32,
}

impl ManaCost {
    /// Best-effort parse; characters outside digits and letters count for 0.
    pub fn parse(token: &str) -> Self {
        let mut cost = ManaCost::default();
        for ch in token.chars().flat_map(char::to_lowercase) {
            if let Some(value) = ch.to_digit(10) {
                cost.generic = cost.generic.saturating_add(value);
            } else if ch.is_alphabetic() {
                cost.colored = cost.colored.saturating_add(1);
            }
        }
        cost
    }

    pub fn cmc(self) -> u32 {
        self.generic.saturating_add(self.colored)
    }
}

/// Last space-separated word of `name`, or the whole name if it has no space.
pub fn mana_cost_token(name: &str) -> &str {
    name.rsplit(' ').next().unwrap_or(name)
}

pub fn converted_mana_cost(name: &str) -> u32 {
    ManaCost::parse(mana_cost_token(name)).cmc()
}
