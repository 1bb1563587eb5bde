use rand::Rng;
use std::fmt;

use crate::tally::CardPool;

/// Cards in the opening hand.
pub const HAND_SIZE: usize = 7;
/// Opening hand plus eleven draw steps.
pub const SAMPLE_DEPTH: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawLabel {
    Hand,
    /// 1-based draw step after the opening hand.
    Turn(usize),
}

impl fmt::Display for DrawLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawLabel::Hand => write!(f, "H"),
            DrawLabel::Turn(n) => write!(f, "T{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub label: DrawLabel,
    pub card: String,
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.card)
    }
}

/// Deal the first [`SAMPLE_DEPTH`] cards of a uniformly shuffled `pool`.
///
/// Cards are drawn one at a time without replacement from a copy of the run
/// counts, which yields the same distribution as shuffling every copy and
/// taking the prefix, without expanding the pool.
pub fn sample_hand<R: Rng + ?Sized>(pool: &CardPool, rng: &mut R) -> Vec<Draw> {
    let mut remaining: Vec<u64> = pool.runs().iter().map(|(_, copies)| *copies).collect();
    let mut left = pool.len();
    let mut draws = Vec::new();

    while draws.len() < SAMPLE_DEPTH && left > 0 {
        let mut pick = rng.gen_range(0..left);
        let Some(run) = remaining.iter().position(|&copies| {
            if pick < copies {
                true
            } else {
                pick -= copies;
                false
            }
        }) else {
            break;
        };
        remaining[run] -= 1;
        left -= 1;

        let i = draws.len();
        draws.push(Draw {
            label: if i < HAND_SIZE {
                DrawLabel::Hand
            } else {
                DrawLabel::Turn(i - HAND_SIZE + 1)
            },
            card: pool.runs()[run].0.clone(),
        });
    }
    draws
}
