//! Convenience helpers for the command handler.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use cardstats::read_decklist;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Read the decklist from `path`, or from stdin when it is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    Ok(read_decklist(path)?)
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Seeded RNG when a seed is given, otherwise one seeded from OS entropy.
pub fn sample_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
