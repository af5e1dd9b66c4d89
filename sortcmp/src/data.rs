//! Input-array generation for the comparison driver.

use anyhow::{Result, bail};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Random,
    Sorted,
    Reversed,
    Dups,
}

impl Pattern {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "random" => Ok(Pattern::Random),
            "sorted" => Ok(Pattern::Sorted),
            "reversed" => Ok(Pattern::Reversed),
            "dups" => Ok(Pattern::Dups),
            _ => bail!(
                "unknown pattern {:?} (expected random, sorted, reversed or dups)",
                name
            ),
        }
    }
}

/// Generate one trial array of the requested distribution.
pub fn generate<R: Rng>(rng: &mut R, n: usize, pattern: Pattern) -> Vec<i64> {
    match pattern {
        Pattern::Random => (0..n)
            .map(|_| rng.gen_range(-1_000_000..=1_000_000))
            .collect(),
        Pattern::Sorted => (0..n as i64).collect(),
        Pattern::Reversed => (0..n as i64).rev().collect(),
        Pattern::Dups => (0..n).map(|_| rng.gen_range(0..10)).collect(),
    }
}
