//! # Reply Choice
//!
//! File: cli/src/engine/chooser.rs
//! Author: Christi Mahu
//!
//! The responder never calls a random number generator directly. It asks a
//! `Chooser` for an index, which lets tests pin the choice while production
//! draws uniformly.
//!
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Picks one index out of `len` candidates.
pub trait Chooser {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Returns the chosen candidate, or `""` for an empty list.
pub fn pick<'a>(chooser: &mut dyn Chooser, candidates: &[&'a str]) -> &'a str {
    if candidates.is_empty() {
        return "";
    }
    let index = chooser.choose_index(candidates.len());
    candidates.get(index).copied().unwrap_or(candidates[0])
}

/// Uniform choice backed by `StdRng`.
#[derive(Debug)]
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    /// Seeded for reproducible sessions, OS-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Chooser for RandomChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Always picks the first candidate.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FirstChooser;

#[cfg(test)]
impl Chooser for FirstChooser {
    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}
