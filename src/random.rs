//! Random number sources for maze generation.
//!
//! Generation never reaches for an ambient generator: every algorithm takes a `RandomSource`
//! so that a seeded `XorShiftRng` or a scripted `ReplaySource` reproduces a maze exactly.

use std::str::FromStr;

use error_chain::bail;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::errors::*;

pub trait RandomSource {
    /// Draw a uniformly distributed integer in `[0, upper)`.
    fn gen_index(&mut self, upper: usize) -> Result<usize>;
}

/// Any `rand` generator is a source whose draws cannot fail.
impl<R: Rng> RandomSource for R {
    fn gen_index(&mut self, upper: usize) -> Result<usize> {
        if upper == 0 {
            bail!(ErrorKind::InvalidRandomRange(upper, 0));
        }
        Ok(self.gen_range(0..upper))
    }
}

/// The crate's reproducible generator.
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// A fresh seed from the thread local generator, for callers that want to log it.
pub fn entropy_seed() -> u64 {
    rand::thread_rng().gen()
}

/// Plays back a fixed script of draws.
///
/// Fails when the script runs out or when a scripted value is outside the requested range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySource {
    draws: Vec<usize>,
    position: usize,
}

impl ReplaySource {
    pub fn new(draws: Vec<usize>) -> ReplaySource {
        ReplaySource { draws, position: 0 }
    }

    /// The script that leaves `shuffles` consecutive shuffles of `length` items in their
    /// original order: each shuffle swaps every position with itself.
    pub fn identity_shuffles(shuffles: usize, length: usize) -> ReplaySource {
        let one_shuffle = (0..length).rev().collect::<Vec<_>>();
        ReplaySource::new(one_shuffle.repeat(shuffles))
    }

    pub fn draws_made(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.draws.len() - self.position
    }
}

impl RandomSource for ReplaySource {
    fn gen_index(&mut self, upper: usize) -> Result<usize> {
        let position = self.position;
        let value = *self.draws
            .get(position)
            .ok_or_else(|| Error::from(ErrorKind::RandomSourceExhausted(position)))?;
        if value >= upper {
            bail!(ErrorKind::InvalidRandomRange(upper, value));
        }
        self.position += 1;
        Ok(value)
    }
}

/// Whitespace separated draws, e.g. `"3 2 1 0"`.
impl FromStr for ReplaySource {
    type Err = Error;

    fn from_str(s: &str) -> Result<ReplaySource> {
        let draws = s.split_whitespace()
            .map(str::parse::<usize>)
            .collect::<::std::result::Result<Vec<_>, _>>()?;
        Ok(ReplaySource::new(draws))
    }
}

/// Passes draws through from another source and keeps a copy of each one.
#[derive(Debug)]
pub struct RecordingSource<R> {
    inner: R,
    recorded: Vec<usize>,
}

impl<R: RandomSource> RecordingSource<R> {
    pub fn new(inner: R) -> RecordingSource<R> {
        RecordingSource { inner, recorded: vec![] }
    }

    pub fn recorded(&self) -> &[usize] {
        &self.recorded
    }

    /// A source that replays everything drawn so far.
    pub fn to_replay(&self) -> ReplaySource {
        ReplaySource::new(self.recorded.clone())
    }
}

impl<R: RandomSource> RandomSource for RecordingSource<R> {
    fn gen_index(&mut self, upper: usize) -> Result<usize> {
        let value = self.inner.gen_index(upper)?;
        self.recorded.push(value);
        Ok(value)
    }
}
