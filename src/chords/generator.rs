//! Random chord generation.
//!
//! Roots and suffixes are filtered by the [`Settings`] toggles and then drawn
//! independently and uniformly, one root and one suffix per chord.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::settings::{Settings, Toggle};

pub const FLAT: char = '♭';
pub const SHARP: char = '♯';

/// One spelling per pitch class.
pub const ROOTS: [&str; 12] = [
    "C", "C♯", "D", "E♭", "E", "F", "F♯", "G", "A♭", "A", "B♭", "B",
];

/// Source of uniformly distributed indices.
pub trait IndexSource {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into an [`IndexSource`].
pub struct RngIndexSource<R>(pub R);

impl<R: Rng> IndexSource for RngIndexSource<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        self.0.random_range(0..upper)
    }
}

pub fn natural_roots() -> Vec<&'static str> {
    ROOTS
        .iter()
        .copied()
        .filter(|root| !root.contains(FLAT) && !root.contains(SHARP))
        .collect()
}

/// Roots allowed by the accidental toggles, never empty.
pub fn root_vocabulary(settings: &Settings) -> Vec<&'static str> {
    let roots: Vec<&'static str> = ROOTS
        .iter()
        .copied()
        .filter(|root| settings.include_flats() || !root.contains(FLAT))
        .filter(|root| settings.include_sharps() || !root.contains(SHARP))
        .collect();
    if roots.is_empty() {
        return natural_roots();
    }
    roots
}

/// Suffixes of the enabled qualities, or a lone `""` when none is enabled.
pub fn suffix_vocabulary(settings: &Settings) -> Vec<&'static str> {
    let suffixes: Vec<&'static str> = Toggle::qualities()
        .filter(|toggle| settings.is_on(*toggle))
        .filter_map(Toggle::suffix)
        .collect();
    if suffixes.is_empty() {
        return vec![""];
    }
    suffixes
}

/// Draws `settings.count` chords from `source`, in draw order.
pub fn sample_chords<S: IndexSource + ?Sized>(
    settings: &Settings,
    source: &mut S,
) -> Vec<String> {
    let roots = root_vocabulary(settings);
    let suffixes = suffix_vocabulary(settings);
    debug!(
        "Drawing {} chords from {} roots and {} suffixes",
        settings.count,
        roots.len(),
        suffixes.len()
    );

    let mut root_draws = vec![0usize; roots.len()];
    let mut chords = Vec::with_capacity(settings.count);
    for _ in 0..settings.count {
        let root_index = source.next_index(roots.len());
        root_draws[root_index] += 1;
        let suffix = suffixes[source.next_index(suffixes.len())];
        chords.push(format!("{}{}", roots[root_index], suffix));
    }

    for (root, draws) in roots.iter().zip(root_draws.iter()) {
        trace!("{:>3} {}", draws, root);
    }
    chords
}

enum RandomSource {
    Thread,
    Seeded(Mutex<StdRng>),
}

/// Process-wide chord generator, shared between requests.
///
/// Unseeded generators use the thread-local RNG and need no locking. A seeded
/// one keeps a single `StdRng` behind a mutex so runs are reproducible.
pub struct ChordGenerator {
    source: RandomSource,
}

impl Default for ChordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordGenerator {
    pub fn new() -> Self {
        ChordGenerator {
            source: RandomSource::Thread,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        ChordGenerator {
            source: RandomSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self.source, RandomSource::Seeded(_))
    }

    pub fn generate(&self, settings: &Settings) -> Vec<String> {
        match &self.source {
            RandomSource::Thread => sample_chords(settings, &mut RngIndexSource(rand::rng())),
            RandomSource::Seeded(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                sample_chords(settings, &mut RngIndexSource(&mut *rng))
            }
        }
    }
}
