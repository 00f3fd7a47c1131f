//! Helpful-hint rotation shown under the preferences navigation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws allowed before a repeat is accepted
pub const MAX_HINT_ATTEMPTS: usize = 10;

/// Source of uniformly distributed hint indices
pub trait HintSource {
    /// An index in `0..count`; `count` is never zero
    fn draw(&mut self, count: u32) -> u32;
}

impl HintSource for StdRng {
    fn draw(&mut self, count: u32) -> u32 {
        self.gen_range(0..count)
    }
}

/// Pick a hint index, redrawing while it equals `previous`.
///
/// Gives up after [`MAX_HINT_ATTEMPTS`] draws and keeps the last one, so a
/// single-hint bundle (or an unlucky source) still terminates.
pub fn pick_next<S: HintSource + ?Sized>(source: &mut S, count: u32, previous: Option<u32>) -> u32 {
    let count = count.max(1);
    let mut picked = source.draw(count);
    for _ in 1..MAX_HINT_ATTEMPTS {
        if previous != Some(picked) {
            break;
        }
        picked = source.draw(count);
    }
    picked
}

/// Current hint plus the generator used to pick the next one
#[derive(Debug)]
pub struct HintRotation<S: HintSource = StdRng> {
    hint_count: u32,
    current: u32,
    source: S,
}

impl HintRotation<StdRng> {
    /// Rotation seeded from `seed`, or from OS entropy when none is given
    pub fn seeded(hint_count: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_source(hint_count, rng)
    }
}

impl<S: HintSource> HintRotation<S> {
    pub fn with_source(hint_count: u32, mut source: S) -> Self {
        let hint_count = hint_count.max(1);
        let current = pick_next(&mut source, hint_count, None);
        Self {
            hint_count,
            current,
            source,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn hint_count(&self) -> u32 {
        self.hint_count
    }

    /// Localization id of the current hint
    pub fn l10n_id(&self) -> String {
        format!("hint{}", self.current)
    }

    /// Move to a different hint when one is available
    pub fn refresh(&mut self) -> u32 {
        self.current = pick_next(&mut self.source, self.hint_count, Some(self.current));
        self.current
    }
}
