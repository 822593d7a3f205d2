//! Deterministic fraction generator for daily boards
//!
//! Reproduces the published layout sequence: the sine of an incrementing
//! counter, scaled and reduced to its fractional part. Every date must
//! keep producing the same seven blockers, so the arithmetic is part of
//! the compatibility contract and lives here rather than behind a
//! general-purpose RNG.

/// Deterministic generator producing fractions in [0, 1)
#[derive(Clone, Debug)]
pub struct DailyRng {
    counter: f64,
}

impl DailyRng {
    /// Create a generator keyed by an integer seed
    pub const fn new(seed: u32) -> Self {
        Self {
            counter: seed as f64,
        }
    }

    /// Next fraction in [0, 1)
    ///
    /// Takes sin(counter) * 10000 and keeps the fractional part, then
    /// advances the counter by one.
    pub fn next_fraction(&mut self) -> f64 {
        let x = self.counter.sin() * 10_000.0;
        self.counter += 1.0;
        x - x.floor()
    }

    /// Integer draw in [min, max)
    pub fn rand_int(&mut self, min: u32, max: u32) -> u32 {
        let range = f64::from(max) - f64::from(min);
        let value = (f64::from(min) + self.next_fraction() * range).floor();
        value as u32
    }
}
