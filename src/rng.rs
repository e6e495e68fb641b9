//! Date-seeded pseudo-random numbers.
//!
//! The generator is Mulberry32: a 32-bit state advanced by a fixed increment and
//! scrambled with a multiply-xor-shift sequence. Headline selection depends on
//! the exact floats it yields, so every step below must stay bit-for-bit as is.
//!
//! The seed is the calendar date in the publishing time zone, read as an
//! 8-digit `YYYYMMDD` integer. Every run on the same local day therefore draws
//! the same sequence, regardless of the wall-clock time of the run.

use chrono::{DateTime, Datelike, TimeZone};

/// Mulberry32 generator producing floats in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next float in `[0, 1)`. Consumes exactly one draw.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// `YYYYMMDD` of the local calendar date of `now`, e.g. `20240101`.
pub fn date_seed<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    let year = u32::try_from(now.year()).unwrap_or(0);
    year * 10_000 + now.month() * 100 + now.day()
}
