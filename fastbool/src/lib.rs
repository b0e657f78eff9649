//! Cheap random booleans.
//!
//! [`FastBoolGenerator`] owns a random engine and pulls one 64-bit word from
//! it for every 64 booleans it hands out, consuming the word from the least
//! significant bit up.
//!
//! ```
//! use fastbool::FastBoolGenerator;
//!
//! let mut coin = FastBoolGenerator::seed_from_u64(7);
//! let heads = coin.by_ref().take(1000).filter(|&b| b).count();
//! assert!(heads > 400 && heads < 600);
//! ```

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const WORD_BITS: u32 = u64::BITS;

/// Buffered bit source over any `RngCore` engine
#[derive(Debug, Clone)]
pub struct FastBoolGenerator<R = StdRng> {
    engine: R,
    bits: u64,
    remaining: u32,
}

impl FastBoolGenerator<StdRng> {
    /// Generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::from_engine(StdRng::from_os_rng())
    }

    /// Reproducible generator.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::from_engine(StdRng::seed_from_u64(seed))
    }
}

impl Default for FastBoolGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> FastBoolGenerator<R> {
    /// Wraps an existing engine. No bits are drawn until the first call.
    #[must_use]
    pub fn from_engine(engine: R) -> Self {
        Self {
            engine,
            bits: 0,
            remaining: 0,
        }
    }

    #[must_use]
    pub fn next_bool(&mut self) -> bool {
        if self.remaining == 0 {
            self.bits = self.engine.next_u64();
            self.remaining = WORD_BITS;
        }
        let bit = self.bits & 1 == 1;
        self.bits >>= 1;
        self.remaining -= 1;
        bit
    }

    /// Bits left in the buffered word before the engine is called again.
    #[must_use]
    pub fn buffered(&self) -> u32 {
        self.remaining
    }

    /// Drops any buffered bits so the next call draws a fresh word.
    pub fn discard_buffer(&mut self) {
        self.bits = 0;
        self.remaining = 0;
    }

    pub fn engine_mut(&mut self) -> &mut R {
        &mut self.engine
    }

    /// Returns the engine, discarding buffered bits.
    #[must_use]
    pub fn into_engine(self) -> R {
        self.engine
    }
}

impl<R: RngCore> Iterator for FastBoolGenerator<R> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        Some(self.next_bool())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> std::iter::FusedIterator for FastBoolGenerator<R> {}
