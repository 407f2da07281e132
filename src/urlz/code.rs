//! # Short Code Allocation
//!
//! Codes are [`CODE_LENGTH`] characters, each drawn uniformly and
//! independently from [`ALPHABET`]. With 62^6 possible codes a collision is
//! rare, so allocation simply retries until it finds a code the
//! [`RecordSet`] does not already hold.
//!
//! The generator is generic over its random source. The CLI uses a `StdRng`
//! seeded once from the clock at startup; tests pass a fixed seed.

use crate::model::RecordSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const CODE_LENGTH: usize = 6;

pub struct ShortCodeGenerator<R: Rng> {
    rng: R,
}

impl ShortCodeGenerator<StdRng> {
    /// Seeds the generator from the current time.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(seed)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShortCodeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A fresh random code, not checked against any store.
    pub fn generate(&mut self) -> String {
        (0..CODE_LENGTH)
            .map(|_| ALPHABET[self.rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }

    /// A code that no mapping in `records` currently uses.
    pub fn allocate(&mut self, records: &RecordSet) -> String {
        let mut collisions = 0usize;
        loop {
            let code = self.generate();
            if !records.contains_short(&code) {
                if collisions > 0 {
                    debug!(code = %code, collisions, "allocated short code after collisions");
                }
                return code;
            }
            collisions += 1;
            debug!(code = %code, "short code collision, retrying");
        }
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
