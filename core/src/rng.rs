//! Randomness sources for reward selection.
//!
//! RULE: The resolver never constructs its own generator.
//! Every draw flows through a RewardRng handed in at construction, so
//! tests can script the picks and production can seed once per process.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The one capability the resolver needs: a uniform index into a list.
pub trait RewardRng: Send {
    /// Pick an index in [0, len). Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// PCG-backed uniform generator. Not cryptographic; reward picks are
/// not security-sensitive.
pub struct SeededRewardRng {
    inner: Pcg64Mcg,
}

impl SeededRewardRng {
    /// Reproducible stream from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self { inner: Pcg64Mcg::seed_from_u64(seed) }
    }

    /// Seed from OS entropy. Call once at startup, not per resolution.
    pub fn from_entropy() -> Self {
        Self { inner: Pcg64Mcg::from_entropy() }
    }

    /// Derive an independent stream for another worker. Two forks with
    /// different `stream` values never share a seed.
    pub fn fork(&mut self, stream: u64) -> Self {
        use rand::RngCore;
        let derived_seed = self.inner.next_u64() ^ stream.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self::new(derived_seed)
    }
}

impl RewardRng for SeededRewardRng {
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "len must be > 0");
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping around when exhausted.
/// Each scripted value is reduced modulo the list length so a script
/// can be reused against lists of different sizes.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(script: Vec<usize>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self { script, cursor: 0 }
    }

    /// Always picks the same index.
    pub fn constant(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl RewardRng for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "len must be > 0");
        let raw = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        raw % len
    }
}

impl<R: RewardRng + ?Sized> RewardRng for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
