//! Random number generation for maze levels
//!
//! Uses a seeded ChaCha RNG so a `(dimension, seed)` pair always yields the
//! same maze and the same entity placement.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Level random number generator
///
/// Wraps ChaCha8Rng for reproducible generation.
/// Serialized as its seed plus the stream position, so a restored RNG picks
/// up exactly where the saved one stopped.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

#[derive(Serialize, Deserialize)]
struct RngState {
    seed: u64,
    word_pos: u128,
}

// Custom serialization - seed and position, RNG rebuilt on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RngState {
            seed: self.seed,
            word_pos: self.rng.get_word_pos(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let state = RngState::deserialize(deserializer)?;
        let mut rng = GameRng::new(state.seed);
        rng.rng.set_word_pos(state.word_pos);
        Ok(rng)
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns a value in `[min, max)`
    ///
    /// An empty or inverted range yields `min`, so a `{0, 0}` count means "none".
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Uniform index into a collection of `len` items
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }

    /// Seed a child RNG for a numbered stream (one per level)
    ///
    /// The child depends only on this RNG's seed and `stream`, not on how much
    /// of this RNG has been consumed.
    pub fn derive(&self, stream: u64) -> GameRng {
        let mut seeder = ChaCha8Rng::seed_from_u64(self.seed);
        seeder.set_stream(stream);
        GameRng::new(seeder.r#gen())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
