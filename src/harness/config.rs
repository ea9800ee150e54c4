use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{Datum, Hint, Operation, Requirements, Structure};
use crate::collections::contiguous::Vector;

/// Everything needed to run a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The number of data items each structure is loaded with.
    pub size: usize,
    /// The number of buckets in the hash table. Must be non-zero.
    pub hash_capacity: usize,
    /// The seed used to shuffle the synthetic data.
    pub seed: u64,
    /// The operations to time, in the order they are run.
    pub api: Vector<Operation>,
    /// The structures to time.
    pub structures: Vector<Structure>,
    /// Properties required of a suitable structure.
    pub requirements: Requirements,
    /// Preferences used to order the suitable structures.
    pub hints: Vector<Hint>,
}

impl Config {
    pub const DEFAULT_SIZE: usize = 1000;
    pub const DEFAULT_HASH_CAPACITY: usize = 5;
    pub const DEFAULT_SEED: u64 = 42;
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: Config::DEFAULT_SIZE,
            hash_capacity: Config::DEFAULT_HASH_CAPACITY,
            seed: Config::DEFAULT_SEED,
            api: Operation::ALL.into_iter().collect(),
            structures: Structure::ALL.into_iter().collect(),
            requirements: Requirements::default(),
            hints: Vector::new(),
        }
    }
}

/// Generates the values `0..size` in a random order, which is the same for every call with the
/// same `seed`.
pub fn synthetic_data(size: usize, seed: u64) -> Vector<Datum> {
    let mut data: Vector<Datum> = (0..size).collect();
    data.shuffle(&mut StdRng::seed_from_u64(seed));
    data
}
