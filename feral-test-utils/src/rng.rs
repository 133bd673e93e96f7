use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use feral_prng::{
    BattleRng,
    LinearCongruentialRng,
};

/// A controlled random number generator, for tests that need fine-grained
/// control over battle RNG.
///
/// Individual draws in the sequence can be replaced with fake values. The
/// underlying generator still advances on every draw, so unfaked draws stay
/// consistent with the seed.
pub struct ControlledBattleRng {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: LinearCongruentialRng,
}

impl ControlledBattleRng {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: LinearCongruentialRng::new(seed),
        }
    }

    /// The number of draws consumed so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    /// Replaces the `count`-th draw (1-based) with the given value.
    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    /// Replaces multiple draws with fake values.
    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }

    /// Replaces the next `values.len()` draws with the given values.
    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = u64>,
    {
        let start = self.count + 1;
        for (offset, value) in iterable.into_iter().enumerate() {
            self.fake_values.insert(start + offset, value);
        }
    }
}

impl BattleRng for ControlledBattleRng {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Roll the underlying RNG to keep the sequence consistent, even if
        // the value is replaced.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(entry) => entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
