use log::{debug, trace};

use crate::entry::{self, PoolEntry};
use crate::error::PoolError;
use crate::source::{RandomSource, ThreadSource};
use crate::uniform::range;

/// Construction options for a [`WeightedPool`].
///
/// Defaults: no values, independent picking, and the thread-local generator as
/// the random source.
#[derive(Clone)]
pub struct PoolOptions<V, S = ThreadSource> {
    values: Vec<PoolEntry<V>>,
    dependent: bool,
    source: S,
}

impl<V> PoolOptions<V> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            dependent: false,
            source: ThreadSource::default(),
        }
    }
}

impl<V> Default for PoolOptions<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> PoolOptions<V, S> {
    /// Initial entries. They also become the snapshot that [`WeightedPool::reset`]
    /// restores.
    pub fn values<I, E>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<PoolEntry<V>>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Remove picked entries from the pool.
    pub fn dependent(mut self, dependent: bool) -> Self {
        self.dependent = dependent;
        self
    }

    /// Replace the random source, e.g. with a seeded generator or a constant
    /// closure for reproducible picks.
    pub fn random_source<T: RandomSource>(self, source: T) -> PoolOptions<V, T> {
        PoolOptions {
            values: self.values,
            dependent: self.dependent,
            source,
        }
    }

    pub fn build(self) -> WeightedPool<V, S>
    where
        V: Clone,
        S: RandomSource,
    {
        let mut pool = WeightedPool {
            base: self.values,
            entries: Vec::new(),
            total_weight: 0.0,
            dependent: self.dependent,
            source: self.source,
        };
        pool.reset();
        pool
    }
}

/// A pool of weighted values that hands out one value per [`pick`](Self::pick).
///
/// Every entry is chosen with probability `weight / total_weight`. In
/// *dependent* mode a picked entry leaves the pool, so repeated picks draw
/// without replacement until the pool is exhausted; [`reset`](Self::reset)
/// brings back the original composition.
///
/// Selection is a linear scan over the entries in insertion order, so a given
/// draw always maps to the same entry for a given composition. Plug a constant
/// or scripted closure in as the source to make picks fully reproducible.
///
/// ```rust,ignore
/// use weighted_pool::{PoolOptions, WeightedPool};
///
/// let mut pool = PoolOptions::new()
///     .values([("A", 2.0), ("B", 3.0), ("C", 4.0)])
///     .dependent(true)
///     .random_source(|| 0.5)
///     .build();
///
/// assert_eq!(pool.pick(), Ok("B"));
/// assert_eq!(pool.pick(), Ok("C"));
/// assert_eq!(pool.pick(), Ok("A"));
/// assert!(pool.pick().is_err());
/// ```
#[derive(Clone)]
pub struct WeightedPool<V, S = ThreadSource> {
    base: Vec<PoolEntry<V>>,
    entries: Vec<PoolEntry<V>>,
    total_weight: f64,
    dependent: bool,
    source: S,
}

impl<V: Clone> WeightedPool<V> {
    /// Independent pool over `values`, drawing from the thread-local generator.
    pub fn new<I, E>(values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<PoolEntry<V>>,
    {
        PoolOptions::new().values(values).build()
    }

    /// Build from any `(value, weight)` iterator.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, f64)>,
    {
        Self::new(pairs)
    }

    /// Dependent pool over `values`: every pick removes the picked entry.
    pub fn dependent<I, E>(values: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<PoolEntry<V>>,
    {
        PoolOptions::new().values(values).dependent(true).build()
    }
}

impl<V: Clone, S: RandomSource> WeightedPool<V, S> {
    /// Replace both the working entries and the reset snapshot.
    pub fn update<I, E>(&mut self, values: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<PoolEntry<V>>,
    {
        self.base = values.into_iter().map(Into::into).collect();
        self.reset();
    }

    /// Undo every pick and removal since construction or the last `update`.
    pub fn reset(&mut self) {
        self.entries = self.base.clone();
        self.total_weight = entry::total_weight(&self.entries);
        debug!(
            "pool reset: {} entries, total weight {}",
            self.entries.len(),
            self.total_weight
        );
    }

    /// Pick one value with probability proportional to its weight.
    ///
    /// In dependent mode the picked entry is removed and its weight subtracted
    /// from the total.
    ///
    /// # Errors
    /// [`PoolError::Exhausted`] if the pool has no entries or no weight left.
    /// Retrying does not help; refill with [`reset`](Self::reset) or
    /// [`update`](Self::update).
    pub fn pick(&mut self) -> Result<V, PoolError> {
        if self.entries.is_empty() || self.total_weight == 0.0 {
            debug!("pick from exhausted pool");
            return Err(PoolError::Exhausted);
        }

        let threshold = range(0.0, self.total_weight, &mut self.source);
        let Some(index) = self
            .position_of(threshold)
            .or_else(|| self.last_weighted())
        else {
            debug!(
                "no weighted entry left among {} (total {})",
                self.entries.len(),
                self.total_weight
            );
            return Err(PoolError::Exhausted);
        };
        trace!(
            "picked entry {index} of {} (threshold {threshold}, total {})",
            self.entries.len(),
            self.total_weight
        );

        if self.dependent {
            let picked = self.entries.remove(index);
            self.total_weight -= picked.weight;
            Ok(picked.value)
        } else {
            Ok(self.entries[index].value.clone())
        }
    }

    /// First entry whose cumulative weight reaches `threshold`. A threshold
    /// sitting exactly on a boundary belongs to the earlier entry.
    fn position_of(&self, threshold: f64) -> Option<usize> {
        let mut sum = 0.0;
        self.entries.iter().position(|e| {
            sum += e.weight;
            threshold <= sum
        })
    }

    /// The running total is kept by subtraction and can drift above the real
    /// sum, pushing the threshold past the end of the scan. The overshoot
    /// belongs to the last entry that still carries weight.
    fn last_weighted(&self) -> Option<usize> {
        self.entries.iter().rposition(|e| e.weight > 0.0)
    }
}

impl<V, S> WeightedPool<V, S> {
    /// Remove the first entry whose value equals `value`.
    ///
    /// Returns whether anything was removed. The reset snapshot is untouched.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        Q: ?Sized,
        V: PartialEq<Q>,
    {
        let Some(index) = self.entries.iter().position(|e| e.value == *value) else {
            return false;
        };
        let removed = self.entries.remove(index);
        self.total_weight -= removed.weight;
        trace!(
            "removed entry {index} (weight {}), {} left",
            removed.weight,
            self.entries.len()
        );
        true
    }

    /// Number of entries currently in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the weights of the entries currently in the pool.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn is_dependent(&self) -> bool {
        self.dependent
    }

    /// Switch between dependent and independent picking. Takes effect on the
    /// next pick; entries already removed stay removed until a reset.
    pub fn set_dependent(&mut self, dependent: bool) {
        self.dependent = dependent;
    }

    /// Read-only view of the current entries, in scan order.
    pub fn entries(&self) -> &[PoolEntry<V>] {
        &self.entries
    }

    /// Read-only view of the snapshot restored by `reset`.
    pub fn base(&self) -> &[PoolEntry<V>] {
        &self.base
    }
}

impl<V: std::fmt::Debug, S> std::fmt::Debug for WeightedPool<V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedPool")
            .field("entries", &self.entries)
            .field("total_weight", &self.total_weight)
            .field("dependent", &self.dependent)
            .finish_non_exhaustive()
    }
}
