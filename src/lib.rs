//! # weighted_pool
//!
//! Weighted random picks from a pool of values, with or without putting the
//! picked value back.
//!
//! A [`WeightedPool`] holds `(value, weight)` entries and picks one value per
//! call with probability `weight / total_weight`. In **dependent** mode the
//! picked entry is removed, so successive picks draw from what is left until
//! the pool is exhausted; [`WeightedPool::reset`] restores the original
//! entries.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use weighted_pool::{PoolOptions, WeightedPool};
//!
//! # fn main() -> Result<(), weighted_pool::PoolError> {
//! // independent: the same value can come up again
//! let mut loot = WeightedPool::new([
//!     ("common", 60.0),
//!     ("uncommon", 30.0),
//!     ("rare", 9.0),
//!     ("legendary", 1.0),
//! ]);
//! println!("you got: {}", loot.pick()?);
//!
//! // dependent: deal three distinct cards, then start over
//! let mut deck = PoolOptions::new()
//!     .values([("ace", 1.0), ("king", 1.0), ("queen", 1.0)])
//!     .dependent(true)
//!     .build();
//! for _ in 0..3 {
//!     println!("{}", deck.pick()?);
//! }
//! assert!(deck.pick().is_err());
//! deck.reset();
//! # Ok(()) }
//! ```
//!
//! ## Enum + macro
//!
//! ```rust,ignore
//! use weighted_pool::WeightedEnum;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, WeightedEnum)]
//! enum Loot {
//!     #[weight(60)] Common,
//!     #[weight(30)] Uncommon,
//!     #[weight(9)]  Rare,
//!     #[weight(1)]  Legendary,
//! }
//!
//! let mut pool = Loot::pool();
//! let item = pool.pick().unwrap();
//! ```
//!
//! ## Randomness
//! Each pool owns its [`RandomSource`]. The default draws from `rand::rng()`;
//! [`RngSource`] wraps any other `rand` generator, and any `FnMut() -> f64`
//! closure works too, which is how tests pin picks down:
//!
//! ```rust,ignore
//! let mut pool = weighted_pool::PoolOptions::new()
//!     .values([("A", 2.0), ("B", 3.0), ("C", 4.0)])
//!     .random_source(|| 0.5)
//!     .build();
//! assert_eq!(pool.pick(), Ok("B"));
//! ```
//!
//! ## Performance
//! * **Pick**: O(n) linear scan over the current entries.
//! * **Dependent pick / remove**: O(n), entries keep their order.
//! * **Reset / update**: O(n) copy of the snapshot.
//!
//! ## Gotchas
//! * Weights are not validated. Negative or non-finite weights give
//!   meaningless (but non-panicking) results.
//! * [`normalize`] with a zero total leaves `NaN`/∞ weights.
//! * Not a CSPRNG; don't use it for anything security related.

mod entry;
mod error;
mod pool;
mod source;
mod uniform;

pub use entry::{PoolEntry, normalize};
pub use error::PoolError;
pub use pool::{PoolOptions, WeightedPool};
pub use source::{RandomSource, RngSource, ThreadSource};
pub use uniform::{range, uniform};

/// Derive macro imported from `weighted_pool_macros`.
/// See the crate-level example for usage.
pub use weighted_pool_macros::WeightedEnum;

/// Trait implemented by the `WeightedEnum` derive macro.
///
/// Each variant and its weight is exposed via [`WeightedEnum::ENTRIES`], in
/// declaration order.
pub trait WeightedEnum: Sized + 'static {
    /// All `(variant, weight)` pairs for the enum.
    const ENTRIES: &'static [(Self, f64)];

    /// Owned entries, e.g. to feed [`WeightedPool::update`] or [`normalize`].
    fn entries() -> Vec<PoolEntry<Self>>
    where
        Self: Copy,
    {
        Self::ENTRIES.iter().copied().map(PoolEntry::from).collect()
    }

    /// Independent pool over all variants.
    fn pool() -> WeightedPool<Self>
    where
        Self: Copy,
    {
        WeightedPool::from_pairs(Self::ENTRIES.iter().copied())
    }

    /// Dependent pool over all variants: each variant comes up at most once
    /// until the pool is reset.
    fn dependent_pool() -> WeightedPool<Self>
    where
        Self: Copy,
    {
        WeightedPool::dependent(Self::ENTRIES.iter().copied())
    }
}
