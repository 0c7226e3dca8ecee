#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// `pick` was called on a pool with no entries or no remaining weight.
    Exhausted,
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::Exhausted => write!(f, "pool is already empty"),
        }
    }
}

impl std::error::Error for PoolError {}
