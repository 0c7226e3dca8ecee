/// A value together with its relative weight.
///
/// Weights are expected to be finite and non-negative. Zero is allowed; such
/// an entry is only ever chosen on an exact boundary tie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolEntry<V> {
    pub value: V,
    pub weight: f64,
}

impl<V> PoolEntry<V> {
    pub const fn new(value: V, weight: f64) -> Self {
        Self { value, weight }
    }

    pub fn into_pair(self) -> (V, f64) {
        (self.value, self.weight)
    }
}

impl<V> From<(V, f64)> for PoolEntry<V> {
    fn from((value, weight): (V, f64)) -> Self {
        Self { value, weight }
    }
}

/// Sum of all weights in `entries`.
pub(crate) fn total_weight<V>(entries: &[PoolEntry<V>]) -> f64 {
    entries.iter().map(|e| e.weight).sum()
}

/// Divide every weight by `total` in place so that the weights sum to 1.
///
/// With `total == None` the sum of the weights is computed first. Nothing is
/// validated: a zero total leaves `NaN` or infinite weights behind.
///
/// Returns the same slice so calls can be chained.
pub fn normalize<V>(entries: &mut [PoolEntry<V>], total: Option<f64>) -> &mut [PoolEntry<V>] {
    let sum = total.unwrap_or_else(|| total_weight(entries));
    for entry in entries.iter_mut() {
        entry.weight /= sum;
    }
    entries
}
