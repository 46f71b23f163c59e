use std::collections::VecDeque;

/// Samples kept per trend series
pub const HISTORY_LEN: usize = 50;

/// Fixed-length FIFO of percentage samples (for trend sparklines)
///
/// The window always holds exactly `capacity` values: it starts zero-filled
/// and every insertion evicts the oldest entry, so renderers never see a
/// partially filled series.
#[derive(Debug, Clone)]
pub struct RollingHistory {
    capacity: usize,
    values: VecDeque<f64>,
}

impl RollingHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_LEN)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut values = VecDeque::with_capacity(capacity);
        values.extend(std::iter::repeat(0.0).take(capacity));
        Self { capacity, values }
    }

    /// Insert a value, evicting the oldest. Values are clamped to the
    /// displayable 0..=100 range on the way in.
    pub fn push(&mut self, value: f64) {
        if self.values.len() >= self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value.clamp(0.0, 100.0));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recently pushed value
    pub fn latest(&self) -> f64 {
        self.values.back().copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl Default for RollingHistory {
    fn default() -> Self {
        Self::new()
    }
}
