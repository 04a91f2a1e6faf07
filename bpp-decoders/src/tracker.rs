use ndarray::Array2;
use std::ops::Range;

/// Remaining (weight, height) capacity per bin slot, one row per bin. Owned
/// by a single decode or repack pass and discarded with it.
pub(crate) struct ResidualTracker {
    r: Array2<i32>,
}

impl ResidualTracker {
    /// Every slot starts closed with zero residual.
    pub fn closed(slots: usize) -> Self {
        Self {
            r: Array2::zeros((slots, 2)),
        }
    }

    pub fn reset(&mut self, bin: usize, capacity: (i32, i32)) {
        self.r[[bin, 0]] = capacity.0;
        self.r[[bin, 1]] = capacity.1;
    }

    pub fn reset_range(&mut self, bins: Range<usize>, capacity: (i32, i32)) {
        for bin in bins {
            self.reset(bin, capacity);
        }
    }

    pub fn set(&mut self, bin: usize, weight: i32, height: i32) {
        self.r[[bin, 0]] = weight;
        self.r[[bin, 1]] = height;
    }

    pub fn charge(&mut self, bin: usize, weight: i32, height: i32) {
        self.r[[bin, 0]] -= weight;
        self.r[[bin, 1]] -= height;
    }

    /// An item fits when both residual axes stay non-negative after
    /// subtraction.
    pub fn fits(&self, bin: usize, weight: i32, height: i32) -> bool {
        self.r[[bin, 0]] - weight >= 0 && self.r[[bin, 1]] - height >= 0
    }

    pub fn weight(&self, bin: usize) -> i32 {
        self.r[[bin, 0]]
    }

    pub fn height(&self, bin: usize) -> i32 {
        self.r[[bin, 1]]
    }
}
