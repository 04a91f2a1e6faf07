pub mod combo;
pub mod dot_product;
pub mod least_loaded;

use crate::tracker::ResidualTracker;
use anyhow::{ensure, Result};
use bpp_core::{Assignment, Item, Problem};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of decoding heuristics a permutation can be run through.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    LeastLoaded,
    DotProduct,
    Combo,
}

impl Strategy {
    /// Draws one of the three strategies with equal probability.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Strategy::LeastLoaded,
            1 => Strategy::DotProduct,
            _ => Strategy::Combo,
        }
    }

    pub fn decode(&self, permutation: &[usize], problem: &Problem) -> Result<Assignment> {
        match self {
            Strategy::LeastLoaded => least_loaded::solve(permutation, problem),
            Strategy::DotProduct => dot_product::solve(permutation, problem),
            Strategy::Combo => combo::solve(permutation, problem),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::LeastLoaded => write!(f, "least-loaded"),
            Strategy::DotProduct => write!(f, "dot-product"),
            Strategy::Combo => write!(f, "combo"),
        }
    }
}

pub(crate) fn check_permutation(permutation: &[usize], problem: &Problem) -> Result<()> {
    ensure!(
        permutation.len() == problem.item_count(),
        "permutation length ({}) does not match number of items ({})",
        permutation.len(),
        problem.item_count()
    );
    for &j in permutation {
        ensure!(
            j < problem.item_count(),
            "permutation contains invalid item index {}",
            j
        );
    }
    Ok(())
}

/// Mutable state of one decode pass, shared by every strategy: the
/// assignment being built, the residual tracker, and the running open-bin
/// count.
pub(crate) struct PackState<'a> {
    problem: &'a Problem,
    assignment: Assignment,
    tracker: ResidualTracker,
    open_bins: usize,
}

impl<'a> PackState<'a> {
    pub fn fresh(problem: &'a Problem) -> Self {
        let n = problem.item_count();
        Self {
            problem,
            assignment: Assignment::empty(n),
            tracker: ResidualTracker::closed(n),
            open_bins: 0,
        }
    }

    /// Resumes packing over an existing assignment, as repack does.
    pub fn resume(
        problem: &'a Problem,
        assignment: Assignment,
        tracker: ResidualTracker,
        open_bins: usize,
    ) -> Self {
        Self {
            problem,
            assignment,
            tracker,
            open_bins,
        }
    }

    /// Marks the first `count` bins open at full capacity. The count is
    /// clamped to the item count: the lower bound can overshoot it when a
    /// single item outweighs the bin capacity.
    pub fn open_initial(&mut self, count: usize) {
        let count = count.min(self.problem.item_count());
        let capacity = self.problem.capacity();
        for bin in 0..count {
            self.assignment.y[bin] = 1;
            self.tracker.reset(bin, capacity);
        }
        self.open_bins = count;
    }

    pub fn open_bins(&self) -> usize {
        self.open_bins
    }

    /// Whether a further bin slot can still be opened.
    pub fn can_open(&self) -> bool {
        self.open_bins < self.problem.item_count()
    }

    pub fn fits(&self, bin: usize, item: &Item) -> bool {
        self.tracker.fits(bin, item.weight(), item.height())
    }

    pub fn residual_weight(&self, bin: usize) -> i32 {
        self.tracker.weight(bin)
    }

    pub fn residual_height(&self, bin: usize) -> i32 {
        self.tracker.height(bin)
    }

    /// Places the item in the given bin. `bin == open_bins` opens the next
    /// bin and seeds its residual from full capacity, which may go negative
    /// for an oversized item; the checker reports the overload afterwards.
    pub fn place(&mut self, bin: usize, item: &Item) {
        if bin == self.open_bins {
            let (weight_cap, height_cap) = self.problem.capacity();
            self.open_bins += 1;
            self.assignment.x[bin][item.index()] = 1;
            self.assignment.y[bin] = 1;
            self.tracker
                .set(bin, weight_cap - item.weight(), height_cap - item.height());
        } else {
            self.assignment.x[bin][item.index()] = 1;
            self.tracker.charge(bin, item.weight(), item.height());
        }
    }

    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }
}
