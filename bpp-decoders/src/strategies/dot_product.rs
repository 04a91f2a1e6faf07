use super::{check_permutation, least_loaded, PackState};
use anyhow::Result;
use bpp_core::{Assignment, Item, Problem};

/// Per-axis scaling factors for the dot-product score: the average weight
/// and average height over all items, so both axes contribute in proportion
/// to their typical magnitude.
pub(crate) struct Scaling {
    weight: f64,
    height: f64,
}

impl Scaling {
    pub fn of(problem: &Problem) -> Self {
        let n = problem.item_count() as f64;
        let total_weight: i64 = problem.items().iter().map(|item| item.weight() as i64).sum();
        let total_height: i64 = problem.items().iter().map(|item| item.height() as i64).sum();
        Self {
            weight: total_weight as f64 / n,
            height: total_height as f64 / n,
        }
    }

    fn score(&self, item: &Item, residual_weight: i32, residual_height: i32) -> f64 {
        self.weight * item.weight() as f64 * residual_weight as f64
            + self.height * item.height() as f64 * residual_height as f64
    }
}

/// Decodes a permutation with the dot-product rule: each item goes to the
/// feasible open bin whose residual capacity scores highest against the
/// item. Exactly one bin is pre-opened, independent of the lower bound.
pub fn solve(permutation: &[usize], problem: &Problem) -> Result<Assignment> {
    check_permutation(permutation, problem)?;
    let items = problem.items();
    let mut state = PackState::fresh(problem);
    state.open_initial(1);
    let scaling = Scaling::of(problem);
    for &j in permutation {
        place(&mut state, &items[j], &scaling);
    }
    Ok(state.into_assignment())
}

/// One dot-product move. Bins that cannot hold the item score nothing; with
/// no qualifying bin the next bin is opened. Ties go to the
/// first-encountered bin.
pub(crate) fn place(state: &mut PackState, item: &Item, scaling: &Scaling) {
    let mut best: Option<(usize, f64)> = None;
    for bin in 0..state.open_bins() {
        if !state.fits(bin, item) {
            continue;
        }
        let score = scaling.score(item, state.residual_weight(bin), state.residual_height(bin));
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((bin, score));
        }
    }
    let target = match best {
        Some((bin, _)) => bin,
        None if state.can_open() => state.open_bins(),
        // every slot is open and none fits; the most spare bin takes the
        // overload
        None => least_loaded::least_loaded_bin(state).unwrap_or_default(),
    };
    state.place(target, item);
}
