use crate::strategies::{combo, dot_product, dot_product::Scaling, least_loaded, PackState};
use crate::tracker::ResidualTracker;
use anyhow::{ensure, Result};
use bpp_core::{Assignment, Problem};
use rand::Rng;

/// Re-decodes the contiguous bin range `[start, end)` of an existing
/// assignment. Every item in the range is collected, its entries cleared,
/// and the collection re-placed in ascending column order with a uniformly
/// drawn strategy. Bins and items outside the range keep their placements.
/// An open marker already present at `end` seeds the open-bin count so bins
/// above the range stay continuous; otherwise the problem's lower bound
/// seeds it.
pub fn repack<R: Rng>(
    mut assignment: Assignment,
    start: usize,
    end: usize,
    problem: &Problem,
    rng: &mut R,
) -> Result<Assignment> {
    let n = problem.item_count();
    ensure!(
        start <= end && end <= n,
        "bin range [{}, {}) is invalid for {} bins",
        start,
        end,
        n
    );
    ensure!(
        assignment.y.len() == n
            && assignment.x.len() == n
            && assignment.x.iter().all(|row| row.len() == n),
        "assignment shape does not match the problem ({} items)",
        n
    );

    let open_bins = if end < n && assignment.y[end] == 1 {
        end
    } else {
        problem.lower_bound().min(n)
    };

    // only the repacked range gets fresh capacity; everything else stays at
    // zero residual and can never receive a collected item
    let mut tracker = ResidualTracker::closed(n);
    tracker.reset_range(start..end, problem.capacity());

    let mut pack_items = Vec::new();
    for bin in start..end {
        if bin >= open_bins {
            assignment.y[bin] = 0;
        }
        for j in 0..n {
            if assignment.x[bin][j] == 1 {
                pack_items.push(j);
                assignment.x[bin][j] = 0;
            }
        }
    }
    pack_items.sort_unstable();

    let items = problem.items();
    let mut state = PackState::resume(problem, assignment, tracker, open_bins);
    let draw = 3.0 * rng.gen::<f64>();
    if draw < 1.0 {
        for &j in &pack_items {
            least_loaded::place(&mut state, &items[j]);
        }
    } else {
        let scaling = Scaling::of(problem);
        if draw < 2.0 {
            for &j in &pack_items {
                dot_product::place(&mut state, &items[j], &scaling);
            }
        } else {
            let switch = (combo::DEFAULT_SPLIT * pack_items.len() as f64).round() as usize;
            for &j in &pack_items[..switch] {
                least_loaded::place(&mut state, &items[j]);
            }
            for &j in &pack_items[switch..] {
                dot_product::place(&mut state, &items[j], &scaling);
            }
        }
    }

    Ok(state.into_assignment())
}
