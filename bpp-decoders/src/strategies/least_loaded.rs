use super::{check_permutation, PackState};
use anyhow::Result;
use bpp_core::{Assignment, Item, Problem};

/// Decodes a permutation with the least-loaded rule: each item goes to the
/// most-spare open bin if it fits there, otherwise into a newly opened bin.
/// The lower bound on bins is pre-opened before the first item.
pub fn solve(permutation: &[usize], problem: &Problem) -> Result<Assignment> {
    check_permutation(permutation, problem)?;
    let items = problem.items();
    let mut state = PackState::fresh(problem);
    state.open_initial(problem.lower_bound());
    for &j in permutation {
        place(&mut state, &items[j]);
    }
    Ok(state.into_assignment())
}

/// One least-loaded move. The selected bin takes the item only if both
/// residual axes fit; otherwise the next bin is opened. With every slot
/// already open the selected bin takes the overload so the item is still
/// placed somewhere.
pub(crate) fn place(state: &mut PackState, item: &Item) {
    let target = match least_loaded_bin(state) {
        Some(bin) if state.fits(bin, item) => bin,
        Some(bin) if !state.can_open() => bin,
        _ => state.open_bins(),
    };
    state.place(target, item);
}

/// Selection rule: the open bin with the greatest residual height, first bin
/// on ties. Height is the only axis examined here; weight is enforced at fit
/// time.
pub(crate) fn least_loaded_bin(state: &PackState) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for bin in 0..state.open_bins() {
        let height = state.residual_height(bin);
        if best.map_or(true, |(_, h)| height > h) {
            best = Some((bin, height));
        }
    }
    best.map(|(bin, _)| bin)
}
