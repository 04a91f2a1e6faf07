use super::{check_permutation, dot_product, dot_product::Scaling, least_loaded, PackState};
use anyhow::{ensure, Result};
use bpp_core::{Assignment, Problem};

/// Fraction of the permutation handled by least-loaded moves before the
/// dot-product phase takes over.
pub const DEFAULT_SPLIT: f64 = 0.30;

pub fn solve(permutation: &[usize], problem: &Problem) -> Result<Assignment> {
    solve_with_split(permutation, problem, DEFAULT_SPLIT)
}

/// Runs least-loaded moves over the head of the permutation and dot-product
/// moves over the tail. Both phases share one tracker and one open-bin
/// count; nothing is reset at the switch.
pub fn solve_with_split(permutation: &[usize], problem: &Problem, split: f64) -> Result<Assignment> {
    ensure!(
        (0.0..=1.0).contains(&split),
        "combo split must lie in [0, 1], got {}",
        split
    );
    check_permutation(permutation, problem)?;
    let items = problem.items();
    let mut state = PackState::fresh(problem);
    state.open_initial(problem.lower_bound());
    let scaling = Scaling::of(problem);
    let switch = (permutation.len() as f64 * split).round() as usize;
    for &j in &permutation[..switch] {
        least_loaded::place(&mut state, &items[j]);
    }
    for &j in &permutation[switch..] {
        dot_product::place(&mut state, &items[j], &scaling);
    }
    Ok(state.into_assignment())
}
