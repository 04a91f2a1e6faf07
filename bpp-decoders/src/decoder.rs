use crate::strategies::Strategy;
use anyhow::Result;
use bpp_core::{check, Assignment, Problem, Violation};
use rand::Rng;

/// Decodes one permutation with a uniformly drawn strategy and checks the
/// result. Feasibility findings come back alongside the assignment: they are
/// reported, never raised, so the caller decides whether to discard or
/// repair a flagged solution.
pub fn decode<R: Rng>(
    solution: u64,
    permutation: &[usize],
    problem: &Problem,
    rng: &mut R,
) -> Result<(Assignment, Vec<Violation>)> {
    let strategy = Strategy::sample(rng);
    let assignment = strategy.decode(permutation, problem)?;
    let violations = check(solution, &assignment.x, problem)?;
    Ok((assignment, violations))
}
