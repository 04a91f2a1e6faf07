use crate::problem::Problem;
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A feasibility finding. Findings are collected and returned to the caller,
/// never raised: a flagged solution is still handed back as-is so the search
/// layer can penalize or repair it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Item column does not sum to exactly one across bins.
    Physicality { solution: u64, item: usize },
    /// Bin row exceeds the weight capacity; `weight` is the actual load.
    OverWeight { solution: u64, bin: usize, weight: i32 },
    /// Bin row exceeds the height capacity; `height` is the actual load.
    OverHeight { solution: u64, bin: usize, height: i32 },
    /// Open-bin flag disagrees with the bin row's contents.
    OpenBin { bin: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Physicality { solution, item } => {
                write!(f, "solution {} has a physicality error: item {}", solution, item)
            }
            Violation::OverWeight { solution, bin, weight } => {
                write!(f, "solution {}, bin {} is over weight: {}", solution, bin, weight)
            }
            Violation::OverHeight { solution, bin, height } => {
                write!(f, "solution {}, bin {} is over height: {}", solution, bin, height)
            }
            Violation::OpenBin { bin } => {
                write!(f, "bin {} open flag does not match its contents", bin)
            }
        }
    }
}

fn check_shape(x: &[Vec<u8>], n: usize) -> Result<()> {
    ensure!(x.len() == n, "assignment has {} bin rows, expected {}", x.len(), n);
    for (i, row) in x.iter().enumerate() {
        ensure!(
            row.len() == n,
            "bin row {} has {} columns, expected {}",
            i,
            row.len(),
            n
        );
    }
    Ok(())
}

/// Checks a loading pattern against every problem constraint: each item in
/// exactly one bin, and each bin row within the weight and height
/// capacities. An error means the matrix shape does not match the problem;
/// feasibility findings always come back as `Ok` with the collected records.
pub fn check(solution: u64, x: &[Vec<u8>], problem: &Problem) -> Result<Vec<Violation>> {
    let n = problem.item_count();
    check_shape(x, n)?;
    let mut violations = Vec::new();

    for j in 0..n {
        let placed: u32 = x.iter().map(|row| row[j] as u32).sum();
        if placed != 1 {
            violations.push(Violation::Physicality { solution, item: j });
        }
    }

    let (weight_cap, height_cap) = problem.capacity();
    let weights = problem.weights();
    let heights = problem.heights();
    for (i, row) in x.iter().enumerate() {
        let bin_weight: i32 = row.iter().zip(&weights).map(|(&v, &w)| v as i32 * w).sum();
        if bin_weight > weight_cap {
            violations.push(Violation::OverWeight {
                solution,
                bin: i,
                weight: bin_weight,
            });
        }
        let bin_height: i32 = row.iter().zip(&heights).map(|(&v, &h)| v as i32 * h).sum();
        if bin_height > height_cap {
            violations.push(Violation::OverHeight {
                solution,
                bin: i,
                height: bin_height,
            });
        }
    }

    Ok(violations)
}

/// Companion check: `y[i] == 1` exactly when bin row `i` holds at least one
/// item.
pub fn open_bin_consistency(x: &[Vec<u8>], y: &[u8]) -> Result<Vec<Violation>> {
    ensure!(
        x.len() == y.len(),
        "assignment has {} bin rows but {} open-bin flags",
        x.len(),
        y.len()
    );
    let mut violations = Vec::new();
    for (i, row) in x.iter().enumerate() {
        let has_items = row.iter().any(|&v| v == 1);
        if (y[i] == 1) != has_items {
            violations.push(Violation::OpenBin { bin: i });
        }
    }
    Ok(violations)
}

/// Evaluates one candidate bin, given as item indices, without a full
/// matrix. Returns true when the bin would break either capacity.
pub fn violates_bin(bin_items: &[usize], problem: &Problem) -> Result<bool> {
    let mut bin_weight = 0i32;
    let mut bin_height = 0i32;
    for &j in bin_items {
        let item = problem.item(j)?;
        bin_weight += item.weight();
        bin_height += item.height();
    }
    let (weight_cap, height_cap) = problem.capacity();
    Ok(bin_weight > weight_cap || bin_height > height_cap)
}
