use serde::{Deserialize, Serialize};

/// A decoded loading pattern. `x[i][j] == 1` places item `j` in bin `i`;
/// `y[i] == 1` marks bin `i` open. Both are plain integer arrays so callers
/// can hand them off for storage as-is, row-major bins by items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub x: Vec<Vec<u8>>,
    pub y: Vec<u8>,
}

impl Assignment {
    /// All-zero matrices sized for the worst case of one bin per item.
    pub fn empty(item_count: usize) -> Self {
        Self {
            x: vec![vec![0; item_count]; item_count],
            y: vec![0; item_count],
        }
    }

    /// Column indices of the items placed in the given bin row.
    pub fn bin_items(&self, bin: usize) -> Vec<usize> {
        self.x[bin]
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 1)
            .map(|(j, _)| j)
            .collect()
    }
}
