use anyhow::{anyhow, ensure, Result};
use serde::{Deserialize, Serialize};

/// An item to pack: its column index, weight, and height. Immutable once
/// constructed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    index: usize,
    weight: i32,
    height: i32,
}

impl Item {
    pub fn new(index: usize, weight: i32, height: i32) -> Self {
        Self {
            index,
            weight,
            height,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// One bin packing instance: the bin capacity pair, the item set, and the
/// theoretical lower bound on the number of bins. Read-only after
/// construction.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Problem {
    bin_weight_cap: i32,
    bin_height_cap: i32,
    items: Vec<Item>,
    lower_bound: usize,
}

impl Problem {
    pub fn new(bin_weight_cap: i32, bin_height_cap: i32, items: Vec<Item>) -> Result<Self> {
        ensure!(
            bin_weight_cap > 0,
            "bin weight capacity must be positive, got {}",
            bin_weight_cap
        );
        ensure!(
            bin_height_cap > 0,
            "bin height capacity must be positive, got {}",
            bin_height_cap
        );
        ensure!(!items.is_empty(), "problem must contain at least one item");
        for (position, item) in items.iter().enumerate() {
            ensure!(
                item.weight() > 0 && item.height() > 0,
                "item {} must have positive weight and height, got ({}, {})",
                position,
                item.weight(),
                item.height()
            );
            ensure!(
                item.index() == position,
                "item index {} does not match its position {}",
                item.index(),
                position
            );
        }

        // theoretical minimum number of bins: total weight over bin weight
        // capacity, rounded down
        let total_weight: i64 = items.iter().map(|item| item.weight() as i64).sum();
        let lower_bound = (total_weight / bin_weight_cap as i64) as usize;

        Ok(Self {
            bin_weight_cap,
            bin_height_cap,
            items,
            lower_bound,
        })
    }

    /// Builds a problem from raw (weight, height) records: the first record
    /// carries the bin capacity pair, every following record becomes an item
    /// indexed from 0 in record order.
    pub fn from_records(records: &[(i32, i32)]) -> Result<Self> {
        ensure!(
            records.len() >= 2,
            "expected a capacity record followed by at least one item record, got {}",
            records.len()
        );
        let (bin_weight_cap, bin_height_cap) = records[0];
        let items = records[1..]
            .iter()
            .enumerate()
            .map(|(j, &(weight, height))| Item::new(j, weight, height))
            .collect();
        Self::new(bin_weight_cap, bin_height_cap, items)
    }

    pub fn capacity(&self) -> (i32, i32) {
        (self.bin_weight_cap, self.bin_height_cap)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Result<&Item> {
        self.items
            .get(index)
            .ok_or_else(|| anyhow!("item index {} is out of bounds ({} items)", index, self.items.len()))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    pub fn weights(&self) -> Vec<i32> {
        self.items.iter().map(Item::weight).collect()
    }

    pub fn heights(&self) -> Vec<i32> {
        self.items.iter().map(Item::height).collect()
    }
}
