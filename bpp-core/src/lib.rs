pub mod assignment;
pub mod checker;
pub mod problem;

pub use assignment::Assignment;
pub use checker::{check, open_bin_consistency, violates_bin, Violation};
pub use problem::{Item, Problem};
