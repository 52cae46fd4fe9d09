#![forbid(unsafe_code)]

mod error;
pub mod grid;
pub mod stats;
pub mod union_find;

pub use error::{Error, Result};
pub use grid::Percolation;
pub use stats::{run_trial, PercolationStats};
pub use union_find::UnionFind;
