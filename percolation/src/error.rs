use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

/// Every failure in this crate is an invalid argument passed to a public
/// operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid size must be greater than 0, got {0}")]
    InvalidGridSize(usize),
    #[error("number of trials must be greater than 0, got {0}")]
    InvalidTrials(usize),
    #[error("site ({row}, {col}) is outside the grid, both must be between 1 and {n}")]
    OutOfBounds { row: usize, col: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
