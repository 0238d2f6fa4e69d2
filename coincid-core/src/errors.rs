use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoincidenceError {
    #[error("Train is not sorted ascending: element {index} is smaller than its predecessor")]
    UnsortedTrain { index: usize },

    #[error("Train contains a non-finite timestamp at index {index}")]
    NonFiniteTimestamp { index: usize },

    #[error("Window half-width must be finite and non-negative, got {0}")]
    InvalidWindow(f64),

    #[error("Number of bins must be positive")]
    ZeroBins,

    #[error("Histogram buffer has {found} bins, expected {expected}")]
    BufferLengthMismatch { expected: usize, found: usize },

    #[error("Pair delta {delta} maps to bin {bin:?}, outside [0, {nbins})")]
    OutOfRangeBin {
        delta: f64,
        bin: Option<i64>,
        nbins: usize,
    },
}
