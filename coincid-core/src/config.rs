//! Options controlling how pair differences are binned.

use crate::consts::BOUNDARY_TOLERANCE;

/// What to do with a pair whose bin index falls outside `[0, nbins)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutOfRangePolicy {
    /// Skip the pair, log a warning and report it in the histogram's dropped list.
    #[default]
    Record,
    /// Abort the call with [`crate::errors::CoincidenceError::OutOfRangeBin`].
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BinningOptions {
    /// Absolute distance from the upper bound within which a value one bin past
    /// the end is folded back into the last bin. The default suits `f64`; the
    /// binners never use less than one epsilon of the float type relative to
    /// the upper bound.
    pub tolerance: f64,
    pub out_of_range: OutOfRangePolicy,
}

impl Default for BinningOptions {
    fn default() -> Self {
        BinningOptions {
            tolerance: BOUNDARY_TOLERANCE,
            out_of_range: OutOfRangePolicy::default(),
        }
    }
}

impl BinningOptions {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_policy(mut self, out_of_range: OutOfRangePolicy) -> Self {
        self.out_of_range = out_of_range;
        self
    }

    pub fn strict() -> Self {
        BinningOptions::default().with_policy(OutOfRangePolicy::Error)
    }

    /// Parse options from a TOML table. Missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<BinningOptions, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
