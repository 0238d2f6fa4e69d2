//! Temporal coincidence statistics between two ordered event trains.
//!
//! Given two ascending trains `A` and `B` (spike times, or any sorted timestamps) and
//! a window half-width `dt`, this crate answers:
//!
//! - how many pairs `(a, b)` satisfy `|a - b| <= dt` ([`count_overlap`])
//! - how `|b - a|` is distributed over `[0, dt]` ([`bin_overlap`])
//! - how `b - a` is distributed over `[-dt, dt]` ([`bin2_overlap`])
//!
//! All three share one linear two-pointer scan, [`PairWindow`]. Histograms are
//! computed through the [`Binning`] trait, implemented by [`OneSided`] and [`TwoSided`].
//!
//! ## Quick Start
//!
//! ```rust
//! use coincid_overlaprs::{bin2_overlap, count_overlap};
//!
//! let a = [0.0, 1.0, 2.0];
//! let b = [0.0, 1.0, 2.0];
//!
//! // only the exact self-matches are within 0.5
//! assert_eq!(count_overlap(&a, &b, 0.5).unwrap(), 3);
//!
//! // and in a two-sided histogram they all sit in the central bin
//! let hist = bin2_overlap(&a, &b, 0.5, 4).unwrap();
//! assert_eq!(hist.counts(), &[0, 0, 3, 0]);
//! ```
//!
//! ## Out-of-range bins
//!
//! A value sitting exactly on the upper bound of the histogram is folded into the
//! last bin. A pair that still maps outside `[0, nbins)` is skipped: it is logged
//! through the [`log`] facade and returned in [`Histogram::dropped`]. Use
//! [`BinningOptions::strict`] to turn this into an error instead.
//!
//! ```rust
//! use coincid_core::config::BinningOptions;
//! use coincid_core::models::Train;
//! use coincid_overlaprs::{Binning, OneSided};
//!
//! let a = Train::new(&[1.0]).unwrap();
//! let b = Train::new(&[0.5, 1.0, 1.5]).unwrap();
//!
//! let binner = OneSided::new(0.5, 5)
//!     .unwrap()
//!     .with_options(BinningOptions::strict());
//! let hist = binner.histogram(a, b).unwrap();
//! assert_eq!(hist.counts(), &[1, 0, 0, 0, 2]);
//! assert!(hist.dropped().is_empty());
//! ```

/// Histogram layouts for pair differences.
///
/// See [`Binning`] for details.
pub mod binning;

/// Slice-level count and histogram functions.
pub mod overlap;

/// The shared two-pointer pair scan.
///
/// See [`PairWindow`] for details.
pub mod window;

// re-exports
pub use self::binning::{Binning, OneSided, TwoSided};
pub use self::overlap::{
    autocorrelogram, bin_overlap, bin_overlap_into, bin2_overlap, bin2_overlap_into,
    count_overlap,
};
pub use self::window::{Pair, PairWindow, pairs};

pub use coincid_core::config::{BinningOptions, OutOfRangePolicy};
pub use coincid_core::errors::CoincidenceError;
pub use coincid_core::models::{DroppedPair, Histogram, Train};
