//! # coincid
//!
//! Temporal coincidence statistics between two ordered event trains: how many
//! pairs fall within a window, and how their time differences are distributed.
//!
//! This crate bundles the workspace members behind cargo features:
//!
//! - `core`: validated trains, histograms, options and errors ([`core`])
//! - `overlaprs`: the counting and binning engine ([`overlaprs`])
//! - `serde`: (de)serialization of [`core::config::BinningOptions`]
//!
//! ```
//! # #[cfg(feature = "overlaprs")]
//! # {
//! use coincid::overlaprs::{autocorrelogram, count_overlap};
//!
//! let spikes = [0.010, 0.012, 0.250, 0.251, 0.900];
//! assert_eq!(count_overlap(&spikes, &spikes, 0.005).unwrap(), 9);
//!
//! let acg = autocorrelogram(&spikes, 0.005, 10).unwrap();
//! assert_eq!(acg.counts()[5], 5);
//! # }
//! ```

#[cfg(feature = "core")]
#[doc(inline)]
pub use coincid_core as core;

#[cfg(feature = "overlaprs")]
#[doc(inline)]
pub use coincid_overlaprs as overlaprs;
