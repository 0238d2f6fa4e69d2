//! Core data model for coincid: temporal coincidence statistics between two
//! ordered event trains.
//!
//! This crate holds the types shared by the engine and its callers:
//!
//! - [`models::Train`]: a borrowed, validated ascending sequence of timestamps
//! - [`models::Histogram`]: binned pair differences together with any pairs that were dropped
//! - [`config::BinningOptions`]: boundary tolerance and the out-of-range policy
//! - [`errors::CoincidenceError`]: every way a call can be rejected
//!
//! The counting and binning algorithms live in `coincid-overlaprs`.

pub mod config;
pub mod errors;
pub mod models;

pub mod consts {
    /// Two floats closer than this are treated as equal when deciding whether a
    /// value sitting on the histogram's upper bound belongs to the last bin.
    pub const BOUNDARY_TOLERANCE: f64 = 1e-12;
}
