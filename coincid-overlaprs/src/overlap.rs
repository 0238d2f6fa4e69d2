//! Slice-level entry points. Each call validates both trains and its
//! parameters, then runs a single scan.

use num_traits::Float;

use coincid_core::errors::CoincidenceError;
use coincid_core::models::{DroppedPair, Histogram, Train};

use crate::binning::{Binning, OneSided, TwoSided};
use crate::window::PairWindow;

/// Number of pairs `(a, b)` with `|a - b| <= dt`.
///
/// Duplicate timestamps are not merged: each copy pairs on its own.
pub fn count_overlap<F>(a: &[F], b: &[F], dt: F) -> Result<usize, CoincidenceError>
where
    F: Float,
{
    let a = Train::new(a)?;
    let b = Train::new(b)?;
    Ok(PairWindow::new(a, b, dt)?.count())
}

/// Histogram of `|b - a|` over `[0, dt]` in `nbins` bins.
pub fn bin_overlap<F>(
    a: &[F],
    b: &[F],
    dt: F,
    nbins: usize,
) -> Result<Histogram<F>, CoincidenceError>
where
    F: Float,
{
    let binner = OneSided::new(dt, nbins)?;
    binner.histogram(Train::new(a)?, Train::new(b)?)
}

/// Like [`bin_overlap`], adding into a caller-owned buffer of `nbins` counts.
///
/// The buffer is not cleared first. Pairs that could not be binned are returned.
pub fn bin_overlap_into<F>(
    a: &[F],
    b: &[F],
    dt: F,
    bins: &mut [usize],
) -> Result<Vec<DroppedPair<F>>, CoincidenceError>
where
    F: Float,
{
    let binner = OneSided::new(dt, bins.len())?;
    binner.accumulate(Train::new(a)?, Train::new(b)?, bins)
}

/// Histogram of the signed difference `b - a` over `[-dt, dt]` in `nbins` bins.
pub fn bin2_overlap<F>(
    a: &[F],
    b: &[F],
    dt: F,
    nbins: usize,
) -> Result<Histogram<F>, CoincidenceError>
where
    F: Float,
{
    let binner = TwoSided::new(dt, nbins)?;
    binner.histogram(Train::new(a)?, Train::new(b)?)
}

/// Like [`bin2_overlap`], adding into a caller-owned buffer of `nbins` counts.
pub fn bin2_overlap_into<F>(
    a: &[F],
    b: &[F],
    dt: F,
    bins: &mut [usize],
) -> Result<Vec<DroppedPair<F>>, CoincidenceError>
where
    F: Float,
{
    let binner = TwoSided::new(dt, bins.len())?;
    binner.accumulate(Train::new(a)?, Train::new(b)?, bins)
}

/// Two-sided histogram of a train against itself.
///
/// Self-pairs are included, so bin `nbins / 2` (even `nbins`) holds at least
/// one count per spike.
pub fn autocorrelogram<F>(
    train: &[F],
    dt: F,
    nbins: usize,
) -> Result<Histogram<F>, CoincidenceError>
where
    F: Float,
{
    bin2_overlap(train, train, dt, nbins)
}
