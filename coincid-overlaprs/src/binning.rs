use log::{debug, warn};
use num_traits::Float;

use coincid_core::config::{BinningOptions, OutOfRangePolicy};
use coincid_core::errors::CoincidenceError;
use coincid_core::models::{DroppedPair, Histogram, Train};

use crate::window::{PairWindow, check_window};

/// A histogram layout for the time differences of coincident pairs.
///
/// Implementors say how a pair maps onto the axis ([`Binning::delta`]) and which
/// closed range the axis covers. Bin lookup, the upper boundary correction and
/// the scan itself are shared.
pub trait Binning<F>
where
    F: Float,
{
    /// Window half-width used to find pairs.
    fn dt(&self) -> F;

    fn nbins(&self) -> usize;

    /// Closed range `[lower, upper]` covered by the histogram.
    fn range(&self) -> (F, F);

    fn options(&self) -> &BinningOptions;

    /// Value placed on the histogram axis for the pair `(a, b)`.
    fn delta(&self, a: F, b: F) -> F;

    /// `floor(((delta - lower) / span) * nbins)`, before any boundary correction.
    ///
    /// Dividing by the span first keeps the midpoint of the range exact: a zero
    /// delta on a symmetric range lands on exactly `nbins / 2`. A zero-width
    /// range (`dt == 0`) has no bin for any value and yields `None`.
    fn raw_bin(&self, delta: F) -> Option<i64> {
        let (lower, upper) = self.range();
        let span = upper - lower;
        if span <= F::zero() {
            return None;
        }
        let n = F::from(self.nbins())?;
        (((delta - lower) / span) * n).floor().to_i64()
    }

    /// Index of the bin holding `delta`, or the offending index when it is out of range.
    ///
    /// Bins are `[low, high)` apart from the last, which also takes a value
    /// sitting on the upper bound. The tolerance for "on the bound" is the
    /// configured one, widened to one machine epsilon relative to `upper` so
    /// that it stays meaningful for `f32`.
    fn bin_index(&self, delta: F) -> Result<usize, Option<i64>> {
        let nbins = self.nbins();
        let (_, upper) = self.range();
        let tolerance = F::from(self.options().tolerance)
            .unwrap_or_else(F::zero)
            .max(F::epsilon() * upper.abs());

        let mut bin = self.raw_bin(delta);
        if bin == i64::try_from(nbins).ok() && (delta - upper).abs() < tolerance {
            bin = bin.map(|b| b - 1);
        }

        match bin.and_then(|b| usize::try_from(b).ok()) {
            Some(b) if b < nbins => Ok(b),
            _ => Err(bin),
        }
    }

    /// Add every coincident pair of `a` and `b` to `bins`, which is not reset.
    ///
    /// Returns the pairs that could not be binned. With
    /// [`OutOfRangePolicy::Error`] the first such pair aborts the scan instead,
    /// leaving whatever was already counted in `bins`.
    fn accumulate(
        &self,
        a: Train<'_, F>,
        b: Train<'_, F>,
        bins: &mut [usize],
    ) -> Result<Vec<DroppedPair<F>>, CoincidenceError> {
        let nbins = self.nbins();
        if bins.len() != nbins {
            return Err(CoincidenceError::BufferLengthMismatch {
                expected: nbins,
                found: bins.len(),
            });
        }

        let mut dropped = vec![];
        let mut binned = 0usize;

        for pair in PairWindow::new(a, b, self.dt())? {
            let delta = self.delta(pair.a, pair.b);

            match self.bin_index(delta) {
                Ok(idx) => {
                    bins[idx] += 1;
                    binned += 1;
                }
                Err(bin) => {
                    let delta_f64 = delta.to_f64().unwrap_or(f64::NAN);
                    match self.options().out_of_range {
                        OutOfRangePolicy::Error => {
                            return Err(CoincidenceError::OutOfRangeBin {
                                delta: delta_f64,
                                bin,
                                nbins,
                            });
                        }
                        OutOfRangePolicy::Record => {
                            warn!(
                                "bin number wrong: delta {} maps to bin {:?} of {} (pair {}, {})",
                                delta_f64, bin, nbins, pair.a_index, pair.b_index
                            );
                            dropped.push(DroppedPair {
                                a_index: pair.a_index,
                                b_index: pair.b_index,
                                delta,
                                bin,
                            });
                        }
                    }
                }
            }
        }

        debug!(
            "binned {} pairs into {} bins, dropped {}",
            binned,
            nbins,
            dropped.len()
        );

        Ok(dropped)
    }

    /// Bin every coincident pair of `a` and `b` into a fresh histogram.
    fn histogram(
        &self,
        a: Train<'_, F>,
        b: Train<'_, F>,
    ) -> Result<Histogram<F>, CoincidenceError> {
        let mut counts = vec![0; self.nbins()];
        let dropped = self.accumulate(a, b, &mut counts)?;
        let (lower, upper) = self.range();
        Ok(Histogram::new(counts, lower, upper, dropped))
    }
}

fn check_binning<F>(dt: F, nbins: usize) -> Result<(), CoincidenceError>
where
    F: Float,
{
    check_window(dt)?;
    if nbins == 0 {
        return Err(CoincidenceError::ZeroBins);
    }
    Ok(())
}

/// Unsigned differences `|b - a|` binned over `[0, dt]`.
///
/// ```
/// use coincid_core::models::Train;
/// use coincid_overlaprs::{Binning, OneSided};
///
/// let a = Train::new(&[1.0]).unwrap();
/// let b = Train::new(&[0.75, 1.0, 1.25]).unwrap();
///
/// let hist = OneSided::new(0.5, 2).unwrap().histogram(a, b).unwrap();
/// assert_eq!(hist.counts(), &[1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneSided<F>
where
    F: Float,
{
    dt: F,
    nbins: usize,
    options: BinningOptions,
}

impl<F> OneSided<F>
where
    F: Float,
{
    pub fn new(dt: F, nbins: usize) -> Result<Self, CoincidenceError> {
        check_binning(dt, nbins)?;
        Ok(OneSided {
            dt,
            nbins,
            options: BinningOptions::default(),
        })
    }

    pub fn with_options(mut self, options: BinningOptions) -> Self {
        self.options = options;
        self
    }
}

impl<F> Binning<F> for OneSided<F>
where
    F: Float,
{
    fn dt(&self) -> F {
        self.dt
    }

    fn nbins(&self) -> usize {
        self.nbins
    }

    fn range(&self) -> (F, F) {
        (F::zero(), self.dt)
    }

    fn options(&self) -> &BinningOptions {
        &self.options
    }

    #[inline]
    fn delta(&self, a: F, b: F) -> F {
        (b - a).abs()
    }
}

/// Signed differences `b - a` binned over `[-dt, dt]`.
///
/// Comparing a train with itself puts every self-pair in bin `nbins / 2` when
/// `nbins` is even.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSided<F>
where
    F: Float,
{
    dt: F,
    nbins: usize,
    options: BinningOptions,
}

impl<F> TwoSided<F>
where
    F: Float,
{
    pub fn new(dt: F, nbins: usize) -> Result<Self, CoincidenceError> {
        check_binning(dt, nbins)?;
        Ok(TwoSided {
            dt,
            nbins,
            options: BinningOptions::default(),
        })
    }

    pub fn with_options(mut self, options: BinningOptions) -> Self {
        self.options = options;
        self
    }
}

impl<F> Binning<F> for TwoSided<F>
where
    F: Float,
{
    fn dt(&self) -> F {
        self.dt
    }

    fn nbins(&self) -> usize {
        self.nbins
    }

    fn range(&self) -> (F, F) {
        (-self.dt, self.dt)
    }

    fn options(&self) -> &BinningOptions {
        &self.options
    }

    #[inline]
    fn delta(&self, a: F, b: F) -> F {
        b - a
    }
}
