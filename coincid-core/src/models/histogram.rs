use num_traits::Float;

/// A pair whose time difference could not be placed in any bin.
///
/// `bin` holds the index the pair mapped to after boundary correction, or `None`
/// when that index is not representable as an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroppedPair<F>
where
    F: Float,
{
    pub a_index: usize,
    pub b_index: usize,
    pub delta: F,
    pub bin: Option<i64>,
}

/// Counts of time differences over the closed range `[lower, upper]`.
///
/// Every bin is `[low, high)` except the last one, which is `[low, high]`, so the
/// histogram as a whole covers its upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<F>
where
    F: Float,
{
    counts: Vec<usize>,
    lower: F,
    upper: F,
    dropped: Vec<DroppedPair<F>>,
}

impl<F> Histogram<F>
where
    F: Float,
{
    pub fn new(counts: Vec<usize>, lower: F, upper: F, dropped: Vec<DroppedPair<F>>) -> Self {
        Histogram {
            counts,
            lower,
            upper,
            dropped,
        }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn into_counts(self) -> Vec<usize> {
        self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of pairs that landed in a bin.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Pairs skipped because their bin index was out of range.
    pub fn dropped(&self) -> &[DroppedPair<F>] {
        &self.dropped
    }

    pub fn range(&self) -> (F, F) {
        (self.lower, self.upper)
    }

    pub fn bin_width(&self) -> F {
        match F::from(self.counts.len()) {
            Some(n) if !self.counts.is_empty() => (self.upper - self.lower) / n,
            _ => F::zero(),
        }
    }

    /// The `len() + 1` bin edges. The final edge is exactly `upper`.
    pub fn breaks(&self) -> Vec<F> {
        let nbins = self.counts.len();
        let span = self.upper - self.lower;

        let mut edges: Vec<F> = (0..nbins)
            .map(|i| {
                let frac = F::from(i).unwrap_or_else(F::zero)
                    / F::from(nbins).unwrap_or_else(F::one);
                self.lower + span * frac
            })
            .collect();
        edges.push(self.upper);
        edges
    }

    /// Midpoint of each bin, handy as the x coordinate when plotting.
    pub fn mids(&self) -> Vec<F> {
        let two = F::one() + F::one();
        self.breaks()
            .windows(2)
            .map(|w| (w[0] + w[1]) / two)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn two_sided() -> Histogram<f64> {
        Histogram::new(vec![1, 0, 4, 2], -1.0, 1.0, vec![])
    }

    #[rstest]
    fn test_total_and_len(two_sided: Histogram<f64>) {
        assert_eq!(two_sided.len(), 4);
        assert_eq!(two_sided.total(), 7);
        assert_eq!(two_sided.dropped().is_empty(), true);
    }

    #[rstest]
    fn test_breaks_cover_range(two_sided: Histogram<f64>) {
        assert_eq!(two_sided.breaks(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(two_sided.bin_width(), 0.5);
    }

    #[rstest]
    fn test_mids(two_sided: Histogram<f64>) {
        assert_eq!(two_sided.mids(), vec![-0.75, -0.25, 0.25, 0.75]);
    }

    #[rstest]
    fn test_breaks_end_exactly_on_upper() {
        let hist: Histogram<f64> = Histogram::new(vec![0; 3], 0.0, 0.1, vec![]);
        let breaks = hist.breaks();
        assert_eq!(breaks.len(), 4);
        assert_eq!(breaks[0], 0.0);
        assert_eq!(breaks[3], 0.1);
    }

    #[rstest]
    fn test_empty_histogram() {
        let hist: Histogram<f32> = Histogram::new(vec![], 0.0, 1.0, vec![]);
        assert_eq!(hist.is_empty(), true);
        assert_eq!(hist.bin_width(), 0.0);
        assert_eq!(hist.breaks(), vec![1.0]);
        assert_eq!(hist.mids().is_empty(), true);
    }
}
