use std::iter::FusedIterator;

use num_traits::Float;

use coincid_core::errors::CoincidenceError;
use coincid_core::models::Train;

/// One coincident pair: `a` from the first train, `b` from the second, with
/// `|b - a| <= dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair<F>
where
    F: Float,
{
    pub a_index: usize,
    pub b_index: usize,
    pub a: F,
    pub b: F,
}

impl<F> Pair<F>
where
    F: Float,
{
    /// Signed time difference, `b - a`.
    #[inline]
    pub fn delta(&self) -> F {
        self.b - self.a
    }

    /// Unsigned time difference, `|b - a|`.
    #[inline]
    pub fn distance(&self) -> F {
        (self.b - self.a).abs()
    }
}

/// Reject window half-widths that are negative, NaN or infinite.
pub fn check_window<F>(dt: F) -> Result<(), CoincidenceError>
where
    F: Float,
{
    if !dt.is_finite() || dt < F::zero() {
        return Err(CoincidenceError::InvalidWindow(
            dt.to_f64().unwrap_or(f64::NAN),
        ));
    }
    Ok(())
}

/// Iterator over every pair `(i, j)` with `|a[i] - b[j]| <= dt`, each exactly once.
///
/// Both trains are ascending, so the lower window bound `a[i] - dt` never moves
/// backwards. Elements of `b` that fall below it are behind every later window
/// too, and the `low` cursor skips them for good. Each window is scanned from
/// `low` until the first element past `a[i] + dt`, which keeps the whole walk
/// linear in the train lengths plus the number of pairs produced.
///
/// The window is closed on both ends: a value exactly `dt` away qualifies, and
/// so does a timestamp compared against itself.
///
/// ```
/// use coincid_core::models::Train;
/// use coincid_overlaprs::PairWindow;
///
/// let a = Train::new(&[1.0, 4.0]).unwrap();
/// let b = Train::new(&[0.0, 1.5, 3.0, 9.0]).unwrap();
///
/// let pairs: Vec<(usize, usize)> = PairWindow::new(a, b, 1.0)
///     .unwrap()
///     .map(|p| (p.a_index, p.b_index))
///     .collect();
/// assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct PairWindow<'a, F>
where
    F: Float,
{
    a: &'a [F],
    b: &'a [F],
    dt: F,
    /// Position in `a`
    ia: usize,
    /// Position in `b` within the current window
    ib: usize,
    /// First element of `b` that can still fall in a window
    low: usize,
}

impl<'a, F> PairWindow<'a, F>
where
    F: Float,
{
    pub fn new(a: Train<'a, F>, b: Train<'a, F>, dt: F) -> Result<Self, CoincidenceError> {
        check_window(dt)?;
        Ok(PairWindow {
            a: a.as_slice(),
            b: b.as_slice(),
            dt,
            ia: 0,
            ib: 0,
            low: 0,
        })
    }

    /// Current value of the forward-only cursor into `b`.
    pub fn cursor(&self) -> usize {
        self.low
    }

    pub fn dt(&self) -> F {
        self.dt
    }
}

impl<F> Iterator for PairWindow<'_, F>
where
    F: Float,
{
    type Item = Pair<F>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&a) = self.a.get(self.ia) {
            let lower = a - self.dt;
            let upper = a + self.dt;

            while let Some(&b) = self.b.get(self.ib) {
                if b > upper {
                    break;
                }

                let b_index = self.ib;
                self.ib += 1;

                if b >= lower {
                    return Some(Pair {
                        a_index: self.ia,
                        b_index,
                        a,
                        b,
                    });
                }

                // too early for this window and every later one
                self.low = self.ib;
            }

            self.ia += 1;
            self.ib = self.low;
        }

        None
    }
}

impl<F> FusedIterator for PairWindow<'_, F> where F: Float {}

/// Convenience wrapper around [`PairWindow::new`].
pub fn pairs<'a, F>(
    a: Train<'a, F>,
    b: Train<'a, F>,
    dt: F,
) -> Result<PairWindow<'a, F>, CoincidenceError>
where
    F: Float,
{
    PairWindow::new(a, b, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn brute_force(a: &[f64], b: &[f64], dt: f64) -> Vec<(usize, usize)> {
        let mut out = vec![];
        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                if *y >= x - dt && *y <= x + dt {
                    out.push((i, j));
                }
            }
        }
        out
    }

    fn collect(a: &[f64], b: &[f64], dt: f64) -> Vec<(usize, usize)> {
        let a = Train::new(a).unwrap();
        let b = Train::new(b).unwrap();
        pairs(a, b, dt)
            .unwrap()
            .map(|p| (p.a_index, p.b_index))
            .collect()
    }

    #[fixture]
    fn spikes() -> (Vec<f64>, Vec<f64>) {
        (
            vec![0.0, 0.5, 0.75, 2.0, 2.0, 3.5, 8.0],
            vec![0.25, 0.5, 1.0, 1.75, 2.0, 2.25, 6.0, 7.5, 8.25],
        )
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.25)]
    #[case(0.5)]
    #[case(1.0)]
    #[case(10.0)]
    fn test_matches_brute_force(spikes: (Vec<f64>, Vec<f64>), #[case] dt: f64) {
        let (a, b) = spikes;
        assert_eq!(collect(&a, &b, dt), brute_force(&a, &b, dt));
        assert_eq!(collect(&b, &a, dt), brute_force(&b, &a, dt));
    }

    #[rstest]
    fn test_window_is_inclusive() {
        // exactly dt away on either side
        assert_eq!(collect(&[1.0], &[0.5, 1.5], 0.5), vec![(0, 0), (0, 1)]);
    }

    #[rstest]
    fn test_self_pairs_at_zero_width() {
        let t = [1.0, 2.0, 2.0, 3.0];
        assert_eq!(
            collect(&t, &t, 0.0),
            vec![(0, 0), (1, 1), (1, 2), (2, 1), (2, 2), (3, 3)]
        );
    }

    #[rstest]
    fn test_empty_trains() {
        assert_eq!(collect(&[], &[1.0, 2.0], 1.0).is_empty(), true);
        assert_eq!(collect(&[1.0, 2.0], &[], 1.0).is_empty(), true);
    }

    #[rstest]
    fn test_cursor_only_moves_forward() {
        let a = Train::new(&[10.0, 20.0, 30.0]).unwrap();
        let b = Train::new(&[1.0, 2.0, 3.0, 19.5, 29.0, 31.0]).unwrap();
        let mut window = PairWindow::new(a, b, 1.0).unwrap();

        let mut last = window.cursor();
        let mut seen = vec![];
        while let Some(p) = window.next() {
            assert!(window.cursor() >= last);
            last = window.cursor();
            seen.push(p.b);
        }
        assert_eq!(seen, vec![19.5, 29.0, 31.0]);
        assert_eq!(window.cursor(), 4);
        assert_eq!(window.next(), None);
    }

    #[rstest]
    fn test_pair_deltas() {
        let p = Pair {
            a_index: 0,
            b_index: 0,
            a: 2.0,
            b: 1.5,
        };
        assert_eq!(p.delta(), -0.5);
        assert_eq!(p.distance(), 0.5);
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_window_rejected(#[case] dt: f64) {
        let t = Train::new(&[1.0]).unwrap();
        assert!(matches!(
            PairWindow::new(t, t, dt),
            Err(CoincidenceError::InvalidWindow(_))
        ));
    }
}
