use num_traits::Float;

use crate::errors::CoincidenceError;

/// An ascending sequence of event timestamps, borrowed for the duration of a call.
///
/// Construction checks that every timestamp is finite and that the sequence never
/// decreases. Equal neighbours are allowed: duplicate events are legitimate and
/// every copy takes part in pairing.
///
/// ```
/// use coincid_core::models::Train;
///
/// let spikes = [0.5, 1.0, 1.0, 2.25];
/// let train = Train::new(&spikes).unwrap();
/// assert_eq!(train.len(), 4);
/// assert_eq!(train.last(), Some(2.25));
///
/// assert!(Train::new(&[2.0, 1.0]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Train<'a, F>
where
    F: Float,
{
    times: &'a [F],
}

impl<'a, F> Train<'a, F>
where
    F: Float,
{
    pub fn new(times: &'a [F]) -> Result<Self, CoincidenceError> {
        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(CoincidenceError::NonFiniteTimestamp { index });
        }

        if let Some(pos) = times.windows(2).position(|w| w[1] < w[0]) {
            return Err(CoincidenceError::UnsortedTrain { index: pos + 1 });
        }

        Ok(Train { times })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [F] {
        self.times
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<F> {
        self.times.get(index).copied()
    }

    pub fn first(&self) -> Option<F> {
        self.times.first().copied()
    }

    pub fn last(&self) -> Option<F> {
        self.times.last().copied()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'a, F>> {
        self.times.iter().copied()
    }
}

impl<'a, F> TryFrom<&'a [F]> for Train<'a, F>
where
    F: Float,
{
    type Error = CoincidenceError;

    fn try_from(times: &'a [F]) -> Result<Self, Self::Error> {
        Train::new(times)
    }
}

impl<'a, F> IntoIterator for Train<'a, F>
where
    F: Float,
{
    type Item = F;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter().copied()
    }
}
