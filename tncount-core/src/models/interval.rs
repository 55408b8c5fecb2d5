// Layout follows rust-lapper's Interval: https://github.com/sstadick/rust-lapper
use num_traits::{PrimInt, Unsigned, identities::one};
use std::cmp::Ordering;

/// A span `[start, end)` carrying a payload.
///
/// Overlap backends work on half-open intervals; use [`Interval::from_closed`] to lift an
/// inclusive feature span into this representation.
#[derive(Eq, Debug, Clone)]
pub struct Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    pub start: I,
    pub end: I,
    pub val: T,
}

impl<I, T> Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Build the half-open interval covering the inclusive span `[start, stop]`.
    ///
    /// Returns `None` when `stop` is the largest representable coordinate.
    pub fn from_closed(start: I, stop: I, val: T) -> Option<Self> {
        let end = stop.checked_add(&one::<I>())?;
        Some(Interval { start, end, val })
    }

    /// Whether this interval shares at least one position with `[start, end)`.
    #[inline]
    pub fn overlap(&self, start: I, end: I) -> bool {
        self.start < end && self.end > start
    }
}

impl<I, T> Ord for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<I, T>) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl<I, T> PartialOrd for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I, T> PartialEq for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<I, T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}
