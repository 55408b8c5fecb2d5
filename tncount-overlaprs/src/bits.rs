use num_traits::{PrimInt, Unsigned, identities::zero};

use super::Overlapper;
use tncount_core::models::Interval;

/// Sorted-by-start interval list searched with a binary lower bound.
///
/// From the journal article: <https://academic.oup.com/bioinformatics/article/29/1/1/273289>
///
/// Intervals are sorted once at build time. A query jumps to the first interval that could
/// reach it (`start - max_len`) and walks forward until intervals begin past the query end,
/// which costs O(log n + k) for k reported overlaps.
///
/// ```
/// use tncount_overlaprs::{Bits, Overlapper, Interval};
///
/// let genes = vec![
///     Interval { start: 100u32, end: 150, val: "YAL001C" },
///     Interval { start: 200, end: 250, val: "YAL002W" },
///     Interval { start: 225, end: 275, val: "YAL003W" },
/// ];
///
/// let bits = Bits::build(genes);
/// assert_eq!(bits.find(230, 231).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    intervals: Vec<Interval<I, T>>,
    /// The length of the longest interval
    max_len: I,
}

impl<I, T> Overlapper<I, T> for Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(mut intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        intervals.sort();
        let max_len = intervals
            .iter()
            .map(|iv| iv.end.checked_sub(&iv.start).unwrap_or_else(zero::<I>))
            .max()
            .unwrap_or_else(zero::<I>);

        Bits { intervals, max_len }
    }

    #[inline]
    fn find(&self, start: I, end: I) -> Vec<Interval<I, T>> {
        self.iter_find(start, end).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(self.iter_find(start, end))
    }

    #[inline]
    fn len(&self) -> usize {
        self.intervals.len()
    }
}

impl<I, T> Bits<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    /// Intervals in start order.
    pub fn intervals(&self) -> &[Interval<I, T>] {
        &self.intervals
    }

    fn iter_find(&self, start: I, end: I) -> IterFind<'_, I, T> {
        let floor = start.checked_sub(&self.max_len).unwrap_or_else(zero::<I>);
        IterFind {
            inner: self,
            off: Self::lower_bound(floor, &self.intervals),
            start,
            end,
        }
    }

    /// Index of the first interval whose start is not below `start`.
    ///
    /// Callers subtract the longest interval length from the query start first; otherwise
    /// intervals that begin earlier but still reach the query would be skipped.
    #[inline]
    pub fn lower_bound(start: I, intervals: &[Interval<I, T>]) -> usize {
        intervals.partition_point(|iv| iv.start < start)
    }
}

/// Iterator over the intervals of a [`Bits`] overlapping a query range.
#[derive(Debug)]
pub struct IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    inner: &'a Bits<I, T>,
    off: usize,
    start: I,
    end: I,
}

impl<'a, I, T> Iterator for IterFind<'a, I, T>
where
    T: Eq + Clone + Send + Sync + 'a,
    I: PrimInt + Unsigned + Send + Sync,
{
    type Item = &'a Interval<I, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(interval) = self.inner.intervals.get(self.off) {
            self.off += 1;
            if interval.overlap(self.start, self.end) {
                return Some(interval);
            } else if interval.start >= self.end {
                break;
            }
        }
        None
    }
}
