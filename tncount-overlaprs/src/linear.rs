use num_traits::{PrimInt, Unsigned};

use super::Overlapper;
use tncount_core::models::Interval;

/// Unindexed interval list: every query checks every interval.
///
/// O(n) per query. Fine for a few thousand features, and the reference the indexed
/// backends are tested against.
#[derive(Debug, Clone)]
pub struct LinearScan<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    intervals: Vec<Interval<I, T>>,
}

impl<I, T> Overlapper<I, T> for LinearScan<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized,
    {
        LinearScan { intervals }
    }

    fn find(&self, start: I, end: I) -> Vec<Interval<I, T>> {
        self.find_iter(start, end).cloned().collect()
    }

    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a> {
        Box::new(
            self.intervals
                .iter()
                .filter(move |iv| iv.overlap(start, end)),
        )
    }

    fn len(&self) -> usize {
        self.intervals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bits;

    use rstest::*;

    #[rstest]
    fn test_agrees_with_bits() {
        let intervals: Vec<Interval<u64, usize>> = (0..200u64)
            .map(|i| Interval {
                start: (i * 37) % 1000,
                end: (i * 37) % 1000 + 1 + (i * 13) % 90,
                val: i as usize,
            })
            .collect();

        let linear = LinearScan::build(intervals.clone());
        let bits = Bits::build(intervals);

        for pos in 0..1100u64 {
            let mut a: Vec<usize> = linear.find_iter(pos, pos + 1).map(|iv| iv.val).collect();
            let mut b: Vec<usize> = bits.find_iter(pos, pos + 1).map(|iv| iv.val).collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "mismatch at position {}", pos);
        }
    }
}
