use num_traits::{ToPrimitive, Zero};

use crate::error::{self, empty_sequence, not_numeric};

use super::Sequence;

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Left fold.
    ///
    /// `f` receives the accumulator so far and the next item. The first
    /// call receives `initial`, which may be `None`: no seeding from the
    /// first item takes place, so a fold without an initial value must
    /// handle a `None` accumulator itself.
    ///
    /// For an empty sequence this returns `initial` if `allow_empty` is
    /// set, and fails with `EmptySequence` otherwise.
    pub fn aggregate<A, F>(
        self,
        mut f: F,
        initial: Option<A>,
        allow_empty: bool,
    ) -> error::Result<Option<A>>
    where
        F: FnMut(Option<A>, I::Item) -> A,
    {
        let mut iter = self.iter;
        let Some(first) = iter.next() else {
            if allow_empty {
                return Ok(initial);
            }
            return Err(empty_sequence("aggregate"));
        };
        let mut accumulator = f(initial, first);
        for item in iter {
            accumulator = f(Some(accumulator), item);
        }
        Ok(Some(accumulator))
    }

    /// Left fold from a seed. An empty sequence yields the seed.
    pub fn aggregate_from<A, F>(self, initial: A, f: F) -> A
    where
        F: FnMut(A, I::Item) -> A,
    {
        self.iter.fold(initial, f)
    }

    /// Sum of the items.
    ///
    /// Unlike the mathematical convention, an empty sum is an error
    /// (`EmptySequence`) rather than zero.
    pub fn sum(self) -> error::Result<I::Item>
    where
        I::Item: Zero,
    {
        let mut iter = self.iter;
        let first = iter.next().ok_or_else(|| empty_sequence("sum"))?;
        Ok(iter.fold(first, |total, item| total + item))
    }

    /// Sum of `selector(item)` over the items. Fails on an empty sequence.
    pub fn sum_by<U, F>(self, selector: F) -> error::Result<U>
    where
        F: FnMut(I::Item) -> U,
        U: Zero,
    {
        self.select(selector).sum()
    }

    /// Mean of the items.
    ///
    /// The items are buffered and traversed twice, once to count and once
    /// to sum. The sum is taken in `f64`, so narrow integer items can't
    /// overflow. Fails with `EmptySequence` when there are no items and
    /// with `NotNumeric` when an item has no `f64` value.
    pub fn average(self) -> error::Result<f64>
    where
        I::Item: ToPrimitive,
    {
        let items = self.to_list();
        let count = Sequence::new(items.iter()).count();
        if count == 0 {
            return Err(empty_sequence("average"));
        }
        let total = Sequence::new(items.iter())
            .select(|item| item.to_f64().ok_or_else(not_numeric))
            .aggregate_from(Ok(0.0), |total: error::Result<f64>, value| {
                Ok(total? + value?)
            })?;
        Ok(total / count as f64)
    }

    /// Mean of `selector(item)` over the items.
    pub fn average_by<U, F>(self, selector: F) -> error::Result<f64>
    where
        F: FnMut(I::Item) -> U,
        U: ToPrimitive,
    {
        self.select(selector).average()
    }

    /// The smallest item. On ties, the first one wins.
    pub fn min(self) -> error::Result<I::Item>
    where
        I::Item: PartialOrd,
    {
        let mut iter = self.iter;
        let mut lowest = iter.next().ok_or_else(|| empty_sequence("min"))?;
        for item in iter {
            if item < lowest {
                lowest = item;
            }
        }
        Ok(lowest)
    }

    /// The smallest item for which `pred` holds. `pred` filters, it does
    /// not compare.
    pub fn min_where<P>(self, pred: P) -> error::Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
        I::Item: PartialOrd,
    {
        self.where_(pred).min()
    }

    /// The largest item. On ties, the first one wins.
    pub fn max(self) -> error::Result<I::Item>
    where
        I::Item: PartialOrd,
    {
        let mut iter = self.iter;
        let mut highest = iter.next().ok_or_else(|| empty_sequence("max"))?;
        for item in iter {
            if item > highest {
                highest = item;
            }
        }
        Ok(highest)
    }

    /// The largest item for which `pred` holds.
    pub fn max_where<P>(self, pred: P) -> error::Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
        I::Item: PartialOrd,
    {
        self.where_(pred).max()
    }

    pub fn count(self) -> usize {
        self.iter.count()
    }

    pub fn count_where<P>(self, pred: P) -> usize
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.where_(pred).count()
    }
}
