use crate::compare::{Compare, KeyCompare, ThenCompare};
use crate::iter::{OrderBy, Reversed};

use super::Sequence;

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Sort by `key`, ascending.
    ///
    /// The sort is stable: items with equal keys keep their source order.
    /// The whole source is materialized on the first pull, so this never
    /// yields anything for an infinite source.
    pub fn order_by<K, F>(self, key: F) -> Sequence<OrderBy<I, KeyCompare<F, K>>>
    where
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        Sequence::new(OrderBy::new(self.iter, KeyCompare::ascending(key)))
    }

    /// Sort by `key`, descending. Stable, like [`order_by`](Self::order_by).
    pub fn order_by_descending<K, F>(self, key: F) -> Sequence<OrderBy<I, KeyCompare<F, K>>>
    where
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        Sequence::new(OrderBy::new(self.iter, KeyCompare::descending(key)))
    }

    /// Yield the items in reverse order. The whole source is materialized
    /// on the first pull.
    pub fn reversed(self) -> Sequence<Reversed<I>> {
        Sequence::new(Reversed::new(self.iter))
    }
}

impl<I, C> Sequence<OrderBy<I, C>>
where
    I: Iterator,
    C: Compare<I::Item>,
{
    /// Break ties of the preceding ordering by `key`, ascending.
    pub fn then_by<K, F>(self, key: F) -> Sequence<OrderBy<I, ThenCompare<C, KeyCompare<F, K>>>>
    where
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        Sequence::new(self.iter.then(KeyCompare::ascending(key)))
    }

    /// Break ties of the preceding ordering by `key`, descending.
    pub fn then_by_descending<K, F>(
        self,
        key: F,
    ) -> Sequence<OrderBy<I, ThenCompare<C, KeyCompare<F, K>>>>
    where
        F: FnMut(&I::Item) -> K,
        K: Ord,
    {
        Sequence::new(self.iter.then(KeyCompare::descending(key)))
    }
}
