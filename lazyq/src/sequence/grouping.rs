use std::hash::Hash;

use crate::iter::GroupBy;

use super::Sequence;

type Identity<T> = fn(T) -> T;

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Group items by `key`.
    ///
    /// Yields `(key, group)` pairs. The whole source is consumed before
    /// the first pair comes out, as a key may recur anywhere. Keys come
    /// out in the order they were first seen; each group keeps source
    /// order. Equal keys share one group.
    pub fn group_by<K, KF>(
        self,
        key: KF,
    ) -> Sequence<GroupBy<I, KF, Identity<I::Item>, K, I::Item>>
    where
        KF: FnMut(&I::Item) -> K,
        K: Eq + Hash,
    {
        self.group_by_with(key, std::convert::identity as Identity<I::Item>)
    }

    /// Group items by `key`, storing `value(item)` in the groups.
    pub fn group_by_with<K, V, KF, VF>(
        self,
        key: KF,
        value: VF,
    ) -> Sequence<GroupBy<I, KF, VF, K, V>>
    where
        KF: FnMut(&I::Item) -> K,
        VF: FnMut(I::Item) -> V,
        K: Eq + Hash,
    {
        Sequence::new(GroupBy::new(self.iter, key, value))
    }
}
