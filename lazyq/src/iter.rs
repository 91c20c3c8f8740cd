//! Iterator adapters behind the [`Sequence`](crate::Sequence) operators.
//!
//! Where the standard library already has the right adapter (`Filter`,
//! `Map`, `Take`, `SkipWhile` and friends) the operators use that. The
//! adapters here cover the rest. The eager ones (`OrderBy`, `Reversed`,
//! `GroupBy`, the `other` side of `Membership` and the inner side of
//! `Join`) only materialize on the first call to `next`.
use std::hash::Hash;
use std::marker::PhantomData;

use ahash::{HashMap, HashSet};
use tracing::trace;

use crate::compare::{Compare, ThenCompare};
use crate::sequence::{Dict, Downcast, Sequence};

/// Yields the items that downcast to exactly `U`.
pub struct OfType<I, U> {
    iter: I,
    _type: PhantomData<fn() -> U>,
}

impl<I, U> OfType<I, U> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            _type: PhantomData,
        }
    }
}

impl<I, U> Iterator for OfType<I, U>
where
    I: Iterator,
    I::Item: Downcast<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.iter
            .by_ref()
            .find_map(<I::Item as Downcast<U>>::downcast_exact)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Flattens each item into a sub-sequence, passing the item along to the
/// result selector.
pub struct SelectMany<I, F, R, J>
where
    I: Iterator,
    J: IntoIterator,
{
    iter: I,
    collection: F,
    result: R,
    current: Option<(I::Item, J::IntoIter)>,
}

impl<I, F, R, J> SelectMany<I, F, R, J>
where
    I: Iterator,
    J: IntoIterator,
{
    pub(crate) fn new(iter: I, collection: F, result: R) -> Self {
        Self {
            iter,
            collection,
            result,
            current: None,
        }
    }
}

impl<I, F, R, J, V> Iterator for SelectMany<I, F, R, J>
where
    I: Iterator,
    J: IntoIterator,
    F: FnMut(&I::Item) -> J,
    R: FnMut(&I::Item, J::Item) -> V,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        loop {
            if let Some((outer, inner)) = &mut self.current {
                if let Some(item) = inner.next() {
                    return Some((self.result)(&*outer, item));
                }
            }
            let outer = self.iter.next()?;
            let inner = (self.collection)(&outer).into_iter();
            self.current = Some((outer, inner));
        }
    }
}

/// Sorts the whole source on first pull, then yields in order.
pub struct OrderBy<I, C>
where
    I: Iterator,
{
    source: I,
    compare: C,
    sorted: Option<std::vec::IntoIter<I::Item>>,
}

impl<I, C> OrderBy<I, C>
where
    I: Iterator,
{
    pub(crate) fn new(source: I, compare: C) -> Self {
        Self {
            source,
            compare,
            sorted: None,
        }
    }

    pub(crate) fn then<N>(self, then: N) -> OrderBy<I, ThenCompare<C, N>> {
        debug_assert!(self.sorted.is_none());
        OrderBy::new(self.source, ThenCompare::new(self.compare, then))
    }
}

impl<I, C> Iterator for OrderBy<I, C>
where
    I: Iterator,
    C: Compare<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.sorted.is_none() {
            let mut items = self.source.by_ref().collect::<Vec<_>>();
            trace!(len = items.len(), "materialized order_by");
            // sort_by is stable, so equal keys keep their source order
            items.sort_by(|a, b| self.compare.compare(a, b));
            self.sorted = Some(items.into_iter());
        }
        self.sorted.as_mut()?.next()
    }
}

/// Yields the source in reverse order, materializing it on first pull.
pub struct Reversed<I>
where
    I: Iterator,
{
    source: I,
    reversed: Option<std::iter::Rev<std::vec::IntoIter<I::Item>>>,
}

impl<I> Reversed<I>
where
    I: Iterator,
{
    pub(crate) fn new(source: I) -> Self {
        Self {
            source,
            reversed: None,
        }
    }
}

impl<I> Iterator for Reversed<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.reversed.is_none() {
            let items = self.source.by_ref().collect::<Vec<_>>();
            trace!(len = items.len(), "materialized reversed");
            self.reversed = Some(items.into_iter().rev());
        }
        self.reversed.as_mut()?.next()
    }
}

/// Collects the whole source into groups on first pull, then yields
/// `(key, group)` pairs in first-seen key order.
pub struct GroupBy<I, KF, VF, K, V>
where
    I: Iterator,
{
    source: I,
    key: KF,
    value: VF,
    groups: Option<indexmap::map::IntoIter<K, Vec<V>>>,
}

impl<I, KF, VF, K, V> GroupBy<I, KF, VF, K, V>
where
    I: Iterator,
{
    pub(crate) fn new(source: I, key: KF, value: VF) -> Self {
        Self {
            source,
            key,
            value,
            groups: None,
        }
    }
}

impl<I, KF, VF, K, V> Iterator for GroupBy<I, KF, VF, K, V>
where
    I: Iterator,
    KF: FnMut(&I::Item) -> K,
    VF: FnMut(I::Item) -> V,
    K: Eq + Hash,
{
    type Item = (K, Sequence<std::vec::IntoIter<V>>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.groups.is_none() {
            let mut groups: Dict<K, Vec<V>> = Dict::default();
            for item in self.source.by_ref() {
                let key = (self.key)(&item);
                groups.entry(key).or_default().push((self.value)(item));
            }
            trace!(groups = groups.len(), "materialized group_by");
            self.groups = Some(groups.into_iter());
        }
        self.groups
            .as_mut()?
            .next()
            .map(|(key, values)| (key, Sequence::from(values)))
    }
}

/// Yields each item the first time it is seen.
pub struct Distinct<I>
where
    I: Iterator,
{
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Distinct<I>
where
    I: Iterator,
{
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            seen: HashSet::default(),
        }
    }
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let seen = &mut self.seen;
        self.iter.by_ref().find(|item| seen.insert(item.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// Filters the source by membership in `other`, which is collected into a
/// set on first pull. Keeps members for intersect, non-members for
/// difference.
pub struct Membership<I, J>
where
    I: Iterator,
{
    source: I,
    other: Option<J>,
    members: HashSet<I::Item>,
    keep: bool,
}

impl<I, J> Membership<I, J>
where
    I: Iterator,
{
    pub(crate) fn intersect(source: I, other: J) -> Self {
        Self::new(source, other, true)
    }

    pub(crate) fn difference(source: I, other: J) -> Self {
        Self::new(source, other, false)
    }

    fn new(source: I, other: J, keep: bool) -> Self {
        Self {
            source,
            other: Some(other),
            members: HashSet::default(),
            keep,
        }
    }
}

impl<I, J> Iterator for Membership<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    I::Item: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(other) = self.other.take() {
            self.members.extend(other);
            trace!(len = self.members.len(), "materialized set operand");
        }
        let members = &self.members;
        let keep = self.keep;
        self.source
            .by_ref()
            .find(|item| members.contains(item) == keep)
    }
}

/// Inner equi-join. The inner side is grouped by key on first pull; the
/// outer side is streamed.
pub struct Join<I, J, K, OK, IK, R>
where
    I: Iterator,
    J: Iterator,
{
    outer: I,
    inner: Option<J>,
    outer_key: OK,
    inner_key: IK,
    result: R,
    lookup: HashMap<K, Vec<J::Item>>,
    current: Option<(I::Item, K)>,
    index: usize,
}

impl<I, J, K, OK, IK, R> Join<I, J, K, OK, IK, R>
where
    I: Iterator,
    J: Iterator,
{
    pub(crate) fn new(outer: I, inner: J, outer_key: OK, inner_key: IK, result: R) -> Self {
        Self {
            outer,
            inner: Some(inner),
            outer_key,
            inner_key,
            result,
            lookup: HashMap::default(),
            current: None,
            index: 0,
        }
    }
}

impl<I, J, K, OK, IK, R, V> Iterator for Join<I, J, K, OK, IK, R>
where
    I: Iterator,
    J: Iterator,
    K: Eq + Hash,
    OK: FnMut(&I::Item) -> K,
    IK: FnMut(&J::Item) -> K,
    R: FnMut(&I::Item, &J::Item) -> V,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if let Some(inner) = self.inner.take() {
            for item in inner {
                let key = (self.inner_key)(&item);
                self.lookup.entry(key).or_default().push(item);
            }
            trace!(keys = self.lookup.len(), "materialized join inner side");
        }
        loop {
            if let Some((outer, key)) = &self.current {
                if let Some(inner) = self
                    .lookup
                    .get(key)
                    .and_then(|group| group.get(self.index))
                {
                    self.index += 1;
                    return Some((self.result)(outer, inner));
                }
            }
            let outer = self.outer.next()?;
            let key = (self.outer_key)(&outer);
            self.current = Some((outer, key));
            self.index = 0;
        }
    }
}

/// Pairs items positionally and combines them, stopping at the shorter
/// side.
pub struct ZipWith<I, J, F> {
    left: I,
    right: J,
    selector: F,
}

impl<I, J, F> ZipWith<I, J, F> {
    pub(crate) fn new(left: I, right: J, selector: F) -> Self {
        Self {
            left,
            right,
            selector,
        }
    }
}

impl<I, J, F, V> Iterator for ZipWith<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(I::Item, J::Item) -> V,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let left = self.left.next()?;
        let right = self.right.next()?;
        Some((self.selector)(left, right))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lower, left_upper) = self.left.size_hint();
        let (right_lower, right_upper) = self.right.size_hint();
        let upper = match (left_upper, right_upper) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (Some(l), None) => Some(l),
            (None, upper) => upper,
        };
        (left_lower.min(right_lower), upper)
    }
}

/// Yields the source, or the default alone if the source turns out empty.
pub struct DefaultIfEmpty<I>
where
    I: Iterator,
{
    iter: I,
    default: Option<I::Item>,
}

impl<I> DefaultIfEmpty<I>
where
    I: Iterator,
{
    pub(crate) fn new(iter: I, default: I::Item) -> Self {
        Self {
            iter,
            default: Some(default),
        }
    }
}

impl<I> Iterator for DefaultIfEmpty<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.iter.next() {
            Some(item) => {
                self.default = None;
                Some(item)
            }
            None => self.default.take(),
        }
    }
}
