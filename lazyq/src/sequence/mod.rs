/// A sequence is a lazy, pull-based producer of items with a LINQ-style
/// set of operators on top.
///
/// The operators are grouped by capability, one `impl` block per module.
mod aggregates;
mod conversion;
mod elements;
mod generation;
mod grouping;
mod joins;
mod ordering;
mod partitioning;
mod projection;
mod quantifiers;
mod restriction;
mod sets;

pub use restriction::Downcast;

/// An insertion-ordered map, as produced by `to_dict` and used for groups.
pub type Dict<K, V> = indexmap::IndexMap<K, V, ahash::RandomState>;

/// A lazy sequence over an underlying iterator.
///
/// Constructing a derived sequence never pulls from the source: work
/// happens when the sequence is consumed by a converting, element,
/// quantifier or aggregate operator, or by iterating it with `for`.
///
/// A sequence is consumed by iteration. If the underlying iterator is
/// `Clone` (a sequence over a `Vec` or a range, say), the sequence can be
/// cloned and traversed again; sequences over one-shot producers can't.
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    iter: I,
}

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Create a sequence over anything that can be iterated.
    pub fn new<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iterable.into_iter(),
        }
    }
}

impl<I> IntoIterator for Sequence<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.iter
    }
}

impl<T> From<Vec<T>> for Sequence<std::vec::IntoIter<T>> {
    fn from(items: Vec<T>) -> Self {
        Sequence::new(items)
    }
}

impl<T> FromIterator<T> for Sequence<std::vec::IntoIter<T>> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T, F> Sequence<std::iter::FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    /// Create a sequence from a generator closure; the sequence ends when
    /// the closure returns `None`.
    pub fn from_fn(f: F) -> Self {
        Sequence::new(std::iter::from_fn(f))
    }
}

impl<T> Sequence<std::iter::Empty<T>> {
    pub fn empty() -> Self {
        Sequence::new(std::iter::empty())
    }
}

/// `items`, counting each one pulled into `pulled`.
#[cfg(test)]
pub(crate) fn counted<'a, T: 'a>(
    items: Vec<T>,
    pulled: &'a std::cell::Cell<usize>,
) -> Sequence<impl Iterator<Item = T> + 'a> {
    Sequence::new(items).select(move |item| {
        pulled.set(pulled.get() + 1);
        item
    })
}
