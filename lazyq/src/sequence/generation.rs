use crate::iter::{DefaultIfEmpty, ZipWith};

use super::Sequence;

impl<T: Clone> Sequence<std::iter::Repeat<T>> {
    /// An infinite sequence of `value`. Limit it with `take` or
    /// `take_while`; eager operators on it never return.
    pub fn repeat(value: T) -> Self {
        Sequence::new(std::iter::repeat(value))
    }
}

impl Sequence<std::ops::Range<i64>> {
    /// `count` consecutive integers starting at `start`.
    pub fn range(start: i64, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Sequence::new(start..start.saturating_add(count))
    }
}

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Yield this sequence fully, then `other` fully.
    pub fn concat<J>(self, other: J) -> Sequence<std::iter::Chain<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        Sequence::new(self.iter.chain(other))
    }

    /// Pair items positionally. Stops as soon as either side runs out;
    /// the longer side's tail is dropped, not padded.
    pub fn zip<J>(self, other: J) -> Sequence<std::iter::Zip<I, J::IntoIter>>
    where
        J: IntoIterator,
    {
        Sequence::new(self.iter.zip(other))
    }

    /// Combine items positionally with `selector`, stopping at the shorter
    /// side like [`zip`](Self::zip).
    pub fn zip_with<J, F, V>(self, other: J, selector: F) -> Sequence<ZipWith<I, J::IntoIter, F>>
    where
        J: IntoIterator,
        F: FnMut(I::Item, J::Item) -> V,
    {
        Sequence::new(ZipWith::new(self.iter, other.into_iter(), selector))
    }

    /// Do both sequences hold equal items in the same order?
    ///
    /// Unlike `zip`, a length mismatch counts: a sequence is not equal to
    /// one of its proper prefixes.
    pub fn sequence_equal<J>(self, other: J) -> bool
    where
        J: IntoIterator,
        I::Item: PartialEq<J::Item>,
    {
        let mut left = self.iter;
        let mut right = other.into_iter();
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }

    /// This sequence, or a sequence of just `default` if this one turns
    /// out to be empty.
    pub fn default_if_empty(self, default: I::Item) -> Sequence<DefaultIfEmpty<I>> {
        Sequence::new(DefaultIfEmpty::new(self.iter, default))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::sequence::counted;

    #[test]
    fn test_repeat() {
        assert_eq!(Sequence::repeat(6).take(3).to_list(), vec![6, 6, 6]);
    }

    #[test]
    fn test_range() {
        assert_eq!(Sequence::range(3, 4).to_list(), vec![3, 4, 5, 6]);
        assert_eq!(Sequence::range(3, 0).count(), 0);
    }

    #[test]
    fn test_concat() {
        let items = Sequence::new(1..=2).concat(vec![5, 6]).to_list();
        assert_eq!(items, vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_zip_truncates_to_shorter() {
        let pairs = Sequence::new(1..=3).zip(vec!['a', 'b']).to_list();
        assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_zip_with_infinite_side() {
        let sums = Sequence::new(vec![1, 2, 3])
            .zip_with(Sequence::repeat(10), |a, b| a + b)
            .to_list();
        assert_eq!(sums, vec![11, 12, 13]);
    }

    #[test]
    fn test_sequence_equal() {
        assert!(Sequence::new(1..=3).sequence_equal(vec![1, 2, 3]));
        assert!(!Sequence::new(1..=3).sequence_equal(vec![1, 2, 4]));
        assert!(Sequence::new(Vec::<i32>::new()).sequence_equal(Vec::<i32>::new()));
    }

    #[test]
    fn test_sequence_equal_checks_length() {
        assert!(!Sequence::new(1..=3).sequence_equal(vec![1, 2]));
        assert!(!Sequence::new(1..=2).sequence_equal(vec![1, 2, 3]));
    }

    #[test]
    fn test_default_if_empty() {
        let items = Sequence::new(Vec::<i32>::new()).default_if_empty(7).to_list();
        assert_eq!(items, vec![7]);
        let items = Sequence::new(vec![1, 2]).default_if_empty(7).to_list();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_default_if_empty_defers_until_pulled() {
        let pulled = Cell::new(0);
        let mut items = counted(vec![5], &pulled).default_if_empty(0).into_iter();
        assert_eq!(pulled.get(), 0);
        assert_eq!(items.next(), Some(5));
        assert_eq!(pulled.get(), 1);
        assert_eq!(items.next(), None);
    }
}
