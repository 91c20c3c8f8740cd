// Comparers used by `order_by` and `then_by`. They are composed at the
// type level so a chain of ordering keys doesn't need dynamic dispatch.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// Compare two items of a sequence.
pub trait Compare<T> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

/// Compare by a key extracted from each item.
pub struct KeyCompare<F, K> {
    key: F,
    descending: bool,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyCompare<F, K> {
    pub(crate) fn ascending(key: F) -> Self {
        Self {
            key,
            descending: false,
            _key: PhantomData,
        }
    }

    pub(crate) fn descending(key: F) -> Self {
        Self {
            key,
            descending: true,
            _key: PhantomData,
        }
    }
}

impl<T, F, K> Compare<T> for KeyCompare<F, K>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        let ordering = (self.key)(a).cmp(&(self.key)(b));
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Compare with `first`; on a tie, compare with `then`.
pub struct ThenCompare<A, B> {
    first: A,
    then: B,
}

impl<A, B> ThenCompare<A, B> {
    pub(crate) fn new(first: A, then: B) -> Self {
        Self { first, then }
    }
}

impl<T, A, B> Compare<T> for ThenCompare<A, B>
where
    A: Compare<T>,
    B: Compare<T>,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.then.compare(a, b),
            ordering => ordering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_compare() {
        let mut compare = KeyCompare::ascending(|s: &&str| s.len());
        assert_eq!(compare.compare(&"ab", &"abc"), Ordering::Less);
        let mut compare = KeyCompare::descending(|s: &&str| s.len());
        assert_eq!(compare.compare(&"ab", &"abc"), Ordering::Greater);
    }

    #[test]
    fn test_then_compare_breaks_ties() {
        let mut compare = ThenCompare::new(
            KeyCompare::ascending(|s: &&str| s.len()),
            KeyCompare::ascending(|s: &&str| s.to_string()),
        );
        assert_eq!(compare.compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(compare.compare(&"b", &"aa"), Ordering::Less);
    }
}
