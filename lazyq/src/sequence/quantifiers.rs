use crate::truthy::Truthy;

use super::Sequence;

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Is any item truthy? False for an empty sequence; stops at the first
    /// truthy item.
    pub fn any(self) -> bool
    where
        I::Item: Truthy,
    {
        self.any_where(|item| item.is_truthy())
    }

    /// Does `pred` hold for any item? Stops at the first match.
    pub fn any_where<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        let mut iter = self.iter;
        iter.any(|item| pred(&item))
    }

    /// Is every item truthy? Vacuously true for an empty sequence; stops
    /// at the first falsy item.
    pub fn all(self) -> bool
    where
        I::Item: Truthy,
    {
        self.all_where(|item| item.is_truthy())
    }

    /// Does `pred` hold for every item? Stops at the first failure.
    pub fn all_where<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        let mut iter = self.iter;
        iter.all(|item| pred(&item))
    }

    /// Does the sequence contain an item equal to `value`?
    pub fn contains(self, value: &I::Item) -> bool
    where
        I::Item: PartialEq,
    {
        self.any_where(|item| item == value)
    }
}
