use std::hash::Hash;

use crate::iter::{Distinct, Membership};

use super::Sequence;

impl<I> Sequence<I>
where
    I: Iterator,
    I::Item: Eq + Hash,
{
    /// Yield each item the first time it is seen, dropping later
    /// duplicates.
    pub fn distinct(self) -> Sequence<Distinct<I>>
    where
        I::Item: Clone,
    {
        Sequence::new(Distinct::new(self.iter))
    }

    /// Yield the distinct items of this sequence, then those of `other`
    /// that weren't seen yet.
    pub fn union<J>(self, other: J) -> Sequence<Distinct<std::iter::Chain<I, J::IntoIter>>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: Clone,
    {
        Sequence::new(Distinct::new(self.iter.chain(other)))
    }

    /// Yield the items of this sequence that occur in `other`, duplicates
    /// included. `other` is collected into a set on the first pull.
    pub fn intersect<J>(self, other: J) -> Sequence<Membership<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        Sequence::new(Membership::intersect(self.iter, other.into_iter()))
    }

    /// Yield the items of this sequence that don't occur in `other`,
    /// duplicates included. `other` is collected into a set on the first
    /// pull.
    pub fn difference<J>(self, other: J) -> Sequence<Membership<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        Sequence::new(Membership::difference(self.iter, other.into_iter()))
    }
}
