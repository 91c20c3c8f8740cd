use crate::iter::SelectMany;

use super::Sequence;

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Map each item through `f`.
    pub fn select<U, F>(self, f: F) -> Sequence<std::iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Sequence::new(self.iter.map(f))
    }

    /// Expand each item into a sub-sequence and flatten the result,
    /// depth-first in source order.
    pub fn select_many<J, F>(self, f: F) -> Sequence<std::iter::FlatMap<I, J, F>>
    where
        J: IntoIterator,
        F: FnMut(I::Item) -> J,
    {
        Sequence::new(self.iter.flat_map(f))
    }

    /// Like [`select_many`](Self::select_many), with each sub-item passed
    /// through `result` together with the item it was expanded from.
    pub fn select_many_with<J, F, R, V>(
        self,
        collection: F,
        result: R,
    ) -> Sequence<SelectMany<I, F, R, J>>
    where
        J: IntoIterator,
        F: FnMut(&I::Item) -> J,
        R: FnMut(&I::Item, J::Item) -> V,
    {
        Sequence::new(SelectMany::new(self.iter, collection, result))
    }
}
