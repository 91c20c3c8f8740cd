use std::hash::Hash;

use crate::iter::Join;

use super::Sequence;

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Inner equi-join with `inner`.
    ///
    /// On the first pull `inner` is grouped by `inner_key`. Then, for each
    /// item of this sequence in order, every inner item with an equal key
    /// yields `result(outer, inner)`, in inner order. Outer items without
    /// a match yield nothing.
    pub fn join<J, K, V, OK, IK, R>(
        self,
        inner: J,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> Sequence<Join<I, J::IntoIter, K, OK, IK, R>>
    where
        J: IntoIterator,
        K: Eq + Hash,
        OK: FnMut(&I::Item) -> K,
        IK: FnMut(&J::Item) -> K,
        R: FnMut(&I::Item, &J::Item) -> V,
    {
        Sequence::new(Join::new(
            self.iter,
            inner.into_iter(),
            outer_key,
            inner_key,
            result,
        ))
    }
}
