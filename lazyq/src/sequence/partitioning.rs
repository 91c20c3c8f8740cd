use super::Sequence;

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Yield at most the first `n` items. The source isn't pulled beyond
    /// the `n`th item.
    pub fn take(self, n: usize) -> Sequence<std::iter::Take<I>> {
        Sequence::new(self.iter.take(n))
    }

    /// Discard the first `n` items when iteration starts, then yield the
    /// rest.
    pub fn skip(self, n: usize) -> Sequence<std::iter::Skip<I>> {
        Sequence::new(self.iter.skip(n))
    }

    /// Yield items until `pred` first fails. Nothing after the first
    /// failing item is examined.
    pub fn take_while<P>(self, pred: P) -> Sequence<std::iter::TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Sequence::new(self.iter.take_while(pred))
    }

    /// Discard items while `pred` holds, then yield everything from the
    /// first failing item on, whether `pred` holds for it or not.
    pub fn skip_while<P>(self, pred: P) -> Sequence<std::iter::SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Sequence::new(self.iter.skip_while(pred))
    }
}
