use std::any::Any;

use crate::iter::OfType;

use super::Sequence;

/// Downcast an item to exactly the type `U`.
///
/// This is how `of_type` sees the runtime type of an item. It is
/// implemented for boxed and borrowed `dyn Any`.
pub trait Downcast<U>: Sized {
    fn downcast_exact(self) -> Option<U>;
}

impl<U: Any> Downcast<U> for Box<dyn Any> {
    fn downcast_exact(self) -> Option<U> {
        self.downcast::<U>().ok().map(|boxed| *boxed)
    }
}

impl<U: Any> Downcast<U> for Box<dyn Any + Send> {
    fn downcast_exact(self) -> Option<U> {
        self.downcast::<U>().ok().map(|boxed| *boxed)
    }
}

impl<'a, U: Any> Downcast<&'a U> for &'a dyn Any {
    fn downcast_exact(self) -> Option<&'a U> {
        self.downcast_ref::<U>()
    }
}

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Keep the items for which `pred` holds, in order.
    pub fn where_<P>(self, pred: P) -> Sequence<std::iter::Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Sequence::new(self.iter.filter(pred))
    }

    /// Keep the items whose runtime type is exactly `U`.
    pub fn of_type<U>(self) -> Sequence<OfType<I, U>>
    where
        I::Item: Downcast<U>,
    {
        Sequence::new(OfType::new(self.iter))
    }
}
