// Element access. Each operator fails with an error where the or-default
// variant falls back to the caller's default instead.

use crate::error::{self, empty_sequence, multiple_matches};

use super::Sequence;

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// The first item.
    pub fn first(self) -> error::Result<I::Item> {
        let mut iter = self.iter;
        iter.next().ok_or_else(|| empty_sequence("first"))
    }

    /// The first item for which `pred` holds.
    pub fn first_where<P>(self, pred: P) -> error::Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.where_(pred).first()
    }

    pub fn first_or_default(self, default: I::Item) -> I::Item {
        self.first().unwrap_or(default)
    }

    pub fn first_or_default_where<P>(self, pred: P, default: I::Item) -> I::Item
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.first_where(pred).unwrap_or(default)
    }

    /// The last item.
    ///
    /// This consumes the whole sequence, so an infinite one never yields
    /// a result. Some std sources panic instead (`std::iter::repeat`
    /// reports itself as infinite).
    pub fn last(self) -> error::Result<I::Item> {
        self.iter.last().ok_or_else(|| empty_sequence("last"))
    }

    /// The last item for which `pred` holds.
    pub fn last_where<P>(self, pred: P) -> error::Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.where_(pred).last()
    }

    pub fn last_or_default(self, default: I::Item) -> I::Item {
        self.last().unwrap_or(default)
    }

    pub fn last_or_default_where<P>(self, pred: P, default: I::Item) -> I::Item
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.last_where(pred).unwrap_or(default)
    }

    /// The only item.
    ///
    /// Fails with `EmptySequence` when there is none and with
    /// `MultipleMatches` when there is more than one. At most two items
    /// are pulled.
    pub fn single(self) -> error::Result<I::Item> {
        let mut iter = self.iter;
        let one = iter.next().ok_or_else(|| empty_sequence("single"))?;
        if iter.next().is_some() {
            return Err(multiple_matches("single"));
        }
        Ok(one)
    }

    /// The only item for which `pred` holds.
    pub fn single_where<P>(self, pred: P) -> error::Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.where_(pred).single()
    }

    /// The only item, or `default` if there is none.
    ///
    /// More than one item is still an error: the default only stands in
    /// for an empty sequence.
    pub fn single_or_default(self, default: I::Item) -> error::Result<I::Item> {
        let mut iter = self.iter;
        match iter.next() {
            None => Ok(default),
            Some(one) => {
                if iter.next().is_some() {
                    Err(multiple_matches("single_or_default"))
                } else {
                    Ok(one)
                }
            }
        }
    }

    pub fn single_or_default_where<P>(self, pred: P, default: I::Item) -> error::Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.where_(pred).single_or_default(default)
    }

    /// The item at the 0-based `index`.
    pub fn element_at(self, index: usize) -> error::Result<I::Item> {
        let mut len = 0;
        for item in self.iter {
            if len == index {
                return Ok(item);
            }
            len += 1;
        }
        tracing::debug!(index, len, "element_at out of range");
        Err(error::Error::IndexOutOfRange { index, len })
    }

    pub fn element_at_or_default(self, index: usize, default: I::Item) -> I::Item {
        let mut iter = self.iter;
        iter.nth(index).unwrap_or(default)
    }
}
