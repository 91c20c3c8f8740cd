//! Lazy, LINQ-style query operators over iterators.
//!
//! A [`Sequence`] wraps any iterator and offers restriction, projection,
//! partitioning, ordering, grouping, set, conversion, element, quantifier,
//! aggregate, join and generation operators. Operators that return a
//! sequence never pull from their source when they are called; work
//! happens when the resulting sequence is consumed.
//!
//! ```
//! use lazyq::Sequence;
//!
//! let evens = Sequence::new(1..=10).where_(|n| n % 2 == 0).to_list();
//! assert_eq!(evens, vec![2, 4, 6, 8, 10]);
//! ```
pub mod compare;
pub mod error;
pub mod iter;
mod sequence;
pub mod source;
mod truthy;

pub use compare::Compare;
pub use error::{Error, Result};
pub use sequence::{Dict, Downcast, Sequence};
pub use truthy::Truthy;
