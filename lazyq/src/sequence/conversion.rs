use std::fmt::Debug;
use std::hash::Hash;

use indexmap::map::Entry;

use crate::error;

use super::{Dict, Sequence};

impl<I> Sequence<I>
where
    I: Iterator,
{
    /// Materialize the sequence into a vector, in order.
    pub fn to_list(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    /// Build a dictionary keyed by `key(item)` holding `element(item)`.
    ///
    /// When two items produce equal keys the later element overwrites the
    /// earlier one; the key keeps the position where it was first seen.
    /// Use [`try_to_dict_by`](Self::try_to_dict_by) to fail instead.
    pub fn to_dict_by<K, V, KF, VF>(self, mut key: KF, mut element: VF) -> Dict<K, V>
    where
        KF: FnMut(&I::Item) -> K,
        VF: FnMut(I::Item) -> V,
        K: Eq + Hash,
    {
        let mut dict = Dict::default();
        for item in self.iter {
            dict.insert(key(&item), element(item));
        }
        dict
    }

    /// Build a dictionary like [`to_dict_by`](Self::to_dict_by), failing
    /// with [`Error::DuplicateKey`](crate::Error::DuplicateKey) when two
    /// items produce equal keys.
    pub fn try_to_dict_by<K, V, KF, VF>(
        self,
        mut key: KF,
        mut element: VF,
    ) -> error::Result<Dict<K, V>>
    where
        KF: FnMut(&I::Item) -> K,
        VF: FnMut(I::Item) -> V,
        K: Eq + Hash + Debug,
    {
        let mut dict = Dict::default();
        for item in self.iter {
            match dict.entry(key(&item)) {
                Entry::Occupied(entry) => {
                    return Err(error::Error::DuplicateKey {
                        key: format!("{:?}", entry.key()),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(element(item));
                }
            }
        }
        Ok(dict)
    }
}

impl<I, K, V> Sequence<I>
where
    I: Iterator<Item = (K, V)>,
    K: Eq + Hash,
{
    /// Build a dictionary from a sequence of pairs. Later pairs overwrite
    /// earlier ones with an equal key.
    pub fn to_dict(self) -> Dict<K, V> {
        self.iter.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_list() {
        assert_eq!(Sequence::new(1..=3).to_list(), vec![1, 2, 3]);
    }

    #[test]
    fn test_to_dict_from_pairs() {
        let dict = Sequence::new(1..=10)
            .where_(|&n| n <= 4)
            .select(|n| (n, 2 * n))
            .to_dict();
        assert_eq!(dict.into_iter().collect::<Vec<_>>(), vec![(1, 2), (2, 4), (3, 6), (4, 8)]);
    }

    #[test]
    fn test_to_dict_by() {
        let dict = Sequence::new(1..=4).to_dict_by(|&n| n, |n| 2 * n);
        assert_eq!(dict.get(&3), Some(&6));
        assert_eq!(dict.len(), 4);
    }

    #[test]
    fn test_to_dict_by_last_write_wins() {
        let dict = Sequence::new(vec!["apple", "banana", "avocado"])
            .to_dict_by(|s| s.chars().next(), |s| s.len());
        assert_eq!(
            dict.into_iter().collect::<Vec<_>>(),
            vec![(Some('a'), 7), (Some('b'), 6)]
        );
    }

    #[test]
    fn test_try_to_dict_by_duplicate_key() {
        let result = Sequence::new(vec!["apple", "banana", "avocado"])
            .try_to_dict_by(|s| s.chars().next(), |s| s.len());
        assert_eq!(
            result,
            Err(error::Error::DuplicateKey {
                key: "Some('a')".to_string()
            })
        );
    }

    #[test]
    fn test_try_to_dict_by_unique_keys() {
        let dict = Sequence::new(vec!["apple", "banana"])
            .try_to_dict_by(|s| s.len(), |s| s)
            .unwrap();
        assert_eq!(dict[&6], "banana");
    }
}
