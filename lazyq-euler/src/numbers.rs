//! Number sequences shared by the problems.
use ibig::UBig;
use lazyq::{Result, Sequence};

/// The Fibonacci numbers 1, 1, 2, 3, 5, ...
///
/// Ends with the largest term that fits in `u64`.
pub fn fibonacci() -> Sequence<impl Iterator<Item = u64> + Clone> {
    let (mut previous, mut current) = (0u64, Some(1u64));
    Sequence::from_fn(move || {
        let term = current?;
        current = previous.checked_add(term);
        previous = term;
        Some(term)
    })
}

/// The Fibonacci numbers without an upper bound.
pub fn big_fibonacci() -> Sequence<impl Iterator<Item = UBig> + Clone> {
    let (mut previous, mut current) = (UBig::from(0u8), UBig::from(1u8));
    Sequence::from_fn(move || {
        let next = &previous + &current;
        previous = std::mem::replace(&mut current, next);
        Some(previous.clone())
    })
}

/// The primes in ascending order, by trial division against the primes
/// found so far.
///
/// Candidates after 3 alternate steps of 2 and 4, skipping multiples of
/// 2 and 3.
#[derive(Debug, Clone)]
pub struct Primes {
    found: Vec<u64>,
    candidate: u64,
    step: u64,
}

impl Primes {
    pub fn new() -> Self {
        Self {
            found: Vec::new(),
            candidate: 5,
            step: 2,
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if let Some(&small) = [2, 3].get(self.found.len()) {
            self.found.push(small);
            return Some(small);
        }
        loop {
            let n = self.candidate;
            self.candidate = self.candidate.checked_add(self.step)?;
            self.step ^= 6;
            let is_prime = Sequence::new(&self.found)
                .take_while(|&&p| p * p <= n)
                .all_where(|&&p| n % p != 0);
            if is_prime {
                self.found.push(n);
                return Some(n);
            }
        }
    }
}

/// The divisors of `n` up to its square root, ascending.
pub fn factors(n: u64) -> Sequence<impl Iterator<Item = u64>> {
    Sequence::new(1u64..)
        .take_while(move |&i| i.checked_mul(i).is_some_and(|square| square <= n))
        .where_(move |&i| n % i == 0)
}

/// The prime factors of `n` with multiplicity, smallest first.
///
/// Fails with `EmptySequence` for zero, which has no factors to start
/// from. One is returned as its own factor.
pub fn prime_factors(n: u64) -> Result<Vec<u64>> {
    let smallest = factors(n).take(2).last()?;
    if smallest == 1 {
        return Ok(vec![n]);
    }
    let mut result = prime_factors(smallest)?;
    result.extend(prime_factors(n / smallest)?);
    Ok(result)
}
