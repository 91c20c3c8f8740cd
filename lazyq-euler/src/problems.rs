use ibig::UBig;
use lazyq::{Dict, Result, Sequence};

use crate::numbers::{big_fibonacci, fibonacci, prime_factors, Primes};

/// A Project Euler problem, parameterized by its size.
#[derive(Debug)]
pub(crate) struct Problem {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) solve: fn(u64) -> Result<u64>,
    /// The worked example from the problem statement, if it has one.
    pub(crate) sample: Option<Sample>,
    /// The size the problem actually asks about.
    pub(crate) input: u64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Sample {
    pub(crate) input: u64,
    pub(crate) expected: u64,
}

const fn sample(input: u64, expected: u64) -> Option<Sample> {
    Some(Sample { input, expected })
}

pub(crate) static PROBLEMS: &[Problem] = &[
    Problem {
        name: "euler_001",
        description: "sum of the natural numbers below n that are multiples of 3 or 5",
        solve: euler_001,
        sample: sample(10, 23),
        input: 1000,
    },
    Problem {
        name: "euler_002",
        description: "sum of the even Fibonacci numbers not exceeding n",
        solve: euler_002,
        sample: sample(90, 44),
        input: 4_000_000,
    },
    Problem {
        name: "euler_003",
        description: "largest prime factor of n",
        solve: euler_003,
        sample: sample(13195, 29),
        input: 600_851_475_143,
    },
    Problem {
        name: "euler_004",
        description: "largest palindrome that is a product of two n-digit numbers",
        solve: euler_004,
        sample: sample(2, 9009),
        input: 3,
    },
    Problem {
        name: "euler_005",
        description: "smallest number divisible by each of the numbers 1 to n",
        solve: euler_005,
        sample: sample(10, 2520),
        input: 20,
    },
    Problem {
        name: "euler_006",
        description: "square of the sum minus the sum of the squares of 1 to n",
        solve: euler_006,
        sample: sample(10, 2640),
        input: 100,
    },
    Problem {
        name: "euler_007",
        description: "the n-th prime, counting 2 as the 0th",
        solve: euler_007,
        sample: sample(5, 13),
        input: 10_000,
    },
    Problem {
        name: "euler_008",
        description: "largest product of n adjacent digits in the 1000-digit number",
        solve: euler_008,
        sample: sample(2, 81),
        input: 5,
    },
    Problem {
        name: "euler_009",
        description: "product abc of the Pythagorean triplet with a + b + c = n",
        solve: euler_009,
        sample: None,
        input: 1000,
    },
    Problem {
        name: "euler_010",
        description: "sum of the primes below n",
        solve: euler_010,
        sample: sample(10, 17),
        input: 2_000_000,
    },
    Problem {
        name: "euler_025",
        description: "index of the first Fibonacci number with n digits",
        solve: euler_025,
        sample: sample(3, 12),
        input: 1000,
    },
];

fn euler_001(n: u64) -> Result<u64> {
    Sequence::new(1..n)
        .where_(|i| i % 3 == 0 || i % 5 == 0)
        .sum()
}

fn euler_002(n: u64) -> Result<u64> {
    fibonacci()
        .skip(1)
        .take_while(|&i| i <= n)
        .where_(|i| i & 1 == 0)
        .sum()
}

fn euler_003(n: u64) -> Result<u64> {
    Sequence::new(prime_factors(n)?).last()
}

fn is_palindrome(n: u64) -> bool {
    let digits = n.to_string();
    Sequence::new(digits.chars()).sequence_equal(digits.chars().rev())
}

fn euler_004(n: u64) -> Result<u64> {
    let digits = move || {
        let low = 10u64.pow(u32::try_from(n.saturating_sub(1)).unwrap_or(u32::MAX));
        low..low * 10
    };
    Sequence::new(digits())
        .select_many_with(|_| digits(), |&a, b| a * b)
        .where_(|&product| is_palindrome(product))
        .max()
}

fn euler_005(n: u64) -> Result<u64> {
    let mut exponents: Dict<u64, usize> = Dict::default();
    for i in 2..=n {
        let counts = Sequence::new(prime_factors(i)?)
            .group_by(|&p| p)
            .to_dict_by(|(p, _)| *p, |(_, group)| group.count());
        for (p, count) in counts {
            let exponent = exponents.entry(p).or_insert(0);
            *exponent = (*exponent).max(count);
        }
    }
    Ok(Sequence::new(exponents)
        .select(|(p, exponent)| p.pow(exponent as u32))
        .aggregate_from(1, |a, b| a * b))
}

fn euler_006(n: u64) -> Result<u64> {
    let sum = Sequence::new(1..=n).sum()?;
    let sum_of_squares = Sequence::new(1..=n).sum_by(|i| i * i)?;
    Ok(sum * sum - sum_of_squares)
}

fn euler_007(n: u64) -> Result<u64> {
    Sequence::new(Primes::new()).element_at(usize::try_from(n).unwrap_or(usize::MAX))
}

const DIGITS: &str = concat!(
    "73167176531330624919225119674426574742355349194934",
    "96983520312774506326239578318016984801869478851843",
    "85861560789112949495459501737958331952853208805511",
    "12540698747158523863050715693290963295227443043557",
    "66896648950445244523161731856403098711121722383113",
    "62229893423380308135336276614282806444486645238749",
    "30358907296290491560440772390713810515859307960866",
    "70172427121883998797908792274921901699720888093776",
    "65727333001053367881220235421809751254540594752243",
    "52584907711670556013604839586446706324415722155397",
    "53697817977846174064955149290862569321978468622482",
    "83972241375657056057490261407972968652414535100474",
    "82166370484403199890008895243450658541227588666881",
    "16427171479924442928230863465674813919123162824586",
    "17866458359124566529476545682848912883142607690042",
    "24219022671055626321111109370544217506941658960408",
    "07198403850962455444362981230987879927244284909188",
    "84580156166097919133875499200524063689912560717606",
    "05886116467109405077541002256983155200055935729725",
    "71636269561882670428252483600823257530420752963450",
);

fn euler_008(n: u64) -> Result<u64> {
    let digits = Sequence::new(DIGITS.bytes())
        .select(|b| u64::from(b - b'0'))
        .to_list();
    let width = usize::try_from(n).unwrap_or(usize::MAX).min(digits.len());
    Sequence::new(0..=digits.len() - width)
        .select(|start| {
            Sequence::new(&digits[start..start + width]).aggregate_from(1, |a, &d| a * d)
        })
        .max()
}

fn euler_009(n: u64) -> Result<u64> {
    Sequence::new(1..n)
        .select_many_with(|&a| a..n.saturating_sub(a), |&a, b| (a, b))
        .where_(|&(a, b)| {
            let c = n - a - b;
            a * a + b * b == c * c
        })
        .select(|(a, b)| a * b * (n - a - b))
        .first()
}

fn euler_010(n: u64) -> Result<u64> {
    Sequence::new(Primes::new()).take_while(|&p| p < n).sum()
}

fn euler_025(n: u64) -> Result<u64> {
    let digits = usize::try_from(n).unwrap_or(usize::MAX);
    let shorter = big_fibonacci()
        .take_while(|term: &UBig| term.to_string().len() < digits)
        .count();
    Ok(shorter as u64 + 1)
}

/// One line per problem: its name and what it computes.
pub(crate) fn listing() -> String {
    Sequence::new(PROBLEMS)
        .select(|problem| format!("{}  {}", problem.name, problem.description))
        .to_list()
        .join("\n")
}
