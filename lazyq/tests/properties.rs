use std::cell::Cell;

use lazyq::{Error, Sequence};

fn numbers() -> Sequence<std::ops::RangeInclusive<i32>> {
    Sequence::new(1..=10)
}

fn empty() -> Sequence<std::vec::IntoIter<i32>> {
    Sequence::from(Vec::new())
}

struct Case {
    name: &'static str,
    run: fn() -> Vec<i32>,
    expected: &'static [i32],
}

const LIST_CASES: &[Case] = &[
    Case {
        name: "where",
        run: || numbers().where_(|n| n % 2 == 0).to_list(),
        expected: &[2, 4, 6, 8, 10],
    },
    Case {
        name: "select",
        run: || numbers().select(|n| 2 * n).to_list(),
        expected: &[2, 4, 6, 8, 10, 12, 14, 16, 18, 20],
    },
    Case {
        name: "take",
        run: || numbers().take(3).to_list(),
        expected: &[1, 2, 3],
    },
    Case {
        name: "take zero",
        run: || numbers().take(0).to_list(),
        expected: &[],
    },
    Case {
        name: "skip",
        run: || numbers().skip(7).to_list(),
        expected: &[8, 9, 10],
    },
    Case {
        name: "skip take",
        run: || numbers().skip(5).take(3).to_list(),
        expected: &[6, 7, 8],
    },
    Case {
        name: "take_while",
        run: || numbers().take_while(|&n| n < 4).to_list(),
        expected: &[1, 2, 3],
    },
    Case {
        name: "skip_while",
        run: || numbers().skip_while(|&n| n < 8).to_list(),
        expected: &[8, 9, 10],
    },
    Case {
        name: "order_by",
        run: || {
            Sequence::new(vec![6, 10, 5, 2, 8, 9, 4, 1, 3, 7])
                .order_by(|&n| n)
                .to_list()
        },
        expected: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    },
    Case {
        name: "difference",
        run: || {
            Sequence::new(vec![0, 2, 4, 5, 6, 8, 9])
                .difference(vec![1, 3, 5, 7, 8])
                .to_list()
        },
        expected: &[0, 2, 4, 6, 9],
    },
    Case {
        name: "repeat",
        run: || Sequence::repeat(6).take(3).to_list(),
        expected: &[6, 6, 6],
    },
    Case {
        name: "reversed",
        run: || numbers().take(3).reversed().to_list(),
        expected: &[3, 2, 1],
    },
    Case {
        name: "default_if_empty",
        run: || empty().default_if_empty(42).to_list(),
        expected: &[42],
    },
];

#[test]
fn test_list_cases() {
    for case in LIST_CASES {
        assert_eq!((case.run)(), case.expected, "case {}", case.name);
    }
}

#[test]
fn test_where_keeps_exactly_matching_items() {
    let source = vec![5, -3, 8, 0, 12, -7, 8];
    let pred = |n: &i32| *n > 0;
    let expected = source.iter().copied().filter(pred).collect::<Vec<_>>();
    assert_eq!(Sequence::new(source).where_(pred).to_list(), expected);
}

#[test]
fn test_take_matches_prefix() {
    let source = numbers().to_list();
    for n in 0..=12 {
        let expected = &source[..n.min(source.len())];
        assert_eq!(numbers().take(n).to_list(), expected, "take({n})");
    }
}

#[test]
fn test_select_composition_law() {
    let f = |n: i32| n * n;
    let g = |n: i32| n - 1;
    assert_eq!(
        numbers().select(f).select(g).to_list(),
        numbers().select(|n| g(f(n))).to_list()
    );
}

#[test]
fn test_construction_does_not_pull() {
    let pulled = Cell::new(0);
    let source = Sequence::new(1..).select(|n: i64| {
        pulled.set(pulled.get() + 1);
        n
    });
    let chain = source
        .skip(3)
        .take_while(|&n| n < 10)
        .where_(|n| n % 2 == 0)
        .order_by(|&n| -n)
        .distinct();
    assert_eq!(pulled.get(), 0);
    assert_eq!(chain.to_list(), vec![8, 6, 4]);
    // the take_while stops on 10, the first failing item
    assert_eq!(pulled.get(), 10);
}

#[test]
fn test_empty_sequence_errors() {
    assert_eq!(empty().first(), Err(Error::EmptySequence));
    assert_eq!(empty().first_or_default(42), 42);
    assert_eq!(empty().sum(), Err(Error::EmptySequence));
    assert_eq!(numbers().sum(), Ok(55));
}

#[test]
fn test_distinct_idempotent() {
    let source = Sequence::new(vec![4, 1, 4, 4, 2, 1, 9]);
    assert_eq!(
        source.clone().distinct().distinct().to_list(),
        source.distinct().to_list()
    );
}
