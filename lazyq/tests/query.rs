use std::any::Any;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use insta::{assert_debug_snapshot, assert_snapshot};
use lazyq::{Error, Sequence};
use ordered_float::OrderedFloat;

fn words() -> Sequence<std::vec::IntoIter<&'static str>> {
    Sequence::from(vec![
        "blueberry",
        "chimpanzee",
        "abacus",
        "banana",
        "apple",
        "cheese",
    ])
}

fn first_char(s: &&str) -> char {
    s.chars().next().unwrap_or_default()
}

#[test]
fn test_group_by_to_dict() {
    let dict = words()
        .group_by(first_char)
        .select(|(key, group)| (key, group.to_list()))
        .to_dict();
    assert_debug_snapshot!(dict, @r###"
    {
        'b': [
            "blueberry",
            "banana",
        ],
        'c': [
            "chimpanzee",
            "cheese",
        ],
        'a': [
            "abacus",
            "apple",
        ],
    }
    "###);
}

#[test]
fn test_join_first_char() {
    let joined = Sequence::new(vec!["AA", "BA", "CA"])
        .join(vec!["AB", "BB", "CB"], first_char, first_char, |&a, &b| {
            (a, b)
        })
        .to_list();
    assert_debug_snapshot!(joined, @r###"
    [
        (
            "AA",
            "AB",
        ),
        (
            "BA",
            "BB",
        ),
        (
            "CA",
            "CB",
        ),
    ]
    "###);
}

#[test]
fn test_order_by_float_key() {
    let sorted = Sequence::new(vec![2.5, -0.5, 10.0, 2.25])
        .order_by(|&x| OrderedFloat(x))
        .to_list();
    assert_eq!(sorted, vec![-0.5, 2.25, 2.5, 10.0]);
}

#[test]
fn test_order_by_then_by() {
    let people = Sequence::new(vec![
        ("smith", 40),
        ("jones", 25),
        ("smith", 31),
        ("adams", 25),
        ("jones", 52),
    ]);
    let sorted = people
        .order_by(|&(_, age)| age)
        .then_by_descending(|&(name, _)| name)
        .select(|(name, age)| format!("{name} {age}"))
        .to_list();
    assert_debug_snapshot!(sorted, @r###"
    [
        "jones 25",
        "adams 25",
        "smith 31",
        "smith 40",
        "jones 52",
    ]
    "###);
}

#[test]
fn test_of_type_mixed_items() {
    let items: Vec<Box<dyn Any>> = vec![
        Box::new(1i32),
        Box::new("two"),
        Box::new(3i32),
        Box::new(4.0f64),
    ];
    assert_eq!(Sequence::new(items).of_type::<i32>().to_list(), vec![1, 3]);
}

#[test]
fn test_error_messages() {
    assert_snapshot!(
        Sequence::new(Vec::<i32>::new()).first().unwrap_err().to_string(),
        @"sequence contains no matching items"
    );
    assert_snapshot!(
        Sequence::new(vec![1, 2]).single().unwrap_err().to_string(),
        @"sequence contains more than one matching item"
    );
    assert_snapshot!(
        Sequence::new(vec![1, 2]).element_at(5).unwrap_err().to_string(),
        @"no item at index 5, sequence has 2 items"
    );
}

#[test]
fn test_try_to_dict_by_duplicate() {
    let result = words().try_to_dict_by(first_char, |s| s.len());
    assert!(matches!(result, Err(Error::DuplicateKey { .. })));
}

/// An endless source that yields slowly, so a thread stuck draining it
/// doesn't run away with memory.
fn ticks() -> Sequence<impl Iterator<Item = u64>> {
    let mut n = 0u64;
    Sequence::from_fn(move || {
        thread::sleep(Duration::from_millis(1));
        n += 1;
        Some(n)
    })
}

/// Run `query` on a background thread and report whether it finished
/// within the wait. The thread is left running if it didn't.
fn returns_within<T, F>(query: F) -> bool
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let _ = sender.send(query());
    });
    match receiver.recv_timeout(Duration::from_millis(200)) {
        Ok(_) => true,
        Err(mpsc::RecvTimeoutError::Timeout) => false,
        Err(mpsc::RecvTimeoutError::Disconnected) => panic!("query panicked"),
    }
}

#[test]
fn test_eager_operators_on_infinite_source_do_not_return() {
    assert!(!returns_within(|| ticks().to_list()));
    assert!(!returns_within(|| ticks().last()));
    assert!(!returns_within(|| ticks().average()));
    assert!(!returns_within(|| ticks().order_by(|&n| n).first()));
    assert!(!returns_within(|| ticks().group_by(|&n| n % 2).first().map(|(key, _)| key)));
}

#[test]
fn test_lazy_operators_on_infinite_source_return() {
    assert!(returns_within(|| ticks().where_(|&n| n > 3).first()));
    assert!(returns_within(|| ticks().order_by(|&n| n)));
}

#[test]
fn test_infinite_source_bounded_by_take() {
    let sorted = Sequence::new(1..)
        .select(|n: u64| n * 7 % 10)
        .take(5)
        .order_by(|&n| n)
        .to_list();
    assert_eq!(sorted, vec![1, 4, 5, 7, 8]);
}
