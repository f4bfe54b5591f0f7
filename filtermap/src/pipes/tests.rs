use crate::pipes::{collector, filter, filter_map, map, Pipe};
use std::cell::Cell;
use std::str::FromStr;

#[test]
fn test_map() {
    let (sink, res) = collector();
    let mapped = map(|x: i32| x + 1, sink);
    assert!(res.is_empty());
    mapped.push(1);
    mapped.push(3);
    assert_eq!(res.take(), vec![2, 4]);
    mapped.push(5);
    assert_eq!(res.take(), vec![6]);
}

#[test]
fn test_filter() {
    let (sink, res) = collector();
    let filtered = filter(|x: &i32| x % 2 == 0, sink);
    filtered.push(2);
    filtered.push(3);
    assert_eq!(res.take(), vec![2]);
}

#[test]
fn test_filter_map() {
    let (sink, res) = collector();
    let f: Pipe<String> = filter_map(|x: String| i32::from_str(&x).ok(), sink);
    f.push(String::from("19"));
    f.push(String::from("TEST"));
    f.push(String::from("13"));
    assert_eq!(res.take(), vec![19, 13]);
    assert!(res.is_empty());
}

#[test]
fn test_numbers_pipeline() {
    let (sink, res) = collector();
    let pipeline = filter(|x: &i32| x % 2 == 0, map(|x: i32| x * 2, sink));
    pipeline.feed(1..=10);
    assert_eq!(res.take(), vec![4, 8, 12, 16, 20]);
}

#[test]
fn test_strings_pipeline() {
    let words = vec!["tout", "titi", "ototo", "jean", "tous", "taratata"];
    let (sink, res) = collector();
    let pipeline = filter(
        |s: &&str| s.chars().filter(|c| *c == 't' || *c == 'T').count() >= 2,
        map(|s: &str| s.to_uppercase(), sink),
    );
    pipeline.feed(words.iter().copied());
    assert_eq!(res.len(), 4);
    assert_eq!(res.take(), vec!["TOUT", "TITI", "OTOTO", "TARATATA"]);
}

#[test]
fn test_agrees_with_helpers() {
    let ints = vec![9, 2, 14, 7, 0, 3];
    let (sink, res) = collector();
    filter(|x: &i32| *x > 2, map(|x: i32| x - 1, sink)).feed(ints.iter().copied());
    let expected = crate::map(&crate::filter(&ints, |x| *x > 2), |x| x - 1);
    assert_eq!(res.take(), expected);
}

#[test]
fn test_dropping() {
    let counter = Cell::new(0);
    let pipe = filter(
        |_: &i32| {
            counter.set(counter.get() + 1);
            true
        },
        Pipe::dropping(),
    );
    pipe.feed(vec![1, 2, 3]);
    assert_eq!(counter.get(), 3);
}
