mod common;

use common::*;
use concerto::time::set_timeout;
use concerto::{Completion, Outcome, callback, map, map_series};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

type Done = Completion<u64, &'static str>;

fn singles(values: &[u64]) -> Vec<Outcome<u64>> {
    values.iter().copied().map(Outcome::Single).collect()
}

#[test]
fn test_map_collects_in_input_order() {
    let rt = virtual_loop();
    let call_order = log();

    let result = rt
        .block_on(|resolve| map(vec![1u64, 3, 2], map_iterator(&call_order), callback(resolve)))
        .unwrap();

    assert_eq!(*call_order.borrow(), vec![1, 2, 3]);
    assert_eq!(result, Ok(singles(&[2, 6, 4])));
}

#[test]
fn test_map_leaves_input_untouched() {
    let rt = virtual_loop();
    let call_order = log();
    let input = vec![1u64, 3, 2];

    let result = rt
        .block_on(|resolve| map(input.clone(), map_iterator(&call_order), callback(resolve)))
        .unwrap();

    assert_eq!(result, Ok(singles(&[2, 6, 4])));
    assert_eq!(input, vec![1, 3, 2]);
}

#[test]
fn test_map_other_value_types() {
    let rt = virtual_loop();
    let words = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];

    let result = rt
        .block_on(|resolve| {
            map(
                words.iter().map(String::len).collect::<Vec<_>>(),
                |len, done: Completion<usize, &'static str>| {
                    set_timeout(Duration::from_millis(10), move || done.ok(len));
                },
                callback(resolve),
            )
        })
        .unwrap()
        .unwrap();

    assert_eq!(result.iter().filter_map(Outcome::single).sum::<usize>(), 6);
}

#[test]
fn test_map_without_callback() {
    let rt = virtual_loop();
    let call_order = log();

    rt.run(|| map(vec![1u64, 3, 2], map_iterator(&call_order), None))
        .unwrap();

    assert_eq!(*call_order.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_map_reports_first_error() {
    let rt = virtual_loop();
    let reports = Rc::new(RefCell::new(Vec::new()));
    let sink = reports.clone();

    rt.run(|| {
        map(
            vec![1u64, 2, 3],
            |x, done: Done| {
                set_timeout(Duration::from_millis(x * 10), move || {
                    if x == 2 {
                        done.fail("error");
                    } else {
                        done.ok(x);
                    }
                });
            },
            callback(move |result| sink.borrow_mut().push(result)),
        );
    })
    .unwrap();

    assert_eq!(*reports.borrow(), vec![Err("error")]);
}

#[test]
fn test_map_empty_collection() {
    let reports = Rc::new(RefCell::new(Vec::new()));
    let sink = reports.clone();

    map(
        Vec::<u64>::new(),
        |_, _: Done| panic!("iterator called for an empty collection"),
        callback(move |result| sink.borrow_mut().push(result)),
    );

    assert_eq!(*reports.borrow(), vec![Ok(vec![])]);
}

#[test]
fn test_map_keeps_multiple_values() {
    let reports = Rc::new(RefCell::new(None));
    let sink = reports.clone();

    map(
        vec![0u64, 1, 2],
        |x, done: Done| done.ok_many((0..x).collect()),
        callback(move |result| *sink.borrow_mut() = Some(result)),
    );

    assert_eq!(
        reports.borrow_mut().take(),
        Some(Ok(vec![
            Outcome::Empty,
            Outcome::Single(0),
            Outcome::Multiple(vec![0, 1]),
        ]))
    );
}

#[test]
fn test_map_series_runs_in_input_order() {
    let rt = virtual_loop();
    let call_order = log();

    let result = rt
        .block_on(|resolve| {
            map_series(vec![1u64, 3, 2], map_iterator(&call_order), callback(resolve))
        })
        .unwrap();

    assert_eq!(*call_order.borrow(), vec![1, 3, 2]);
    assert_eq!(result, Ok(singles(&[2, 6, 4])));
}

#[test]
fn test_map_series_without_callback() {
    let rt = virtual_loop();
    let call_order = log();

    rt.run(|| map_series(vec![1u64, 3, 2], map_iterator(&call_order), None))
        .unwrap();

    assert_eq!(*call_order.borrow(), vec![1, 3, 2]);
}

#[test]
fn test_map_series_stops_on_error() {
    let rt = virtual_loop();
    let call_order = log();
    let sink = call_order.clone();

    let result = rt
        .block_on(|resolve| {
            map_series(
                vec![1u64, 2, 3],
                move |x, done: Done| {
                    sink.borrow_mut().push(x);
                    done.fail("error");
                },
                callback(resolve),
            )
        })
        .unwrap();

    assert_eq!(result, Err("error"));
    assert_eq!(*call_order.borrow(), vec![1]);
}

#[test]
fn test_map_series_waits_between_items() {
    let rt = virtual_loop();
    let started = rt.now();
    let offsets = log();
    let sink = offsets.clone();

    let result = rt
        .block_on(|resolve| {
            map_series(
                vec![30u64, 10, 20],
                move |ms, done: Done| {
                    sink.borrow_mut().push(concerto::time::now() - started);
                    set_timeout(Duration::from_millis(ms), move || done.ok(ms));
                },
                callback(resolve),
            )
        })
        .unwrap();

    assert_eq!(result, Ok(singles(&[30, 10, 20])));
    assert_eq!(
        *offsets.borrow(),
        vec![
            Duration::ZERO,
            Duration::from_millis(30),
            Duration::from_millis(40)
        ]
    );
}
