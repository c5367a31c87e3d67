mod common;

use common::*;
use concerto::time::set_timeout;
use concerto::{
    Completion, Key, Outcome, SignalError, callback, each, each_series, for_each, for_each_series,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

type Done = Completion<(), &'static str>;

#[test]
fn test_each_completes_in_timer_order() {
    let rt = virtual_loop();
    let args = log();

    let result = rt
        .block_on(|resolve| each(vec![1u64, 3, 2], each_iterator(&args), callback(resolve)))
        .unwrap();

    assert_eq!(result, Ok(()));
    assert_eq!(*args.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_each_starts_every_item_immediately() {
    let rt = virtual_loop();
    let started = log();
    let sink = started.clone();

    rt.run(|| {
        each(
            vec![1u64, 3, 2],
            move |x, done: Done| {
                sink.borrow_mut().push(x);
                set_timeout(Duration::from_millis(x), move || done.done());
            },
            None,
        );

        assert_eq!(*started.borrow(), vec![1, 3, 2]);
    })
    .unwrap();
}

#[test]
fn test_each_rejects_second_signal() {
    let rt = virtual_loop();
    let rejected = Rc::new(RefCell::new(Vec::new()));
    let sink = rejected.clone();

    rt.run(|| {
        each(
            vec![1u64, 2],
            move |x, done: Done| {
                let sink = sink.clone();
                set_timeout(Duration::from_millis(x * 25), move || {
                    done.done();
                    if let Err(err) = done.try_complete(Ok(Outcome::Empty)) {
                        sink.borrow_mut().push(err);
                    }
                });
            },
            callback(|result| assert_eq!(result, Ok(()))),
        );
    })
    .unwrap();

    assert_eq!(
        *rejected.borrow(),
        vec![
            SignalError::AlreadyCompleted { key: Key::Index(0) },
            SignalError::AlreadyCompleted { key: Key::Index(1) },
        ]
    );
}

#[test]
#[should_panic(expected = "invoked more than once")]
fn test_each_second_completion_panics() {
    each(
        vec![1u64],
        |_, done: Done| {
            done.done();
            done.done();
        },
        None,
    );
}

#[test]
fn test_each_empty_collection() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();

    // The iterator must never run.
    each(
        Vec::<u64>::new(),
        |_, _: Done| panic!("iterator called for an empty collection"),
        callback(move |result| {
            assert_eq!(result, Ok(()));
            counter.set(counter.get() + 1);
        }),
    );

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_each_reports_first_error() {
    let rt = virtual_loop();
    let reports = Rc::new(RefCell::new(Vec::new()));
    let sink = reports.clone();

    rt.run(|| {
        each(
            vec![1u64, 2, 3],
            |x, done: Done| {
                set_timeout(Duration::from_millis(x * 10), move || {
                    if x >= 2 {
                        done.fail("error");
                    } else {
                        done.done();
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
fn test_each_without_callback() {
    let rt = virtual_loop();
    let args = log();

    rt.run(|| each(vec![1u64], each_iterator(&args), None)).unwrap();

    assert_eq!(*args.borrow(), vec![1]);
}

#[test]
fn test_each_accepts_any_iterable() {
    let rt = virtual_loop();
    let args = log();

    let result = rt
        .block_on(|resolve| each(1u64..=3, each_iterator(&args), callback(resolve)))
        .unwrap();

    assert_eq!(result, Ok(()));
    assert_eq!(*args.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_each_series_runs_in_input_order() {
    let rt = virtual_loop();
    let args = log();

    let result = rt
        .block_on(|resolve| {
            each_series(vec![1u64, 3, 2], each_iterator(&args), callback(resolve))
        })
        .unwrap();

    assert_eq!(result, Ok(()));
    assert_eq!(*args.borrow(), vec![1, 3, 2]);
}

#[test]
fn test_each_series_empty_collection() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();

    each_series(
        Vec::<u64>::new(),
        |_, _: Done| panic!("iterator called for an empty collection"),
        callback(move |result| {
            assert_eq!(result, Ok(()));
            counter.set(counter.get() + 1);
        }),
    );

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_each_series_stops_on_error() {
    let rt = virtual_loop();
    let call_order = log();
    let sink = call_order.clone();

    let result = rt
        .block_on(|resolve| {
            each_series(
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
fn test_each_series_without_callback() {
    let rt = virtual_loop();
    let args = log();

    rt.run(|| {
        each_series(vec![1u64, 3, 2], each_iterator(&args), None);

        // The first item is pending on its timer.
        assert!(args.borrow().is_empty());
    })
    .unwrap();

    assert_eq!(*args.borrow(), vec![1, 3, 2]);
}

#[concerto::test(virtual_time)]
fn test_each_series_in_test_macro() {
    let args = log();
    let seen = args.clone();

    each_series(
        vec![2u64, 1],
        each_iterator(&args),
        callback(move |result| {
            assert_eq!(result, Ok(()));
            assert_eq!(*seen.borrow(), vec![2, 1]);
        }),
    );
}

#[test]
fn test_for_each_aliases() {
    let rt = virtual_loop();
    let args = log();

    let concurrent = rt
        .block_on(|resolve| for_each(vec![2u64, 1], each_iterator(&args), callback(resolve)))
        .unwrap();
    let sequential = rt
        .block_on(|resolve| {
            for_each_series(vec![2u64, 1], each_iterator(&args), callback(resolve))
        })
        .unwrap();

    assert_eq!(concurrent, Ok(()));
    assert_eq!(sequential, Ok(()));
    assert_eq!(*args.borrow(), vec![1, 2, 2, 1]);
}
