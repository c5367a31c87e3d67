#![allow(dead_code)]
//! Shared integration test utilities.
//!
//! Import with:
//! ```ignore
//! mod common;
//! use common::*;
//! ```

use concerto::time::set_timeout;
use concerto::{Clock, Completion, EventLoop, LoopBuilder, Task, task};

use proptest::test_runner::Config as ProptestConfig;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;

static INIT_LOGGING: Once = Once::new();

/// Installs a test-friendly `tracing` subscriber once per test binary.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Proptest configuration with `cases` cases.
pub fn test_proptest_config(cases: u32) -> ProptestConfig {
    ProptestConfig::with_cases(cases)
}

/// A loop on the virtual clock, with logging initialized.
pub fn virtual_loop() -> EventLoop {
    init_test_logging();
    LoopBuilder::new().clock(Clock::Virtual).build()
}

/// A shared, append-only log of observations.
pub type Log<T> = Rc<RefCell<Vec<T>>>;

pub fn log<T>() -> Log<T> {
    Rc::new(RefCell::new(Vec::new()))
}

/// A task that waits `ms`, records `id`, and succeeds with `values`.
pub fn delayed<E: 'static>(ms: u64, id: u32, values: Vec<u32>, order: &Log<u32>) -> Task<u32, E> {
    let order = order.clone();

    task(move |done: Completion<u32, E>| {
        set_timeout(Duration::from_millis(ms), move || {
            order.borrow_mut().push(id);
            done.ok_many(values);
        });
    })
}

/// A task that waits `ms` and fails with `error`.
pub fn failing<V: 'static, E: 'static>(ms: u64, error: E) -> Task<V, E> {
    task(move |done: Completion<V, E>| {
        set_timeout(Duration::from_millis(ms), move || done.fail(error));
    })
}

/// Iterator used by the `each` family: waits `x * 25` ms, then records `x`.
pub fn each_iterator(args: &Log<u64>) -> impl FnMut(u64, Completion<(), &'static str>) + 'static {
    let args = args.clone();

    move |x, done| {
        let args = args.clone();
        set_timeout(Duration::from_millis(x * 25), move || {
            args.borrow_mut().push(x);
            done.done();
        });
    }
}

/// Iterator used by the `map` family: waits `x * 25` ms, records `x`, and
/// succeeds with `x * 2`.
pub fn map_iterator(call_order: &Log<u64>) -> impl FnMut(u64, Completion<u64, &'static str>) + 'static {
    let call_order = call_order.clone();

    move |x, done| {
        let call_order = call_order.clone();
        set_timeout(Duration::from_millis(x * 25), move || {
            call_order.borrow_mut().push(x);
            done.ok(x * 2);
        });
    }
}
