//! Collection control-flow combinators.
//!
//! Each combinator pairs a scheduling policy with a result policy:
//!
//! | Combinator | Scheduling | Result |
//! |---|---|---|
//! | [`parallel`] | concurrent | outcomes, shaped like the input |
//! | [`series`] | sequential | outcomes, shaped like the input |
//! | [`each`] / [`for_each`] | concurrent | none |
//! | [`each_series`] / [`for_each_series`] | sequential | none |
//! | [`map`] | concurrent | outcomes, in input order |
//! | [`map_series`] | sequential | outcomes, in input order |
//!
//! All of them report the first error immediately, fire their final
//! callback at most once, and tolerate a missing final callback.

mod each;
mod map;
mod parallel;
mod series;

#[doc(inline)]
pub use each::{each, each as for_each, each_series, each_series as for_each_series};

#[doc(inline)]
pub use map::{map, map_series};

#[doc(inline)]
pub use parallel::parallel;

#[doc(inline)]
pub use series::series;

use crate::collection::Collection;
use crate::completion::Completion;
use crate::engine::{Task, task};

use std::cell::RefCell;
use std::rc::Rc;

/// Turns `items` and a shared iterator function into one task per item.
fn bind<T, I, V, E, F>(items: T, iterator: F) -> Collection<Task<V, E>>
where
    T: IntoIterator<Item = I>,
    I: 'static,
    V: 'static,
    E: 'static,
    F: FnMut(I, Completion<V, E>) + 'static,
{
    let iterator = Rc::new(RefCell::new(iterator));

    items
        .into_iter()
        .map(|item| {
            let iterator = Rc::clone(&iterator);
            task(move |done| (iterator.borrow_mut())(item, done))
        })
        .collect::<Vec<_>>()
        .into()
}
