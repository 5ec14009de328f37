use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;
use tracing_test::traced_test;

use crate::core::command::Command;
use crate::core::counter::{Accent, CounterStore, Observer};

fn recording_store() -> (CounterStore, Rc<RefCell<Vec<i64>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = CounterStore::new();
    let sink = Rc::clone(&seen);
    store.subscribe(move |value: i64| sink.borrow_mut().push(value));
    (store, seen)
}

#[test]
fn test_new() {
    let store = CounterStore::new();
    assert_eq!(store.current_value(), 0);
    assert!(!store.has_observer());
    assert_eq!(CounterStore::default().current_value(), 0);
}

#[test]
fn test_increment() {
    let mut store = CounterStore::new();
    assert_eq!(store.increment(), 1);
    assert_eq!(store.current_value(), 1);

    store.increment();
    assert_eq!(store.current_value(), 2);
}

#[test]
fn test_decrement_below_zero() {
    let mut store = CounterStore::new();
    assert_eq!(store.decrement(), -1);
    assert_eq!(store.decrement(), -2);
    assert_eq!(store.presentation().accent, Accent::Negative);
}

#[test]
fn test_reset_twice() {
    let (mut store, seen) = recording_store();
    store.increment();
    store.increment();

    assert_eq!(store.reset(), 0);
    assert_eq!(store.reset(), 0);
    assert_eq!(*seen.borrow(), vec![1, 2, 0, 0]);
}

#[test]
fn test_scenario() {
    let (mut store, seen) = recording_store();

    for _ in 0..3 {
        store.increment();
    }
    assert_eq!(store.current_value(), 3);

    for _ in 0..5 {
        store.decrement();
    }
    assert_eq!(store.current_value(), -2);

    store.reset();
    assert_eq!(store.current_value(), 0);

    assert_eq!(*seen.borrow(), vec![1, 2, 3, 2, 1, 0, -1, -2, 0]);
}

#[test]
fn test_notification_delivered_before_return() {
    let mut store = CounterStore::new();
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    store.subscribe(move |value: i64| *sink.borrow_mut() = Some(value));

    store.increment();
    assert_eq!(*seen.borrow(), Some(1));
    store.decrement();
    assert_eq!(*seen.borrow(), Some(0));
}

#[test]
fn test_mutation_without_observer() {
    let mut store = CounterStore::new();
    store.increment();
    store.reset();
    store.decrement();
    assert_eq!(store.current_value(), -1);
}

#[test]
fn test_subscribe_replaces_previous_observer() {
    let (mut store, first) = recording_store();
    store.increment();

    let second = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&second);
    let displaced = store.subscribe(move |value: i64| sink.borrow_mut().push(value));
    assert!(displaced.is_some());

    store.increment();
    assert_eq!(*first.borrow(), vec![1]);
    assert_eq!(*second.borrow(), vec![2]);
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let (mut store, seen) = recording_store();
    store.increment();

    assert!(store.unsubscribe().is_some());
    assert!(store.unsubscribe().is_none());
    assert!(!store.has_observer());

    store.increment();
    assert_eq!(store.current_value(), 2);
    assert_eq!(*seen.borrow(), vec![1]);
}

struct Label {
    text: String,
    accent: Accent,
    redraws: usize,
}

struct LabelObserver(Rc<RefCell<Label>>);

impl Observer for LabelObserver {
    fn on_change(&mut self, value: i64) {
        let mut label = self.0.borrow_mut();
        label.text = value.to_string();
        label.accent = Accent::for_value(value);
        label.redraws += 1;
    }
}

#[test]
fn test_struct_observer() {
    let label = Rc::new(RefCell::new(Label {
        text: "0".to_string(),
        accent: Accent::Neutral,
        redraws: 0,
    }));
    let mut store = CounterStore::new();
    store.subscribe(LabelObserver(Rc::clone(&label)));

    store.decrement();
    store.decrement();
    assert_eq!(label.borrow().text, "-2");
    assert_eq!(label.borrow().accent, Accent::Negative);
    assert_eq!(label.borrow().redraws, 2);
}

#[rstest]
#[case(Command::Increment, 6)]
#[case(Command::Decrement, 4)]
#[case(Command::Reset, 0)]
fn test_apply(#[case] command: Command, #[case] expected: i64) {
    let mut store = CounterStore::new();
    for _ in 0..5 {
        store.increment();
    }
    assert_eq!(store.apply(command), expected);
    assert_eq!(store.current_value(), expected);
}

#[test]
fn test_saturates_at_bounds() {
    let mut store = CounterStore::starting_at(i64::MAX);
    assert_eq!(store.increment(), i64::MAX);

    let mut store = CounterStore::starting_at(i64::MIN);
    assert_eq!(store.decrement(), i64::MIN);
}

#[traced_test]
#[test]
fn test_mutations_are_traced() {
    let mut store = CounterStore::new();
    store.increment();
    store.decrement();

    assert!(logs_contain("Creating a new counter store"));
    assert!(logs_contain("increment_counter"));
    assert!(logs_contain("Counter changed to: 1"));
    assert!(logs_contain("Counter changed to: 0"));
}
