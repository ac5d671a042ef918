use std::sync::mpsc::TryRecvError;

use uniflow::store::{Action, Reducer, Store, UiState};

#[derive(Debug, Clone, PartialEq, Default)]
struct CounterState {
    value: i32,
}

impl UiState for CounterState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CounterAction {
    Add,
    Sub,
    Noop,
}

impl Action for CounterAction {}

struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(mut state: CounterState, action: CounterAction) -> CounterState {
        match action {
            CounterAction::Add => state.value += 1,
            CounterAction::Sub => state.value -= 1,
            CounterAction::Noop => {}
        }
        state
    }
}

#[test]
fn dispatch_updates_state() {
    let mut store: Store<CounterReducer> = Store::new(CounterState::default());
    store.dispatch(CounterAction::Add);
    assert_eq!(store.state().value, 1);
}

#[test]
fn initial_state_is_readable() {
    let store: Store<CounterReducer> = Store::new(CounterState { value: 7 });
    assert_eq!(store.state().value, 7);
}

#[test]
fn subscriber_receives_snapshots_in_dispatch_order() {
    let mut store: Store<CounterReducer> = Store::new(CounterState::default());
    let rx = store.subscribe();

    store.dispatch(CounterAction::Add);
    store.dispatch(CounterAction::Add);
    store.dispatch(CounterAction::Sub);

    assert_eq!(rx.try_recv().map(|s| s.value), Ok(1));
    assert_eq!(rx.try_recv().map(|s| s.value), Ok(2));
    assert_eq!(rx.try_recv().map(|s| s.value), Ok(1));
    assert_eq!(rx.try_recv().map(|s| s.value), Err(TryRecvError::Empty));
}

#[test]
fn unchanged_state_is_not_published() {
    let mut store: Store<CounterReducer> = Store::new(CounterState::default());
    let rx = store.subscribe();

    store.dispatch(CounterAction::Noop);
    assert_eq!(rx.try_recv().map(|s| s.value), Err(TryRecvError::Empty));
}

#[test]
fn multiple_subscribers_all_receive() {
    let mut store: Store<CounterReducer> = Store::new(CounterState::default());
    let first = store.subscribe();
    let second = store.subscribe();

    store.dispatch(CounterAction::Add);

    assert_eq!(first.try_recv().map(|s| s.value), Ok(1));
    assert_eq!(second.try_recv().map(|s| s.value), Ok(1));
}

#[test]
fn dropped_subscriber_does_not_block_dispatch() {
    let mut store: Store<CounterReducer> = Store::new(CounterState::default());
    let dead = store.subscribe();
    drop(dead);
    let live = store.subscribe();

    store.dispatch(CounterAction::Add);
    store.dispatch(CounterAction::Add);

    assert_eq!(store.state().value, 2);
    assert_eq!(live.try_recv().map(|s| s.value), Ok(1));
    assert_eq!(live.try_recv().map(|s| s.value), Ok(2));
}
