use crate::action::Action;
use crate::reducer::reduce;
use crate::state::CounterState;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Subscriber = Rc<dyn Fn()>;
type Reducer<S, A> = dyn Fn(Option<S>, &A) -> S;

/// Redux-style Store that holds state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - A single state value, read with [`Store::get_state`]
/// - Actions are dispatched to request a change
/// - A pure reducer computes the next state
/// - Subscribers are notified synchronously after every dispatch
///
/// `Store` is a handle: clones share the same state and subscriber list, so a
/// subscriber can capture a clone and re-read the state when notified.
///
/// ```
/// use tally_store::{add_count, create_store, reduce};
///
/// let store = create_store(reduce);
/// let observer = store.clone();
/// let _unsubscribe = store.subscribe(move || {
///     println!("count is now {}", observer.get_state().count);
/// });
/// store.dispatch(add_count());
/// assert_eq!(store.get_state().count, 1);
/// ```
pub struct Store<S, A = Action> {
    reducer: Rc<Reducer<S, A>>,
    state: Rc<RefCell<S>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

/// Create a store from a reducer
///
/// Equivalent to [`Store::new`].
pub fn create_store<S, A, R>(reducer: R) -> Store<S, A>
where
    S: Clone + fmt::Debug,
    A: Default + fmt::Debug,
    R: Fn(Option<S>, &A) -> S + 'static,
{
    Store::new(reducer)
}

/// Create a store driving the counter reducer
pub fn counter_store() -> Store<CounterState, Action> {
    create_store(reduce)
}

impl<S, A> Store<S, A>
where
    S: Clone + fmt::Debug,
    A: Default + fmt::Debug,
{
    /// Create a new store from a reducer
    ///
    /// The initial state is whatever the reducer returns for no state and the
    /// empty action (`A::default()`).
    pub fn new<R>(reducer: R) -> Self
    where
        R: Fn(Option<S>, &A) -> S + 'static,
    {
        let state = reducer(None, &A::default());
        log::debug!("Store created with initial state: {:?}", state);

        Self {
            reducer: Rc::new(reducer),
            state: Rc::new(RefCell::new(state)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Get a snapshot of the current state
    pub fn get_state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Run an action through the reducer, then notify every subscriber
    ///
    /// Subscribers are called in registration order from a snapshot of the
    /// list taken after the new state is stored. A subscriber that panics
    /// aborts the round; the new state stays committed.
    pub fn dispatch(&self, action: A) {
        log::debug!("Action: {:?}", action);

        let previous = self.get_state();
        let next = (self.reducer)(Some(previous), &action);
        log::debug!("State: {:?}", next);
        *self.state.borrow_mut() = next;

        let subscribers: Vec<Subscriber> = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber();
        }
    }

    /// Subscribe to state changes
    ///
    /// The callback is invoked with no arguments after every dispatch. The
    /// returned handle removes this registration.
    pub fn subscribe<F>(&self, callback: F) -> Unsubscribe
    where
        F: Fn() + 'static,
    {
        self.subscribe_rc(Rc::new(callback))
    }

    /// Subscribe a shared callback
    ///
    /// The same `Rc` may be registered more than once; it is then notified
    /// once per registration, and each returned handle removes one of them.
    pub fn subscribe_rc(&self, callback: Rc<dyn Fn()>) -> Unsubscribe {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.push(Rc::clone(&callback));
        log::trace!("Subscriber added ({} registered)", subscribers.len());

        Unsubscribe {
            subscribers: Rc::downgrade(&self.subscribers),
            callback,
            removed: Cell::new(false),
        }
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            reducer: Rc::clone(&self.reducer),
            state: Rc::clone(&self.state),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.state.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

/// Handle returned by [`Store::subscribe`]
///
/// Dropping it leaves the subscription in place.
pub struct Unsubscribe {
    subscribers: Weak<RefCell<Vec<Subscriber>>>,
    callback: Subscriber,
    removed: Cell<bool>,
}

impl Unsubscribe {
    /// Remove the first registration of this callback
    ///
    /// Returns `true` if a registration was removed. Only the first
    /// successful call has an effect.
    pub fn unsubscribe(&self) -> bool {
        if self.removed.get() {
            return false;
        }

        let Some(subscribers) = self.subscribers.upgrade() else {
            return false;
        };

        let mut subscribers = subscribers.borrow_mut();
        match subscribers
            .iter()
            .position(|s| Rc::ptr_eq(s, &self.callback))
        {
            Some(index) => {
                subscribers.remove(index);
                self.removed.set(true);
                log::trace!("Subscriber removed ({} registered)", subscribers.len());
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("removed", &self.removed.get())
            .finish()
    }
}
