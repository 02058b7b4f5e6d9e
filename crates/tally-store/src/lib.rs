//! Unidirectional state management for a single counter
//!
//! This crate provides:
//! - `Action` and its creators (`add_count`, `subtract_count`, `reset_count`)
//! - `CounterState` and the pure `reduce` transition function
//! - `Store`, which owns state, runs the reducer on dispatch and notifies
//!   subscribers

pub mod action;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::{add_count, reset_count, subtract_count, Action, ActionError, ActionType};
pub use reducer::reduce;
pub use state::CounterState;
pub use store::{counter_store, create_store, Store, Unsubscribe};
