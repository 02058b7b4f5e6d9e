use crate::action::{Action, ActionType};
use crate::state::CounterState;

/// Reducer - pure function that produces new state from current state + action
///
/// `None` stands for "no state yet" and is replaced by the default
/// `{ count: 0 }`. Unknown or missing action types return the input state
/// unchanged.
pub fn reduce(state: Option<CounterState>, action: &Action) -> CounterState {
    let state = state.unwrap_or_default();

    match action.kind() {
        Ok(ActionType::Add) => CounterState {
            count: state.count.saturating_add(1),
        },
        Ok(ActionType::Subtract) => CounterState {
            count: state.count.saturating_sub(1),
        },
        Ok(ActionType::Reset) => CounterState { count: 0 },
        Err(e) => {
            log::trace!("Ignoring action {}: {}", action, e);
            state
        }
    }
}
