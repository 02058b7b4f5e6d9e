//! The four walkthrough scenarios: initial state, two increments, one
//! decrement, reset.

use anyhow::Result;
use std::io::Write;
use tally_store::{add_count, counter_store, reset_count, subtract_count, Action, CounterState};

struct Scenario {
    title: &'static str,
    actions: fn() -> Vec<Action>,
}

const SCENARIOS: [Scenario; 4] = [
    Scenario {
        title: "Initial state",
        actions: Vec::new,
    },
    Scenario {
        title: "Current state",
        actions: || vec![add_count(), add_count()],
    },
    Scenario {
        title: "Current state",
        actions: || vec![subtract_count()],
    },
    Scenario {
        title: "Current state",
        actions: || vec![reset_count()],
    },
];

/// Run every scenario against one store, writing the state after each
pub fn run(out: &mut impl Write) -> Result<Vec<CounterState>> {
    let store = counter_store();
    let mut results = Vec::with_capacity(SCENARIOS.len());

    for (i, scenario) in SCENARIOS.iter().enumerate() {
        log::info!("Running scenario {}", i + 1);
        for action in (scenario.actions)() {
            store.dispatch(action);
        }

        let state = store.get_state();
        writeln!(out, "Scenario {}:", i + 1)?;
        writeln!(out, "{}: {}", scenario.title, serde_json::to_string(&state)?)?;
        results.push(state);
    }

    Ok(results)
}
