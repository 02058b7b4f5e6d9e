//! Replay a recorded list of actions through a fresh store
//!
//! Input is a JSON array of action records, e.g.
//! `[{"type":"ADD"}, {"type":"NOPE"}, {}]`. Unknown or missing types are
//! dispatched like any other action and leave the count unchanged.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::io::{Read, Write};
use std::rc::Rc;
use tally_store::{counter_store, Action, CounterState};

/// Parse a JSON action script
pub fn parse_actions(input: &str) -> Result<Vec<Action>> {
    serde_json::from_str(input)
        .context("Action script must be a JSON array of {\"type\": ...} records")
}

/// Dispatch `actions` in order, returning the state observed after each one
pub fn replay(actions: Vec<Action>) -> Vec<CounterState> {
    let store = counter_store();
    let observed = Rc::new(RefCell::new(Vec::with_capacity(actions.len())));

    let observer = store.clone();
    let sink = Rc::clone(&observed);
    let unsubscribe = store.subscribe(move || sink.borrow_mut().push(observer.get_state()));

    for action in actions {
        store.dispatch(action);
    }
    unsubscribe.unsubscribe();

    observed.take()
}

/// Read a script from `input`, replay it, and write each state to `out`
pub fn run(input: &mut impl Read, out: &mut impl Write) -> Result<CounterState> {
    let mut script = String::new();
    input
        .read_to_string(&mut script)
        .context("Failed to read action script")?;

    let actions = parse_actions(&script)?;
    log::info!("Replaying {} actions", actions.len());

    let actions_text: Vec<String> = actions.iter().map(ToString::to_string).collect();
    let states = replay(actions);

    for (action, state) in actions_text.iter().zip(&states) {
        writeln!(out, "{} -> {}", action, serde_json::to_string(state)?)?;
    }

    let last = states.last().copied().unwrap_or_default();
    writeln!(out, "Final state: {}", serde_json::to_string(&last)?)?;
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replay_states() {
        let actions =
            parse_actions(r#"[{"type":"ADD"},{"type":"ADD"},{"type":"SUBTRACT"},{"type":"RESET"}]"#)
                .unwrap();
        let counts: Vec<i64> = replay(actions).iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 2, 1, 0]);
    }

    #[test]
    fn test_unknown_and_empty_actions_pass_through() {
        let actions = parse_actions(r#"[{"type":"ADD"},{"type":"NOPE"},{}]"#).unwrap();
        let counts: Vec<i64> = replay(actions).iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![1, 1, 1]);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(parse_actions(r#"{"type":"ADD"}"#).is_err());
        assert!(parse_actions("not json").is_err());
    }

    #[test]
    fn test_run_output() {
        let mut input = r#"[{"type":"SUBTRACT"},{"type":"NOPE"}]"#.as_bytes();
        let mut out = Vec::new();
        let last = run(&mut input, &mut out).unwrap();

        assert_eq!(last, CounterState::new(-1));
        let expected = "\
{type: SUBTRACT} -> {\"count\":-1}
{type: NOPE} -> {\"count\":-1}
Final state: {\"count\":-1}
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_empty_script_reports_initial_state() {
        let mut input = "[]".as_bytes();
        let mut out = Vec::new();
        let last = run(&mut input, &mut out).unwrap();
        assert_eq!(last, CounterState::new(0));
        assert_eq!(String::from_utf8(out).unwrap(), "Final state: {\"count\":0}\n");
    }
}
