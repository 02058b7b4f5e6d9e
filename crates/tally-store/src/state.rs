use serde::{Deserialize, Serialize};
use std::fmt;

/// Counter state
///
/// Replaced wholesale on every transition; the reducer never mutates the
/// previous value in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

impl fmt::Display for CounterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{count: {}}}", self.count)
    }
}
