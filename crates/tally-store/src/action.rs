//! Actions describe an intended state change.
//!
//! An action is a tagged record `{ "type": "ADD" }`. The tag is kept as a raw
//! string so that unknown or missing tags can still be dispatched; the reducer
//! treats them as no-ops.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// The closed set of action tags the counter reducer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Add,
    Subtract,
    Reset,
}

/// Errors from interpreting an action's tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action has no `type` field (the empty action).
    #[error("action has no type")]
    MissingType,

    /// The `type` field is not one of the known tags.
    #[error("unknown action type: {0}")]
    UnknownType(String),
}

/// A dispatched intent.
///
/// `Action::default()` is the empty action `{}` used to seed a store's
/// initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    action_type: Option<String>,
}

impl Action {
    /// Create an action with an arbitrary tag.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: Some(action_type.into()),
        }
    }

    /// The raw tag, if present.
    pub fn type_tag(&self) -> Option<&str> {
        self.action_type.as_deref()
    }

    /// Resolve the tag against the known action types.
    pub fn kind(&self) -> Result<ActionType, ActionError> {
        let tag = self.type_tag().ok_or(ActionError::MissingType)?;
        tag.parse::<ActionType>()
            .map_err(|_| ActionError::UnknownType(tag.to_string()))
    }
}

impl From<ActionType> for Action {
    fn from(action_type: ActionType) -> Self {
        let tag: &'static str = action_type.into();
        Self::new(tag)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_tag() {
            Some(tag) => write!(f, "{{type: {}}}", tag),
            None => write!(f, "{{}}"),
        }
    }
}

/// Action creator for incrementing the count
pub fn add_count() -> Action {
    ActionType::Add.into()
}

/// Action creator for decrementing the count
pub fn subtract_count() -> Action {
    ActionType::Subtract.into()
}

/// Action creator for resetting the count to zero
pub fn reset_count() -> Action {
    ActionType::Reset.into()
}
