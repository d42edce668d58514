//! Pure reducer: state transitions only, no I/O.
//!
//! The reducer never reads the clock; `now` is passed in so debounce handling
//! stays testable without mocking time.

use std::time::Instant;

use tracing::debug;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::reducers::{
    reduce_columns, reduce_device_table, reduce_preauth, reduce_subscription,
};
use crate::app::state::ConsoleState;

pub fn reduce(state: &mut ConsoleState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_device_table(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_columns(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_subscription(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_preauth(state, &action) {
        return effects;
    }

    match action {
        Action::None => vec![],
        other => {
            debug!(action = ?other, "action not handled");
            vec![]
        }
    }
}
