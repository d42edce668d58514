pub mod fixtures;

use std::time::Instant;

use fleetdeck::app::action::Action;
use fleetdeck::app::effect::Effect;
use fleetdeck::app::reducer::reduce;
use fleetdeck::app::state::ConsoleState;

pub fn test_instant() -> Instant {
    Instant::now()
}

/// Feeds actions through the reducer at `now`, collecting every effect.
pub fn dispatch_all(state: &mut ConsoleState, actions: Vec<Action>, now: Instant) -> Vec<Effect> {
    actions
        .into_iter()
        .flat_map(|action| reduce(state, action, now))
        .collect()
}
