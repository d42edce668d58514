//! Subscription sub-reducer: device limit input, plan and add-on choice.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::state::ConsoleState;

fn preview(state: &ConsoleState) -> Vec<Effect> {
    state
        .subscription
        .preview_order()
        .map(Effect::FetchBillingPreview)
        .into_iter()
        .collect()
}

/// Handles subscription page actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_subscription(
    state: &mut ConsoleState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    let subscription = &mut state.subscription;
    match action {
        Action::OrganizationLoaded {
            plan,
            device_limit,
            addons,
        } => {
            subscription.organization_loaded(*plan, *device_limit, addons);
            Some(preview(state))
        }
        Action::RequestDeviceLimit(value) => {
            subscription.request_limit(*value, now);
            Some(vec![])
        }
        Action::SelectPlan(plan) => {
            subscription.select_plan(*plan);
            Some(preview(state))
        }
        Action::ToggleAddon(addon) => {
            if subscription.toggle_addon(*addon) {
                Some(preview(state))
            } else {
                Some(vec![])
            }
        }
        Action::RequestPlanChange { message } => match subscription.plan_change_request(message) {
            Ok(request) => Some(vec![Effect::RequestPlanChange(request)]),
            Err(e) => Some(vec![Effect::ShowError(e.to_string())]),
        },
        Action::Tick => {
            if subscription.settle(now).is_some() {
                Some(preview(state))
            } else {
                Some(vec![])
            }
        }
        _ => None,
    }
}
