//! Preauthorize-device form sub-reducer.

use tracing::debug;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::preauth::DeviceLimitGate;
use crate::app::state::ConsoleState;

/// Handles preauthorization form actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_preauth(state: &mut ConsoleState, action: &Action) -> Option<Vec<Effect>> {
    let form = &mut state.preauth;
    match action {
        Action::DeviceLimitLoaded { accepted, limit } => {
            form.gate = DeviceLimitGate::new(*accepted, *limit);
            Some(vec![])
        }
        Action::PreauthSetKey {
            file_name,
            contents,
        } => {
            form.set_public_key(file_name.as_str(), contents.as_str());
            Some(vec![])
        }
        Action::PreauthSetAttribute { index, key, value } => {
            form.set_attribute(*index, key, value);
            Some(vec![])
        }
        Action::PreauthAddAttribute => {
            form.add_attribute();
            Some(vec![])
        }
        Action::PreauthRemoveAttribute(index) => {
            form.remove_attribute(*index);
            Some(vec![])
        }
        Action::PreauthSubmit { add_another } => match form.submission() {
            Ok(request) => Some(vec![Effect::SubmitPreauth {
                request,
                add_another: *add_another,
            }]),
            Err(e) => {
                debug!(error = %e, "preauthorization rejected");
                form.error = Some(e.to_string());
                Some(vec![])
            }
        },
        Action::PreauthCompleted { add_another } => {
            form.reset();
            if *add_another {
                Some(vec![])
            } else {
                Some(vec![Effect::FetchDevices {
                    page: state.device_list.page(),
                    per_page: state.device_list.per_page(),
                }])
            }
        }
        Action::PreauthFailed(msg) => {
            form.error = Some(msg.clone());
            Some(vec![])
        }
        _ => None,
    }
}
