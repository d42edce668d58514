//! Device table sub-reducer: row selection and pagination.

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::state::ConsoleState;

fn selection_changed(state: &ConsoleState) -> Effect {
    Effect::SelectionChanged {
        rows: state.device_list.selection.rows().to_vec(),
    }
}

fn fetch_current_page(state: &ConsoleState) -> Effect {
    Effect::FetchDevices {
        page: state.device_list.page(),
        per_page: state.device_list.per_page(),
    }
}

/// Handles selection and paging actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_device_table(state: &mut ConsoleState, action: &Action) -> Option<Vec<Effect>> {
    let list = &mut state.device_list;
    match action {
        Action::ToggleRow(row) => {
            list.selection = list.selection.toggle(*row);
            Some(vec![selection_changed(state)])
        }
        Action::ToggleAllRows => {
            list.selection = list.selection.toggle_all(list.page_len());
            Some(vec![selection_changed(state)])
        }
        Action::ClearSelection => {
            if list.selection.is_empty() {
                return Some(vec![]);
            }
            list.selection.clear();
            Some(vec![selection_changed(state)])
        }
        Action::ChangePage(page) => {
            let had_selection = !list.selection.is_empty();
            let changed = list.set_page(*page);
            let mut effects = Vec::new();
            if had_selection {
                effects.push(selection_changed(state));
            }
            if changed {
                effects.push(fetch_current_page(state));
            }
            Some(effects)
        }
        Action::ChangePerPage(per_page) => {
            let had_selection = !list.selection.is_empty();
            match list.set_per_page(*per_page) {
                Ok(()) if had_selection => Some(vec![
                    selection_changed(state),
                    fetch_current_page(state),
                ]),
                Ok(()) => Some(vec![fetch_current_page(state)]),
                Err(e) => Some(vec![Effect::ShowError(e.to_string())]),
            }
        }
        Action::DevicesLoaded { total } => {
            let page_before = list.page();
            let selection_dropped = list.set_total(*total);
            let page_moved = list.page() != page_before;
            let mut effects = Vec::new();
            if selection_dropped {
                effects.push(selection_changed(state));
            }
            if page_moved {
                effects.push(fetch_current_page(state));
            }
            Some(effects)
        }
        _ => None,
    }
}
