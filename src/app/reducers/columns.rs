//! Column sub-reducer: drag gestures on header boundaries.

use crate::app::action::Action;
use crate::app::column_resize::{ResizeEvent, resize};
use crate::app::effect::Effect;
use crate::app::state::{ColumnDrag, ConsoleState};

/// Handles column drag actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_columns(state: &mut ConsoleState, action: &Action) -> Option<Vec<Effect>> {
    let columns = &mut state.columns;
    match action {
        Action::BeginColumnDrag { index, pointer_x } => {
            columns.drag = Some(ColumnDrag {
                index: *index,
                last_pointer_x: *pointer_x,
            });
            Some(vec![])
        }
        Action::DragColumn {
            measured_widths,
            pointer_x,
        } => {
            // Moves without a preceding press are stray pointer events.
            let Some(drag) = columns.drag.as_mut() else {
                return Some(vec![]);
            };
            let event = ResizeEvent {
                measured_widths,
                pointer_x: *pointer_x,
                previous_pointer_x: drag.last_pointer_x,
                index: drag.index,
            };
            let outcome = resize(&event, &columns.headers, &columns.resize);
            drag.last_pointer_x = *pointer_x;
            columns.sizes.apply(&outcome);
            Some(vec![])
        }
        Action::EndColumnDrag => {
            if columns.drag.take().is_none() {
                return Some(vec![]);
            }
            Some(vec![Effect::PersistColumnSizes {
                table: columns.table.clone(),
                sizes: columns.sizes.clone(),
            }])
        }
        _ => None,
    }
}
