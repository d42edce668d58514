use std::time::Instant;

use crate::app::column_resize::ResizeConfig;
use crate::app::column_sizes::ColumnSizes;
use crate::app::device_limit::{LimitRules, SubscriptionState};
use crate::app::device_list::DeviceListState;
use crate::app::preauth::PreauthForm;
use crate::domain::ColumnHeader;

pub const DEFAULT_TABLE: &str = "devices";

/// An active drag on a column boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDrag {
    pub index: usize,
    pub last_pointer_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnState {
    pub table: String,
    pub headers: Vec<ColumnHeader>,
    pub sizes: ColumnSizes,
    pub drag: Option<ColumnDrag>,
    pub resize: ResizeConfig,
}

impl ColumnState {
    pub fn new(table: impl Into<String>, headers: Vec<ColumnHeader>, resize: ResizeConfig) -> Self {
        Self {
            table: table.into(),
            headers,
            sizes: ColumnSizes::new(),
            drag: None,
            resize,
        }
    }
}

impl Default for ColumnState {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE, Vec::new(), ResizeConfig::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleState {
    pub device_list: DeviceListState,
    pub columns: ColumnState,
    pub subscription: SubscriptionState,
    pub preauth: PreauthForm,
}

impl ConsoleState {
    pub fn new(device_list: DeviceListState, columns: ColumnState, rules: LimitRules) -> Self {
        Self {
            device_list,
            columns,
            subscription: SubscriptionState::new(rules),
            preauth: PreauthForm::default(),
        }
    }

    /// When the shell has to send the next `Tick`; `None` when nothing is
    /// waiting on time.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.subscription.next_deadline()
    }
}
