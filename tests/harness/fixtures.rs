use fleetdeck::app::column_resize::ResizeConfig;
use fleetdeck::app::device_limit::LimitRules;
use fleetdeck::app::device_list::DeviceListState;
use fleetdeck::app::state::{ColumnState, ConsoleState};
use fleetdeck::domain::{ColumnAttribute, ColumnHeader};

pub const MEASURED_WIDTHS: [f64; 6] = [120.0, 120.0, 240.0, 120.0, 150.0, 120.0];

pub fn device_headers() -> Vec<ColumnHeader> {
    [
        ("id", "identity"),
        ("device_type", "inventory"),
        ("artifact_name", "inventory"),
        ("updated_ts", "system"),
        ("status", "identity"),
    ]
    .into_iter()
    .map(|(name, scope)| ColumnHeader::new(ColumnAttribute::new(name, scope)))
    .collect()
}

/// Console with the device table on page 1 of 45 devices, 20 per page.
pub fn console_state() -> ConsoleState {
    let mut device_list = DeviceListState::default();
    device_list.set_total(45);
    ConsoleState::new(
        device_list,
        ColumnState::new("devices", device_headers(), ResizeConfig::default()),
        LimitRules::default(),
    )
}
