use crate::domain::{AddonId, PlanId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Tick,

    // Device table selection
    ToggleRow(usize),
    ToggleAllRows,
    ClearSelection,

    // Pagination
    ChangePage(usize),
    ChangePerPage(usize),
    DevicesLoaded { total: usize },

    // Column resizing
    BeginColumnDrag { index: usize, pointer_x: f64 },
    DragColumn { measured_widths: Vec<f64>, pointer_x: f64 },
    EndColumnDrag,

    // Subscription
    OrganizationLoaded {
        plan: PlanId,
        device_limit: u32,
        addons: Vec<AddonId>,
    },
    RequestDeviceLimit(u32),
    SelectPlan(PlanId),
    ToggleAddon(AddonId),
    RequestPlanChange { message: String },

    // Device preauthorization
    DeviceLimitLoaded { accepted: usize, limit: usize },
    PreauthSetKey { file_name: String, contents: String },
    PreauthSetAttribute { index: usize, key: String, value: String },
    PreauthAddAttribute,
    PreauthRemoveAttribute(usize),
    PreauthSubmit { add_another: bool },
    PreauthCompleted { add_another: bool },
    PreauthFailed(String),
}
