pub mod column;
pub mod device;
pub mod plan;

pub use column::{ColumnAttribute, ColumnHeader, SizedColumn};
pub use device::DeviceId;
pub use plan::{AddonId, PlanId};
