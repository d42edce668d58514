mod columns;
mod device_table;
mod preauth;
mod subscription;

pub use columns::reduce_columns;
pub use device_table::reduce_device_table;
pub use preauth::reduce_preauth;
pub use subscription::reduce_subscription;
