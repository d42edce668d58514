pub mod action;
pub mod column_resize;
pub mod column_sizes;
pub mod device_limit;
pub mod device_list;
pub mod effect;
pub mod ports;
pub mod preauth;
pub mod reducer;
pub mod reducers;
pub mod selection;
pub mod state;
