pub mod column_size_store;

pub use column_size_store::JsonColumnSizeStore;
