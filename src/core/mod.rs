pub mod column;
pub mod dataset;
pub mod types;

pub use column::{Column, ColumnData, ColumnDefinition};
pub use dataset::{Dataset, DatasetInfo};
pub use types::*;
