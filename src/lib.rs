pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use client::{Credential, DatabankClient, UploadStatus};
pub use config::DatabankConfig;
pub use core::{
    CellValue, Column, ColumnData, ColumnDefinition, ColumnType, Dataset, DatasetInfo,
    DatasetLicense,
};
pub use error::{DatabankError, Result};
