//! In-memory dataset model and CSV ingestion.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::column::{Column, ColumnData, ColumnDefinition};
use crate::core::types::{CellValue, DatasetLicense};
use crate::error::{DatabankError, Result};

/// Descriptor from which a [`Dataset`] is constructed: metadata plus the
/// declared columns.
///
/// Deserializes directly from a JSON descriptor file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub name: String,
    pub description: String,
    pub license: DatasetLicense,
    pub columns: Vec<ColumnDefinition>,
}

/// An in-memory named collection of typed columns plus license and
/// description metadata, uploadable to a databank service.
///
/// Columns are created empty at construction and grow together, one row at
/// a time, through [`Dataset::append_csv`]. Every column always holds the
/// same number of values.
///
/// Serializes as the upload payload: `{name, description, license, columns}`
/// with each column's data flattened to a plain array.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    name: String,
    description: String,
    license: DatasetLicense,
    columns: Vec<Column>,
}

impl Dataset {
    /// Build a dataset from a descriptor, creating one empty typed store per
    /// column definition.
    ///
    /// Fails with [`DatabankError::DuplicateColumn`] when two definitions
    /// share a name; no store is created in that case.
    pub fn new(info: DatasetInfo) -> Result<Self> {
        let mut columns: Vec<Column> = Vec::with_capacity(info.columns.len());
        for definition in info.columns {
            if columns.iter().any(|c| c.name() == definition.name) {
                return Err(DatabankError::DuplicateColumn(definition.name));
            }
            columns.push(Column::new(definition));
        }

        Ok(Self {
            name: info.name,
            description: info.description,
            license: info.license,
            columns,
        })
    }

    /// The name of the dataset.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A brief description of the dataset.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The license for use of the dataset.
    pub fn license(&self) -> DatasetLicense {
        self.license
    }

    /// The columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Number of rows currently loaded. Zero for a dataset with no columns.
    pub fn len(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One row of values across all columns, in declaration order.
    pub fn row(&self, index: usize) -> Option<Vec<CellValue>> {
        if index >= self.len() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .filter_map(|c| c.data.get(index))
                .collect(),
        )
    }

    /// Iterate over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<CellValue>> + '_ {
        (0..self.len()).filter_map(|index| self.row(index))
    }

    /// Load the rows of a CSV file and append them to the dataset.
    ///
    /// The file must be comma-delimited with a header row naming its
    /// columns. Every declared dataset column must appear in the header;
    /// file columns the dataset does not declare are ignored. Each cell is
    /// converted to its column's storage representation. Repeated calls
    /// accumulate rows.
    ///
    /// The whole file is converted before anything is committed: on any
    /// error (missing column, malformed CSV, unconvertible cell) the
    /// dataset is left exactly as it was.
    ///
    /// Returns the number of rows appended.
    pub fn append_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_path(path)?;

        let header = reader.headers()?.clone();

        // Resolve each declared column to its position in the file header
        // before touching any store.
        let mut positions = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let index = header
                .iter()
                .position(|field| field == column.name())
                .ok_or_else(|| DatabankError::MissingColumn {
                    column: column.name().to_string(),
                    path: path.to_path_buf(),
                })?;
            positions.push(index);
        }

        // Convert the entire file into scratch stores first; the dataset's
        // own stores are only extended once every cell has parsed.
        let mut scratch: Vec<ColumnData> = self
            .columns
            .iter()
            .map(|c| ColumnData::new(c.definition.column_type))
            .collect();

        let mut appended = 0usize;
        for (row_index, record) in reader.records().enumerate() {
            let record = record?;
            for ((column, &field_index), buffer) in
                self.columns.iter().zip(&positions).zip(&mut scratch)
            {
                let raw = record.get(field_index).unwrap_or_default();
                let column_type = column.definition.column_type;
                let cell = column_type.parse_cell(raw).ok_or_else(|| {
                    DatabankError::Conversion {
                        column: column.name().to_string(),
                        row: row_index + 1,
                        value: raw.to_string(),
                        column_type,
                    }
                })?;
                buffer.push(cell);
            }
            appended += 1;
        }

        for (column, buffer) in self.columns.iter_mut().zip(&mut scratch) {
            column.data.append(buffer);
        }

        info!(
            rows = appended,
            file = %path.display(),
            dataset = %self.name,
            "appended csv rows"
        );
        Ok(appended)
    }
}
