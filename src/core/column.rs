use serde::{Deserialize, Serialize};

use crate::core::types::{CellValue, ColumnType};

/// Declared shape of a single dataset column, before any data is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub description: String,
    pub nullable: bool,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    pub fn new<S: Into<String>>(
        name: S,
        description: S,
        nullable: bool,
        column_type: ColumnType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            nullable,
            column_type,
        }
    }
}

/// Growable storage for one column's values, homogeneously typed per the
/// column's declared [`ColumnType`].
///
/// Serializes as a flat JSON array of primitives (`[1.5, 2.0]`, `[1, 2]`,
/// `["a", "b"]`), which is the shape the datasets endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnData {
    Float(Vec<f64>),
    Integer(Vec<i32>),
    Text(Vec<String>),
}

impl ColumnData {
    /// Create an empty store for the given column type.
    pub fn new(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Float => Self::Float(Vec::new()),
            ColumnType::Integer => Self::Integer(Vec::new()),
            ColumnType::String => Self::Text(Vec::new()),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Float(_) => ColumnType::Float,
            Self::Integer(_) => ColumnType::Integer,
            Self::Text(_) => ColumnType::String,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Float(values) => values.len(),
            Self::Integer(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`, or `None` past the end of the store.
    pub fn get(&self, index: usize) -> Option<CellValue> {
        match self {
            Self::Float(values) => values.get(index).copied().map(CellValue::Float),
            Self::Integer(values) => values.get(index).copied().map(CellValue::Integer),
            Self::Text(values) => values.get(index).cloned().map(CellValue::Text),
        }
    }

    /// Append one parsed value.
    ///
    /// Callers obtain values from [`ColumnType::parse_cell`] on this store's
    /// own declared type, so the variants always line up.
    pub(crate) fn push(&mut self, value: CellValue) {
        match (self, value) {
            (Self::Float(values), CellValue::Float(v)) => values.push(v),
            (Self::Integer(values), CellValue::Integer(v)) => values.push(v),
            (Self::Text(values), CellValue::Text(v)) => values.push(v),
            _ => unreachable!("cell value type does not match column store"),
        }
    }

    /// Move every value out of `other` onto the end of this store.
    pub(crate) fn append(&mut self, other: &mut ColumnData) {
        match (self, other) {
            (Self::Float(dst), Self::Float(src)) => dst.append(src),
            (Self::Integer(dst), Self::Integer(src)) => dst.append(src),
            (Self::Text(dst), Self::Text(src)) => dst.append(src),
            _ => unreachable!("column stores of differing types"),
        }
    }
}

/// A declared column together with its loaded data.
///
/// Serializes flat: the definition's fields plus a `data` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    #[serde(flatten)]
    pub definition: ColumnDefinition,
    pub data: ColumnData,
}

impl Column {
    /// Create a column with an empty store typed per the definition.
    pub fn new(definition: ColumnDefinition) -> Self {
        let data = ColumnData::new(definition.column_type);
        Self { definition, data }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_store_is_empty_and_typed() {
        let store = ColumnData::new(ColumnType::Integer);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.column_type(), ColumnType::Integer);
    }

    #[test]
    fn test_push_and_get() {
        let mut store = ColumnData::new(ColumnType::Float);
        store.push(CellValue::Float(1.5));
        store.push(CellValue::Float(-2.0));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0), Some(CellValue::Float(1.5)));
        assert_eq!(store.get(1), Some(CellValue::Float(-2.0)));
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn test_append_moves_values() {
        let mut store = ColumnData::Text(vec!["a".to_string()]);
        let mut incoming = ColumnData::Text(vec!["b".to_string(), "c".to_string()]);
        store.append(&mut incoming);

        assert_eq!(
            store,
            ColumnData::Text(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        assert!(incoming.is_empty());
    }

    #[test]
    fn test_store_serializes_as_flat_array() {
        let store = ColumnData::Integer(vec![3, 1, 4]);
        assert_eq!(serde_json::to_string(&store).unwrap(), "[3,1,4]");

        let store = ColumnData::Text(vec!["x".to_string()]);
        assert_eq!(serde_json::to_string(&store).unwrap(), "[\"x\"]");
    }

    #[test]
    fn test_column_serializes_definition_and_data() {
        let mut column = Column::new(ColumnDefinition::new(
            "mass",
            "object mass in kg",
            false,
            ColumnType::Float,
        ));
        column.data.push(CellValue::Float(9.81));

        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "mass",
                "description": "object mass in kg",
                "nullable": false,
                "type": "FLOAT",
                "data": [9.81],
            })
        );
    }

    #[test]
    fn test_definition_roundtrip() {
        let def = ColumnDefinition::new("id", "row id", false, ColumnType::Integer);
        let json = serde_json::to_string(&def).unwrap();
        let restored: ColumnDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, restored);
    }
}
