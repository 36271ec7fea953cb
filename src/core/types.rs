use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical type of a dataset column.
///
/// Each type maps to one storage representation: FLOAT to `f64`, INTEGER to
/// `i32`, STRING to `String`. The mapping is consulted whenever a column
/// store is created or appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnType {
    Float,
    Integer,
    String,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "FLOAT",
            Self::Integer => "INTEGER",
            Self::String => "STRING",
        }
    }

    /// Convert one raw CSV cell into this type's storage representation.
    ///
    /// Returns `None` when the text does not parse as the declared type.
    /// STRING columns accept any text unchanged.
    pub fn parse_cell(&self, raw: &str) -> Option<CellValue> {
        match self {
            Self::Float => raw.parse::<f64>().ok().map(CellValue::Float),
            Self::Integer => raw.parse::<i32>().ok().map(CellValue::Integer),
            Self::String => Some(CellValue::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FLOAT" => Ok(Self::Float),
            "INTEGER" => Ok(Self::Integer),
            "STRING" => Ok(Self::String),
            _ => Err(format!("Unknown column type: {}", s)),
        }
    }
}

/// License under which a dataset is published to the databank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatasetLicense {
    PublicDomain,
    Other,
}

impl DatasetLicense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublicDomain => "PUBLIC_DOMAIN",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for DatasetLicense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatasetLicense {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC_DOMAIN" => Ok(Self::PublicDomain),
            "OTHER" => Ok(Self::Other),
            _ => Err(format!("Unknown dataset license: {}", s)),
        }
    }
}

/// A single parsed cell, typed per its column's [`ColumnType`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Float(f64),
    Integer(i32),
    Text(String),
}

impl CellValue {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Float(_) => ColumnType::Float,
            Self::Integer(_) => ColumnType::Integer,
            Self::Text(_) => ColumnType::String,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}
