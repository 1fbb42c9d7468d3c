//! Parameter documents
//!
//! A document lists typed parameters in JSON or TOML:
//!
//! ```json
//! {
//!   "procedure": "dbo.FindOrders",
//!   "parameters": [
//!     { "name": "@customer", "type": "int", "value": 42 },
//!     { "name": "@since", "type": "datetime", "value": "2024-01-01 00:00:00.000" },
//!     { "name": "@skus", "type": "table", "type_name": "dbo.SkuList",
//!       "columns": [{ "name": "Sku", "type": "string" }],
//!       "rows": [["A-1"], ["B-7"]] }
//!   ]
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use paramtrace::{Column, Parameters, TableValue, Value, ValueKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use tracing::debug;

use crate::error::{CliError, Result};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// Parameter type tags accepted in documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Null,
    Bool,
    Int,
    Bigint,
    Float,
    Decimal,
    String,
    Datetime,
    Date,
    Time,
    Json,
    Table,
}

impl ParamType {
    /// The value kind a parameter of this type produces
    pub fn kind(self) -> ValueKind {
        match self {
            ParamType::Null => ValueKind::Null,
            ParamType::Bool => ValueKind::Bool,
            ParamType::Int => ValueKind::I32,
            ParamType::Bigint => ValueKind::I64,
            ParamType::Float => ValueKind::F64,
            ParamType::Decimal => ValueKind::Decimal,
            ParamType::String => ValueKind::String,
            ParamType::Datetime => ValueKind::DateTime,
            ParamType::Date => ValueKind::Date,
            ParamType::Time => ValueKind::Time,
            ParamType::Json => ValueKind::Json,
            ParamType::Table => ValueKind::Table,
        }
    }
}

/// A column of a table parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
}

/// One parameter entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// Scalar value; absent or null means SQL NULL
    #[serde(default)]
    pub value: Option<Json>,
    /// Table type name, required for tables
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub rows: Vec<Vec<Json>>,
}

/// A parsed parameter document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterDocument {
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParamSpec>,
}

impl ParameterDocument {
    /// Read a document, choosing TOML for `.toml` files and JSON otherwise
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        debug!(path = %path.display(), toml = is_toml, "reading parameter document");
        if is_toml {
            Self::from_toml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Convert every entry into a parameter bag, in document order
    pub fn to_parameters(&self) -> Result<Parameters> {
        let mut params = Parameters::new();
        for spec in &self.parameters {
            params.add_value(&spec.name, spec.to_value()?)?;
        }
        Ok(params)
    }
}

impl ParamSpec {
    /// Convert this entry into a value
    pub fn to_value(&self) -> Result<Value> {
        if self.param_type != ParamType::Table {
            let json = self.value.as_ref().unwrap_or(&Json::Null);
            return convert(&self.name, self.param_type, json);
        }

        let type_name = self
            .type_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| invalid(&self.name, "table parameters need a type_name"))?;
        if let Some(column) = self.columns.iter().find(|c| c.param_type == ParamType::Table) {
            return Err(invalid(
                &self.name,
                format!("column {} cannot itself be a table", column.name),
            ));
        }

        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name.clone(), c.param_type.kind()))
            .collect();
        let mut table = TableValue::new(type_name, columns);
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(invalid(
                    &self.name,
                    format!(
                        "row {} has {} values, expected {}",
                        index,
                        row.len(),
                        self.columns.len()
                    ),
                ));
            }
            let values = self
                .columns
                .iter()
                .zip(row)
                .map(|(column, cell)| convert(&self.name, column.param_type, cell))
                .collect::<Result<Vec<_>>>()?;
            table.push_row(values)?;
        }
        Ok(Value::Table(table))
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> CliError {
    CliError::InvalidValue {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Convert a JSON value to a scalar of the given type; JSON null is SQL NULL
/// for every type.
fn convert(name: &str, param_type: ParamType, json: &Json) -> Result<Value> {
    if json.is_null() {
        return Ok(Value::Null);
    }
    let mismatch = || invalid(name, format!("expected {:?} value, got {}", param_type, json));

    let value = match param_type {
        ParamType::Null => Value::Null,
        ParamType::Bool => Value::Bool(json.as_bool().ok_or_else(mismatch)?),
        ParamType::Int => {
            let n = json.as_i64().ok_or_else(mismatch)?;
            Value::I32(i32::try_from(n).map_err(|_| invalid(name, format!("{} is out of INT range", n)))?)
        }
        ParamType::Bigint => Value::I64(json.as_i64().ok_or_else(mismatch)?),
        ParamType::Float => Value::F64(json.as_f64().ok_or_else(mismatch)?),
        ParamType::Decimal => {
            // Accept both "12.50" and 12.5; strings keep their exact scale
            let text = match json {
                Json::String(s) => s.clone(),
                Json::Number(n) => n.to_string(),
                _ => return Err(mismatch()),
            };
            Value::Decimal(Decimal::from_str(text.trim()).map_err(|e| invalid(name, e.to_string()))?)
        }
        ParamType::String => match json {
            Json::String(s) => Value::String(s.clone()),
            other => Value::String(other.to_string()),
        },
        ParamType::Datetime => {
            let text = json.as_str().ok_or_else(mismatch)?;
            Value::DateTime(parse_datetime(text).ok_or_else(mismatch)?)
        }
        ParamType::Date => {
            let text = json.as_str().ok_or_else(mismatch)?;
            Value::Date(NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| invalid(name, e.to_string()))?)
        }
        ParamType::Time => {
            let text = json.as_str().ok_or_else(mismatch)?;
            Value::Time(NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|e| invalid(name, e.to_string()))?)
        }
        ParamType::Json => Value::Json(json.clone()),
        ParamType::Table => return Err(invalid(name, "nested tables are not supported")),
    };
    Ok(value)
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text.trim(), format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramtrace::{FormatOptions, ParameterSource};

    #[test]
    fn test_json_document_to_script() {
        let doc = ParameterDocument::from_json(
            r#"{
                "procedure": "dbo.FindOrders",
                "parameters": [
                    { "name": "@customer", "type": "int", "value": 42 },
                    { "name": "@since", "type": "datetime", "value": "2024-01-02T03:04:05.678" },
                    { "name": "@note", "type": "string" },
                    { "name": "@skus", "type": "table", "type_name": "dbo.SkuList",
                      "columns": [{ "name": "Sku", "type": "string" }, { "name": "Qty", "type": "int" }],
                      "rows": [["A-1", 2], ["B'7", null]] }
                ]
            }"#,
        )
        .unwrap();
        let params = doc.to_parameters().unwrap();
        assert_eq!(params.parameter_names(), vec!["customer", "since", "note", "skus"]);

        let script = params.to_script(doc.procedure.as_deref(), &FormatOptions::default());
        assert_eq!(
            script,
            "DECLARE @customer INT = 42\n\
             DECLARE @since DATETIME = '2024-01-02 03:04:05.678'\n\
             DECLARE @note NVARCHAR(MAX)\n\
             DECLARE @skus dbo.SkuList\n\
             INSERT INTO @skus VALUES\n\
             ('A-1',2),('B''7',NULL)\n\
             EXEC dbo.FindOrders\n\
             @customer = @customer,\n\
             @since = @since,\n\
             @note = @note,\n\
             @skus = @skus\n"
        );
    }

    #[test]
    fn test_toml_document() {
        let doc = ParameterDocument::from_toml(
            r#"
            [[parameters]]
            name = "price"
            type = "decimal"
            value = "-12.3450"

            [[parameters]]
            name = "active"
            type = "bool"
            value = true
            "#,
        )
        .unwrap();
        let params = doc.to_parameters().unwrap();
        assert_eq!(
            params.to_script(None, &FormatOptions::default()),
            "DECLARE @price DECIMAL(6,4) = -12.3450\nDECLARE @active BIT = 1\n"
        );
    }

    #[test]
    fn test_int_out_of_range() {
        let doc = ParameterDocument::from_json(
            r#"{ "parameters": [{ "name": "n", "type": "int", "value": 3000000000 }] }"#,
        )
        .unwrap();
        assert!(matches!(
            doc.to_parameters(),
            Err(CliError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_table_requires_type_name() {
        let doc = ParameterDocument::from_json(
            r#"{ "parameters": [{ "name": "t", "type": "table", "columns": [], "rows": [] }] }"#,
        )
        .unwrap();
        assert!(doc.to_parameters().is_err());
    }

    #[test]
    fn test_row_arity_checked() {
        let doc = ParameterDocument::from_json(
            r#"{ "parameters": [{ "name": "t", "type": "table", "type_name": "dbo.T",
                 "columns": [{ "name": "a", "type": "int" }], "rows": [[1, 2]] }] }"#,
        )
        .unwrap();
        let err = doc.to_parameters().unwrap_err();
        assert!(err.to_string().contains("row 0 has 2 values, expected 1"));
    }

    #[test]
    fn test_type_mismatch() {
        let doc = ParameterDocument::from_json(
            r#"{ "parameters": [{ "name": "flag", "type": "bool", "value": "yes" }] }"#,
        )
        .unwrap();
        assert!(doc.to_parameters().is_err());
    }
}
