// src/providers/mod.rs
//! Structured job sources: anything that answers a search query with a table.

pub mod adapter;
pub mod http;
pub mod linkedin;

pub use adapter::StructuredSourceAdapter;
pub use http::HttpJobProvider;
pub use linkedin::LinkedInProvider;

use crate::error::SourceResult;
use crate::types::Value;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;

/// Arguments for one provider search, one keyword at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderQuery {
    pub site_name: Vec<String>,
    pub search_term: String,
    pub location: String,
    pub results_wanted: u32,
    pub hours_old: u32,
}

/// Tabular search result with heterogeneous columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ProviderTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Build from record-shaped rows; the column set is the union of all keys
    /// in first-seen order and absent cells become [`Value::Missing`].
    pub fn from_records(records: Vec<BTreeMap<String, Value>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|column| record.remove(column).unwrap_or(Value::Missing))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One mapping per row. Short rows are padded with [`Value::Missing`];
    /// cells beyond the known columns are dropped.
    pub fn into_records(self) -> Vec<BTreeMap<String, Value>> {
        let columns = self.columns;
        self.rows
            .into_iter()
            .map(|row| {
                let mut cells = row.into_iter();
                columns
                    .iter()
                    .map(|column| (column.clone(), cells.next().unwrap_or(Value::Missing)))
                    .collect()
            })
            .collect()
    }
}

#[async_trait]
pub trait JobProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn search(&self, query: &ProviderQuery) -> SourceResult<ProviderTable>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_records_pads_short_rows() {
        let table = ProviderTable::new(
            vec!["title".to_string(), "company".to_string(), "description".to_string()],
            vec![
                vec![Value::from("Rust Dev"), Value::from("Acme")],
                vec![Value::from("Go Dev"), Value::Null, Value::from("Nice")],
            ],
        );
        let records = table.into_records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("description"), Some(&Value::Missing));
        assert_eq!(records[1].get("company"), Some(&Value::Null));
        assert_eq!(records[1].get("description"), Some(&Value::from("Nice")));
    }

    #[test]
    fn test_from_records_unions_columns() {
        let first: BTreeMap<String, Value> = [("title".to_string(), Value::from("A"))].into();
        let second: BTreeMap<String, Value> = [
            ("title".to_string(), Value::from("B")),
            ("salary".to_string(), Value::Int(10)),
        ]
        .into();

        let table = ProviderTable::from_records(vec![first, second]);
        assert_eq!(table.columns, vec!["title", "salary"]);
        assert_eq!(table.rows[0], vec![Value::from("A"), Value::Missing]);
        assert_eq!(table.len(), 2);
    }
}
