//! Conversion records and the append-only history that holds them.

use crate::convert::convert;
use crate::error::ToolkitError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// One completed conversion. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub value: f64,
    pub from: String,
    pub to: String,
    pub category: String,
    pub result: f64,
}

impl ConversionRecord {
    /// Renders the record as `"{value} {from} = {result} {to}"` with the
    /// result rounded to `precision` decimal places. The input value keeps
    /// its decimal point (`1.0`, not `1`).
    pub fn describe(&self, precision: usize) -> String {
        format!(
            "{:?} {} = {:.*} {}",
            self.value, self.from, precision, self.result, self.to
        )
    }
}

impl fmt::Display for ConversionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(4))
    }
}

/// Conversion log, newest first. Unbounded.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: VecDeque<ConversionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` as the most recent entry.
    pub fn record(&mut self, record: ConversionRecord) {
        tracing::debug!(entry = %record, len = self.records.len() + 1, "history append");
        self.records.push_front(record);
    }

    /// Iterates records from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The conversion engine: stateless conversions plus the history log.
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    history: History,
}

impl ConversionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an already-computed record to the history.
    pub fn record_history(&mut self, record: ConversionRecord) {
        self.history.record(record);
    }

    /// Converts `value` and records the result.
    ///
    /// Nothing is recorded when the conversion fails.
    pub fn convert_and_record(
        &mut self,
        value: f64,
        from: &str,
        to: &str,
        category: &str,
    ) -> Result<ConversionRecord, ToolkitError> {
        let result = convert(value, from, to, category)?;
        let record = ConversionRecord {
            value,
            from: from.to_string(),
            to: to.to_string(),
            category: category.to_string(),
            result,
        };
        self.record_history(record.clone());
        Ok(record)
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
