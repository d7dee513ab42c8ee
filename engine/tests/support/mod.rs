#![allow(dead_code)]
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use leave_analyzer_engine::workbook::Row;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("leave_analyzer_engine=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Builds one decoded sheet row under the workbook column contract.
pub fn sheet_row(
    name: &str,
    date: &str,
    in_time: Option<&str>,
    out_time: Option<&str>,
) -> Row {
    let mut row = Row::new();
    row.insert(
        "Employee Name".to_string(),
        Value::String(name.to_string()),
    );
    row.insert("Date".to_string(), Value::String(date.to_string()));
    if let Some(time) = in_time {
        row.insert("In-Time".to_string(), Value::String(time.to_string()));
    }
    if let Some(time) = out_time {
        row.insert("Out-Time".to_string(), Value::String(time.to_string()));
    }
    row
}
