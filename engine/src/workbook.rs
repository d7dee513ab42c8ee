use serde_json::{Map, Value};

use crate::error::EngineError;
use crate::models::record::{AttendanceRecord, RawAttendanceRow};

/// Input column headers, preserved byte-for-byte so enriched exports stay a
/// superset of the uploaded tabular shape.
pub const COLUMN_EMPLOYEE_NAME: &str = "Employee Name";
pub const COLUMN_DATE: &str = "Date";
pub const COLUMN_IN_TIME: &str = "In-Time";
pub const COLUMN_OUT_TIME: &str = "Out-Time";

const REQUIRED_COLUMNS: &[&str] = &[
    COLUMN_EMPLOYEE_NAME,
    COLUMN_DATE,
    COLUMN_IN_TIME,
    COLUMN_OUT_TIME,
];

/// Derived column headers appended on CSV export.
const COLUMN_DAY_TYPE: &str = "Day Type";
const COLUMN_EXPECTED_HOURS: &str = "Expected Hours";
const COLUMN_ACTUAL_HOURS: &str = "Actual Hours";
const COLUMN_STATUS: &str = "Status";

/// One decoded sheet row: column name to cell value.
pub type Row = Map<String, Value>;

/// Decodes CSV text into sheet rows. The four required columns must be in
/// the header; their absence is the one structural failure of the ingest
/// path. Blank cells are delivered as absent fields, not empty strings.
pub fn rows_from_csv(text: &str) -> Result<Vec<Row>, EngineError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for &column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(EngineError::MissingColumn { column });
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Row::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            if cell.is_empty() {
                continue;
            }
            row.insert(header.to_string(), Value::String(cell.to_string()));
        }
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), "decoded workbook rows");
    Ok(rows)
}

/// Tolerant decode of one sheet row: text cells pass through, numeric cells
/// are rendered to text, absent or null cells become missing values, and
/// every unrecognized column rides along in `extra` untouched.
pub fn decode_row(row: &Row) -> RawAttendanceRow {
    let mut raw = RawAttendanceRow::default();
    for (column, value) in row {
        match column.as_str() {
            COLUMN_EMPLOYEE_NAME => raw.employee_name = cell_text(value).unwrap_or_default(),
            COLUMN_DATE => raw.date = cell_text(value).unwrap_or_default(),
            COLUMN_IN_TIME => raw.in_time = cell_text(value),
            COLUMN_OUT_TIME => raw.out_time = cell_text(value),
            _ => {
                raw.extra.insert(column.clone(), value.clone());
            }
        }
    }
    raw
}

pub fn decode_rows(rows: &[Row]) -> Vec<RawAttendanceRow> {
    rows.iter().map(decode_row).collect()
}

/// Projects enriched records back into the sheet-row shape: every original
/// field verbatim, the derived fields, and the status label. Strictly
/// additive over the input columns.
pub fn records_to_rows(records: &[AttendanceRecord]) -> Vec<Row> {
    records.iter().map(record_to_row).collect()
}

fn record_to_row(record: &AttendanceRecord) -> Row {
    let mut row = Row::new();
    row.insert(
        COLUMN_EMPLOYEE_NAME.to_string(),
        Value::String(record.row.employee_name.clone()),
    );
    row.insert(
        COLUMN_DATE.to_string(),
        Value::String(record.row.date.clone()),
    );
    if let Some(in_time) = &record.row.in_time {
        row.insert(COLUMN_IN_TIME.to_string(), Value::String(in_time.clone()));
    }
    if let Some(out_time) = &record.row.out_time {
        row.insert(COLUMN_OUT_TIME.to_string(), Value::String(out_time.clone()));
    }
    for (column, value) in &record.row.extra {
        row.insert(column.clone(), value.clone());
    }

    row.insert(
        "parsed_date".to_string(),
        match record.parsed_date {
            Some(date) => Value::String(date.format("%Y-%m-%d").to_string()),
            None => Value::Null,
        },
    );
    row.insert(
        "day_type".to_string(),
        Value::String(record.day_type.label().to_string()),
    );
    row.insert("expected_hours".to_string(), json_number(record.expected_hours));
    row.insert("actual_hours".to_string(), json_number(record.actual_hours));
    row.insert("is_leave".to_string(), Value::Bool(record.is_leave));
    row.insert("is_overtime".to_string(), Value::Bool(record.is_overtime));
    row.insert("is_undertime".to_string(), Value::Bool(record.is_undertime));
    row.insert(
        "status".to_string(),
        Value::String(record.status().label().to_string()),
    );
    row
}

fn json_number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Serializes enriched records to CSV text: the contract columns, the
/// derived columns, then extra input columns in the order they are first
/// seen. Every cell is quoted, and cells opening with `=`, `+`, `-` or `@`
/// get a leading `'` so a spreadsheet will not evaluate them as formulas.
pub fn records_to_csv(records: &[AttendanceRecord]) -> String {
    let extra_columns = collect_extra_columns(records);

    let mut buffer = String::new();
    let mut header: Vec<&str> = vec![
        COLUMN_EMPLOYEE_NAME,
        COLUMN_DATE,
        COLUMN_IN_TIME,
        COLUMN_OUT_TIME,
        COLUMN_DAY_TYPE,
        COLUMN_EXPECTED_HOURS,
        COLUMN_ACTUAL_HOURS,
        COLUMN_STATUS,
    ];
    header.extend(extra_columns.iter().map(String::as_str));
    push_row(&mut buffer, header.iter().copied());

    for record in records {
        let mut fields: Vec<String> = vec![
            record.row.employee_name.clone(),
            record.row.date.clone(),
            record.row.in_time.clone().unwrap_or_default(),
            record.row.out_time.clone().unwrap_or_default(),
            record.day_type.label().to_string(),
            format!("{:.2}", record.expected_hours),
            format!("{:.2}", record.actual_hours),
            record.status().label().to_string(),
        ];
        for column in &extra_columns {
            fields.push(
                record
                    .row
                    .extra
                    .get(column)
                    .and_then(cell_text)
                    .unwrap_or_default(),
            );
        }
        push_row(&mut buffer, fields.iter().map(String::as_str));
    }

    buffer
}

fn collect_extra_columns(records: &[AttendanceRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for column in record.row.extra.keys() {
            if !columns.iter().any(|known| known == column) {
                columns.push(column.clone());
            }
        }
    }
    columns
}

fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn needs_formula_guard(cell: &str) -> bool {
    matches!(cell.chars().next(), Some('=' | '+' | '-' | '@'))
}

fn push_cell(buffer: &mut String, cell: &str) {
    buffer.push('"');
    if needs_formula_guard(cell) {
        buffer.push('\'');
    }
    for ch in cell.chars() {
        if ch == '"' {
            buffer.push('"');
        }
        buffer.push(ch);
    }
    buffer.push('"');
}

fn push_row<'a>(buffer: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    for (index, cell) in cells.into_iter().enumerate() {
        if index > 0 {
            buffer.push(',');
        }
        push_cell(buffer, cell);
    }
    buffer.push('\n');
}
