use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One untrusted workbook row. The serde names are the workbook column
/// headers and must stay byte-for-byte identical: exports round-trip through
/// the same tabular shape. Columns outside the contract ride along in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAttendanceRow {
    #[serde(rename = "Employee Name", default)]
    pub employee_name: String,
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "In-Time", skip_serializing_if = "Option::is_none")]
    pub in_time: Option<String>,
    #[serde(rename = "Out-Time", skip_serializing_if = "Option::is_none")]
    pub out_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A classified row: every raw field plus the derived metrics and flags.
/// `parsed_date` is the date-parse outcome; `None` marks the record invalid
/// and keeps it out of every aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(flatten)]
    pub row: RawAttendanceRow,
    pub parsed_date: Option<NaiveDate>,
    pub day_type: DayType,
    pub expected_hours: f64,
    pub actual_hours: f64,
    pub is_leave: bool,
    pub is_overtime: bool,
    pub is_undertime: bool,
}

impl AttendanceRecord {
    /// One badge per record. Leave outranks overtime, overtime outranks
    /// undertime; a record whose date never parsed is always `Invalid`.
    pub fn status(&self) -> AttendanceStatus {
        if self.parsed_date.is_none() {
            AttendanceStatus::Invalid
        } else if self.is_leave {
            AttendanceStatus::Leave
        } else if self.is_overtime {
            AttendanceStatus::Overtime
        } else if self.is_undertime {
            AttendanceStatus::Undertime
        } else {
            AttendanceStatus::Present
        }
    }

    /// Actual over expected hours as a percentage, 0 when nothing was
    /// expected.
    pub fn productivity_pct(&self) -> f64 {
        if self.expected_hours > 0.0 {
            self.actual_hours / self.expected_hours * 100.0
        } else {
            0.0
        }
    }
}

/// Weekday name of a record's date, or `Invalid` when the date cell never
/// parsed. Serializes to the plain name string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayType {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Invalid,
}

impl DayType {
    pub fn label(&self) -> &'static str {
        match self {
            DayType::Sunday => "Sunday",
            DayType::Monday => "Monday",
            DayType::Tuesday => "Tuesday",
            DayType::Wednesday => "Wednesday",
            DayType::Thursday => "Thursday",
            DayType::Friday => "Friday",
            DayType::Saturday => "Saturday",
            DayType::Invalid => "Invalid",
        }
    }
}

impl From<Weekday> for DayType {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayType::Sunday,
            Weekday::Mon => DayType::Monday,
            Weekday::Tue => DayType::Tuesday,
            Weekday::Wed => DayType::Wednesday,
            Weekday::Thu => DayType::Thursday,
            Weekday::Fri => DayType::Friday,
            Weekday::Sat => DayType::Saturday,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Invalid,
    Leave,
    Overtime,
    Undertime,
    Present,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Invalid => "Invalid",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::Overtime => "Overtime",
            AttendanceStatus::Undertime => "Undertime",
            AttendanceStatus::Present => "Present",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(is_leave: bool, is_overtime: bool, is_undertime: bool) -> AttendanceRecord {
        AttendanceRecord {
            row: RawAttendanceRow {
                employee_name: "Alice".to_string(),
                date: "2024-03-04".to_string(),
                in_time: Some("09:00".to_string()),
                out_time: Some("17:30".to_string()),
                extra: Map::new(),
            },
            parsed_date: NaiveDate::from_ymd_opt(2024, 3, 4),
            day_type: DayType::Monday,
            expected_hours: 8.5,
            actual_hours: 8.5,
            is_leave,
            is_overtime,
            is_undertime,
        }
    }

    #[test]
    fn record_serializes_contract_field_names_verbatim() {
        let value = serde_json::to_value(record(false, false, false)).expect("serialize");

        assert_eq!(value["Employee Name"], "Alice");
        assert_eq!(value["Date"], "2024-03-04");
        assert_eq!(value["In-Time"], "09:00");
        assert_eq!(value["Out-Time"], "17:30");
        assert_eq!(value["day_type"], "Monday");
        assert_eq!(value["parsed_date"], "2024-03-04");
    }

    #[test]
    fn extra_columns_flatten_to_the_top_level() {
        let mut raw = RawAttendanceRow {
            employee_name: "Alice".to_string(),
            date: "2024-03-04".to_string(),
            ..RawAttendanceRow::default()
        };
        raw.extra
            .insert("Department".to_string(), Value::String("Ops".to_string()));

        let value = serde_json::to_value(&raw).expect("serialize");
        assert_eq!(value["Department"], "Ops");

        let round_trip: RawAttendanceRow = serde_json::from_value(value).expect("deserialize");
        assert_eq!(round_trip, raw);
    }

    #[test]
    fn missing_punch_keys_deserialize_as_absent() {
        let raw: RawAttendanceRow = serde_json::from_value(serde_json::json!({
            "Employee Name": "Bob",
            "Date": "2024-03-09"
        }))
        .expect("deserialize");

        assert_eq!(raw.in_time, None);
        assert_eq!(raw.out_time, None);
    }

    #[test]
    fn status_follows_badge_precedence() {
        assert_eq!(record(true, false, true).status(), AttendanceStatus::Leave);
        assert_eq!(
            record(false, true, false).status(),
            AttendanceStatus::Overtime
        );
        assert_eq!(
            record(false, false, true).status(),
            AttendanceStatus::Undertime
        );
        assert_eq!(
            record(false, false, false).status(),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn unparsed_date_outranks_every_other_status() {
        let mut invalid = record(false, false, false);
        invalid.parsed_date = None;
        invalid.day_type = DayType::Invalid;

        assert_eq!(invalid.status(), AttendanceStatus::Invalid);
    }

    #[test]
    fn productivity_pct_guards_a_zero_expectation() {
        let mut sunday = record(false, true, false);
        sunday.expected_hours = 0.0;
        sunday.actual_hours = 2.0;
        assert_eq!(sunday.productivity_pct(), 0.0);

        let full = record(false, false, false);
        assert_eq!(full.productivity_pct(), 100.0);
    }

    #[test]
    fn day_type_serde_uses_plain_names() {
        let day: DayType = serde_json::from_str("\"Saturday\"").expect("deserialize");
        assert_eq!(day, DayType::Saturday);
        let value = serde_json::to_value(DayType::Invalid).expect("serialize");
        assert_eq!(value, serde_json::json!("Invalid"));
    }
}
