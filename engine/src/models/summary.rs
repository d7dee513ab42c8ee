use serde::{Deserialize, Serialize};

use crate::models::record::AttendanceRecord;

/// Per-employee rollup. `records` keeps the input order of that employee's
/// rows; the summaries themselves are emitted in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub name: String,
    pub records: Vec<AttendanceRecord>,
    pub total_actual_hours: f64,
    pub total_expected_hours: f64,
    pub leave_count: usize,
    pub overtime_count: usize,
    pub undertime_count: usize,
}

impl EmployeeSummary {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            records: Vec::new(),
            total_actual_hours: 0.0,
            total_expected_hours: 0.0,
            leave_count: 0,
            overtime_count: 0,
            undertime_count: 0,
        }
    }

    pub(crate) fn push(&mut self, record: AttendanceRecord) {
        self.total_actual_hours += record.actual_hours;
        self.total_expected_hours += record.expected_hours;
        if record.is_leave {
            self.leave_count += 1;
        }
        if record.is_overtime {
            self.overtime_count += 1;
        }
        if record.is_undertime {
            self.undertime_count += 1;
        }
        self.records.push(record);
    }

    /// Total actual over total expected hours as a percentage, 0 when
    /// nothing was expected.
    pub fn productivity_pct(&self) -> f64 {
        if self.total_expected_hours > 0.0 {
            self.total_actual_hours / self.total_expected_hours * 100.0
        } else {
            0.0
        }
    }
}

/// Whole-dataset totals over the analyzed (valid-date) records. Ratio
/// fields fall back to 0 when their denominator is 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub employee_count: usize,
    pub present_count: usize,
    pub total_expected_hours: f64,
    pub total_actual_hours: f64,
    pub total_leaves: usize,
    pub total_overtime: usize,
    pub total_undertime: usize,
    pub invalid_date_count: usize,
    pub productivity_pct: f64,
    pub attendance_rate_pct: f64,
}

/// Everything one aggregation pass produces. `excluded` holds the
/// invalid-date records, in input order, that contributed to no totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    pub summary: DatasetSummary,
    pub employees: Vec<EmployeeSummary>,
    pub excluded: Vec<AttendanceRecord>,
}

/// Result of a full analysis pass: the classified records in input order
/// plus the aggregated report. Replaced wholesale on every pass, never
/// patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub records: Vec<AttendanceRecord>,
    pub report: DatasetReport,
}
