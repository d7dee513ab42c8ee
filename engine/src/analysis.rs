use std::collections::HashMap;

use crate::classifier::classify;
use crate::models::record::{AttendanceRecord, RawAttendanceRow};
use crate::models::summary::{AnalysisOutcome, DatasetReport, DatasetSummary, EmployeeSummary};
use crate::schedule::WorkSchedule;

/// Rolls classified records into the dataset summary plus per-employee
/// groupings.
///
/// Employees appear in first-seen order and each one's records keep input
/// order; grouping is by the literal name string, empty names included.
/// Invalid-date records contribute to no total or count and are returned
/// separately in `excluded`.
pub fn aggregate(records: &[AttendanceRecord]) -> DatasetReport {
    let mut summary = DatasetSummary::default();
    let mut employees: Vec<EmployeeSummary> = Vec::new();
    let mut slot_by_name: HashMap<String, usize> = HashMap::new();
    let mut excluded: Vec<AttendanceRecord> = Vec::new();

    for record in records {
        if record.parsed_date.is_none() {
            summary.invalid_date_count += 1;
            excluded.push(record.clone());
            continue;
        }

        summary.record_count += 1;
        summary.total_expected_hours += record.expected_hours;
        summary.total_actual_hours += record.actual_hours;
        if record.is_leave {
            summary.total_leaves += 1;
        } else {
            summary.present_count += 1;
        }
        if record.is_overtime {
            summary.total_overtime += 1;
        }
        if record.is_undertime {
            summary.total_undertime += 1;
        }

        let slot = match slot_by_name.get(&record.row.employee_name) {
            Some(&slot) => slot,
            None => {
                slot_by_name.insert(record.row.employee_name.clone(), employees.len());
                employees.push(EmployeeSummary::new(record.row.employee_name.clone()));
                employees.len() - 1
            }
        };
        employees[slot].push(record.clone());
    }

    summary.employee_count = employees.len();
    if summary.total_expected_hours > 0.0 {
        summary.productivity_pct =
            summary.total_actual_hours / summary.total_expected_hours * 100.0;
    }
    if summary.record_count > 0 {
        summary.attendance_rate_pct = (summary.record_count - summary.total_leaves) as f64
            / summary.record_count as f64
            * 100.0;
    }

    DatasetReport {
        summary,
        employees,
        excluded,
    }
}

/// Full pipeline for one freshly decoded sheet: classify every row, then
/// aggregate. Each call recomputes all derived state from the raw rows.
pub fn analyze(rows: Vec<RawAttendanceRow>, schedule: &WorkSchedule) -> AnalysisOutcome {
    let records: Vec<AttendanceRecord> = rows
        .into_iter()
        .map(|row| classify(row, schedule))
        .collect();
    let report = aggregate(&records);

    tracing::info!(
        records = report.summary.record_count,
        employees = report.summary.employee_count,
        excluded = report.summary.invalid_date_count,
        "attendance analysis complete"
    );

    AnalysisOutcome { records, report }
}
