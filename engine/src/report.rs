use std::cmp::Ordering;

use crate::models::record::AttendanceRecord;

/// Status facet of a record view. `Present` means any analyzed record that
/// is not a leave day; invalid-date records only ever show under `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Present,
    Leave,
    Overtime,
    Undertime,
}

impl StatusFilter {
    /// Parses the lowercase filter tokens used by selection controls.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(StatusFilter::All),
            "present" => Some(StatusFilter::Present),
            "leave" => Some(StatusFilter::Leave),
            "overtime" => Some(StatusFilter::Overtime),
            "undertime" => Some(StatusFilter::Undertime),
            _ => None,
        }
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Present => !record.is_leave && record.parsed_date.is_some(),
            StatusFilter::Leave => record.is_leave,
            StatusFilter::Overtime => record.is_overtime,
            StatusFilter::Undertime => record.is_undertime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    EmployeeName,
    Date,
    InTime,
    OutTime,
    ExpectedHours,
    ActualHours,
    Productivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// One view over a record list: a case-insensitive employee-name search, a
/// status facet, and an optional sort.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub sort: Option<(SortKey, SortDirection)>,
}

/// Read-only projection over classified records. Returns borrowed records;
/// the dataset is never cloned, mutated, or reordered in place. The sort is
/// stable, so equal keys keep their input order.
pub fn select<'a>(
    records: &'a [AttendanceRecord],
    query: &RecordQuery,
) -> Vec<&'a AttendanceRecord> {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|needle| !needle.is_empty());

    let mut selected: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|record| query.status.matches(record))
        .filter(|record| match &needle {
            Some(needle) => record.row.employee_name.to_lowercase().contains(needle),
            None => true,
        })
        .collect();

    if let Some((key, direction)) = query.sort {
        selected.sort_by(|a, b| {
            let ordering = compare_by(key, a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    selected
}

fn compare_by(key: SortKey, a: &AttendanceRecord, b: &AttendanceRecord) -> Ordering {
    match key {
        SortKey::EmployeeName => a.row.employee_name.cmp(&b.row.employee_name),
        // Chronological, with invalid dates sorting first.
        SortKey::Date => a.parsed_date.cmp(&b.parsed_date),
        SortKey::InTime => a.row.in_time.cmp(&b.row.in_time),
        SortKey::OutTime => a.row.out_time.cmp(&b.row.out_time),
        SortKey::ExpectedHours => a.expected_hours.total_cmp(&b.expected_hours),
        SortKey::ActualHours => a.actual_hours.total_cmp(&b.actual_hours),
        SortKey::Productivity => a.productivity_pct().total_cmp(&b.productivity_pct()),
    }
}

/// One-decimal hour figure for summary cards, e.g. `8.5h`.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}h")
}

/// One-decimal percentage for summary cards, e.g. `97.1%`.
pub fn format_pct(pct: f64) -> String {
    format!("{pct:.1}%")
}
