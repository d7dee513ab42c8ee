use chrono::Datelike;

use crate::models::record::{AttendanceRecord, DayType, RawAttendanceRow};
use crate::schedule::{actual_hours, parse_record_date, WorkSchedule};

/// Derives the full attendance record for one raw row.
///
/// Pure: the result depends on the row and the schedule alone; the system
/// clock is never consulted. A date cell that does not parse yields a
/// record explicitly marked invalid instead of one silently pinned to the
/// day the analysis happened to run.
pub fn classify(row: RawAttendanceRow, schedule: &WorkSchedule) -> AttendanceRecord {
    let worked = actual_hours(row.in_time.as_deref(), row.out_time.as_deref());

    let Some(date) = parse_record_date(&row.date) else {
        tracing::warn!(
            employee = %row.employee_name,
            date = %row.date,
            "date cell did not parse; record marked invalid"
        );
        // No calendar day means no schedule, so none of the flags can be
        // judged. The Invalid day type carries the signal.
        return AttendanceRecord {
            row,
            parsed_date: None,
            day_type: DayType::Invalid,
            expected_hours: 0.0,
            actual_hours: worked,
            is_leave: false,
            is_overtime: false,
            is_undertime: false,
        };
    };

    let expected = schedule.expected_hours(date);
    let tolerance = schedule.tolerance_hours;

    AttendanceRecord {
        row,
        parsed_date: Some(date),
        day_type: DayType::from(date.weekday()),
        expected_hours: expected,
        actual_hours: worked,
        is_leave: expected > 0.0 && worked == 0.0,
        is_overtime: worked > expected + tolerance,
        is_undertime: expected > 0.0 && worked < expected - tolerance,
    }
}
