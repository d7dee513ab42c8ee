use chrono::{Datelike, NaiveDate, NaiveTime};

/// Date cell renderings accepted from workbooks, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Expected working hours per day class, plus the tolerance band used when
/// classifying overtime and undertime. There is exactly one of these per
/// analysis pass so the calendar rules cannot drift between call sites.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkSchedule {
    pub weekday_hours: f64,
    pub saturday_hours: f64,
    pub sunday_hours: f64,
    pub tolerance_hours: f64,
}

impl Default for WorkSchedule {
    fn default() -> Self {
        // Standard week: full weekdays, a half Saturday, Sundays off.
        Self {
            weekday_hours: 8.5,
            saturday_hours: 4.0,
            sunday_hours: 0.0,
            tolerance_hours: 0.5,
        }
    }
}

impl WorkSchedule {
    /// Expected hours for a calendar day, decided by weekday alone.
    /// Weekdays are indexed Sunday=0 through Saturday=6.
    pub fn expected_hours(&self, date: NaiveDate) -> f64 {
        match date.weekday().num_days_from_sunday() {
            0 => self.sunday_hours,
            6 => self.saturday_hours,
            _ => self.weekday_hours,
        }
    }
}

/// Worked hours derived from a clock-in/clock-out pair.
///
/// Missing, blank, or unparseable punches yield 0 rather than an error, so
/// one bad cell never aborts the rest of a sheet. A clock-out earlier than
/// the clock-in clamps to 0: punches are same-day wall-clock values and
/// overnight shifts are outside this model.
pub fn actual_hours(in_time: Option<&str>, out_time: Option<&str>) -> f64 {
    let (Some(start), Some(end)) = (
        in_time.and_then(parse_clock_time),
        out_time.and_then(parse_clock_time),
    ) else {
        return 0.0;
    };

    let minutes = (end - start).num_minutes();
    minutes.max(0) as f64 / 60.0
}

/// Parses a 24-hour `HH:MM` wall-clock cell. Blank cells count as absent.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match NaiveTime::parse_from_str(trimmed, "%H:%M") {
        Ok(time) => Some(time),
        Err(_) => {
            tracing::debug!(value = trimmed, "clock time did not parse as HH:MM");
            None
        }
    }
}

/// Parses a workbook date cell. Anything outside the accepted renderings is
/// reported as invalid instead of guessed at.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
