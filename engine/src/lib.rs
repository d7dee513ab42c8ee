//! Attendance analysis engine: decodes tabular punch data, classifies each
//! row against a weekly work schedule, and aggregates per-employee and
//! dataset-wide summaries.

pub mod analysis;
pub mod classifier;
pub mod error;
pub mod models;
pub mod report;
pub mod schedule;
pub mod workbook;

pub use analysis::{aggregate, analyze};
pub use classifier::classify;
pub use error::EngineError;
pub use models::record::{AttendanceRecord, AttendanceStatus, DayType, RawAttendanceRow};
pub use models::summary::{AnalysisOutcome, DatasetReport, DatasetSummary, EmployeeSummary};
pub use schedule::WorkSchedule;
