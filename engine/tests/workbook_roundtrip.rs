mod support;

use leave_analyzer_engine::workbook::{
    decode_rows, records_to_csv, records_to_rows, rows_from_csv,
};
use leave_analyzer_engine::{analyze, EngineError, WorkSchedule};

#[test]
fn csv_upload_flows_through_analysis_and_back() {
    support::init_tracing();
    let text = "Employee Name,Date,In-Time,Out-Time,Department\n\
                Alice,2024-03-04,09:00,17:30,Ops\n\
                Bob,2024-03-09,,,Sales\n\
                Cara,2024-03-03,10:00,12:00,Ops\n";

    let rows = rows_from_csv(text).expect("decode csv");
    let outcome = analyze(decode_rows(&rows), &WorkSchedule::default());
    let summary = &outcome.report.summary;

    assert_eq!(summary.record_count, 3);
    assert_eq!(summary.total_leaves, 1);
    assert_eq!(summary.total_overtime, 1);
    assert_eq!(summary.total_expected_hours, 12.5);
    assert_eq!(summary.total_actual_hours, 10.5);

    // The exported text re-ingests to the same analysis.
    let exported = records_to_csv(&outcome.records);
    let again = analyze(
        decode_rows(&rows_from_csv(&exported).expect("decode exported csv")),
        &WorkSchedule::default(),
    );
    assert_eq!(again.report.summary, outcome.report.summary);
}

#[test]
fn missing_required_column_is_a_hard_error() {
    let text = "Employee Name,In-Time,Out-Time\nAlice,09:00,17:30\n";
    let err = rows_from_csv(text).expect_err("must fail");

    assert!(matches!(err, EngineError::MissingColumn { column: "Date" }));
}

#[test]
fn blank_cells_become_missing_punches() {
    // 2024-03-04 is Monday
    let text = "Employee Name,Date,In-Time,Out-Time\nBob,2024-03-04,,\n";
    let rows = rows_from_csv(text).expect("decode csv");

    assert!(!rows[0].contains_key("In-Time"));
    assert!(!rows[0].contains_key("Out-Time"));

    let outcome = analyze(decode_rows(&rows), &WorkSchedule::default());
    assert!(outcome.records[0].is_leave);
}

#[test]
fn formula_cells_are_guarded_on_export() {
    let text = "Employee Name,Date,In-Time,Out-Time\n=2+5,2024-03-04,09:00,17:30\n";
    let outcome = analyze(
        decode_rows(&rows_from_csv(text).expect("decode csv")),
        &WorkSchedule::default(),
    );

    let exported = records_to_csv(&outcome.records);
    assert!(exported.contains("\"'=2+5\""));
    assert!(!exported.contains("\"=2+5\""));
}

#[test]
fn exported_rows_are_an_additive_superset_of_the_input() {
    let text = "Employee Name,Date,In-Time,Out-Time,Department\nAlice,2024-03-04,09:00,17:30,Ops\n";
    let outcome = analyze(
        decode_rows(&rows_from_csv(text).expect("decode csv")),
        &WorkSchedule::default(),
    );

    let row = &records_to_rows(&outcome.records)[0];
    assert_eq!(row["Employee Name"], "Alice");
    assert_eq!(row["Department"], "Ops");
    assert_eq!(row["status"], "Present");

    let csv_text = records_to_csv(&outcome.records);
    let header = csv_text.lines().next().expect("header line");
    assert!(header.starts_with("\"Employee Name\",\"Date\",\"In-Time\",\"Out-Time\""));
    assert!(header.contains("\"Department\""));
}
