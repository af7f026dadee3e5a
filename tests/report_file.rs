use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::Value;

use u_study::assistant::StudyAssistant;
use u_study::report::ReportWriter;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Mirrors the binary: plan first, write only on success.
fn plan_and_write(
    topics: &str,
    deadline: &str,
    today: NaiveDate,
    writer: &ReportWriter,
) -> u_study::Result<()> {
    let outcome = StudyAssistant::new().run(topics, deadline, today)?;
    writer.write(&outcome.reports)
}

#[test]
fn writes_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path().join("study_assistant_output.json"));

    plan_and_write("Math, Physics", "2024-01-11", date(2024, 1, 1), &writer).unwrap();

    let text = std::fs::read_to_string(writer.path()).unwrap();
    let json: Value = serde_json::from_str(&text).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["topic"], "Math");
    assert_eq!(entries[0]["start_date"], "2024-01-01");
    assert_eq!(entries[0]["end_date"], "2024-01-05");
    assert_eq!(entries[1]["topic"], "Physics");
    assert_eq!(entries[1]["start_date"], "2024-01-06");
    assert_eq!(entries[1]["end_date"], "2024-01-10");
    assert_eq!(
        entries[1]["summary"],
        "What is Physics? - https://en.wikipedia.org/wiki/Physics | \
         YouTube Intro to Physics - https://www.youtube.com/results?search_query=introduction+to+Physics | \
         Benefits and Risks of Physics - https://medium.com/tag/Physics | \
         Research Paper on Physics - https://scholar.google.com/scholar?q=Physics"
    );

    // Keys keep declaration order and 4-space indentation
    assert!(text.starts_with("[\n    {\n        \"topic\": \"Math\",\n        \"start_date\""));
}

#[test]
fn rejected_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path().join("study_assistant_output.json"));
    let today = date(2024, 1, 1);

    for (topics, deadline) in [
        (" , ", "2024-01-11"),
        ("Math", "13/05/2025"),
        ("Math", "2025-13-01"),
        ("Math", "tomorrow"),
        ("Math", "2024-01-01"),
        ("Math", "2023-06-30"),
    ] {
        let err = plan_and_write(topics, deadline, today, &writer).unwrap_err();
        assert!(err.is_validation(), "{topics:?} / {deadline:?}: {err}");
        assert!(!writer.path().exists());
    }
}
