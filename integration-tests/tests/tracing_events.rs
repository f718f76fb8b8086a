use hapmodel_core::CompareOptions;
use hapmodel_core::models::EntityKind;
use hapmodel_core::snapshot::compare_files;
use integration_tests::harness::{capture_events, fixture};
use pretty_assertions::assert_eq;

#[test]
fn comparison_emits_summary_event() {
    let (report, events) = capture_events(|| {
        compare_files(
            EntityKind::Backend,
            &fixture("backend_v1.json"),
            &fixture("backend_v2.json"),
            CompareOptions::DEFAULT,
        )
        .unwrap()
    });

    let summary = events
        .iter()
        .find(|e| e.message() == Some("compared snapshots"))
        .expect("no summary event");

    assert_eq!(summary.level, tracing::Level::DEBUG);
    assert_eq!(summary.field("kind"), Some("backend"));
    assert_eq!(summary.field("equal"), Some("false"));
    assert_eq!(
        summary.field("differences"),
        Some(report.diff.len().to_string().as_str())
    );
}

#[test]
fn loading_options_is_logged() {
    let (_, events) = capture_events(|| {
        hapmodel_core::snapshot::load_options(&fixture("strict.hcl")).unwrap()
    });

    let loaded = events
        .iter()
        .find(|e| e.message() == Some("loaded comparison options"))
        .expect("no options event");

    assert_eq!(loaded.field("nil_same_as_empty"), Some("false"));
    assert!(loaded.target.starts_with("hapmodel_core"));
}
