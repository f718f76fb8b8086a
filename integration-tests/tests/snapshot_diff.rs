use hapmodel_core::CompareOptions;
use hapmodel_core::models::EntityKind;
use hapmodel_core::snapshot::compare_files;
use integration_tests::harness::fixture;
use pretty_assertions::assert_eq;
use serde_json::json;

fn paths(report: &hapmodel_core::snapshot::DiffReport) -> Vec<String> {
    report
        .diff
        .changes()
        .into_iter()
        .map(|change| change.path)
        .collect()
}

#[test]
fn backend_snapshots_report_every_changed_leaf() {
    let report = compare_files(
        EntityKind::Backend,
        &fixture("backend_v1.json"),
        &fixture("backend_v2.json"),
        CompareOptions::DEFAULT,
    )
    .unwrap();

    assert!(report.has_differences());
    assert_eq!(
        paths(&report),
        vec![
            "balance.algorithm",
            "http_request_rule_list.0.deny_status",
            "server_timeout",
            "servers.web2.params.weight",
        ]
    );
}

#[test]
fn backend_diff_carries_raw_values() {
    let report = compare_files(
        EntityKind::Backend,
        &fixture("backend_v1.json"),
        &fixture("backend_v2.json"),
        CompareOptions::DEFAULT,
    )
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

    assert_eq!(json["equal"], json!(false));
    assert_eq!(json["diff"]["server_timeout"], json!([30000, 60000]));
    assert_eq!(
        json["diff"]["servers"]["web2"]["params"]["weight"],
        json!([10, 0])
    );
}

#[test]
fn snapshot_compared_with_itself_is_equal() {
    let report = compare_files(
        EntityKind::Backend,
        &fixture("backend_v1.json"),
        &fixture("backend_v1.json"),
        CompareOptions::STRICT,
    )
    .unwrap();

    assert!(report.equal);
    assert!(report.diff.is_empty());
    assert_eq!(report.render_plain(), "");
}

#[test]
fn configuration_reports_changed_backend_set_whole() {
    let report = compare_files(
        EntityKind::Configuration,
        &fixture("configuration_v1.yaml"),
        &fixture("configuration_v2.yaml"),
        CompareOptions::DEFAULT,
    )
    .unwrap();

    assert_eq!(
        paths(&report),
        vec!["backends", "frontends.public.binds.http.port"]
    );

    let (_, right) = report.diff.get("backends").unwrap().as_changed().unwrap();
    assert!(right.get("static").is_some());
}

#[test]
fn configuration_version_only_shows_when_volatile_fields_are_kept() {
    let opts = CompareOptions::DEFAULT.with_skip_volatile_fields(false);

    let report = compare_files(
        EntityKind::Configuration,
        &fixture("configuration_v1.yaml"),
        &fixture("configuration_v2.yaml"),
        opts,
    )
    .unwrap();

    assert_eq!(
        report.diff.get("version").unwrap().as_changed(),
        Some((&json!(12), &json!(13)))
    );
}

#[test]
fn hcl_and_json_snapshots_of_one_bind_are_equal() {
    let report = compare_files(
        EntityKind::Bind,
        &fixture("bind.json"),
        &fixture("bind.hcl"),
        CompareOptions::STRICT,
    )
    .unwrap();

    assert!(report.equal, "unexpected diff:\n{}", report.render_plain());
}

#[test]
fn snapshot_of_wrong_kind_fails_to_load() {
    let err = compare_files(
        EntityKind::Server,
        &fixture("configuration_v1.yaml"),
        &fixture("configuration_v2.yaml"),
        CompareOptions::DEFAULT,
    )
    .unwrap_err();

    assert!(err.to_string().contains("configuration_v1.yaml"));
}
