use super::test_helpers::*;
use crate::compare::{Compare, CompareOptions, DiffNode};
use crate::models::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn bind_tls_change_nests_through_binds_and_ssl() {
    let a = frontend();
    let mut b = frontend();
    let https = b.binds.as_mut().unwrap().get_mut("https").unwrap();
    https.ssl.as_mut().unwrap().ssl_min_ver = Some(TlsVersion::Tlsv12);

    assert!(!a.equal(&b));
    assert_eq!(
        serde_json::to_value(a.diff(&b)).unwrap(),
        json!({ "binds": { "https": { "ssl": { "ssl_min_ver": [null, "TLSv1.2"] } } } })
    );
}

#[test]
fn return_header_change_nests_two_sequences_deep() {
    let a = frontend();
    let mut b = frontend();
    b.http_request_rule_list.as_mut().unwrap()[0]
        .return_hdrs
        .as_mut()
        .unwrap()[0]
        .fmt = "no-cache".to_string();

    let diff = a.diff(&b);
    assert_eq!(
        diff.changes()
            .into_iter()
            .map(|c| c.path)
            .collect::<Vec<_>>(),
        vec!["http_request_rule_list.0.return_hdrs.0.fmt"]
    );
}

#[test]
fn rule_type_is_reported_under_wire_name() {
    let a = frontend();
    let mut b = frontend();
    b.http_request_rule_list.as_mut().unwrap()[0].kind = HttpRequestRuleType::Deny;

    let diff = a.diff(&b);
    let rules = diff
        .get("http_request_rule_list")
        .and_then(DiffNode::as_indexed)
        .unwrap();
    assert_eq!(
        serde_json::to_value(&rules[&0]).unwrap(),
        json!({ "type": ["return", "deny"] })
    );
}

#[test]
fn several_top_level_fields_are_all_reported() {
    let a = frontend();
    let b = Frontend {
        mode: Some(ProxyMode::Tcp),
        maxconn: Some(1000),
        disabled: true,
        ..frontend()
    };

    assert_eq!(
        a.diff(&b).keys().collect::<Vec<_>>(),
        vec!["disabled", "maxconn", "mode"]
    );
}

#[test]
fn bind_ssl_removed_collapses_to_empty_options() {
    let a = frontend();
    let mut b = frontend();
    b.binds.as_mut().unwrap().get_mut("https").unwrap().ssl = None;

    let diff = a.diff_with(&b, CompareOptions::DEFAULT);
    let binds = diff.get("binds").and_then(DiffNode::as_keyed).unwrap();
    let (_, right) = binds["https"]
        .get("ssl")
        .and_then(DiffNode::as_changed)
        .unwrap();
    assert_eq!(right, &json!({ "enabled": false, "no_tls_tickets": false }));
}

#[test]
fn json_round_trip_preserves_equality() {
    let a = frontend();
    let wire = serde_json::to_string(&a).unwrap();
    let b: Frontend = serde_json::from_str(&wire).unwrap();

    assert!(a.equal_with(&b, CompareOptions::STRICT));
}
