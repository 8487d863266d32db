use super::{looks_like_json, parse_workflow_text, render_workflow_yaml};
use awe_core::Workflow;

#[test]
fn detects_json_documents_by_first_character() {
    assert!(looks_like_json(r#"{ "jobs": {} }"#));
    assert!(looks_like_json("  [1, 2]"));
    assert!(!looks_like_json("jobs: {}\n"));
}

#[test]
fn parses_yaml_workflows() {
    let workflow =
        parse_workflow_text("name: CI\non: push\njobs:\n  build:\n    runs-on: ubuntu-latest\n")
            .unwrap();

    assert_eq!(workflow.name, Some("CI".to_string()));
    assert!(workflow.jobs.contains_key("build"));
    assert!(workflow.extra.contains_key("on"));
}

#[test]
fn parses_json_workflows() {
    let workflow = parse_workflow_text(
        r#"{ "jobs": { "build": { "timeout-minutes": 5 } } }"#,
    )
    .unwrap();

    assert_eq!(workflow.jobs["build"].timeout_minutes, Some(5));
}

#[test]
fn empty_documents_read_as_an_empty_workflow() {
    assert_eq!(parse_workflow_text("").unwrap(), Workflow::default());
}

#[test]
fn yaml_duplicate_keys_are_reported() {
    let issues = parse_workflow_text("jobs:\n  a: {}\n  a: {}\n").unwrap_err();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].reference.as_deref(), Some("yaml.duplicate_key"));
}

#[test]
fn malformed_json_reports_its_position() {
    let issues = parse_workflow_text("{ \"jobs\": ").unwrap_err();

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].reference.as_deref(),
        Some("workflow.json_parse_error")
    );
    assert_eq!(issues[0].line, Some(1));
}

#[test]
fn rendered_yaml_parses_back() {
    let original = parse_workflow_text(
        "name: CI\njobs:\n  build:\n    runs-on: ubuntu-latest\n  test:\n    needs: build\n",
    )
    .unwrap();

    let rendered = render_workflow_yaml(&original).unwrap();
    let reparsed = parse_workflow_text(&rendered).unwrap();

    assert_eq!(reparsed, original);
    assert_eq!(
        reparsed.jobs.keys().collect::<Vec<_>>(),
        vec!["build", "test"]
    );
}
