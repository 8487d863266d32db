use super::detect_yaml_duplicate_keys;

#[test]
fn duplicate_key_is_detected_with_its_line() {
    let input = r#"
runs-on: ubuntu-latest
timeout-minutes: 10
timeout-minutes: 20
"#;
    let issues = detect_yaml_duplicate_keys(input);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "duplicate yaml key `timeout-minutes`");
    assert_eq!(issues[0].line, Some(4));
    assert_eq!(issues[0].reference.as_deref(), Some("yaml.duplicate_key"));
}

#[test]
fn same_key_under_different_parents_is_not_duplicate() {
    let input = r#"
env:
  RUST_LOG: debug
with:
  RUST_LOG: info
"#;
    let issues = detect_yaml_duplicate_keys(input);
    assert!(issues.is_empty());
}

#[test]
fn unique_keys_produce_no_issues() {
    let input = r#"
runs-on: ubuntu-latest
env:
  CI: "true"
  RUSTFLAGS: -Dwarnings
"#;
    let issues = detect_yaml_duplicate_keys(input);
    assert!(issues.is_empty());
}

#[test]
fn same_key_across_sequence_items_is_not_duplicate() {
    let input = r#"
steps:
  - name: checkout
    uses: actions/checkout@v4
  - name: build
    run: cargo build
"#;
    let issues = detect_yaml_duplicate_keys(input);
    assert!(issues.is_empty());
}

#[test]
fn duplicate_key_inside_one_sequence_item_is_detected() {
    let input = r#"
steps:
  - name: checkout
    name: fetch
"#;
    let issues = detect_yaml_duplicate_keys(input);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line, Some(4));
}

#[test]
fn commented_repeats_are_ignored() {
    let input = r#"
runs-on: ubuntu-latest
# runs-on: macos-latest
"#;
    let issues = detect_yaml_duplicate_keys(input);
    assert!(issues.is_empty());
}
