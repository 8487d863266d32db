use super::*;
use crate::documents::{AccessLevel, PermissionScope};
use serde_json::json;

fn job_with_steps() -> Job {
    let mut job = Job::default();
    job.name = Some("Build".to_string());
    job.timeout_minutes = Some(10);
    job.steps = Some(json!([{ "run": "cargo build" }]));
    job
}

#[test]
fn field_updates_replace_exactly_one_setting() {
    let job = job_with_steps();
    let updated = apply_job_field(&job, JobField::TimeoutMinutes(Some(30)));

    assert_eq!(updated.timeout_minutes, Some(30));
    assert_eq!(updated.name, Some("Build".to_string()));
    assert_eq!(updated.steps, job.steps);
    assert_eq!(job.timeout_minutes, Some(10));
}

#[test]
fn none_payload_removes_the_setting() {
    let job = job_with_steps();
    let updated = apply_job_field(&job, JobField::Name(None));

    assert_eq!(updated.name, None);
    assert_eq!(updated.timeout_minutes, Some(10));
}

#[test]
fn field_wire_form_carries_key_and_value() {
    let field = JobField::TimeoutMinutes(Some(30));
    let encoded = serde_json::to_value(&field).unwrap();

    assert_eq!(encoded, json!({ "key": "timeout-minutes", "value": 30 }));

    let decoded: JobField = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, field);
}

#[test]
fn kebab_case_keys_match_job_yaml() {
    let field: JobField =
        serde_json::from_value(json!({ "key": "runs-on", "value": "ubuntu-latest" })).unwrap();

    assert_eq!(
        field,
        JobField::RunsOn(Some(StringOrList::One("ubuntu-latest".to_string())))
    );
    assert_eq!(field.kind().as_str(), "runs-on");
}

#[test]
fn permission_field_round_trips() {
    let set = PermissionSet::new()
        .set_permission(PermissionScope::Contents, AccessLevel::Read);
    let field = JobField::Permissions(Some(set.clone()));

    let encoded = serde_json::to_value(&field).unwrap();
    assert_eq!(
        encoded,
        json!({ "key": "permissions", "value": { "contents": "read" } })
    );

    let decoded: JobField = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, JobField::Permissions(Some(set)));
}

#[test]
fn every_field_kind_belongs_to_a_section() {
    for kind in JobFieldKind::ALL {
        let section = kind.section();
        assert!(
            section.field_kinds().any(|k| k == kind),
            "{} missing from section {}",
            kind.as_str(),
            section.as_str()
        );
    }
}

#[test]
fn basic_section_groups_the_header_fields() {
    let kinds: Vec<&str> = SettingsSection::Basic
        .field_kinds()
        .map(JobFieldKind::as_str)
        .collect();

    assert_eq!(
        kinds,
        vec![
            "name",
            "if",
            "timeout-minutes",
            "needs",
            "runs-on",
            "uses",
            "continue-on-error"
        ]
    );
}

#[test]
fn sections_parse_from_their_names() {
    for section in SettingsSection::ALL {
        assert_eq!(section.as_str().parse::<SettingsSection>(), Ok(section));
    }

    let err = "strategy".parse::<SettingsSection>().unwrap_err();
    assert_eq!(err, UnknownSectionError("strategy".to_string()));
}
