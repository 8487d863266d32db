use super::{Issue, IssueSeverity};

#[test]
fn issues_are_sorted_stably() {
    let mut issues = vec![
        Issue {
            kind: "parse_error".to_string(),
            severity: IssueSeverity::Warning,
            message: "second".to_string(),
            line: Some(1),
            column: None,
            reference: None,
        },
        Issue {
            kind: "parse_error".to_string(),
            severity: IssueSeverity::Error,
            message: "first".to_string(),
            line: Some(9),
            column: Some(2),
            reference: None,
        },
    ];

    Issue::sort_stable(&mut issues);

    assert_eq!(issues[0].severity, IssueSeverity::Error);
    assert_eq!(issues[1].severity, IssueSeverity::Warning);
}

#[test]
fn same_severity_sorts_by_line() {
    let mut issues = vec![
        Issue {
            kind: "parse_error".to_string(),
            severity: IssueSeverity::Error,
            message: "later".to_string(),
            line: Some(7),
            column: None,
            reference: None,
        },
        Issue {
            kind: "parse_error".to_string(),
            severity: IssueSeverity::Error,
            message: "earlier".to_string(),
            line: Some(2),
            column: None,
            reference: None,
        },
    ];

    Issue::sort_stable(&mut issues);

    assert_eq!(issues[0].message, "earlier");
    assert_eq!(issues[1].message, "later");
}
