use crate::issues::{Issue, IssueSeverity};
use std::collections::BTreeSet;

/// Flags mapping keys that repeat within one YAML block. Serde-based
/// parsing silently keeps the last occurrence, so this runs as a
/// pre-scan over the raw text and reports the line of each repeat.
pub fn detect_yaml_duplicate_keys(input: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut stack = vec![MapContext {
        indent: 0,
        keys: BTreeSet::new(),
    }];

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line_no_comment = strip_inline_comment(line);
        if line_no_comment.trim().is_empty() {
            continue;
        }
        let indent = count_leading_spaces(line_no_comment);
        let trimmed = line_no_comment[indent..].trim_start();
        if trimmed == "---" || trimmed == "..." {
            continue;
        }

        while stack.len() > 1 && indent < stack.last().expect("stack not empty").indent {
            stack.pop();
        }

        if let Some(item) = trimmed.strip_prefix("- ") {
            // Each sequence item opens a fresh mapping two columns in.
            stack.push(MapContext {
                indent: indent + 2,
                keys: BTreeSet::new(),
            });

            if let Some(key) = parse_mapping_key(item.trim_start()) {
                record_key(&mut stack, key, line_number, &mut issues);
            }
            continue;
        }

        let Some(key) = parse_mapping_key(trimmed) else {
            continue;
        };
        if indent > stack.last().expect("stack not empty").indent {
            stack.push(MapContext {
                indent,
                keys: BTreeSet::new(),
            });
        }
        record_key(&mut stack, key, line_number, &mut issues);
    }

    Issue::sort_stable(&mut issues);
    issues
}

#[derive(Debug)]
struct MapContext {
    indent: usize,
    keys: BTreeSet<String>,
}

fn record_key(stack: &mut [MapContext], key: String, line_number: usize, issues: &mut Vec<Issue>) {
    let context = stack.last_mut().expect("stack not empty");
    if !context.keys.insert(key.clone()) {
        issues.push(Issue {
            kind: "parse_error".to_string(),
            severity: IssueSeverity::Error,
            message: format!("duplicate yaml key `{key}`"),
            line: Some(line_number),
            column: None,
            reference: Some("yaml.duplicate_key".to_string()),
        });
    }
}

fn strip_inline_comment(line: &str) -> &str {
    let mut in_single = false;
    let mut in_double = false;
    for (index, character) in line.char_indices() {
        match character {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if !in_single && !in_double => return &line[..index],
            _ => {}
        }
    }
    line
}

fn count_leading_spaces(line: &str) -> usize {
    line.chars().take_while(|character| *character == ' ').count()
}

fn parse_mapping_key(line: &str) -> Option<String> {
    if line.starts_with('?') {
        return None;
    }
    let mut in_single = false;
    let mut in_double = false;
    for (index, character) in line.char_indices() {
        match character {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            ':' if !in_single && !in_double => {
                let key = unquote_key(line[..index].trim());
                if key.is_empty() {
                    return None;
                }
                return Some(key);
            }
            _ => {}
        }
    }
    None
}

fn unquote_key(raw: &str) -> String {
    if raw.len() >= 2 {
        let bytes = raw.as_bytes();
        if (bytes[0] == b'"' && bytes[raw.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[raw.len() - 1] == b'\'')
        {
            return raw[1..raw.len() - 1].to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
#[path = "duplicate_keys_test.rs"]
mod tests;
