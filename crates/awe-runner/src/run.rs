use crate::cli::{EditCommand, OutputFormat, SectionsCommand, ShowCommand};
use crate::commands::{
    parse_edit_command_jsonl_line, EditCommandEnvelope, EditRequest, EDIT_COMMAND_SCHEMA_0_0_1,
};
use crate::config::{load_runner_config, ConfirmMode, RunnerConfig};
use crate::io::{parse_workflow_text, render_workflow_yaml};
use awe_core::{section_anchor, Issue, JobFieldKind, SettingsSection};
use awe_engine::{
    encode_changelog_jsonl_line, encode_host_jsonl_line, redact_changelog_entry, AlwaysConfirm,
    ConfirmPrompt, DeleteOutcome, HostChannel, HostMessage, JobEditSession, NeverConfirm,
    RecordingHostChannel, RedactMode, WorkflowStore,
};
use serde_json::json;
use std::fs;
use std::io::{BufRead, BufReader, Write};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("read file failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("write file failed `{path}`: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("workflow parse failed: {0:?}")]
    WorkflowParse(Vec<Issue>),
    #[error("job `{id}` not found in workflow")]
    JobNotFound { id: String },
    #[error("unknown settings section `{0}`")]
    UnknownSection(String),
    #[error("section `{section}` is not present in job `{job}`")]
    SectionNotPresent { section: String, job: String },
    #[error("edit commands decode failed at line {line}: {reason}")]
    CommandDecode { line: usize, reason: String },
    #[error("read edit commands failed: {0}")]
    CommandsIo(String),
    #[error("text edit failed: {0:?}")]
    TextEdit(Vec<Issue>),
    #[error("render job text failed: {0}")]
    RenderText(String),
    #[error("render workflow failed: {0}")]
    RenderWorkflow(String),
    #[error("write changelog JSONL failed: {0}")]
    ChangelogIo(String),
    #[error("write host JSONL failed: {0}")]
    HostIo(String),
    #[error("runner config load failed: {0}")]
    ConfigLoad(String),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

pub fn execute_edit(command: &EditCommand) -> Result<String, RunnerError> {
    let workflow_text =
        fs::read_to_string(&command.workflow).map_err(|source| RunnerError::ReadFile {
            path: command.workflow.display().to_string(),
            source,
        })?;
    let workflow = parse_workflow_text(workflow_text.as_str()).map_err(RunnerError::WorkflowParse)?;

    let mut store = WorkflowStore::with_workflow(workflow);
    let mut session =
        JobEditSession::open(&store, command.job.as_str()).ok_or_else(|| RunnerError::JobNotFound {
            id: command.job.clone(),
        })?;

    let config = match &command.config {
        Some(path) => load_runner_config(path.as_path())
            .map_err(|error| RunnerError::ConfigLoad(error.to_string()))?,
        None => RunnerConfig::default(),
    };
    let prompt: Box<dyn ConfirmPrompt> = match config.confirm {
        ConfirmMode::AssumeNo => Box::new(NeverConfirm),
        ConfirmMode::AssumeYes => Box::new(AlwaysConfirm),
        ConfirmMode::Prompt => Box::new(StdinConfirmPrompt),
    };

    let requests = read_edit_commands(command)?;
    let host_channel = command
        .host_jsonl
        .as_ref()
        .map(|_| RecordingHostChannel::new());
    let host_ref: Option<&dyn HostChannel> = host_channel
        .as_ref()
        .map(|channel| channel as &dyn HostChannel);

    let mut applied = 0usize;
    let mut deleted = false;
    for envelope in &requests {
        applied += 1;
        match &envelope.command {
            EditRequest::SetField(field) => session.update_field(field.clone()),
            EditRequest::SetPermission { scope, level } => session.set_permission(*scope, *level),
            EditRequest::ClearPermission { scope } => session.clear_permission(*scope),
            EditRequest::ApplyText { text } => session
                .apply_text_edit(text.as_str())
                .map_err(RunnerError::TextEdit)?,
            EditRequest::Save => {
                session.commit(&mut store);
            }
            EditRequest::Delete => {
                match session.request_delete(&mut store, host_ref, prompt.as_ref()) {
                    DeleteOutcome::Removed => {
                        deleted = true;
                        break;
                    }
                    DeleteOutcome::DelegatedToHost | DeleteOutcome::Cancelled => {}
                }
            }
        }
    }

    let host_messages = host_channel
        .as_ref()
        .map(|channel| channel.take_messages())
        .unwrap_or_default();

    let mut written_to: Option<String> = None;
    if !store.changes().is_empty() && !command.dry_run {
        if let Some(workflow) = store.workflow() {
            let rendered = render_workflow_yaml(workflow)
                .map_err(|error| RunnerError::RenderWorkflow(error.to_string()))?;
            let target = command.out.as_ref().unwrap_or(&command.workflow);
            fs::write(target, rendered).map_err(|source| RunnerError::WriteFile {
                path: target.display().to_string(),
                source,
            })?;
            written_to = Some(target.display().to_string());
        }
    }

    write_changelog_sink(command, &store, config.redact)?;
    write_host_sink(command, &host_messages)?;

    render_edit_output(
        command,
        &session,
        &store,
        applied,
        deleted,
        host_messages.len(),
        written_to.as_deref(),
    )
}

pub fn execute_show(command: &ShowCommand) -> Result<String, RunnerError> {
    let workflow_text =
        fs::read_to_string(&command.workflow).map_err(|source| RunnerError::ReadFile {
            path: command.workflow.display().to_string(),
            source,
        })?;
    let workflow = parse_workflow_text(workflow_text.as_str()).map_err(RunnerError::WorkflowParse)?;

    let store = WorkflowStore::with_workflow(workflow);
    let session =
        JobEditSession::open(&store, command.job.as_str()).ok_or_else(|| RunnerError::JobNotFound {
            id: command.job.clone(),
        })?;
    let rendered = session
        .render_text()
        .map_err(|error| RunnerError::RenderText(error.to_string()))?;

    let section = match &command.section {
        Some(name) => {
            let section = name
                .parse::<SettingsSection>()
                .map_err(|_| RunnerError::UnknownSection(name.clone()))?;
            let line = section_anchor(rendered.as_str(), section).ok_or_else(|| {
                RunnerError::SectionNotPresent {
                    section: section.as_str().to_string(),
                    job: command.job.clone(),
                }
            })?;
            Some((section, line))
        }
        None => None,
    };

    let output = match command.format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "schema": "awe-runner-show/0.0.1",
            "job": command.job,
            "display_name": session.display_name(),
            "needs_candidates": store.candidate_needs(command.job.as_str()),
            "section": section.map(|(section, _)| section.as_str()),
            "section_line": section.map(|(_, line)| line),
            "text": rendered,
        }))?,
        OutputFormat::Text => match section {
            // A comment line keeps the output valid job YAML.
            Some((section, line)) => format!("# {} -> line {line}\n{rendered}", section.as_str()),
            None => rendered,
        },
    };
    Ok(output)
}

pub fn execute_sections(command: &SectionsCommand) -> Result<String, RunnerError> {
    let output = match command.format {
        OutputFormat::Json => {
            let sections = SettingsSection::ALL
                .iter()
                .map(|section| {
                    json!({
                        "section": section.as_str(),
                        "fields": section
                            .field_kinds()
                            .map(JobFieldKind::as_str)
                            .collect::<Vec<_>>(),
                    })
                })
                .collect::<Vec<_>>();
            serde_json::to_string_pretty(&json!({
                "schema": "awe-runner-sections/0.0.1",
                "sections": sections,
            }))?
        }
        OutputFormat::Text => SettingsSection::ALL
            .iter()
            .map(|section| {
                format!(
                    "{}: {}",
                    section.as_str(),
                    section
                        .field_kinds()
                        .map(JobFieldKind::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(output)
}

struct StdinConfirmPrompt;

impl ConfirmPrompt for StdinConfirmPrompt {
    fn confirm(&self, message: &str) -> bool {
        eprint!("{message} [y/N] ");
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn read_edit_commands(command: &EditCommand) -> Result<Vec<EditCommandEnvelope>, RunnerError> {
    let Some(target) = &command.commands else {
        return Ok(Vec::new());
    };
    if target == "-" {
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());
        read_edit_command_jsonl(reader)
    } else {
        let file = fs::File::open(target).map_err(|source| RunnerError::ReadFile {
            path: target.clone(),
            source,
        })?;
        read_edit_command_jsonl(BufReader::new(file))
    }
}

fn read_edit_command_jsonl(reader: impl BufRead) -> Result<Vec<EditCommandEnvelope>, RunnerError> {
    let mut requests = Vec::<EditCommandEnvelope>::new();
    for (line_index, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|error| RunnerError::CommandsIo(error.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let envelope =
            parse_edit_command_jsonl_line(line.as_str()).map_err(|error| {
                RunnerError::CommandDecode {
                    line: line_index + 1,
                    reason: error.to_string(),
                }
            })?;
        if envelope.schema != EDIT_COMMAND_SCHEMA_0_0_1 {
            return Err(RunnerError::CommandDecode {
                line: line_index + 1,
                reason: format!(
                    "unsupported edit command schema `{}` (expected `{}`)",
                    envelope.schema, EDIT_COMMAND_SCHEMA_0_0_1
                ),
            });
        }
        requests.push(envelope);
    }
    Ok(requests)
}

fn write_changelog_sink(
    command: &EditCommand,
    store: &WorkflowStore,
    redact: RedactMode,
) -> Result<(), RunnerError> {
    let Some(path) = &command.changelog else {
        return Ok(());
    };
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| RunnerError::ChangelogIo(error.to_string()))?;
    for entry in store.changes() {
        let line = encode_changelog_jsonl_line(&redact_changelog_entry(entry, redact))
            .map_err(|error| RunnerError::ChangelogIo(error.to_string()))?;
        file.write_all(line.as_bytes())
            .map_err(|error| RunnerError::ChangelogIo(error.to_string()))?;
    }
    Ok(())
}

fn write_host_sink(command: &EditCommand, messages: &[HostMessage]) -> Result<(), RunnerError> {
    let Some(path) = &command.host_jsonl else {
        return Ok(());
    };
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| RunnerError::HostIo(error.to_string()))?;
    for message in messages {
        let line = encode_host_jsonl_line(message)
            .map_err(|error| RunnerError::HostIo(error.to_string()))?;
        file.write_all(line.as_bytes())
            .map_err(|error| RunnerError::HostIo(error.to_string()))?;
    }
    Ok(())
}

fn render_edit_output(
    command: &EditCommand,
    session: &JobEditSession,
    store: &WorkflowStore,
    applied: usize,
    deleted: bool,
    host_messages: usize,
    written_to: Option<&str>,
) -> Result<String, RunnerError> {
    let messages = store
        .changes()
        .iter()
        .map(|entry| entry.message.clone())
        .collect::<Vec<_>>();
    let output = match command.format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "schema": "awe-runner-edit/0.0.1",
            "job": session.job_id(),
            "ops_applied": applied,
            "changes": store.changes().len(),
            "messages": messages,
            "deleted": deleted,
            "host_messages": host_messages,
            "dry_run": command.dry_run,
            "wrote": written_to,
        }))?,
        OutputFormat::Text => format!(
            "AWE edit\njob: {}\nops_applied: {}\nchanges: {}\nmessages: {}\ndeleted: {}\nhost_messages: {}\ndry_run: {}\nwrote: {}",
            session.job_id(),
            applied,
            store.changes().len(),
            if messages.is_empty() {
                "none".to_string()
            } else {
                messages.join(",")
            },
            deleted,
            host_messages,
            command.dry_run,
            written_to.unwrap_or("none"),
        ),
    };
    Ok(output)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
