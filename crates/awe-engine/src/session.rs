use crate::confirm::ConfirmPrompt;
use crate::host::{HostChannel, HostMessage};
use crate::store::WorkflowStore;
use awe_core::{
    apply_job_field, parse_job_text, render_job_text, AccessLevel, Issue, Job, JobField,
    PermissionScope, RenderTextError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which editing surface of a session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum EditSurface {
    #[default]
    Form,
    Text,
}

/// How a delete request resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Removal was handed to the host; local state is untouched.
    DelegatedToHost,
    Removed,
    Cancelled,
}

/// An editing session over one job: a draft copied out of the store at
/// open time, mutated locally, and written back only on commit. The
/// store never observes the draft in between.
#[derive(Debug, Clone)]
pub struct JobEditSession {
    job_id: String,
    draft: Job,
    opened_steps: Option<Value>,
    surface: EditSurface,
}

impl JobEditSession {
    /// Opens a session for `job_id`. Returns `None` when the store has
    /// no workflow or no such job; callers render nothing in that case.
    pub fn open(store: &WorkflowStore, job_id: &str) -> Option<Self> {
        let job = store.workflow()?.jobs.get(job_id)?.clone();
        let opened_steps = job.steps.clone();
        Some(Self {
            job_id: job_id.to_string(),
            draft: job,
            opened_steps,
            surface: EditSurface::Form,
        })
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn draft(&self) -> &Job {
        &self.draft
    }

    pub fn surface(&self) -> EditSurface {
        self.surface
    }

    /// The name shown in status messages: the draft's name, or the job
    /// id while no name is set.
    pub fn display_name(&self) -> &str {
        self.draft.name.as_deref().unwrap_or(&self.job_id)
    }

    /// Replaces exactly one draft field. The store is not touched.
    pub fn update_field(&mut self, field: JobField) {
        self.draft = apply_job_field(&self.draft, field);
    }

    /// Sets one permission scope on the draft, creating the permission
    /// set when the draft has none.
    pub fn set_permission(&mut self, scope: PermissionScope, level: AccessLevel) {
        let permissions = self.draft.permissions.clone().unwrap_or_default();
        self.draft.permissions = Some(permissions.set_permission(scope, level));
    }

    /// Resets one scope to unset. A scope that was never set stays
    /// unset; the permission set itself is kept even when it empties.
    pub fn clear_permission(&mut self, scope: PermissionScope) {
        if let Some(permissions) = &self.draft.permissions {
            self.draft.permissions = Some(permissions.clear(scope));
        }
    }

    /// Flips between the form and text surfaces and returns the newly
    /// active one.
    pub fn toggle_surface(&mut self) -> EditSurface {
        self.surface = match self.surface {
            EditSurface::Form => EditSurface::Text,
            EditSurface::Text => EditSurface::Form,
        };
        self.surface
    }

    /// Renders the draft for the text surface, without its steps.
    pub fn render_text(&self) -> Result<String, RenderTextError> {
        render_job_text(&self.draft)
    }

    /// Replaces the whole draft with the parsed text: fields absent
    /// from the text are removed, not kept. The steps the session was
    /// opened with are reattached afterwards. On parse issues the
    /// draft stays as it was.
    pub fn apply_text_edit(&mut self, text: &str) -> Result<(), Vec<Issue>> {
        let mut parsed = parse_job_text(text)?;
        parsed.steps = self.opened_steps.clone();
        self.draft = parsed;
        Ok(())
    }

    /// Writes the draft back: the stored workflow is replaced by a copy
    /// whose entry for this job id is the draft, and a change entry is
    /// appended. No field validation happens here. Returns `false`
    /// without touching anything when the store has no workflow.
    pub fn commit(&self, store: &mut WorkflowStore) -> bool {
        let Some(current) = store.workflow() else {
            return false;
        };
        let mut next = current.clone();
        next.jobs.insert(self.job_id.clone(), self.draft.clone());
        let message = format!("{} successfully updated", self.display_name());
        store.replace_workflow(next);
        store.append_change(message);
        true
    }

    /// Deletes this session's job. With a host channel present the
    /// request is posted there and nothing happens locally. Otherwise
    /// the prompt decides: on yes the job is removed from the workflow
    /// and a change entry is appended, on no nothing changes.
    pub fn request_delete(
        &self,
        store: &mut WorkflowStore,
        host: Option<&dyn HostChannel>,
        prompt: &dyn ConfirmPrompt,
    ) -> DeleteOutcome {
        if let Some(host) = host {
            host.post(&HostMessage::DeleteJob {
                id: self.job_id.clone(),
            });
            return DeleteOutcome::DelegatedToHost;
        }

        let question = format!(
            "Are you sure you want to remove the {} job?",
            self.display_name()
        );
        if !prompt.confirm(&question) {
            return DeleteOutcome::Cancelled;
        }

        let Some(current) = store.workflow() else {
            return DeleteOutcome::Cancelled;
        };
        let mut next = current.clone();
        next.jobs.shift_remove(&self.job_id);
        let message = format!("{} successfully removed", self.display_name());
        store.replace_workflow(next);
        store.append_change(message);
        DeleteOutcome::Removed
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
