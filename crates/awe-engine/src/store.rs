use crate::changelog::ChangeLogEntry;
use awe_core::Workflow;

/// Shared document state: the authoritative workflow plus the log of
/// commits made against it. Consumers only ever observe whole-value
/// replacements, never partial mutation.
#[derive(Debug, Clone, Default)]
pub struct WorkflowStore {
    workflow: Option<Workflow>,
    changes: Vec<ChangeLogEntry>,
}

impl WorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workflow(workflow: Workflow) -> Self {
        Self {
            workflow: Some(workflow),
            changes: Vec::new(),
        }
    }

    pub fn workflow(&self) -> Option<&Workflow> {
        self.workflow.as_ref()
    }

    pub fn replace_workflow(&mut self, workflow: Workflow) {
        self.workflow = Some(workflow);
    }

    /// Appends a change entry recording the workflow as it currently
    /// stands. Without a loaded workflow nothing is recorded.
    pub fn append_change(&mut self, message: impl Into<String>) {
        let Some(workflow) = &self.workflow else {
            return;
        };
        let seq = self.changes.len() as u64 + 1;
        self.changes
            .push(ChangeLogEntry::new(seq, message, workflow.clone()));
    }

    pub fn changes(&self) -> &[ChangeLogEntry] {
        &self.changes
    }

    /// Job ids `job_id` may declare as dependencies: every other job,
    /// in document order.
    pub fn candidate_needs(&self, job_id: &str) -> Vec<String> {
        let Some(workflow) = &self.workflow else {
            return Vec::new();
        };
        workflow
            .jobs
            .keys()
            .filter(|id| id.as_str() != job_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
