use super::job::Job;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GitHub Actions workflow file. Only `jobs` is edited here; every
/// other top-level key (`on`, `env`, triggers, ...) is carried opaquely
/// so a load/edit/save cycle does not drop document content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Insertion order is display order.
    #[serde(default)]
    pub jobs: IndexMap<String, Job>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
