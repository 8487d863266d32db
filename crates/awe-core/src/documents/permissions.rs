use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The fixed set of GITHUB_TOKEN permission scopes a job can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionScope {
    Actions,
    Attestations,
    Checks,
    Contents,
    Deployments,
    Discussions,
    IdToken,
    Issues,
    Packages,
    Pages,
    PullRequests,
    RepositoryProjects,
    SecurityEvents,
    Statuses,
}

impl PermissionScope {
    /// Declaration order doubles as display order.
    pub const ALL: [PermissionScope; 14] = [
        PermissionScope::Actions,
        PermissionScope::Attestations,
        PermissionScope::Checks,
        PermissionScope::Contents,
        PermissionScope::Deployments,
        PermissionScope::Discussions,
        PermissionScope::IdToken,
        PermissionScope::Issues,
        PermissionScope::Packages,
        PermissionScope::Pages,
        PermissionScope::PullRequests,
        PermissionScope::RepositoryProjects,
        PermissionScope::SecurityEvents,
        PermissionScope::Statuses,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionScope::Actions => "actions",
            PermissionScope::Attestations => "attestations",
            PermissionScope::Checks => "checks",
            PermissionScope::Contents => "contents",
            PermissionScope::Deployments => "deployments",
            PermissionScope::Discussions => "discussions",
            PermissionScope::IdToken => "id-token",
            PermissionScope::Issues => "issues",
            PermissionScope::Packages => "packages",
            PermissionScope::Pages => "pages",
            PermissionScope::PullRequests => "pull-requests",
            PermissionScope::RepositoryProjects => "repository-projects",
            PermissionScope::SecurityEvents => "security-events",
            PermissionScope::Statuses => "statuses",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    None,
    Read,
    Write,
}

impl AccessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessLevel::None => "none",
            AccessLevel::Read => "read",
            AccessLevel::Write => "write",
        }
    }
}

/// Per-scope access levels. A scope absent from the set is unset, which
/// is distinct from an explicit `none`. Every mutation returns a new
/// set; the receiver is never changed in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    levels: IndexMap<PermissionScope, AccessLevel>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scope: PermissionScope) -> Option<AccessLevel> {
        self.levels.get(&scope).copied()
    }

    /// Returns a copy of `self` with `scope` set to `level`. A prior
    /// level for the scope is fully replaced; other scopes are
    /// untouched.
    pub fn set_permission(&self, scope: PermissionScope, level: AccessLevel) -> Self {
        let mut levels = self.levels.clone();
        levels.insert(scope, level);
        Self { levels }
    }

    /// Returns a copy of `self` with `scope` unset again.
    pub fn clear(&self, scope: PermissionScope) -> Self {
        let mut levels = self.levels.clone();
        levels.shift_remove(&scope);
        Self { levels }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Set scopes in fixed declaration order, regardless of the order
    /// they were set or parsed in.
    pub fn iter(&self) -> impl Iterator<Item = (PermissionScope, AccessLevel)> + '_ {
        PermissionScope::ALL
            .iter()
            .filter_map(|scope| self.levels.get(scope).map(|level| (*scope, *level)))
    }
}

#[cfg(test)]
#[path = "permissions_test.rs"]
mod tests;
