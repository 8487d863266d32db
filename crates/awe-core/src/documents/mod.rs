mod job;
mod permissions;
mod workflow;

pub use job::{Concurrency, Defaults, Environment, Job, RunDefaults, StringOrList};
pub use permissions::{AccessLevel, PermissionScope, PermissionSet};
pub use workflow::Workflow;
