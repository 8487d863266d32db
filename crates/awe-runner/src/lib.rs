mod cli;
mod commands;
mod config;
mod io;
mod run;

pub use cli::{Cli, Commands, EditCommand, OutputFormat, SectionsCommand, ShowCommand};
pub use commands::{
    encode_edit_command_jsonl_line, parse_edit_command_jsonl_line, EditCommandEnvelope,
    EditRequest, EDIT_COMMAND_SCHEMA_0_0_1,
};
pub use config::{
    load_runner_config, validate_runner_config, ConfirmMode, RunnerConfig, RunnerConfigError,
};
pub use io::{looks_like_json, parse_workflow_text, render_workflow_yaml};
pub use run::{execute_edit, execute_sections, execute_show, RunnerError};
