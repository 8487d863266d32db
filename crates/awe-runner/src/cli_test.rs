use super::{Cli, Commands, OutputFormat};
use clap::{CommandFactory, Parser};

#[test]
fn cli_help_includes_required_commands() {
    let mut command = Cli::command();
    let help = command.render_long_help().to_string();
    assert!(help.contains("edit"));
    assert!(help.contains("show"));
    assert!(help.contains("sections"));
}

#[test]
fn cli_parses_edit_with_sinks_and_dry_run() {
    let cli = Cli::try_parse_from([
        "awe-runner",
        "edit",
        "--workflow",
        "ci.yaml",
        "--job",
        "build",
        "--commands",
        "-",
        "--changelog",
        "changes.jsonl",
        "--host-jsonl",
        "host.jsonl",
        "--dry-run",
    ])
    .expect("edit must parse");
    match cli.command {
        Commands::Edit(command) => {
            assert_eq!(command.job, "build");
            assert_eq!(command.commands.as_deref(), Some("-"));
            assert_eq!(
                command.changelog.as_deref(),
                Some(std::path::Path::new("changes.jsonl"))
            );
            assert_eq!(
                command.host_jsonl.as_deref(),
                Some(std::path::Path::new("host.jsonl"))
            );
            assert!(command.dry_run);
            assert_eq!(command.format, OutputFormat::Text);
        }
        _ => panic!("expected edit"),
    }
}

#[test]
fn cli_parses_edit_out_and_config_paths() {
    let cli = Cli::try_parse_from([
        "awe-runner",
        "edit",
        "--workflow",
        "ci.yaml",
        "--job",
        "build",
        "--out",
        "ci.edited.yaml",
        "--config",
        "runner.config.yaml",
    ])
    .expect("edit with out path must parse");
    match cli.command {
        Commands::Edit(command) => {
            assert_eq!(
                command.out.as_deref(),
                Some(std::path::Path::new("ci.edited.yaml"))
            );
            assert_eq!(
                command.config.as_deref(),
                Some(std::path::Path::new("runner.config.yaml"))
            );
            assert!(!command.dry_run);
        }
        _ => panic!("expected edit"),
    }
}

#[test]
fn cli_parses_show_with_section_and_json_format() {
    let cli = Cli::try_parse_from([
        "awe-runner",
        "show",
        "--workflow",
        "ci.yaml",
        "--job",
        "deploy",
        "--section",
        "permissions",
        "--format",
        "json",
    ])
    .expect("show must parse");
    match cli.command {
        Commands::Show(command) => {
            assert_eq!(command.job, "deploy");
            assert_eq!(command.section.as_deref(), Some("permissions"));
            assert_eq!(command.format, OutputFormat::Json);
        }
        _ => panic!("expected show"),
    }
}

#[test]
fn cli_parses_sections() {
    let cli = Cli::try_parse_from(["awe-runner", "sections"]).expect("sections must parse");
    match cli.command {
        Commands::Sections(command) => {
            assert_eq!(command.format, OutputFormat::Text);
        }
        _ => panic!("expected sections"),
    }
}
