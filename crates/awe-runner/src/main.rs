use awe_runner::{execute_edit, execute_sections, execute_show, Cli, Commands};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Edit(command) => execute_edit(&command),
        Commands::Show(command) => execute_show(&command),
        Commands::Sections(command) => execute_sections(&command),
    };

    match result {
        Ok(output) => {
            println!("{output}");
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
