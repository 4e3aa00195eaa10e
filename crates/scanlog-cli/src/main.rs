mod cli;
mod commands;
mod settings_loader;

use clap::Parser;
use cli::{Cli, Commands, JournalCommand, SettingsCommand};

use std::process::exit;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match &cli.command {
        Some(Commands::Record {
            scan_id,
            scan_uri,
            journal,
            locked,
        }) => commands::record::record(
            scan_id,
            scan_uri,
            journal.as_ref(),
            *locked,
            cli.settings.as_ref(),
            cli.quiet,
        )
        .map(|_| false),
        Some(Commands::Journal(cmd)) => match cmd {
            JournalCommand::List {
                format,
                limit,
                journal,
            } => commands::journal::list(*format, *limit, journal.as_ref(), cli.settings.as_ref())
                .map(|_| false),
            JournalCommand::Tail { lines, journal } => {
                commands::journal::tail(*lines, journal.as_ref(), cli.settings.as_ref())
                    .map(|_| false)
            }
        },
        Some(Commands::Settings(cmd)) => match cmd {
            SettingsCommand::Check => commands::settings::check(cli.settings.as_ref()),
            SettingsCommand::Dump { format, effective } => {
                commands::settings::dump(cli.settings.as_ref(), *format, *effective).map(|_| false)
            }
        },
        Some(Commands::Init { force, root_name }) => {
            commands::init::init(*force, root_name.clone(), cli.settings.as_ref()).map(|_| false)
        }
        Some(Commands::Doctor) => commands::doctor::doctor(cli.settings.as_ref()).map(|_| false),
        None => {
            // If no subcommand is provided, print help
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            exit(0);
        }
    };

    match result {
        Ok(problems_found) => {
            if problems_found {
                exit(1);
            } else {
                exit(0);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(2);
        }
    }
}
