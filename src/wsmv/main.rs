use clap::Parser;
use colored::*;
use wsmv::api::WsmvApi;
use wsmv::commands::{CmdMessage, CmdResult, MessageLevel};
use wsmv::config::{default_storage_root, MigrationConfig};
use wsmv::error::{Result, WsmvError};
use wsmv::trash::SystemTrash;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = resolve_root(&cli)?;
    let api = WsmvApi::new(root, SystemTrash);

    let result = match cli.command {
        Commands::List { find } => {
            let result = api.list(find.as_deref())?;
            print_bundles(&result);
            result
        }
        Commands::Migrate {
            find,
            replace,
            dry_run,
        } => {
            let config = MigrationConfig::new(find, replace).with_dry_run(dry_run);
            api.migrate(&config)?
        }
        Commands::Repair { dry_run } => api.repair(dry_run)?,
    };

    print_messages(&result.messages);
    if result.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    if let Some(root) = &cli.root {
        return Ok(root.clone());
    }
    default_storage_root(&cli.product).ok_or_else(|| {
        WsmvError::Storage(
            "could not determine the storage root; pass --root explicitly".to_string(),
        )
    })
}

fn print_bundles(result: &CmdResult) {
    for bundle in &result.listed {
        println!("{}  {}", bundle.id.to_string().dimmed(), bundle.location);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
