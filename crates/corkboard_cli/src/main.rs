//! Command-line driver for a SQLite-backed board.

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use corkboard_core::db::open_db;
use corkboard_core::{default_log_level, init_logging, BoardStore, SqliteSlot};
use log::{error, info, warn};
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("corkboard_core ping={}", corkboard_core::ping());
        println!("corkboard_core version={}", corkboard_core::core_version());
        return ExitCode::SUCCESS;
    };

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        // Logger is not up when this fails, so report on stderr.
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let Some(db_path) = cli.db else {
        eprintln!("error: `{}` needs --db <PATH>", command.name());
        return ExitCode::FAILURE;
    };

    info!(
        "event=cli_command module=cli status=start command={}",
        command.name()
    );
    match run(&db_path, &command) {
        Ok(()) => {
            info!(
                "event=cli_command module=cli status=ok command={}",
                command.name()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(
                "event=cli_command module=cli status=error command={} error={}",
                command.name(),
                err
            );
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: &Path, command: &Command) -> Result<(), Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let mut store = BoardStore::open(SqliteSlot::new(&conn));

    match command {
        Command::Summary => {
            println!("items={}", store.items().len());
            println!("connections={}", store.connections().len());
            println!("categories={}", store.categories().len());
            println!("background={}", store.background().kind.as_str());
            println!("z_counter={}", store.z_counter());
        }
        Command::Export => println!("{}", store.export_json()?),
        Command::Import { file } => {
            let json = std::fs::read_to_string(file)?;
            store.import_json(&json)?;
            println!("imported items={}", store.items().len());
        }
        Command::Add { x: Some(x), y: Some(y) } => println!("{}", store.add_item_at(*x, *y)),
        Command::Add { .. } => println!("{}", store.add_item()),
        Command::Link { from, to } => {
            store.start_connect(from);
            match store.finish_connect(to) {
                Some(id) => println!("{id}"),
                None => println!("no connection created"),
            }
        }
        Command::Links { id } => {
            if store.item(id).is_none() {
                return Err(format!("no card with id `{id}`").into());
            }
            for neighbor in store.neighbors(id) {
                println!("{neighbor}");
            }
        }
    }

    if let Some(err) = store.last_save_error() {
        warn!("event=cli_save module=cli status=error error={err}");
        return Err(format!("board not saved: {err}").into());
    }
    Ok(())
}
