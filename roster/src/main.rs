//! User record browser CLI.
//!
//! Reads a JSON record file (`records.json` by default, see `roster.toml`),
//! prints stats and filtered pages, and gates status changes and deletions
//! behind an explicit `--yes` confirmation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use roster::core::filter::{FilterCriteria, RoleSelector, StatusSelector};
use roster::core::types::{Role, Status, UserId};
use roster::delete::{DeleteOutcome, delete_user};
use roster::exit_codes;
use roster::io::config::{BrowserConfig, DEFAULT_CONFIG_PATH, load_config};
use roster::io::record_store::RecordStore;
use roster::list::{ListRequest, list_from_file, stats_from_file};
use roster::logging;
use roster::status::{StatusOutcome, change_status};

#[derive(Parser)]
#[command(name = "roster", version, about = "Browse and manage user records")]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Record file (JSON). Overrides `records_path` from the config.
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print aggregate counts as JSON (totals exclude terminated users).
    Stats,
    /// Print one page of users matching the filters.
    List {
        /// Case-insensitive substring of name or email.
        #[arg(short, long, default_value = "")]
        search: String,
        /// Only this role (Employee, Agent, HR).
        #[arg(short, long)]
        role: Option<Role>,
        /// Only this status. Without it, terminated users are hidden.
        #[arg(long)]
        status: Option<Status>,
        /// 1-indexed page; out-of-range pages show page 1.
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Records per page. Overrides `page_size` from the config.
        #[arg(long)]
        page_size: Option<usize>,
        /// Print JSON instead of a text table.
        #[arg(long)]
        json: bool,
    },
    /// Change a user's status (Active, Inactive, Terminated).
    SetStatus {
        id: UserId,
        status: Status,
        /// Confirm the change. Without it the prompt is shown and nothing happens.
        #[arg(short, long)]
        yes: bool,
    },
    /// Delete a user.
    Delete {
        id: UserId,
        /// Confirm the deletion.
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version print to stdout and exit 0.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return Ok(exit_codes::INVALID);
        }
    };
    let mut config = load_config(&cli.config)?;
    if let Some(records) = cli.records {
        config.records_path = records;
    }
    debug!(records = %config.records_path.display(), "resolved record file");

    match cli.command {
        Command::Stats => cmd_stats(&config),
        Command::List {
            search,
            role,
            status,
            page,
            page_size,
            json,
        } => {
            if let Some(size) = page_size {
                config.page_size = size;
            }
            let criteria = FilterCriteria {
                search,
                role: role.map_or(RoleSelector::Any, RoleSelector::Only),
                status: status.map_or(StatusSelector::DefaultView, StatusSelector::Only),
            };
            cmd_list(&config, criteria, page, json)
        }
        Command::SetStatus { id, status, yes } => cmd_set_status(&config, id, status, yes),
        Command::Delete { id, yes } => cmd_delete(&config, id, yes),
    }
}

fn cmd_stats(config: &BrowserConfig) -> Result<i32> {
    let stats = stats_from_file(&config.records_path)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).context("serialize stats")?
    );
    Ok(exit_codes::OK)
}

fn cmd_list(
    config: &BrowserConfig,
    criteria: FilterCriteria,
    page: usize,
    json: bool,
) -> Result<i32> {
    let request = ListRequest {
        criteria,
        page,
        page_size: config.page_size()?,
        page_window: config.page_window,
    };
    let outcome = list_from_file(&config.records_path, &request)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("serialize listing")?
        );
    } else {
        print!("{}", outcome.render_text());
    }
    Ok(exit_codes::OK)
}

fn cmd_set_status(config: &BrowserConfig, id: UserId, status: Status, yes: bool) -> Result<i32> {
    let mut store = RecordStore::new(&config.records_path);
    let records = store.load()?;
    let outcome = change_status(&records, &mut store, id, status, |prompt| {
        println!("{}", prompt);
        yes
    })?;
    match outcome {
        StatusOutcome::Applied(request) => {
            println!("Status of user {} changed to {}", request.id, request.status);
            Ok(exit_codes::OK)
        }
        StatusOutcome::Declined(_) => {
            println!("Not confirmed; re-run with --yes to apply");
            Ok(exit_codes::DECLINED)
        }
        StatusOutcome::Rejected(rejection) => {
            eprintln!("{}", rejection);
            Ok(exit_codes::TERMINAL)
        }
    }
}

fn cmd_delete(config: &BrowserConfig, id: UserId, yes: bool) -> Result<i32> {
    let mut store = RecordStore::new(&config.records_path);
    let records = store.load()?;
    let outcome = delete_user(&records, &mut store, id, |prompt| {
        println!("{}", prompt);
        yes
    })?;
    match outcome {
        DeleteOutcome::Deleted(id) => {
            println!("User {} deleted", id);
            Ok(exit_codes::OK)
        }
        DeleteOutcome::Cancelled(_) => {
            println!("Not confirmed; re-run with --yes to delete");
            Ok(exit_codes::DECLINED)
        }
    }
}
