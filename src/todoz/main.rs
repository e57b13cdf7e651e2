use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use todoz::channel::IoChannel;
use todoz::commands::config::ConfigAction;
use todoz::commands::{self, CmdResult, TodozPaths};
use todoz::console::Console;
use todoz::error::{Result, TodozError};
use todoz::model::Scope;
use todoz::store::fs::open_task_file;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    paths: TodozPaths,
    scope: Scope,
    file: Option<PathBuf>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
        None => handle_session(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let project = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let global = match ProjectDirs::from("com", "todoz", "todoz") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None if scope == Scope::Project => project.clone(),
        None => {
            return Err(TodozError::Config(
                "Could not determine the global data directory".to_string(),
            ))
        }
    };

    Ok(AppContext {
        paths: TodozPaths { project, global },
        scope,
        file: cli.file.clone(),
    })
}

fn task_file(ctx: &AppContext) -> Result<PathBuf> {
    match &ctx.file {
        Some(path) => Ok(path.clone()),
        None => ctx.paths.task_file(ctx.scope),
    }
}

fn handle_session(ctx: &AppContext) -> Result<()> {
    let path = task_file(ctx)?;
    let file = open_task_file(&path)?;
    let mut console = Console::new(IoChannel::stdio(), file);
    console.start()
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    if let Some(path) = &ctx.file {
        println!("{}", path.display());
        return Ok(());
    }
    let result = commands::paths::run(&ctx.paths, ctx.scope)?;
    if let Some(path) = &result.task_file {
        println!("{}", path.display());
    }
    print_notices(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::Show,
        (Some(k), None) => ConfigAction::Get(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let showing_all = matches!(action, ConfigAction::Show);

    let result = commands::config::run(&ctx.paths, ctx.scope, action)?;
    if showing_all {
        if let (Some(config), Some(path)) = (&result.config, &result.task_file) {
            println!("file-name = {}", config.file_name);
            println!("{}", path.display().to_string().dimmed());
        }
    }
    print_notices(&result);
    Ok(())
}

fn print_notices(result: &CmdResult) {
    for notice in &result.notices {
        println!("{}", notice.styled());
    }
}
