//! # CLI Layer
//!
//! This module is **one possible UI client** for bookshelf, not the
//! application itself. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` from the working directory and its config
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! Business logic is tested in the command layer; tests here only cover the
//! argument plumbing.

use super::render::{
    print_messages, render_book_detail, render_book_list, render_book_list_json,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, BookCommands, Cli,
    Commands, CoreCommands, MiscCommands,
};
use bookshelf::api::{CmdResult, ConfigAction, ShelfApi, ShelfPaths};
use bookshelf::config::ShelfConfig;
use bookshelf::error::{Result, ShelfError};
use bookshelf::model::{Book, BookChanges};
use bookshelf::store::fs::CsvStore;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, Level};

struct AppContext {
    api: ShelfApi<CsvStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    init_logging(cli.verbose);

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.clone());
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                id,
                title,
                author,
                genre,
                availability,
            } => handle_add(&mut ctx, &id, &title, &author, &genre, &availability),
            CoreCommands::List { json } => handle_list(&ctx, json),
            CoreCommands::Search { term } => handle_search(&ctx, term.join(" ").trim()),
        },
        Some(Commands::Book(cmd)) => match cmd {
            BookCommands::Show { id } => handle_show(&ctx, id.trim()),
            BookCommands::Update {
                id,
                title,
                author,
                genre,
                availability,
            } => handle_update(
                &mut ctx,
                id.trim(),
                FieldEdits {
                    title,
                    author,
                    genre,
                    availability,
                },
            ),
            BookCommands::Delete { id } => handle_delete(&mut ctx, id.trim()),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Check { fix } => handle_check(&mut ctx, fix),
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_list(&ctx, false),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();
}

fn init_context() -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = ShelfConfig::load(&cwd)?;
    let data_path = config.data_path(&cwd);
    debug!(path = %data_path.display(), "using data file");

    let store = CsvStore::new(data_path);
    let api = ShelfApi::new(store, ShelfPaths { root: cwd });
    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    id: &str,
    title: &str,
    author: &str,
    genre: &str,
    availability: &str,
) -> Result<()> {
    let book = Book::new(id, title, author, genre, availability)?;
    let result = ctx.api.add_book(book)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list_books()?;
    if json {
        print!("{}", render_book_list_json(&result.listed_books)?);
        return Ok(());
    }
    if !result.listed_books.is_empty() {
        print!("{}", render_book_list(&result.listed_books));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search_books(term)?;
    for book in &result.listed_books {
        print!("{}", render_book_detail(book));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.find_book(id)?;
    for book in &result.listed_books {
        print!("{}", render_book_detail(book));
    }
    print_messages(&result.messages);
    Ok(())
}

/// Update flags as given; `None` keeps the stored value.
struct FieldEdits {
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
    availability: Option<String>,
}

impl FieldEdits {
    fn merge(self, current: &Book) -> Result<BookChanges> {
        BookChanges::new(
            self.title.as_deref().unwrap_or(&current.title),
            self.author.as_deref().unwrap_or(&current.author),
            self.genre.as_deref().unwrap_or(&current.genre),
            self.availability.as_deref().unwrap_or(&current.availability),
        )
    }
}

fn handle_update(ctx: &mut AppContext, id: &str, edits: FieldEdits) -> Result<()> {
    let found = ctx.api.find_book(id)?;
    let changes = edits.merge(first_listed(&found, id)?)?;
    let result = ctx.api.update_book(id, &changes)?;
    print_messages(&result.messages);
    Ok(())
}

fn first_listed<'a>(result: &'a CmdResult, id: &str) -> Result<&'a Book> {
    result
        .listed_books
        .first()
        .ok_or_else(|| ShelfError::Api(format!("lookup of '{}' returned no book", id)))
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_book(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &mut AppContext, fix: bool) -> Result<()> {
    let result = ctx.api.check(fix)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (k, v) in config.list_all() {
                println!("{} = {}", k, v);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
