//! # CLI Layer
//!
//! One possible UI client for stockpad. This is the only place that parses
//! arguments, reads stdin, prints, and decides exit codes.
//!
//! ## Saving
//!
//! The interactive shell saves only when asked. One-shot commands are a single
//! explicit action each, so a mutating command saves once at the end, and only
//! if something actually changed. A failed save makes the process exit with
//! status 1.

use super::render::{format_thousands, print_messages, render_product_table};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use clap::Parser;
use stockpad::api::CmdMessage;
use stockpad::commands::delete::is_confirmation;
use stockpad::error::{Result, StockError};
use stockpad::init::{initialize, StockContext};
use stockpad::logging;
use stockpad::model::{NewProduct, ProductUpdate};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(&cwd, cli.file.as_deref());

    match cli.command {
        Some(Commands::Add {
            name,
            brand,
            price,
            quantity,
        }) => handle_add(&mut ctx, &name, &brand, &price, &quantity),
        Some(Commands::Update {
            id,
            name,
            brand,
            price,
            quantity,
        }) => handle_update(&mut ctx, &id, name, brand, price, quantity),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, &id, yes),
        Some(Commands::Search { keyword }) => handle_search(&ctx, &keyword),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Shell) | None => handle_shell(&mut ctx),
    }
}

fn handle_add(
    ctx: &mut StockContext,
    name: &str,
    brand: &str,
    price: &str,
    quantity: &str,
) -> Result<()> {
    warn_on_load(ctx);
    let draft = NewProduct::parse(name, brand, price, quantity)?;
    let result = ctx.api.add_product(draft)?;
    print_messages(&result.messages);
    persist(ctx)
}

fn handle_update(
    ctx: &mut StockContext,
    id: &str,
    name: Option<String>,
    brand: Option<String>,
    price: Option<String>,
    quantity: Option<String>,
) -> Result<()> {
    warn_on_load(ctx);
    let update = ProductUpdate::parse(name, brand, price.as_deref(), quantity.as_deref())?;
    if update.is_empty() {
        print_messages(&[CmdMessage::warning(
            "Nothing to update; pass --name, --brand, --price or --quantity.",
        )]);
        return Ok(());
    }
    let result = ctx.api.update_product(id, update)?;
    print_messages(&result.messages);
    persist(ctx)
}

fn handle_delete(ctx: &mut StockContext, id: &str, yes: bool) -> Result<()> {
    warn_on_load(ctx);
    let skip_prompt = yes || !ctx.config.confirm_delete;
    let result = ctx.api.delete_product(id, |product| {
        if skip_prompt {
            return true;
        }
        print!(
            "Delete {} ({}, price {})? (y/n): ",
            product.id,
            product.name,
            format_thousands(product.price)
        );
        let _ = io::stdout().flush();
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_confirmation(&answer),
            Err(_) => false,
        }
    })?;
    print_messages(&result.messages);
    persist(ctx)
}

fn handle_search(ctx: &StockContext, keyword: &str) -> Result<()> {
    warn_on_load(ctx);
    let result = ctx.api.search_products(keyword)?;
    print!("{}", render_product_table(&result.listed_products));
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &StockContext) -> Result<()> {
    warn_on_load(ctx);
    let result = ctx.api.list_products()?;
    print!("{}", render_product_table(&result.listed_products));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut StockContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            for (k, v) in ctx.config.entries() {
                println!("{} = {}", k, v);
            }
            println!("# data file in use: {}", ctx.data_file.display());
            println!("# config dir: {}", ctx.config_dir.display());
        }
        (Some(k), None) => {
            println!("{}", ctx.config.get(k)?);
        }
        (Some(k), Some(v)) => {
            ctx.config.set(k, &v)?;
            ctx.config.save(&ctx.config_dir)?;
            print_messages(&[CmdMessage::success(format!("{} = {}", k, v))]);
        }
    }
    Ok(())
}

fn handle_shell(ctx: &mut StockContext) -> Result<()> {
    let color = io::stdout().is_terminal();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock())
        .with_color(color)
        .with_confirm_delete(ctx.config.confirm_delete);
    shell.run(&mut ctx.api)?;
    Ok(())
}

fn warn_on_load(ctx: &StockContext) {
    if let Some(warning) = ctx.api.load_warning() {
        print_messages(&[CmdMessage::warning(warning)]);
    }
}

fn persist(ctx: &mut StockContext) -> Result<()> {
    if !ctx.api.is_dirty() {
        return Ok(());
    }
    let result = ctx.api.save();
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(StockError::Store(format!(
            "changes were not saved to {}",
            ctx.data_file.display()
        )));
    }
    Ok(())
}
