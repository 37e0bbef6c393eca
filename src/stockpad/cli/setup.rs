use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpad", bin_name = "stockpad", version)]
#[command(about = "A small, file-backed product inventory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Product data file (default: products.json in the current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(alias = "a")]
    Add {
        /// Product name
        name: String,

        /// Brand
        brand: String,

        /// Price, a whole non-negative number
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Quantity in stock, a whole non-negative number
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Update a product; fields that are not given keep their value
    #[command(alias = "u")]
    Update {
        /// Product id (exact, e.g. LT01)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        brand: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product id (case-insensitive)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search products by name
    #[command(alias = "s")]
    Search { keyword: String },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Interactive menu (the default when no command is given)
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
