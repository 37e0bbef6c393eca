//! # API Facade
//!
//! [`StockApi`] is the session object every UI talks to. It owns the in-memory
//! catalog for the lifetime of one invocation and the store it came from, so
//! there is no process-wide "current catalog".
//!
//! ## Lifecycle
//!
//! 1. [`StockApi::open`] loads the catalog (fail-open: unreadable data becomes
//!    an empty catalog and [`StockApi::load_warning`] says so).
//! 2. Operations mutate the catalog in memory. Any operation that affects a
//!    product marks the session dirty.
//! 3. [`StockApi::save`] writes everything back. Nothing is written implicitly.
//!
//! A failed save is reported through the returned messages and leaves the
//! session dirty; it never tears the session down.
//!
//! The API does no printing and no prompting. Delete confirmation is a callback
//! supplied by the caller.

use crate::commands;
use crate::error::Result;
use crate::model::{NewProduct, Product, ProductUpdate};
use crate::store::DataStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct StockApi<S: DataStore> {
    store: S,
    products: Vec<Product>,
    dirty: bool,
    load_warning: Option<String>,
}

impl<S: DataStore> StockApi<S> {
    pub fn open(store: S) -> Self {
        let (products, load_warning) = load_from(&store);
        Self {
            store,
            products,
            dirty: false,
            load_warning,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set when the last load had to throw away unreadable data.
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn add_product(&mut self, draft: NewProduct) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.products, draft)?;
        Ok(self.track(result))
    }

    pub fn update_product(&mut self, id: &str, update: ProductUpdate) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.products, id, update)?;
        Ok(self.track(result))
    }

    pub fn delete_product<F>(&mut self, id: &str, confirm: F) -> Result<CmdResult>
    where
        F: FnOnce(&Product) -> bool,
    {
        let result = commands::delete::run(&mut self.products, id, confirm)?;
        Ok(self.track(result))
    }

    pub fn search_products(&self, keyword: &str) -> Result<CmdResult> {
        commands::search::run(&self.products, keyword)
    }

    pub fn list_products(&self) -> Result<CmdResult> {
        commands::list::run(&self.products)
    }

    /// Exact-id lookup, used by UIs to show current values before an update.
    pub fn find(&self, id: &str) -> Option<&Product> {
        let id = id.trim();
        self.products.iter().find(|p| p.id == id)
    }

    pub fn save(&mut self) -> CmdResult {
        let mut result = CmdResult::default();
        match self.store.save(&self.products) {
            Ok(()) => {
                self.dirty = false;
                self.load_warning = None;
                result.add_message(CmdMessage::success(format!(
                    "Saved {} product(s) to {}",
                    self.products.len(),
                    self.store.location()
                )));
            }
            Err(e) => {
                tracing::error!(location = %self.store.location(), error = %e, "save failed");
                result.add_message(CmdMessage::error(format!("Could not save: {}", e)));
            }
        }
        result
    }

    /// Throw away in-memory changes and load again from the store.
    pub fn reload(&mut self) -> CmdResult {
        let (products, load_warning) = load_from(&self.store);
        self.products = products;
        self.dirty = false;
        self.load_warning = load_warning;

        let mut result = CmdResult::default();
        if let Some(warning) = &self.load_warning {
            result.add_message(CmdMessage::warning(warning.clone()));
        }
        result.add_message(CmdMessage::info(format!(
            "Loaded {} product(s) from {}",
            self.products.len(),
            self.store.location()
        )));
        result
    }

    fn track(&mut self, result: CmdResult) -> CmdResult {
        if !result.affected_products.is_empty() {
            self.dirty = true;
        }
        result
    }
}

fn load_from<S: DataStore>(store: &S) -> (Vec<Product>, Option<String>) {
    match store.load_products() {
        Ok(products) => (products, None),
        Err(e) => {
            tracing::warn!(
                location = %store.location(),
                error = %e,
                "discarding unreadable product data"
            );
            let mut warning = format!(
                "Could not read product data at {}; starting with an empty inventory.",
                store.location()
            );
            if let Some(backup) = store.corrupt_backup_location() {
                warning.push_str(&format!(
                    " The unreadable file will be kept as {} if you save.",
                    backup
                ));
            }
            (Vec::new(), Some(warning))
        }
    }
}
