use super::{decode_products, encode_products, DataStore};
use crate::error::{Result, StockError};
use crate::model::Product;
use std::cell::{Cell, RefCell};

/// In-memory storage for testing.
///
/// Holds the serialized document rather than the structs so tests exercise the
/// same codec as the file store, and can seed corrupt content.
#[derive(Default)]
pub struct InMemoryStore {
    raw: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from arbitrary stored text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
            simulate_write_error: Cell::new(false),
        }
    }

    pub fn with_products(products: &[Product]) -> Result<Self> {
        Ok(Self::with_raw(encode_products(products)?))
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl DataStore for InMemoryStore {
    fn load_products(&self) -> Result<Vec<Product>> {
        match self.raw.borrow().as_deref() {
            Some(content) => decode_products(content),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StockError::Store("Simulated write error".to_string()));
        }
        *self.raw.borrow_mut() = Some(encode_products(products)?);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://products".to_string()
    }
}
