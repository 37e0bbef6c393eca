//! # Storage Layer
//!
//! The catalog is persisted as a single JSON document: an array of product
//! objects, pretty printed with four space indentation. Non-ASCII text (product
//! names are often Vietnamese) is written verbatim.
//!
//! ```text
//! [
//!     {
//!         "id": "LT01",
//!         "name": "Laptop X",
//!         "brand": "BrandY",
//!         "price": 15000000,
//!         "quantity": 3
//!     }
//! ]
//! ```
//!
//! There is no incremental update and no index: every save rewrites the whole
//! file, every load reads it whole.
//!
//! ## Fail-open loading
//!
//! [`DataStore::load`] never fails. A missing file is simply "no data yet", and a
//! file that doesn't parse is treated the same way (with a warning logged).
//! Callers that need to tell these apart use [`DataStore::load_products`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, atomic writes, corrupt file backup.
//! - [`memory::InMemoryStore`]: for tests, same codec, no filesystem.

use crate::error::Result;
use crate::model::Product;
use serde::Serialize;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait DataStore {
    /// Strict load. A missing backing file yields an empty catalog, unreadable
    /// or malformed content is an error.
    fn load_products(&self) -> Result<Vec<Product>>;

    /// Overwrite the backing storage with the full catalog.
    fn save(&mut self, products: &[Product]) -> Result<()>;

    /// Where the data lives, for messages.
    fn location(&self) -> String;

    /// Where unreadable data would be copied before the next save, if the
    /// store keeps such copies at all.
    fn corrupt_backup_location(&self) -> Option<String> {
        None
    }

    /// Fail-open load: anything that can't be read comes back as an empty catalog.
    fn load(&self) -> Vec<Product> {
        match self.load_products() {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(
                    location = %self.location(),
                    error = %e,
                    "discarding unreadable product data"
                );
                Vec::new()
            }
        }
    }
}

pub fn encode_products(products: &[Product]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    products.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn decode_products(content: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(content)?)
}
