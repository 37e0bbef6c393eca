//! # Command Layer
//!
//! One module per catalog operation. Commands take the in-memory catalog (and,
//! for mutations, `&mut Vec<Product>`), never touch storage, never print, and
//! report everything through a [`CmdResult`]:
//!
//! - `affected_products`: records that were created, changed, or removed.
//!   A non-empty list is what marks the session as having unsaved changes.
//! - `listed_products`: records to display (list, search).
//! - `known_ids`: id hint returned when a lookup fails.
//! - `messages`: leveled, human readable status for the UI to show.
//!
//! "Not found" and "cancelled" are outcomes, not errors: they come back as
//! `Ok(CmdResult)` with an error or info message and no affected products.

use crate::model::Product;

pub mod add;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub known_ids: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
