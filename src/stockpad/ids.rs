//! # Product Ids
//!
//! Products are identified by a short, human friendly code: the prefix `LT`
//! followed by a sequence number, zero padded to two digits (`LT01`, `LT02`,
//! ... `LT99`, `LT100`).
//!
//! New ids are always `max + 1` over the sequences already present, so an id is
//! never handed out twice while the record that owns it still exists. Deleting
//! the highest record does free its number for the next add; lower gaps are
//! never refilled.
//!
//! Ids that don't follow the pattern (hand edited files, imports) are kept as-is
//! and simply ignored when computing the next sequence. A hand edited
//! `LT18446744073709551615` leaves no sequence to hand out, so adding fails
//! rather than repeating that id.

use crate::error::{Result, StockError};
use crate::model::Product;

pub const ID_PREFIX: &str = "LT";

/// Extracts the numeric sequence from an id like `LT07`.
pub fn sequence_of(id: &str) -> Option<u64> {
    let digits = id.strip_prefix(ID_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn format_id(sequence: u64) -> String {
    format!("{}{:02}", ID_PREFIX, sequence)
}

pub fn generate_next_id(products: &[Product]) -> Result<String> {
    let max = products
        .iter()
        .filter_map(|p| sequence_of(&p.id))
        .max()
        .unwrap_or(0);
    max.checked_add(1).map(format_id).ok_or_else(|| {
        StockError::Validation(format!("no product id left after {}", format_id(max)))
    })
}
