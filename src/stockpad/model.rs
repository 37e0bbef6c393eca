use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};

/// One inventory item.
///
/// Field order matches the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: u64,
    pub quantity: u64,
}

impl Product {
    pub fn new(id: String, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            brand: draft.brand,
            price: draft.price,
            quantity: draft.quantity,
        }
    }
}

/// Validated input for a product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub price: u64,
    pub quantity: u64,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        price: u64,
        quantity: u64,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            price,
            quantity,
        }
    }

    /// Build from raw text input, validating price and quantity.
    pub fn parse(name: &str, brand: &str, price: &str, quantity: &str) -> Result<Self> {
        Ok(Self::new(
            name,
            brand,
            parse_amount("price", price)?,
            parse_amount("quantity", quantity)?,
        ))
    }
}

/// Partial update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<u64>,
    pub quantity: Option<u64>,
}

impl ProductUpdate {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Build from optional raw text input. Blank numeric input counts as omitted.
    pub fn parse(
        name: Option<String>,
        brand: Option<String>,
        price: Option<&str>,
        quantity: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            name,
            brand,
            price: parse_optional_amount("price", price)?,
            quantity: parse_optional_amount("quantity", quantity)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.brand.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

/// Parse a non-negative integer amount typed by the user.
pub fn parse_amount(field: &str, raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    match trimmed.parse::<i128>() {
        Ok(n) if n < 0 => Err(StockError::Validation(format!(
            "{} must not be negative (got {})",
            field, trimmed
        ))),
        Ok(n) => u64::try_from(n).map_err(|_| {
            StockError::Validation(format!("{} is too large (got {})", field, trimmed))
        }),
        Err(_) => Err(StockError::Validation(format!(
            "{} must be a whole number (got '{}')",
            field, trimmed
        ))),
    }
}

fn parse_optional_amount(field: &str, raw: Option<&str>) -> Result<Option<u64>> {
    match raw {
        Some(s) if !s.trim().is_empty() => parse_amount(field, s).map(Some),
        _ => Ok(None),
    }
}
