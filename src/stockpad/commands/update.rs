use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductUpdate};

/// Updates the first product whose id matches exactly.
///
/// Empty name or brand strings count as "keep current", the same as `None`.
/// A product only counts as affected when a field actually changed.
pub fn run(products: &mut [Product], id: &str, update: ProductUpdate) -> Result<CmdResult> {
    let id = id.trim();
    let mut result = CmdResult::default();

    let Some(product) = products.iter_mut().find(|p| p.id == id) else {
        tracing::debug!(id, "update target not found");
        result.add_message(CmdMessage::error(format!("No product with id {}", id)));
        return Ok(result);
    };

    let before = product.clone();
    if let Some(name) = update.name.filter(|s| !s.is_empty()) {
        product.name = name;
    }
    if let Some(brand) = update.brand.filter(|s| !s.is_empty()) {
        product.brand = brand;
    }
    if let Some(price) = update.price {
        product.price = price;
    }
    if let Some(quantity) = update.quantity {
        product.quantity = quantity;
    }

    if *product == before {
        tracing::debug!(id, "update left product unchanged");
        result.add_message(CmdMessage::info(format!("No changes for {}", id)));
        return Ok(result);
    }

    tracing::debug!(id, "updated product");
    result.add_message(CmdMessage::success(format!(
        "Product updated: {} ({})",
        product.id, product.name
    )));
    result.affected_products.push(product.clone());
    Ok(result)
}
