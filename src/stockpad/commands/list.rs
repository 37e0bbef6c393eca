use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

pub fn run(products: &[Product]) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_products(products.to_vec());
    if products.is_empty() {
        result.add_message(CmdMessage::info("Inventory is empty."));
    }
    Ok(result)
}
