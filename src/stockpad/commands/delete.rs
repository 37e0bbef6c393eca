use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

/// Whether a typed answer to the delete prompt confirms the deletion.
/// Only `y` does; everything else cancels.
pub fn is_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Removes the first product whose id matches case-insensitively, after
/// `confirm` approves it.
///
/// When nothing matches, the result carries every existing id in `known_ids`
/// so the caller can hint at valid choices.
pub fn run<F>(products: &mut Vec<Product>, id: &str, confirm: F) -> Result<CmdResult>
where
    F: FnOnce(&Product) -> bool,
{
    let wanted = id.trim().to_uppercase();
    let mut result = CmdResult::default();

    let Some(pos) = products.iter().position(|p| p.id.to_uppercase() == wanted) else {
        tracing::debug!(id = %wanted, "delete target not found");
        result.known_ids = products.iter().map(|p| p.id.clone()).collect();
        result.add_message(CmdMessage::error(format!("No product with id '{}'", wanted)));
        if result.known_ids.is_empty() {
            result.add_message(CmdMessage::info("The inventory has no products yet."));
        } else {
            result.add_message(CmdMessage::info(format!(
                "Existing product ids: {}",
                result.known_ids.join(", ")
            )));
        }
        return Ok(result);
    };

    if !confirm(&products[pos]) {
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result);
    }

    let removed = products.remove(pos);
    tracing::debug!(id = %removed.id, "deleted product");
    result.add_message(CmdMessage::success(format!(
        "Product deleted: {} ({})",
        removed.id, removed.name
    )));
    result.affected_products.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("LT01".into(), NewProduct::new("Laptop X", "BrandY", 15_000_000, 3)),
            Product::new("LT02".into(), NewProduct::new("Mouse", "BrandZ", 200_000, 10)),
        ]
    }

    #[test]
    fn deletes_case_insensitively() {
        let mut products = catalog();
        let result = run(&mut products, "lt01", |_| true).unwrap();

        assert_eq!(result.affected_products[0].id, "LT01");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "LT02");
    }

    #[test]
    fn confirm_sees_the_matched_product() {
        let mut products = catalog();
        let mut seen = None;
        run(&mut products, " Lt02 ", |p| {
            seen = Some(p.name.clone());
            true
        })
        .unwrap();
        assert_eq!(seen.as_deref(), Some("Mouse"));
    }

    #[test]
    fn declined_confirmation_cancels() {
        let mut products = catalog();
        let before = products.clone();
        let result = run(&mut products, "LT01", |_| false).unwrap();

        assert!(result.affected_products.is_empty());
        assert!(!result.has_errors());
        assert_eq!(products, before);
    }

    #[test]
    fn unmatched_id_returns_hint_and_keeps_catalog() {
        let mut products = catalog();
        let before = products.clone();
        let result = run(&mut products, "LT77", |_| panic!("confirm must not run")).unwrap();

        assert!(result.has_errors());
        assert_eq!(result.known_ids, vec!["LT01", "LT02"]);
        assert!(result.messages[1].content.contains("LT01, LT02"));
        assert_eq!(products, before);
    }

    #[test]
    fn removes_only_first_match() {
        let mut products = catalog();
        products.push(Product::new("lt01".into(), NewProduct::new("Dup", "", 0, 0)));
        run(&mut products, "LT01", |_| true).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Dup");
    }

    #[test]
    fn confirmation_answers() {
        assert!(is_confirmation("y"));
        assert!(is_confirmation("Y\n"));
        assert!(!is_confirmation("yes"));
        assert!(!is_confirmation("n"));
        assert!(!is_confirmation(""));
    }
}
