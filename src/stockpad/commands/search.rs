use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;

/// Case-insensitive substring match on the product name, in catalog order.
pub fn run(products: &[Product], keyword: &str) -> Result<CmdResult> {
    let term = keyword.to_lowercase();
    let matches: Vec<Product> = products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term))
        .cloned()
        .collect();

    let message = if matches.is_empty() {
        CmdMessage::info(format!("No products match '{}'.", keyword))
    } else {
        CmdMessage::info(format!("Found {} matching product(s).", matches.len()))
    };

    Ok(CmdResult::default()
        .with_listed_products(matches)
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewProduct;

    fn named(names: &[&str]) -> Vec<Product> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Product::new(format!("LT{:02}", i + 1), NewProduct::new(*n, "", 0, 0)))
            .collect()
    }

    #[test]
    fn substring_matches_in_order() {
        let products = named(&["Laptop A", "Desktop"]);
        let result = run(&products, "top").unwrap();
        let names: Vec<_> = result.listed_products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Laptop A", "Desktop"]);
    }

    #[test]
    fn ignores_case() {
        let products = named(&["Laptop A"]);
        let result = run(&products, "laptop").unwrap();
        assert_eq!(result.listed_products.len(), 1);
        assert_eq!(result.listed_products[0].id, "LT01");
    }

    #[test]
    fn matches_non_ascii_case_insensitively() {
        let products = named(&["ĐIỆN THOẠI", "Tai nghe"]);
        let result = run(&products, "điện").unwrap();
        assert_eq!(result.listed_products.len(), 1);
    }

    #[test]
    fn does_not_search_brand() {
        let products = vec![Product::new(
            "LT01".into(),
            NewProduct::new("Mouse", "Laptopco", 0, 0),
        )];
        assert!(run(&products, "laptop").unwrap().listed_products.is_empty());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let products = named(&["Laptop A"]);
        let result = run(&products, "phone").unwrap();
        assert!(result.listed_products.is_empty());
        assert!(!result.has_errors());
    }
}
