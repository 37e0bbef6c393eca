use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ids::generate_next_id;
use crate::model::{NewProduct, Product};

pub fn run(products: &mut Vec<Product>, draft: NewProduct) -> Result<CmdResult> {
    let id = generate_next_id(products)?;
    let product = Product::new(id, draft);
    tracing::debug!(id = %product.id, name = %product.name, "adding product");

    products.push(product.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added: {} ({})",
        product.id, product.name
    )));
    result.affected_products.push(product);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn assigns_sequential_ids_and_reports_them() {
        let mut products = Vec::new();
        let laptop = NewProduct::new("Laptop X", "BrandY", 15_000_000, 3);
        let first = run(&mut products, laptop).unwrap();
        let second = run(&mut products, NewProduct::new("Mouse", "BrandZ", 200_000, 10)).unwrap();

        assert_eq!(first.affected_products[0].id, "LT01");
        assert_eq!(second.affected_products[0].id, "LT02");
        assert!(first.messages[0].content.contains("LT01"));
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn appends_in_insertion_order() {
        let mut products = Vec::new();
        for name in ["c", "a", "b"] {
            run(&mut products, NewProduct::new(name, "", 0, 0)).unwrap();
        }
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn ids_stay_unique_and_increase_by_one() {
        let mut products = Vec::new();
        for i in 1..=120u64 {
            let result = run(&mut products, NewProduct::new("p", "b", i, i)).unwrap();
            assert_eq!(result.affected_products[0].id, format!("LT{:02}", i));
        }
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 120);
    }

    #[test]
    fn continues_after_foreign_and_gapped_ids() {
        let mut products = vec![
            Product::new("LT05".into(), NewProduct::new("a", "", 0, 0)),
            Product::new("SKU-1".into(), NewProduct::new("b", "", 0, 0)),
        ];
        let result = run(&mut products, NewProduct::new("c", "", 0, 0)).unwrap();
        assert_eq!(result.affected_products[0].id, "LT06");
    }

    #[test]
    fn exhausted_ids_leave_catalog_unchanged() {
        let last = format!("LT{}", u64::MAX);
        let mut products = vec![Product::new(last, NewProduct::new("a", "", 0, 0))];
        assert!(run(&mut products, NewProduct::new("b", "", 0, 0)).is_err());
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn accepts_empty_name_and_brand() {
        let mut products = Vec::new();
        run(&mut products, NewProduct::new("", "", 0, 0)).unwrap();
        assert_eq!(products[0].name, "");
        assert_eq!(products[0].brand, "");
    }
}
