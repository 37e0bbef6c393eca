//! # Rendering
//!
//! Turns products and messages into terminal text. Everything here returns a
//! `String`; the callers decide where it goes (stdout for one-shot commands,
//! the shell's writer for the interactive loop).
//!
//! The product table uses minimum column widths. Widths are measured in
//! terminal columns, not bytes or chars, so names with diacritics or wide
//! glyphs still line up.

use colored::Colorize;
use stockpad::api::{CmdMessage, MessageLevel};
use stockpad::model::Product;
use unicode_width::UnicodeWidthStr;

pub const TABLE_WIDTH: usize = 85;
const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 30;
const BRAND_WIDTH: usize = 15;
const PRICE_WIDTH: usize = 12;
const QTY_WIDTH: usize = 5;

/// Renders products as a table, one row per product. Returns an empty string
/// for no products; the "empty" wording comes from the command messages.
pub fn render_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push('\n');
    out.push_str(&"=".repeat(TABLE_WIDTH));
    out.push('\n');
    out.push_str(&row(["ID", "NAME", "BRAND", "PRICE", "QTY"]));
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');

    for p in products {
        let price = format_thousands(p.price);
        let quantity = p.quantity.to_string();
        out.push_str(&row([
            p.id.as_str(),
            p.name.as_str(),
            p.brand.as_str(),
            price.as_str(),
            quantity.as_str(),
        ]));
    }

    out.push_str(&"=".repeat(TABLE_WIDTH));
    out.push('\n');
    out
}

fn row(cells: [&str; 5]) -> String {
    let widths = [ID_WIDTH, NAME_WIDTH, BRAND_WIDTH, PRICE_WIDTH, QTY_WIDTH];
    let line = cells
        .iter()
        .zip(widths)
        .map(|(text, width)| cell(text, width))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{}\n", line.trim_end())
}

/// Pads to at least `width` columns. Longer text is shown in full and pushes
/// the rest of its row to the right.
fn cell(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// `15000000` -> `15,000,000`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut out = String::new();
    for message in messages {
        let line = if use_color {
            match message.level {
                MessageLevel::Info => message.content.dimmed().to_string(),
                MessageLevel::Success => message.content.green().to_string(),
                MessageLevel::Warning => message.content.yellow().to_string(),
                MessageLevel::Error => message.content.red().to_string(),
            }
        } else {
            message.content.clone()
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    use std::io::IsTerminal;
    print!(
        "{}",
        render_messages(messages, std::io::stdout().is_terminal())
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpad::model::NewProduct;

    fn product(id: &str, name: &str, brand: &str, price: u64, qty: u64) -> Product {
        Product::new(id.to_string(), NewProduct::new(name, brand, price, qty))
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(15_000_000), "15,000,000");
        assert_eq!(format_thousands(123_456_789_012), "123,456,789,012");
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render_product_table(&[]), "");
    }

    #[test]
    fn test_each_product_rendered_once() {
        let products = vec![
            product("LT01", "Laptop X", "BrandY", 15_000_000, 3),
            product("LT02", "Mouse", "BrandZ", 200_000, 10),
        ];
        let out = render_product_table(&products);

        assert_eq!(out.matches("LT01").count(), 1);
        assert_eq!(out.matches("LT02").count(), 1);
        assert!(out.contains("15,000,000"));
        assert!(out.contains("200,000"));
    }

    #[test]
    fn test_row_layout() {
        let out = render_product_table(&[product("LT01", "Laptop X", "BrandY", 1500, 3)]);
        let row = out.lines().find(|l| l.starts_with("LT01")).unwrap();
        let expected = format!(
            "{:<10} | {:<30} | {:<15} | {:<12} | 3",
            "LT01", "Laptop X", "BrandY", "1,500"
        );
        assert_eq!(row, expected);

        let header = out.lines().find(|l| l.starts_with("ID")).unwrap();
        assert!(header.contains("| NAME"));
        assert!(header.ends_with("| QTY"));
    }

    #[test]
    fn test_columns_align_with_wide_and_accented_text() {
        let products = vec![
            product("LT01", "Điện thoại", "Việt", 1, 1),
            product("LT02", "显示器", "品牌", 1, 1),
            product("LT03", "plain", "plain", 1, 1),
        ];
        let out = render_product_table(&products);
        let positions: Vec<usize> = out
            .lines()
            .filter(|l| l.starts_with("LT"))
            .map(|l| {
                let idx = l.rfind(" | ").unwrap();
                l[..idx].width()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] == w[1]), "{positions:?}");
    }

    #[test]
    fn test_long_names_are_shown_in_full() {
        let long = "A".repeat(50);
        let out = render_product_table(&[product("LT01", &long, "B", 1, 1)]);
        let row = out.lines().find(|l| l.starts_with("LT01")).unwrap();
        assert!(row.contains(&format!("| {} | B", long)));
        assert!(!out.contains('…'));
    }

    #[test]
    fn test_render_messages_plain() {
        let messages = vec![CmdMessage::success("Saved"), CmdMessage::error("Oops")];
        assert_eq!(render_messages(&messages, false), "Saved\nOops\n");
    }

    #[test]
    fn test_render_messages_empty() {
        assert_eq!(render_messages(&[], true), "");
    }
}
