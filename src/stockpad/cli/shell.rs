//! # Interactive Shell
//!
//! The numbered menu loop. It reads from any `BufRead` and writes to any
//! `Write`, so tests drive it with in-memory buffers.
//!
//! Numeric fields are re-prompted until valid. In update prompts an empty
//! answer keeps the current value. End of input behaves like choosing exit,
//! except there is nobody left to ask about unsaved changes, so they are
//! dropped with a notice.

use super::render::{format_thousands, render_messages, render_product_table};
use stockpad::api::{CmdMessage, CmdResult, StockApi};
use stockpad::commands::delete::is_confirmation;
use stockpad::error::{Result as StockResult, StockError};
use stockpad::model::{parse_amount, NewProduct, Product, ProductUpdate};
use stockpad::store::DataStore;
use std::io::{self, BufRead, Write};

enum Amount {
    Value(u64),
    Keep,
    Eof,
}

pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
    color: bool,
    confirm_delete: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
            confirm_delete: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_confirm_delete(mut self, confirm: bool) -> Self {
        self.confirm_delete = confirm;
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run<S: DataStore>(&mut self, api: &mut StockApi<S>) -> io::Result<()> {
        if let Some(warning) = api.load_warning() {
            let warning = CmdMessage::warning(warning);
            self.messages(&[warning])?;
        }

        loop {
            self.menu(api.is_dirty())?;
            let Some(choice) = self.read_line("Choose an option: ")? else {
                if api.is_dirty() {
                    let msg = CmdMessage::warning("Input closed; unsaved changes were discarded.");
                    self.messages(&[msg])?;
                }
                break;
            };

            match choice.trim() {
                "1" => {
                    let result = api.list_products();
                    self.show(result)?;
                }
                "2" => self.add(api)?,
                "3" => self.update(api)?,
                "4" => self.delete(api)?,
                "5" => self.search(api)?,
                "6" => {
                    let result = api.save();
                    self.show(Ok(result))?;
                }
                "7" => {
                    let result = api.reload();
                    self.show(Ok(result))?;
                }
                "0" => {
                    if self.exit(api)? {
                        break;
                    }
                }
                other => {
                    let msg = CmdMessage::error(format!("Unknown option '{}'", other));
                    self.messages(&[msg])?;
                }
            }
        }

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()
    }

    fn menu(&mut self, dirty: bool) -> io::Result<()> {
        let save_label = if dirty {
            "Save (unsaved changes)"
        } else {
            "Save"
        };
        writeln!(self.output)?;
        writeln!(self.output, "===== STOCKPAD =====")?;
        writeln!(self.output, "1. List products")?;
        writeln!(self.output, "2. Add product")?;
        writeln!(self.output, "3. Update product")?;
        writeln!(self.output, "4. Delete product")?;
        writeln!(self.output, "5. Search by name")?;
        writeln!(self.output, "6. {}", save_label)?;
        writeln!(self.output, "7. Reload from disk")?;
        writeln!(self.output, "0. Exit")
    }

    fn add<S: DataStore>(&mut self, api: &mut StockApi<S>) -> io::Result<()> {
        writeln!(self.output, "\n--- ADD PRODUCT ---")?;
        let Some(name) = self.read_line("Name: ")? else {
            return Ok(());
        };
        let Some(brand) = self.read_line("Brand: ")? else {
            return Ok(());
        };
        let Amount::Value(price) = self.read_amount("Price: ", "price", false)? else {
            return Ok(());
        };
        let Amount::Value(quantity) = self.read_amount("Quantity: ", "quantity", false)? else {
            return Ok(());
        };

        let result = api.add_product(NewProduct::new(name, brand, price, quantity));
        self.show(result)
    }

    fn update<S: DataStore>(&mut self, api: &mut StockApi<S>) -> io::Result<()> {
        writeln!(self.output, "\n--- UPDATE PRODUCT ---")?;
        let Some(id) = self.read_line("Product id (e.g. LT01): ")? else {
            return Ok(());
        };

        let Some(current) = api.find(&id).cloned() else {
            let result = api.update_product(&id, ProductUpdate::default());
            return self.show(result);
        };

        writeln!(self.output, "Found: {}", current.name)?;
        writeln!(self.output, "Press Enter to keep the current value.")?;

        let mut update = ProductUpdate::default();
        let Some(name) = self.read_line(&format!("New name ({}): ", current.name))? else {
            return Ok(());
        };
        if !name.is_empty() {
            update.name = Some(name);
        }
        let Some(brand) = self.read_line(&format!("New brand ({}): ", current.brand))? else {
            return Ok(());
        };
        if !brand.is_empty() {
            update.brand = Some(brand);
        }
        match self.read_amount(&format!("New price ({}): ", current.price), "price", true)? {
            Amount::Value(v) => update.price = Some(v),
            Amount::Keep => {}
            Amount::Eof => return Ok(()),
        }
        match self.read_amount(
            &format!("New quantity ({}): ", current.quantity),
            "quantity",
            true,
        )? {
            Amount::Value(v) => update.quantity = Some(v),
            Amount::Keep => {}
            Amount::Eof => return Ok(()),
        }

        let result = api.update_product(&current.id, update);
        self.show(result)
    }

    fn delete<S: DataStore>(&mut self, api: &mut StockApi<S>) -> io::Result<()> {
        writeln!(self.output, "\n--- DELETE PRODUCT ---")?;
        let Some(id) = self.read_line("Product id (e.g. LT01): ")? else {
            return Ok(());
        };

        let ask = self.confirm_delete;
        let result = api.delete_product(&id, |product| !ask || self.confirm(product));
        self.show(result)
    }

    fn search<S: DataStore>(&mut self, api: &mut StockApi<S>) -> io::Result<()> {
        writeln!(self.output, "\n--- SEARCH ---")?;
        let Some(keyword) = self.read_line("Name contains: ")? else {
            return Ok(());
        };
        let result = api.search_products(&keyword);
        self.show(result)
    }

    /// Returns true when the loop should end.
    fn exit<S: DataStore>(&mut self, api: &mut StockApi<S>) -> io::Result<bool> {
        if !api.is_dirty() {
            return Ok(true);
        }
        let Some(answer) = self.read_line("Save changes before exit? (y/n): ")? else {
            return Ok(true);
        };
        if !is_confirmation(&answer) {
            return Ok(true);
        }
        let result = api.save();
        let failed = result.has_errors();
        self.show(Ok(result))?;
        // Stay in the loop after a failed save so the user can retry or quit again
        Ok(!failed)
    }

    fn confirm(&mut self, product: &Product) -> bool {
        let prompt = format!(
            "Delete {} ({}, price {})? (y/n): ",
            product.id,
            product.name,
            format_thousands(product.price)
        );
        matches!(self.read_line(&prompt), Ok(Some(answer)) if is_confirmation(&answer))
    }

    fn read_amount(&mut self, prompt: &str, field: &str, allow_empty: bool) -> io::Result<Amount> {
        loop {
            let Some(raw) = self.read_line(prompt)? else {
                return Ok(Amount::Eof);
            };
            if allow_empty && raw.trim().is_empty() {
                return Ok(Amount::Keep);
            }
            match parse_amount(field, &raw) {
                Ok(v) => return Ok(Amount::Value(v)),
                Err(e) => {
                    let msg = CmdMessage::error(validation_text(&e));
                    self.messages(&[msg])?;
                }
            }
        }
    }

    /// Prompts and reads one line without its line ending. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(trimmed))
    }

    fn show(&mut self, result: StockResult<CmdResult>) -> io::Result<()> {
        match result {
            Ok(result) => {
                write!(self.output, "{}", render_product_table(&result.listed_products))?;
                self.messages(&result.messages)
            }
            Err(e) => self.messages(&[CmdMessage::error(e.to_string())]),
        }
    }

    fn messages(&mut self, messages: &[CmdMessage]) -> io::Result<()> {
        write!(self.output, "{}", render_messages(messages, self.color))
    }
}

fn validation_text(e: &StockError) -> String {
    match e {
        StockError::Validation(msg) => format!("Please enter a valid amount: {}", msg),
        other => other.to_string(),
    }
}
