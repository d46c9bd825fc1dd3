//! Output formatting for the CLI.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_commerce::view::{CartView, CatalogRow, CategoryOption};

const ID_WIDTH: usize = 5;
const CATEGORY_WIDTH: usize = 18;
const PRICE_WIDTH: usize = 10;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => self.error(&format!("Failed to serialize output: {}", e)),
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }

    /// Render the catalog as a table.
    pub fn catalog_table(&self, rows: &[CatalogRow]) {
        if self.json {
            self.json(&rows);
            return;
        }
        if rows.is_empty() {
            self.info("No products match the current filter.");
            return;
        }

        let title_width = self.title_width();
        self.table_row(
            &["ID", "TITLE", "CATEGORY", &format!("{:>PRICE_WIDTH$}", "PRICE")],
            &[ID_WIDTH, title_width, CATEGORY_WIDTH, PRICE_WIDTH],
        );

        for row in rows {
            let id = row.id.to_string();
            let title = truncate(&row.title, title_width);
            let category = truncate(&row.category, CATEGORY_WIDTH);
            self.table_row(
                &[&id, &title, &category, &format!("{:>PRICE_WIDTH$}", row.price_label)],
                &[ID_WIDTH, title_width, CATEGORY_WIDTH, PRICE_WIDTH],
            );
        }
    }

    /// Render the cart with its total.
    pub fn cart_summary(&self, cart: &CartView) {
        if self.json {
            self.json(cart);
            return;
        }

        self.header("Cart");
        if let Some(status) = cart_status(cart) {
            self.info(status);
        }
        let title_width = self.title_width();
        for line in &cart.lines {
            let title = truncate(&line.title, title_width);
            let quantity = format!("x{}", line.quantity);
            self.table_row(
                &[&line.product_id.to_string(), &title, &quantity, &format!("{:>PRICE_WIDTH$}", line.subtotal_label)],
                &[ID_WIDTH, title_width, 6, PRICE_WIDTH],
            );
        }
        for id in &cart.orphaned {
            self.warn(&format!("Product {} is no longer in the catalog and is not counted", id));
        }
        println!(
            "\n  {} ({} item{})",
            style(&cart.total_label).bold(),
            cart.item_count,
            if cart.item_count == 1 { "" } else { "s" }
        );
    }

    /// Render the category selector options.
    pub fn category_list(&self, options: &[CategoryOption]) {
        if self.json {
            self.json(&options);
            return;
        }
        for option in options {
            let marker = if option.selected { style("●").green() } else { style("○").dim() };
            println!("  {} {:<20} {}", marker, option.label, style(&option.value).dim());
        }
    }

    fn title_width(&self) -> usize {
        let fixed = ID_WIDTH + CATEGORY_WIDTH + PRICE_WIDTH + 10;
        self.term_width().saturating_sub(fixed).clamp(20, 60)
    }
}

/// Notice shown above a cart with no priced lines.
fn cart_status(cart: &CartView) -> Option<&'static str> {
    if !cart.is_empty() {
        None
    } else if cart.item_count == 0 {
        Some("Your cart is empty.")
    } else {
        Some("None of the items in your cart are in the current catalog.")
    }
}

/// Cut `text` to at most `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
