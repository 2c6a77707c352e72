use rocketshoes_core::domain::{Cart, CartItem};

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Trait for formatting CLI output
pub trait OutputFormatter: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn print_json(&self, value: &serde_json::Value);
}

/// Human-readable output formatter with checkmarks and indentation
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn success(&self, message: &str) {
        println!("\u{2713} {}", message);
    }
    fn error(&self, message: &str) {
        eprintln!("\u{2717} Erro: {}", message);
    }
    fn warn(&self, message: &str) {
        eprintln!("\u{26a0} Aviso: {}", message);
    }
    fn info(&self, message: &str) {
        println!("  {}", message);
    }
    fn print_json(&self, _value: &serde_json::Value) {
        // Human formatter doesn't print JSON
    }
}

/// JSON output formatter
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn success(&self, message: &str) {
        println!(
            "{}",
            serde_json::json!({"success": true, "message": message})
        );
    }
    fn error(&self, message: &str) {
        eprintln!(
            "{}",
            serde_json::json!({"success": false, "error": message})
        );
    }
    fn warn(&self, message: &str) {
        eprintln!(
            "{}",
            serde_json::json!({"level": "warning", "message": message})
        );
    }
    fn info(&self, _message: &str) {}
    fn print_json(&self, value: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string_pretty(value).unwrap_or_default()
        );
    }
}

/// Formatter that swallows everything, for `--quiet`
pub struct QuietFormatter;

impl OutputFormatter for QuietFormatter {
    fn success(&self, _message: &str) {}
    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
    fn warn(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn print_json(&self, _value: &serde_json::Value) {}
}

pub fn get_formatter(format: OutputFormat, quiet: bool) -> Box<dyn OutputFormatter> {
    match (format, quiet) {
        (_, true) => Box::new(QuietFormatter),
        (OutputFormat::Json, false) => Box::new(JsonFormatter),
        (OutputFormat::Human, false) => Box::new(HumanFormatter),
    }
}

/// Formats a price in Brazilian reais, e.g. `R$ 1.234,50`
pub fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

/// Renders the cart as JSON: items plus summary
pub fn cart_to_json(cart: &Cart) -> serde_json::Value {
    serde_json::json!({
        "items": cart,
        "summary": cart.summary(),
    })
}

/// One fixed-width row of the cart listing
pub fn cart_line(item: &CartItem) -> String {
    let title = item.title().unwrap_or("(sem nome)");
    let price = item
        .price()
        .map(format_brl)
        .unwrap_or_else(|| "-".to_string());
    format!(
        "#{:<4} {:<40} {:>3} x {:>12} = {:>12}",
        item.id,
        title,
        item.amount,
        price,
        format_brl(item.subtotal())
    )
}

/// Prints the cart as a table-like listing
pub fn print_cart(cart: &Cart, formatter: &dyn OutputFormatter) {
    if cart.is_empty() {
        formatter.info("Carrinho vazio");
        return;
    }

    for item in cart {
        formatter.info(&cart_line(item));
    }

    let summary = cart.summary();
    formatter.info("");
    formatter.info(&format!(
        "{} produto(s), {} unidade(s), total {}",
        summary.distinct_items,
        summary.total_units,
        format_brl(summary.subtotal)
    ));
}
