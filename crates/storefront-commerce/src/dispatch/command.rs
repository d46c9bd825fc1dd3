//! Typed commands and the raw intents they are parsed from.

use std::fmt;

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A user action the engine understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Category selector changed (`"all"` or a category name).
    SelectCategory(String),
    /// Sort selector changed (`"asc"`, `"desc"`, anything else is a no-op).
    SelectSort(String),
    AddToCart(ProductId),
    IncreaseQuantity(ProductId),
    DecreaseQuantity(ProductId),
    RemoveFromCart(ProductId),
    /// Fetch the catalog again from the source.
    Reload,
}

impl Command {
    /// Map a raw intent to a command.
    ///
    /// Returns `None` for unknown actions, a missing value, or an id that
    /// is not a number.
    pub fn from_intent(intent: &Intent) -> Option<Self> {
        let value = intent.value.as_deref();
        let id = || value.and_then(|v| v.parse::<ProductId>().ok());

        match intent.action.as_str() {
            "category" | "filter" => value.map(|v| Command::SelectCategory(v.to_string())),
            "sort" => value.map(|v| Command::SelectSort(v.to_string())),
            "add" => id().map(Command::AddToCart),
            "increase" | "inc" | "+" => id().map(Command::IncreaseQuantity),
            "decrease" | "dec" | "-" => id().map(Command::DecreaseQuantity),
            "remove" | "rm" => id().map(Command::RemoveFromCart),
            "reload" => Some(Command::Reload),
            _ => None,
        }
    }

    /// Short action name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectCategory(_) => "select_category",
            Command::SelectSort(_) => "select_sort",
            Command::AddToCart(_) => "add_to_cart",
            Command::IncreaseQuantity(_) => "increase_quantity",
            Command::DecreaseQuantity(_) => "decrease_quantity",
            Command::RemoveFromCart(_) => "remove_from_cart",
            Command::Reload => "reload",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SelectCategory(v) | Command::SelectSort(v) => {
                write!(f, "{}({})", self.name(), v)
            }
            Command::AddToCart(id)
            | Command::IncreaseQuantity(id)
            | Command::DecreaseQuantity(id)
            | Command::RemoveFromCart(id) => write!(f, "{}({})", self.name(), id),
            Command::Reload => write!(f, "{}", self.name()),
        }
    }
}

/// An untyped action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub action: String,
    pub value: Option<String>,
}

impl Intent {
    pub fn new(action: impl Into<String>, value: Option<String>) -> Self {
        Self {
            action: action.into(),
            value,
        }
    }

    /// Parse a line like `add 3` or `category men's clothing`.
    ///
    /// The first word is the action (lower-cased); the rest of the line,
    /// trimmed, is the value. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (action, rest) = match line.split_once(char::is_whitespace) {
            Some((action, rest)) => (action, rest.trim()),
            None => (line, ""),
        };
        let value = (!rest.is_empty()).then(|| rest.to_string());
        Some(Self::new(action.to_lowercase(), value))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.action, value),
            None => write!(f, "{}", self.action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Command> {
        Intent::parse_line(line).and_then(|i| Command::from_intent(&i))
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            Intent::parse_line("  category   men's clothing "),
            Some(Intent::new("category", Some("men's clothing".to_string())))
        );
        assert_eq!(Intent::parse_line("RELOAD"), Some(Intent::new("reload", None)));
        assert_eq!(Intent::parse_line("   "), None);
        assert_eq!(Intent::parse_line("# add 1"), None);
    }

    #[test]
    fn test_commands_from_intents() {
        assert_eq!(parse("add 3"), Some(Command::AddToCart(ProductId::new(3))));
        assert_eq!(parse("+ 3"), Some(Command::IncreaseQuantity(ProductId::new(3))));
        assert_eq!(parse("dec 3"), Some(Command::DecreaseQuantity(ProductId::new(3))));
        assert_eq!(parse("rm 3"), Some(Command::RemoveFromCart(ProductId::new(3))));
        assert_eq!(parse("sort desc"), Some(Command::SelectSort("desc".to_string())));
        assert_eq!(
            parse("category jewelery"),
            Some(Command::SelectCategory("jewelery".to_string()))
        );
        assert_eq!(parse("reload"), Some(Command::Reload));
    }

    #[test]
    fn test_unknown_or_malformed_intents() {
        assert_eq!(parse("checkout"), None);
        assert_eq!(parse("add"), None);
        assert_eq!(parse("add three"), None);
        assert_eq!(parse("sort"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::AddToCart(ProductId::new(5)).to_string(), "add_to_cart(5)");
        assert_eq!(Command::Reload.to_string(), "reload");
        assert_eq!(Intent::new("add", Some("5".into())).to_string(), "add 5");
    }
}
