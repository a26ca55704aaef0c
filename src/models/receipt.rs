use super::ticket::TicketInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First line of every receipt.
pub const RECEIPT_HEADER: &str = "Thank you for visiting the Dinosaur Museum!";
/// Rule printed under the header and above the total.
pub const RECEIPT_SEPARATOR: &str = "-------------------------------------------";

/// One purchased ticket on a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    /// Entrant type as purchased (e.g., "adult").
    pub entrant_type: String,
    /// Description of the admission type (e.g., "General Admission").
    pub ticket_description: String,
    /// Ticket price including extras.
    pub price_in_cents: u64,
    /// Descriptions of the purchased extras, in purchase order.
    pub extra_descriptions: Vec<String>,
}

/// A batch of purchased tickets and their total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub total_in_cents: u64,
}

impl Receipt {
    pub fn push(&mut self, line: ReceiptLine) {
        self.total_in_cents = self.total_in_cents.saturating_add(line.price_in_cents);
        self.lines.push(line);
    }
}

/// API request body for the /api/receipt endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptRequest {
    /// Tickets to purchase, in receipt order.
    pub purchases: Vec<TicketInfo>,
}

/// Render cents as dollars with two decimals (e.g., 17500 -> "175.00").
pub fn format_dollars(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Uppercase only the first character ("adult" -> "Adult").
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: ${}",
            capitalize(&self.entrant_type),
            self.ticket_description,
            format_dollars(self.price_in_cents)
        )?;
        if !self.extra_descriptions.is_empty() {
            write!(f, " ({})", self.extra_descriptions.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RECEIPT_HEADER}")?;
        writeln!(f, "{RECEIPT_SEPARATOR}")?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{RECEIPT_SEPARATOR}")?;
        write!(f, "TOTAL: ${}", format_dollars(self.total_in_cents))
    }
}
