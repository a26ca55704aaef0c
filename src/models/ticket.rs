use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the add-on table in the ticket data file. Never a purchasable ticket type.
pub const EXTRAS_KEY: &str = "extras";

/// A priced admission type or add-on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketOption {
    /// Receipt description (e.g., "General Admission", "Movie Access").
    pub description: String,
    /// Price in cents by entrant type (e.g., "adult" -> 3000).
    pub price_in_cents: BTreeMap<String, u64>,
}

impl TicketOption {
    pub fn price_for(&self, entrant_type: &str) -> Option<u64> {
        self.price_in_cents.get(entrant_type).copied()
    }
}

/// The museum's pricing table.
///
/// In the data file, admission types and the reserved `"extras"` table are
/// siblings in one object; here `"extras"` is split into its own field so an
/// admission type can never be named `"extras"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TicketData {
    /// Add-ons by name (e.g., "movie", "terrace").
    #[serde(default)]
    pub extras: BTreeMap<String, TicketOption>,
    /// Admission types by name (e.g., "general", "membership").
    #[serde(flatten)]
    pub admissions: BTreeMap<String, TicketOption>,
}

impl TicketData {
    pub fn admission(&self, ticket_type: &str) -> Option<&TicketOption> {
        if ticket_type == EXTRAS_KEY {
            return None;
        }
        self.admissions.get(ticket_type)
    }

    pub fn extra(&self, name: &str) -> Option<&TicketOption> {
        self.extras.get(name)
    }
}

/// A single ticket purchase request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    /// Admission type (any key of the pricing table except "extras").
    pub ticket_type: String,
    /// Visitor category (e.g., "adult", "child", "senior").
    pub entrant_type: String,
    /// Add-ons, in the order they should appear on the receipt.
    #[serde(default)]
    pub extras: Vec<String>,
}

impl TicketInfo {
    pub fn new(ticket_type: impl Into<String>, entrant_type: impl Into<String>) -> Self {
        TicketInfo {
            ticket_type: ticket_type.into(),
            entrant_type: entrant_type.into(),
            extras: Vec::new(),
        }
    }

    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = extras.into_iter().map(Into::into).collect();
        self
    }
}
