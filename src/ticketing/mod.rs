/// Ticketing — single-ticket pricing and batch receipts.

pub mod pricing;
pub mod receipt;

pub use pricing::calculate_ticket_price;
pub use receipt::{build_receipt, purchase_tickets};
