//! Receipt generation for a batch of ticket purchases.
//!
//! The batch is all-or-nothing: the first purchase that cannot be priced
//! becomes the whole result and no partial receipt is produced.

use super::pricing::price_ticket;
use crate::error::KioskResult;
use crate::models::receipt::{Receipt, ReceiptLine};
use crate::models::ticket::{TicketData, TicketInfo};
use tracing::debug;

/// Price every purchase and collect the receipt lines and total.
pub fn build_receipt(ticket_data: &TicketData, purchases: &[TicketInfo]) -> KioskResult<Receipt> {
    let mut receipt = Receipt::default();

    for (index, purchase) in purchases.iter().enumerate() {
        let ticket = price_ticket(ticket_data, purchase).map_err(|err| {
            debug!(purchase = index, error = %err, "purchase_rejected");
            err
        })?;

        receipt.push(ReceiptLine {
            entrant_type: purchase.entrant_type.clone(),
            ticket_description: ticket.admission.description.clone(),
            price_in_cents: ticket.price_in_cents,
            extra_descriptions: ticket
                .extras
                .iter()
                .map(|extra| extra.description.clone())
                .collect(),
        });
    }

    Ok(receipt)
}

/// Render the receipt text for a batch of purchases.
pub fn purchase_tickets(ticket_data: &TicketData, purchases: &[TicketInfo]) -> KioskResult<String> {
    build_receipt(ticket_data, purchases).map(|receipt| receipt.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::example_dataset;
    use crate::error::KioskError;

    fn tickets() -> TicketData {
        example_dataset().unwrap().tickets
    }

    fn example_purchases() -> Vec<TicketInfo> {
        vec![
            TicketInfo::new("general", "adult").with_extras(["movie", "terrace"]),
            TicketInfo::new("general", "senior").with_extras(["terrace"]),
            TicketInfo::new("general", "child").with_extras(["education", "movie", "terrace"]),
            TicketInfo::new("general", "child").with_extras(["education", "movie", "terrace"]),
        ]
    }

    #[test]
    fn test_full_receipt_text() {
        let receipt = purchase_tickets(&tickets(), &example_purchases()).unwrap();
        let expected = "Thank you for visiting the Dinosaur Museum!\n-------------------------------------------\nAdult General Admission: $50.00 (Movie Access, Terrace Access)\nSenior General Admission: $35.00 (Terrace Access)\nChild General Admission: $45.00 (Education Access, Movie Access, Terrace Access)\nChild General Admission: $45.00 (Education Access, Movie Access, Terrace Access)\n-------------------------------------------\nTOTAL: $175.00";
        assert_eq!(receipt, expected);
    }

    #[test]
    fn test_receipt_shape() {
        let receipt = purchase_tickets(&tickets(), &example_purchases()).unwrap();
        let lines: Vec<&str> = receipt.lines().collect();
        // header + separator + 4 tickets + separator + total
        assert_eq!(lines.len(), 8);
        assert_eq!(lines.last(), Some(&"TOTAL: $175.00"));
    }

    #[test]
    fn test_structured_receipt_total() {
        let receipt = build_receipt(&tickets(), &example_purchases()).unwrap();
        assert_eq!(receipt.lines.len(), 4);
        assert_eq!(receipt.total_in_cents, 17500);
        assert_eq!(receipt.lines[1].extra_descriptions, vec!["Terrace Access"]);
    }

    #[test]
    fn test_membership_line_without_extras() {
        let purchases = vec![TicketInfo::new("membership", "senior")];
        let receipt = purchase_tickets(&tickets(), &purchases).unwrap();
        assert!(
            receipt.contains("\nSenior Membership Admission: $23.00\n"),
            "{receipt}"
        );
        assert!(receipt.ends_with("TOTAL: $23.00"));
    }

    #[test]
    fn test_invalid_ticket_type_returns_only_the_error() {
        let purchases = vec![TicketInfo::new("discount", "adult").with_extras(["movie", "terrace"])];
        let err = purchase_tickets(&tickets(), &purchases).unwrap_err();
        assert_eq!(err.to_string(), "Ticket type 'discount' cannot be found.");
    }

    #[test]
    fn test_first_failing_purchase_wins() {
        let mut purchases = example_purchases();
        purchases.insert(1, TicketInfo::new("general", "kid"));
        purchases.push(TicketInfo::new("general", "adult").with_extras(["gift-shop"]));
        let err = purchase_tickets(&tickets(), &purchases).unwrap_err();
        assert_eq!(err, KioskError::EntrantTypeNotFound("kid".to_string()));
    }
}
