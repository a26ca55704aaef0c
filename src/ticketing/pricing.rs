//! Single-ticket pricing.
//!
//! Validation runs in a fixed order so the visitor always sees the first
//! problem with their request:
//! 1. ticket type (never "extras")
//! 2. entrant type for that ticket type
//! 3. each extra, in purchase order

use crate::error::{KioskError, KioskResult};
use crate::models::ticket::{TicketData, TicketInfo, TicketOption};

/// A validated ticket with references back into the pricing table.
#[derive(Debug, Clone)]
pub(crate) struct PricedTicket<'a> {
    pub admission: &'a TicketOption,
    pub extras: Vec<&'a TicketOption>,
    pub price_in_cents: u64,
}

pub(crate) fn price_ticket<'a>(
    ticket_data: &'a TicketData,
    ticket_info: &TicketInfo,
) -> KioskResult<PricedTicket<'a>> {
    let entrant_type = ticket_info.entrant_type.as_str();

    let admission = ticket_data
        .admission(&ticket_info.ticket_type)
        .ok_or_else(|| KioskError::TicketTypeNotFound(ticket_info.ticket_type.clone()))?;

    let base_price = admission
        .price_for(entrant_type)
        .ok_or_else(|| KioskError::EntrantTypeNotFound(entrant_type.to_string()))?;

    let extras = ticket_info
        .extras
        .iter()
        .map(|name| {
            ticket_data
                .extra(name)
                .ok_or_else(|| KioskError::ExtraTypeNotFound(name.clone()))
        })
        .collect::<KioskResult<Vec<_>>>()?;

    let mut price_in_cents = base_price;
    for extra in &extras {
        // An extra without a price for this entrant cannot be sold to them.
        let extra_price = extra
            .price_for(entrant_type)
            .ok_or_else(|| KioskError::EntrantTypeNotFound(entrant_type.to_string()))?;
        price_in_cents = price_in_cents.saturating_add(extra_price);
    }

    Ok(PricedTicket {
        admission,
        extras,
        price_in_cents,
    })
}

/// Price of one ticket in cents: base admission plus every extra.
pub fn calculate_ticket_price(ticket_data: &TicketData, ticket_info: &TicketInfo) -> KioskResult<u64> {
    price_ticket(ticket_data, ticket_info).map(|ticket| ticket.price_in_cents)
}
