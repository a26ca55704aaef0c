//! Domain models for the museum kiosk.
//!
//! These types are shared across all modules: data, dinosaurs, rooms, and ticketing.

pub mod dinosaur;
pub mod room;
pub mod ticket;
pub mod receipt;
