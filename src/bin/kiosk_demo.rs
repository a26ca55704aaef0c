//! CLI tool that runs the kiosk's worked examples against the configured data.
//!
//! Prints:
//! - the longest dinosaur, a description, and dinosaurs alive at two epochs
//! - the same queries over a seeded, generated dinosaur dataset
//! - room lookups for a dinosaur and a room's connections
//! - two single-ticket prices and a full receipt, plus the error cases

use dino_museum_kiosk::config::KioskConfig;
use dino_museum_kiosk::data;
use dino_museum_kiosk::dinosaurs::{dinosaur_description, dinosaurs_alive_mya, longest_dinosaur};
use dino_museum_kiosk::models::ticket::TicketInfo;
use dino_museum_kiosk::rooms::{connected_room_names_by_id, room_by_dinosaur_name};
use dino_museum_kiosk::ticketing::{calculate_ticket_price, purchase_tickets};
use dino_museum_kiosk::KioskResult;
use std::fmt::Display;
use tracing::{info, warn};

/// Size and seed of the generated dataset shown alongside the museum's own.
const SYNTHETIC_COUNT: usize = 100;
const SYNTHETIC_SEED: u64 = 42;

fn show<T: Display>(label: &str, result: KioskResult<T>) {
    match result {
        Ok(value) => println!("  {label}: {value}"),
        Err(err) => println!("  {label}: {err}"),
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = KioskConfig::resolve_config_path(&args);
    let loaded = KioskConfig::from_file(&config_path);
    let log_level = loaded.as_ref().map_or("info", |config| config.log_level());
    dino_museum_kiosk::init_logging(log_level);

    let config = loaded.unwrap_or_else(|e| {
        warn!(config_file = %config_path, error = %format!("{e:#}"), "config_fallback_to_defaults");
        KioskConfig::default()
    });
    info!(config_file = %config.config_file(), data_dir = ?config.data_dir(), "config_loaded");

    let museum = data::load(&config)?;

    println!("=== DINOSAURS ===");
    match longest_dinosaur(&museum.dinosaurs) {
        Some(longest) => println!("  Longest: {} ({:.2} ft)", longest.name, longest.length_in_feet),
        None => println!("  Longest: (no dinosaurs)"),
    }
    show("U9vuZmgKwUr", dinosaur_description(&museum.dinosaurs, "U9vuZmgKwUr"));
    show("incorrect-id", dinosaur_description(&museum.dinosaurs, "incorrect-id"));
    println!("  Alive 150 mya: {:?}", dinosaurs_alive_mya(&museum.dinosaurs, 150.0, None));
    println!("  Alive 65 mya (name): {:?}", dinosaurs_alive_mya(&museum.dinosaurs, 65.0, Some("name")));

    let synthetic = data::generate_dinosaurs(SYNTHETIC_COUNT, SYNTHETIC_SEED);
    if let Some(longest) = longest_dinosaur(&synthetic) {
        println!(
            "  Longest of {} generated: {} ({:.2} ft)",
            synthetic.len(),
            longest.name,
            longest.length_in_feet
        );
    }
    println!(
        "  Generated alive 100 mya: {}",
        dinosaurs_alive_mya(&synthetic, 100.0, None).len()
    );
    println!();

    println!("=== ROOMS ===");
    show(
        "Tyrannosaurus",
        room_by_dinosaur_name(&museum.dinosaurs, &museum.rooms, "Tyrannosaurus"),
    );
    show(
        "Pterodactyl",
        room_by_dinosaur_name(&museum.dinosaurs, &museum.rooms, "Pterodactyl"),
    );
    show(
        "A6QaYdyKra",
        connected_room_names_by_id(&museum.rooms, "A6QaYdyKra").map(|names| names.join(", ")),
    );
    println!();

    println!("=== TICKETS ===");
    let examples = [
        TicketInfo::new("general", "adult"),
        TicketInfo::new("membership", "child").with_extras(["movie"]),
        TicketInfo::new("general", "kid").with_extras(["movie"]),
    ];
    for ticket in &examples {
        show(
            &format!("{}/{}", ticket.ticket_type, ticket.entrant_type),
            calculate_ticket_price(&museum.tickets, ticket),
        );
    }
    println!();

    let purchases = vec![
        TicketInfo::new("general", "adult").with_extras(["movie", "terrace"]),
        TicketInfo::new("general", "senior").with_extras(["terrace"]),
        TicketInfo::new("general", "child").with_extras(["education", "movie", "terrace"]),
        TicketInfo::new("general", "child").with_extras(["education", "movie", "terrace"]),
    ];
    match purchase_tickets(&museum.tickets, &purchases) {
        Ok(receipt) => println!("{receipt}"),
        Err(err) => println!("{err}"),
    }
    println!();

    let rejected = vec![TicketInfo::new("discount", "adult").with_extras(["movie", "terrace"])];
    match purchase_tickets(&museum.tickets, &rejected) {
        Ok(receipt) => println!("{receipt}"),
        Err(err) => println!("{err}"),
    }

    Ok(())
}
