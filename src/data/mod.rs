//! Museum data loading.
//!
//! The kiosk reads three collections: dinosaurs, rooms, and ticket prices.
//! They come either from the example data bundled into the binary or from a
//! directory holding `dinosaurs.json`, `rooms.json`, and `tickets.json`.
//! Every load is validated before the data reaches a query.
//!
//! A seeded generator produces synthetic dinosaurs for property tests and demos.

use crate::config::KioskConfig;
use crate::error::DataError;
use crate::models::dinosaur::Dinosaur;
use crate::models::room::Room;
use crate::models::ticket::TicketData;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

const DINOSAURS_JSON: &str = include_str!("../../data/dinosaurs.json");
const ROOMS_JSON: &str = include_str!("../../data/rooms.json");
const TICKETS_JSON: &str = include_str!("../../data/tickets.json");

pub const DINOSAURS_FILE: &str = "dinosaurs.json";
pub const ROOMS_FILE: &str = "rooms.json";
pub const TICKETS_FILE: &str = "tickets.json";

/// Geological periods used by the synthetic generator, with their mya bounds.
const PERIODS: [(&str, f64, f64); 4] = [
    ("Late Triassic", 237.0, 201.0),
    ("Late Jurassic", 163.0, 145.0),
    ("Early Cretaceous", 145.0, 100.0),
    ("Late Cretaceous", 100.0, 66.0),
];

/// The three read-only collections every kiosk query works from.
#[derive(Debug, Clone)]
pub struct MuseumData {
    pub dinosaurs: Vec<Dinosaur>,
    pub rooms: Vec<Room>,
    pub tickets: TicketData,
}

impl MuseumData {
    /// Parse and validate the three collections from JSON text.
    pub fn from_json(dinosaurs: &str, rooms: &str, tickets: &str) -> Result<Self, DataError> {
        let data = MuseumData {
            dinosaurs: parse(DINOSAURS_FILE, dinosaurs)?,
            rooms: parse(ROOMS_FILE, rooms)?,
            tickets: parse(TICKETS_FILE, tickets)?,
        };
        data.validate()?;
        Ok(data)
    }

    /// Check the invariants the queries rely on.
    ///
    /// - `mya` holds one value, or two values with start >= end
    /// - lengths are positive
    /// - dinosaur ids and room ids are unique
    pub fn validate(&self) -> Result<(), DataError> {
        let mut dinosaur_ids = HashSet::new();
        for dinosaur in &self.dinosaurs {
            let id = &dinosaur.dinosaur_id;
            if !dinosaur_ids.insert(id.as_str()) {
                return Err(DataError::invalid("dinosaur", id, "duplicate dinosaurId"));
            }
            match dinosaur.mya.as_slice() {
                [_] => {}
                [start, end] if start >= end => {}
                [start, end] => {
                    return Err(DataError::invalid(
                        "dinosaur",
                        id,
                        format!("mya range [{start}, {end}] starts after it ends"),
                    ));
                }
                other => {
                    return Err(DataError::invalid(
                        "dinosaur",
                        id,
                        format!("mya must have 1 or 2 values, found {}", other.len()),
                    ));
                }
            }
            if dinosaur.mya.iter().any(|v| *v <= 0.0) {
                return Err(DataError::invalid("dinosaur", id, "mya values must be positive"));
            }
            if dinosaur.length_in_meters <= 0.0 {
                return Err(DataError::invalid("dinosaur", id, "lengthInMeters must be positive"));
            }
        }

        let mut room_ids = HashSet::new();
        for room in &self.rooms {
            if !room_ids.insert(room.room_id.as_str()) {
                return Err(DataError::invalid("room", &room.room_id, "duplicate roomId"));
            }
        }

        Ok(())
    }
}

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<T, DataError> {
    serde_json::from_str(json).map_err(|source| DataError::Parse {
        name: name.to_string(),
        source,
    })
}

fn read(dir: &Path, file: &str) -> Result<String, DataError> {
    let path = dir.join(file);
    fs::read_to_string(&path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Get the example dataset bundled with the crate.
///
/// This is the canonical dataset used by the demo, the API handlers, and tests.
pub fn example_dataset() -> Result<MuseumData, DataError> {
    MuseumData::from_json(DINOSAURS_JSON, ROOMS_JSON, TICKETS_JSON)
}

/// Load the three collections from a directory of JSON files.
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<MuseumData, DataError> {
    let dir = dir.as_ref();
    let data = MuseumData::from_json(
        &read(dir, DINOSAURS_FILE)?,
        &read(dir, ROOMS_FILE)?,
        &read(dir, TICKETS_FILE)?,
    )?;
    info!(
        dir = %dir.display(),
        dinosaurs = data.dinosaurs.len(),
        rooms = data.rooms.len(),
        ticket_types = data.tickets.admissions.len(),
        "museum_data_loaded"
    );
    Ok(data)
}

/// Load the data named by the configuration, or the bundled example data.
pub fn load(config: &KioskConfig) -> Result<MuseumData, DataError> {
    match config.data_dir() {
        Some(dir) => load_from_dir(dir),
        None => example_dataset(),
    }
}

/// Generate `count` synthetic dinosaurs with a reproducible distribution.
///
/// - ~25% have a single `mya` value, the rest a `[start, end]` range
/// - lengths between 1 and 40 meters, rounded to centimeters
/// - ids are `dino_0001`, `dino_0002`, ...
pub fn generate_dinosaurs(count: usize, seed: u64) -> Vec<Dinosaur> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dinosaurs = Vec::with_capacity(count);

    for i in 0..count {
        let (period, oldest, youngest) = PERIODS[rng.gen_range(0..PERIODS.len())];
        let start = round_to_tenth(rng.gen_range(youngest..oldest));
        let mya = if rng.gen::<f64>() < 0.25 {
            vec![start]
        } else {
            let end = round_to_tenth(rng.gen_range(youngest..=start));
            vec![start, end]
        };
        let length_in_meters = (rng.gen_range(1.0..40.0_f64) * 100.0).round() / 100.0;

        dinosaurs.push(Dinosaur {
            dinosaur_id: format!("dino_{:04}", i + 1),
            name: format!("Synthosaurus {}", i + 1),
            pronunciation: "SIN-tho-sore-us".to_string(),
            meaning_of_name: None,
            diet: None,
            length_in_meters,
            period: period.to_string(),
            mya,
            info: format!("A generated {period} dinosaur."),
        });
    }

    dinosaurs
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_dataset_loads() {
        let data = example_dataset().unwrap();
        assert_eq!(data.dinosaurs.len(), 11);
        assert_eq!(data.rooms.len(), 7);
        assert_eq!(data.tickets.admissions.len(), 2);
        assert_eq!(data.tickets.extras.len(), 3);
    }

    #[test]
    fn test_example_dataset_keeps_extras_out_of_admissions() {
        let data = example_dataset().unwrap();
        assert!(!data.tickets.admissions.contains_key("extras"));
        assert!(data.tickets.extras.contains_key("movie"));
    }

    #[test]
    fn test_rejects_duplicate_dinosaur_ids() {
        let mut data = example_dataset().unwrap();
        let copy = data.dinosaurs[0].clone();
        data.dinosaurs.push(copy);
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate dinosaurId"), "{err}");
    }

    #[test]
    fn test_rejects_bad_mya() {
        let mut data = example_dataset().unwrap();
        data.dinosaurs[0].mya = vec![100.0, 120.0];
        assert!(matches!(data.validate(), Err(DataError::Invalid { .. })));

        data.dinosaurs[0].mya = vec![];
        assert!(matches!(data.validate(), Err(DataError::Invalid { .. })));

        data.dinosaurs[0].mya = vec![150.0, 140.0, 130.0];
        assert!(matches!(data.validate(), Err(DataError::Invalid { .. })));
    }

    #[test]
    fn test_rejects_duplicate_room_ids() {
        let mut data = example_dataset().unwrap();
        let copy = data.rooms[1].clone();
        data.rooms.push(copy);
        assert!(matches!(data.validate(), Err(DataError::Invalid { entity: "room", .. })));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = MuseumData::from_json("not json", ROOMS_JSON, TICKETS_JSON).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse dinosaurs.json"), "{err}");
    }

    #[test]
    fn test_generated_dinosaurs_are_valid() {
        let data = MuseumData {
            dinosaurs: generate_dinosaurs(200, 7),
            rooms: Vec::new(),
            tickets: TicketData::default(),
        };
        assert_eq!(data.dinosaurs.len(), 200);
        data.validate().unwrap();
    }

    #[test]
    fn test_generator_is_deterministic() {
        let d1 = generate_dinosaurs(50, 42);
        let d2 = generate_dinosaurs(50, 42);
        assert_eq!(d1, d2);
    }
}
