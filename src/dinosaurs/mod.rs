/// Dinosaur queries — longest dinosaur, fact-sheet descriptions, and
/// dinosaurs alive at a given epoch.

use crate::error::{KioskError, KioskResult};
use crate::models::dinosaur::{Dinosaur, DinosaurLength};
use serde_json::{Map, Value};
use tracing::debug;

/// Find the longest dinosaur and report its length in feet.
///
/// Returns `None` for an empty collection. Ties go to the first dinosaur in order.
pub fn longest_dinosaur(dinosaurs: &[Dinosaur]) -> Option<DinosaurLength> {
    let mut remaining = dinosaurs.iter();
    let mut longest = remaining.next()?;

    for dinosaur in remaining {
        if dinosaur.length_in_meters > longest.length_in_meters {
            longest = dinosaur;
        }
    }

    Some(DinosaurLength {
        name: longest.name.clone(),
        length_in_feet: longest.length_in_feet(),
    })
}

/// Longest dinosaur as a `{name: feet}` object; empty when there are no dinosaurs.
pub fn longest_dinosaur_entry(dinosaurs: &[Dinosaur]) -> Map<String, Value> {
    let mut entry = Map::new();
    if let Some(longest) = longest_dinosaur(dinosaurs) {
        entry.insert(longest.name, Value::from(longest.length_in_feet));
    }
    entry
}

/// Kiosk description of the dinosaur with the given id.
///
/// If several records share the id, the first one is described.
pub fn dinosaur_description(dinosaurs: &[Dinosaur], id: &str) -> KioskResult<String> {
    let dinosaur = dinosaurs
        .iter()
        .find(|dinosaur| dinosaur.dinosaur_id == id)
        .ok_or_else(|| {
            debug!(dinosaur_id = %id, "dinosaur_lookup_miss");
            KioskError::DinosaurIdNotFound(id.to_string())
        })?;

    Ok(describe(dinosaur))
}

fn describe(dinosaur: &Dinosaur) -> String {
    // Loaded data always has at least one mya value.
    let mya = dinosaur.first_appearance().unwrap_or_default();
    format!(
        "{} ({})\n{} It lived in the {} period, over {} million years ago.",
        dinosaur.name, dinosaur.pronunciation, dinosaur.info, dinosaur.period, mya
    )
}

/// Dinosaurs alive `mya` million years ago, in input order.
///
/// Each match yields the value of `key` when the record has that field,
/// otherwise its `dinosaurId`.
pub fn dinosaurs_alive_mya(dinosaurs: &[Dinosaur], mya: f64, key: Option<&str>) -> Vec<Value> {
    dinosaurs
        .iter()
        .filter(|dinosaur| dinosaur.lifespan().includes(mya))
        .map(|dinosaur| {
            key.and_then(|key| dinosaur.field(key))
                .unwrap_or_else(|| Value::String(dinosaur.dinosaur_id.clone()))
        })
        .collect()
}
