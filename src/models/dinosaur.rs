use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Conversion factor used for every length shown to visitors.
pub const FEET_PER_METER: f64 = 3.281;

/// A dinosaur on display (or on file) at the museum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    /// Unique identifier (e.g., "WHQcpcOj0G").
    pub dinosaur_id: String,
    /// Common name. Not guaranteed unique.
    pub name: String,
    /// Pronunciation guide (e.g., "DRAY-ko-rex").
    pub pronunciation: String,
    /// Literal meaning of the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning_of_name: Option<String>,
    /// Diet (e.g., "herbivorous").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    /// Body length in meters.
    pub length_in_meters: f64,
    /// Geological period (e.g., "Late Cretaceous").
    pub period: String,
    /// Millions of years ago: `[first_appeared]` or `[start, end]`.
    pub mya: Vec<f64>,
    /// Short fact sheet shown on the kiosk.
    pub info: String,
}

/// The window in which a dinosaur is known to have lived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lifespan {
    /// Only the epoch of first appearance is known.
    FirstAppeared(f64),
    /// Lived from `start` down to `end` million years ago (`start >= end`).
    Range { start: f64, end: f64 },
    /// `mya` has neither one nor two entries.
    Unknown,
}

impl Lifespan {
    /// Returns true if a dinosaur with this lifespan was alive `mya` million years ago.
    ///
    /// A single epoch also matches one million years after it.
    pub fn includes(&self, mya: f64) -> bool {
        match *self {
            Lifespan::FirstAppeared(first) => mya == first || mya == first - 1.0,
            Lifespan::Range { start, end } => end <= mya && mya <= start,
            Lifespan::Unknown => false,
        }
    }
}

impl Dinosaur {
    pub fn lifespan(&self) -> Lifespan {
        match self.mya.as_slice() {
            [first] => Lifespan::FirstAppeared(*first),
            [start, end] => Lifespan::Range {
                start: *start,
                end: *end,
            },
            _ => Lifespan::Unknown,
        }
    }

    /// First `mya` entry, whether it is a single epoch or the start of a range.
    pub fn first_appearance(&self) -> Option<f64> {
        self.mya.first().copied()
    }

    pub fn length_in_feet(&self) -> f64 {
        self.length_in_meters * FEET_PER_METER
    }

    /// Look up a field by its camelCase data-file name (e.g., "name", "diet").
    ///
    /// Returns `None` for unknown keys and for optional fields the record lacks.
    /// Whole numbers come back as integers, as written in the data files.
    pub fn field(&self, key: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut fields)) => fields.remove(key).map(whole_numbers_as_integers),
            _ => None,
        }
    }
}

/// Rewrite `12.0` as `12`, recursing into arrays.
fn whole_numbers_as_integers(value: Value) -> Value {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(float)
                if number.is_f64() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 =>
            {
                Value::from(float as i64)
            }
            _ => Value::Number(number),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(whole_numbers_as_integers).collect()),
        other => other,
    }
}

/// Name and length of the longest dinosaur in a collection.
///
/// Serializes as a single-entry object, e.g. `{"Brachiosaurus": 98.43}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DinosaurLength {
    pub name: String,
    pub length_in_feet: f64,
}

impl Serialize for DinosaurLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.length_in_feet)?;
        map.end()
    }
}

/// API request body for the /api/dinosaurs endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "query", rename_all = "camelCase")]
pub enum DinosaurQuery {
    /// Longest dinosaur in the collection.
    Longest,
    /// Kiosk description of one dinosaur.
    Description { id: String },
    /// Dinosaurs alive at an epoch, optionally projected onto one field.
    AliveMya {
        mya: f64,
        #[serde(default)]
        key: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dinosaur_with_mya(mya: Vec<f64>) -> Dinosaur {
        Dinosaur {
            dinosaur_id: "test-id".to_string(),
            name: "Testosaurus".to_string(),
            pronunciation: "TEST-oh-sore-us".to_string(),
            meaning_of_name: None,
            diet: Some("omnivorous".to_string()),
            length_in_meters: 10.0,
            period: "Late Jurassic".to_string(),
            mya,
            info: "A dinosaur used in tests.".to_string(),
        }
    }

    #[test]
    fn test_single_epoch_matches_itself_and_one_less() {
        let lifespan = dinosaur_with_mya(vec![29.0]).lifespan();
        assert!(lifespan.includes(29.0));
        assert!(lifespan.includes(28.0));
        assert!(!lifespan.includes(30.0));
        assert!(!lifespan.includes(27.0));
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let lifespan = dinosaur_with_mya(vec![155.0, 150.0]).lifespan();
        assert!(lifespan.includes(155.0));
        assert!(lifespan.includes(152.5));
        assert!(lifespan.includes(150.0));
        assert!(!lifespan.includes(149.0));
        assert!(!lifespan.includes(156.0));
    }

    #[test]
    fn test_other_arity_never_matches() {
        assert_eq!(dinosaur_with_mya(vec![]).lifespan(), Lifespan::Unknown);
        let lifespan = dinosaur_with_mya(vec![100.0, 90.0, 80.0]).lifespan();
        assert!(!lifespan.includes(90.0));
    }

    #[test]
    fn test_field_lookup_uses_data_file_names() {
        let dinosaur = dinosaur_with_mya(vec![66.0]);
        assert_eq!(dinosaur.field("name"), Some(Value::from("Testosaurus")));
        assert_eq!(dinosaur.field("lengthInMeters"), Some(Value::from(10)));
        assert_eq!(dinosaur.field("diet"), Some(Value::from("omnivorous")));
        assert_eq!(dinosaur.field("meaningOfName"), None);
        assert_eq!(dinosaur.field("unknown-key"), None);
    }

    #[test]
    fn test_field_keeps_fractional_numbers() {
        let mut dinosaur = dinosaur_with_mya(vec![77.5]);
        dinosaur.length_in_meters = 22.8;
        assert_eq!(dinosaur.field("lengthInMeters"), Some(Value::from(22.8)));
        assert_eq!(dinosaur.field("mya"), Some(serde_json::json!([77.5])));

        dinosaur.mya = vec![156.0, 144.0];
        assert_eq!(dinosaur.field("mya"), Some(serde_json::json!([156, 144])));
    }

    #[test]
    fn test_query_bodies() {
        let query: DinosaurQuery =
            serde_json::from_str(r#"{ "query": "aliveMya", "mya": 65, "key": "name" }"#).unwrap();
        assert_eq!(
            query,
            DinosaurQuery::AliveMya {
                mya: 65.0,
                key: Some("name".to_string())
            }
        );

        let query: DinosaurQuery = serde_json::from_str(r#"{ "query": "longest" }"#).unwrap();
        assert_eq!(query, DinosaurQuery::Longest);
    }

    #[test]
    fn test_longest_serializes_as_single_entry_object() {
        let longest = DinosaurLength {
            name: "Brachiosaurus".to_string(),
            length_in_feet: 98.5,
        };
        let json = serde_json::to_value(&longest).unwrap();
        assert_eq!(json, serde_json::json!({ "Brachiosaurus": 98.5 }));
    }
}
