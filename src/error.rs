//! Error types for kiosk queries and data loading.
//!
//! Every query failure is a [`KioskError`] whose `Display` output is the exact
//! message shown to museum visitors, so callers branch on `Result` instead of
//! inspecting the shape of the returned value.

use thiserror::Error;

/// Failure of a dinosaur, room or ticketing query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KioskError {
    /// No dinosaur carries the requested `dinosaurId`.
    #[error("A dinosaur with an ID of '{0}' cannot be found.")]
    DinosaurIdNotFound(String),

    /// No dinosaur carries the requested name.
    #[error("Dinosaur with name '{0}' cannot be found.")]
    DinosaurNameNotFound(String),

    /// The dinosaur exists but no room lists it.
    #[error("Dinosaur with name '{0}' cannot be found in any rooms.")]
    DinosaurNotInAnyRoom(String),

    /// Unknown room id, either requested directly or referenced by `connectsTo`.
    #[error("Room with ID of '{0}' could not be found.")]
    RoomNotFound(String),

    /// The room has no `connectsTo` list at all.
    #[error("No connections found for the room.")]
    NoConnections,

    #[error("Ticket type '{0}' cannot be found.")]
    TicketTypeNotFound(String),

    #[error("Entrant type '{0}' cannot be found.")]
    EntrantTypeNotFound(String),

    #[error("Extra type '{0}' cannot be found.")]
    ExtraTypeNotFound(String),
}

/// Result alias used by every query in this crate.
pub type KioskResult<T> = Result<T, KioskError>;

/// Failure while reading or checking the museum's data files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },

    /// A record parsed but breaks a data invariant (arity, ordering, uniqueness).
    #[error("Invalid {entity} '{id}': {reason}")]
    Invalid {
        entity: &'static str,
        id: String,
        reason: String,
    },
}

impl DataError {
    pub fn invalid(entity: &'static str, id: impl Into<String>, reason: impl Into<String>) -> Self {
        DataError::Invalid {
            entity,
            id: id.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_kiosk_wording() {
        assert_eq!(
            KioskError::DinosaurIdNotFound("incorrect-id".into()).to_string(),
            "A dinosaur with an ID of 'incorrect-id' cannot be found."
        );
        assert_eq!(
            KioskError::DinosaurNotInAnyRoom("Protoceratops".into()).to_string(),
            "Dinosaur with name 'Protoceratops' cannot be found in any rooms."
        );
        assert_eq!(
            KioskError::NoConnections.to_string(),
            "No connections found for the room."
        );
        assert_eq!(
            KioskError::ExtraTypeNotFound("gift-shop".into()).to_string(),
            "Extra type 'gift-shop' cannot be found."
        );
    }

    #[test]
    fn test_invalid_data_error_display() {
        let err = DataError::invalid("dinosaur", "abc", "mya must have 1 or 2 values");
        assert_eq!(
            err.to_string(),
            "Invalid dinosaur 'abc': mya must have 1 or 2 values"
        );
    }
}
