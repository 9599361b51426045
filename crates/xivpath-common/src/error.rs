//! Error types for xivpath-common.

use thiserror::Error;

/// Error returned when a string code has no entry in its lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Gender-race code not in the table (e.g. `"0102"`).
    #[error("unknown gender-race code: {0:?}")]
    UnknownGenderRace(String),

    /// Equipment slot suffix not in the table.
    #[error("unknown equip slot suffix: {0:?}")]
    UnknownEquipSlot(String),

    /// Body slot folder name not in the table.
    #[error("unknown body slot: {0:?}")]
    UnknownBodySlot(String),

    /// Customization suffix not in the table.
    #[error("unknown customization suffix: {0:?}")]
    UnknownCustomization(String),

    /// Client language code not recognized.
    #[error("unknown language code: {0:?}")]
    UnknownLanguage(String),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
