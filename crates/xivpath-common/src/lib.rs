//! Common types for xivpath.
//!
//! This crate provides the closed enumerations and string-code tables the
//! path classifier is built on:
//!
//! - [`FileType`] - File category keyed by extension
//! - [`ObjectType`] - Asset category keyed by the leading path folders
//! - [`GenderRace`], [`Gender`], [`ModelRace`] - Four-digit model codes
//! - [`EquipSlot`], [`BodySlot`], [`CustomizationType`] - Slot suffixes
//! - [`Language`] - Localized icon folders
//! - [`Tables`] - The lookup tables bundled for injection

mod error;
mod file_type;
mod language;
mod object_type;
mod race;
mod slot;
mod tables;

pub use error::{Error, Result};
pub use file_type::{extension, FileType, EXTENSIONS};
pub use language::{Language, LANGUAGES};
pub use object_type::{FolderRule, ObjectType, FOLDERS};
pub use race::{Gender, GenderRace, ModelRace, GENDER_RACES};
pub use slot::{BodySlot, CustomizationType, EquipSlot, BODY_SLOTS, CUSTOMIZATIONS, EQUIP_SLOTS};
pub use tables::Tables;
