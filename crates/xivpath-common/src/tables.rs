//! Lookup table bundle.
//!
//! [`Tables`] gathers every string-code table the classifier consumes so a
//! parser can be built against the built-in game tables or an alternate
//! set. Tables are immutable once constructed.

use rustc_hash::FxHashMap;

use crate::file_type::{FileType, EXTENSIONS};
use crate::language::{Language, LANGUAGES};
use crate::object_type::{FolderRule, ObjectType, FOLDERS};
use crate::race::{GenderRace, GENDER_RACES};
use crate::slot::{BodySlot, CustomizationType, EquipSlot, BODY_SLOTS, CUSTOMIZATIONS, EQUIP_SLOTS};
use crate::{Error, Result};

/// String-code lookup tables used during classification and decoding.
#[derive(Debug, Clone)]
pub struct Tables {
    extensions: FxHashMap<String, FileType>,
    folders: FxHashMap<String, FolderRule>,
    gender_races: FxHashMap<String, GenderRace>,
    equip_slots: FxHashMap<String, EquipSlot>,
    body_slots: FxHashMap<String, BodySlot>,
    customizations: FxHashMap<String, CustomizationType>,
    languages: FxHashMap<String, Language>,
}

fn collect<T: Copy>(table: &[(&str, T)]) -> FxHashMap<String, T> {
    table.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

impl Tables {
    /// Create an empty table set. Every lookup misses.
    pub fn empty() -> Self {
        Self {
            extensions: FxHashMap::default(),
            folders: FxHashMap::default(),
            gender_races: FxHashMap::default(),
            equip_slots: FxHashMap::default(),
            body_slots: FxHashMap::default(),
            customizations: FxHashMap::default(),
            languages: FxHashMap::default(),
        }
    }

    /// Create the built-in game tables.
    pub fn builtin() -> Self {
        Self {
            extensions: collect(EXTENSIONS),
            folders: collect(FOLDERS),
            gender_races: collect(GENDER_RACES),
            equip_slots: collect(EQUIP_SLOTS),
            body_slots: collect(BODY_SLOTS),
            customizations: collect(CUSTOMIZATIONS),
            languages: collect(LANGUAGES),
        }
    }

    /// Add or replace an extension mapping. `ext` includes the leading dot.
    pub fn with_extension(mut self, ext: &str, file_type: FileType) -> Self {
        self.extensions.insert(ext.to_string(), file_type);
        self
    }

    /// Add or replace a first-segment folder rule.
    pub fn with_folder(mut self, first: &str, rule: FolderRule) -> Self {
        self.folders.insert(first.to_string(), rule);
        self
    }

    /// Add or replace a gender-race code.
    pub fn with_gender_race(mut self, code: &str, gender_race: GenderRace) -> Self {
        self.gender_races.insert(code.to_string(), gender_race);
        self
    }

    /// Remove a gender-race code.
    pub fn without_gender_race(mut self, code: &str) -> Self {
        self.gender_races.remove(code);
        self
    }

    /// Map an extension (with leading dot) to its file type.
    pub fn file_type(&self, ext: &str) -> FileType {
        self.extensions.get(ext).copied().unwrap_or_default()
    }

    /// Map the first two path segments to an object type.
    pub fn object_type(&self, first: &str, second: &str) -> ObjectType {
        self.folders
            .get(first)
            .map(|rule| rule.resolve(second))
            .unwrap_or_default()
    }

    /// Look up a four-digit gender-race code.
    pub fn gender_race(&self, code: &str) -> Result<GenderRace> {
        self.gender_races
            .get(code)
            .copied()
            .ok_or_else(|| Error::UnknownGenderRace(code.to_string()))
    }

    /// Look up an equipment slot suffix.
    pub fn equip_slot(&self, suffix: &str) -> Result<EquipSlot> {
        self.equip_slots
            .get(suffix)
            .copied()
            .ok_or_else(|| Error::UnknownEquipSlot(suffix.to_string()))
    }

    /// Look up a body slot folder name.
    pub fn body_slot(&self, name: &str) -> Result<BodySlot> {
        self.body_slots
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownBodySlot(name.to_string()))
    }

    /// Look up a customization suffix.
    pub fn customization(&self, suffix: &str) -> Result<CustomizationType> {
        self.customizations
            .get(suffix)
            .copied()
            .ok_or_else(|| Error::UnknownCustomization(suffix.to_string()))
    }

    /// Look up a two-letter language code.
    pub fn language(&self, code: &str) -> Option<Language> {
        self.languages.get(code).copied()
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookups() {
        let tables = Tables::builtin();
        assert_eq!(tables.file_type(".mtrl"), FileType::Material);
        assert_eq!(tables.file_type(".png"), FileType::Unknown);
        assert_eq!(tables.file_type(""), FileType::Unknown);
        assert_eq!(tables.object_type("chara", "weapon"), ObjectType::Weapon);
        assert_eq!(tables.object_type("ui", "uld"), ObjectType::Interface);
        assert_eq!(tables.object_type("sound", "bgm"), ObjectType::Unknown);
        assert_eq!(tables.gender_race("0101"), Ok(GenderRace::MidlanderMale));
        assert_eq!(tables.equip_slot("glv"), Ok(EquipSlot::Hands));
        assert_eq!(tables.body_slot("tail"), Ok(BodySlot::Tail));
        assert_eq!(tables.customization("etc"), Ok(CustomizationType::Etc));
        assert_eq!(tables.language("fr"), Some(Language::French));
    }

    #[test]
    fn test_empty_misses() {
        let tables = Tables::empty();
        assert_eq!(tables.file_type(".mdl"), FileType::Unknown);
        assert_eq!(tables.object_type("chara", "equipment"), ObjectType::Unknown);
        assert!(tables.gender_race("0101").is_err());
        assert_eq!(tables.language("en"), None);
    }

    #[test]
    fn test_overrides() {
        let tables = Tables::builtin()
            .with_extension(".png", FileType::Texture)
            .with_folder("sound", FolderRule::Fixed(ObjectType::Vfx))
            .without_gender_race("0101");
        assert_eq!(tables.file_type(".png"), FileType::Texture);
        assert_eq!(tables.object_type("sound", "bgm"), ObjectType::Vfx);
        assert_eq!(
            tables.gender_race("0101"),
            Err(Error::UnknownGenderRace("0101".to_string()))
        );
    }
}
