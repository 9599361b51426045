//! Equipment, body and customization slots.
//!
//! Each slot enum is backed by a static string table matching the short
//! codes the game uses in file and folder names.

use std::str::FromStr;

use crate::Error;

/// Equipment slot, encoded as a three-letter file name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipSlot {
    Head,
    Body,
    Hands,
    Legs,
    Feet,
    Ears,
    Neck,
    Wrists,
    RFinger,
    LFinger,
}

/// Built-in equip slot suffix table.
pub static EQUIP_SLOTS: &[(&str, EquipSlot)] = &[
    ("met", EquipSlot::Head),
    ("top", EquipSlot::Body),
    ("glv", EquipSlot::Hands),
    ("dwn", EquipSlot::Legs),
    ("sho", EquipSlot::Feet),
    ("ear", EquipSlot::Ears),
    ("nek", EquipSlot::Neck),
    ("wrs", EquipSlot::Wrists),
    ("rir", EquipSlot::RFinger),
    ("ril", EquipSlot::LFinger),
];

impl EquipSlot {
    /// Get the file name suffix of this slot.
    pub fn suffix(&self) -> &'static str {
        reverse_lookup(EQUIP_SLOTS, self)
    }
}

impl FromStr for EquipSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(EQUIP_SLOTS, s).ok_or_else(|| Error::UnknownEquipSlot(s.to_string()))
    }
}

/// Body part a character customization folder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodySlot {
    Hair,
    Face,
    Tail,
    Body,
    Zear,
}

/// Built-in body slot folder table.
pub static BODY_SLOTS: &[(&str, BodySlot)] = &[
    ("hair", BodySlot::Hair),
    ("face", BodySlot::Face),
    ("tail", BodySlot::Tail),
    ("body", BodySlot::Body),
    ("zear", BodySlot::Zear),
];

impl BodySlot {
    /// Get the folder name of this slot.
    pub fn folder(&self) -> &'static str {
        reverse_lookup(BODY_SLOTS, self)
    }
}

impl FromStr for BodySlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(BODY_SLOTS, s).ok_or_else(|| Error::UnknownBodySlot(s.to_string()))
    }
}

/// Kind of character customization a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomizationType {
    #[default]
    Unknown,
    Body,
    Tail,
    Face,
    Iris,
    Accessory,
    Hair,
    Zear,
    DecalFace,
    DecalEquip,
    Skin,
    Etc,
}

/// Built-in customization suffix table.
///
/// Types without a file name suffix (skin, decals) are decided by path
/// layout instead.
pub static CUSTOMIZATIONS: &[(&str, CustomizationType)] = &[
    ("top", CustomizationType::Body),
    ("fac", CustomizationType::Face),
    ("iri", CustomizationType::Iris),
    ("acc", CustomizationType::Accessory),
    ("hir", CustomizationType::Hair),
    ("til", CustomizationType::Tail),
    ("zer", CustomizationType::Zear),
    ("etc", CustomizationType::Etc),
];

impl CustomizationType {
    /// Get the file name suffix of this type, if it has one.
    pub fn suffix(&self) -> Option<&'static str> {
        CUSTOMIZATIONS
            .iter()
            .find(|(_, ty)| ty == self)
            .map(|&(suffix, _)| suffix)
    }
}

impl FromStr for CustomizationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(CUSTOMIZATIONS, s).ok_or_else(|| Error::UnknownCustomization(s.to_string()))
    }
}

macro_rules! display_debug {
    ($($ty:ty),*) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:?}", self)
            }
        })*
    };
}

display_debug!(EquipSlot, BodySlot, CustomizationType);

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

// Every variant of a fully-coded enum has a table row.
fn reverse_lookup<T: PartialEq>(table: &[(&'static str, T)], value: &T) -> &'static str {
    table
        .iter()
        .find(|(_, v)| v == value)
        .map(|&(k, _)| k)
        .unwrap_or("")
}
