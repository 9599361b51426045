//! Path descriptor types.
//!
//! A [`PathDescriptor`] always carries the file and object type of a path.
//! The type-specific [`ObjectDetails`] are present only when the path
//! matched a layout and every field decoded.

use xivpath_common::{
    BodySlot, CustomizationType, EquipSlot, FileType, GenderRace, Language, ObjectType,
};

/// Classification result for a single game path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathDescriptor {
    file_type: FileType,
    object_type: ObjectType,
    details: Option<ObjectDetails>,
}

impl PathDescriptor {
    /// Create a descriptor with no type-specific fields.
    pub(crate) fn bare(file_type: FileType, object_type: ObjectType) -> Self {
        Self {
            file_type,
            object_type,
            details: None,
        }
    }

    /// Create a fully decoded descriptor.
    pub(crate) fn decoded(file_type: FileType, object_type: ObjectType, details: ObjectDetails) -> Self {
        debug_assert_eq!(details.object_type(), object_type);
        Self {
            file_type,
            object_type,
            details: Some(details),
        }
    }

    /// Get the file type.
    #[inline]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Get the object type.
    #[inline]
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Get the decoded fields, if any.
    #[inline]
    pub fn details(&self) -> Option<&ObjectDetails> {
        self.details.as_ref()
    }

    /// Check whether the path was fully classified.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.details.is_some()
    }
}

impl std::fmt::Display for PathDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.object_type, self.file_type)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

/// Type-specific fields, one variant per decodable object type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectDetails {
    Equipment(EquipmentInfo),
    Accessory(EquipmentInfo),
    Weapon(WeaponInfo),
    Monster(MonsterInfo),
    DemiHuman(DemiHumanInfo),
    Character(CustomizationInfo),
    Icon(IconInfo),
    Map(MapInfo),
}

impl ObjectDetails {
    /// Get the object type these fields belong to.
    pub const fn object_type(&self) -> ObjectType {
        match self {
            ObjectDetails::Equipment(_) => ObjectType::Equipment,
            ObjectDetails::Accessory(_) => ObjectType::Accessory,
            ObjectDetails::Weapon(_) => ObjectType::Weapon,
            ObjectDetails::Monster(_) => ObjectType::Monster,
            ObjectDetails::DemiHuman(_) => ObjectType::DemiHuman,
            ObjectDetails::Character(_) => ObjectType::Character,
            ObjectDetails::Icon(_) => ObjectType::Icon,
            ObjectDetails::Map(_) => ObjectType::Map,
        }
    }
}

impl std::fmt::Display for ObjectDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectDetails::Equipment(info) => write!(f, "e{:04}{}", info.set_id, info.target_and_variant()),
            ObjectDetails::Accessory(info) => write!(f, "a{:04}{}", info.set_id, info.target_and_variant()),
            ObjectDetails::Weapon(info) => {
                write!(f, "w{:04} b{:04}", info.set_id, info.weapon_id)?;
                write_variant(f, info.variant)
            }
            ObjectDetails::Monster(info) => {
                write!(f, "m{:04} b{:04}", info.monster_id, info.body_id)?;
                write_variant(f, info.variant)
            }
            ObjectDetails::DemiHuman(info) => {
                write!(f, "d{:04} e{:04}", info.demi_human_id, info.equip_id)?;
                if let Some(slot) = info.slot {
                    write!(f, " {}", slot)?;
                }
                write_variant(f, info.variant)
            }
            ObjectDetails::Character(info) => {
                write!(f, "{}", info.customization)?;
                if let Some(id) = info.id {
                    write!(f, " #{}", id)?;
                }
                if let Some(target) = info.target {
                    write!(f, " {} {}", target.gender_race, target.body_slot)?;
                }
                write_variant(f, info.variant)
            }
            ObjectDetails::Icon(info) => {
                write!(f, "icon {:06}", info.id)?;
                if info.hq {
                    write!(f, " hq")?;
                }
                if info.hr {
                    write!(f, " hr")?;
                }
                if let Some(language) = info.language {
                    write!(f, " {}", language)?;
                }
                Ok(())
            }
            ObjectDetails::Map(info) => {
                write!(f, "map {} v{:02}", info.map_id(), info.variant)?;
                if let Some(suffix) = info.suffix {
                    write!(f, " {}", suffix as char)?;
                }
                Ok(())
            }
        }
    }
}

fn write_variant(f: &mut std::fmt::Formatter<'_>, variant: Option<u8>) -> std::fmt::Result {
    match variant {
        Some(variant) => write!(f, " v{}", variant),
        None => Ok(()),
    }
}

/// Gender-race and slot an equipment model or material is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipTarget {
    pub gender_race: GenderRace,
    pub slot: EquipSlot,
}

/// Equipment or accessory set fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentInfo {
    /// Set id (`e0123` / `a0123`).
    pub set_id: u16,
    /// Absent for `.imc` files.
    pub target: Option<EquipTarget>,
    /// Absent for `.imc` and `.mdl` files.
    pub variant: Option<u8>,
}

impl EquipmentInfo {
    fn target_and_variant(&self) -> String {
        let mut out = String::new();
        if let Some(target) = self.target {
            out.push_str(&format!(" {} {}", target.gender_race, target.slot));
        }
        if let Some(variant) = self.variant {
            out.push_str(&format!(" v{}", variant));
        }
        out
    }
}

/// Weapon fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponInfo {
    /// Primary id (`w0101`).
    pub set_id: u16,
    /// Body id under the primary (`b0001`).
    pub weapon_id: u16,
    pub variant: Option<u8>,
}

/// Monster fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterInfo {
    pub monster_id: u16,
    pub body_id: u16,
    pub variant: Option<u8>,
}

/// Demihuman fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemiHumanInfo {
    pub demi_human_id: u16,
    pub equip_id: u16,
    pub slot: Option<EquipSlot>,
    pub variant: Option<u8>,
}

/// Gender-race and body slot of a customization file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyTarget {
    pub gender_race: GenderRace,
    pub body_slot: BodySlot,
}

/// Character customization fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomizationInfo {
    pub customization: CustomizationType,
    /// Model or decal id. Absent for shared skin and catchlight textures.
    pub id: Option<u16>,
    pub target: Option<BodyTarget>,
    /// Present only for materials.
    pub variant: Option<u8>,
}

impl CustomizationInfo {
    /// Create customization fields carrying only a type.
    pub const fn of(customization: CustomizationType) -> Self {
        Self {
            customization,
            id: None,
            target: None,
            variant: None,
        }
    }
}

/// Icon fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconInfo {
    pub id: u32,
    /// High-quality (`/hq/`) icon.
    pub hq: bool,
    /// High-resolution (`_hr1`) icon.
    pub hr: bool,
    /// Absent for icons outside a language folder.
    pub language: Option<Language>,
}

/// Map texture fields.
///
/// The map id is a four-character token such as `s1d1`; each character is
/// kept as its byte value in position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapInfo {
    pub ids: [u8; 4],
    pub variant: u8,
    pub suffix: Option<u8>,
}

impl MapInfo {
    /// Get the map id token as text.
    pub fn map_id(&self) -> String {
        self.ids.iter().map(|&b| b as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_descriptor() {
        let descriptor = PathDescriptor::bare(FileType::Texture, ObjectType::Icon);
        assert!(!descriptor.is_complete());
        assert_eq!(descriptor.details(), None);
        assert_eq!(descriptor.to_string(), "Icon Texture");
    }

    #[test]
    fn test_display_weapon() {
        let descriptor = PathDescriptor::decoded(
            FileType::Material,
            ObjectType::Weapon,
            ObjectDetails::Weapon(WeaponInfo {
                set_id: 201,
                weapon_id: 4,
                variant: Some(1),
            }),
        );
        assert_eq!(descriptor.to_string(), "Weapon Material: w0201 b0004 v1");
    }

    #[test]
    fn test_map_id() {
        let info = MapInfo {
            ids: *b"s1d1",
            variant: 0,
            suffix: Some(b'm'),
        };
        assert_eq!(info.map_id(), "s1d1");
        assert_eq!(
            ObjectDetails::Map(info).to_string(),
            "map s1d1 v00 m"
        );
    }
}
