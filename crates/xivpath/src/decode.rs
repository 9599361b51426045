//! Field decoding for matched paths.
//!
//! One handler per decodable object type. Handlers only read the captures
//! their file type's layout defines: an `.imc` match never carries a race
//! or slot, a `.mdl` match never carries a variant.

use xivpath_common::{CustomizationType, FileType, Language, ObjectType, Tables};

use crate::descriptor::{
    BodyTarget, CustomizationInfo, DemiHumanInfo, EquipTarget, EquipmentInfo, IconInfo, MapInfo,
    MonsterInfo, ObjectDetails, WeaponInfo,
};
use crate::error::{DecodeError, DecodeResult};
use crate::grammar::Fields;

/// Decode the captures of a match into type-specific fields.
///
/// Returns `None` for object types that carry no fields beyond their
/// file and object type.
pub(crate) fn decode(
    object_type: ObjectType,
    file_type: FileType,
    fields: &Fields<'_>,
    tables: &Tables,
) -> DecodeResult<Option<ObjectDetails>> {
    let details = match object_type {
        ObjectType::Equipment => ObjectDetails::Equipment(equipment(file_type, fields, tables)?),
        ObjectType::Accessory => ObjectDetails::Accessory(equipment(file_type, fields, tables)?),
        ObjectType::Weapon => ObjectDetails::Weapon(weapon(file_type, fields)?),
        ObjectType::Monster => ObjectDetails::Monster(monster(file_type, fields)?),
        ObjectType::DemiHuman => ObjectDetails::DemiHuman(demi_human(file_type, fields, tables)?),
        ObjectType::Character => ObjectDetails::Character(customization(file_type, fields, tables)?),
        ObjectType::Icon => ObjectDetails::Icon(icon(fields, tables)?),
        ObjectType::Map => ObjectDetails::Map(map(fields)?),
        ObjectType::Unknown
        | ObjectType::LoadingScreen
        | ObjectType::Interface
        | ObjectType::World
        | ObjectType::Housing
        | ObjectType::Font
        | ObjectType::Vfx => return Ok(None),
    };
    Ok(Some(details))
}

fn equipment(file_type: FileType, fields: &Fields<'_>, tables: &Tables) -> DecodeResult<EquipmentInfo> {
    let set_id = fields.number("id")?;
    if file_type == FileType::Imc {
        return Ok(EquipmentInfo {
            set_id,
            target: None,
            variant: None,
        });
    }

    let target = EquipTarget {
        gender_race: tables.gender_race(fields.required("race")?)?,
        slot: tables.equip_slot(fields.required("slot")?)?,
    };
    let variant = match file_type {
        FileType::Model => None,
        _ => Some(fields.number("variant")?),
    };

    Ok(EquipmentInfo {
        set_id,
        target: Some(target),
        variant,
    })
}

fn weapon(file_type: FileType, fields: &Fields<'_>) -> DecodeResult<WeaponInfo> {
    let set_id = fields.number("id")?;
    let weapon_id = fields.number("weapon")?;
    let variant = match file_type {
        FileType::Imc | FileType::Model => None,
        _ => Some(fields.number("variant")?),
    };
    Ok(WeaponInfo {
        set_id,
        weapon_id,
        variant,
    })
}

fn monster(file_type: FileType, fields: &Fields<'_>) -> DecodeResult<MonsterInfo> {
    let monster_id = fields.number("monster")?;
    let body_id = fields.number("id")?;
    let variant = match file_type {
        FileType::Imc | FileType::Model => None,
        _ => Some(fields.number("variant")?),
    };
    Ok(MonsterInfo {
        monster_id,
        body_id,
        variant,
    })
}

fn demi_human(file_type: FileType, fields: &Fields<'_>, tables: &Tables) -> DecodeResult<DemiHumanInfo> {
    let demi_human_id = fields.number("id")?;
    let equip_id = fields.number("equip")?;
    if file_type == FileType::Imc {
        return Ok(DemiHumanInfo {
            demi_human_id,
            equip_id,
            slot: None,
            variant: None,
        });
    }

    let slot = tables.equip_slot(fields.required("slot")?)?;
    let variant = match file_type {
        FileType::Model => None,
        _ => Some(fields.number("variant")?),
    };
    Ok(DemiHumanInfo {
        demi_human_id,
        equip_id,
        slot: Some(slot),
        variant,
    })
}

fn customization(
    file_type: FileType,
    fields: &Fields<'_>,
    tables: &Tables,
) -> DecodeResult<CustomizationInfo> {
    if fields.has("catchlight") {
        return Ok(CustomizationInfo::of(CustomizationType::Iris));
    }
    if fields.has("skin") {
        return Ok(CustomizationInfo::of(CustomizationType::Skin));
    }

    let id = fields.number("id")?;
    if let Some(location) = fields.get("location") {
        let customization = match location {
            "face" => CustomizationType::DecalFace,
            "equip" => CustomizationType::DecalEquip,
            _ => CustomizationType::Unknown,
        };
        return Ok(CustomizationInfo {
            id: Some(id),
            ..CustomizationInfo::of(customization)
        });
    }

    let target = BodyTarget {
        gender_race: tables.gender_race(fields.required("race")?)?,
        body_slot: tables.body_slot(fields.required("type")?)?,
    };
    let customization = match fields.get("slot") {
        Some(suffix) => tables.customization(suffix)?,
        None => CustomizationType::Skin,
    };
    let variant = match file_type {
        FileType::Material => Some(fields.optional_number("variant")?.unwrap_or(0)),
        _ => None,
    };

    Ok(CustomizationInfo {
        customization,
        id: Some(id),
        target: Some(target),
        variant,
    })
}

// TODO: decide whether an unrecognized language folder should surface as
// unknown instead of English once non-shipping client folders are seen.
fn icon(fields: &Fields<'_>, tables: &Tables) -> DecodeResult<IconInfo> {
    let id = fields.number("id")?;
    let language = fields
        .get("lang")
        .map(|code| tables.language(code).unwrap_or(Language::English));
    Ok(IconInfo {
        id,
        hq: fields.has("hq"),
        hr: fields.has("hr"),
        language,
    })
}

fn map(fields: &Fields<'_>) -> DecodeResult<MapInfo> {
    let token = fields.required("id")?;
    let ids: [u8; 4] = token
        .as_bytes()
        .try_into()
        .map_err(|_| DecodeError::InvalidMapId(token.to_string()))?;
    let variant = fields.number("variant")?;
    let suffix = fields.get("suffix").and_then(|s| s.bytes().next());
    Ok(MapInfo {
        ids,
        variant,
        suffix,
    })
}
