//! Game path parser.
//!
//! Classification runs as a fixed pipeline: normalize the path, derive its
//! file type (from the extension) and object type (from the first two
//! folders), try the grammar patterns for that pair, then decode the first
//! match. Any decode failure is logged and degrades the descriptor to its
//! file and object type.

use xivpath_common::{extension, FileType, ObjectType, Tables};

use crate::animation::AnimationKeyExtractor;
use crate::decode::decode;
use crate::descriptor::{ObjectDetails, PathDescriptor};
use crate::error::DecodeResult;
use crate::grammar::Grammar;
use crate::normalize::normalize;

/// Classifies game resource paths.
///
/// Holds only immutable tables and compiled patterns, so one parser can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct PathParser {
    grammar: Grammar,
    tables: Tables,
    animation: AnimationKeyExtractor,
}

impl PathParser {
    /// Create a parser with the built-in grammar and tables.
    pub fn new() -> Self {
        Self::with_parts(Grammar::builtin(), Tables::builtin())
    }

    /// Create a parser from an alternate grammar and table set.
    pub fn with_parts(grammar: Grammar, tables: Tables) -> Self {
        Self {
            grammar,
            tables,
            animation: AnimationKeyExtractor::new(),
        }
    }

    /// Get the grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Get the lookup tables.
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Classify a path into a descriptor. Never fails.
    pub fn classify(&self, path: &str) -> PathDescriptor {
        let normalized = normalize(path);
        let file_type = self.file_type_normalized(&normalized);
        let object_type = self.object_type_normalized(&normalized);

        match self.decode_normalized(file_type, object_type, &normalized) {
            Ok(Some(details)) => PathDescriptor::decoded(file_type, object_type, details),
            Ok(None) => PathDescriptor::bare(file_type, object_type),
            Err(error) => {
                tracing::warn!(path, %error, "could not decode game path");
                PathDescriptor::bare(file_type, object_type)
            }
        }
    }

    /// Run the pipeline without degrading decode failures.
    ///
    /// Returns `Ok(None)` when no layout matches or the object type has no
    /// fields to decode.
    pub fn try_decode(&self, path: &str) -> DecodeResult<Option<ObjectDetails>> {
        let normalized = normalize(path);
        let file_type = self.file_type_normalized(&normalized);
        let object_type = self.object_type_normalized(&normalized);
        self.decode_normalized(file_type, object_type, &normalized)
    }

    /// Get the object type of a path without decoding any fields.
    pub fn object_type_of(&self, path: &str) -> ObjectType {
        self.object_type_normalized(&normalize(path))
    }

    /// Get the file type of a path from its extension.
    pub fn file_type_of(&self, path: &str) -> FileType {
        self.file_type_normalized(&normalize(path))
    }

    /// Extract the animation key of a path, or an empty string.
    pub fn extract_animation_key(&self, path: &str) -> String {
        self.animation.extract(path)
    }

    fn decode_normalized(
        &self,
        file_type: FileType,
        object_type: ObjectType,
        path: &str,
    ) -> DecodeResult<Option<ObjectDetails>> {
        match self.grammar.find(file_type, object_type, path) {
            Some(fields) => decode(object_type, file_type, &fields, &self.tables),
            None => {
                tracing::trace!(path, %file_type, %object_type, "no layout matched");
                Ok(None)
            }
        }
    }

    fn file_type_normalized(&self, path: &str) -> FileType {
        self.tables.file_type(extension(path))
    }

    fn object_type_normalized(&self, path: &str) -> ObjectType {
        let mut segments = path.split('/');
        match (segments.next(), segments.next()) {
            (Some(first), Some(second)) => self.tables.object_type(first, second),
            _ => ObjectType::Unknown,
        }
    }
}

impl Default for PathParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{CustomizationInfo, IconInfo, MapInfo, WeaponInfo};
    use xivpath_common::{CustomizationType, GenderRace};

    const SAMPLE_PATHS: &[&str] = &[
        "",
        "chara",
        "chara/",
        "/",
        "no_extension",
        "chara/equipment/e0001/e0001.imc",
        "chara/equipment/e0001/model/c0101e0001_top.mdl",
        "chara/equipment/e0001/material/v0001/mt_c0101e0001_top_a.mtrl",
        "chara/equipment/e0001/texture/v01_c0101e0001_top_n.tex",
        "chara/accessory/a0001/model/c0101a0001_ear.mdl",
        "chara/weapon/w0101/obj/body/b0001/b0001.imc",
        "chara/weapon/w0101/obj/body/b0001/texture/v01_w0101b0001_n.tex",
        "chara/monster/m0001/obj/body/b0001/material/v0001/mt_m0001b0001_a.mtrl",
        "chara/demihuman/d1001/obj/equipment/e0001/model/d1001e0001_top.mdl",
        "chara/human/c0101/obj/body/b0001/model/c0101b0001_top.mdl",
        "chara/human/c1801/obj/zear/z0001/model/c1801z0001_zer.mdl",
        "chara/human/c0101/obj/hair/h0001/texture/--c0101h0001_hir_n.tex",
        "chara/human/c0101/obj/face/f0001/texture/odd_name.tex",
        "chara/common/texture/skin_m.tex",
        "chara/common/texture/catchlight_1.tex",
        "chara/common/texture/decal_equip/-decal_001.tex",
        "ui/icon/012000/012001.tex",
        "ui/icon/012000/fr/hq/012001_hr1.tex",
        "ui/map/a1b2/03/a1b203_m.tex",
        "ui/loadingimage/-nowloading_base01.tex",
        "common/font/axis_12.fdt",
        "bgcommon/hou/indoor/general/0001/asset/fun_b0_m0001.sgb",
        "bg/ffxiv/sea_s1/twn/s1t1/texture/s1t1_a1_dis1_d.tex",
        "vfx/common/eff/dk05th_stup0t.avfx",
        "hou/dummy.tex",
        "sound/battle/se_battle.scd",
        "chara/equipment/e9999/model/c9999e9999_zzz.mdl",
        "chara/equıpment/e0001/e0001.imc",
    ];

    #[test]
    fn test_totality() {
        let parser = PathParser::new();
        for path in SAMPLE_PATHS {
            let descriptor = parser.classify(path);
            if let Some(details) = descriptor.details() {
                assert_eq!(details.object_type(), descriptor.object_type());
            }
        }
        assert_eq!(parser.classify(""), PathDescriptor::bare(FileType::Unknown, ObjectType::Unknown));
    }

    #[test]
    fn test_case_and_separator_invariance() {
        let parser = PathParser::new();
        for path in SAMPLE_PATHS {
            let expected = parser.classify(path);
            assert_eq!(parser.classify(&path.to_uppercase()), expected, "{}", path);
            assert_eq!(parser.classify(&path.replace('/', "\\")), expected, "{}", path);
        }
    }

    #[test]
    fn test_dotless_i_folds_to_ascii() {
        let parser = PathParser::new();
        let descriptor = parser.classify("chara/equıpment/e0001/e0001.imc");
        assert_eq!(descriptor.object_type(), ObjectType::Equipment);
        assert_eq!(descriptor, parser.classify("CHARA/EQUIPMENT/E0001/E0001.IMC"));
        assert!(descriptor.is_complete());
    }

    #[test]
    fn test_weapon_imc_then_material() {
        let parser = PathParser::new();
        let imc = parser.classify("chara/weapon/w0201/obj/body/b0004/b0004.imc");
        assert_eq!(imc.object_type(), ObjectType::Weapon);
        assert_eq!(imc.file_type(), FileType::Imc);
        assert_eq!(
            imc.details(),
            Some(&ObjectDetails::Weapon(WeaponInfo {
                set_id: 201,
                weapon_id: 4,
                variant: None,
            }))
        );

        let mtrl = parser.classify("chara/weapon/w0201/obj/body/b0004/material/v0007/mt_w0201b0004_a.mtrl");
        assert_eq!(mtrl.file_type(), FileType::Material);
        assert_eq!(
            mtrl.details(),
            Some(&ObjectDetails::Weapon(WeaponInfo {
                set_id: 201,
                weapon_id: 4,
                variant: Some(7),
            }))
        );
    }

    #[test]
    fn test_icon_without_numeric_id() {
        let parser = PathParser::new();
        let descriptor = parser.classify("ui/icon/012000/hq/icon_frame.tex");
        assert_eq!(descriptor.object_type(), ObjectType::Icon);
        assert_eq!(descriptor.file_type(), FileType::Texture);
        assert!(!descriptor.is_complete());
    }

    #[test]
    fn test_icon_flags() {
        let parser = PathParser::new();
        let descriptor = parser.classify("ui/icon/012000/fr/hq/012001_hr1.tex");
        assert_eq!(
            descriptor.details(),
            Some(&ObjectDetails::Icon(IconInfo {
                id: 12001,
                hq: true,
                hr: true,
                language: Some(xivpath_common::Language::French),
            }))
        );

        let descriptor = parser.classify("ui/icon/012000/012001.tex");
        assert_eq!(
            descriptor.details(),
            Some(&ObjectDetails::Icon(IconInfo {
                id: 12001,
                hq: false,
                hr: false,
                language: None,
            }))
        );
    }

    #[test]
    fn test_map_codes() {
        let parser = PathParser::new();
        let descriptor = parser.classify("ui/map/a1b2/03/a1b203_m.tex");
        assert_eq!(
            descriptor.details(),
            Some(&ObjectDetails::Map(MapInfo {
                ids: [b'a', b'1', b'b', b'2'],
                variant: 3,
                suffix: None,
            }))
        );

        let descriptor = parser.classify("ui/map/a1b2/03/a1b203s_m.tex");
        assert!(matches!(
            descriptor.details(),
            Some(ObjectDetails::Map(MapInfo { suffix: Some(b's'), .. }))
        ));

        // Folder and file name must agree on the map id.
        assert!(!parser.classify("ui/map/a1b2/03/a1b303_m.tex").is_complete());
    }

    #[test]
    fn test_character_texture_priority() {
        let parser = PathParser::new();
        let path = "chara/human/c0101/obj/hair/h0001/texture/--c0101h0001_hir_n.tex";

        // The body layout and the folder layout both match this path.
        let patterns = parser.grammar().patterns(FileType::Texture, ObjectType::Character);
        assert!(patterns[0].matches(path).is_some());
        assert!(patterns[1].matches(path).is_some());

        let descriptor = parser.classify(path);
        assert!(matches!(
            descriptor.details(),
            Some(ObjectDetails::Character(CustomizationInfo {
                customization: CustomizationType::Hair,
                id: Some(1),
                variant: None,
                ..
            }))
        ));
    }

    #[test]
    fn test_character_folder_fallback() {
        let parser = PathParser::new();
        let descriptor = parser.classify("chara/human/c0101/obj/face/f0002/texture/odd_name.tex");
        match descriptor.details() {
            Some(ObjectDetails::Character(info)) => {
                assert_eq!(info.customization, CustomizationType::Skin);
                assert_eq!(info.id, Some(2));
                assert_eq!(
                    info.target.map(|t| t.gender_race),
                    Some(GenderRace::MidlanderMale)
                );
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_shared_character_textures() {
        let parser = PathParser::new();
        let skin = parser.classify("chara/common/texture/skin_m.tex");
        assert_eq!(
            skin.details(),
            Some(&ObjectDetails::Character(CustomizationInfo::of(CustomizationType::Skin)))
        );

        let iris = parser.classify("chara/common/texture/catchlight_1.tex");
        assert_eq!(
            iris.details(),
            Some(&ObjectDetails::Character(CustomizationInfo::of(CustomizationType::Iris)))
        );
    }

    #[test]
    fn test_degradation_is_total() {
        let parser = PathParser::new();

        // Concrete object type, no layout match.
        let descriptor = parser.classify("chara/equipment/e0001/readme.mdl");
        assert_eq!(descriptor, PathDescriptor::bare(FileType::Model, ObjectType::Equipment));

        // Layout match, table miss during decoding.
        let descriptor = parser.classify("chara/equipment/e9999/model/c9999e9999_zzz.mdl");
        assert_eq!(descriptor, PathDescriptor::bare(FileType::Model, ObjectType::Equipment));
        assert!(parser
            .try_decode("chara/equipment/e9999/model/c9999e9999_zzz.mdl")
            .is_err());

        // Pair absent from the grammar.
        assert!(parser.grammar().patterns(FileType::Pap, ObjectType::Equipment).is_empty());
        let descriptor = parser.classify("chara/equipment/e0001/e0001.pap");
        assert_eq!(descriptor, PathDescriptor::bare(FileType::Pap, ObjectType::Equipment));
    }

    #[test]
    fn test_object_type_of() {
        let parser = PathParser::new();
        assert_eq!(parser.object_type_of("chara"), ObjectType::Unknown);
        assert_eq!(parser.object_type_of("somewhere/else"), ObjectType::Unknown);
        assert_eq!(parser.object_type_of("chara/common/texture/skin.tex"), ObjectType::Character);
        assert_eq!(parser.object_type_of("common/font/axis_12.fdt"), ObjectType::Font);
        assert_eq!(parser.object_type_of("common/graphics/texture/dummy.tex"), ObjectType::Unknown);
        assert_eq!(parser.object_type_of("hou/x"), ObjectType::Housing);
        assert_eq!(parser.object_type_of(r"UI\ULD\Title.uld"), ObjectType::Interface);
    }

    #[test]
    fn test_file_type_of() {
        let parser = PathParser::new();
        assert_eq!(parser.file_type_of("a/b.MDL"), FileType::Model);
        assert_eq!(parser.file_type_of("a/b.eqdp"), FileType::MetaInfo);
        assert_eq!(parser.file_type_of("a/b"), FileType::Unknown);
        assert_eq!(parser.file_type_of("a/b.png"), FileType::Unknown);
    }

    #[test]
    fn test_alternate_tables() {
        let tables = Tables::builtin().without_gender_race("0101");
        let parser = PathParser::with_parts(Grammar::builtin(), tables);
        assert!(!parser
            .classify("chara/equipment/e0001/model/c0101e0001_top.mdl")
            .is_complete());
        assert!(parser
            .classify("chara/equipment/e0001/model/c0201e0001_top.mdl")
            .is_complete());

        let parser = PathParser::with_parts(Grammar::empty(), Tables::builtin());
        let descriptor = parser.classify("chara/equipment/e0001/e0001.imc");
        assert_eq!(descriptor, PathDescriptor::bare(FileType::Imc, ObjectType::Equipment));
    }
}
