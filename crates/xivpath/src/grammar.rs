//! Grammar table mapping (file type, object type) pairs to path patterns.
//!
//! Each pair maps to an ordered list of [`GamePathPattern`]s. Patterns are
//! anchored to the whole normalized path. A token that appears twice in a
//! layout (the set id in both the folder and the file name, say) is
//! captured under two names and tied together by an equality constraint,
//! which is checked after the regex itself succeeds.

use regex::{Captures, Regex};
use rustc_hash::FxHashMap;
use xivpath_common::{FileType, ObjectType};

use crate::error::{DecodeError, DecodeResult, Error, Result};

/// Pairs of capture groups that must hold the same text.
pub type SameGroups = &'static [(&'static str, &'static str)];

/// A compiled path layout with named captures.
#[derive(Debug, Clone)]
pub struct GamePathPattern {
    regex: Regex,
    same: SameGroups,
}

impl GamePathPattern {
    /// Compile a pattern with its equality constraints.
    pub fn new(source: &str, same: SameGroups) -> Result<Self> {
        let regex = Regex::new(source)?;
        let names: Vec<&str> = regex.capture_names().flatten().collect();
        for &(a, b) in same {
            for group in [a, b] {
                if !names.contains(&group) {
                    return Err(Error::UnknownGroup {
                        pattern: source.to_string(),
                        group,
                    });
                }
            }
        }
        Ok(Self { regex, same })
    }

    /// Get the regex source of this pattern.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Match a normalized path against this pattern.
    pub fn matches<'h>(&self, path: &'h str) -> Option<Fields<'h>> {
        let captures = self.regex.captures(path)?;
        let consistent = self.same.iter().all(|&(a, b)| {
            captures.name(a).map(|m| m.as_str()) == captures.name(b).map(|m| m.as_str())
        });
        consistent.then_some(Fields { captures })
    }
}

/// Named captures of a successful pattern match.
#[derive(Debug)]
pub struct Fields<'h> {
    captures: Captures<'h>,
}

impl<'h> Fields<'h> {
    /// Get a capture if its group took part in the match.
    pub fn get(&self, name: &str) -> Option<&'h str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    /// Check whether a group took part in the match.
    pub fn has(&self, name: &str) -> bool {
        self.captures.name(name).is_some()
    }

    /// Get a capture the layout guarantees.
    pub fn required(&self, name: &'static str) -> DecodeResult<&'h str> {
        self.get(name).ok_or(DecodeError::MissingCapture(name))
    }

    /// Parse a required numeric capture at its exact width.
    pub fn number<T>(&self, name: &'static str) -> DecodeResult<T>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        parse_number(name, self.required(name)?)
    }

    /// Parse an optional numeric capture at its exact width.
    pub fn optional_number<T>(&self, name: &'static str) -> DecodeResult<Option<T>>
    where
        T: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        self.get(name).map(|value| parse_number(name, value)).transpose()
    }
}

fn parse_number<T>(field: &'static str, value: &str) -> DecodeResult<T>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| DecodeError::InvalidNumber {
        field,
        value: value.to_string(),
        width: std::any::type_name::<T>(),
        source,
    })
}

/// Ordered pattern lists keyed by (file type, object type).
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    patterns: FxHashMap<(FileType, ObjectType), Vec<GamePathPattern>>,
}

impl Grammar {
    /// Create a grammar with no patterns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile a grammar from `(file type, object type, source, same)` rows.
    ///
    /// Rows sharing a key keep their relative order, which is the order
    /// they are tried in.
    pub fn from_sources(rows: &[(FileType, ObjectType, &str, SameGroups)]) -> Result<Self> {
        let mut grammar = Self::empty();
        for &(file_type, object_type, source, same) in rows {
            grammar
                .patterns
                .entry((file_type, object_type))
                .or_default()
                .push(GamePathPattern::new(source, same)?);
        }
        Ok(grammar)
    }

    /// Compile the built-in game grammar.
    pub fn builtin() -> Self {
        Self::from_sources(BUILTIN_PATTERNS).expect("built-in game path patterns compile")
    }

    /// Get the ordered patterns for a pair; empty if the pair is absent.
    pub fn patterns(&self, file_type: FileType, object_type: ObjectType) -> &[GamePathPattern] {
        self.patterns
            .get(&(file_type, object_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Try the patterns for a pair in order and return the first match.
    pub fn find<'h>(
        &self,
        file_type: FileType,
        object_type: ObjectType,
        path: &'h str,
    ) -> Option<Fields<'h>> {
        self.patterns(file_type, object_type)
            .iter()
            .find_map(|pattern| pattern.matches(path))
    }

    /// Number of (file type, object type) pairs with patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check whether the grammar has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

const ID: SameGroups = &[("id", "id2")];
const ID_WEAPON: SameGroups = &[("id", "id2"), ("weapon", "weapon2")];
const WEAPON: SameGroups = &[("weapon", "weapon2")];
const MONSTER_ID: SameGroups = &[("monster", "monster2"), ("id", "id2")];
const ID_EQUIP: SameGroups = &[("id", "id2"), ("equip", "equip2")];
const EQUIP: SameGroups = &[("equip", "equip2")];
const HUMAN: SameGroups = &[("race", "race2"), ("typeabr", "typeabr2"), ("id", "id2")];
const MAP: SameGroups = &[("id", "id2"), ("variant", "variant2")];
const NONE: SameGroups = &[];

use FileType as F;
use ObjectType as O;

/// Built-in layouts. Character textures are listed in priority order:
/// body, folder, skin, iris, decal.
#[rustfmt::skip]
static BUILTIN_PATTERNS: &[(FileType, ObjectType, &str, SameGroups)] = &[
    // Imc
    (F::Imc, O::Equipment, r"^chara/equipment/e(?P<id>\d{4})/e(?P<id2>\d{4})\.imc$", ID),
    (F::Imc, O::Accessory, r"^chara/accessory/a(?P<id>\d{4})/a(?P<id2>\d{4})\.imc$", ID),
    (F::Imc, O::Weapon, r"^chara/weapon/w(?P<id>\d{4})/obj/body/b(?P<weapon>\d{4})/b(?P<weapon2>\d{4})\.imc$", WEAPON),
    (F::Imc, O::Monster, r"^chara/monster/m(?P<monster>\d{4})/obj/body/b(?P<id>\d{4})/b(?P<id2>\d{4})\.imc$", ID),
    (F::Imc, O::DemiHuman, r"^chara/demihuman/d(?P<id>\d{4})/obj/equipment/e(?P<equip>\d{4})/e(?P<equip2>\d{4})\.imc$", EQUIP),

    // Model
    (F::Model, O::Equipment, r"^chara/equipment/e(?P<id>\d{4})/model/c(?P<race>\d{4})e(?P<id2>\d{4})_(?P<slot>[a-z]{3})\.mdl$", ID),
    (F::Model, O::Accessory, r"^chara/accessory/a(?P<id>\d{4})/model/c(?P<race>\d{4})a(?P<id2>\d{4})_(?P<slot>[a-z]{3})\.mdl$", ID),
    (F::Model, O::Weapon, r"^chara/weapon/w(?P<id>\d{4})/obj/body/b(?P<weapon>\d{4})/model/w(?P<id2>\d{4})b(?P<weapon2>\d{4})\.mdl$", ID_WEAPON),
    (F::Model, O::Monster, r"^chara/monster/m(?P<monster>\d{4})/obj/body/b(?P<id>\d{4})/model/m(?P<monster2>\d{4})b(?P<id2>\d{4})\.mdl$", MONSTER_ID),
    (F::Model, O::DemiHuman, r"^chara/demihuman/d(?P<id>\d{4})/obj/equipment/e(?P<equip>\d{4})/model/d(?P<id2>\d{4})e(?P<equip2>\d{4})_(?P<slot>[a-z]{3})\.mdl$", ID_EQUIP),
    (F::Model, O::Character, r"^chara/human/c(?P<race>\d{4})/obj/(?P<type>[a-z]+)/(?P<typeabr>[a-z])(?P<id>\d{4})/model/c(?P<race2>\d{4})(?P<typeabr2>[a-z])(?P<id2>\d{4})_(?P<slot>[a-z]{3})\.mdl$", HUMAN),

    // Material
    (F::Material, O::Equipment, r"^chara/equipment/e(?P<id>\d{4})/material/v(?P<variant>\d{4})/mt_c(?P<race>\d{4})e(?P<id2>\d{4})_(?P<slot>[a-z]{3})_[a-z]\.mtrl$", ID),
    (F::Material, O::Accessory, r"^chara/accessory/a(?P<id>\d{4})/material/v(?P<variant>\d{4})/mt_c(?P<race>\d{4})a(?P<id2>\d{4})_(?P<slot>[a-z]{3})_[a-z]\.mtrl$", ID),
    (F::Material, O::Weapon, r"^chara/weapon/w(?P<id>\d{4})/obj/body/b(?P<weapon>\d{4})/material/v(?P<variant>\d{4})/mt_w(?P<id2>\d{4})b(?P<weapon2>\d{4})_[a-z]\.mtrl$", ID_WEAPON),
    (F::Material, O::Monster, r"^chara/monster/m(?P<monster>\d{4})/obj/body/b(?P<id>\d{4})/material/v(?P<variant>\d{4})/mt_m(?P<monster2>\d{4})b(?P<id2>\d{4})_[a-z]\.mtrl$", MONSTER_ID),
    (F::Material, O::DemiHuman, r"^chara/demihuman/d(?P<id>\d{4})/obj/equipment/e(?P<equip>\d{4})/material/v(?P<variant>\d{4})/mt_d(?P<id2>\d{4})e(?P<equip2>\d{4})_(?P<slot>[a-z]{3})_[a-z]\.mtrl$", ID_EQUIP),
    (F::Material, O::Character, r"^chara/human/c(?P<race>\d{4})/obj/(?P<type>[a-z]+)/(?P<typeabr>[a-z])(?P<id>\d{4})/material/v(?P<variant>\d{4})/mt_c(?P<race2>\d{4})(?P<typeabr2>[a-z])(?P<id2>\d{4})(?:_(?P<slot>[a-z]{3}))?_[a-z]\.mtrl$", HUMAN),

    // Texture
    (F::Texture, O::Equipment, r"^chara/equipment/e(?P<id>\d{4})/texture/v(?P<variant>\d{2})_c(?P<race>\d{4})e(?P<id2>\d{4})_(?P<slot>[a-z]{3})(?:_[a-z])?_[a-z]\.tex$", ID),
    (F::Texture, O::Accessory, r"^chara/accessory/a(?P<id>\d{4})/texture/v(?P<variant>\d{2})_c(?P<race>\d{4})a(?P<id2>\d{4})_(?P<slot>[a-z]{3})_[a-z]\.tex$", ID),
    (F::Texture, O::Weapon, r"^chara/weapon/w(?P<id>\d{4})/obj/body/b(?P<weapon>\d{4})/texture/v(?P<variant>\d{2})_w(?P<id2>\d{4})b(?P<weapon2>\d{4})(?:_[a-z])?_[a-z]\.tex$", ID_WEAPON),
    (F::Texture, O::Monster, r"^chara/monster/m(?P<monster>\d{4})/obj/body/b(?P<id>\d{4})/texture/v(?P<variant>\d{2})_m(?P<monster2>\d{4})b(?P<id2>\d{4})(?:_[a-z])?_[a-z]\.tex$", MONSTER_ID),
    (F::Texture, O::DemiHuman, r"^chara/demihuman/d(?P<id>\d{4})/obj/equipment/e(?P<equip>\d{4})/texture/v(?P<variant>\d{2})_d(?P<id2>\d{4})e(?P<equip2>\d{4})_(?P<slot>[a-z]{3})(?:_[a-z])?_[a-z]\.tex$", ID_EQUIP),
    (F::Texture, O::Icon, r"^ui/icon/(?P<group>\d+)(?:/(?P<lang>[a-z]{2}))??(?:/(?P<hq>hq))?/(?P<id>\d+)(?P<hr>_hr1)?\.tex$", NONE),
    (F::Texture, O::Map, r"^ui/map/(?P<id>[a-z0-9]{4})/(?P<variant>\d{2})/(?P<id2>[a-z0-9]{4})(?P<variant2>\d{2})(?P<suffix>[a-z])?(?:_[a-z])?\.tex$", MAP),
    (F::Texture, O::Character, r"^chara/human/c(?P<race>\d{4})/obj/(?P<type>[a-z]+)/(?P<typeabr>[a-z])(?P<id>\d{4})/texture/(?:--)?(?:v(?P<variant>\d{2})_)?c(?P<race2>\d{4})(?P<typeabr2>[a-z])(?P<id2>\d{4})(?:_(?P<slot>[a-z]{3}))?(?:_[a-z])?_[a-z]\.tex$", HUMAN),
    (F::Texture, O::Character, r"^chara/human/c(?P<race>\d{4})/obj/(?P<type>[a-z]+)/(?P<typeabr>[a-z])(?P<id>\d{4})/texture/.+$", NONE),
    (F::Texture, O::Character, r"^chara/common/texture/skin(?P<skin>.*)\.tex$", NONE),
    (F::Texture, O::Character, r"^chara/common/texture/(?P<catchlight>catchlight).*\.tex$", NONE),
    (F::Texture, O::Character, r"^chara/common/texture/decal_(?P<location>[a-z]+)/[-_]?decal_(?P<id>\d+)\.tex$", NONE),
];
