//! FFXIV game resource path classification.
//!
//! Game files are addressed by paths such as
//! `chara/equipment/e0123/model/c0201e0123_top.mdl`. This crate turns such
//! a path into a [`PathDescriptor`]: its [`FileType`] (from the extension),
//! its [`ObjectType`] (from the leading folders) and, when the path follows
//! a known layout, the ids, slots and variants it encodes.
//!
//! Classification never fails. A path that cannot be fully decoded yields
//! a descriptor with only its file and object type.
//!
//! # Crates
//!
//! - [`xivpath_common`] - Enumerations and string-code tables
//!
//! # Example
//!
//! ```
//! use xivpath::prelude::*;
//!
//! let descriptor = xivpath::classify(r"chara\weapon\w0201\obj\body\b0004\b0004.imc");
//! assert_eq!(descriptor.object_type(), ObjectType::Weapon);
//! assert_eq!(descriptor.file_type(), FileType::Imc);
//!
//! if let Some(ObjectDetails::Weapon(weapon)) = descriptor.details() {
//!     assert_eq!((weapon.set_id, weapon.weapon_id), (201, 4));
//! }
//! ```

use std::sync::LazyLock;

mod animation;
mod decode;
mod descriptor;
mod error;
mod grammar;
mod normalize;
mod parser;

#[cfg(feature = "parallel")]
mod parallel;

pub use xivpath_common as common;

pub use animation::AnimationKeyExtractor;
pub use descriptor::{
    BodyTarget, CustomizationInfo, DemiHumanInfo, EquipTarget, EquipmentInfo, IconInfo, MapInfo,
    MonsterInfo, ObjectDetails, PathDescriptor, WeaponInfo,
};
pub use error::{DecodeError, DecodeResult, Error, Result};
pub use grammar::{Fields, GamePathPattern, Grammar, SameGroups};
pub use normalize::normalize;
pub use parser::PathParser;
pub use xivpath_common::{FileType, ObjectType, Tables};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{ObjectDetails, PathDescriptor, PathParser};
    pub use xivpath_common::{
        BodySlot, CustomizationType, EquipSlot, FileType, GenderRace, Language, ObjectType,
    };
}

static DEFAULT_PARSER: LazyLock<PathParser> = LazyLock::new(PathParser::new);

/// Get the shared parser built from the built-in grammar and tables.
pub fn default_parser() -> &'static PathParser {
    &DEFAULT_PARSER
}

/// Classify a path with the built-in grammar and tables.
pub fn classify(path: &str) -> PathDescriptor {
    DEFAULT_PARSER.classify(path)
}

/// Get the object type of a path without decoding its fields.
pub fn object_type_of(path: &str) -> ObjectType {
    DEFAULT_PARSER.object_type_of(path)
}

/// Get the file type of a path from its extension.
pub fn file_type_of(path: &str) -> FileType {
    DEFAULT_PARSER.file_type_of(path)
}

/// Extract the animation key of a path, or an empty string.
pub fn extract_animation_key(path: &str) -> String {
    DEFAULT_PARSER.extract_animation_key(path)
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
