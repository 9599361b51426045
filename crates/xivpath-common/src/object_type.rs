//! Object categories derived from a path's leading folders.

/// Coarse category of the game asset a path names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectType {
    /// Path is not covered by the folder table.
    #[default]
    Unknown,
    LoadingScreen,
    Map,
    Interface,
    Icon,
    World,
    Housing,
    Monster,
    DemiHuman,
    Character,
    Weapon,
    Equipment,
    Accessory,
    Font,
    Vfx,
}

/// How the second path segment refines a first-segment match.
#[derive(Debug, Clone, Copy)]
pub enum FolderRule {
    /// The first segment alone decides the object type.
    Fixed(ObjectType),
    /// Dispatch on the second segment, falling back to `default`.
    BySecond {
        entries: &'static [(&'static str, ObjectType)],
        default: ObjectType,
    },
}

/// Built-in folder table, keyed by the first path segment.
pub static FOLDERS: &[(&str, FolderRule)] = &[
    (
        "chara",
        FolderRule::BySecond {
            entries: &[
                ("equipment", ObjectType::Equipment),
                ("accessory", ObjectType::Accessory),
                ("weapon", ObjectType::Weapon),
                ("human", ObjectType::Character),
                ("demihuman", ObjectType::DemiHuman),
                ("monster", ObjectType::Monster),
                ("common", ObjectType::Character),
            ],
            default: ObjectType::Unknown,
        },
    ),
    (
        "ui",
        FolderRule::BySecond {
            entries: &[
                ("icon", ObjectType::Icon),
                ("loadingimage", ObjectType::LoadingScreen),
                ("map", ObjectType::Map),
                ("uld", ObjectType::Interface),
            ],
            default: ObjectType::Unknown,
        },
    ),
    (
        "common",
        FolderRule::BySecond {
            entries: &[("font", ObjectType::Font)],
            default: ObjectType::Unknown,
        },
    ),
    ("hou", FolderRule::Fixed(ObjectType::Housing)),
    (
        "bgcommon",
        FolderRule::BySecond {
            entries: &[("hou", ObjectType::Housing)],
            default: ObjectType::World,
        },
    ),
    ("bg", FolderRule::Fixed(ObjectType::World)),
    ("vfx", FolderRule::Fixed(ObjectType::Vfx)),
];

impl FolderRule {
    /// Resolve the object type for a given second segment.
    pub fn resolve(&self, second: &str) -> ObjectType {
        match *self {
            FolderRule::Fixed(object_type) => object_type,
            FolderRule::BySecond { entries, default } => entries
                .iter()
                .find(|(name, _)| *name == second)
                .map(|&(_, object_type)| object_type)
                .unwrap_or(default),
        }
    }
}

impl ObjectType {
    /// Get the name of this object type.
    pub const fn name(&self) -> &'static str {
        match self {
            ObjectType::Unknown => "Unknown",
            ObjectType::LoadingScreen => "LoadingScreen",
            ObjectType::Map => "Map",
            ObjectType::Interface => "Interface",
            ObjectType::Icon => "Icon",
            ObjectType::World => "World",
            ObjectType::Housing => "Housing",
            ObjectType::Monster => "Monster",
            ObjectType::DemiHuman => "DemiHuman",
            ObjectType::Character => "Character",
            ObjectType::Weapon => "Weapon",
            ObjectType::Equipment => "Equipment",
            ObjectType::Accessory => "Accessory",
            ObjectType::Font => "Font",
            ObjectType::Vfx => "Vfx",
        }
    }

    /// Get all object types in declaration order.
    pub const fn all() -> [ObjectType; 15] {
        [
            ObjectType::Unknown,
            ObjectType::LoadingScreen,
            ObjectType::Map,
            ObjectType::Interface,
            ObjectType::Icon,
            ObjectType::World,
            ObjectType::Housing,
            ObjectType::Monster,
            ObjectType::DemiHuman,
            ObjectType::Character,
            ObjectType::Weapon,
            ObjectType::Equipment,
            ObjectType::Accessory,
            ObjectType::Font,
            ObjectType::Vfx,
        ]
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
