//! File categories derived from a path's extension.

/// Coarse category of a game file, keyed by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// Extension missing or not in the table.
    #[default]
    Unknown,
    /// `.scd` sound container.
    Sound,
    /// `.imc` image change (variant) table.
    Imc,
    /// `.avfx` visual effect.
    Vfx,
    /// `.atex` animated texture.
    Animation,
    /// `.pap` animation package.
    Pap,
    /// Equipment/race metadata and excel files.
    MetaInfo,
    /// `.mtrl` material.
    Material,
    /// `.tex` texture.
    Texture,
    /// `.mdl` model.
    Model,
    /// `.shpk` / `.shcd` shaders.
    Shader,
    /// `.fdt` font table.
    Font,
    /// `.envb` environment.
    Environment,
}

/// Built-in extension table. Extensions include the leading dot.
pub static EXTENSIONS: &[(&str, FileType)] = &[
    (".mdl", FileType::Model),
    (".tex", FileType::Texture),
    (".mtrl", FileType::Material),
    (".atex", FileType::Animation),
    (".avfx", FileType::Vfx),
    (".scd", FileType::Sound),
    (".imc", FileType::Imc),
    (".pap", FileType::Pap),
    (".eqp", FileType::MetaInfo),
    (".eqdp", FileType::MetaInfo),
    (".est", FileType::MetaInfo),
    (".exd", FileType::MetaInfo),
    (".exh", FileType::MetaInfo),
    (".shpk", FileType::Shader),
    (".shcd", FileType::Shader),
    (".fdt", FileType::Font),
    (".envb", FileType::Environment),
];

impl FileType {
    /// Get the name of this file type.
    pub const fn name(&self) -> &'static str {
        match self {
            FileType::Unknown => "Unknown",
            FileType::Sound => "Sound",
            FileType::Imc => "Imc",
            FileType::Vfx => "Vfx",
            FileType::Animation => "Animation",
            FileType::Pap => "Pap",
            FileType::MetaInfo => "MetaInfo",
            FileType::Material => "Material",
            FileType::Texture => "Texture",
            FileType::Model => "Model",
            FileType::Shader => "Shader",
            FileType::Font => "Font",
            FileType::Environment => "Environment",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Extract the extension of a path, including the leading dot.
///
/// Returns an empty string when the path has no `.`.
pub fn extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(idx) => &path[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("chara/equipment/e0001/e0001.imc"), ".imc");
        assert_eq!(extension("no_extension"), "");
        assert_eq!(extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_extension_table_unique() {
        for (i, (ext, _)) in EXTENSIONS.iter().enumerate() {
            assert!(ext.starts_with('.'));
            assert!(!EXTENSIONS[i + 1..].iter().any(|(other, _)| other == ext));
        }
    }
}
