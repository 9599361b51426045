//! Animation key extraction.
//!
//! Action timelines (`.tmb`) and the base human animation package (`.pap`)
//! are keyed by the path fragment after their fixed prefix. This is
//! independent of the descriptor pipeline.

use regex::Regex;

use crate::normalize::normalize;

/// Extracts animation keys from timeline and animation package paths.
#[derive(Debug, Clone)]
pub struct AnimationKeyExtractor {
    timeline: Regex,
    package: Regex,
}

const TIMELINE_PATTERN: &str = r"chara/action/(?P<key>[^\s]+?)\.tmb";
const PACKAGE_PATTERN: &str = r"chara/human/c0101/animation/a0001/[^\s]+?/(?P<key>[^\s]+?)\.pap";

impl AnimationKeyExtractor {
    /// Compile the built-in timeline and package layouts.
    pub fn new() -> Self {
        Self {
            timeline: Regex::new(TIMELINE_PATTERN).expect("timeline pattern compiles"),
            package: Regex::new(PACKAGE_PATTERN).expect("package pattern compiles"),
        }
    }

    /// Extract the lower-cased key of an animation path.
    ///
    /// The timeline layout is tried first. Returns an empty string when
    /// neither layout matches.
    pub fn extract(&self, path: &str) -> String {
        let path = normalize(path);
        [&self.timeline, &self.package]
            .into_iter()
            .find_map(|regex| regex.captures(&path))
            .and_then(|captures| captures.name("key").map(|m| m.as_str().to_string()))
            .unwrap_or_default()
    }
}

impl Default for AnimationKeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}
