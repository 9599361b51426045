//! Gender and race codes.
//!
//! Character, equipment and accessory paths embed a four-digit model code
//! such as `c0201`: the first two digits select the race/gender pair and
//! the last two distinguish player models (`01`) from NPC models (`04`).

use std::str::FromStr;

use crate::Error;

/// Gender of a character model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
    MaleNpc,
    FemaleNpc,
}

/// Race of a character model, without gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelRace {
    #[default]
    Unknown,
    Midlander,
    Highlander,
    Elezen,
    Lalafell,
    Miqote,
    Roegadyn,
    AuRa,
    Hrothgar,
    Viera,
}

macro_rules! gender_races {
    ($($variant:ident = $value:literal, $code:literal, $gender:ident, $race:ident;)*) => {
        /// Combined gender and race model code.
        ///
        /// The discriminant equals the numeric value of the path code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        pub enum GenderRace {
            #[default]
            Unknown = 0,
            $($variant = $value,)*
        }

        impl GenderRace {
            /// Get the four-digit path code of this gender-race.
            pub const fn code(&self) -> &'static str {
                match self {
                    GenderRace::Unknown => "0000",
                    $(GenderRace::$variant => $code,)*
                }
            }

            /// Split into gender and race.
            pub const fn split(&self) -> (Gender, ModelRace) {
                match self {
                    GenderRace::Unknown => (Gender::Unknown, ModelRace::Unknown),
                    $(GenderRace::$variant => (Gender::$gender, ModelRace::$race),)*
                }
            }

            /// Get the name of this gender-race.
            pub const fn name(&self) -> &'static str {
                match self {
                    GenderRace::Unknown => "Unknown",
                    $(GenderRace::$variant => stringify!($variant),)*
                }
            }
        }

        /// Built-in gender-race code table.
        pub static GENDER_RACES: &[(&str, GenderRace)] = &[
            $(($code, GenderRace::$variant),)*
        ];
    };
}

gender_races! {
    MidlanderMale = 101, "0101", Male, Midlander;
    MidlanderMaleNpc = 104, "0104", MaleNpc, Midlander;
    MidlanderFemale = 201, "0201", Female, Midlander;
    MidlanderFemaleNpc = 204, "0204", FemaleNpc, Midlander;
    HighlanderMale = 301, "0301", Male, Highlander;
    HighlanderMaleNpc = 304, "0304", MaleNpc, Highlander;
    HighlanderFemale = 401, "0401", Female, Highlander;
    HighlanderFemaleNpc = 404, "0404", FemaleNpc, Highlander;
    ElezenMale = 501, "0501", Male, Elezen;
    ElezenMaleNpc = 504, "0504", MaleNpc, Elezen;
    ElezenFemale = 601, "0601", Female, Elezen;
    ElezenFemaleNpc = 604, "0604", FemaleNpc, Elezen;
    MiqoteMale = 701, "0701", Male, Miqote;
    MiqoteMaleNpc = 704, "0704", MaleNpc, Miqote;
    MiqoteFemale = 801, "0801", Female, Miqote;
    MiqoteFemaleNpc = 804, "0804", FemaleNpc, Miqote;
    RoegadynMale = 901, "0901", Male, Roegadyn;
    RoegadynMaleNpc = 904, "0904", MaleNpc, Roegadyn;
    RoegadynFemale = 1001, "1001", Female, Roegadyn;
    RoegadynFemaleNpc = 1004, "1004", FemaleNpc, Roegadyn;
    LalafellMale = 1101, "1101", Male, Lalafell;
    LalafellMaleNpc = 1104, "1104", MaleNpc, Lalafell;
    LalafellFemale = 1201, "1201", Female, Lalafell;
    LalafellFemaleNpc = 1204, "1204", FemaleNpc, Lalafell;
    AuRaMale = 1301, "1301", Male, AuRa;
    AuRaMaleNpc = 1304, "1304", MaleNpc, AuRa;
    AuRaFemale = 1401, "1401", Female, AuRa;
    AuRaFemaleNpc = 1404, "1404", FemaleNpc, AuRa;
    HrothgarMale = 1501, "1501", Male, Hrothgar;
    HrothgarMaleNpc = 1504, "1504", MaleNpc, Hrothgar;
    HrothgarFemale = 1601, "1601", Female, Hrothgar;
    HrothgarFemaleNpc = 1604, "1604", FemaleNpc, Hrothgar;
    VieraMale = 1701, "1701", Male, Viera;
    VieraMaleNpc = 1704, "1704", MaleNpc, Viera;
    VieraFemale = 1801, "1801", Female, Viera;
    VieraFemaleNpc = 1804, "1804", FemaleNpc, Viera;
    UnknownMaleNpc = 9104, "9104", MaleNpc, Unknown;
    UnknownFemaleNpc = 9204, "9204", FemaleNpc, Unknown;
}

impl FromStr for GenderRace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GENDER_RACES
            .iter()
            .find(|(code, _)| *code == s)
            .map(|&(_, gender_race)| gender_race)
            .ok_or_else(|| Error::UnknownGenderRace(s.to_string()))
    }
}

impl std::fmt::Display for GenderRace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_discriminant() {
        for &(code, gender_race) in GENDER_RACES {
            assert_eq!(gender_race.code(), code);
            assert_eq!(code.parse::<u16>().unwrap(), gender_race as u16);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0201".parse::<GenderRace>(), Ok(GenderRace::MidlanderFemale));
        assert_eq!("1804".parse::<GenderRace>(), Ok(GenderRace::VieraFemaleNpc));
        assert!("0102".parse::<GenderRace>().is_err());
        assert!("0000".parse::<GenderRace>().is_err());
    }

    #[test]
    fn test_split() {
        assert_eq!(
            GenderRace::AuRaFemale.split(),
            (Gender::Female, ModelRace::AuRa)
        );
        assert_eq!(
            GenderRace::UnknownMaleNpc.split(),
            (Gender::MaleNpc, ModelRace::Unknown)
        );
    }
}
