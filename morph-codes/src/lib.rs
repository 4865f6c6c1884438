pub mod decode;
pub mod error;
pub mod features;
pub mod fixed;
pub mod record;

pub use decode::{DecodeStatus, MorphDescription, Omission, decode, try_decode};
pub use error::DecodeError;
pub use features::{Case, Degree, Feature, FeatureKind, FeatureSet, Gender, Mood, Number, Person, Tense, Voice};
pub use fixed::{decode_fixed, short_code};
pub use record::{RecordError, VerseRef, WordRecord};

/// Part-of-speech tags used by the morphologically tagged Greek New Testament.
///
/// Serialized as the two-character abbreviation found in the source data
/// (`N-`, `V-`, `RA`, ...).
#[derive(
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Copy,
    schemars::JsonSchema,
)]
pub enum PartOfSpeech {
    #[serde(rename = "N-")]
    Noun,
    #[serde(rename = "V-")]
    Verb,
    #[serde(rename = "A-")]
    Adjective,
    #[serde(rename = "RP")]
    PersonalPronoun,
    #[serde(rename = "RR")]
    RelativePronoun,
    #[serde(rename = "RD")]
    DemonstrativePronoun,
    #[serde(rename = "RX")]
    IndefinitePronoun,
    #[serde(rename = "RI")]
    InterrogativePronoun,
    #[serde(rename = "RA")]
    DefiniteArticle,
    #[serde(rename = "C-")]
    Conjunction,
    #[serde(rename = "D-")]
    Adverb,
    #[serde(rename = "I-")]
    Interjection,
    #[serde(rename = "X-")]
    Particle,
    #[serde(rename = "P-")]
    Preposition,
}

/// Which positional schema a part of speech is parsed with.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    parse_display::Display,
)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum Category {
    /// Tense, voice, mood, then person/number or case/number/gender.
    Verb,
    /// Case, number, gender.
    Nominal,
    /// No inflection recorded in the parsing code.
    Indeclinable,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 14] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::PersonalPronoun,
        PartOfSpeech::RelativePronoun,
        PartOfSpeech::DemonstrativePronoun,
        PartOfSpeech::IndefinitePronoun,
        PartOfSpeech::InterrogativePronoun,
        PartOfSpeech::DefiniteArticle,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Adverb,
        PartOfSpeech::Interjection,
        PartOfSpeech::Particle,
        PartOfSpeech::Preposition,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "N-",
            PartOfSpeech::Verb => "V-",
            PartOfSpeech::Adjective => "A-",
            PartOfSpeech::PersonalPronoun => "RP",
            PartOfSpeech::RelativePronoun => "RR",
            PartOfSpeech::DemonstrativePronoun => "RD",
            PartOfSpeech::IndefinitePronoun => "RX",
            PartOfSpeech::InterrogativePronoun => "RI",
            PartOfSpeech::DefiniteArticle => "RA",
            PartOfSpeech::Conjunction => "C-",
            PartOfSpeech::Adverb => "D-",
            PartOfSpeech::Interjection => "I-",
            PartOfSpeech::Particle => "X-",
            PartOfSpeech::Preposition => "P-",
        }
    }

    /// Looks up a tag by abbreviation.
    ///
    /// The trailing filler is optional (`N` and `N-` are the same tag), case is
    /// ignored, and the long aliases `ADV`, `CONJ`, `PRT` and `PREP` are accepted.
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        let abbreviation = abbreviation.trim().trim_end_matches('-').to_ascii_uppercase();
        match abbreviation.as_str() {
            "ADV" => return Some(PartOfSpeech::Adverb),
            "CONJ" => return Some(PartOfSpeech::Conjunction),
            "PRT" => return Some(PartOfSpeech::Particle),
            "PREP" => return Some(PartOfSpeech::Preposition),
            _ => {}
        }
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.abbreviation().trim_end_matches('-') == abbreviation)
    }

    pub fn category(&self) -> Category {
        match self {
            PartOfSpeech::Verb => Category::Verb,
            PartOfSpeech::Noun
            | PartOfSpeech::Adjective
            | PartOfSpeech::PersonalPronoun
            | PartOfSpeech::RelativePronoun
            | PartOfSpeech::DemonstrativePronoun
            | PartOfSpeech::IndefinitePronoun
            | PartOfSpeech::InterrogativePronoun
            | PartOfSpeech::DefiniteArticle => Category::Nominal,
            PartOfSpeech::Conjunction
            | PartOfSpeech::Adverb
            | PartOfSpeech::Interjection
            | PartOfSpeech::Particle
            | PartOfSpeech::Preposition => Category::Indeclinable,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        let (english, spanish) = match self {
            PartOfSpeech::Noun => ("Noun", "Sustantivo"),
            PartOfSpeech::Verb => ("Verb", "Verbo"),
            PartOfSpeech::Adjective => ("Adjective", "Adjetivo"),
            PartOfSpeech::PersonalPronoun => ("Personal Pronoun", "Pronombre Personal"),
            PartOfSpeech::RelativePronoun => ("Relative Pronoun", "Pronombre Relativo"),
            PartOfSpeech::DemonstrativePronoun => {
                ("Demonstrative Pronoun", "Pronombre Demostrativo")
            }
            PartOfSpeech::IndefinitePronoun => ("Indefinite Pronoun", "Pronombre Indefinido"),
            // MorphGNT tags indefinite pronouns `RI` as well
            PartOfSpeech::InterrogativePronoun => (
                "Interrogative / Indefinite Pronoun",
                "Pronombre Interrogativo / Indefinido",
            ),
            PartOfSpeech::DefiniteArticle => ("Definite Article", "Artículo Definido"),
            PartOfSpeech::Conjunction => ("Conjunction", "Conjunción"),
            PartOfSpeech::Adverb => ("Adverb", "Adverbio"),
            PartOfSpeech::Interjection => ("Interjection", "Interjección"),
            PartOfSpeech::Particle => ("Particle", "Partícula"),
            PartOfSpeech::Preposition => ("Preposition", "Preposición"),
        };
        language.pick(english, spanish)
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

impl std::str::FromStr for PartOfSpeech {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::from_abbreviation(s)
            .ok_or_else(|| DecodeError::UnknownPartOfSpeech(s.to_string()))
    }
}

/// Abbreviation with filler removed and the display name for a legend entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct PosName {
    pub abbreviation: String,
    pub name: String,
}

/// Resolves a raw part-of-speech abbreviation to its legend entry.
pub fn pos_name(abbreviation: &str, language: Language) -> PosName {
    if abbreviation.trim().is_empty() {
        return PosName {
            abbreviation: String::new(),
            name: language.pick("Not available", "No disponible").to_string(),
        };
    }
    let name = match PartOfSpeech::from_abbreviation(abbreviation) {
        Some(pos) => pos.label(language),
        None => language.pick("Unknown", "Desconocido"),
    };
    PosName {
        abbreviation: abbreviation.trim().replace('-', ""),
        name: name.to_string(),
    }
}

/// Language used for feature names and fallback messages.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    serde::Serialize,
    serde::Deserialize,
    PartialEq,
    Eq,
    Ord,
    PartialOrd,
    Hash,
    schemars::JsonSchema,
)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    pub fn iso_639_3(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Spanish => "spa",
        }
    }

    pub(crate) fn pick(self, english: &'static str, spanish: &'static str) -> &'static str {
        match self {
            Language::English => english,
            Language::Spanish => spanish,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Spanish => write!(f, "Spanish"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = DecodeError;

    /// Accepts ISO 639-3 codes (`eng`, `spa`) or English names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eng" | "english" => Ok(Language::English),
            "spa" | "spanish" => Ok(Language::Spanish),
            _ => Err(DecodeError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_round_trips_for_all_tags() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_abbreviation(pos.abbreviation()), Some(pos));
        }
    }

    #[test]
    fn test_abbreviation_filler_and_case_are_ignored() {
        assert_eq!(PartOfSpeech::from_abbreviation("N"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_abbreviation("v-"), Some(PartOfSpeech::Verb));
        assert_eq!(
            PartOfSpeech::from_abbreviation(" ra "),
            Some(PartOfSpeech::DefiniteArticle)
        );
    }

    #[test]
    fn test_long_aliases() {
        assert_eq!(PartOfSpeech::from_abbreviation("ADV"), Some(PartOfSpeech::Adverb));
        assert_eq!(PartOfSpeech::from_abbreviation("CONJ"), Some(PartOfSpeech::Conjunction));
        assert_eq!(PartOfSpeech::from_abbreviation("PRT"), Some(PartOfSpeech::Particle));
        assert_eq!(PartOfSpeech::from_abbreviation("PREP"), Some(PartOfSpeech::Preposition));
    }

    #[test]
    fn test_unknown_abbreviation() {
        assert_eq!(PartOfSpeech::from_abbreviation("Q-"), None);
        assert_eq!(PartOfSpeech::from_abbreviation(""), None);
        assert!(matches!(
            "ZZ".parse::<PartOfSpeech>(),
            Err(DecodeError::UnknownPartOfSpeech(code)) if code == "ZZ"
        ));
    }

    #[test]
    fn test_categories() {
        assert_eq!(PartOfSpeech::Verb.category(), Category::Verb);
        assert_eq!(PartOfSpeech::DefiniteArticle.category(), Category::Nominal);
        assert_eq!(PartOfSpeech::InterrogativePronoun.category(), Category::Nominal);
        assert_eq!(PartOfSpeech::Preposition.category(), Category::Indeclinable);
        assert_eq!(PartOfSpeech::Adverb.category(), Category::Indeclinable);
    }

    #[test]
    fn test_serde_uses_abbreviation() {
        let json = serde_json::to_string(&PartOfSpeech::DefiniteArticle).unwrap();
        assert_eq!(json, "\"RA\"");
        let pos: PartOfSpeech = serde_json::from_str("\"V-\"").unwrap();
        assert_eq!(pos, PartOfSpeech::Verb);
    }

    #[test]
    fn test_pos_name() {
        assert_eq!(
            pos_name("RP", Language::English),
            PosName {
                abbreviation: "RP".to_string(),
                name: "Personal Pronoun".to_string()
            }
        );
        assert_eq!(pos_name("N-", Language::Spanish).name, "Sustantivo");
        assert_eq!(pos_name("N-", Language::Spanish).abbreviation, "N");
        assert_eq!(pos_name("Q-", Language::English).name, "Unknown");
        assert_eq!(pos_name("", Language::Spanish).name, "No disponible");
    }

    #[test]
    fn test_pos_name_trims_input() {
        assert_eq!(pos_name(" N- ", Language::English).abbreviation, "N");
        assert_eq!(pos_name(" N- ", Language::English).name, "Noun");
    }

    #[test]
    fn test_ri_label_covers_indefinite_use() {
        assert_eq!(
            pos_name("RI", Language::Spanish).name,
            "Pronombre Interrogativo / Indefinido"
        );
        assert_eq!(
            PartOfSpeech::InterrogativePronoun.to_string(),
            "Interrogative / Indefinite Pronoun"
        );
        assert_eq!(pos_name("RX", Language::English).name, "Indefinite Pronoun");
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("spa".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert!("fra".parse::<Language>().is_err());
        assert_eq!(Language::Spanish.iso_639_3(), "spa");
        assert_eq!(Language::default(), Language::English);
    }
}
