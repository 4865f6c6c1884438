//! Grammatical features encoded in Greek parsing codes

use crate::{Category, Language, PartOfSpeech};
use schemars::JsonSchema;

pub trait FeatureSet: Sized + Copy {
    fn name() -> &'static str;
    fn kind() -> FeatureKind;
    fn applies_to(pos: PartOfSpeech) -> bool;
    /// Maps a single code letter to a value. Lowercase letters are accepted.
    fn from_code(code: char) -> Option<Self>;
    fn label(self, language: Language) -> &'static str;
}

/// Tense is the first letter of every verb code. Perfect and pluperfect each
/// have two letters in circulation (`R`/`X` and `L`/`Y`), depending on which
/// tagging scheme produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, JsonSchema)]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Aorist,
    Perfect,
    Pluperfect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, JsonSchema)]
pub enum Voice {
    Active,
    Middle,
    Passive,
    /// Middle or passive in form, active in meaning.
    Deponent,
}

/// Participle and infinitive are moods here, as in the tagged text. A
/// participle takes case, number and gender instead of person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, JsonSchema)]
pub enum Mood {
    Indicative,
    Subjunctive,
    Optative,
    Imperative,
    Infinitive,
    Participle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, JsonSchema)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, JsonSchema)]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, JsonSchema)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Vocative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, JsonSchema)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// Degree of comparison, only recorded by the fixed-width scheme (last slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize, JsonSchema)]
pub enum Degree {
    Comparative,
    Superlative,
}

impl FeatureSet for Tense {
    fn name() -> &'static str {
        "Tense"
    }
    fn kind() -> FeatureKind {
        FeatureKind::Tense
    }
    fn applies_to(pos: PartOfSpeech) -> bool {
        pos.category() == Category::Verb
    }
    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'P' => Some(Tense::Present),
            'I' => Some(Tense::Imperfect),
            'F' => Some(Tense::Future),
            'A' => Some(Tense::Aorist),
            'R' | 'X' => Some(Tense::Perfect),
            'L' | 'Y' => Some(Tense::Pluperfect),
            _ => None,
        }
    }
    fn label(self, language: Language) -> &'static str {
        match self {
            Tense::Present => language.pick("Present", "Presente"),
            Tense::Imperfect => language.pick("Imperfect", "Imperfecto"),
            Tense::Future => language.pick("Future", "Futuro"),
            Tense::Aorist => language.pick("Aorist", "Aoristo"),
            Tense::Perfect => language.pick("Perfect", "Perfecto"),
            Tense::Pluperfect => language.pick("Pluperfect", "Pluscuamperfecto"),
        }
    }
}

impl FeatureSet for Voice {
    fn name() -> &'static str {
        "Voice"
    }
    fn kind() -> FeatureKind {
        FeatureKind::Voice
    }
    fn applies_to(pos: PartOfSpeech) -> bool {
        pos.category() == Category::Verb
    }
    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'A' => Some(Voice::Active),
            'M' => Some(Voice::Middle),
            'P' => Some(Voice::Passive),
            'D' => Some(Voice::Deponent),
            _ => None,
        }
    }
    fn label(self, language: Language) -> &'static str {
        match self {
            Voice::Active => language.pick("Active", "Activa"),
            Voice::Middle => language.pick("Middle", "Media"),
            Voice::Passive => language.pick("Passive", "Pasiva"),
            Voice::Deponent => language.pick("Deponent", "Deponente"),
        }
    }
}

impl FeatureSet for Mood {
    fn name() -> &'static str {
        "Mood"
    }
    fn kind() -> FeatureKind {
        FeatureKind::Mood
    }
    fn applies_to(pos: PartOfSpeech) -> bool {
        pos.category() == Category::Verb
    }
    fn from_code(code: char) -> Option<Self> {
        // `M` and `D` both mark the imperative
        match code.to_ascii_uppercase() {
            'I' => Some(Mood::Indicative),
            'S' => Some(Mood::Subjunctive),
            'O' => Some(Mood::Optative),
            'M' | 'D' => Some(Mood::Imperative),
            'N' => Some(Mood::Infinitive),
            'P' => Some(Mood::Participle),
            _ => None,
        }
    }
    fn label(self, language: Language) -> &'static str {
        match self {
            Mood::Indicative => language.pick("Indicative", "Indicativo"),
            Mood::Subjunctive => language.pick("Subjunctive", "Subjuntivo"),
            Mood::Optative => language.pick("Optative", "Optativo"),
            Mood::Imperative => language.pick("Imperative", "Imperativo"),
            Mood::Infinitive => language.pick("Infinitive", "Infinitivo"),
            Mood::Participle => language.pick("Participle", "Participio"),
        }
    }
}

impl FeatureSet for Person {
    fn name() -> &'static str {
        "Person"
    }
    fn kind() -> FeatureKind {
        FeatureKind::Person
    }
    fn applies_to(pos: PartOfSpeech) -> bool {
        pos.category() == Category::Verb
    }
    fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(Person::First),
            '2' => Some(Person::Second),
            '3' => Some(Person::Third),
            _ => None,
        }
    }
    fn label(self, language: Language) -> &'static str {
        match self {
            Person::First => language.pick("1st Person", "1ra Persona"),
            Person::Second => language.pick("2nd Person", "2da Persona"),
            Person::Third => language.pick("3rd Person", "3ra Persona"),
        }
    }
}

impl FeatureSet for Number {
    fn name() -> &'static str {
        "Number"
    }
    fn kind() -> FeatureKind {
        FeatureKind::Number
    }
    fn applies_to(pos: PartOfSpeech) -> bool {
        // Verbs carry number both as finite forms and as participles
        matches!(pos.category(), Category::Verb | Category::Nominal)
    }
    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'S' => Some(Number::Singular),
            'P' => Some(Number::Plural),
            _ => None,
        }
    }
    fn label(self, _language: Language) -> &'static str {
        match self {
            Number::Singular => "Singular",
            Number::Plural => "Plural",
        }
    }
}

impl FeatureSet for Case {
    fn name() -> &'static str {
        "Case"
    }
    fn kind() -> FeatureKind {
        FeatureKind::Case
    }
    fn applies_to(pos: PartOfSpeech) -> bool {
        matches!(pos.category(), Category::Verb | Category::Nominal)
    }
    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'N' => Some(Case::Nominative),
            'G' => Some(Case::Genitive),
            'D' => Some(Case::Dative),
            'A' => Some(Case::Accusative),
            'V' => Some(Case::Vocative),
            _ => None,
        }
    }
    fn label(self, language: Language) -> &'static str {
        match self {
            Case::Nominative => language.pick("Nominative", "Nominativo"),
            Case::Genitive => language.pick("Genitive", "Genitivo"),
            Case::Dative => language.pick("Dative", "Dativo"),
            Case::Accusative => language.pick("Accusative", "Acusativo"),
            Case::Vocative => language.pick("Vocative", "Vocativo"),
        }
    }
}

impl FeatureSet for Gender {
    fn name() -> &'static str {
        "Gender"
    }
    fn kind() -> FeatureKind {
        FeatureKind::Gender
    }
    fn applies_to(pos: PartOfSpeech) -> bool {
        matches!(pos.category(), Category::Verb | Category::Nominal)
    }
    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Gender::Masculine),
            'F' => Some(Gender::Feminine),
            'N' => Some(Gender::Neuter),
            _ => None,
        }
    }
    fn label(self, language: Language) -> &'static str {
        match self {
            Gender::Masculine => language.pick("Masculine", "Masculino"),
            Gender::Feminine => language.pick("Feminine", "Femenino"),
            Gender::Neuter => language.pick("Neuter", "Neutro"),
        }
    }
}

impl FeatureSet for Degree {
    fn name() -> &'static str {
        "Degree"
    }
    fn kind() -> FeatureKind {
        FeatureKind::Degree
    }
    fn applies_to(pos: PartOfSpeech) -> bool {
        matches!(pos, PartOfSpeech::Adjective | PartOfSpeech::Adverb)
    }
    fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'C' => Some(Degree::Comparative),
            'S' => Some(Degree::Superlative),
            _ => None,
        }
    }
    fn label(self, language: Language) -> &'static str {
        match self {
            Degree::Comparative => language.pick("Comparative", "Comparativo"),
            Degree::Superlative => language.pick("Superlative", "Superlativo"),
        }
    }
}

/// Which lookup table applies at a slot of a parsing code.
///
/// Declaration order is the order features appear in a description.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    JsonSchema,
    parse_display::Display,
)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum FeatureKind {
    Tense,
    Voice,
    Mood,
    Person,
    Case,
    Number,
    Gender,
    Degree,
}

impl FeatureKind {
    pub fn decode(self, code: char) -> Option<Feature> {
        match self {
            FeatureKind::Tense => Tense::from_code(code).map(Feature::Tense),
            FeatureKind::Voice => Voice::from_code(code).map(Feature::Voice),
            FeatureKind::Mood => Mood::from_code(code).map(Feature::Mood),
            FeatureKind::Person => Person::from_code(code).map(Feature::Person),
            FeatureKind::Case => Case::from_code(code).map(Feature::Case),
            FeatureKind::Number => Number::from_code(code).map(Feature::Number),
            FeatureKind::Gender => Gender::from_code(code).map(Feature::Gender),
            FeatureKind::Degree => Degree::from_code(code).map(Feature::Degree),
        }
    }

    pub fn applies_to(self, pos: PartOfSpeech) -> bool {
        match self {
            FeatureKind::Tense => Tense::applies_to(pos),
            FeatureKind::Voice => Voice::applies_to(pos),
            FeatureKind::Mood => Mood::applies_to(pos),
            FeatureKind::Person => Person::applies_to(pos),
            FeatureKind::Case => Case::applies_to(pos),
            FeatureKind::Number => Number::applies_to(pos),
            FeatureKind::Gender => Gender::applies_to(pos),
            FeatureKind::Degree => Degree::applies_to(pos),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::Tense => Tense::name(),
            FeatureKind::Voice => Voice::name(),
            FeatureKind::Mood => Mood::name(),
            FeatureKind::Person => Person::name(),
            FeatureKind::Case => Case::name(),
            FeatureKind::Number => Number::name(),
            FeatureKind::Gender => Gender::name(),
            FeatureKind::Degree => Degree::name(),
        }
    }
}

/// One decoded value, tagged with the table it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, JsonSchema)]
#[serde(tag = "feature", content = "value", rename_all = "snake_case")]
pub enum Feature {
    Tense(Tense),
    Voice(Voice),
    Mood(Mood),
    Person(Person),
    Case(Case),
    Number(Number),
    Gender(Gender),
    Degree(Degree),
}

impl Feature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Feature::Tense(_) => FeatureKind::Tense,
            Feature::Voice(_) => FeatureKind::Voice,
            Feature::Mood(_) => FeatureKind::Mood,
            Feature::Person(_) => FeatureKind::Person,
            Feature::Case(_) => FeatureKind::Case,
            Feature::Number(_) => FeatureKind::Number,
            Feature::Gender(_) => FeatureKind::Gender,
            Feature::Degree(_) => FeatureKind::Degree,
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match *self {
            Feature::Tense(value) => value.label(language),
            Feature::Voice(value) => value.label(language),
            Feature::Mood(value) => value.label(language),
            Feature::Person(value) => value.label(language),
            Feature::Case(value) => value.label(language),
            Feature::Number(value) => value.label(language),
            Feature::Gender(value) => value.label(language),
            Feature::Degree(value) => value.label(language),
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label(Language::English))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternate_letters_map_to_same_value() {
        assert_eq!(Tense::from_code('R'), Tense::from_code('X'));
        assert_eq!(Tense::from_code('L'), Some(Tense::Pluperfect));
        assert_eq!(Tense::from_code('Y'), Some(Tense::Pluperfect));
        assert_eq!(Mood::from_code('M'), Mood::from_code('D'));
    }

    #[test]
    fn test_lowercase_codes() {
        assert_eq!(Case::from_code('g'), Some(Case::Genitive));
        assert_eq!(Voice::from_code('p'), Some(Voice::Passive));
    }

    #[test]
    fn test_unmapped_letters() {
        assert_eq!(Tense::from_code('Z'), None);
        assert_eq!(Person::from_code('4'), None);
        assert_eq!(Gender::from_code('-'), None);
        assert_eq!(FeatureKind::Number.decode('Q'), None);
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(
            FeatureKind::Mood.decode('P'),
            Some(Feature::Mood(Mood::Participle))
        );
        assert_eq!(FeatureKind::Case.decode('P'), None);
        assert_eq!(Feature::Gender(Gender::Neuter).kind(), FeatureKind::Gender);
        assert_eq!(Tense::kind(), FeatureKind::Tense);
        assert_eq!(FeatureKind::Degree.name(), "Degree");
    }

    #[test]
    fn test_applies_to() {
        assert!(FeatureKind::Tense.applies_to(PartOfSpeech::Verb));
        assert!(!FeatureKind::Tense.applies_to(PartOfSpeech::Noun));
        assert!(FeatureKind::Case.applies_to(PartOfSpeech::Verb));
        assert!(FeatureKind::Gender.applies_to(PartOfSpeech::DefiniteArticle));
        assert!(!FeatureKind::Case.applies_to(PartOfSpeech::Preposition));
        assert!(FeatureKind::Degree.applies_to(PartOfSpeech::Adverb));
        assert!(!FeatureKind::Degree.applies_to(PartOfSpeech::Verb));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Person::Third.label(Language::English), "3rd Person");
        assert_eq!(Person::First.label(Language::Spanish), "1ra Persona");
        assert_eq!(Voice::Active.label(Language::Spanish), "Activa");
        assert_eq!(Feature::Tense(Tense::Aorist).to_string(), "Aorist");
        assert_eq!(FeatureKind::Mood.to_string(), "mood");
    }

    #[test]
    fn test_kind_order_matches_description_order() {
        let mut kinds = vec![
            FeatureKind::Gender,
            FeatureKind::Person,
            FeatureKind::Tense,
            FeatureKind::Number,
            FeatureKind::Mood,
            FeatureKind::Case,
            FeatureKind::Voice,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                FeatureKind::Tense,
                FeatureKind::Voice,
                FeatureKind::Mood,
                FeatureKind::Person,
                FeatureKind::Case,
                FeatureKind::Number,
                FeatureKind::Gender,
            ]
        );
    }

    #[test]
    fn test_feature_serialization() {
        let json = serde_json::to_string(&Feature::Case(Case::Dative)).unwrap();
        assert_eq!(json, r#"{"feature":"case","value":"Dative"}"#);
    }
}
