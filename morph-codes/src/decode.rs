//! Decoder for compact parsing codes (`PAI-3S`, `AAP-NSM`, `NSM`).
//!
//! Filler dashes are stripped first, so slot positions below refer to the
//! dense code. Every input has a defined result; see [`DecodeStatus`].

use crate::error::DecodeError;
use crate::features::{Feature, FeatureKind, Mood};
use crate::{Category, Language, PartOfSpeech};

pub(crate) const FILLER: char = '-';

/// One position in a layout: which table applies, and whether a code may end
/// before it without counting as an omission.
#[derive(Debug, Clone, Copy)]
struct Slot {
    feature: FeatureKind,
    optional: bool,
}

const fn required(feature: FeatureKind) -> Slot {
    Slot {
        feature,
        optional: false,
    }
}

const fn optional(feature: FeatureKind) -> Slot {
    Slot {
        feature,
        optional: true,
    }
}

const VERB_HEAD: &[Slot] = &[
    required(FeatureKind::Tense),
    required(FeatureKind::Voice),
    required(FeatureKind::Mood),
];
const FINITE_TAIL: &[Slot] = &[required(FeatureKind::Person), required(FeatureKind::Number)];
const INFINITIVE_TAIL: &[Slot] = &[optional(FeatureKind::Number)];
const PARTICIPLE_TAIL: &[Slot] = &[
    required(FeatureKind::Case),
    required(FeatureKind::Number),
    required(FeatureKind::Gender),
];
const NOMINAL: &[Slot] = &[
    required(FeatureKind::Case),
    required(FeatureKind::Number),
    required(FeatureKind::Gender),
];

fn verb_tail(mood: Option<Mood>) -> &'static [Slot] {
    match mood {
        Some(Mood::Participle) => PARTICIPLE_TAIL,
        Some(Mood::Infinitive) => INFINITIVE_TAIL,
        _ => FINITE_TAIL,
    }
}

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
    schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStatus {
    /// Every slot of the layout decoded.
    Complete,
    /// Some slots decoded, others were omitted.
    Partial,
    /// A layout applied but no slot decoded.
    Unmapped,
    /// The part of speech carries no inflection, so there is nothing to analyse.
    NoSchema,
    /// The part-of-speech abbreviation is not recognised.
    UnknownPartOfSpeech,
    /// Part of speech or parsing code was missing.
    EmptyInput,
}

/// A slot that was skipped while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct Omission {
    pub feature: FeatureKind,
    pub position: usize,
    /// `None` when the code ended before this position.
    pub found: Option<char>,
}

impl Omission {
    pub fn to_error(&self) -> DecodeError {
        match self.found {
            Some(found) => DecodeError::UnmappedPositionalValue {
                feature: self.feature,
                position: self.position,
                found,
            },
            None => DecodeError::MissingPosition {
                feature: self.feature,
                position: self.position,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct MorphDescription {
    /// Part of speech, when the abbreviation was recognised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PartOfSpeech>,
    /// The code with filler removed, or the raw code echoed back for fallbacks.
    pub clean_code: String,
    pub features: Vec<Feature>,
    pub status: DecodeStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub omissions: Vec<Omission>,
}

impl MorphDescription {
    pub(crate) fn fallback(pos: Option<PartOfSpeech>, raw: &str, status: DecodeStatus) -> Self {
        log::debug!("no analysis for {pos:?} {raw:?}: {status:?}");
        Self {
            pos,
            clean_code: raw.to_string(),
            features: Vec::new(),
            status,
            omissions: Vec::new(),
        }
    }

    pub(crate) fn decoded(
        pos: PartOfSpeech,
        clean_code: String,
        features: Vec<Feature>,
        omissions: Vec<Omission>,
    ) -> Self {
        let status = if omissions.is_empty() {
            DecodeStatus::Complete
        } else if features.is_empty() {
            DecodeStatus::Unmapped
        } else {
            DecodeStatus::Partial
        };
        Self {
            pos: Some(pos),
            clean_code,
            features,
            status,
            omissions,
        }
    }

    pub fn is_fully_decoded(&self) -> bool {
        self.status == DecodeStatus::Complete
    }

    pub fn labels(&self, language: Language) -> Vec<&'static str> {
        self.features
            .iter()
            .map(|feature| feature.label(language))
            .collect()
    }

    /// Renderable text: the feature names joined by spaces, or a message for
    /// results with nothing to show.
    pub fn describe(&self, language: Language) -> String {
        match self.status {
            DecodeStatus::Complete | DecodeStatus::Partial => self.labels(language).join(" "),
            DecodeStatus::Unmapped => language
                .pick(
                    "Detailed analysis not available for this code.",
                    "Análisis detallado no disponible para este código.",
                )
                .to_string(),
            DecodeStatus::NoSchema | DecodeStatus::UnknownPartOfSpeech => language
                .pick(
                    "No detailed analysis applicable",
                    "No se requiere análisis detallado",
                )
                .to_string(),
            DecodeStatus::EmptyInput => language.pick("Not available", "No disponible").to_string(),
        }
    }

    pub fn get(&self, kind: FeatureKind) -> Option<Feature> {
        self.features.iter().copied().find(|f| f.kind() == kind)
    }
}

/// Decodes a compact parsing code for the given part-of-speech abbreviation.
///
/// Never fails. Resolution order:
/// 1. empty `pos` gives [`DecodeStatus::EmptyInput`];
/// 2. a recognised part of speech without inflection gives [`DecodeStatus::NoSchema`];
/// 3. a code with nothing but filler gives [`DecodeStatus::EmptyInput`];
/// 4. an unrecognised abbreviation gives [`DecodeStatus::UnknownPartOfSpeech`];
/// 5. otherwise the category layout is read slot by slot, omitting any slot
///    whose letter has no table entry. Characters past the end of the layout
///    are ignored.
pub fn decode(pos: &str, parsing: &str) -> MorphDescription {
    log::trace!("decoding {pos:?} {parsing:?}");

    let parsing = parsing.trim();
    if pos.trim().is_empty() {
        return MorphDescription::fallback(None, parsing, DecodeStatus::EmptyInput);
    }
    let part_of_speech = PartOfSpeech::from_abbreviation(pos);
    if let Some(p) = part_of_speech.filter(|p| p.category() == Category::Indeclinable) {
        return MorphDescription::fallback(Some(p), parsing, DecodeStatus::NoSchema);
    }

    let code: Vec<char> = parsing
        .chars()
        .filter(|c| *c != FILLER)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if code.is_empty() {
        return MorphDescription::fallback(part_of_speech, parsing, DecodeStatus::EmptyInput);
    }
    let Some(part_of_speech) = part_of_speech else {
        return MorphDescription::fallback(None, parsing, DecodeStatus::UnknownPartOfSpeech);
    };

    let clean_code: String = code.iter().collect();
    let mut reader = SlotReader::new(&code);
    match part_of_speech.category() {
        Category::Verb => {
            reader.read(VERB_HEAD);
            let mood = match reader.features.last() {
                Some(Feature::Mood(mood)) => Some(*mood),
                _ => None,
            };
            reader.read(verb_tail(mood));
        }
        Category::Nominal => reader.read(NOMINAL),
        Category::Indeclinable => {
            return MorphDescription::fallback(Some(part_of_speech), parsing, DecodeStatus::NoSchema);
        }
    }
    if reader.position < code.len() {
        log::debug!(
            "ignoring {} characters past the last slot",
            code.len() - reader.position
        );
    }

    MorphDescription::decoded(part_of_speech, clean_code, reader.features, reader.omissions)
}

/// Like [`decode`], but reports fallbacks and the first omitted slot as errors.
///
/// Parts of speech without inflection are not an error: they yield an empty
/// [`DecodeStatus::NoSchema`] description.
pub fn try_decode(pos: &str, parsing: &str) -> Result<MorphDescription, DecodeError> {
    let description = decode(pos, parsing);
    match description.status {
        DecodeStatus::EmptyInput => Err(DecodeError::EmptyInput),
        DecodeStatus::UnknownPartOfSpeech => Err(DecodeError::UnknownPartOfSpeech(pos.to_string())),
        DecodeStatus::Partial | DecodeStatus::Unmapped => Err(description.omissions[0].to_error()),
        DecodeStatus::Complete | DecodeStatus::NoSchema => Ok(description),
    }
}

/// Sequential cursor over a dense code.
struct SlotReader<'a> {
    code: &'a [char],
    position: usize,
    features: Vec<Feature>,
    omissions: Vec<Omission>,
}

impl<'a> SlotReader<'a> {
    fn new(code: &'a [char]) -> Self {
        Self {
            code,
            position: 0,
            features: Vec::new(),
            omissions: Vec::new(),
        }
    }

    fn read(&mut self, slots: &[Slot]) {
        for slot in slots {
            let position = self.position;
            self.position += 1;
            let found = self.code.get(position).copied();
            match found.and_then(|c| slot.feature.decode(c)) {
                Some(feature) => self.features.push(feature),
                None if found.is_none() && slot.optional => {}
                None => {
                    log::debug!(
                        "omitting {} at position {position}: {found:?}",
                        slot.feature
                    );
                    self.omissions.push(Omission {
                        feature: slot.feature,
                        position,
                        found,
                    });
                }
            }
        }
    }
}
