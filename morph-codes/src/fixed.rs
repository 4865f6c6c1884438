//! The eight-character MorphGNT parsing code (`3AAI-S--`, `----NSM-`).
//!
//! Unlike the compact scheme every slot has a fixed index and `-` marks a
//! feature that does not apply, so nothing is stripped before reading.

use crate::decode::{DecodeStatus, FILLER, MorphDescription, Omission};
use crate::features::{FeatureKind, FeatureSet, Mood};
use crate::{Category, PartOfSpeech};

/// `(feature, index)` for every slot, in code order.
const LAYOUT: [(FeatureKind, usize); 8] = [
    (FeatureKind::Person, 0),
    (FeatureKind::Tense, 1),
    (FeatureKind::Voice, 2),
    (FeatureKind::Mood, 3),
    (FeatureKind::Case, 4),
    (FeatureKind::Number, 5),
    (FeatureKind::Gender, 6),
    (FeatureKind::Degree, 7),
];

fn index_of(feature: FeatureKind) -> usize {
    LAYOUT
        .iter()
        .find(|(kind, _)| *kind == feature)
        .map(|(_, index)| *index)
        .unwrap_or(LAYOUT.len())
}

/// Decodes a fixed-width code.
///
/// Empty and unknown inputs behave as in [`decode`](crate::decode()). A letter
/// with no table entry, or one in a slot that does not apply to the part of
/// speech, is omitted. Short codes are read as if padded with filler.
pub fn decode_fixed(pos: &str, parsing: &str) -> MorphDescription {
    log::trace!("decoding fixed-width {pos:?} {parsing:?}");

    let parsing = parsing.trim();
    if pos.trim().is_empty() || parsing.is_empty() {
        let part_of_speech = PartOfSpeech::from_abbreviation(pos);
        return MorphDescription::fallback(part_of_speech, parsing, DecodeStatus::EmptyInput);
    }
    let Some(part_of_speech) = PartOfSpeech::from_abbreviation(pos) else {
        return MorphDescription::fallback(None, parsing, DecodeStatus::UnknownPartOfSpeech);
    };

    let code: Vec<char> = parsing.chars().map(|c| c.to_ascii_uppercase()).collect();
    let mut features = Vec::new();
    let mut omissions = Vec::new();
    for (kind, index) in LAYOUT {
        let Some(&found) = code.get(index).filter(|c| **c != FILLER) else {
            continue;
        };
        match kind.decode(found).filter(|_| kind.applies_to(part_of_speech)) {
            Some(feature) => features.push(feature),
            None => {
                log::debug!("omitting {kind} at position {index}: {found:?}");
                omissions.push(Omission {
                    feature: kind,
                    position: index,
                    found: Some(found),
                });
            }
        }
    }
    if code.len() > LAYOUT.len() {
        log::debug!("ignoring {} characters past the last slot", code.len() - LAYOUT.len());
    }

    if features.is_empty()
        && omissions.is_empty()
        && part_of_speech.category() == Category::Indeclinable
    {
        return MorphDescription::fallback(Some(part_of_speech), parsing, DecodeStatus::NoSchema);
    }

    features.sort_by_key(|feature| feature.kind());
    let clean_code = code.iter().filter(|c| **c != FILLER).collect();
    MorphDescription::decoded(part_of_speech, clean_code, features, omissions)
}

/// Compact display form of a fixed-width code, e.g. `V-AAI-3S`, `RA-NSM`, `C`.
///
/// Falls back to the abbreviation without filler for parts of speech that
/// carry no inflection or are not recognised.
pub fn short_code(pos: &str, parsing: &str) -> String {
    if pos.trim().is_empty() || parsing.trim().is_empty() {
        return String::new();
    }
    let bare = pos.trim().replace(FILLER, "");
    let Some(part_of_speech) = PartOfSpeech::from_abbreviation(pos) else {
        return bare;
    };

    let code: Vec<char> = parsing.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
    let letters = |slots: &[FeatureKind]| -> String {
        slots
            .iter()
            .filter_map(|kind| code.get(index_of(*kind)))
            .filter(|c| **c != FILLER)
            .collect()
    };

    let details = match part_of_speech.category() {
        Category::Verb => {
            let head = letters(&[FeatureKind::Tense, FeatureKind::Voice, FeatureKind::Mood]);
            let mood = code
                .get(index_of(FeatureKind::Mood))
                .and_then(|c| Mood::from_code(*c));
            let tail = match mood {
                Some(Mood::Participle) => {
                    letters(&[FeatureKind::Case, FeatureKind::Number, FeatureKind::Gender])
                }
                _ => letters(&[FeatureKind::Person, FeatureKind::Number]),
            };
            if tail.is_empty() { head } else { format!("{head}-{tail}") }
        }
        Category::Nominal => letters(&[FeatureKind::Case, FeatureKind::Number, FeatureKind::Gender]),
        Category::Indeclinable => return bare,
    };

    if details.is_empty() {
        bare
    } else {
        format!("{bare}-{details}")
    }
}
