use crate::features::FeatureKind;

/// Errors reported by the strict decoding entry points.
///
/// The lenient [`decode`](crate::decode()) never fails; [`try_decode`](crate::try_decode)
/// turns its fallback statuses into these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("part of speech or parsing code is empty")]
    EmptyInput,

    #[error("unknown part of speech: {0:?}")]
    UnknownPartOfSpeech(String),

    #[error("unknown display language: {0:?}")]
    UnknownLanguage(String),

    #[error("{found:?} at position {position} is not a valid {feature}")]
    UnmappedPositionalValue {
        feature: FeatureKind,
        position: usize,
        found: char,
    },

    #[error("parsing code ends before the {feature} at position {position}")]
    MissingPosition { feature: FeatureKind, position: usize },
}
