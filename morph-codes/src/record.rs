use crate::fixed::decode_fixed;
use crate::{MorphDescription, PartOfSpeech};

/// Book, chapter and verse from the `BBCCVV` column of a MorphGNT line.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
)]
pub struct VerseRef {
    pub book: u8,
    pub chapter: u8,
    pub verse: u8,
}

impl std::str::FromStr for VerseRef {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordError::InvalidReference(s.to_string()));
        }
        let number = |range: std::ops::Range<usize>| {
            s[range]
                .parse::<u8>()
                .map_err(|_| RecordError::InvalidReference(s.to_string()))
        };
        Ok(VerseRef {
            book: number(0..2)?,
            chapter: number(2..4)?,
            verse: number(4..6)?,
        })
    }
}

impl std::fmt::Display for VerseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// One word of a MorphGNT text file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct WordRecord {
    pub reference: VerseRef,
    pub pos: String,
    pub parsing: String,
    /// Surface text including punctuation.
    pub text: String,
    pub word: String,
    pub normalized: String,
    pub lemma: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("line is missing the {0} column")]
    MissingColumn(&'static str),

    #[error("invalid book/chapter/verse reference: {0:?}")]
    InvalidReference(String),
}

const COLUMNS: [&str; 7] = [
    "reference",
    "part of speech",
    "parsing",
    "text",
    "word",
    "normalized",
    "lemma",
];

impl WordRecord {
    /// Parses a whitespace-separated line:
    /// `BBCCVV pos parsing text word normalized lemma`.
    pub fn parse_line(line: &str) -> Result<Self, RecordError> {
        let mut columns = line.split_whitespace();
        let mut next = |index: usize| {
            columns
                .next()
                .ok_or(RecordError::MissingColumn(COLUMNS[index]))
        };

        let reference = next(0)?.parse()?;
        let pos = next(1)?.to_string();
        let parsing = next(2)?.to_string();
        let text = next(3)?.to_string();
        let word = next(4)?.to_string();
        let normalized = next(5)?.to_string();
        let lemma = next(6)?.to_string();

        Ok(WordRecord {
            reference,
            pos,
            parsing,
            text,
            word,
            normalized,
            lemma,
        })
    }

    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        PartOfSpeech::from_abbreviation(&self.pos)
    }

    pub fn decode(&self) -> MorphDescription {
        decode_fixed(&self.pos, &self.parsing)
    }
}

impl std::str::FromStr for WordRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WordRecord::parse_line(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DecodeStatus, Language};

    #[test]
    fn test_parse_line() {
        let record = WordRecord::parse_line("040101 N- ----NSM- λόγος, λόγος λόγος λόγος").unwrap();
        assert_eq!(
            record.reference,
            VerseRef {
                book: 4,
                chapter: 1,
                verse: 1
            }
        );
        assert_eq!(record.pos, "N-");
        assert_eq!(record.parsing, "----NSM-");
        assert_eq!(record.text, "λόγος,");
        assert_eq!(record.lemma, "λόγος");
        assert_eq!(record.part_of_speech(), Some(PartOfSpeech::Noun));
        assert_eq!(
            record.decode().describe(Language::English),
            "Nominative Singular Masculine"
        );
    }

    #[test]
    fn test_indeclinable_record() {
        let record: WordRecord = "040101 C- -------- καὶ καὶ καί καί".parse().unwrap();
        assert_eq!(record.decode().status, DecodeStatus::NoSchema);
    }

    #[test]
    fn test_missing_column() {
        assert_eq!(
            WordRecord::parse_line("040101 N- ----NSM- λόγος"),
            Err(RecordError::MissingColumn("word"))
        );
        assert_eq!(
            WordRecord::parse_line(""),
            Err(RecordError::MissingColumn("reference"))
        );
    }

    #[test]
    fn test_invalid_reference() {
        assert_eq!(
            WordRecord::parse_line("04A101 N- ----NSM- a b c d"),
            Err(RecordError::InvalidReference("04A101".to_string()))
        );
        assert!("0401011".parse::<VerseRef>().is_err());
    }

    #[test]
    fn test_reference_display() {
        let reference: VerseRef = "041203".parse().unwrap();
        assert_eq!(reference.to_string(), "04 12:3");
    }
}
