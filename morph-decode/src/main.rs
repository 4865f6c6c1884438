use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use morph_codes::{
    DecodeStatus, Language, MorphDescription, WordRecord, decode, decode_fixed, pos_name,
    short_code,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Scheme {
    /// Dash-separated codes: PAI-3S, AAP-NSM, NSM
    Compact,
    /// Eight-character MorphGNT codes: 3AAI-S--, ----NSM-
    Fixed,
}

/// Decode Greek morphological parsing codes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Part-of-speech abbreviation (N-, V-, RA, ...)
    pos: Option<String>,

    /// Parsing code
    #[arg(default_value = "")]
    parsing: String,

    /// Parsing code scheme for a single pair
    #[arg(short, long, value_enum, default_value_t = Scheme::Compact)]
    scheme: Scheme,

    /// Display language (ISO 639-3: eng, spa)
    #[arg(short, long, env = "MORPH_LANGUAGE", default_value = "eng")]
    language: Language,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Decode every word of a MorphGNT text file
    #[arg(short, long, conflicts_with = "pos")]
    input: Option<PathBuf>,
}

#[derive(Serialize)]
struct DecodedWord<'a> {
    #[serde(flatten)]
    record: &'a WordRecord,
    short_code: String,
    description: String,
    analysis: MorphDescription,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if let Some(input) = &args.input {
        return decode_file(input, args.language, args.json);
    }

    let Some(pos) = &args.pos else {
        bail!("Expected <POS> [PARSING] or --input <FILE>");
    };
    let analysis = match args.scheme {
        Scheme::Compact => decode(pos, &args.parsing),
        Scheme::Fixed => decode_fixed(pos, &args.parsing),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        let name = pos_name(pos, args.language);
        println!("{} ({})", name.name, name.abbreviation);
        println!("{}: {}", analysis.clean_code, analysis.describe(args.language));
        for omission in &analysis.omissions {
            println!("  skipped: {}", omission.to_error());
        }
    }

    Ok(())
}

fn decode_file(path: &Path, language: Language, json: bool) -> Result<()> {
    log::info!("Decoding MorphGNT file {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut statuses: BTreeMap<DecodeStatus, usize> = BTreeMap::new();
    let mut skipped = 0;

    for (line_number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = match WordRecord::parse_line(line) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{}:{}: {e}", path.display(), line_number + 1);
                skipped += 1;
                continue;
            }
        };

        let analysis = record.decode();
        *statuses.entry(analysis.status).or_default() += 1;

        let word = DecodedWord {
            record: &record,
            short_code: short_code(&record.pos, &record.parsing),
            description: analysis.describe(language),
            analysis,
        };
        if json {
            println!(
                "{}",
                serde_json::to_string(&word).context("Failed to serialize decoded word")?
            );
        } else {
            println!(
                "{}\t{}\t{}\t{}",
                record.reference, record.text, word.short_code, word.description
            );
        }
    }

    // stdout carries only decoded words
    for line in status_summary(&statuses, skipped) {
        log::info!("{}", line.trim());
        eprintln!("{line}");
    }

    Ok(())
}

fn status_summary(statuses: &BTreeMap<DecodeStatus, usize>, skipped: usize) -> Vec<String> {
    let total: usize = statuses.values().sum();
    let mut lines = vec![format!("Decoded {total} words")];
    for (status, count) in statuses {
        lines.push(format!("  {status:?}: {count}"));
    }
    if skipped > 0 {
        lines.push(format!("  skipped lines: {skipped}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair_arguments() {
        let args = Args::try_parse_from(["morph-decode", "V-", "PAI-3S", "--language", "spa"]).unwrap();
        assert_eq!(args.pos.as_deref(), Some("V-"));
        assert_eq!(args.parsing, "PAI-3S");
        assert_eq!(args.language, Language::Spanish);
        assert_eq!(args.scheme, Scheme::Compact);
    }

    #[test]
    fn test_parsing_defaults_to_empty() {
        let args = Args::try_parse_from(["morph-decode", "C-"]).unwrap();
        assert_eq!(args.parsing, "");
    }

    #[test]
    fn test_fixed_scheme_flag() {
        let args = Args::try_parse_from(["morph-decode", "--scheme", "fixed", "V-", "3AAI-S--"]).unwrap();
        assert_eq!(args.scheme, Scheme::Fixed);
    }

    #[test]
    fn test_input_conflicts_with_pair() {
        assert!(Args::try_parse_from(["morph-decode", "--input", "words.txt", "V-"]).is_err());
        let args = Args::try_parse_from(["morph-decode", "--input", "words.txt"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("words.txt")));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Args::try_parse_from(["morph-decode", "V-", "PAI-3S", "-l", "fra"]).is_err());
    }

    #[test]
    fn test_status_summary() {
        let statuses = BTreeMap::from([(DecodeStatus::Complete, 26), (DecodeStatus::NoSchema, 10)]);
        assert_eq!(
            status_summary(&statuses, 1),
            vec![
                "Decoded 36 words",
                "  Complete: 26",
                "  NoSchema: 10",
                "  skipped lines: 1",
            ]
        );
        assert_eq!(status_summary(&BTreeMap::new(), 0), vec!["Decoded 0 words"]);
    }

    #[test]
    fn test_decoded_word_flattens_record() {
        let record = WordRecord::parse_line("040101 V- 3IAI-S-- ἦν ἦν ἦν εἰμί").unwrap();
        let analysis = record.decode();
        let word = DecodedWord {
            record: &record,
            short_code: short_code(&record.pos, &record.parsing),
            description: analysis.describe(Language::English),
            analysis,
        };
        let value = serde_json::to_value(&word).unwrap();
        assert_eq!(value["lemma"], "εἰμί");
        assert_eq!(value["short_code"], "V-IAI-3S");
        assert_eq!(value["analysis"]["status"], "complete");
    }
}
