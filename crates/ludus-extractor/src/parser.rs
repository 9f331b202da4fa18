//! Slice fixed-width lexicon lines into records

use ludus_domain::{Gender, LexicalRecord, PartOfSpeech, RECOGNIZED_FLAGS};

use crate::types::MalformedLine;
use crate::ExtractorConfig;

/// Parse one fixed-width lexicon line
///
/// Stems are the whitespace-separated words of the stem field. The first
/// token of the code field is the part-of-speech tag; the class numbers and
/// recognized flags that follow become the paradigm code, and for nouns the
/// fourth token is the gender. Unknown tags map to [`PartOfSpeech::Other`].
pub fn parse_line(line: &str, config: &ExtractorConfig) -> Result<LexicalRecord, MalformedLine> {
    let line = line.trim_end_matches(['\r', '\n']);
    let length = line.chars().count();
    if length < config.min_line_length {
        return Err(MalformedLine::TooShort {
            length,
            min: config.min_line_length,
        });
    }

    let stems: Vec<String> = column(line, 0, Some(config.stems_end))
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if stems.is_empty() {
        return Err(MalformedLine::MissingStems);
    }

    let code_field = column(line, config.code_start, Some(config.code_end));
    let tokens: Vec<&str> = code_field.split_whitespace().collect();
    let (tag, rest) = tokens.split_first().ok_or(MalformedLine::MissingCode)?;
    let part_of_speech = PartOfSpeech::parse(tag).unwrap_or(PartOfSpeech::Other);

    let gender = match part_of_speech {
        PartOfSpeech::Noun => rest.get(2).and_then(|token| Gender::parse(token)),
        _ => None,
    };

    let gloss = clean_gloss(&column(line, config.gloss_start, None));
    if gloss.is_empty() {
        return Err(MalformedLine::MissingGloss);
    }

    Ok(LexicalRecord::new(
        stems,
        part_of_speech,
        paradigm_code(rest),
        gender,
        gloss,
    ))
}

/// Normalize a raw gloss
///
/// `|` continuation marks become `; `, runs of whitespace collapse to one
/// space, and leading or trailing separators are trimmed.
pub fn clean_gloss(raw: &str) -> String {
    let joined = raw.replace('|', "; ");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| c == ';' || c.is_whitespace())
        .to_string()
}

/// Class numbers (at most two) followed by recognized flags
fn paradigm_code(tokens: &[&str]) -> String {
    let numbers = tokens
        .iter()
        .take(2)
        .filter(|token| token.parse::<u8>().is_ok());
    let flags = tokens
        .iter()
        .filter(|token| RECOGNIZED_FLAGS.contains(&token.to_uppercase().as_str()));

    numbers.chain(flags).copied().collect::<Vec<_>>().join(" ")
}

/// Character-column slice; tolerant of short lines and multi-byte text
fn column(line: &str, start: usize, end: Option<usize>) -> String {
    let chars = line.chars().skip(start);
    match end {
        Some(end) => chars.take(end.saturating_sub(start)).collect(),
        None => chars.collect(),
    }
}
