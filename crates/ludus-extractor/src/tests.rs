//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use ludus_domain::traits::RecordSource;
    use ludus_domain::PartOfSpeech;

    use crate::{priority_records, ExtractorConfig, ExtractorError, RecordReader};

    fn fixed_width(stems: &str, code: &str, gloss: &str) -> String {
        format!("{:<76}{:<34}{}\n", stems, code, gloss)
    }

    fn sample_lexicon() -> String {
        [
            fixed_width("aqu", "N 1 1 F T", "water"),
            "\n".to_string(),
            "too short\n".to_string(),
            fixed_width("am am amav amat", "V 1 1 TRANS", "love, like"),
        ]
        .concat()
    }

    fn drain<S: RecordSource>(source: &mut S) -> Vec<ludus_domain::LexicalRecord>
    where
        S::Error: std::fmt::Debug,
    {
        let mut records = Vec::new();
        while let Some(record) = source.next_record().unwrap() {
            records.push(record);
        }
        records
    }

    #[test]
    fn test_reader_skips_and_counts_malformed_lines() {
        let mut reader = RecordReader::new(Cursor::new(sample_lexicon()), ExtractorConfig::default());
        let records = drain(&mut reader);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].main_stem(), "aqu");
        assert_eq!(records[1].part_of_speech, PartOfSpeech::Verb);
        assert_eq!(reader.malformed_count(), 1);
        assert_eq!(reader.lines_read(), 4);
    }

    #[test]
    fn test_priority_records_come_first() {
        let priority = priority_records();
        let count = priority.len();
        let mut reader = RecordReader::new(Cursor::new(sample_lexicon()), ExtractorConfig::default())
            .with_priority(priority);
        let records = drain(&mut reader);

        assert_eq!(records.len(), count + 2);
        assert_eq!(records[0].main_stem(), "su");
        assert_eq!(records[count].main_stem(), "aqu");
    }

    #[test]
    fn test_priority_records_disabled() {
        let config = ExtractorConfig {
            include_priority_records: false,
            ..ExtractorConfig::default()
        };
        let mut reader =
            RecordReader::new(Cursor::new(sample_lexicon()), config).with_priority(priority_records());

        assert_eq!(drain(&mut reader).len(), 2);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DICTLINE.GEN");

        match RecordReader::open(&path, ExtractorConfig::default()) {
            Err(ExtractorError::MissingSource(missing)) => assert_eq!(missing, path),
            Err(other) => panic!("Expected MissingSource, got {:?}", other),
            Ok(_) => panic!("Expected MissingSource, got a reader"),
        }
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_lexicon().as_bytes()).unwrap();

        let mut reader = RecordReader::open(file.path(), ExtractorConfig::default()).unwrap();
        assert_eq!(drain(&mut reader).len(), 2);
    }

    #[test]
    fn test_latin1_bytes_do_not_abort() {
        let mut bytes = fixed_width("caf", "N 1 1 F T", "coffee").into_bytes();
        bytes.truncate(bytes.len() - 1);
        bytes.extend_from_slice(&[0xE9, b'\n']);

        let mut reader = RecordReader::new(Cursor::new(bytes), ExtractorConfig::default());
        let records = drain(&mut reader);
        assert_eq!(records.len(), 1);
        assert!(records[0].gloss.starts_with("coffee"));
    }
}
