//! Record stream over a lexicon reader

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ludus_domain::traits::RecordSource;
use ludus_domain::LexicalRecord;
use tracing::{debug, warn};

use crate::parser::parse_line;
use crate::{ExtractorConfig, ExtractorError};

/// Streams records from a fixed-width lexicon
///
/// Priority records, if any, are served first. Blank lines are ignored;
/// malformed lines are logged, counted, and skipped.
pub struct RecordReader<R> {
    reader: R,
    config: ExtractorConfig,
    priority: VecDeque<LexicalRecord>,
    buffer: Vec<u8>,
    line_number: usize,
    malformed: usize,
}

impl RecordReader<BufReader<File>> {
    /// Open a lexicon file
    ///
    /// Fails with [`ExtractorError::MissingSource`] if the file is absent.
    pub fn open(path: impl AsRef<Path>, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        config.validate().map_err(ExtractorError::Config)?;

        if !path.exists() {
            return Err(ExtractorError::MissingSource(path.to_path_buf()));
        }

        let file = File::open(path)?;
        debug!(path = %path.display(), "Opened lexicon");
        Ok(Self::new(BufReader::new(file), config))
    }
}

impl<R: BufRead> RecordReader<R> {
    /// Wrap any buffered reader
    pub fn new(reader: R, config: ExtractorConfig) -> Self {
        Self {
            reader,
            config,
            priority: VecDeque::new(),
            buffer: Vec::new(),
            line_number: 0,
            malformed: 0,
        }
    }

    /// Serve these records before the first lexicon line
    ///
    /// Ignored when the configuration disables priority records.
    pub fn with_priority(mut self, records: Vec<LexicalRecord>) -> Self {
        if self.config.include_priority_records {
            self.priority.extend(records);
        }
        self
    }

    /// Number of lexicon lines read so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Read one raw line; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, ExtractorError> {
        self.buffer.clear();
        let read = self.reader.read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        // The lexicon predates UTF-8; stray Latin-1 bytes only ever appear in glosses
        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }
}

impl<R: BufRead> RecordSource for RecordReader<R> {
    type Error = ExtractorError;

    fn next_record(&mut self) -> Result<Option<LexicalRecord>, Self::Error> {
        if let Some(record) = self.priority.pop_front() {
            return Ok(Some(record));
        }

        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line, &self.config) {
                Ok(record) => return Ok(Some(record)),
                Err(issue) => {
                    self.malformed += 1;
                    warn!(line = self.line_number, "Skipping malformed lexicon line: {}", issue);
                }
            }
        }

        Ok(None)
    }

    fn malformed_count(&self) -> usize {
        self.malformed
    }
}
