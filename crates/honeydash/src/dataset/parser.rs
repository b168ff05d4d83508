//! Reading delimited text files into a [`DataTable`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, SourceMetadata};
use crate::error::{HoneyError, Result};

/// Lines inspected when guessing the delimiter.
const SNIFF_LINES: usize = 10;

/// Field separators the reader recognizes without being told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
    Semicolon,
    Pipe,
}

impl Delimiter {
    const CANDIDATES: [Delimiter; 4] = [
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Semicolon,
        Delimiter::Pipe,
    ];

    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Semicolon => b';',
            Delimiter::Pipe => b'|',
        }
    }

    /// Format name recorded in [`SourceMetadata::format`].
    pub fn format_name(byte: u8) -> &'static str {
        match byte {
            b',' => "csv",
            b'\t' => "tsv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
    }

    /// Guess the separator from the first lines of a file.
    ///
    /// A candidate that splits every sampled line into the same number of
    /// fields beats one that merely appears often. Comma wins when nothing
    /// splits the header.
    pub fn sniff(bytes: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(bytes);
        let sample: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(SNIFF_LINES)
            .collect();

        let Some(header) = sample.first() else {
            return Err(HoneyError::EmptyData("file has no lines".to_string()));
        };

        let best = Self::CANDIDATES
            .into_iter()
            .filter_map(|candidate| {
                let in_header = separators_outside_quotes(header, candidate.byte());
                if in_header == 0 {
                    return None;
                }
                let consistent = sample
                    .iter()
                    .all(|line| separators_outside_quotes(line, candidate.byte()) == in_header);
                Some((consistent, in_header, candidate))
            })
            // max_by_key keeps the last maximum, so reverse to favor list order
            .rev()
            .max_by_key(|&(consistent, count, _)| (consistent, count))
            .map(|(_, _, candidate)| candidate)
            .unwrap_or(Delimiter::Comma);

        Ok(best)
    }
}

fn separators_outside_quotes(line: &str, separator: u8) -> usize {
    let mut quoted = false;
    line.bytes()
        .filter(|&b| {
            if b == b'"' {
                quoted = !quoted;
            }
            b == separator && !quoted
        })
        .count()
}

/// Reader settings, shared by both dataset files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Field separator; detected from the file when unset.
    pub delimiter: Option<char>,
    pub quote: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: '"',
        }
    }
}

impl ParserConfig {
    fn quote_byte(&self) -> Result<u8> {
        ascii_byte("quote", self.quote)
    }

    fn delimiter_byte(&self, contents: &[u8]) -> Result<u8> {
        match self.delimiter {
            Some(c) => ascii_byte("delimiter", c),
            None => Delimiter::sniff(contents).map(Delimiter::byte),
        }
    }
}

/// Reads a dataset file into a [`DataTable`] of string cells.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read the whole file, fingerprint it, and split it into cells.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| HoneyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let delimiter = self.config.delimiter_byte(&contents)?;
        let table = self.parse_bytes(&contents, delimiter)?;
        debug!(
            path = %path.display(),
            delimiter = %char::from(delimiter).escape_default(),
            rows = table.row_count(),
            "parsed file"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            sha256_hex(&contents),
            contents.len() as u64,
            Delimiter::format_name(table.delimiter).to_string(),
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Split bytes with a known separator. The first record is the header.
    ///
    /// Rows shorter than the header are padded with empty cells and longer
    /// rows are cut to the header width.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(self.config.quote_byte()?)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(HoneyError::EmptyData("header row is empty".to_string()));
        }

        let width = headers.len();
        let rows = reader
            .into_records()
            .map(|record| -> Result<Vec<String>> {
                let mut cells: Vec<String> = record?.iter().map(str::to_string).collect();
                cells.resize(width, String::new());
                Ok(cells)
            })
            .collect::<Result<Vec<_>>>()?;

        if rows.is_empty() {
            return Err(HoneyError::EmptyData("no rows below the header".to_string()));
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

fn ascii_byte(what: &str, c: char) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| HoneyError::Config(format!("{} must be an ASCII character, got '{}'", what, c)))
}

fn sha256_hex(bytes: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(bytes))
}
