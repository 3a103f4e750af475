// ============================================================
// CSV PARSER
// ============================================================
// Open CSV files and read their records with consistent error mapping

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::domain::csv::CsvTable;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::storage;

/// Bytes sampled from the start of a file for delimiter detection
const DETECTION_SAMPLE_BYTES: usize = 4096;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// How the field delimiter is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Fixed(u8),
    /// Sniff the delimiter from the first lines of each file
    Auto,
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Fixed(b',')
    }
}

impl std::str::FromStr for Delimiter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Delimiter::Auto),
            "\\t" | "tab" => Ok(Delimiter::Fixed(b'\t')),
            _ => match s.as_bytes() {
                [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' => {
                    Ok(Delimiter::Fixed(*byte))
                }
                _ => Err(AppError::ConfigError(format!(
                    "delimiter must be a single ASCII character or 'auto', got '{}'",
                    s
                ))),
            },
        }
    }
}

/// CSV parser over the `csv` crate
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    delimiter: Delimiter,
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Rows of a file in physical order, header row included. Rows may
    /// differ in length; a blank line is an empty row.
    pub fn rows(&self, path: &Path) -> Result<CsvRows> {
        let content = storage::read_bytes(path)?;
        let rows = self.rows_in(content);

        tracing::debug!(
            path = %path.display(),
            delimiter = %char::from(rows.delimiter).escape_default(),
            "Opened CSV file"
        );

        Ok(rows)
    }

    /// Read all rows of a file, header row included
    pub fn read_rows(&self, path: &Path) -> Result<Vec<Vec<String>>> {
        self.rows(path)?.collect()
    }

    /// Read a file as header plus data rows
    pub fn read_table(&self, path: &Path) -> Result<CsvTable> {
        Ok(split_header(self.read_rows(path)?))
    }

    fn rows_in(&self, content: Vec<u8>) -> CsvRows {
        let delimiter = match self.delimiter {
            Delimiter::Fixed(byte) => byte,
            Delimiter::Auto => {
                let sample = &content[..content.len().min(DETECTION_SAMPLE_BYTES)];
                Self::detect_delimiter(&String::from_utf8_lossy(sample))
            }
        };
        CsvRows::new(content.into(), delimiter)
    }

    fn builder(delimiter: u8) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true); // Allow rows with different lengths
        builder
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        if sample_lines.is_empty() {
            return best_delimiter;
        }

        for &delimiter in &candidates {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

/// Row iterator over in-memory CSV content.
///
/// The `csv` reader drops blank lines silently. Each read is checked for
/// line terminators consumed ahead of the record, and one empty row is
/// yielded per blank line so row positions follow the lines of the file.
pub struct CsvRows {
    content: Arc<[u8]>,
    reader: Reader<Cursor<Arc<[u8]>>>,
    delimiter: u8,
    record: StringRecord,
    /// Byte offset where the previous read stopped
    consumed: usize,
    blank_rows: usize,
    pending: Option<Vec<String>>,
    finished: bool,
}

impl CsvRows {
    fn new(content: Arc<[u8]>, delimiter: u8) -> Self {
        let reader = CsvParser::builder(delimiter).from_reader(Cursor::new(Arc::clone(&content)));
        Self {
            content,
            reader,
            delimiter,
            record: StringRecord::new(),
            consumed: 0,
            blank_rows: 0,
            pending: None,
            finished: false,
        }
    }

    fn read_next(&mut self) -> Result<()> {
        let has_record = match self.reader.read_record(&mut self.record) {
            Ok(has_record) => has_record,
            Err(e) => {
                self.finished = true;
                return Err(e.into());
            }
        };

        let end = usize::try_from(self.reader.position().byte())
            .unwrap_or(self.content.len())
            .min(self.content.len());
        self.blank_rows = blank_lines(&self.content, self.consumed, end);
        self.consumed = end;

        if has_record {
            self.pending = Some(self.record.iter().map(str::to_string).collect());
        } else {
            self.finished = true;
        }
        Ok(())
    }
}

impl Iterator for CsvRows {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.blank_rows > 0 {
                self.blank_rows -= 1;
                return Some(Ok(Vec::new()));
            }
            if let Some(row) = self.pending.take() {
                return Some(Ok(row));
            }
            if self.finished {
                return None;
            }
            if let Err(e) = self.read_next() {
                return Some(Err(e));
            }
        }
    }
}

/// Blank lines at the start of `content[start..end]`. A `\n` completing the
/// `\r\n` terminator of the previous record is not a blank line.
fn blank_lines(content: &[u8], start: usize, end: usize) -> usize {
    let mut bytes = &content[start..end];
    if start == 0 {
        bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    } else if content[start - 1] == b'\r' {
        bytes = bytes.strip_prefix(b"\n").unwrap_or(bytes);
    }

    let mut count = 0;
    loop {
        bytes = match bytes {
            [b'\r', b'\n', rest @ ..] | [b'\r' | b'\n', rest @ ..] => rest,
            _ => return count,
        };
        count += 1;
    }
}

fn split_header(mut rows: Vec<Vec<String>>) -> CsvTable {
    if rows.is_empty() {
        return CsvTable::default();
    }
    let headers = rows.remove(0);
    CsvTable { headers, rows }
}
