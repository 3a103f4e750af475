// ============================================================
// CSV READER USE CASE
// ============================================================
// Read a CSV file as plain rows, as header-keyed rows, or as a summary

use std::path::Path;

use crate::domain::csv::{CsvRow, CsvSummary, CsvTable};
use crate::domain::error::Result;
use crate::infrastructure::csv::CsvParser;

pub struct CsvReaderUseCase {
    parser: CsvParser,
}

impl CsvReaderUseCase {
    pub fn new(parser: CsvParser) -> Self {
        Self { parser }
    }

    /// Header and data rows, each row as an ordered list of cells
    pub fn read_list(&self, path: &Path) -> Result<CsvTable> {
        let table = self.parser.read_table(path)?;
        tracing::info!(
            path = %path.display(),
            columns = table.column_count(),
            rows = table.row_count(),
            "Read CSV as list"
        );
        Ok(table)
    }

    /// Header names and data rows keyed by them
    pub fn read_dict(&self, path: &Path) -> Result<(Vec<String>, Vec<CsvRow>)> {
        let table = self.parser.read_table(path)?;
        let rows = table.dict_rows();
        tracing::info!(
            path = %path.display(),
            columns = table.column_count(),
            rows = rows.len(),
            "Read CSV as dict"
        );
        Ok((table.headers, rows))
    }

    pub fn summarize(&self, path: &Path) -> Result<CsvSummary> {
        let table = self.parser.read_table(path)?;
        Ok(CsvSummary::from_table(&table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::ColumnKind;
    use crate::domain::error::AppError;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn use_case() -> CsvReaderUseCase {
        CsvReaderUseCase::new(CsvParser::new())
    }

    #[test]
    fn test_list_yields_data_rows_in_order() {
        let file = write_csv("name,age\nAlice,30\nBob,25\n");
        let table = use_case().read_list(file.path()).unwrap();
        assert_eq!(table.headers, vec!["name", "age"]);
        assert_eq!(table.rows, vec![vec!["Alice", "30"], vec!["Bob", "25"]]);
    }

    #[test]
    fn test_dict_keys_match_header() {
        let file = write_csv("name,age\nAlice,30\nBob,25\n");
        let (headers, rows) = use_case().read_dict(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.keys().collect::<Vec<_>>(), headers);
        }
        assert_eq!(rows[1].get("name"), Some("Bob"));
    }

    #[test]
    fn test_summary() {
        let file = write_csv("id,score\n1,2.5\n2,3\n");
        let summary = use_case().summarize(file.path()).unwrap();
        assert_eq!(summary.shape, (2, 2));
        assert_eq!(summary.columns[0].kind, ColumnKind::Int64);
        assert_eq!(summary.columns[1].kind, ColumnKind::Float64);
    }

    #[test]
    fn test_missing_file_for_every_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let reader = use_case();
        assert!(matches!(reader.read_list(&path), Err(AppError::NotFound(_))));
        assert!(matches!(reader.read_dict(&path), Err(AppError::NotFound(_))));
        assert!(matches!(reader.summarize(&path), Err(AppError::NotFound(_))));
    }
}
