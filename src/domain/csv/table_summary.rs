// ============================================================
// TABLE SUMMARY
// ============================================================
// Shape and per-column profile of a CSV table

use super::{ColumnKind, CsvTable};
use serde::{Deserialize, Serialize};

/// Number of data rows kept in `CsvSummary::head`
pub const HEAD_ROWS: usize = 5;

/// Profile of a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Header name
    pub name: String,

    /// Cells in this column that are present and not blank
    pub non_empty: usize,

    /// Inferred value type
    pub kind: ColumnKind,
}

/// Overview of a table: shape, column profiles, leading rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvSummary {
    /// (data rows, header columns)
    pub shape: (usize, usize),

    pub columns: Vec<ColumnProfile>,

    /// First `HEAD_ROWS` data rows
    pub head: Vec<Vec<String>>,
}

impl CsvSummary {
    /// Empty rows from blank lines are left out.
    pub fn from_table(table: &CsvTable) -> Self {
        let rows: Vec<&Vec<String>> = table.rows.iter().filter(|row| !row.is_empty()).collect();
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let cells = || rows.iter().filter_map(move |row| row.get(col));
                ColumnProfile {
                    name: name.clone(),
                    non_empty: cells().filter(|c| !c.trim().is_empty()).count(),
                    kind: ColumnKind::infer(cells().map(String::as_str)),
                }
            })
            .collect();

        Self {
            shape: (rows.len(), table.column_count()),
            columns,
            head: rows.iter().take(HEAD_ROWS).map(|row| row.to_vec()).collect(),
        }
    }

    /// Human-readable column listing, one line per column
    pub fn column_info(&self) -> String {
        let width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max("Column".len());

        let mut lines = vec![
            format!("RangeIndex: {} entries", self.shape.0),
            format!("Data columns (total {} columns):", self.shape.1),
            format!(" #   {:<width$}  Non-Null Count  Dtype", "Column"),
        ];
        for (idx, column) in self.columns.iter().enumerate() {
            lines.push(format!(
                " {:<3} {:<width$}  {:>5} non-null  {}",
                idx, column.name, column.non_empty, column.kind
            ));
        }
        lines.join("\n")
    }
}
