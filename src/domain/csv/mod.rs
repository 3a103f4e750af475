// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core types and value objects for CSV reading
// No I/O

mod column_kind;
mod csv_row;
mod table_summary;

pub use column_kind::ColumnKind;
pub use csv_row::{format_list, CsvField, CsvRow, CsvTable};
pub use table_summary::{ColumnProfile, CsvSummary, HEAD_ROWS};
