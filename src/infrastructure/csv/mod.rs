// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV file access and delimiter detection

mod csv_parser;

pub use csv_parser::{CsvParser, CsvRows, Delimiter};
