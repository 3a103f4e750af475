use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::summation::{is_even_row, parse_int_cell, EvenHit, EvenSum};
use crate::infrastructure::csv::CsvParser;

/// Sums even integers found in even-positioned rows. Cells that are not
/// integers are skipped, not reported.
pub struct EvenSumUseCase {
    parser: CsvParser,
}

impl EvenSumUseCase {
    pub fn new(parser: CsvParser) -> Self {
        Self { parser }
    }

    pub fn execute(&self, csv_file: &Path) -> Result<EvenSum> {
        let mut result = EvenSum::default();

        for (row_index, row) in self.parser.rows(csv_file)?.enumerate() {
            let row = row?;
            let position = row_index + 1;
            if !is_even_row(position) {
                continue;
            }

            for value in row.iter().filter_map(|cell| parse_int_cell(cell)) {
                if value % 2 != 0 {
                    continue;
                }
                result.total = result.total.checked_add(value).ok_or_else(|| {
                    AppError::MalformedInput(format!(
                        "Sum overflowed at row {} adding {}",
                        position, value
                    ))
                })?;
                result.hits.push(EvenHit {
                    row: position,
                    value,
                });
            }
        }

        tracing::info!(
            path = %csv_file.display(),
            hits = result.hits.len(),
            total = result.total,
            "Summed even numbers in even rows"
        );

        Ok(result)
    }
}
