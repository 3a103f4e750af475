use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::summation::NumberSum;
use crate::infrastructure::csv::CsvParser;

const TOO_FEW_NUMBERS: &str = "CSV file must contain at least 3 numbers";

/// Sums the first three cells of the row after the header
pub struct AddNumbersUseCase {
    parser: CsvParser,
}

impl AddNumbersUseCase {
    pub fn new(parser: CsvParser) -> Self {
        Self { parser }
    }

    pub fn execute(&self, csv_file: &Path) -> Result<NumberSum> {
        let mut rows = self.parser.rows(csv_file)?;

        let header = rows.next().transpose()?;
        let row = rows
            .next()
            .transpose()?
            .ok_or_else(|| AppError::MalformedInput(TOO_FEW_NUMBERS.to_string()))?;

        if row.len() < 3 {
            return Err(AppError::MalformedInput(TOO_FEW_NUMBERS.to_string()));
        }

        let values = [
            parse_float(&row[0])?,
            parse_float(&row[1])?,
            parse_float(&row[2])?,
        ];
        let sum = NumberSum::new(values);

        tracing::info!(
            path = %csv_file.display(),
            header_columns = header.map(|h| h.len()).unwrap_or(0),
            total = sum.total,
            "Summed numbers from CSV"
        );

        Ok(sum)
    }
}

fn parse_float(cell: &str) -> Result<f64> {
    cell.trim().parse::<f64>().map_err(|_| {
        AppError::MalformedInput(format!("could not convert string to float: '{}'", cell))
    })
}
