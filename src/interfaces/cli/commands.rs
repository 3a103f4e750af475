use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::application::use_cases::base64_codec;
use crate::application::{AddNumbersUseCase, CsvReaderUseCase, EvenSumUseCase};
use crate::domain::csv::format_list;
use crate::domain::error::AppError;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::csv::CsvParser;
use crate::interfaces::cli::args::{
    AddNumbersArgs, Base64Args, CsvReaderArgs, ReadCsvArgs, SumEvenArgs,
};
use crate::interfaces::cli::interactive::{base64_menu, prompt};
use crate::interfaces::cli::render::{self, rule, BANNER_WIDTH, RULE_WIDTH};

/// How a tool run ended; maps onto the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Parser from config, or the error already reported to `out`.
fn parser_or_report(config: &AppConfig, out: &mut dyn Write) -> io::Result<Option<CsvParser>> {
    match config.csv_parser() {
        Ok(parser) => Ok(Some(parser)),
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(None)
        }
    }
}

pub fn add_numbers(
    args: &AddNumbersArgs,
    config: &AppConfig,
    out: &mut dyn Write,
) -> io::Result<Outcome> {
    let Some(parser) = parser_or_report(config, out)? else {
        return Ok(Outcome::Failure);
    };
    let csv_file = args.csv_file.as_deref().unwrap_or(config.numbers_file.as_path());

    match AddNumbersUseCase::new(parser).execute(csv_file) {
        Ok(sum) => {
            render::number_sum(out, &sum)?;
            Ok(Outcome::Success)
        }
        Err(e) => {
            tracing::warn!(path = %csv_file.display(), error = %e, "add-numbers failed");
            writeln!(out, "Error: {}", e)?;
            Ok(Outcome::Failure)
        }
    }
}

fn base64_usage(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(out, "  Interactive mode: base64-tool")?;
    writeln!(out, "  Encode: base64-tool encode 'your text'")?;
    writeln!(out, "  Decode: base64-tool decode 'base64string'")?;
    writeln!(out, "  Encode file: base64-tool encode-file <path>")?;
    writeln!(out, "  Decode file: base64-tool decode-file 'base64string' <output>")
}

pub fn base64_tool(
    args: &Base64Args,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> io::Result<Outcome> {
    let command = args.args.first().map(|c| c.to_lowercase());

    let outcome = match (command.as_deref(), &args.args[..]) {
        (None, _) => {
            base64_menu(input, out)?;
            return Ok(Outcome::Success);
        }
        (Some("encode" | "-e"), [_, text]) => Ok(base64_codec::encode_text(text)),
        (Some("decode" | "-d"), [_, encoded]) => base64_codec::decode_text(encoded),
        (Some("encode-file"), [_, path]) => base64_codec::encode_file(Path::new(path)),
        (Some("decode-file"), [_, encoded, output]) => {
            base64_codec::decode_to_file(encoded, Path::new(output))
                .map(|_| format!("Successfully decoded to {}", output))
        }
        _ => {
            base64_usage(out)?;
            return Ok(Outcome::Failure);
        }
    };

    match outcome {
        Ok(line) => {
            writeln!(out, "{}", line)?;
            Ok(Outcome::Success)
        }
        Err(AppError::InvalidEncoding(msg)) => {
            writeln!(out, "Error decoding: {}", msg)?;
            Ok(Outcome::Failure)
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(Outcome::Failure)
        }
    }
}

fn report_read_error(out: &mut dyn Write, err: &AppError) -> io::Result<()> {
    match err {
        AppError::NotFound(_) => writeln!(out, "Error: {}.", err),
        _ => writeln!(out, "Error reading CSV file: {}", err),
    }
}

pub fn read_csv(
    args: &ReadCsvArgs,
    config: &AppConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> io::Result<Outcome> {
    let (file, dict) = match &args.file {
        Some(file) => (file.clone(), args.dict),
        None => {
            writeln!(out, "CSV File Reader")?;
            writeln!(out, "{}", rule('=', RULE_WIDTH))?;
            let Some(filename) = prompt(input, out, "Enter the CSV filename: ")? else {
                return Ok(Outcome::Failure);
            };

            writeln!(out, "\nChoose reading method:")?;
            writeln!(out, "1. Read as list (default)")?;
            writeln!(out, "2. Read as dictionary")?;
            let choice = prompt(input, out, "Enter choice (1 or 2): ")?.unwrap_or_default();
            writeln!(out, "\n")?;

            (PathBuf::from(filename.trim()), args.dict || choice.trim() == "2")
        }
    };

    let Some(parser) = parser_or_report(config, out)? else {
        return Ok(Outcome::Failure);
    };
    let reader = CsvReaderUseCase::new(parser);

    let result = if dict {
        reader
            .read_dict(&file)
            .map(|(_, rows)| render::dict_rows(out, &rows, args.json))
    } else {
        reader
            .read_list(&file)
            .map(|table| render::table_rows(out, &table, args.json))
    };

    match result {
        Ok(written) => {
            written?;
            Ok(Outcome::Success)
        }
        Err(e) => {
            report_read_error(out, &e)?;
            Ok(Outcome::Failure)
        }
    }
}

fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    let banner = rule('=', BANNER_WIDTH);
    writeln!(out, "\n{}", banner)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", banner)
}

pub fn csv_reader(
    args: &CsvReaderArgs,
    config: &AppConfig,
    out: &mut dyn Write,
) -> io::Result<Outcome> {
    let banner = rule('=', BANNER_WIDTH);
    writeln!(out, "{}", banner)?;
    writeln!(out, "CSV File Reader Examples")?;
    writeln!(out, "{}", banner)?;

    let file = args.file.as_deref().unwrap_or(config.sample_file.as_path());
    if !file.exists() {
        writeln!(out, "\nNote: '{}' does not exist.", file.display())?;
        writeln!(out, "Please provide a valid CSV file path to test these functions.\n")?;
        writeln!(out, "Example usage:")?;
        writeln!(out, "  csv-reader your_file.csv")?;
        writeln!(out, "  read-csv your_file.csv")?;
        writeln!(out, "  read-csv your_file.csv --dict")?;
        return Ok(Outcome::Success);
    }

    let Some(parser) = parser_or_report(config, out)? else {
        return Ok(Outcome::Failure);
    };
    let reader = CsvReaderUseCase::new(parser);
    let mut failed = false;

    section(out, "Method 1: List reader")?;
    match reader.read_list(file) {
        Ok(table) => {
            // A non-empty header is counted among the rows read
            let mut rows_read = table.row_count();
            if !table.headers.is_empty() {
                writeln!(out, "Header: {}", format_list(&table.headers))?;
                rows_read += 1;
            }
            for row in &table.rows {
                writeln!(out, "Row: {}", format_list(row))?;
            }
            writeln!(out, "\nTotal rows read: {}", rows_read)?;
        }
        Err(e) => {
            failed = true;
            report_read_error(out, &e)?;
        }
    }

    section(out, "Method 2: Dict reader")?;
    match reader.read_dict(file) {
        Ok((headers, rows)) => {
            writeln!(out, "Column names: {}", format_list(&headers))?;
            for row in &rows {
                writeln!(out, "Row as dict: {}", row.format_mapping())?;
            }
            writeln!(out, "\nTotal rows read: {}", rows.len())?;
        }
        Err(e) => {
            failed = true;
            report_read_error(out, &e)?;
        }
    }

    section(out, "Method 3: Table summary")?;
    match reader.summarize(file) {
        Ok(summary) => render::summary(out, &summary)?,
        Err(e) => {
            failed = true;
            report_read_error(out, &e)?;
        }
    }

    Ok(if failed {
        Outcome::Failure
    } else {
        Outcome::Success
    })
}

pub fn sum_even(
    args: &SumEvenArgs,
    config: &AppConfig,
    out: &mut dyn Write,
) -> io::Result<Outcome> {
    let Some(csv_file) = args.csv_file.as_deref() else {
        writeln!(out, "Usage: sum-even <csv_file>")?;
        writeln!(out)?;
        writeln!(out, "Example: sum-even sample_data.csv")?;
        return Ok(Outcome::Failure);
    };

    let Some(parser) = parser_or_report(config, out)? else {
        return Ok(Outcome::Failure);
    };

    match EvenSumUseCase::new(parser).execute(csv_file) {
        Ok(sum) => {
            render::even_sum(out, &sum)?;
            Ok(Outcome::Success)
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(Outcome::Failure)
        }
    }
}
