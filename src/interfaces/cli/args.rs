use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "add-numbers",
    about = "Sum the first three numbers of the row after the CSV header"
)]
pub struct AddNumbersArgs {
    /// CSV file to read; defaults to `numbers_file` from config
    pub csv_file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[command(
    name = "base64-tool",
    about = "Encode and decode Base64 text or files; runs a menu when given no arguments"
)]
pub struct Base64Args {
    /// `encode|-e <text>`, `decode|-d <base64>`, `encode-file <path>`,
    /// or `decode-file <base64> <output>`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Parser)]
#[command(
    name = "read-csv",
    about = "Print the rows of a CSV file; prompts for the file when none is given"
)]
pub struct ReadCsvArgs {
    pub file: Option<PathBuf>,

    /// Key each row by the header instead of printing plain lists
    #[arg(long)]
    pub dict: bool,

    /// Print each row as a JSON line
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[command(
    name = "csv-reader",
    about = "Read a CSV file with the list reader, the dict reader and a table summary"
)]
pub struct CsvReaderArgs {
    /// CSV file to read; defaults to `sample_file` from config
    pub file: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[command(
    name = "sum-even",
    about = "Sum the even numbers found in even-numbered rows of a CSV file"
)]
pub struct SumEvenArgs {
    pub csv_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_args_accept_short_flags_as_values() {
        let args = Base64Args::try_parse_from(["base64-tool", "-e", "hello"]).unwrap();
        assert_eq!(args.args, vec!["-e", "hello"]);
    }

    #[test]
    fn test_read_csv_flags() {
        let args = ReadCsvArgs::try_parse_from(["read-csv", "data.csv", "--dict"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("data.csv")));
        assert!(args.dict);
        assert!(!args.json);
    }

    #[test]
    fn test_sum_even_path_is_optional() {
        let args = SumEvenArgs::try_parse_from(["sum-even"]).unwrap();
        assert!(args.csv_file.is_none());
    }
}
