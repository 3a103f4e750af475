use std::process::ExitCode;

use clap::Parser;
use utilbox_lib::interfaces::cli::{args::CsvReaderArgs, commands};

fn main() -> ExitCode {
    let args = CsvReaderArgs::parse();
    utilbox_lib::app::run(|config, _input, out| commands::csv_reader(&args, config, out))
}
