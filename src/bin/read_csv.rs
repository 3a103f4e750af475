use std::process::ExitCode;

use clap::Parser;
use utilbox_lib::interfaces::cli::{args::ReadCsvArgs, commands};

fn main() -> ExitCode {
    let args = ReadCsvArgs::parse();
    utilbox_lib::app::run(|config, input, out| commands::read_csv(&args, config, input, out))
}
