use std::process::ExitCode;

use clap::Parser;
use utilbox_lib::interfaces::cli::{args::AddNumbersArgs, commands};

fn main() -> ExitCode {
    let args = AddNumbersArgs::parse();
    utilbox_lib::app::run(|config, _input, out| commands::add_numbers(&args, config, out))
}
