use std::process::ExitCode;

use clap::Parser;
use utilbox_lib::interfaces::cli::{args::SumEvenArgs, commands};

fn main() -> ExitCode {
    let args = SumEvenArgs::parse();
    utilbox_lib::app::run(|config, _input, out| commands::sum_even(&args, config, out))
}
