use std::process::ExitCode;

use clap::Parser;
use utilbox_lib::interfaces::cli::{args::Base64Args, commands};

fn main() -> ExitCode {
    let args = Base64Args::parse();
    utilbox_lib::app::run(|_config, input, out| commands::base64_tool(&args, input, out))
}
