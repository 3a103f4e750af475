use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::application::use_cases::base64_codec;
use crate::interfaces::cli::render::{rule, RULE_WIDTH};

/// Print `text`, then read one line. `None` means end of input.
pub fn prompt(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Menu entries of the Base64 tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EncodeText,
    DecodeText,
    EncodeFile,
    DecodeFile,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::EncodeText),
            "2" => Some(MenuChoice::DecodeText),
            "3" => Some(MenuChoice::EncodeFile),
            "4" => Some(MenuChoice::DecodeFile),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn print_menu(out: &mut dyn Write) -> io::Result<()> {
    let banner = rule('=', RULE_WIDTH);
    writeln!(out, "{}", banner)?;
    writeln!(out, "Base64 Encoder/Decoder Tool")?;
    writeln!(out, "{}", banner)?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "1. Encode text to Base64")?;
    writeln!(out, "2. Decode Base64 to text")?;
    writeln!(out, "3. Encode file to Base64")?;
    writeln!(out, "4. Decode Base64 to file")?;
    writeln!(out, "5. Exit")?;
    writeln!(out, "{}", banner)
}

/// Menu loop; returns on choice 5 or end of input.
pub fn base64_menu(input: &mut dyn BufRead, out: &mut dyn Write) -> io::Result<()> {
    print_menu(out)?;

    loop {
        let Some(choice) = prompt(input, out, "\nEnter your choice (1-5): ")? else {
            writeln!(out)?;
            writeln!(out, "Goodbye!")?;
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&choice) else {
            writeln!(out, "Invalid choice. Please enter 1-5.")?;
            continue;
        };

        match choice {
            MenuChoice::EncodeText => {
                let Some(text) = prompt(input, out, "Enter text to encode: ")? else {
                    continue;
                };
                writeln!(out, "\nEncoded Base64: {}", base64_codec::encode_text(&text))?;
            }
            MenuChoice::DecodeText => {
                let Some(encoded) = prompt(input, out, "Enter Base64 string to decode: ")? else {
                    continue;
                };
                match base64_codec::decode_text(&encoded) {
                    Ok(text) => writeln!(out, "\nDecoded text: {}", text)?,
                    Err(e) => writeln!(out, "\nError decoding: {}", e)?,
                }
            }
            MenuChoice::EncodeFile => {
                let Some(path) = prompt(input, out, "Enter file path to encode: ")? else {
                    continue;
                };
                match base64_codec::encode_file(Path::new(path.trim())) {
                    Ok(encoded) => writeln!(out, "\nEncoded Base64:\n{}", encoded)?,
                    Err(e) => writeln!(out, "Error encoding file: {}", e)?,
                }
            }
            MenuChoice::DecodeFile => {
                let Some(encoded) = prompt(input, out, "Enter Base64 string: ")? else {
                    continue;
                };
                let Some(output_path) = prompt(input, out, "Enter output file path: ")? else {
                    continue;
                };
                let output_path = output_path.trim();
                match base64_codec::decode_to_file(&encoded, Path::new(output_path)) {
                    Ok(_) => writeln!(out, "\nSuccessfully decoded to {}", output_path)?,
                    Err(e) => writeln!(out, "Error decoding to file: {}", e)?,
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
        }
    }
}
