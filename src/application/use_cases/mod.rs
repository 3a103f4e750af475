pub mod add_numbers;
pub mod base64_codec;
pub mod csv_reader;
pub mod even_sum;
