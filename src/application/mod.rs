pub mod use_cases;

pub use use_cases::add_numbers::AddNumbersUseCase;
pub use use_cases::csv_reader::CsvReaderUseCase;
pub use use_cases::even_sum::EvenSumUseCase;
