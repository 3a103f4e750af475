pub mod error;
pub mod summation;

// CSV value types
pub mod csv;
