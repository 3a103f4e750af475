use serde::{Deserialize, Serialize};

/// Three numbers read from a data row and their sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberSum {
    pub values: [f64; 3],
    pub total: f64,
}

impl NumberSum {
    pub fn new(values: [f64; 3]) -> Self {
        Self {
            values,
            total: values.iter().sum(),
        }
    }
}

/// An even value found in an even-positioned row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvenHit {
    /// 1-based row position
    pub row: usize,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvenSum {
    pub total: i64,
    pub hits: Vec<EvenHit>,
}

/// Rows are counted from 1; positions 2, 4, 6, ... are even.
pub fn is_even_row(position: usize) -> bool {
    position % 2 == 0
}

/// Parse a cell as an integer after trimming; `None` when it is not one.
pub fn parse_int_cell(cell: &str) -> Option<i64> {
    cell.trim().parse::<i64>().ok()
}
