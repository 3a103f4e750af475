// ============================================================
// COLUMN KIND ENUM
// ============================================================
// Value type inferred for a CSV column

use serde::{Deserialize, Serialize};

/// Type inferred from the non-empty cells of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Every non-empty cell parses as a 64-bit integer
    Int64,

    /// Every non-empty cell parses as a float, at least one is not an integer
    Float64,

    /// Anything else, including columns with no values at all
    Object,
}

impl ColumnKind {
    /// Infer a kind from a sequence of cells; empty cells are ignored.
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = false;
        let mut kind = ColumnKind::Int64;

        for cell in cells {
            let trimmed = cell.trim();
            if trimmed.is_empty() {
                continue;
            }
            seen = true;

            if kind == ColumnKind::Int64 && trimmed.parse::<i64>().is_ok() {
                continue;
            }
            if trimmed.parse::<f64>().is_ok() {
                kind = ColumnKind::Float64;
                continue;
            }
            return ColumnKind::Object;
        }

        if seen {
            kind
        } else {
            ColumnKind::Object
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Int64 => write!(f, "int64"),
            ColumnKind::Float64 => write!(f, "float64"),
            ColumnKind::Object => write!(f, "object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_integers() {
        assert_eq!(ColumnKind::infer(["1", " 2 ", "-3"]), ColumnKind::Int64);
    }

    #[test]
    fn test_infer_mixed_numbers_as_float() {
        assert_eq!(ColumnKind::infer(["1", "2.5", ""]), ColumnKind::Float64);
    }

    #[test]
    fn test_infer_text_as_object() {
        assert_eq!(ColumnKind::infer(["1", "two"]), ColumnKind::Object);
        assert_eq!(ColumnKind::infer(["", " "]), ColumnKind::Object);
    }
}
