// ============================================================
// CSV ROW TYPES
// ============================================================
// Data structures representing rows read from a CSV file

use serde::{Deserialize, Serialize};

/// A single named cell in a dict-style row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvField {
    /// Header name this cell belongs to
    pub name: String,

    /// Cell value, empty when the row is shorter than the header
    pub value: String,
}

impl CsvField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A data row keyed by the header row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    /// Data row index (0-based, header and blank lines excluded)
    pub index: usize,

    /// Fields in header order
    pub fields: Vec<CsvField>,

    /// Cells beyond the header width
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl CsvRow {
    /// Pair a record with the header; missing cells become empty values.
    pub fn from_record<'a, H, R>(index: usize, headers: H, record: R) -> Self
    where
        H: IntoIterator<Item = &'a str>,
        R: IntoIterator<Item = &'a str>,
    {
        let mut cells = record.into_iter();
        let fields = headers
            .into_iter()
            .map(|name| CsvField::new(name, cells.next().unwrap_or("")))
            .collect();
        let extra = cells.map(str::to_string).collect();

        Self {
            index,
            fields,
            extra,
        }
    }

    /// Look up a value by header name
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Render as `{'name': 'Alice', 'age': '30'}`
    pub fn format_mapping(&self) -> String {
        let mut parts: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{}: {}", quote(&f.name), quote(&f.value)))
            .collect();
        if !self.extra.is_empty() {
            parts.push(format!("None: {}", format_list(&self.extra)));
        }
        format!("{{{}}}", parts.join(", "))
    }

    /// Render as a JSON object in header order
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for field in &self.fields {
            map.insert(field.name.clone(), serde_json::Value::String(field.value.clone()));
        }
        if !self.extra.is_empty() {
            map.insert("_extra".to_string(), serde_json::json!(self.extra));
        }
        serde_json::Value::Object(map)
    }
}

/// A CSV file read as a header plus ordered data rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvTable {
    /// Header row, empty for an empty file
    pub headers: Vec<String>,

    /// Data rows in file order
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Data rows keyed by the header. Empty rows from blank lines are skipped.
    pub fn dict_rows(&self) -> Vec<CsvRow> {
        self.rows
            .iter()
            .filter(|row| !row.is_empty())
            .enumerate()
            .map(|(idx, row)| {
                CsvRow::from_record(
                    idx,
                    self.headers.iter().map(String::as_str),
                    row.iter().map(String::as_str),
                )
            })
            .collect()
    }
}

/// Render a list of cells as `['a', 'b']`
pub fn format_list(cells: &[String]) -> String {
    let quoted: Vec<String> = cells.iter().map(|c| quote(c)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote a cell the way Python's `repr` does: single quotes unless the value
/// contains `'` but no `"`, with backslash escapes for control characters.
fn quote(value: &str) -> String {
    let delim = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(delim);
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delim => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let code = u32::from(c);
                if code < 0x100 {
                    quoted.push_str(&format!("\\x{:02x}", code));
                } else if code < 0x10000 {
                    quoted.push_str(&format!("\\u{:04x}", code));
                } else {
                    quoted.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => quoted.push(c),
        }
    }
    quoted.push(delim);
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CsvTable {
        CsvTable {
            headers: vec!["name".into(), "age".into()],
            rows: vec![
                vec!["Alice".into(), "30".into()],
                vec!["Bob".into()],
                vec!["Eve".into(), "41".into(), "spare".into()],
            ],
        }
    }

    #[test]
    fn test_dict_rows_follow_header() {
        let rows = table().dict_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(rows[0].get("age"), Some("30"));
    }

    #[test]
    fn test_short_row_gets_empty_values() {
        let rows = table().dict_rows();
        assert_eq!(rows[1].get("age"), Some(""));
        assert!(rows[1].extra.is_empty());
    }

    #[test]
    fn test_long_row_keeps_extra_cells() {
        let rows = table().dict_rows();
        assert_eq!(rows[2].extra, vec!["spare".to_string()]);
        assert_eq!(
            rows[2].format_mapping(),
            "{'name': 'Eve', 'age': '41', None: ['spare']}"
        );
    }

    #[test]
    fn test_format_list_picks_quote_like_repr() {
        let cells = vec!["it's".to_string(), "ok".to_string()];
        assert_eq!(format_list(&cells), "[\"it's\", 'ok']");

        let both = vec!["it's \"x\"".to_string(), "say \"hi\"".to_string()];
        assert_eq!(format_list(&both), "['it\\'s \"x\"', 'say \"hi\"']");
    }

    #[test]
    fn test_format_list_escapes_control_characters() {
        let cells = vec![
            "a\tb\nc".to_string(),
            "back\\slash".to_string(),
            "\u{1}\u{a0}".to_string(),
        ];
        assert_eq!(
            format_list(&cells),
            "['a\\tb\\nc', 'back\\\\slash', '\\x01\\xa0']"
        );
    }

    #[test]
    fn test_blank_rows_are_not_dict_rows() {
        let table = CsvTable {
            headers: vec!["name".into()],
            rows: vec![vec![], vec!["Ann".into()], vec![]],
        };
        let rows = table.dict_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].format_mapping(), "{'name': 'Ann'}");
    }

    #[test]
    fn test_to_json_preserves_values() {
        let rows = table().dict_rows();
        let json = rows[0].to_json();
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["age"], "30");
    }
}
