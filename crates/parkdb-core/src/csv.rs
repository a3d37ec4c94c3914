// crates/parkdb-core/src/csv.rs

//! # Quote-aware CSV parsing
//!
//! The WDPA export is a plain comma-separated table whose text fields may be
//! wrapped in double quotes (park names routinely contain commas, e.g.
//! `"Maswa, Game Reserve"`). This module parses that dialect:
//!
//! - a comma inside a double-quoted span does not split the cell,
//! - one surrounding layer of double quotes is stripped from each cell,
//! - the header row maps column names to indices, with a leading UTF-8 BOM
//!   and surrounding whitespace removed from each name.
//!
//! Unbalanced quotes are not an error; splitting degrades to best effort.
//! Doubled internal quotes (`""`) are kept verbatim, matching the upstream
//! export which never emits them.

use std::collections::HashMap;

/// A parsed delimited table: header index plus raw cell rows.
///
/// Parsing never fails. Empty or header-only input yields a table with no
/// rows, and short rows simply read as empty cells.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

/// A borrowed view of one data row with named cell access.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a CsvTable,
    cells: &'a [String],
}

impl CsvTable {
    /// Parse raw CSV text (header row + data rows).
    ///
    /// Lines are split on `\r?\n`; fewer than two lines yields an empty
    /// table rather than an error.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.trim().split('\n').map(|l| l.trim_end_matches('\r'));

        let Some(header_line) = lines.next() else {
            return Self::default();
        };

        let mut index = HashMap::new();
        for (i, name) in split_line(header_line).into_iter().enumerate() {
            let name = name.trim_start_matches('\u{feff}').trim().to_string();
            // Duplicate headers: last one wins.
            index.insert(name, i);
        }

        let rows: Vec<Vec<String>> = lines.map(split_line).collect();
        if rows.is_empty() {
            return Self::default();
        }

        Self { index, rows }
    }

    /// Column index for a header name, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over the data rows.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row {
            table: self,
            cells,
        })
    }
}

impl<'a> Row<'a> {
    /// Named cell access. A missing column or a short row reads as `""`.
    pub fn get(&self, name: &str) -> &'a str {
        self.table
            .column(name)
            .and_then(|idx| self.cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Split one line into cells, honoring double-quoted spans.
///
/// A comma toggled inside quotes is part of the cell. After splitting, one
/// leading and one trailing double quote are stripped from each cell.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                cur.push(ch);
            }
            ',' if !in_quotes => cells.push(strip_quotes(std::mem::take(&mut cur))),
            _ => cur.push(ch),
        }
    }
    cells.push(strip_quotes(cur));
    cells
}

/// Strip one layer of surrounding double quotes.
///
/// Leading and trailing quotes are removed independently, so a cell with a
/// quote on only one side still loses it. Inner quotes are left untouched.
fn strip_quotes(cell: String) -> String {
    let s = cell.strip_prefix('"').unwrap_or(&cell);
    let s = s.strip_suffix('"').unwrap_or(s);
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_does_not_split() {
        let cells = split_line(r#"555001,"Maswa, Game Reserve",TZA"#);
        assert_eq!(cells, vec!["555001", "Maswa, Game Reserve", "TZA"]);
    }

    #[test]
    fn strips_one_quote_layer_only() {
        // Doubled internal quotes are kept verbatim; only the outermost
        // layer comes off.
        let cells = split_line(r#""a","""b""","#);
        assert_eq!(cells, vec!["a", "\"\"b\"\"", ""]);
    }

    #[test]
    fn header_only_input_yields_empty_table() {
        let table = CsvTable::parse("SITE_ID,NAME_ENG,ISO3");
        assert!(table.is_empty());
        assert_eq!(table.rows().count(), 0);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(CsvTable::parse("").is_empty());
        assert!(CsvTable::parse("\n\n").is_empty());
    }

    #[test]
    fn header_bom_and_whitespace_are_stripped() {
        let table = CsvTable::parse("\u{feff}SITE_ID , NAME\n1,Serengeti");
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("SITE_ID"), "1");
        assert_eq!(row.get("NAME"), "Serengeti");
    }

    #[test]
    fn short_row_reads_missing_cells_as_empty() {
        let table = CsvTable::parse("A,B,C\n1,2");
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("A"), "1");
        assert_eq!(row.get("C"), "");
        assert_eq!(row.get("NOPE"), "");
    }

    #[test]
    fn crlf_line_endings() {
        let table = CsvTable::parse("A,B\r\n1,2\r\n3,4\r\n");
        assert_eq!(table.row_count(), 2);
        let last = table.rows().last().unwrap();
        assert_eq!(last.get("B"), "4");
    }

    #[test]
    fn unbalanced_quote_degrades_to_best_effort() {
        // No panic; the dangling quote swallows the rest of the line.
        let cells = split_line(r#"1,"unterminated,rest"#);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], "1");
    }
}
