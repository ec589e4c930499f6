//! Delimited-text serialization for ragged, string-keyed rows.
//!
//! Rows are ordered key → value mappings rather than structs: export rows
//! grow per-document columns on demand, so different rows can carry
//! different key sets. The header row is the union of keys across all rows
//! in first-seen order, and a row that lacks a key serializes that cell as
//! the empty string. An Absent matrix cell is different: it arrives here
//! already rendered as "N/A" under its own key.
//!
//! Quoting: a field containing a comma, newline, or double quote is wrapped
//! in double quotes with internal quotes doubled; everything else is
//! emitted raw. Rows are newline-joined with no trailing newline.

use std::collections::HashSet;

/// An ordered string-keyed row. Keys keep first-insert order; inserting an
/// existing key overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMap {
    entries: Vec<(String, String)>,
}

impl RowMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Union of keys across all rows, preserving first-seen order.
pub fn header_union(rows: &[RowMap]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut headers = Vec::new();
    for row in rows {
        for key in row.keys() {
            if seen.insert(key) {
                headers.push(key.to_string());
            }
        }
    }
    headers
}

/// Serialize rows under an explicit header list. Cells for headers a row
/// does not carry are empty strings.
pub fn to_csv_with_headers(rows: &[RowMap], headers: &[String]) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    // Writer errors on an in-memory Vec<u8> sink cannot occur for valid
    // UTF-8 records; unwrap via expect keeps the signature infallible.
    writer
        .write_record(headers)
        .expect("in-memory CSV write cannot fail");

    for row in rows {
        let record: Vec<&str> = headers
            .iter()
            .map(|header| row.get(header).unwrap_or(""))
            .collect();
        writer
            .write_record(&record)
            .expect("in-memory CSV write cannot fail");
    }

    let bytes = writer.into_inner().expect("in-memory CSV flush cannot fail");
    let mut text = String::from_utf8(bytes).expect("CSV output is UTF-8");

    // Rows are newline-joined; the writer terminates the last record too
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Serialize rows with the header set computed as the union of their keys.
pub fn to_csv(rows: &[RowMap]) -> String {
    to_csv_with_headers(rows, &header_union(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(pairs: &[(&str, &str)]) -> RowMap {
        let mut map = RowMap::new();
        for (k, v) in pairs {
            map.insert(*k, *v);
        }
        map
    }

    #[test]
    fn header_union_keeps_first_seen_order() {
        let rows = vec![
            row(&[("Field/Question", "Term"), ("a.pdf - Value", "3 years")]),
            row(&[
                ("Field/Question", "Law"),
                ("a.pdf - Value", "DE"),
                ("a.pdf - Citation", "s. 12"),
            ]),
        ];
        assert_eq!(
            header_union(&rows),
            ["Field/Question", "a.pdf - Value", "a.pdf - Citation"]
        );
    }

    #[test]
    fn missing_key_serializes_as_empty_string() {
        let rows = vec![
            row(&[("a", "1"), ("b", "2")]),
            row(&[("a", "3")]),
        ];
        assert_eq!(to_csv(&rows), "a,b\n1,2\n3,");
    }

    #[test]
    fn no_trailing_newline() {
        let rows = vec![row(&[("a", "1")])];
        assert_eq!(to_csv(&rows), "a\n1");
    }

    #[test]
    fn comma_fields_are_quoted() {
        let rows = vec![row(&[("name", "Doe, Jane")])];
        assert_eq!(to_csv(&rows), "name\n\"Doe, Jane\"");
    }

    #[test]
    fn newline_fields_are_quoted() {
        let rows = vec![row(&[("note", "line one\nline two")])];
        assert_eq!(to_csv(&rows), "note\n\"line one\nline two\"");
    }

    #[test]
    fn quote_fields_are_quoted_and_doubled() {
        let rows = vec![row(&[("quote", "the \"effective\" date")])];
        assert_eq!(to_csv(&rows), "quote\n\"the \"\"effective\"\" date\"");
    }

    #[test]
    fn headers_are_escaped_too() {
        let rows = vec![row(&[("Doe, Jane - Value", "x")])];
        assert_eq!(to_csv(&rows), "\"Doe, Jane - Value\"\nx");
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut map = RowMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "3");
        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    /// Re-parse serialized output with the csv reader and compare fields.
    fn roundtrip(value: &str) -> String {
        let rows = vec![row(&[("field", value), ("marker", "x")])];
        let text = to_csv(&rows);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.get(1), Some("x"));
        record.get(0).unwrap().to_string()
    }

    #[test]
    fn roundtrip_special_characters() {
        for s in [
            "plain",
            "comma, separated",
            "multi\nline",
            "\"quoted\"",
            "mix: \"a\", b\nc",
            "",
        ] {
            assert_eq!(roundtrip(s), s);
        }
    }

    proptest! {
        #[test]
        fn roundtrip_arbitrary_strings(s in "[ -~\n\"]*") {
            prop_assert_eq!(roundtrip(&s), s);
        }
    }
}
