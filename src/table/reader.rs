//! Delimited-text reading
//!
//! Splits raw source text into rows of cells. The delimiter is configurable
//! because observed sources disagree (comma vs semicolon), and food names in
//! the TACO table contain commas, so double-quoted fields are honored.

use crate::error::SourceFormatError;

/// Split the whole source into rows of cells, skipping blank lines
pub fn read_rows(raw: &str, delimiter: char) -> Result<Vec<Vec<String>>, SourceFormatError> {
    let rows: Vec<Vec<String>> = raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_record(line, delimiter))
        .collect();

    if rows.is_empty() {
        return Err(SourceFormatError::Empty);
    }
    Ok(rows)
}

/// Split one line on the delimiter, honoring double quotes.
///
/// Inside a quoted cell the delimiter is literal and `""` is an escaped quote.
/// Quotes that wrap the whole cell are stripped; anything else passes through.
pub fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' && current.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            cells.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    cells.push(current);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_comma() {
        assert_eq!(
            split_record("Banana,89,22.8,1.1,0.3", ','),
            vec!["Banana", "89", "22.8", "1.1", "0.3"]
        );
    }

    #[test]
    fn test_split_semicolon_with_decimal_commas() {
        // Semicolon-delimited sources use the comma as decimal separator,
        // so unquoted names with commas survive intact
        let cells = split_record("Arroz, integral, cozido;124;25,8;2,6;1,0", ';');
        assert_eq!(cells, vec!["Arroz, integral, cozido", "124", "25,8", "2,6", "1,0"]);
    }

    #[test]
    fn test_split_quoted_name_with_comma() {
        let cells = split_record("\"Rice, cooked\",130,28,2.7,0.3", ',');
        assert_eq!(cells[0], "Rice, cooked");
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn test_split_escaped_quote() {
        let cells = split_record("\"say \"\"hi\"\"\",1", ',');
        assert_eq!(cells[0], "say \"hi\"");
    }

    #[test]
    fn test_split_trailing_empty_cell() {
        assert_eq!(split_record("a,b,", ','), vec!["a", "b", ""]);
    }

    #[test]
    fn test_read_rows_skips_blank_lines() {
        let rows = read_rows("a,1\n\n  \nb,2\n", ',').unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_read_rows_empty_source_fails() {
        assert!(matches!(
            read_rows("  \n \n", ','),
            Err(SourceFormatError::Empty)
        ));
    }
}
