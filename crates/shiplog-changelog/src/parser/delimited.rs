//! Delimiter-separated text parser
//!
//! Turns raw delimiter-separated text into rows of string fields. Quoted
//! fields may contain the delimiter, row breaks, and doubled quotes (`""`
//! unescapes to one literal quote). The parser never fails; malformed input
//! produces best-effort rows.

/// Parser for delimiter-separated text
#[derive(Debug, Clone)]
pub struct DelimitedParser {
    delimiter: char,
}

impl Default for DelimitedParser {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl DelimitedParser {
    /// Create a parser with the default comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parse input into rows of fields.
    ///
    /// Rows are separated by `\r\n`, `\r`, or `\n`; fields by the configured
    /// delimiter. Empty input yields one row with no fields. Text following a
    /// closing quote that is neither a delimiter nor a row break ends the
    /// scan; the remainder is dropped.
    pub fn parse(&self, input: &str) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = vec![Vec::new()];
        if input.is_empty() {
            return rows;
        }

        let mut rest = input;
        let mut at_start = true;
        loop {
            // Every field is preceded by a marker: the delimiter continues
            // the current row, a row break opens a new one, and the empty
            // marker is only valid at the very start of input.
            if let Some(after) = rest.strip_prefix(self.delimiter) {
                rest = after;
            } else if let Some(after) = strip_row_break(rest) {
                rows.push(Vec::new());
                rest = after;
            } else if !at_start {
                break;
            }
            at_start = false;

            let (field, after) = self.scan_field(rest);
            rest = after;
            rows.last_mut()
                .expect("rows always holds at least one row")
                .push(field);
        }

        rows
    }

    /// Scan one field at the start of `input`, returning the field value and
    /// the unconsumed tail
    fn scan_field<'a>(&self, input: &'a str) -> (String, &'a str) {
        match input.strip_prefix('"') {
            Some(inner) => scan_quoted(inner),
            None => self.scan_bare(input),
        }
    }

    /// Bare field: runs until the delimiter, a quote, a row break, or the end
    /// of input
    fn scan_bare<'a>(&self, input: &'a str) -> (String, &'a str) {
        let end = input
            .find(|c: char| c == self.delimiter || c == '"' || c == '\r' || c == '\n')
            .unwrap_or(input.len());
        (input[..end].to_string(), &input[end..])
    }
}

/// Quoted field body: runs to the closing quote, with `""` unescaping to one
/// literal quote. An unterminated field consumes the rest of the input.
fn scan_quoted(input: &str) -> (String, &str) {
    let mut value = String::new();
    let mut pos = 0;

    while let Some(idx) = input[pos..].find('"') {
        value.push_str(&input[pos..pos + idx]);
        let after = pos + idx + 1;
        if input[after..].starts_with('"') {
            value.push('"');
            pos = after + 1;
        } else {
            return (value, &input[after..]);
        }
    }

    value.push_str(&input[pos..]);
    (value, "")
}

fn strip_row_break(input: &str) -> Option<&str> {
    input
        .strip_prefix("\r\n")
        .or_else(|| input.strip_prefix('\r'))
        .or_else(|| input.strip_prefix('\n'))
}
