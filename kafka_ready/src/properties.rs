//! Reader for the `key=value` properties files used by kafka clients.
//!
//! Only the subset needed for client configs is supported: one pair per
//! line, `#` and `!` comment lines, and either `=` or `:` as separator.
//! There are no escapes and no line continuations.

use crate::error::PropertiesError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub fn parse_properties_file(
    path: impl AsRef<Path>,
) -> Result<HashMap<String, String>, PropertiesError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PropertiesError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    parse_properties(BufReader::new(file)).map_err(|source| PropertiesError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Later occurrences of a key overwrite earlier ones.
pub fn parse_properties<R: BufRead>(reader: R) -> Result<HashMap<String, String>, std::io::Error> {
    let mut properties = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        if let Some((key, value)) = parse_line(&line) {
            properties.insert(key.to_owned(), value.to_owned());
        }
    }

    Ok(properties)
}

/// Returns `None` for blank, comment and malformed lines.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    // '=' wins over ':' even when ':' comes first, e.g. `bootstrap.servers=host:9092`
    let (key, value) = line.split_once('=').or_else(|| line.split_once(':'))?;

    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key, value.trim()))
}
