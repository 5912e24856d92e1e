//! ZIP Code normalization.
//!
//! Raw inputs arrive as strings, integers or floats from spreadsheets and
//! CSV exports. They may carry a ZIP+4 suffix, have lost leading zeros, or be
//! one of the placeholder spellings that mean "no value". Everything is folded
//! into a canonical five character [`ZipCode`] or `None`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of a canonical ZIP Code / ZCTA.
pub const CODE_LEN: usize = 5;

/// Spellings that denote a missing code, compared case-insensitively.
const NULL_SENTINELS: &[&str] = &["0", "nan", "null", "none", "0none", "00nan"];

/// A canonical postal code or ZCTA identifier.
///
/// Values produced by [`normalize_code`] never contain separators and are
/// left-padded with zeros. Table keys deserialize verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ZipCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ZipCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ZipCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Normalize any displayable value into a canonical [`ZipCode`].
///
/// The value is rendered as text, cut to its first five characters, stripped
/// of hyphens and spaces, and zero-padded when three or four characters
/// remain. Empty results and placeholder spellings (`nan`, `none`, `null`,
/// `0`, ...) yield `None`.
///
/// # Examples
///
/// ```
/// use zcta_model::normalize_code;
///
/// assert_eq!(normalize_code("12345-6789").unwrap().as_str(), "12345");
/// assert_eq!(normalize_code(501).unwrap().as_str(), "00501");
/// assert!(normalize_code("").is_none());
/// assert!(normalize_code("NaN").is_none());
/// ```
pub fn normalize_code<T: fmt::Display>(raw: T) -> Option<ZipCode> {
    let text = raw.to_string();
    let truncated: String = text.chars().take(CODE_LEN).collect();
    let stripped: String = truncated
        .chars()
        .filter(|ch| *ch != '-' && *ch != ' ')
        .collect();
    if is_null_sentinel(&stripped) {
        return None;
    }
    let padded = match stripped.chars().count() {
        3 | 4 => format!("{stripped:0>width$}", width = CODE_LEN),
        _ => stripped,
    };
    // "null" pads to "0null", so the sentinel check runs on both forms.
    if is_null_sentinel(&padded) {
        return None;
    }
    Some(ZipCode(padded))
}

/// Like [`normalize_code`], treating a missing value as an absent code.
pub fn normalize_code_opt<T: fmt::Display>(raw: Option<T>) -> Option<ZipCode> {
    raw.and_then(normalize_code)
}

fn is_null_sentinel(value: &str) -> bool {
    value.is_empty()
        || NULL_SENTINELS
            .iter()
            .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}
