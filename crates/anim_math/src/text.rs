//! Text input and output for Vector
//!
//! Vectors print as `(X, Y, Z)` with two decimals. Input accepts the same
//! shape from a single line, with any whitespace or precision inside the
//! numeric fields. Wide-character variants encode the same text as UTF-16.
//!
//! There are two input contracts:
//! - [`FromStr`] is strict and reports the first problem it finds.
//! - [`Vector::read_text`] and friends behave like stream extraction: a
//!   missing delimiter leaves the vector untouched, each field reads its
//!   leading decimal number (`1.5abc` is `1.5`), and a field with no leading
//!   number reads as `0.0`.

use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

use crate::error::{ParseVectorError, Result};
use crate::vector::{Axis, Vector};

const DEFAULT_PRECISION: usize = 2;

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x(), self.y(), self.z(), p = p)
    }
}

/// Slice out the X, Y and Z fields of `(X, Y, Z)`
fn split_fields(line: &str) -> Result<[&str; 3]> {
    let open = line.find('(').ok_or(ParseVectorError::MissingOpenParen)?;
    let close = line.find(')').ok_or(ParseVectorError::MissingCloseParen)?;

    let start = open + 1;
    let mut commas = line[start..].match_indices(',').map(|(i, _)| start + i);
    let first = commas.next().ok_or(ParseVectorError::MissingComma { found: 0 })?;
    let second = commas.next().ok_or(ParseVectorError::MissingComma { found: 1 })?;

    if close < second {
        return Err(ParseVectorError::Misordered);
    }

    Ok([&line[start..first], &line[first + 1..second], &line[second + 1..close]])
}

fn parse_component(axis: Axis, field: &str) -> Result<f32> {
    let field = field.trim();
    field.parse().map_err(|_| ParseVectorError::InvalidComponent {
        axis,
        text: field.to_owned(),
    })
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Longest leading `[+-]digits[.digits][e[+-]digits]` of `field`.
///
/// `inf`, `nan` and other words read nothing.
fn leading_number(field: &str) -> Option<f32> {
    let s = field.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}

impl FromStr for Vector {
    type Err = ParseVectorError;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y, z] = split_fields(s)?;
        Ok(Vector::new(
            parse_component(Axis::X, x)?,
            parse_component(Axis::Y, y)?,
            parse_component(Axis::Z, z)?,
        ))
    }
}

impl Vector {
    /// Overwrite from a `(X, Y, Z)` line.
    ///
    /// Returns `false` and leaves `self` untouched when a delimiter is
    /// missing or out of order. Each field keeps its leading decimal number
    /// and ignores whatever follows; a field without one is stored as `0.0`.
    pub fn read_text(&mut self, line: &str) -> bool {
        let fields = match split_fields(line) {
            Ok(fields) => fields,
            Err(err) => {
                log::debug!("Ignoring vector text {:?}: {}", line, err);
                return false;
            }
        };

        for (axis, field) in Axis::ALL.into_iter().zip(fields) {
            let value = leading_number(field).unwrap_or_else(|| {
                log::debug!("No {} component in {:?}, reading as 0", axis, line);
                0.0
            });
            self.set(axis, value);
        }
        true
    }

    /// Read one line from `reader` and apply it with [`Vector::read_text`].
    ///
    /// Returns `Ok(false)` at end of input or when the line is rejected.
    pub fn read_line_from<R: BufRead>(&mut self, reader: &mut R) -> io::Result<bool> {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(self.read_text(line.trim_end_matches(['\r', '\n'])))
    }

    /// Display output encoded as UTF-16
    pub fn to_wide(&self) -> Vec<u16> {
        self.to_string().encode_utf16().collect()
    }

    /// Strict parse of UTF-16 text
    pub fn parse_wide(text: &[u16]) -> Result<Self> {
        String::from_utf16_lossy(text).parse()
    }

    /// [`Vector::read_text`] for UTF-16 text
    pub fn read_wide(&mut self, text: &[u16]) -> bool {
        self.read_text(&String::from_utf16_lossy(text))
    }
}
