//! Tabular source parsing: record splitting and header-to-column mapping.
//!
//! The format is a small CSV dialect: comma-separated fields, optional
//! double-quoting with `""` as an escaped quote, blank lines ignored.

use crate::color::{parse_channel, Rgb};
use crate::error::LoadError;

use super::ColorEntry;

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Columns {
    name: usize,
    /// `None` when the source carries only R/G/B columns.
    hex: Option<usize>,
    /// `None` when the source carries only a hex column.
    rgb: Option<[usize; 3]>,
    /// Field count every data row must have.
    width: usize,
}

impl Columns {
    /// Resolve column positions from header fields (case-insensitive).
    pub(super) fn from_header(fields: &[String]) -> Result<Self, LoadError> {
        let find = |names: &[&str]| {
            fields
                .iter()
                .position(|f| names.iter().any(|n| f.trim().eq_ignore_ascii_case(n)))
        };

        let name = find(&["name", "color_name"])
            .ok_or_else(|| LoadError::Header("missing `name` column".to_string()))?;
        let hex = find(&["hex"]);
        let rgb = match (find(&["r"]), find(&["g"]), find(&["b"])) {
            (Some(r), Some(g), Some(b)) => Some([r, g, b]),
            (None, None, None) => None,
            _ => {
                return Err(LoadError::Header(
                    "R, G and B columns must all be present or all be absent".to_string(),
                ))
            }
        };
        if hex.is_none() && rgb.is_none() {
            return Err(LoadError::Header(
                "missing color columns: need `hex` or `R`, `G`, `B`".to_string(),
            ));
        }

        Ok(Self {
            name,
            hex,
            rgb,
            width: fields.len(),
        })
    }

    /// Convert one data row into an entry, enforcing hex/RGB consistency.
    pub(super) fn entry(&self, line: usize, fields: &[String]) -> Result<ColorEntry, LoadError> {
        let row_err = |message: String| LoadError::Row { line, message };

        if fields.len() != self.width {
            return Err(row_err(format!(
                "expected {} fields, found {}",
                self.width,
                fields.len()
            )));
        }

        let name = fields[self.name].trim();
        if name.is_empty() {
            return Err(row_err("empty color name".to_string()));
        }

        let from_hex = match self.hex {
            Some(idx) => {
                let hex_field = fields[idx].trim();
                let rgb = Rgb::from_hex(hex_field)
                    .map_err(|e| row_err(format!("hex `{hex_field}`: {e}")))?;
                Some(rgb)
            }
            None => None,
        };

        let from_channels = match self.rgb {
            Some([r, g, b]) => {
                let channel = |idx: usize, label: &str| {
                    parse_channel(&fields[idx]).map_err(|e| row_err(format!("{label}: {e}")))
                };
                Some(Rgb::new(channel(r, "R")?, channel(g, "G")?, channel(b, "B")?))
            }
            None => None,
        };

        let rgb = match (from_hex, from_channels) {
            (Some(hex), Some(rgb)) if hex != rgb => {
                return Err(row_err(format!(
                    "hex `{}` does not match {rgb}",
                    hex.to_hex()
                )))
            }
            (_, Some(rgb)) | (Some(rgb), None) => rgb,
            (None, None) => return Err(row_err("row carries no color columns".to_string())),
        };

        Ok(ColorEntry::new(name, rgb))
    }
}

/// Split source text into records of unquoted fields.
///
/// Each record is paired with the 1-based line number it started on. Quoted
/// fields may span lines.
pub(super) fn records(text: &str) -> Result<Vec<(usize, Vec<String>)>, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut out = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_closed = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    quote_closed = true;
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        if quote_closed && !matches!(c, ',' | '\r' | '\n' | ' ' | '\t') {
            return Err(LoadError::Row {
                line,
                message: format!("unexpected `{c}` after closing quote"),
            });
        }
        match c {
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' => {
                quote_closed = false;
                fields.push(std::mem::take(&mut field));
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                quote_closed = false;
                fields.push(std::mem::take(&mut field));
                push_record(&mut out, record_line, std::mem::take(&mut fields));
                line += 1;
                record_line = line;
            }
            ' ' | '\t' if quote_closed => {}
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(LoadError::Row {
            line: record_line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        push_record(&mut out, record_line, fields);
    }
    Ok(out)
}

fn push_record(out: &mut Vec<(usize, Vec<String>)>, line: usize, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        out.push((line, fields));
    }
}
