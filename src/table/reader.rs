use crate::error::{InspectError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Column positions and delimiter of a scan export.
///
/// Defaults match the scanner's porosity export: one header line, the void
/// diameter in column 2 and the voxel indices of the centre in columns 3-5
/// (zero-based). Other columns are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableLayout {
    pub delimiter: char,
    pub has_header: bool,
    pub diameter_column: usize,
    pub voxel_columns: [usize; 3],
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            diameter_column: 2,
            voxel_columns: [3, 4, 5],
        }
    }
}

impl TableLayout {
    /// Number of columns a data row must carry.
    pub fn min_columns(&self) -> usize {
        self.voxel_columns
            .iter()
            .copied()
            .chain(std::iter::once(self.diameter_column))
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// One validated data row, before any unit conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct RawDefectRow {
    /// 1-based line number in the source text.
    pub line: usize,
    pub diameter_mm: f64,
    /// Voxel indices of the centre, `[x, y, z]`.
    pub voxel: [f64; 3],
}

/// Parses an in-memory scan export.
///
/// Blank lines are skipped. Fields are trimmed and may be quoted.
pub fn parse_table(text: &str, layout: &TableLayout) -> Result<Vec<RawDefectRow>> {
    let min_columns = layout.min_columns();
    let mut rows = Vec::new();
    let mut header_pending = layout.has_header;

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        if raw_line.trim().is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }
        let fields: Vec<&str> = raw_line.split(layout.delimiter).map(clean_field).collect();
        if fields.len() < min_columns {
            return Err(InspectError::malformed(
                line,
                format!(
                    "expected at least {min_columns} columns, found {}",
                    fields.len()
                ),
            ));
        }

        let diameter_mm = parse_number(fields[layout.diameter_column], line, "diameter")?;
        if diameter_mm < 0.0 {
            return Err(InspectError::malformed(
                line,
                format!("negative diameter {diameter_mm}"),
            ));
        }
        let mut voxel = [0.0; 3];
        for (axis, (&col, slot)) in layout.voxel_columns.iter().zip(voxel.iter_mut()).enumerate() {
            *slot = parse_number(fields[col], line, AXIS_NAMES[axis])?;
        }
        rows.push(RawDefectRow {
            line,
            diameter_mm,
            voxel,
        });
    }

    debug!("parse_table read {} data rows", rows.len());
    Ok(rows)
}

/// Reads and parses a scan export from disk.
pub fn read_table(path: &Path, layout: &TableLayout) -> Result<Vec<RawDefectRow>> {
    let text = fs::read_to_string(path).map_err(|e| InspectError::from_io(path, e))?;
    parse_table(&text, layout)
}

const AXIS_NAMES: [&str; 3] = ["voxel x", "voxel y", "voxel z"];

fn clean_field(field: &str) -> &str {
    let trimmed = field.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
}

fn parse_number(field: &str, line: usize, what: &str) -> Result<f64> {
    let value: f64 = field
        .parse()
        .map_err(|_| InspectError::malformed(line, format!("{what} '{field}' is not a number")))?;
    if !value.is_finite() {
        return Err(InspectError::malformed(
            line,
            format!("{what} '{field}' is not finite"),
        ));
    }
    Ok(value)
}
