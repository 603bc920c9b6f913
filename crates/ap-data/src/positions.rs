//! Tap and probe position files: one float per line.

use crate::error::{DataError, DataResult};
use ap_core::Real;
use std::path::Path;

/// Parse a one-float-per-line position file.
pub fn parse_positions(text: &str) -> DataResult<Vec<Real>> {
    Ok(parse_position_lines(text)?
        .into_iter()
        .map(|(_, value)| value)
        .collect())
}

/// Parse positions keeping each value's 1-based source line. Blank lines are
/// skipped, so a value's index and its file line can differ.
fn parse_position_lines(text: &str) -> DataResult<Vec<(usize, Real)>> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<Real>().map_err(|_| DataError::BadField {
            line: idx + 1,
            column: 0,
            what: "position",
            value: trimmed.to_string(),
        })?;
        out.push((idx + 1, value));
    }
    Ok(out)
}

/// Chordwise tap positions [percent chord], ordered to match the raw table's
/// surface-pressure columns.
pub fn load_chordwise_positions(path: &Path) -> DataResult<Vec<Real>> {
    let text = std::fs::read_to_string(path)?;
    parse_positions(&text)
}

/// Wake-rake probe coordinates, ordered to match the wake-pressure columns.
/// Must be monotonically increasing along the rake.
pub fn load_wake_positions(path: &Path) -> DataResult<Vec<Real>> {
    let text = std::fs::read_to_string(path)?;
    let positions = parse_position_lines(&text)?;
    ensure_increasing(&positions, "wake positions")?;
    Ok(positions.into_iter().map(|(_, value)| value).collect())
}

fn ensure_increasing(values: &[(usize, Real)], what: &'static str) -> DataResult<()> {
    for w in values.windows(2) {
        if w[1].1 <= w[0].1 {
            return Err(DataError::NonMonotonicPositions { what, line: w[1].0 });
        }
    }
    Ok(())
}
