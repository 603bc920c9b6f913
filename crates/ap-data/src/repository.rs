//! Run repository: parse the raw scanner table into immutable run records.

use crate::error::{DataError, DataResult};
use crate::layout::RawTableLayout;
use ap_core::{ensure_finite, Real};
use std::path::Path;

/// One physical test run, as scanned by the rig.
///
/// Immutable once parsed; the sweep driver borrows records and never writes
/// back. Pressures are absolute [Pa], ordered exactly as the rig's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub run_nr: i64,
    /// Measured angle of attack [deg].
    pub alpha_deg: Real,
    /// Air density during the run [kg/m^3].
    pub rho: Real,
    /// Surface-tap pressures, tap order (upper surface first).
    pub surface_pressures: Vec<Real>,
    /// Tunnel reference pressure.
    pub reference_pressure: Real,
    /// Wake-rake total pressures, probe order.
    pub wake_total_pressures: Vec<Real>,
    /// Wake-rake static pressures, probe order.
    pub wake_static_pressures: Vec<Real>,
}

/// Parse the full raw table. Any malformed row aborts the load; a truncated
/// scan file is never partially usable.
pub fn parse_raw_table(text: &str, layout: &RawTableLayout) -> DataResult<Vec<RunRecord>> {
    let expected = layout.min_fields();
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(layout.header_lines) {
        if line.trim().is_empty() {
            continue;
        }
        let line_nr = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < expected {
            return Err(DataError::RowFormat {
                line: line_nr,
                found: fields.len(),
                expected,
            });
        }

        let run_nr = parse_int(&fields, layout.run_nr_col, "run number", line_nr)?;
        let alpha_deg = parse_float(&fields, layout.alpha_col, "angle of attack", line_nr)?;
        let rho = parse_float(&fields, layout.rho_col, "density", line_nr)?;
        let surface_pressures = parse_block(
            &fields,
            layout.surface_start,
            layout.surface_taps,
            "surface pressure",
            line_nr,
        )?;
        let wake_total_pressures = parse_block(
            &fields,
            layout.wake_total_start,
            layout.wake_total_probes,
            "wake total pressure",
            line_nr,
        )?;
        let wake_static_pressures = parse_block(
            &fields,
            layout.wake_static_start,
            layout.wake_static_probes,
            "wake static pressure",
            line_nr,
        )?;
        let reference_pressure =
            parse_float(&fields, layout.ref_pressure_col, "reference pressure", line_nr)?;

        records.push(RunRecord {
            run_nr,
            alpha_deg,
            rho,
            surface_pressures,
            reference_pressure,
            wake_total_pressures,
            wake_static_pressures,
        });
    }

    Ok(records)
}

/// Load and parse the raw table from disk.
pub fn load_raw_table(path: &Path, layout: &RawTableLayout) -> DataResult<Vec<RunRecord>> {
    let text = std::fs::read_to_string(path)?;
    parse_raw_table(&text, layout)
}

/// Pure lookup by run number. A missing run is reported explicitly so the
/// caller decides whether to skip that point or abort the sweep.
pub fn find_run(records: &[RunRecord], run_nr: i64) -> DataResult<&RunRecord> {
    records
        .iter()
        .find(|r| r.run_nr == run_nr)
        .ok_or(DataError::RunNotFound { run_nr })
}

fn parse_int(fields: &[&str], column: usize, what: &'static str, line: usize) -> DataResult<i64> {
    fields[column].parse::<i64>().map_err(|_| DataError::BadField {
        line,
        column,
        what,
        value: fields[column].to_string(),
    })
}

/// Parse one numeric field. A scanner dropout can leave "nan" or "inf" in a
/// column, which `f64::parse` accepts, so finiteness is checked too.
fn parse_float(fields: &[&str], column: usize, what: &'static str, line: usize) -> DataResult<Real> {
    let bad_field = || DataError::BadField {
        line,
        column,
        what,
        value: fields[column].to_string(),
    };
    let value = fields[column].parse::<Real>().map_err(|_| bad_field())?;
    ensure_finite(value, what).map_err(|_| bad_field())
}

fn parse_block(
    fields: &[&str],
    start: usize,
    count: usize,
    what: &'static str,
    line: usize,
) -> DataResult<Vec<Real>> {
    (start..start + count)
        .map(|col| parse_float(fields, col, what, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a syntactically valid row for the default layout with the given
    /// scalars and constant pressure fill.
    pub(crate) fn synthetic_row(run_nr: i64, alpha: f64, rho: f64, fill: f64) -> String {
        let layout = RawTableLayout::default();
        let mut fields = vec![fill.to_string(); layout.min_fields()];
        fields[layout.run_nr_col] = run_nr.to_string();
        fields[layout.alpha_col] = alpha.to_string();
        fields[layout.rho_col] = rho.to_string();
        fields.join(" ")
    }

    fn synthetic_table(rows: &[String]) -> String {
        let mut text = String::from("header line one\nheader line two\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text
    }

    #[test]
    fn parses_full_rows() {
        let layout = RawTableLayout::default();
        let table = synthetic_table(&[
            synthetic_row(1, 0.4, 1.2, 900.0),
            synthetic_row(2, 1.6, 1.2, 910.0),
        ]);
        let records = parse_raw_table(&table, &layout).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].run_nr, 1);
        assert_eq!(records[1].alpha_deg, 1.6);
        assert_eq!(records[0].surface_pressures.len(), layout.surface_taps);
        assert_eq!(records[0].wake_total_pressures.len(), layout.wake_total_probes);
        assert_eq!(records[0].wake_static_pressures.len(), layout.wake_static_probes);
        assert_eq!(records[0].reference_pressure, 900.0);
    }

    #[test]
    fn short_row_aborts_load() {
        let layout = RawTableLayout::default();
        let table = synthetic_table(&[
            synthetic_row(1, 0.4, 1.2, 900.0),
            "3 0 5.0 0 0 0 0 1.2 900".to_string(),
        ]);
        let err = parse_raw_table(&table, &layout).unwrap_err();
        match err {
            DataError::RowFormat { line, found, expected } => {
                assert_eq!(line, 4);
                assert_eq!(found, 9);
                assert_eq!(expected, layout.min_fields());
            }
            other => panic!("expected RowFormat, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_field_aborts_load() {
        let layout = RawTableLayout::default();
        let bad = synthetic_row(1, 0.4, 1.2, 900.0).replace("1.2", "n/a");
        let table = synthetic_table(&[bad]);
        let err = parse_raw_table(&table, &layout).unwrap_err();
        assert!(matches!(err, DataError::BadField { .. }));
    }

    #[test]
    fn non_finite_field_aborts_load() {
        let layout = RawTableLayout::default();
        // "nan" and "inf" parse as f64, but a dropout reading is still unusable
        for poison in ["nan", "inf", "-inf"] {
            let mut fields: Vec<String> = synthetic_row(1, 0.4, 1.2, 900.0)
                .split_whitespace()
                .map(str::to_string)
                .collect();
            fields[layout.surface_start] = poison.to_string();
            let table = synthetic_table(&[fields.join(" ")]);
            let err = parse_raw_table(&table, &layout).unwrap_err();
            match err {
                DataError::BadField { column, value, .. } => {
                    assert_eq!(column, layout.surface_start);
                    assert_eq!(value, poison);
                }
                other => panic!("expected BadField, got {other:?}"),
            }
        }
    }

    #[test]
    fn find_run_reports_missing() {
        let layout = RawTableLayout::default();
        let table = synthetic_table(&[synthetic_row(5, 5.1, 1.2, 900.0)]);
        let records = parse_raw_table(&table, &layout).unwrap();

        assert_eq!(find_run(&records, 5).unwrap().run_nr, 5);
        let err = find_run(&records, 7).unwrap_err();
        assert!(matches!(err, DataError::RunNotFound { run_nr: 7 }));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let layout = RawTableLayout::default();
        let table = format!(
            "h1\nh2\n\n{}\n\n",
            synthetic_row(9, 9.0, 1.2, 900.0)
        );
        let records = parse_raw_table(&table, &layout).unwrap();
        assert_eq!(records.len(), 1);
    }
}
