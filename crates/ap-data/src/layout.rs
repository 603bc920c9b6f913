//! Column layout of the raw pressure-scanner table.
//!
//! The scanner writes one whitespace-delimited row per run, two header lines
//! first. Which column holds what is a fixed contract of the acquisition rig,
//! so every offset lives here as named configuration rather than as magic
//! numbers inside the parser.

/// Column offsets and field counts for one raw-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTableLayout {
    /// Header lines to skip before the first data row.
    pub header_lines: usize,
    /// Column of the integer run number.
    pub run_nr_col: usize,
    /// Column of the commanded angle of attack [deg].
    pub alpha_col: usize,
    /// Column of the air density [kg/m^3].
    pub rho_col: usize,
    /// First column of the surface-tap pressures [Pa].
    pub surface_start: usize,
    /// Number of surface taps.
    pub surface_taps: usize,
    /// First column of the wake-rake total pressures [Pa].
    pub wake_total_start: usize,
    /// Number of wake-rake total-pressure probes.
    pub wake_total_probes: usize,
    /// First column of the wake-rake static pressures [Pa].
    pub wake_static_start: usize,
    /// Number of wake-rake static-pressure probes.
    pub wake_static_probes: usize,
    /// Column of the tunnel reference pressure [Pa].
    pub ref_pressure_col: usize,
}

impl RawTableLayout {
    /// Minimum number of fields a row must carry for every addressed column
    /// to exist.
    pub fn min_fields(&self) -> usize {
        let ends = [
            self.run_nr_col + 1,
            self.alpha_col + 1,
            self.rho_col + 1,
            self.surface_start + self.surface_taps,
            self.wake_total_start + self.wake_total_probes,
            self.wake_static_start + self.wake_static_probes,
            self.ref_pressure_col + 1,
        ];
        ends.into_iter().max().unwrap_or(0)
    }
}

impl Default for RawTableLayout {
    /// Layout of the 2D retest scanner: 49 surface taps, 47 wake total
    /// probes, 12 wake static probes, reference pressure at column 117.
    fn default() -> Self {
        Self {
            header_lines: 2,
            run_nr_col: 0,
            alpha_col: 2,
            rho_col: 7,
            surface_start: 8,
            surface_taps: 49,
            wake_total_start: 57,
            wake_total_probes: 47,
            wake_static_start: 105,
            wake_static_probes: 12,
            ref_pressure_col: 117,
        }
    }
}

/// Physical coordinates of the wake-rake total-pressure probes [mm], in probe
/// order matching the wake-total columns of the raw table.
pub const WAKE_TOTAL_PROBE_MM: [f64; 47] = [
    0.0, 12.0, 21.0, 27.0, 33.0, 39.0, 45.0, 51.0, 57.0, 63.0, 69.0, 72.0, 75.0, 78.0, 81.0, 84.0,
    87.0, 90.0, 93.0, 96.0, 99.0, 102.0, 105.0, 108.0, 111.0, 114.0, 117.0, 120.0, 123.0, 126.0,
    129.0, 132.0, 135.0, 138.0, 141.0, 144.0, 147.0, 150.0, 156.0, 162.0, 168.0, 174.0, 180.0,
    186.0, 195.0, 207.0, 219.0,
];

/// Physical coordinates of the wake-rake static-pressure probes [mm].
pub const WAKE_STATIC_PROBE_MM: [f64; 12] = [
    43.5, 55.5, 67.5, 79.5, 91.5, 103.5, 115.5, 127.5, 139.5, 151.5, 163.5, 175.5,
];
