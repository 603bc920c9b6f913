//! ap-data: acquisition-rig data layer.
//!
//! Parses the raw pressure-scanner table and the two position files produced
//! by the 2D test rig, and carries the explicit test-condition configuration
//! that the reduction pipeline is parameterized by.

pub mod conditions;
pub mod error;
pub mod layout;
pub mod positions;
pub mod repository;

pub use conditions::TestConditions;
pub use error::{DataError, DataResult};
pub use layout::{RawTableLayout, WAKE_STATIC_PROBE_MM, WAKE_TOTAL_PROBE_MM};
pub use positions::{load_chordwise_positions, load_wake_positions, parse_positions};
pub use repository::{RunRecord, find_run, load_raw_table, parse_raw_table};
