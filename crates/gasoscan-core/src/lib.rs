//! gasoscan-core
//!
//! Pure domain types for arterial blood-gas interpretation: measured
//! parameters and their plausibility bounds, the validated input record,
//! the extraction hand-off, and the structured diagnosis.
//! No I/O; this is the shared vocabulary of the GasoScan system.

pub mod error;
pub mod models;
