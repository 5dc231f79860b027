//! Per-field value generators shared by the three provider routines.

pub mod numeric;
pub mod pattern;
