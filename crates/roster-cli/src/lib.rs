//! CLI library components for the attendance reconciler.

pub mod logging;
