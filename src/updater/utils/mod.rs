//! Utility helpers shared across the updater pipeline.

pub mod fs;
