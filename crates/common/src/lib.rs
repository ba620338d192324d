//! Utilities shared by the proof registry binaries.

pub mod logging;
