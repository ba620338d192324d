//! Error reporting shared by the command line tools.

pub mod errors;
