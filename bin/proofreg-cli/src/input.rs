//! Reading proof content from command line arguments.

use std::{fs, path::PathBuf};

use proofreg_cli_common::errors::{DisplayableError, DisplayedError};

/// Loads proof bytes from exactly one of a file path or a hex string.
pub fn read_proof(file: Option<&PathBuf>, hex: Option<&str>) -> Result<Vec<u8>, DisplayedError> {
    match (file, hex) {
        (Some(path), None) => fs::read(path).user_error(format!(
            "Failed to read proof file '{}'",
            path.display()
        )),
        (None, Some(s)) => decode_hex(s),
        (Some(_), Some(_)) => Err(DisplayedError::user(
            "Pass either a proof file or proof hex, not both",
        )),
        (None, None) => Err(DisplayedError::user("Missing proof: pass a file or hex bytes")),
    }
}

/// Decodes hex with or without a `0x` prefix.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, DisplayedError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).user_error(format!("Invalid hex '{s}'"))
}
