//! Config loading with command line overrides.

use std::{fs, path::Path};

use proofreg_config::Config;
use toml::value::{Table, Value};

use crate::{args::Args, errors::*};

/// Loads the config toml named by the args and applies all overrides on top.
pub(crate) fn get_config(args: &Args) -> Result<Config, InitError> {
    let mut config_toml = load_config_from_path(&args.config)?;

    let overrides = args
        .get_all_overrides()?
        .iter()
        .map(|o| parse_override(o))
        .collect::<Result<Vec<_>, ConfigError>>()?;

    let table = config_toml
        .as_table_mut()
        .ok_or(ConfigError::TraverseNonTableAt {
            key: "<root>".to_string(),
            path: "".to_string(),
        })?;

    for (path, val) in overrides {
        apply_override(&path, val, table)?;
    }

    Ok(config_toml.try_into::<Config>()?)
}

fn load_config_from_path(path: &Path) -> Result<Value, InitError> {
    let config_str = fs::read_to_string(path)?;
    Ok(toml::from_str(&config_str)?)
}

/// Splits `a.b.c=value` into its key path and a typed toml value.
///
/// Values that read as a bool, integer or float become one; everything else is a string.
pub(crate) fn parse_override(s: &str) -> Result<(String, Value), ConfigError> {
    let (path, raw) = s
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidOverride(s.to_string()))?;
    let path = path.trim();
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return Err(ConfigError::InvalidOverride(s.to_string()));
    }
    Ok((path.to_string(), parse_value(raw.trim())))
}

fn parse_value(raw: &str) -> Value {
    if let Ok(b) = raw.parse::<bool>() {
        Value::Boolean(b)
    } else if let Ok(i) = raw.parse::<i64>() {
        Value::Integer(i)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::Float(f)
    } else {
        Value::String(raw.to_string())
    }
}

/// Sets `val` at the dotted `path`, creating missing intermediate tables.
pub(crate) fn apply_override(path: &str, val: Value, table: &mut Table) -> Result<(), ConfigError> {
    let mut keys = path.split('.').peekable();
    let mut cur = table;
    let mut walked = String::new();

    while let Some(key) = keys.next() {
        if keys.peek().is_none() {
            cur.insert(key.to_string(), val);
            return Ok(());
        }

        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(key);

        cur = cur
            .entry(key.to_string())
            .or_insert_with(|| Value::Table(Table::new()))
            .as_table_mut()
            .ok_or_else(|| ConfigError::TraverseNonTableAt {
                key: key.to_string(),
                path: walked.clone(),
            })?;
    }

    Err(ConfigError::InvalidOverride(path.to_string()))
}
