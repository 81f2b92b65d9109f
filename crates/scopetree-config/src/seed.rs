//! Mapping from TOML tables onto context trees.
//!
//! Sub-tables become child contexts. Strings are stored verbatim; integers,
//! floats, booleans and datetimes are stored in their TOML textual form.
//! Arrays have no counterpart in a context and are rejected.

use scopetree_core::{Context, DELIMITER};
use toml::{Table, Value};
use tracing::trace;

use crate::ConfigError;

/// Check that every name in `table` is acceptable to a [`Context`].
///
/// `path` is the dotted location of `table`, used in error messages.
pub fn validate_table(table: &Table, path: &str) -> Result<(), String> {
    for (name, value) in table {
        let here = format!("{path}.{name}");
        if name.is_empty() {
            return Err(format!("{path}: names must not be empty"));
        }
        if name.contains(DELIMITER) {
            return Err(format!("{here}: names must not contain '{DELIMITER}'"));
        }
        match value {
            Value::Table(inner) => validate_table(inner, &here)?,
            Value::Array(_) => return Err(format!("{here}: arrays are not supported")),
            _ => {}
        }
    }
    Ok(())
}

/// Copy `table` into `context` using only `put` and `create_child`.
///
/// `path` is the dotted location of `table`, used in error messages.
pub fn populate(context: &mut Context, table: &Table, path: &str) -> Result<(), ConfigError> {
    for (name, value) in table {
        match value {
            Value::Table(inner) => {
                let child = context.create_child(name.as_str())?;
                populate(child, inner, &format!("{path}.{name}"))?;
            }
            Value::Array(_) => {
                return Err(ConfigError::Validation(format!(
                    "{path}.{name}: arrays are not supported"
                )));
            }
            Value::String(text) => {
                context.put(name.as_str(), text.as_str())?;
            }
            scalar => {
                context.put(name.as_str(), scalar.to_string())?;
            }
        }
        trace!(member = %name, "seeded member");
    }
    Ok(())
}
