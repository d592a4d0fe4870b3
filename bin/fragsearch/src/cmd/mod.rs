//! Command implementations.

pub mod inspect;
pub mod query;

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};

/// Read an index file into memory.
pub(crate) fn read_index(index: &Path) -> Result<String> {
    fs::read_to_string(index).wrap_err_with(|| format!("Failed to read index {}", index.display()))
}
