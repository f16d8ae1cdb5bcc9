//! Profiles command implementation.

use anyhow::Result;

use crate::config::load_profiles;
use crate::display::{Format, print_json, print_profiles_table};
use std::collections::BTreeMap;
use std::path::Path;

/// List vendor profiles.
pub(crate) fn list_profiles(path: Option<&Path>, format: Format) -> Result<()> {
    let profiles = load_profiles(path)?;

    match format {
        Format::Text => print_profiles_table(&profiles),
        Format::Json => {
            let table: BTreeMap<_, _> = profiles.iter().collect();
            print_json(&table)?;
        }
    }

    Ok(())
}
