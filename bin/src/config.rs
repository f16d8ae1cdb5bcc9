//! Vendor profile resolution for the CLI.

use anyhow::{Context, Result};
use cantina_lib::VendorProfiles;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the user's vendor profile table.
const PROFILES_FILE: &str = "vendors.json";

/// Returns the path of the user's vendor profile table, if a config
/// directory can be determined.
pub(crate) fn user_profiles_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cantina").map(|dirs| dirs.config_dir().join(PROFILES_FILE))
}

/// Loads vendor profiles.
///
/// An explicit path wins, then the user's profile table if it exists, then
/// the built-in profiles.
pub(crate) fn load_profiles(explicit: Option<&Path>) -> Result<VendorProfiles> {
    load_profiles_from(explicit, user_profiles_path().as_deref())
}

fn load_profiles_from(explicit: Option<&Path>, user: Option<&Path>) -> Result<VendorProfiles> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading vendor profiles");
        return VendorProfiles::from_path(path)
            .with_context(|| format!("Failed to load vendor profiles from {}", path.display()));
    }

    if let Some(path) = user.filter(|path| path.is_file()) {
        info!(path = %path.display(), "loading user vendor profiles");
        return VendorProfiles::from_path(path)
            .with_context(|| format!("Failed to load vendor profiles from {}", path.display()));
    }

    debug!("using built-in vendor profiles");
    Ok(VendorProfiles::global().clone())
}
