//! Per-vendor engine configurations.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use cantina_types::ConfigError;
use serde::Deserialize;

use crate::config::EngineConfig;

/// Embedded JSON table of vendor profiles.
const VENDOR_PROFILES_JSON: &str = include_str!("../data/vendor_profiles.json");

/// Name of the profile used for vendors without their own entry.
pub const DEFAULT_PROFILE: &str = "default";

/// Static profile table instance.
static PROFILES: OnceLock<VendorProfiles> = OnceLock::new();

/// Raw JSON structure for deserialization.
#[derive(Debug, Deserialize)]
struct RawVendorProfiles {
    profiles: BTreeMap<String, EngineConfig>,
}

/// Engine configurations keyed by vendor id.
///
/// Every table carries a [`DEFAULT_PROFILE`] entry, so resolving a vendor
/// always yields a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorProfiles {
    profiles: BTreeMap<String, EngineConfig>,
    default: EngineConfig,
}

impl VendorProfiles {
    /// Returns the global profile table.
    ///
    /// This lazily initializes the table from embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        PROFILES.get_or_init(|| {
            Self::from_json(VENDOR_PROFILES_JSON)
                .expect("embedded vendor_profiles.json should be valid")
        })
    }

    /// Creates a profile table from a JSON string.
    ///
    /// Profiles may list only the settings they change; the rest take the
    /// engine defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, a profile fails validation,
    /// or the `default` profile is missing.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawVendorProfiles = serde_json::from_str(json)?;
        Self::from_map(raw.profiles)
    }

    /// Loads a profile table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are
    /// rejected by [`VendorProfiles::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Creates a profile table from already validated configurations.
    ///
    /// # Errors
    ///
    /// Returns an error if the `default` profile is missing.
    pub fn from_map(profiles: BTreeMap<String, EngineConfig>) -> Result<Self, ConfigError> {
        let default = profiles
            .get(DEFAULT_PROFILE)
            .cloned()
            .ok_or(ConfigError::MissingDefaultProfile)?;
        Ok(Self { profiles, default })
    }

    /// Returns the profile registered for `vendor_id`, if any.
    #[must_use]
    pub fn get(&self, vendor_id: &str) -> Option<&EngineConfig> {
        self.profiles.get(vendor_id)
    }

    /// Returns the default profile.
    #[must_use]
    pub const fn default_profile(&self) -> &EngineConfig {
        &self.default
    }

    /// Returns the profile for `vendor_id`, falling back to the default.
    #[must_use]
    pub fn resolve(&self, vendor_id: Option<&str>) -> &EngineConfig {
        vendor_id
            .and_then(|id| self.get(id))
            .unwrap_or(&self.default)
    }

    /// Returns all vendor ids with their profiles, sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EngineConfig)> {
        self.profiles.iter().map(|(id, config)| (id.as_str(), config))
    }

    /// Returns the number of profiles, including the default.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if the table holds no profiles.
    ///
    /// Always false for a constructed table, which holds at least the default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for VendorProfiles {
    fn default() -> Self {
        Self::global().clone()
    }
}
