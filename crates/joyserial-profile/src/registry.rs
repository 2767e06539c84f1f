use std::path::Path;

use ahash::AHashMap;

use crate::{builtin, device::DeviceConfig, parse::parse_profile, ProfileError};

/// Device configurations keyed by the name the hardware reports.
#[derive(Debug, Default)]
pub struct Registry {
    devices: AHashMap<Box<str>, DeviceConfig>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configurations compiled into the binary.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for config in builtin::all() {
            registry.devices.insert(config.name().into(), config);
        }
        registry
    }

    /// Parses a yaml profile.
    pub fn from_yaml(input: &str) -> Result<Self, ProfileError> {
        let mut registry = Self::new();
        for config in parse_profile(input)? {
            registry.devices.insert(config.name().into(), config);
        }
        Ok(registry)
    }

    /// Reads and parses a yaml profile file.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_yaml(&input)
    }

    /// Adds a configuration, returning the one it replaced.
    pub fn insert(&mut self, config: DeviceConfig) -> Result<Option<DeviceConfig>, ProfileError> {
        config.validate()?;
        Ok(self.devices.insert(config.name().into(), config))
    }

    /// Merges `other` into this registry; its entries win on name clashes.
    pub fn extend(&mut self, other: Registry) {
        self.devices.extend(other.devices);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.devices.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Sorted device names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.devices.keys().map(|name| &**name).collect();
        names.sort_unstable();
        names
    }

    /// Takes the configuration for `name` out of the registry.
    pub fn select(mut self, name: &str) -> Result<DeviceConfig, ProfileError> {
        self.devices
            .remove(name)
            .ok_or_else(|| ProfileError::DeviceNotSupported(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ButtonControl, DEFAULT_DEVICE_NAME};

    #[test]
    fn builtin_contains_default_device() {
        let registry = Registry::builtin();
        assert!(registry.contains(DEFAULT_DEVICE_NAME));
        assert_eq!(registry.names(), vec![DEFAULT_DEVICE_NAME]);
        let config = registry.select(DEFAULT_DEVICE_NAME).expect("default device");
        assert_eq!(config.name(), DEFAULT_DEVICE_NAME);
    }

    #[test]
    fn select_unknown_device_fails() {
        match Registry::builtin().select("Nope Pad") {
            Err(ProfileError::DeviceNotSupported(name)) => assert_eq!(name, "Nope Pad"),
            other => panic!("expected DeviceNotSupported, got {other:?}"),
        }
    }

    #[test]
    fn profile_entries_override_builtin() {
        let yaml = format!(
            "version: 1\ndevices:\n  - {{ name: \"{DEFAULT_DEVICE_NAME}\", buttons: [], sticks: [], hats: [] }}\n  - {{ name: Other, buttons: [], sticks: [], hats: [] }}\n"
        );
        let mut registry = Registry::builtin();
        registry.extend(Registry::from_yaml(&yaml).expect("profile"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec![DEFAULT_DEVICE_NAME, "Other"]);
        let config = registry.select(DEFAULT_DEVICE_NAME).unwrap();
        assert!(config.buttons().is_empty());
    }

    #[test]
    fn insert_validates_and_replaces() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        let bad = DeviceConfig::new("pad")
            .with_button(ButtonControl::new(0, "A"))
            .with_button(ButtonControl::new(0, "B"));
        assert!(registry.insert(bad).is_err());

        let first = DeviceConfig::new("pad").with_button(ButtonControl::new(0, "A"));
        assert!(registry.insert(first).unwrap().is_none());
        let replaced = registry.insert(DeviceConfig::new("pad")).unwrap();
        assert_eq!(replaced.map(|c| c.buttons().len()), Some(1));
    }

    #[test]
    fn load_reports_missing_file() {
        let missing = Path::new("/nonexistent/joyserial/profile.yaml");
        assert!(matches!(Registry::load(missing), Err(ProfileError::Io(_))));
    }
}
