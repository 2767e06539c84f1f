use serde::Deserialize;

use crate::{device::DeviceConfig, v1::ProfileV1, ProfileError};

/// Parse yaml profile into device configurations.
pub fn parse_profile(input: &str) -> Result<Vec<DeviceConfig>, ProfileError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let profile: ProfileV1 = serde_yaml::from_str(input)?;
            profile.into_devices()
        }
        _ => Err(ProfileError::UnsupportedVersion(version)),
    }
}

/// A profile with a version.
#[derive(Debug, Clone, Deserialize)]
struct VersionedProfile {
    version: u8,
}

/// Parse the version of yaml profile.
fn parse_version(input: &str) -> Result<u8, ProfileError> {
    let raw: VersionedProfile = serde_yaml::from_str(input)?;
    Ok(raw.version)
}

#[cfg(test)]
mod tests {
    use joyserial_input::HatValue;

    use super::*;

    const PAD: &str = r#"
version: 1
devices:
  - name: "Test Pad"
    buttons:
      - { name: A, index: 0, prefix: "$A,", press_text: pressed }
      - { name: B, index: 1, release_text: up }
    sticks:
      - { name: LEFT, prefix: "$L,", horizontal_axis: 0, vertical_axis: 1 }
      - name: RIGHT
        horizontal_axis: 3
        vertical_axis: 4
        horizontal_prefix: "x="
        readout: none
    hats:
      - name: DPAD
        prefix: "$D,"
        release_text: center
        up_text: north
        up: [0, -1]
"#;

    #[test]
    fn parse_version_valid() {
        assert_eq!(parse_version("version: 1\n").expect("version"), 1);
    }

    #[test]
    fn parse_profile_version1_minimal() {
        let devices = parse_profile("version: 1\n").expect("profile v1 should parse");
        assert!(devices.is_empty());
    }

    #[test]
    fn parse_profile_builds_controls() {
        let mut devices = parse_profile(PAD).expect("profile should parse");
        assert_eq!(devices.len(), 1);
        let device = &mut devices[0];
        assert_eq!(device.name(), "Test Pad");

        let buttons = device.buttons();
        assert_eq!(buttons[0].format(true).as_deref(), Some("$A,pressed"));
        assert_eq!(buttons[0].format(false), None);
        assert_eq!(buttons[1].format(false).as_deref(), Some("up"));

        let sticks = device.sticks();
        assert_eq!(sticks[0].format(0).unwrap().as_deref(), Some("$L,h,0.0"));
        assert!(sticks[1].readout().is_disabled());

        let pad = &mut device.hats_mut()[0];
        pad.set_value(HatValue::new(0, -1));
        assert_eq!(pad.format(true).as_deref(), Some("$D,north"));
        assert_eq!(pad.format(false).as_deref(), Some("$D,center"));
    }

    #[test]
    fn parse_profile_unsupported_version() {
        match parse_profile("version: 2\n") {
            Err(ProfileError::UnsupportedVersion(v)) => assert_eq!(v, 2),
            other => panic!("expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn parse_profile_yaml_error_when_version_missing() {
        assert!(matches!(
            parse_profile("devices: []\n"),
            Err(ProfileError::Yaml(_))
        ));
    }

    #[test]
    fn missing_control_list_is_fatal() {
        let yaml = r#"
version: 1
devices:
  - name: "No Hats"
    buttons: []
    sticks: []
"#;
        match parse_profile(yaml) {
            Err(ProfileError::Yaml(e)) => assert!(e.to_string().contains("hats")),
            other => panic!("expected missing field error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_device_names_are_rejected() {
        let yaml = r#"
version: 1
devices:
  - { name: Pad, buttons: [], sticks: [], hats: [] }
  - { name: Pad, buttons: [], sticks: [], hats: [] }
"#;
        assert!(matches!(
            parse_profile(yaml),
            Err(ProfileError::DuplicateDevice(name)) if name == "Pad"
        ));
    }

    #[test]
    fn invalid_device_is_rejected() {
        let yaml = r#"
version: 1
devices:
  - name: Pad
    buttons:
      - { name: A, index: 2 }
      - { name: B, index: 2 }
    sticks: []
    hats: []
"#;
        assert!(matches!(
            parse_profile(yaml),
            Err(ProfileError::DuplicateButton { index: 2, .. })
        ));
    }
}
