use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileV1 {
    pub version: u8,
    #[serde(default)]
    pub devices: Vec<ProfileV1Device>,
}

// Control lists have no default: a missing list is a broken profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Device {
    pub name: String,
    pub buttons: Vec<ProfileV1Button>,
    pub sticks: Vec<ProfileV1Stick>,
    pub hats: Vec<ProfileV1Hat>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Button {
    pub name: String,
    pub index: u8,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub press_text: Option<String>,
    #[serde(default)]
    pub release_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Stick {
    pub name: String,
    pub horizontal_axis: u8,
    pub vertical_axis: u8,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub horizontal_prefix: Option<String>,
    #[serde(default)]
    pub vertical_prefix: Option<String>,
    #[serde(default)]
    pub readout: Option<String>, // raw | none | horizontal | vertical | magnitude
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Hat {
    pub name: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub press_text: Option<String>,
    #[serde(default)]
    pub release_text: Option<String>,
    #[serde(default)]
    pub up_text: Option<String>,
    #[serde(default)]
    pub down_text: Option<String>,
    #[serde(default)]
    pub left_text: Option<String>,
    #[serde(default)]
    pub right_text: Option<String>,
    // direction readings as [x, y]
    #[serde(default)]
    pub up: Option<(i8, i8)>,
    #[serde(default)]
    pub down: Option<(i8, i8)>,
    #[serde(default)]
    pub left: Option<(i8, i8)>,
    #[serde(default)]
    pub right: Option<(i8, i8)>,
}
