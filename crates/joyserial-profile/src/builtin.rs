use crate::control::{AxisPairControl, ButtonControl, DpadControl};
use crate::device::DeviceConfig;

/// Reported name of the default controller.
pub const DEFAULT_DEVICE_NAME: &str = "MY-POWER CO.,LTD. 2In1 USB Joystick";

const PRESSED: &str = "pressed";
const RELEASED: &str = "released";

fn button(index: u8, name: &str, prefix: &str) -> ButtonControl {
    ButtonControl::new(index, name)
        .with_prefix(prefix)
        .with_press_text(PRESSED)
        .with_release_text(RELEASED)
}

/// Every built-in device configuration.
pub(crate) fn all() -> Vec<DeviceConfig> {
    vec![my_power_2in1()]
}

/// PlayStation-style two-in-one USB pad.
///
/// ```text
/// $TRIANGLE,pressed     $LEFT_JOY,h,-0.0516     $DPAD,up
/// ```
pub fn my_power_2in1() -> DeviceConfig {
    DeviceConfig::new(DEFAULT_DEVICE_NAME)
        // symbol buttons
        .with_button(button(0, "TRIANGLE", "$TRIANGLE,"))
        .with_button(button(1, "CIRCLE", "$CIRCLE,"))
        .with_button(button(2, "CROSS", "$CROSS,"))
        // Misspelled prefix is part of the wire format.
        .with_button(button(3, "SQUARE", "$SQAURE,"))
        // shoulders and triggers
        .with_button(button(5, "R_TOP", "$RIGHT_TOP,"))
        .with_button(button(7, "R_TRIG", "$RIGHT_TRIG,"))
        .with_button(button(4, "L_TOP", "$LEFT_TOP,"))
        .with_button(button(6, "L_TRIG", "$LEFT_TRIG,"))
        .with_button(button(8, "SELECT", "$SELECT,"))
        .with_button(button(9, "START", "$START,"))
        // stick clicks
        .with_button(button(10, "L_JOY_BUTTON", "$LEFT_JOY_BUTTON,"))
        // Shares the left stick-click prefix.
        .with_button(button(11, "R_JOY_BUTTON", "$LEFT_JOY_BUTTON,"))
        .with_stick(AxisPairControl::new("LEFT_JOYSTICK", 0, 1).with_prefix("$LEFT_JOY,"))
        .with_stick(AxisPairControl::new("RIGHT_JOYSTICK", 2, 3).with_prefix("$RIGHT_JOY,"))
        .with_hat(DpadControl::new("DPAD").with_prefix("$DPAD,"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_devices_are_valid() {
        for config in all() {
            config.validate().expect("built-in config must be valid");
        }
    }

    #[test]
    fn default_device_layout() {
        let config = my_power_2in1();
        assert_eq!(config.name(), DEFAULT_DEVICE_NAME);
        assert_eq!(config.buttons().len(), 12);
        assert_eq!(config.sticks().len(), 2);
        assert_eq!(config.hats().len(), 1);
        assert_eq!(
            config.buttons()[0].format(true).as_deref(),
            Some("$TRIANGLE,pressed")
        );
    }

    #[test]
    fn default_device_lines() {
        let config = my_power_2in1();
        let lines: Vec<(u8, String)> = config
            .buttons()
            .iter()
            .map(|b| (b.index(), b.format(true).unwrap()))
            .collect();
        assert_eq!(
            lines,
            vec![
                (0, "$TRIANGLE,pressed".to_string()),
                (1, "$CIRCLE,pressed".to_string()),
                (2, "$CROSS,pressed".to_string()),
                (3, "$SQAURE,pressed".to_string()),
                (5, "$RIGHT_TOP,pressed".to_string()),
                (7, "$RIGHT_TRIG,pressed".to_string()),
                (4, "$LEFT_TOP,pressed".to_string()),
                (6, "$LEFT_TRIG,pressed".to_string()),
                (8, "$SELECT,pressed".to_string()),
                (9, "$START,pressed".to_string()),
                (10, "$LEFT_JOY_BUTTON,pressed".to_string()),
                (11, "$LEFT_JOY_BUTTON,pressed".to_string()),
            ]
        );
        for button in config.buttons() {
            assert!(button.format(false).unwrap().ends_with(",released"));
        }
    }
}
