use joyserial_input::{ButtonIndex, InputEvent};

use super::{ControlError, Handler};

/// A single push button.
///
/// Output is `prefix + press_text` on press and `prefix + release_text` on
/// release; a phase without text produces nothing.
#[derive(Debug)]
pub struct ButtonControl {
    index: ButtonIndex,
    name: Box<str>,
    prefix: Box<str>,
    value: Option<bool>,
    press_text: Option<Box<str>>,
    release_text: Option<Box<str>>,
    on_press: Option<Handler>,
    on_release: Option<Handler>,
}

impl ButtonControl {
    pub fn new(index: ButtonIndex, name: &str) -> Self {
        Self {
            index,
            name: name.into(),
            prefix: "".into(),
            value: None,
            press_text: None,
            release_text: None,
            on_press: None,
            on_release: None,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_press_text(mut self, text: &str) -> Self {
        self.press_text = Some(text.into());
        self
    }

    pub fn with_release_text(mut self, text: &str) -> Self {
        self.release_text = Some(text.into());
        self
    }

    pub fn with_on_press(mut self, handler: Handler) -> Self {
        self.on_press = Some(handler);
        self
    }

    pub fn with_on_release(mut self, handler: Handler) -> Self {
        self.on_release = Some(handler);
        self
    }

    pub fn index(&self) -> ButtonIndex {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    /// Whether this button has text for the given phase.
    pub fn prints_on(&self, on_press: bool) -> bool {
        if on_press {
            self.press_text.is_some()
        } else {
            self.release_text.is_some()
        }
    }

    pub fn set_value(&mut self, pressed: bool) {
        self.value = Some(pressed);
    }

    /// Runs the press or release handler matching the event.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<(), ControlError> {
        let handler = match event {
            InputEvent::ButtonDown { .. } => self.on_press.as_mut(),
            InputEvent::ButtonUp { .. } => self.on_release.as_mut(),
            _ => None,
        };
        match handler {
            Some(handler) => handler.call(&self.name, event),
            None => Ok(()),
        }
    }

    pub fn format(&self, on_press: bool) -> Option<String> {
        let text = if on_press {
            self.press_text.as_deref()?
        } else {
            self.release_text.as_deref()?
        };
        Some(format!("{}{text}", self.prefix))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn triangle() -> ButtonControl {
        ButtonControl::new(0, "TRIANGLE")
            .with_prefix("$TRIANGLE,")
            .with_press_text("pressed")
            .with_release_text("released")
    }

    #[test]
    fn formats_prefix_and_phase_text() {
        let button = triangle();
        assert_eq!(button.format(true).as_deref(), Some("$TRIANGLE,pressed"));
        assert_eq!(button.format(false).as_deref(), Some("$TRIANGLE,released"));
    }

    #[test]
    fn phase_without_text_formats_to_none() {
        let press_only = ButtonControl::new(1, "A").with_press_text("down");
        assert_eq!(press_only.format(true).as_deref(), Some("down"));
        assert_eq!(press_only.format(false), None);
        assert!(press_only.prints_on(true));
        assert!(!press_only.prints_on(false));

        let release_only = ButtonControl::new(2, "B").with_release_text("up");
        assert_eq!(release_only.format(true), None);
        assert_eq!(release_only.format(false).as_deref(), Some("up"));
    }

    #[test]
    fn handlers_follow_event_phase() {
        let presses = Arc::new(AtomicUsize::new(0));
        let releases = Arc::new(AtomicUsize::new(0));
        let (p, r) = (presses.clone(), releases.clone());
        let mut button = triangle()
            .with_on_press(Handler::from_fn(move |_| {
                p.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }))
            .with_on_release(Handler::from_fn(move |_| {
                r.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }));

        button.handle_event(&InputEvent::ButtonDown { button: 0 }).unwrap();
        button.handle_event(&InputEvent::ButtonDown { button: 0 }).unwrap();
        button.handle_event(&InputEvent::ButtonUp { button: 0 }).unwrap();
        button
            .handle_event(&InputEvent::AxisMotion { axis: 0, value: 0.5 })
            .unwrap();

        assert_eq!(presses.load(Ordering::SeqCst), 2);
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_failure_names_the_control() {
        let mut button =
            triangle().with_on_press(Handler::from_fn(|_| Err("boom".into())));
        let err = button
            .handle_event(&InputEvent::ButtonDown { button: 0 })
            .unwrap_err();
        assert_eq!(err.to_string(), "handler of TRIANGLE failed: boom");
        assert!(!err.is_unrelated_axis());
    }

    #[test]
    fn set_value_stores_state() {
        let mut button = triangle();
        assert_eq!(button.value(), None);
        button.set_value(true);
        assert_eq!(button.value(), Some(true));
    }
}
