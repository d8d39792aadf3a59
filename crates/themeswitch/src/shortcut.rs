//! Keyboard shortcut matching.
//!
//! The toggle shortcut is Ctrl+Shift+D, or Cmd+Shift+D on macOS. With Shift
//! held the reported key is the uppercase `"D"`.

use std::str::FromStr;

/// A key press as delivered by a document-level `keydown` listener.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Error returned when a key combo string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKeyError {
    #[error("empty key combo")]
    Empty,
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Whether this press should toggle the theme.
    pub fn is_toggle_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && self.shift && self.key == "D"
    }
}

impl FromStr for KeyEvent {
    type Err = ParseKeyError;

    /// Parses combos such as `ctrl+shift+D` or `cmd+shift+d`.
    ///
    /// The last segment is the key; with `shift` present a single letter is
    /// upper-cased the way a browser reports it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = match parts.pop() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ParseKeyError::Empty),
        };

        let mut event = KeyEvent::default();
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => event.ctrl = true,
                "cmd" | "meta" | "super" => event.meta = true,
                "shift" => event.shift = true,
                "alt" | "option" => event.alt = true,
                _ => return Err(ParseKeyError::UnknownModifier(modifier.to_string())),
            }
        }

        event.key = if event.shift && key.chars().count() == 1 {
            key.to_uppercase()
        } else {
            key.to_string()
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_cmd_variants_match() {
        assert!(KeyEvent::new("D").ctrl().shift().is_toggle_shortcut());
        assert!(KeyEvent::new("D").meta().shift().is_toggle_shortcut());
    }

    #[test]
    fn test_missing_modifiers_do_not_match() {
        assert!(!KeyEvent::new("D").shift().is_toggle_shortcut());
        assert!(!KeyEvent::new("D").ctrl().is_toggle_shortcut());
        assert!(!KeyEvent::new("d").ctrl().shift().is_toggle_shortcut());
        assert!(!KeyEvent::new("E").ctrl().shift().is_toggle_shortcut());
    }

    #[test]
    fn test_parse_combo() {
        let event: KeyEvent = "ctrl+shift+d".parse().unwrap();
        assert_eq!(event, KeyEvent::new("D").ctrl().shift());
        assert!(event.is_toggle_shortcut());

        let event: KeyEvent = "Cmd + Shift + D".parse().unwrap();
        assert!(event.meta && event.is_toggle_shortcut());
    }

    #[test]
    fn test_parse_without_shift_keeps_case() {
        let event: KeyEvent = "ctrl+d".parse().unwrap();
        assert_eq!(event.key, "d");
        assert!(!event.is_toggle_shortcut());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<KeyEvent>(), Err(ParseKeyError::Empty));
        assert_eq!("ctrl+".parse::<KeyEvent>(), Err(ParseKeyError::Empty));
        assert_eq!(
            "hyper+d".parse::<KeyEvent>(),
            Err(ParseKeyError::UnknownModifier("hyper".into()))
        );
    }
}
