//! Preferences events

/// Toggle the preferences window (F12).
#[derive(Clone, Debug, PartialEq)]
pub struct TogglePrefsEvent;
