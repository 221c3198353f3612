//! Item events - emitted by list widgets and the coordinator.

/// User clicked the button of item `index`.
///
/// `content_height` is the measured height of the description text at the
/// current panel width, used as the expand target under the measured policy.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemClickedEvent {
    pub index: usize,
    pub content_height: f32,
}

/// Collapse every panel (Esc).
#[derive(Clone, Debug, PartialEq)]
pub struct CollapseAllEvent;

/// An item's animation finished; the surrounding layout must be re-measured.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSettledEvent {
    pub index: usize,
    pub expanded: bool,
}
