//! Item controller - one label/description pair and its expand/collapse state.
//!
//! State machine:
//! ```text
//! Collapsed --activate--> Expanding --tick(done)--> Expanded
//! Expanded  --collapse--> Collapsing --tick(done)--> Collapsed
//! ```
//! Expanding/Collapsing can be reversed mid-flight; the new animation starts
//! from the currently interpolated height.

use std::time::Duration;

use crate::content::ContentEntry;
use crate::core::animation::{DEFAULT_DURATION_MS, HeightAnimation};

/// Height the panel grows to under the fixed policy (earliest layout).
pub const FIXED_PANEL_HEIGHT: f32 = 120.0;
/// Extra space below measured text so the last line is never clipped.
pub const DEFAULT_HEIGHT_BUFFER: f32 = 10.0;

/// How the expanded panel height is chosen.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PanelHeightPolicy {
    /// Always expand to the same height, regardless of text length
    Fixed { height: f32 },
    /// Expand to the measured text height plus a buffer
    Measured { buffer: f32 },
}

impl Default for PanelHeightPolicy {
    fn default() -> Self {
        PanelHeightPolicy::Measured {
            buffer: DEFAULT_HEIGHT_BUFFER,
        }
    }
}

impl PanelHeightPolicy {
    /// Expanded target height for content measuring `content_height`.
    pub fn target_height(&self, content_height: f32) -> f32 {
        match *self {
            PanelHeightPolicy::Fixed { height } => height.max(0.0),
            PanelHeightPolicy::Measured { buffer } => (content_height + buffer).max(0.0),
        }
    }
}

/// Animation parameters shared by every item in a list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub policy: PanelHeightPolicy,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            policy: PanelHeightPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

/// Owns one content entry and its panel animation.
#[derive(Debug, Clone)]
pub struct ItemController {
    entry: ContentEntry,
    phase: ItemPhase,
    /// Height at rest, or the height when the current animation started
    height: f32,
    animation: Option<HeightAnimation>,
}

impl ItemController {
    pub fn new(entry: ContentEntry) -> Self {
        Self {
            entry,
            phase: ItemPhase::Collapsed,
            height: 0.0,
            animation: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.entry.label
    }

    pub fn description(&self) -> &str {
        &self.entry.description
    }

    pub fn phase(&self) -> ItemPhase {
        self.phase
    }

    /// True while expanding or expanded.
    pub fn is_expanded(&self) -> bool {
        matches!(self.phase, ItemPhase::Expanding | ItemPhase::Expanded)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Panel height at `now`, interpolated while animating.
    pub fn panel_height(&self, now: f64) -> f32 {
        match &self.animation {
            Some(anim) => anim.value_at(now),
            None => self.height,
        }
    }

    /// Expand towards `content_height` (resolved through the policy).
    ///
    /// Called on an already expanded item this collapses it instead.
    pub fn activate(&mut self, content_height: f32, now: f64, config: &AnimationConfig) {
        if self.is_expanded() {
            self.collapse(now, config);
            return;
        }
        let target = config.policy.target_height(content_height);
        log::debug!("Expanding '{}' to {:.1}px", self.entry.label, target);
        self.animate_to(target, now, config.duration);
        self.phase = ItemPhase::Expanding;
    }

    /// Collapse to zero height. No-op when already collapsed or collapsing.
    pub fn collapse(&mut self, now: f64, config: &AnimationConfig) {
        if !self.is_expanded() {
            return;
        }
        log::debug!("Collapsing '{}'", self.entry.label);
        self.animate_to(0.0, now, config.duration);
        self.phase = ItemPhase::Collapsing;
    }

    /// Advance the animation. Returns `Some(expanded)` once, when it settles.
    pub fn tick(&mut self, now: f64) -> Option<bool> {
        let anim = self.animation.as_ref()?;
        if !anim.is_finished(now) {
            return None;
        }
        self.height = anim.target();
        self.animation = None;
        self.phase = match self.phase {
            ItemPhase::Expanding => ItemPhase::Expanded,
            ItemPhase::Collapsing => ItemPhase::Collapsed,
            settled => settled,
        };
        log::trace!("'{}' settled: {:?} at {:.1}px", self.entry.label, self.phase, self.height);
        Some(self.is_expanded())
    }

    /// Snap a settled, expanded panel to a new target height.
    ///
    /// Used when the measured content height changes (resize, font change).
    /// Returns true if the height changed.
    pub fn refit(&mut self, content_height: f32, config: &AnimationConfig) -> bool {
        if self.phase != ItemPhase::Expanded {
            return false;
        }
        let target = config.policy.target_height(content_height);
        if (target - self.height).abs() < 0.5 {
            return false;
        }
        self.height = target;
        true
    }

    fn animate_to(&mut self, target: f32, now: f64, duration: Duration) {
        let from = self.panel_height(now);
        self.height = from;
        self.animation = Some(HeightAnimation::start(from, target, now, duration));
    }
}
