//! List coordinator - ordered item controllers with single-expansion.
//!
//! At most one item reports `is_expanded()` at any time. A click on a collapsed
//! item first collapses every sibling, then expands the target; a click on an
//! expanded item collapses it and leaves the rest alone.

use std::time::Duration;

use crate::content::ContentEntry;
use crate::core::event_bus::EventEmitter;
use crate::core::item::{AnimationConfig, ItemController, PanelHeightPolicy};
use crate::core::item_events::ItemClickedEvent;

/// Per-item handle given to widgets to request a toggle.
///
/// Holds the item index and an emitter, never the coordinator itself.
#[derive(Clone, Debug)]
pub struct ActivationHandle {
    index: usize,
    emitter: EventEmitter,
}

impl ActivationHandle {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Ask the coordinator to toggle this item.
    pub fn request_toggle(&self, content_height: f32) {
        self.emitter.emit(ItemClickedEvent {
            index: self.index,
            content_height,
        });
    }
}

/// Animation that finished during a `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub index: usize,
    pub expanded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ListCoordinator {
    items: Vec<ItemController>,
    config: AnimationConfig,
}

impl ListCoordinator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
        }
    }

    /// One controller per entry, in input order.
    pub fn from_entries(entries: impl IntoIterator<Item = ContentEntry>, config: AnimationConfig) -> Self {
        let mut list = Self::new(config);
        for entry in entries {
            list.push(ItemController::new(entry));
        }
        log::info!("ListCoordinator: {} items", list.len());
        list
    }

    pub fn push(&mut self, item: ItemController) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemController] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ItemController> {
        self.items.get(index)
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Apply new duration/policy. In-flight animations keep their parameters.
    pub fn set_animation(&mut self, duration: Duration, policy: PanelHeightPolicy) {
        self.config = AnimationConfig { duration, policy };
    }

    pub fn handle(&self, index: usize, emitter: EventEmitter) -> ActivationHandle {
        ActivationHandle { index, emitter }
    }

    /// Route a click to item `index`.
    pub fn click(&mut self, index: usize, content_height: f32, now: f64) {
        let Some(target) = self.items.get(index) else {
            log::warn!("Click on item {} ignored, list has {} items", index, self.items.len());
            return;
        };

        if target.is_expanded() {
            self.items[index].collapse(now, &self.config);
            return;
        }

        // Siblings first, so two panels are never expanding at once
        let config = self.config;
        for (i, item) in self.items.iter_mut().enumerate() {
            if i != index {
                item.collapse(now, &config);
            }
        }
        self.items[index].activate(content_height, now, &config);
    }

    pub fn collapse_all(&mut self, now: f64) {
        let config = self.config;
        for item in &mut self.items {
            item.collapse(now, &config);
        }
    }

    /// Advance all animations, returning the ones that settled.
    pub fn tick(&mut self, now: f64) -> Vec<Settled> {
        self.items
            .iter_mut()
            .enumerate()
            .filter_map(|(index, item)| item.tick(now).map(|expanded| Settled { index, expanded }))
            .collect()
    }

    /// Refit the settled expanded item to a new measured height.
    pub fn refit(&mut self, index: usize, content_height: f32) -> bool {
        let config = self.config;
        self.items
            .get_mut(index)
            .is_some_and(|item| item.refit(content_height, &config))
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_expanded())
    }

    pub fn expanded_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_expanded()).count()
    }

    pub fn is_animating(&self) -> bool {
        self.items.iter().any(|item| item.is_animating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_bus::{EventBus, downcast_event};
    use crate::core::item::ItemPhase;

    const DONE: f64 = 10.0;

    fn entries(labels: &[&str]) -> Vec<ContentEntry> {
        labels
            .iter()
            .map(|l| ContentEntry::new(*l, format!("desc {l}")))
            .collect()
    }

    fn list(labels: &[&str]) -> ListCoordinator {
        ListCoordinator::from_entries(entries(labels), AnimationConfig::default())
    }

    fn expanded_flags(list: &ListCoordinator) -> Vec<bool> {
        list.items().iter().map(|i| i.is_expanded()).collect()
    }

    #[test]
    fn test_from_entries_preserves_order() {
        let l = list(&["one", "two", "three", "four"]);
        assert_eq!(l.len(), 4);
        let labels: Vec<&str> = l.items().iter().map(|i| i.label()).collect();
        assert_eq!(labels, ["one", "two", "three", "four"]);
        assert_eq!(l.expanded_index(), None);
    }

    #[test]
    fn test_empty_list() {
        let mut l = list(&[]);
        assert!(l.is_empty());
        l.click(0, 10.0, 0.0);
        l.collapse_all(0.0);
        assert!(l.tick(1.0).is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut l = list(&["A", "B"]);

        l.click(0, 20.0, 0.0);
        assert_eq!(expanded_flags(&l), [true, false]);

        l.click(1, 20.0, 1.0);
        assert_eq!(expanded_flags(&l), [false, true]);

        l.click(1, 20.0, 2.0);
        assert_eq!(expanded_flags(&l), [false, false]);

        l.tick(DONE);
        assert!(l.items().iter().all(|i| i.phase() == ItemPhase::Collapsed));
        assert!(!l.is_animating());
    }

    #[test]
    fn test_click_expanded_leaves_others_unchanged() {
        let mut l = list(&["A", "B", "C"]);
        l.click(2, 30.0, 0.0);
        l.tick(1.0);
        let before: Vec<ItemPhase> = l.items().iter().map(|i| i.phase()).collect();

        l.click(2, 30.0, 2.0);
        assert_eq!(l.get(2).map(|i| i.phase()), Some(ItemPhase::Collapsing));
        assert_eq!(l.get(0).map(|i| i.phase()), Some(before[0]));
        assert_eq!(l.get(1).map(|i| i.phase()), Some(before[1]));
    }

    #[test]
    fn test_switch_collapses_sibling() {
        let mut l = list(&["A", "B", "C"]);
        l.click(0, 30.0, 0.0);
        l.tick(1.0);

        l.click(1, 30.0, 2.0);
        assert_eq!(l.get(0).map(|i| i.phase()), Some(ItemPhase::Collapsing));
        assert_eq!(l.get(1).map(|i| i.phase()), Some(ItemPhase::Expanding));
        assert_eq!(l.get(2).map(|i| i.phase()), Some(ItemPhase::Collapsed));

        let mut settled = l.tick(DONE);
        settled.sort_by_key(|s| s.index);
        assert_eq!(
            settled,
            [
                Settled { index: 0, expanded: false },
                Settled { index: 1, expanded: true },
            ]
        );
    }

    #[test]
    fn test_double_click_before_completion() {
        let mut l = list(&["A", "B"]);
        l.click(0, 40.0, 0.0);
        l.click(0, 40.0, 0.05);
        assert_eq!(expanded_flags(&l), [false, false]);

        l.tick(DONE);
        let a = &l.items()[0];
        assert_eq!(a.phase(), ItemPhase::Collapsed);
        assert_eq!(a.panel_height(DONE), 0.0);
    }

    #[test]
    fn test_at_most_one_expanded_under_click_sequences() {
        // Deterministic pseudo-random click storm with interleaved ticks
        let mut l = list(&["A", "B", "C", "D", "E"]);
        let mut seed: u32 = 0x2545_f491;
        let mut now = 0.0;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let index = (seed % 6) as usize; // includes one out-of-range index
            now += f64::from(seed % 300) / 1000.0;
            l.click(index, 25.0, now);
            assert!(l.expanded_count() <= 1);
            l.tick(now);
            assert!(l.expanded_count() <= 1);
        }
        l.tick(now + DONE);
        assert!(!l.is_animating());
        for item in l.items() {
            let h = item.panel_height(now + DONE);
            assert!(h == 0.0 || h == 35.0, "stuck height {h}");
        }
    }

    #[test]
    fn test_collapse_all() {
        let mut l = list(&["A", "B"]);
        l.click(1, 10.0, 0.0);
        l.collapse_all(0.1);
        assert_eq!(l.expanded_index(), None);
        assert_eq!(l.get(1).map(|i| i.phase()), Some(ItemPhase::Collapsing));
        assert_eq!(l.get(0).map(|i| i.phase()), Some(ItemPhase::Collapsed));
    }

    #[test]
    fn test_out_of_range_click_ignored() {
        let mut l = list(&["A"]);
        l.click(5, 10.0, 0.0);
        assert_eq!(l.expanded_index(), None);
    }

    #[test]
    fn test_handle_routes_through_bus() {
        let bus = EventBus::new();
        let mut l = list(&["A", "B"]);
        let handle = l.handle(1, bus.emitter());
        assert_eq!(handle.index(), 1);

        handle.request_toggle(42.0);
        for ev in bus.poll() {
            if let Some(e) = downcast_event::<ItemClickedEvent>(&ev) {
                l.click(e.index, e.content_height, 0.0);
            }
        }
        assert_eq!(l.expanded_index(), Some(1));
    }

    #[test]
    fn test_set_animation_applies_to_next_click() {
        let mut l = list(&["A"]);
        l.set_animation(Duration::from_millis(100), PanelHeightPolicy::Fixed { height: 77.0 });
        l.click(0, 5.0, 0.0);
        assert_eq!(l.tick(0.1), [Settled { index: 0, expanded: true }]);
        assert_eq!(l.items()[0].panel_height(0.1), 77.0);
    }

    #[test]
    fn test_refit_expanded() {
        let mut l = list(&["A"]);
        l.click(0, 20.0, 0.0);
        l.tick(DONE);
        assert!(l.refit(0, 50.0));
        assert_eq!(l.items()[0].panel_height(DONE), 60.0);
        assert!(!l.refit(3, 50.0));
    }
}
